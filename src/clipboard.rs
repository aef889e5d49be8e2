use crate::error::Result;

/// Somewhere a password can be copied to.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The clipboard of the desktop session, through arboard.
#[derive(Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut ctx = arboard::Clipboard::new()?;
        ctx.set_text(text.to_owned())?;
        Ok(())
    }
}
