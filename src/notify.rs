use crate::result;

pub trait Notifier {
    fn notify(&self, text: &str) -> result::LizNextResult<()>;
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, text: &str) -> result::LizNextResult<()> {
        println!("{}", text);
        return Ok(());
    }
}

#[cfg(windows)]
pub struct DialogNotifier;

#[cfg(windows)]
impl Notifier for DialogNotifier {
    fn notify(&self, text: &str) -> result::LizNextResult<()> {
        use winsafe::prelude::*;

        winsafe::HWND::NULL
            .MessageBox(text, "Next trains", winsafe::co::MB::ICONINFORMATION)
            .map_err(|err| result::make_error(&format!("MessageBox failed: {}", err)))?;
        return Ok(());
    }
}

pub fn for_flags(use_dialog: bool) -> Box<dyn Notifier> {
    if use_dialog {
        #[cfg(windows)]
        {
            return Box::new(DialogNotifier{});
        }
        #[cfg(not(windows))]
        {
            warn!("--dialog is only supported on Windows; printing to the console instead");
        }
    }
    return Box::new(ConsoleNotifier{});
}
