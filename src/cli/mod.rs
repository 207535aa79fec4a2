pub mod demo;
pub mod filter;
pub mod output_format;
pub mod palette;
pub mod run;

use crate::error::{Error, Result};

/// Treat a closed stdout (e.g. `pride filter | head`) as a clean exit
pub(crate) fn ignore_broken_pipe(result: Result<()>) -> Result<()> {
    match result {
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed early");
            Ok(())
        }
        other => other,
    }
}
