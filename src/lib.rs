//! Show your testing pride.
//!
//! Colorizes test runner output: passing dots become rainbow stars, failures
//! and errors get a red background, and "Finished tests" turns into a
//! rainbow "Fabulous tests".
//!
//! ```
//! use pride::output::{OutputSink, Palette, PrideOutput};
//!
//! let mut out = PrideOutput::new(Vec::new(), Palette::basic());
//! out.print_token(".")?;
//! out.print_token("F")?;
//! assert_eq!(
//!     out.into_inner(),
//!     b"\x1b[31m*\x1b[0m\x1b[41m\x1b[37mF\x1b[0m".to_vec()
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod test;
pub mod utils;
