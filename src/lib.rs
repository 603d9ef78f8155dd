//! Downloads the page images of a Brown Digital Repository compound object
//! (a scanned book, a letter, ...) into a directory, one `NNNN.jpg` per page.

mod config;
pub mod download;
mod error;
pub mod logging;
mod macros;
pub mod parse;
pub mod process;
pub mod progress;
pub mod request;

pub use config::{Config, DEFAULT_API_BASE, DEFAULT_IMAGE_BASE, DEFAULT_IMAGE_SIZE};
pub use error::{Error, Result, ValidationError};
pub use process::{process_item, Summary};
pub use progress::{PageEvent, ProgressReporter};
