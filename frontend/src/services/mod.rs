//! Browser services used by the components.
//!
//! - [`file_reader`] - file to data URL decoding
//! - [`upload`] - upload rules checked before posting

pub mod file_reader;
pub mod upload;

pub use file_reader::*;
pub use upload::*;
