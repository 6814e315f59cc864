//! Inspect and generate the "オフィス" sample worksheet.
//!
//! [`writer`] builds a sheet with a header and one bordered, filled and merged
//! row per item; [`inspector`] reads the same layout back cell by cell.

pub mod cli;
pub mod coordinate;
pub mod error;
pub mod inspector;
pub mod layout;
pub mod reader;
pub mod writer;

pub use error::{Error, ErrorKind, Result};
