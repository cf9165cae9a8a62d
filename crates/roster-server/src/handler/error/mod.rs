//! Handler-level errors and their HTTP representations.

mod http_error;
mod pg_error;

pub use http_error::{Error, ErrorKind, Result};
