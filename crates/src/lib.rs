//! sash - terminal directory of the Sección Amarilla de Super Heroes
//!
//! Library crate exposing the record model, the record sources and the
//! interactive screen used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod source;

pub mod ui;

pub use error::{ConfigError, FetchError};
pub use record::Record;
pub use source::{HttpRecordSource, RecordSource, StaticRecordSource};
