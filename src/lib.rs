//! Content-based MIME type detection from magic signatures.
//!
//! ```
//! use magic_mime::{get_mime_type, MagicFlags};
//!
//! let result = get_mime_type(b"GIF89a", MagicFlags::empty());
//! assert_eq!(result.mime(), Some("image/gif"));
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod matchers;
pub mod rules;
pub mod text;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use api::{get_mime_type, Classification, MimeSniffer};
pub use config::{MagicFlags, SniffConfig, MAX_READ_BYTES, TEXT_SCAN_LIMIT};
pub use error::{MagicError, Result};
pub use rules::{RuleNode, RuleSet, Verdict};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn magic_mime(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(m)
}
