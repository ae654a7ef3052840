//! Classifier configuration.
//!
//! `MagicFlags` is the compact bit-set accepted by [`crate::get_mime_type`];
//! `SniffConfig` is the serializable form used by [`crate::MimeSniffer`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{MagicError, Result};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// Number of leading bytes the plain-text fallback inspects.
pub const TEXT_SCAN_LIMIT: usize = 1024;
/// Upper bound on bytes read from a file before classification.
pub const MAX_READ_BYTES: usize = 65536;

bitflags! {
    /// Caller flags for a single classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MagicFlags: u32 {
        /// Do not run the plain-text fallback.
        const NO_TRY_TEXT = 1;
    }
}

/// Configuration for a [`crate::MimeSniffer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "python-ext", pyclass)]
#[serde(default)]
pub struct SniffConfig {
    /// Run the plain-text fallback when the rules run out of data.
    pub try_text: bool,
    /// Bytes examined by the plain-text fallback.
    pub text_scan_limit: usize,
    /// Bytes read from a file by `sniff_path`.
    pub max_read_bytes: usize,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            try_text: true,
            text_scan_limit: TEXT_SCAN_LIMIT,
            max_read_bytes: MAX_READ_BYTES,
        }
    }
}

impl SniffConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: SniffConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject limits that would make classification meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.text_scan_limit == 0 {
            return Err(MagicError::InvalidConfig(
                "text_scan_limit must be non-zero".to_string(),
            ));
        }
        if self.max_read_bytes == 0 {
            return Err(MagicError::InvalidConfig(
                "max_read_bytes must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The equivalent flag set for this configuration.
    pub fn flags(&self) -> MagicFlags {
        if self.try_text {
            MagicFlags::empty()
        } else {
            MagicFlags::NO_TRY_TEXT
        }
    }
}

impl From<MagicFlags> for SniffConfig {
    fn from(flags: MagicFlags) -> Self {
        Self {
            try_text: !flags.contains(MagicFlags::NO_TRY_TEXT),
            ..Self::default()
        }
    }
}

#[cfg(feature = "python-ext")]
#[pymethods]
impl SniffConfig {
    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    #[getter]
    pub fn get_try_text(&self) -> bool {
        self.try_text
    }

    #[setter]
    pub fn set_try_text(&mut self, v: bool) {
        self.try_text = v;
    }

    #[getter]
    pub fn get_max_read_bytes(&self) -> usize {
        self.max_read_bytes
    }

    #[setter]
    pub fn set_max_read_bytes(&mut self, v: usize) {
        self.max_read_bytes = v;
    }
}
