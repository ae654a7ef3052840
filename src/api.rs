//! Public classification entry points.

use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::{MagicFlags, SniffConfig};
use crate::error::Result;
use crate::io::read_prefix;
use crate::rules::{builtin, RuleSet, Verdict};
use crate::text::classify_text;

/// Result of classifying one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Classification {
    /// A rule or the text fallback named a type. `consumed` is the length of
    /// the winning top-level test, or 0 for the text fallback.
    Recognized { mime: &'static str, consumed: usize },
    /// Not a known type and not plain text.
    NotRecognized,
    /// Not recognized, but a longer sample might be.
    NeedMoreData,
}

impl Classification {
    /// Integer status: positive when recognized, 0 when not, negative when
    /// more data might help.
    pub fn status(&self) -> i32 {
        match self {
            Classification::Recognized { consumed, .. } => {
                i32::try_from(*consumed).unwrap_or(i32::MAX).max(1)
            }
            Classification::NotRecognized => 0,
            Classification::NeedMoreData => -1,
        }
    }

    pub fn mime(&self) -> Option<&'static str> {
        match self {
            Classification::Recognized { mime, .. } => Some(mime),
            _ => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Classification::Recognized { .. })
    }
}

/// Classify `buf` against the builtin rules.
pub fn get_mime_type(buf: &[u8], flags: MagicFlags) -> Classification {
    MimeSniffer::with_config(SniffConfig::from(flags)).sniff(buf)
}

/// A rule set paired with the options used to classify against it.
#[derive(Debug, Clone)]
pub struct MimeSniffer<'r> {
    rules: &'r RuleSet<'r>,
    config: SniffConfig,
}

impl Default for MimeSniffer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl MimeSniffer<'static> {
    /// The builtin rules with default options.
    pub fn new() -> Self {
        Self::with_config(SniffConfig::default())
    }

    pub fn with_config(config: SniffConfig) -> Self {
        Self {
            rules: &builtin::RULES,
            config,
        }
    }
}

impl<'r> MimeSniffer<'r> {
    pub fn with_rules(rules: &'r RuleSet<'r>, config: SniffConfig) -> Self {
        Self { rules, config }
    }

    pub fn config(&self) -> &SniffConfig {
        &self.config
    }

    pub fn rules(&self) -> &'r RuleSet<'r> {
        self.rules
    }

    pub fn sniff(&self, buf: &[u8]) -> Classification {
        if buf.is_empty() {
            debug!("empty buffer");
            return Classification::NeedMoreData;
        }

        let result = match self.rules.evaluate(buf) {
            Verdict::Matched { mime, consumed } => Classification::Recognized { mime, consumed },
            Verdict::ExhaustedNoData => Classification::NotRecognized,
            Verdict::ExhaustedInsufficient if !self.config.try_text => {
                Classification::NeedMoreData
            }
            Verdict::ExhaustedInsufficient => {
                match classify_text(buf, self.config.text_scan_limit) {
                    Some(mime) => Classification::Recognized { mime, consumed: 0 },
                    None => Classification::NotRecognized,
                }
            }
        };

        debug!(len = buf.len(), status = result.status(), mime = ?result.mime(), "classified");
        result
    }

    /// Classify independent buffers in parallel. Output order follows input.
    pub fn sniff_many<B>(&self, bufs: &[B]) -> Vec<Classification>
    where
        B: AsRef<[u8]> + Sync,
    {
        bufs.par_iter().map(|b| self.sniff(b.as_ref())).collect()
    }

    /// Classify the leading `max_read_bytes` of a file.
    pub fn sniff_path<P: AsRef<Path>>(&self, path: P) -> Result<Classification> {
        let buf = read_prefix(path, self.config.max_read_bytes)?;
        Ok(self.sniff(&buf))
    }
}
