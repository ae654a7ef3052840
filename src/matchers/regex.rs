//! Regular-expression search over a bounded window.
//!
//! Patterns are POSIX-extended style and newline sensitive. The window
//! starts at the cursor, is capped by the rule's limit and ends at the first
//! NUL byte, so text rules never see binary tails.

use std::collections::HashMap;
use std::sync::RwLock;

use bitflags::bitflags;
use once_cell::sync::Lazy;
use regex::bytes::{Regex, RegexBuilder};
use tracing::{debug, warn};

use super::Outcome;

bitflags! {
    /// Options for [`regex_search`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RegexFlags: u8 {
        /// Case-insensitive matching.
        const NO_CASE = 1 << 0;
        /// Leave the cursor at the start of the match instead of its end.
        const BEGIN = 1 << 1;
    }
}

/// Upper bound on cached patterns per case setting. Patterns past it are
/// compiled on every use.
pub const MAX_CACHED_PATTERNS: usize = 1024;

type PatternCache = HashMap<String, Option<Regex>>;

/// Compiled patterns, indexed by the case-insensitive flag and then keyed by
/// pattern. `None` records a pattern that failed to compile so the warning is
/// logged once.
static COMPILED: Lazy<RwLock<[PatternCache; 2]>> =
    Lazy::new(|| RwLock::new([HashMap::new(), HashMap::new()]));

/// Compile a rule pattern with the engine's settings.
pub fn compile(pattern: &str, no_case: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .unicode(false)
        .multi_line(true)
        .case_insensitive(no_case)
        .build()
}

fn cached(pattern: &str, no_case: bool) -> Option<Regex> {
    let slot = usize::from(no_case);
    if let Ok(maps) = COMPILED.read() {
        if let Some(entry) = maps[slot].get(pattern) {
            return entry.clone();
        }
    }

    let compiled = match compile(pattern, no_case) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(pattern, error = %e, "regex rule rejected");
            None
        }
    };
    if let Ok(mut maps) = COMPILED.write() {
        remember(&mut maps[slot], pattern, &compiled);
    }
    compiled
}

/// Insert into a bounded cache. Returns false once the cache is full.
fn remember(map: &mut PatternCache, pattern: &str, compiled: &Option<Regex>) -> bool {
    if map.contains_key(pattern) {
        return true;
    }
    if map.len() >= MAX_CACHED_PATTERNS {
        debug!(pattern, "regex cache full");
        return false;
    }
    map.insert(pattern.to_owned(), compiled.clone());
    true
}

/// Search for `pattern` in the window starting at `cursor`.
///
/// `limit` caps the window length (0 means the rest of the buffer). A
/// pattern that does not compile never matches. Alternations take the
/// leftmost-first branch rather than the longest one.
pub fn regex_search(
    buf: &[u8],
    cursor: usize,
    pattern: &str,
    limit: usize,
    flags: RegexFlags,
) -> Outcome {
    if cursor >= buf.len() {
        return Outcome::InsufficientData;
    }

    let Some(re) = cached(pattern, flags.contains(RegexFlags::NO_CASE)) else {
        return Outcome::NotMatched;
    };

    let rest = &buf[cursor..];
    let capped = if limit == 0 {
        rest
    } else {
        &rest[..limit.min(rest.len())]
    };
    let window = match memchr::memchr(0, capped) {
        Some(nul) => &capped[..nul],
        None => capped,
    };

    match re.find(window) {
        Some(m) => {
            let next = if flags.contains(RegexFlags::BEGIN) {
                cursor + m.start()
            } else {
                cursor + m.end()
            };
            Outcome::Matched {
                consumed: m.len(),
                next,
            }
        }
        None => Outcome::NotMatched,
    }
}
