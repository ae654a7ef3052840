//! Depth-first evaluation of rule trees, first match wins.

use serde::Serialize;
use tracing::{debug, trace};

use super::node::RuleNode;
use super::RuleSet;
use crate::matchers::Outcome;

/// Terminal state of a scan over a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    /// A fully matched path declared `mime`. `consumed` is the byte count
    /// of the top-level test of the winning tree.
    Matched {
        mime: &'static str,
        consumed: usize,
    },
    /// Every test that ran was decided and none matched.
    ExhaustedNoData,
    /// Nothing matched, and at least one test ran out of buffer.
    ExhaustedInsufficient,
}

/// Per-call accumulator threaded through the recursion.
///
/// `insufficient` is sticky: once a test lacks data it stays set for the
/// rest of the scan, whatever later trees decide.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub insufficient: bool,
    pub tests_run: usize,
}

impl<'r> RuleNode<'r> {
    /// Evaluate this node at `base` (the parent's end cursor). Returns the
    /// declared mime and this node's consumed byte count.
    pub fn evaluate(
        &self,
        buf: &[u8],
        base: usize,
        state: &mut ScanState,
    ) -> Option<(&'static str, usize)> {
        state.tests_run += 1;
        let (outcome, found) = self.test.run(buf, base);

        let (consumed, next) = match outcome {
            Outcome::Matched { consumed, next } => (consumed, next),
            Outcome::NotMatched => return None,
            Outcome::InsufficientData => {
                state.insufficient = true;
                return None;
            }
        };

        if let Some(mime) = found.or(self.mime) {
            return Some((mime, consumed));
        }

        self.children
            .iter()
            .find_map(|child| child.evaluate(buf, next, state))
            .map(|(mime, _)| (mime, consumed))
    }
}

impl<'r> RuleSet<'r> {
    /// Try each tree in priority order.
    pub fn evaluate(&self, buf: &[u8]) -> Verdict {
        let mut state = ScanState::default();
        self.evaluate_with(buf, &mut state)
    }

    /// As [`RuleSet::evaluate`], exposing the accumulator for diagnostics.
    pub fn evaluate_with(&self, buf: &[u8], state: &mut ScanState) -> Verdict {
        for (index, tree) in self.trees().iter().enumerate() {
            trace!(tree = index, "evaluating rule tree");
            if let Some((mime, consumed)) = tree.evaluate(buf, 0, state) {
                debug!(
                    tree = index,
                    mime,
                    consumed,
                    tests = state.tests_run,
                    "rule tree matched"
                );
                return Verdict::Matched { mime, consumed };
            }
        }

        debug!(
            insufficient = state.insufficient,
            tests = state.tests_run,
            "no rule tree matched"
        );
        if state.insufficient {
            Verdict::ExhaustedInsufficient
        } else {
            Verdict::ExhaustedNoData
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule;
    use crate::rules::build::*;

    static TREES: &[RuleNode<'static>] = &[
        rule!(string(0, b"AB") => [
            // matched but unspecific: no mime, no matching child
            rule!(string(2, b"zz") => "x/never"),
        ]),
        rule!(string(0, b"ABCD") => "x/abcd"),
        rule!(string(0, b"AB") => "x/ab"),
        rule!(be_long(100, 1) => "x/far"),
    ];

    #[test]
    fn test_first_match_wins() {
        let set = RuleSet::new(TREES);
        assert_eq!(
            set.evaluate(b"ABCD"),
            Verdict::Matched {
                mime: "x/abcd",
                consumed: 4
            }
        );
        // the later, looser "AB" tree only wins when "ABCD" fails
        assert_eq!(
            set.evaluate(b"ABXY"),
            Verdict::Matched {
                mime: "x/ab",
                consumed: 2
            }
        );
    }

    #[test]
    fn test_insufficient_is_sticky() {
        let set = RuleSet::new(TREES);
        // the first tree's child and "ABCD" lack data, "AB" still matches
        assert!(matches!(set.evaluate(b"AB"), Verdict::Matched { mime: "x/ab", .. }));

        let mut state = ScanState::default();
        // every string tree is decided; only the far rule lacks data
        assert_eq!(
            set.evaluate_with(b"QQQQ", &mut state),
            Verdict::ExhaustedInsufficient
        );
        assert!(state.insufficient);
        assert_eq!(state.tests_run, 4);
    }

    #[test]
    fn test_exhausted_without_missing_data() {
        static DECIDED: &[RuleNode<'static>] = &[rule!(string(0, b"AB") => "x/ab")];
        assert_eq!(
            RuleSet::new(DECIDED).evaluate(b"QQ"),
            Verdict::ExhaustedNoData
        );
    }

    #[test]
    fn test_mime_node_ignores_children() {
        static TREES: &[RuleNode<'static>] = &[RuleNode {
            test: string(0, b"PK"),
            mime: Some("x/outer"),
            children: &[rule!(string(2, b"\x03\x04") => "x/inner")],
        }];
        assert!(matches!(
            RuleSet::new(TREES).evaluate(b"PK\x03\x04"),
            Verdict::Matched { mime: "x/outer", consumed: 2 }
        ));
    }

    #[test]
    fn test_child_offsets_follow_parent() {
        static TREES: &[RuleNode<'static>] = &[rule!(search(0, b"B\x82", 0, crate::matchers::StringFlags::empty()) => [
            rule!(string(1, b"webm").relative() => "video/webm"),
        ])];
        assert!(matches!(
            RuleSet::new(TREES).evaluate(b"xxB\x82\x84webm"),
            Verdict::Matched { mime: "video/webm", consumed: 2 }
        ));
    }
}
