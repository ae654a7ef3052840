//! Rule trees and their evaluation.
//!
//! A [`RuleSet`] is an ordered list of independent trees. Trees are static
//! data; nothing is parsed or loaded at run time.

pub mod build;
pub mod builtin;
pub mod eval;
pub mod node;

pub use eval::{ScanState, Verdict};
pub use node::{Indirect, Offset, RuleNode, Test};

use crate::error::{MagicError, Result};
use crate::matchers::regex::compile;
use crate::matchers::{Compare, RegexFlags};

/// An ordered set of rule trees, tried in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet<'r> {
    trees: &'r [RuleNode<'r>],
}

impl<'r> RuleSet<'r> {
    pub const fn new(trees: &'r [RuleNode<'r>]) -> Self {
        Self { trees }
    }

    pub fn trees(&self) -> &'r [RuleNode<'r>] {
        self.trees
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Total number of rule nodes across all trees.
    pub fn node_count(&self) -> usize {
        self.trees.iter().map(RuleNode::count).sum()
    }

    /// Check the structural invariants the evaluator relies on.
    ///
    /// String groups must be sorted by leading byte with no empty literal;
    /// numeric groups must be non-empty; string tests need a non-empty
    /// pattern and an ordering operator; regex patterns must compile; every
    /// non-group node either declares a mime or has children, not both.
    pub fn validate(&self) -> Result<()> {
        for (i, tree) in self.trees.iter().enumerate() {
            validate_node(tree, &format!("tree[{}]", i))?;
        }
        Ok(())
    }
}

fn invalid(path: &str, message: &str) -> MagicError {
    MagicError::InvalidRule {
        path: path.to_string(),
        message: message.to_string(),
    }
}

fn validate_node(node: &RuleNode<'_>, path: &str) -> Result<()> {
    if node.mime.is_some_and(str::is_empty) {
        return Err(invalid(path, "empty mime type"));
    }

    match node.test {
        Test::NumericGroup(group) => {
            if group.entries.is_empty() {
                return Err(invalid(path, "numeric group has no entries"));
            }
        }
        Test::StringGroup(group) => {
            if !group.is_sorted() {
                return Err(invalid(
                    path,
                    "string group entries must be non-empty and sorted by first byte",
                ));
            }
        }
        Test::Str {
            literal, compare, ..
        }
        | Test::Flex {
            pattern: literal,
            compare,
            ..
        } => {
            if literal.is_empty() {
                return Err(invalid(path, "empty string pattern"));
            }
            if matches!(compare, Compare::BitsSet | Compare::BitsClear) {
                return Err(invalid(path, "bit operators do not apply to strings"));
            }
        }
        Test::Search { pattern, .. } => {
            if pattern.is_empty() {
                return Err(invalid(path, "empty search pattern"));
            }
        }
        Test::Regex { pattern, flags, .. } => {
            compile(pattern, flags.contains(RegexFlags::NO_CASE)).map_err(|e| {
                MagicError::InvalidRegex {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                }
            })?;
        }
        Test::Numeric { .. } => {}
    }

    if node.test.is_group() {
        if node.mime.is_some() || !node.children.is_empty() {
            return Err(invalid(path, "group nodes declare their own mime types"));
        }
        return Ok(());
    }

    match (node.mime.is_some(), node.children.is_empty()) {
        (true, false) => Err(invalid(path, "children of a typed node are unreachable")),
        (false, true) => Err(invalid(path, "node has neither mime nor children")),
        _ => {
            for (i, child) in node.children.iter().enumerate() {
                validate_node(child, &format!("{}.children[{}]", path, i))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::StringFlags;
    use crate::rule;
    use crate::rules::build::*;

    fn message(trees: &[RuleNode<'_>]) -> String {
        match RuleSet::new(trees).validate() {
            Err(e) => e.to_string(),
            Ok(()) => String::new(),
        }
    }

    #[test]
    fn test_valid_set() {
        let trees = [
            rule!(string(0, b"GIF8") => "image/gif"),
            rule!(be_long(0, 0x1a45dfa3) => [
                rule!(search(4, b"B\x82", 4096, StringFlags::empty()) => [
                    rule!(string(1, b"webm").relative() => "video/webm"),
                ]),
            ]),
        ];
        let set = RuleSet::new(&trees);
        assert!(set.validate().is_ok());
        assert_eq!(set.len(), 2);
        assert_eq!(set.node_count(), 4);
    }

    #[test]
    fn test_shape_errors() {
        let bare = [RuleNode::branch(string(0, b"x"), &[])];
        assert_eq!(
            message(&bare),
            "Invalid rule at tree[0]: node has neither mime nor children"
        );

        let children = [rule!(byte(1, 0) => "x/y")];
        let both = [RuleNode {
            test: string(0, b"x"),
            mime: Some("x/x"),
            children: &children,
        }];
        assert!(message(&both).contains("unreachable"));
    }

    #[test]
    fn test_nested_path_in_error() {
        let trees = [rule!(byte(0, 1) => [
            rule!(byte(1, 2) => "x/ok"),
            rule!(string(1, b"") => "x/empty"),
        ])];
        assert_eq!(
            message(&trees),
            "Invalid rule at tree[0].children[1]: empty string pattern"
        );
    }

    #[test]
    fn test_group_errors() {
        let unsorted = [prefix(b"b", "x/b"), prefix(b"a", "x/a")];
        let trees = [RuleNode {
            test: prefix_group(0, &unsorted),
            mime: None,
            children: &[],
        }];
        assert!(message(&trees).contains("sorted"));

        let trees = [RuleNode {
            test: short_group(&[]),
            mime: None,
            children: &[],
        }];
        assert!(message(&trees).contains("no entries"));
    }

    #[test]
    fn test_regex_error() {
        let trees = [rule!(regex(0, "([a-z", 0, RegexFlags::empty()) => "text/x")];
        let err = RuleSet::new(&trees).validate().unwrap_err();
        assert!(matches!(err, MagicError::InvalidRegex { .. }));
    }

    #[test]
    fn test_builtin_rules_are_valid() {
        builtin::RULES.validate().unwrap();
        assert!(builtin::RULES.len() > 50);
    }
}
