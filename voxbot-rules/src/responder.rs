//! First-match-wins reply engine

use tracing::debug;

use crate::error::{Result, RuleError};
use crate::pattern::Pattern;
use crate::template::Template;

/// A single dialogue rule: a pattern and its reply alternatives.
///
/// Only the first alternative is ever selected; the rest are kept in the
/// data model for future use (see the `RuleSet` docs).
#[derive(Debug)]
pub struct Rule {
    pattern: Pattern,
    replies: Vec<Template>,
}

impl Rule {
    pub fn new(pattern: Pattern, replies: Vec<Template>) -> Self {
        Self { pattern, replies }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn replies(&self) -> &[Template] {
        &self.replies
    }
}

/// Ordered rule list with a fallback reply.
///
/// Rules are consulted in declaration order and the first match wins, so
/// earlier rules shadow later ones with overlapping patterns. The
/// responder is immutable after construction; `respond` is a pure
/// function of the input, safe to call from multiple threads without
/// synchronization.
#[derive(Debug)]
pub struct Responder {
    rules: Vec<Rule>,
    fallback: String,
}

impl Responder {
    /// Build a responder, validating every reply template against its
    /// rule's pattern.
    ///
    /// A `%N` placeholder referencing a group the pattern does not define
    /// is a configuration error and is rejected here, not at call time.
    pub fn new<S: Into<String>>(rules: Vec<Rule>, fallback: S) -> Result<Self> {
        for (i, rule) in rules.iter().enumerate() {
            if rule.replies.is_empty() {
                return Err(RuleError::EmptyRule { rule: i });
            }

            let groups = rule.pattern.group_count();
            for reply in &rule.replies {
                if let Some(max) = reply.max_group() {
                    if max > groups {
                        return Err(RuleError::PlaceholderOutOfRange {
                            rule: i,
                            placeholder: max,
                            groups,
                        });
                    }
                }
            }
        }

        Ok(Self {
            rules,
            fallback: fallback.into(),
        })
    }

    /// Produce a reply for a transcribed utterance.
    ///
    /// Scans the rules in declaration order and renders the first reply
    /// template of the first rule whose pattern matches. Returns the
    /// fallback reply when nothing matches. The only error path is a
    /// placeholder whose group did not participate in the match.
    pub fn respond(&self, input: &str) -> Result<String> {
        for (i, rule) in self.rules.iter().enumerate() {
            if let Some(caps) = rule.pattern.captures(input) {
                debug!("rule {} matched: {}", i, rule.pattern.as_str());
                return rule.replies[0].render(&caps, i);
            }
        }

        debug!("no rule matched, using fallback");
        Ok(self.fallback.clone())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
