//! Compiled input patterns with start-anchored "match" semantics

use regex::{Captures, RegexBuilder};

use crate::error::{Result, RuleError};

/// A case-insensitive pattern anchored at the start of the input.
///
/// Matching must begin at position 0 but does not have to consume the
/// whole input (the source ecosystem's "match", not "search").
#[derive(Debug)]
pub struct Pattern {
    regex: regex::Regex,
    source: String,
}

impl Pattern {
    /// Compile a pattern, rejecting invalid regex syntax.
    pub fn compile(source: &str) -> Result<Self> {
        // Non-capturing wrapper keeps capture group numbering intact
        let anchored = format!("^(?:{})", source);
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::InvalidPattern {
                pattern: source.to_string(),
                source: e,
            })?;

        Ok(Self {
            regex,
            source: source.to_string(),
        })
    }

    /// Number of capture groups, excluding the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Match against the input, returning captures on success.
    pub fn captures<'t>(&self, input: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(input)
    }

    /// The pattern as originally written, without the anchor wrapper.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_at_start() {
        let p = Pattern::compile("bonjour").unwrap();
        assert!(p.captures("bonjour tout le monde").is_some());
        assert!(p.captures("je dis bonjour").is_none());
    }

    #[test]
    fn test_case_insensitive() {
        let p = Pattern::compile("(Bonjour|Salut|Coucou)").unwrap();
        assert!(p.captures("BONJOUR").is_some());
        assert!(p.captures("salut").is_some());
    }

    #[test]
    fn test_group_count_excludes_whole_match() {
        let p = Pattern::compile("Je veux un (.*) de taille (.*)").unwrap();
        assert_eq!(p.group_count(), 2);

        let p = Pattern::compile("merci").unwrap();
        assert_eq!(p.group_count(), 0);
    }

    #[test]
    fn test_group_numbering_survives_anchoring() {
        let p = Pattern::compile("(.*)(ville|adresse)").unwrap();
        let caps = p.captures("Où est votre adresse").unwrap();
        assert_eq!(caps.get(2).unwrap().as_str(), "adresse");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = Pattern::compile("(unclosed").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }
}
