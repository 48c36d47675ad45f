//! Reply templates with %N capture-group placeholders

use regex::Captures;

use crate::error::{Result, RuleError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Group(usize),
}

/// A reply template parsed into literal text and `%N` group references.
///
/// `%N` (one or more decimal digits, leading zeros allowed) substitutes
/// the text of capture group N; `%0` is the whole match. A `%` not
/// followed by a digit is kept as literal text.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template. Parsing itself never fails; whether the group
    /// indices exist is checked against the rule's pattern at load time.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let mut digits = String::new();
            while let Some(d) = chars.peek() {
                if d.is_ascii_digit() {
                    digits.push(*d);
                    chars.next();
                } else {
                    break;
                }
            }

            if digits.is_empty() {
                literal.push('%');
            } else if let Ok(n) = digits.parse::<usize>() {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Group(n));
            } else {
                // Too large to name a real group; keep the text as written
                literal.push('%');
                literal.push_str(&digits);
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// Highest group index referenced by any placeholder.
    pub fn max_group(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Group(n) => Some(*n),
                Segment::Literal(_) => None,
            })
            .max()
    }

    /// Render against the captures of a successful match.
    ///
    /// Fails if a referenced group did not participate in the match,
    /// e.g. it sits on an alternative branch the input did not take.
    pub(crate) fn render(&self, caps: &Captures<'_>, rule: usize) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Group(n) => match caps.get(*n) {
                    Some(m) => out.push_str(m.as_str()),
                    None => {
                        return Err(RuleError::GroupNotCaptured {
                            rule,
                            placeholder: *n,
                        })
                    }
                },
            }
        }

        Ok(out)
    }

    /// The template as originally written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;

    #[test]
    fn test_parse_plain_literal() {
        let t = Template::parse("Nous sommes basés à Dakar");
        assert_eq!(t.max_group(), None);
        assert_eq!(t.as_str(), "Nous sommes basés à Dakar");
    }

    #[test]
    fn test_parse_placeholders() {
        let t = Template::parse("Je vais préparer le %1 taille %2");
        assert_eq!(t.max_group(), Some(2));
    }

    #[test]
    fn test_percent_without_digit_is_literal() {
        let t = Template::parse("100% sûr");
        assert_eq!(t.max_group(), None);
    }

    #[test]
    fn test_digits_are_greedy() {
        // %12 is group 12, not group 1 followed by "2"
        let t = Template::parse("%12");
        assert_eq!(t.max_group(), Some(12));
    }

    #[test]
    fn test_render_substitutes_groups() {
        let p = Pattern::compile("Je veux un (.*) de taille (.*)").unwrap();
        let caps = p.captures("Je veux un burger de taille large").unwrap();

        let t = Template::parse("Je vais préparer le %1 taille %2");
        assert_eq!(
            t.render(&caps, 0).unwrap(),
            "Je vais préparer le burger taille large"
        );
    }

    #[test]
    fn test_render_whole_match() {
        let p = Pattern::compile("(Bonjour|Salut)").unwrap();
        let caps = p.captures("Salut").unwrap();

        let t = Template::parse("Vous avez dit %0");
        assert_eq!(t.render(&caps, 0).unwrap(), "Vous avez dit Salut");
    }

    #[test]
    fn test_render_unmatched_branch_fails() {
        // Group 2 exists but only participates on the second branch
        let p = Pattern::compile("(oui)|(non)").unwrap();
        let caps = p.captures("oui").unwrap();

        let t = Template::parse("%2");
        let err = t.render(&caps, 3).unwrap_err();
        assert!(matches!(
            err,
            RuleError::GroupNotCaptured {
                rule: 3,
                placeholder: 2
            }
        ));
    }
}
