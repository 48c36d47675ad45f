//! Regex dialogue rules for the voxbot responder
//!
//! An ordered list of (pattern, reply templates) rules, matched
//! case-insensitively against the start of a transcribed utterance.
//! The first matching rule wins and its first reply template is rendered,
//! substituting `%N` placeholders with the matched capture groups.
//!
//! Matching and templating are two explicit abstractions ([`Pattern`] and
//! [`Template`]) so that a template referencing a group its pattern does
//! not define is a typed configuration error at load time, and a group
//! that did not participate in a match is a typed rendering error at call
//! time.
//!
//! # Quick start
//!
//! ```
//! use voxbot_rules::RuleSet;
//!
//! let responder = RuleSet::default().compile()?;
//! assert_eq!(responder.respond("Bonjour")?, "Salut toi");
//! assert_eq!(
//!     responder.respond("Je veux un burger de taille large")?,
//!     "Je vais préparer le burger taille large"
//! );
//! # Ok::<(), voxbot_rules::RuleError>(())
//! ```

pub mod error;
pub mod pattern;
pub mod responder;
pub mod ruleset;
pub mod template;

pub use error::{Result, RuleError};
pub use pattern::Pattern;
pub use responder::{Responder, Rule};
pub use ruleset::{default_rules, RuleSet, RuleSpec, DEFAULT_FALLBACK};
pub use template::Template;
