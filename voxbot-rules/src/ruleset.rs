//! Rule definitions: built-in defaults and TOML rule files

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::pattern::Pattern;
use crate::responder::{Responder, Rule};
use crate::template::Template;

/// Default reply when no rule matches.
pub const DEFAULT_FALLBACK: &str = "Désolé, je ne comprends pas votre demande.";

/// A rule as declared in configuration, before compilation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    pub pattern: String,
    pub replies: Vec<String>,
}

impl RuleSpec {
    fn new(pattern: &str, replies: &[&str]) -> Self {
        Self {
            pattern: pattern.to_string(),
            replies: replies.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// TOML file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct RulesFile {
    #[serde(default)]
    rules: Vec<RuleSpec>,
    fallback: Option<String>,
}

/// An ordered rule list plus fallback, ready to compile into a
/// [`Responder`].
///
/// Declaration order is part of the contract: earlier rules shadow later
/// ones. Each rule may carry several reply alternatives; selection is
/// deterministic (always the first), the alternatives are kept for
/// authoring convenience.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub rules: Vec<RuleSpec>,
    pub fallback: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl RuleSet {
    /// Load a rule set from a TOML file, or the built-in defaults when
    /// the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No rule file at {:?}, using built-in rules", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let file: RulesFile = toml::from_str(&content)?;
        info!("Loaded {} rules from {:?}", file.rules.len(), path);

        Ok(Self {
            rules: file.rules,
            fallback: file.fallback.unwrap_or_else(|| DEFAULT_FALLBACK.to_string()),
        })
    }

    /// Compile into a [`Responder`], validating patterns and placeholders.
    ///
    /// Fails on invalid regex syntax, a rule without replies, or a `%N`
    /// placeholder exceeding its pattern's capture group count.
    pub fn compile(&self) -> Result<Responder> {
        let mut rules = Vec::with_capacity(self.rules.len());

        for spec in &self.rules {
            let pattern = Pattern::compile(&spec.pattern)?;
            let replies = spec.replies.iter().map(|r| Template::parse(r)).collect();
            rules.push(Rule::new(pattern, replies));
        }

        Responder::new(rules, self.fallback.clone())
    }
}

/// The built-in French dialogue rules.
pub fn default_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new("(.*)appel(.*)", &["Hello %2"]),
        RuleSpec::new("(.*)nom(.*)", &["Hello %2"]),
        RuleSpec::new(
            "(Bonjour|Salut|Coucou)",
            &["Salut toi", "Hello", "En quoi puis-je aider"],
        ),
        RuleSpec::new(
            "Je veux passer une commande",
            &["Que désirez-vous aujourd'hui ?"],
        ),
        RuleSpec::new(
            "Je veux un (.*) de taille (.*)",
            &["Je vais préparer le %1 taille %2"],
        ),
        RuleSpec::new("(.*)(ville|adresse)", &["Nous sommes basés à Dakar"]),
        RuleSpec::new(
            "(.*)(aider|aidez)(.*)",
            &["Que puis-je faire pour vous aujourd'hui"],
        ),
        RuleSpec::new("(.*)merci(.*)", &["Je vous en prie, à bientôt"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_rules_compile() {
        let responder = RuleSet::default().compile().unwrap();
        assert_eq!(responder.rule_count(), 8);
        assert_eq!(responder.fallback(), DEFAULT_FALLBACK);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let rule_set = RuleSet::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(rule_set.rules.len(), 8);
    }

    #[test]
    fn test_load_rule_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");

        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "fallback = \"Pas compris\"").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "[[rules]]").unwrap();
        writeln!(f, "pattern = \"ping\"").unwrap();
        writeln!(f, "replies = [\"pong\"]").unwrap();
        drop(f);

        let responder = RuleSet::load(&path).unwrap().compile().unwrap();
        assert_eq!(responder.respond("ping").unwrap(), "pong");
        assert_eq!(responder.respond("autre chose").unwrap(), "Pas compris");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(&path, "rules = \"not a table\"").unwrap();

        assert!(RuleSet::load(&path).is_err());
    }
}
