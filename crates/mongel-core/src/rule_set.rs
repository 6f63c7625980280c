use crate::error::MongelError;
use crate::model::{class_label, AttributeDef, AttributeKind};
use crate::rule::{Condition, Rule};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The final, immutable output of induction: an ordered list of rules plus
/// the attribute metadata they were built against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RuleSetRepr")]
pub struct RuleSet {
    attributes: Vec<AttributeDef>,
    classes: Vec<String>,
    rules: Vec<Rule>,
}

#[derive(Deserialize)]
struct RuleSetRepr {
    attributes: Vec<AttributeDef>,
    #[serde(default)]
    classes: Vec<String>,
    rules: Vec<Rule>,
}

impl TryFrom<RuleSetRepr> for RuleSet {
    type Error = MongelError;

    fn try_from(repr: RuleSetRepr) -> Result<Self, Self::Error> {
        RuleSet::new(repr.attributes, repr.classes, repr.rules)
    }
}

impl RuleSet {
    /// Assemble a rule set, checking every rule against the attribute metadata.
    pub fn new(
        attributes: Vec<AttributeDef>,
        classes: Vec<String>,
        rules: Vec<Rule>,
    ) -> Result<Self, MongelError> {
        if rules.is_empty() {
            return Err(MongelError::RuleInvalid(
                "a rule set must contain at least one rule".into(),
            ));
        }
        for (idx, rule) in rules.iter().enumerate() {
            if rule.size() != attributes.len() {
                return Err(MongelError::AttributeCountMismatch {
                    expected: attributes.len(),
                    found: rule.size(),
                });
            }
            for (condition, attr) in rule.conditions().iter().zip(&attributes) {
                let compatible = match (condition, &attr.kind) {
                    (Condition::Interval { .. }, AttributeKind::Numeric { .. }) => true,
                    (Condition::Members(members), AttributeKind::Nominal { values }) => {
                        members.len() == values.len()
                    }
                    _ => false,
                };
                if !compatible {
                    return Err(MongelError::RuleInvalid(format!(
                        "rule {} does not match the shape of attribute '{}' ({})",
                        idx, attr.name, attr.kind
                    )));
                }
            }
        }
        Ok(Self {
            attributes,
            classes,
            rules,
        })
    }

    pub(crate) fn from_induction(
        attributes: Vec<AttributeDef>,
        classes: Vec<String>,
        rules: Vec<Rule>,
    ) -> Self {
        Self {
            attributes,
            classes,
            rules,
        }
    }

    pub fn attributes(&self) -> &[AttributeDef] {
        &self.attributes
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn class_name(&self, output: usize) -> String {
        class_label(&self.classes, output)
    }

    /// Fail fast when an instance does not carry one value per attribute.
    pub fn check_instance(&self, values: &[f64]) -> Result<(), MongelError> {
        if values.len() != self.attributes.len() {
            return Err(MongelError::AttributeCountMismatch {
                expected: self.attributes.len(),
                found: values.len(),
            });
        }
        Ok(())
    }
}

/// Load a rule set previously written by [`save_rule_set`].
pub fn load_rule_set(path: &Path) -> Result<RuleSet, MongelError> {
    let content = std::fs::read_to_string(path)?;
    let rule_set: RuleSet = serde_json::from_str(&content)?;
    Ok(rule_set)
}

pub fn save_rule_set(rule_set: &RuleSet, path: &Path) -> Result<(), MongelError> {
    let json = serde_json::to_string_pretty(rule_set)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> Vec<AttributeDef> {
        vec![
            AttributeDef::numeric("x", 0.0, 1.0),
            AttributeDef::nominal("c", vec!["a", "b"]),
        ]
    }

    fn sample_rule() -> Rule {
        Rule::new(
            vec![
                Condition::Interval { min: 0.1, max: 0.4 },
                Condition::Members(vec![true, false]),
            ],
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_new_accepts_matching_rules() {
        let rs = RuleSet::new(attrs(), vec!["no".into()], vec![sample_rule()]).unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.class_name(0), "no");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(RuleSet::new(attrs(), vec![], vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_wrong_arity() {
        let short = Rule::new(vec![Condition::Interval { min: 0.1, max: 0.4 }], 0).unwrap();
        let err = RuleSet::new(attrs(), vec![], vec![short]).unwrap_err();
        assert!(matches!(
            err,
            MongelError::AttributeCountMismatch {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_new_rejects_kind_mismatch() {
        let swapped = Rule::new(
            vec![
                Condition::Members(vec![true, false]),
                Condition::Interval { min: 0.1, max: 0.4 },
            ],
            0,
        )
        .unwrap();
        assert!(RuleSet::new(attrs(), vec![], vec![swapped]).is_err());
    }

    #[test]
    fn test_check_instance() {
        let rs = RuleSet::new(attrs(), vec![], vec![sample_rule()]).unwrap();
        assert!(rs.check_instance(&[0.2, 0.0]).is_ok());
        assert!(rs.check_instance(&[0.2]).is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let rs = RuleSet::new(attrs(), vec!["no".into()], vec![sample_rule()]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        save_rule_set(&rs, &path).unwrap();
        let loaded = load_rule_set(&path).unwrap();
        assert_eq!(loaded.rules(), rs.rules());
        assert_eq!(loaded.attributes(), rs.attributes());
    }
}
