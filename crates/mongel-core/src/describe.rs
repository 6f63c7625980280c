//! Human-readable projection of a rule set.

use crate::model::AttributeKind;
use crate::rule::Condition;
use crate::rule_set::RuleSet;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConditionSummary {
    /// Numeric bounds mapped back into the attribute's original range.
    Range { attribute: String, low: f64, high: f64 },
    Members { attribute: String, values: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub index: usize,
    pub output: usize,
    pub class: String,
    pub area: f64,
    pub conditions: Vec<ConditionSummary>,
}

/// One summary per rule, in rule-set order.
pub fn describe(rule_set: &RuleSet) -> Vec<RuleSummary> {
    rule_set
        .rules()
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            let conditions = rule
                .conditions()
                .iter()
                .zip(rule_set.attributes())
                .map(|(condition, attr)| match (condition, &attr.kind) {
                    (Condition::Members(members), AttributeKind::Nominal { values }) => {
                        ConditionSummary::Members {
                            attribute: attr.name.clone(),
                            values: members
                                .iter()
                                .zip(values)
                                .filter(|(included, _)| **included)
                                .map(|(_, name)| name.clone())
                                .collect(),
                        }
                    }
                    (Condition::Interval { min, max }, _) => ConditionSummary::Range {
                        attribute: attr.name.clone(),
                        low: attr.denormalize(*min),
                        high: attr.denormalize(*max),
                    },
                    (Condition::Members(members), AttributeKind::Numeric { .. }) => {
                        ConditionSummary::Members {
                            attribute: attr.name.clone(),
                            values: members
                                .iter()
                                .enumerate()
                                .filter(|(_, included)| **included)
                                .map(|(slot, _)| slot.to_string())
                                .collect(),
                        }
                    }
                })
                .collect();

            RuleSummary {
                index,
                output: rule.output(),
                class: rule_set.class_name(rule.output()),
                area: rule.area(),
                conditions,
            }
        })
        .collect()
}

/// Number of rules in the set.
pub fn rule_count(rule_set: &RuleSet) -> usize {
    rule_set.len()
}

impl fmt::Display for ConditionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionSummary::Range {
                attribute,
                low,
                high,
            } => {
                if low == high {
                    write!(f, "{attribute} = {low}")
                } else {
                    write!(f, "{attribute} in [{low}, {high}]")
                }
            }
            ConditionSummary::Members { attribute, values } => {
                write!(f, "{attribute} in {{{}}}", values.join(", "))
            }
        }
    }
}

impl fmt::Display for RuleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conditions: Vec<String> = self.conditions.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "IF {} THEN {} (area {:.4})",
            conditions.join(" AND "),
            self.class,
            self.area
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeDef;
    use crate::rule::Rule;

    fn rule_set() -> RuleSet {
        RuleSet::new(
            vec![
                AttributeDef::numeric("temp", 10.0, 30.0),
                AttributeDef::nominal("sky", vec!["clear", "cloudy", "rain"]),
            ],
            vec!["stay".into(), "go".into()],
            vec![
                Rule::new(
                    vec![
                        Condition::Interval { min: 0.5, max: 1.0 },
                        Condition::Members(vec![true, true, false]),
                    ],
                    1,
                )
                .unwrap(),
                Rule::new(
                    vec![
                        Condition::Interval { min: 0.25, max: 0.25 },
                        Condition::Members(vec![false, false, true]),
                    ],
                    0,
                )
                .unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_describe_denormalizes_bounds() {
        let summaries = describe(&rule_set());
        assert_eq!(summaries.len(), 2);
        assert_eq!(
            summaries[0].conditions[0],
            ConditionSummary::Range {
                attribute: "temp".into(),
                low: 20.0,
                high: 30.0
            }
        );
        assert_eq!(
            summaries[0].conditions[1],
            ConditionSummary::Members {
                attribute: "sky".into(),
                values: vec!["clear".into(), "cloudy".into()]
            }
        );
        assert_eq!(summaries[0].class, "go");
        assert_eq!(summaries[1].output, 0);
    }

    #[test]
    fn test_display() {
        let summaries = describe(&rule_set());
        assert_eq!(
            summaries[0].to_string(),
            "IF temp in [20, 30] AND sky in {clear, cloudy} THEN go (area 1.1667)"
        );
        assert_eq!(
            summaries[1].to_string(),
            "IF temp = 15 AND sky in {rain} THEN stay (area 0.3333)"
        );
    }

    #[test]
    fn test_rule_count() {
        assert_eq!(rule_count(&rule_set()), 2);
    }
}
