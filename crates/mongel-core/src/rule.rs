//! Generalized hyperrectangles ("rules") and the geometric predicates the
//! induction pipeline is built on.
//!
//! A rule constrains every condition attribute: numeric attributes with a
//! closed interval `[min, max]`, nominal attributes with a membership set
//! over the attribute's value slots. Each rule predicts one output class.

use crate::error::MongelError;
use crate::model::{nominal_slot, AttributeDef, AttributeKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-attribute shape of a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Interval { min: f64, max: f64 },
    Members(Vec<bool>),
}

impl Condition {
    fn area(&self) -> f64 {
        match self {
            Condition::Interval { min, max } => max - min,
            Condition::Members(members) => {
                let included = members.iter().filter(|m| **m).count();
                included as f64 / members.len() as f64
            }
        }
    }

    fn validate(&self, position: usize) -> Result<(), MongelError> {
        match self {
            Condition::Interval { min, max } => {
                if !min.is_finite() || !max.is_finite() || min > max {
                    return Err(MongelError::RuleInvalid(format!(
                        "attribute {position}: interval [{min}, {max}] is not a valid closed interval"
                    )));
                }
            }
            Condition::Members(members) => {
                if !members.iter().any(|m| *m) {
                    return Err(MongelError::RuleInvalid(format!(
                        "attribute {position}: membership set must include at least one value"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Per-attribute vote cast while comparing two rules' inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vote {
    Equal,
    ThisDominates,
    OtherDominates,
}

/// An axis-aligned hyperrectangle labeled with an output class.
///
/// `area` is cached and kept consistent with `conditions`: every constructor
/// computes it and no method mutates a rule in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RuleRepr")]
pub struct Rule {
    conditions: Vec<Condition>,
    output: usize,
    #[serde(skip_serializing)]
    area: f64,
}

#[derive(Deserialize)]
struct RuleRepr {
    conditions: Vec<Condition>,
    output: usize,
}

impl TryFrom<RuleRepr> for Rule {
    type Error = MongelError;

    fn try_from(repr: RuleRepr) -> Result<Self, Self::Error> {
        Rule::new(repr.conditions, repr.output)
    }
}

impl Rule {
    /// Build a rule from explicit conditions, checking the shape invariants.
    pub fn new(conditions: Vec<Condition>, output: usize) -> Result<Self, MongelError> {
        for (position, condition) in conditions.iter().enumerate() {
            condition.validate(position)?;
        }
        Ok(Self::from_conditions(conditions, output))
    }

    fn from_conditions(conditions: Vec<Condition>, output: usize) -> Self {
        let area = conditions.iter().map(Condition::area).sum();
        Self {
            conditions,
            output,
            area,
        }
    }

    /// Single-point hyperrectangle around one instance.
    ///
    /// # Panics
    ///
    /// Panics if `values` and `attributes` differ in length.
    pub fn point(values: &[f64], output: usize, attributes: &[AttributeDef]) -> Self {
        assert_eq!(
            values.len(),
            attributes.len(),
            "instance has {} values but {} attributes are defined",
            values.len(),
            attributes.len()
        );
        let conditions = values
            .iter()
            .zip(attributes)
            .map(|(&value, attr)| match &attr.kind {
                AttributeKind::Numeric { .. } => Condition::Interval {
                    min: value,
                    max: value,
                },
                AttributeKind::Nominal { values: names } => {
                    let cardinality = names.len().max(1);
                    let mut members = vec![false; cardinality];
                    members[nominal_slot(value, cardinality)] = true;
                    Condition::Members(members)
                }
            })
            .collect();
        Self::from_conditions(conditions, output)
    }

    /// Number of condition attributes.
    pub fn size(&self) -> usize {
        self.conditions.len()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn output(&self) -> usize {
        self.output
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    fn check_arity(&self, found: usize) {
        assert_eq!(
            self.conditions.len(),
            found,
            "rule has {} conditions but was compared against {} attributes",
            self.conditions.len(),
            found
        );
    }

    /// Squared excess of an instance outside the rule.
    ///
    /// Zero means the rule covers the instance. Boundary values count as covered.
    pub fn distance_to_instance(&self, values: &[f64]) -> f64 {
        self.check_arity(values.len());
        self.conditions
            .iter()
            .zip(values)
            .map(|(condition, &value)| match condition {
                Condition::Interval { min, max } => {
                    if value < *min {
                        (min - value).powi(2)
                    } else if value > *max {
                        (value - max).powi(2)
                    } else {
                        0.0
                    }
                }
                Condition::Members(members) => {
                    if members[nominal_slot(value, members.len())] {
                        0.0
                    } else {
                        1.0
                    }
                }
            })
            .sum()
    }

    /// Distance between two rules: squared midpoint distance per numeric
    /// attribute, squared fraction of differing slots per nominal attribute.
    pub fn distance_to_rule(&self, other: &Rule) -> f64 {
        self.check_arity(other.size());
        self.conditions
            .iter()
            .zip(&other.conditions)
            .map(|pair| match pair {
                (
                    Condition::Interval { min: a_min, max: a_max },
                    Condition::Interval { min: b_min, max: b_max },
                ) => {
                    let a_mid = (a_min + a_max) / 2.0;
                    let b_mid = (b_min + b_max) / 2.0;
                    (a_mid - b_mid).powi(2)
                }
                (Condition::Members(a), Condition::Members(b)) => {
                    let differing = a.iter().zip(b).filter(|(x, y)| x != y).count();
                    (differing as f64 / a.len() as f64).powi(2)
                }
                _ => panic!("attribute kinds differ between rules"),
            })
            .sum()
    }

    /// Attribute-wise dominance between the two rules' inputs.
    ///
    /// `Some(Greater)`: this dominates other. `Some(Less)`: other dominates this.
    /// `Some(Equal)`: identical inputs. `None`: incomparable. A single
    /// incomparable attribute, or votes in both directions, yields `None`.
    pub fn compare_input(&self, other: &Rule) -> Option<Ordering> {
        self.check_arity(other.size());
        let mut this_dominates = false;
        let mut other_dominates = false;

        for pair in self.conditions.iter().zip(&other.conditions) {
            let vote = match pair {
                (
                    Condition::Interval { min: a_min, max: a_max },
                    Condition::Interval { min: b_min, max: b_max },
                ) => {
                    if b_max < a_min {
                        Vote::ThisDominates
                    } else if a_max < b_min {
                        Vote::OtherDominates
                    } else if a_min == b_min && a_max == b_max {
                        Vote::Equal
                    } else {
                        return None;
                    }
                }
                (Condition::Members(a), Condition::Members(b)) => {
                    let a_in_b = a.iter().zip(b).all(|(x, y)| !*x || *y);
                    let b_in_a = a.iter().zip(b).all(|(x, y)| !*y || *x);
                    match (a_in_b, b_in_a) {
                        (true, true) => Vote::Equal,
                        (true, false) => Vote::OtherDominates,
                        (false, true) => Vote::ThisDominates,
                        (false, false) => return None,
                    }
                }
                _ => panic!("attribute kinds differ between rules"),
            };

            match vote {
                Vote::Equal => {}
                Vote::ThisDominates => this_dominates = true,
                Vote::OtherDominates => other_dominates = true,
            }
            if this_dominates && other_dominates {
                return None;
            }
        }

        Some(match (this_dominates, other_dominates) {
            (true, _) => Ordering::Greater,
            (_, true) => Ordering::Less,
            _ => Ordering::Equal,
        })
    }

    /// True when input dominance and output order point in opposite
    /// directions, or when identical inputs predict different classes.
    pub fn is_anti_monotonic(&self, other: &Rule) -> bool {
        match self.compare_input(other) {
            None => false,
            Some(Ordering::Equal) => self.output != other.output,
            Some(Ordering::Greater) => self.output < other.output,
            Some(Ordering::Less) => self.output > other.output,
        }
    }

    /// True only if the shapes intersect on every attribute.
    pub fn overlaps(&self, other: &Rule) -> bool {
        self.check_arity(other.size());
        self.conditions
            .iter()
            .zip(&other.conditions)
            .all(|pair| match pair {
                (
                    Condition::Interval { min: a_min, max: a_max },
                    Condition::Interval { min: b_min, max: b_max },
                ) => a_min <= b_max && b_min <= a_max,
                (Condition::Members(a), Condition::Members(b)) => {
                    a.iter().zip(b).any(|(x, y)| *x && *y)
                }
                _ => panic!("attribute kinds differ between rules"),
            })
    }

    /// Smallest hyperrectangle enclosing both rules.
    ///
    /// The merged output is the larger of the two class indices. Callers only
    /// merge rules of the same class, so in practice both outputs agree.
    pub fn merge(&self, other: &Rule) -> Rule {
        self.check_arity(other.size());
        let conditions = self
            .conditions
            .iter()
            .zip(&other.conditions)
            .map(|pair| match pair {
                (
                    Condition::Interval { min: a_min, max: a_max },
                    Condition::Interval { min: b_min, max: b_max },
                ) => Condition::Interval {
                    min: a_min.min(*b_min),
                    max: a_max.max(*b_max),
                },
                (Condition::Members(a), Condition::Members(b)) => {
                    Condition::Members(a.iter().zip(b).map(|(x, y)| *x || *y).collect())
                }
                _ => panic!("attribute kinds differ between rules"),
            })
            .collect();
        Rule::from_conditions(conditions, self.output.max(other.output))
    }
}
