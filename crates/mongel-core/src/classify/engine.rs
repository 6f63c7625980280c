use crate::classify::outcome::Evaluation;
use crate::error::MongelError;
use crate::model::{Dataset, Instance};
use crate::rule::Rule;
use crate::rule_set::RuleSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How a test instance is matched against the rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Closest rule by `distance_to_instance`, ties broken by smaller area.
    #[default]
    NearestRule,
    /// First rule, in rule-set order, that dominates the instance's point
    /// rule; the last rule is the fallback.
    OrderedDominance,
}

impl FromStr for Strategy {
    type Err = MongelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nearest" | "nearest_rule" => Ok(Strategy::NearestRule),
            "ordered" | "ordered_dominance" => Ok(Strategy::OrderedDominance),
            _ => Err(MongelError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::NearestRule => write!(f, "nearest"),
            Strategy::OrderedDominance => write!(f, "ordered"),
        }
    }
}

/// Read-only view of a rule set bound to one classification strategy.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    rule_set: &'a RuleSet,
    strategy: Strategy,
}

impl<'a> Classifier<'a> {
    pub fn new(rule_set: &'a RuleSet, strategy: Strategy) -> Self {
        Self { rule_set, strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Predicted class index for one normalized instance.
    ///
    /// # Panics
    ///
    /// Panics if the instance does not carry one value per attribute; use
    /// [`Classifier::try_classify`] to get an error instead.
    pub fn classify(&self, values: &[f64]) -> usize {
        match self.strategy {
            Strategy::NearestRule => self.nearest_rule(values).output(),
            Strategy::OrderedDominance => self.ordered_dominance(values).output(),
        }
    }

    pub fn try_classify(&self, values: &[f64]) -> Result<usize, MongelError> {
        self.rule_set.check_instance(values)?;
        Ok(self.classify(values))
    }

    /// Classify many instances in parallel; the rule set is never mutated.
    pub fn classify_batch(&self, instances: &[Instance]) -> Result<Vec<usize>, MongelError> {
        for inst in instances {
            self.rule_set.check_instance(&inst.values)?;
        }
        Ok(instances
            .par_iter()
            .map(|inst| self.classify(&inst.values))
            .collect())
    }

    /// Predictions and accuracy over a labeled dataset.
    pub fn evaluate(&self, dataset: &Dataset) -> Result<Evaluation, MongelError> {
        let predictions = self.classify_batch(&dataset.instances)?;
        Ok(Evaluation::new(&dataset.instances, predictions))
    }

    fn nearest_rule(&self, values: &[f64]) -> &'a Rule {
        let mut rules = self.rule_set.rules().iter();
        let mut best = rules.next().expect("rule set is never empty");
        let mut best_dist = best.distance_to_instance(values);
        for rule in rules {
            let dist = rule.distance_to_instance(values);
            if dist < best_dist || (dist == best_dist && rule.area() < best.area()) {
                best = rule;
                best_dist = dist;
            }
        }
        best
    }

    fn ordered_dominance(&self, values: &[f64]) -> &'a Rule {
        let point = Rule::point(values, 0, self.rule_set.attributes());
        let rules = self.rule_set.rules();
        rules
            .iter()
            .find(|rule| rule.compare_input(&point) == Some(Ordering::Greater))
            .or_else(|| rules.last())
            .expect("rule set is never empty")
    }
}
