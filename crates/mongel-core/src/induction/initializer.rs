use crate::model::{AttributeDef, Instance};
use crate::rule::Rule;
use crate::trace::{InductionTrace, TraceStage, TraceStepType};

/// One point rule per instance, ordered by output class descending.
///
/// The sort is stable, so instances of the same class keep their input order.
pub fn point_rules(instances: &[Instance], attributes: &[AttributeDef]) -> Vec<Rule> {
    let mut rules: Vec<Rule> = instances
        .iter()
        .map(|inst| Rule::point(&inst.values, inst.output, attributes))
        .collect();
    rules.sort_by(|a, b| b.output().cmp(&a.output()));
    rules
}

/// Drop structurally identical rules, keeping the first occurrence of each.
///
/// Returns the number of rules removed.
pub fn remove_duplicates(rules: &mut Vec<Rule>) -> usize {
    let before = rules.len();
    let mut unique: Vec<Rule> = Vec::with_capacity(before);
    for rule in rules.drain(..) {
        if !unique.contains(&rule) {
            unique.push(rule);
        }
    }
    *rules = unique;
    before - rules.len()
}

/// Build the deduplicated initial rule set.
pub fn initialize(
    instances: &[Instance],
    attributes: &[AttributeDef],
    trace: &mut InductionTrace,
) -> Vec<Rule> {
    let mut rules = point_rules(instances, attributes);
    trace.record(TraceStage::Initialize, TraceStepType::PointRules, || {
        format!("Built {} point rules from training instances", rules.len())
    });

    let removed = remove_duplicates(&mut rules);
    trace.record(TraceStage::Initialize, TraceStepType::RemoveDuplicates, || {
        format!(
            "Removed {} duplicate point rule(s), {} remain",
            removed,
            rules.len()
        )
    });

    rules
}
