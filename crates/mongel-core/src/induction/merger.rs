//! Greedy nearest-pair generalization.
//!
//! Each pass walks the rule list in order. For rule `i` the nearest later rule
//! of the same class with a comparable input is merged into it, unless the
//! merged hyperrectangle would overlap a rule of another class. The first
//! accepted merge ends the pass and the scan restarts from the top; a pass
//! with no accepted merge terminates the loop.

use super::InductionOptions;
use crate::error::MongelError;
use crate::rule::Rule;
use crate::trace::{InductionTrace, TraceStage, TraceStepType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub merges: usize,
    pub rejected: usize,
}

/// An accepted merge, ready to be committed.
struct MergePlan {
    keep: usize,
    absorb: usize,
    merged: Rule,
}

/// Nearest later rule with the same output and a comparable input.
fn nearest_partner(rules: &[Rule], i: usize) -> Option<usize> {
    let base = &rules[i];
    let mut best: Option<(usize, f64)> = None;
    for (j, candidate) in rules.iter().enumerate().skip(i + 1) {
        if candidate.output() != base.output() || base.compare_input(candidate).is_none() {
            continue;
        }
        let dist = base.distance_to_rule(candidate);
        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((j, dist)),
        }
    }
    best.map(|(j, _)| j)
}

/// First rule of another class that the merged shape would overlap.
fn conflicting_rule(rules: &[Rule], merged: &Rule, i: usize, j: usize) -> Option<usize> {
    rules.iter().enumerate().position(|(k, other)| {
        k != i && k != j && other.output() != merged.output() && merged.overlaps(other)
    })
}

/// Scan one pass and return the first merge that passes the overlap check.
fn find_merge(
    rules: &[Rule],
    stats: &mut MergeStats,
    trace: &mut InductionTrace,
) -> Option<MergePlan> {
    for i in 0..rules.len() {
        let Some(j) = nearest_partner(rules, i) else {
            continue;
        };

        let merged = rules[i].merge(&rules[j]);
        if let Some(k) = conflicting_rule(rules, &merged, i, j) {
            stats.rejected += 1;
            trace.record(TraceStage::Merge, TraceStepType::RejectMerge, || {
                format!(
                    "Rejected merge of rules {} and {}: result overlaps rule {} (class {})",
                    i,
                    j,
                    k,
                    rules[k].output()
                )
            });
            continue;
        }

        return Some(MergePlan {
            keep: i,
            absorb: j,
            merged,
        });
    }
    None
}

/// Merge rules in place until a full pass finds nothing to merge.
pub fn merge_rules(
    rules: &mut Vec<Rule>,
    options: &InductionOptions,
    trace: &mut InductionTrace,
) -> Result<MergeStats, MongelError> {
    let mut stats = MergeStats::default();

    loop {
        options.check_cancelled()?;

        let Some(plan) = find_merge(rules, &mut stats, trace) else {
            break;
        };

        trace.record(TraceStage::Merge, TraceStepType::AcceptMerge, || {
            format!(
                "Merged rules {} and {} (class {}), area {:.4}",
                plan.keep,
                plan.absorb,
                plan.merged.output(),
                plan.merged.area()
            )
        });

        // absorb > keep, so removing it leaves the kept index valid
        rules[plan.keep] = plan.merged;
        rules.remove(plan.absorb);
        stats.merges += 1;
    }

    Ok(stats)
}
