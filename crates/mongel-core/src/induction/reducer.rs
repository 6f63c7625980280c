//! Removal of anti-monotonic rules.
//!
//! The pairwise conflict matrix is built once. Removing a rule marks it dead
//! and patches the row sums of the rules it conflicted with, so no row or
//! column is ever physically shifted. Live rules are compacted at the end,
//! preserving their relative order.

use super::InductionOptions;
use crate::error::MongelError;
use crate::model::Instance;
use crate::rule::Rule;
use crate::trace::{InductionTrace, TraceStage, TraceStepType};

/// Symmetric 0/1 anti-monotonicity matrix with its row sums and the
/// per-rule coverage counts, all addressed by the rule's original index.
#[derive(Debug, Clone)]
pub struct AntiMonotonicityMatrix {
    size: usize,
    cells: Vec<bool>,
    row_sums: Vec<usize>,
    coverage: Vec<usize>,
    live: Vec<bool>,
}

impl AntiMonotonicityMatrix {
    pub fn build(rules: &[Rule], instances: &[Instance]) -> Self {
        let size = rules.len();
        let mut cells = vec![false; size * size];
        let mut row_sums = vec![0; size];

        for i in 0..size {
            for j in (i + 1)..size {
                if rules[i].is_anti_monotonic(&rules[j]) {
                    cells[i * size + j] = true;
                    cells[j * size + i] = true;
                    row_sums[i] += 1;
                    row_sums[j] += 1;
                }
            }
        }

        let coverage = rules
            .iter()
            .map(|rule| {
                instances
                    .iter()
                    .filter(|inst| rule.distance_to_instance(&inst.values) == 0.0)
                    .count()
            })
            .collect();

        Self {
            size,
            cells,
            row_sums,
            coverage,
            live: vec![true; size],
        }
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.size + j]
    }

    pub fn row_sum(&self, i: usize) -> usize {
        self.row_sums[i]
    }

    pub fn coverage(&self, i: usize) -> usize {
        self.coverage[i]
    }

    pub fn is_live(&self, i: usize) -> bool {
        self.live[i]
    }

    pub fn live_count(&self) -> usize {
        self.live.iter().filter(|l| **l).count()
    }

    /// Sum of all live row sums (each conflicting pair counts twice).
    pub fn total_conflicts(&self) -> usize {
        (0..self.size)
            .filter(|&i| self.live[i])
            .map(|i| self.row_sums[i])
            .sum()
    }

    /// Rule with the most conflicts; ties go to the smaller coverage, then
    /// to the earlier rule. `None` once no conflict remains.
    pub fn select_victim(&self) -> Option<usize> {
        let mut victim: Option<usize> = None;
        for i in (0..self.size).filter(|&i| self.live[i] && self.row_sums[i] > 0) {
            victim = match victim {
                None => Some(i),
                Some(v) => {
                    let better = self.row_sums[i] > self.row_sums[v]
                        || (self.row_sums[i] == self.row_sums[v]
                            && self.coverage[i] < self.coverage[v]);
                    if better {
                        Some(i)
                    } else {
                        Some(v)
                    }
                }
            };
        }
        victim
    }

    /// Drop a rule's row and column, decrementing the row sums of every live
    /// rule that conflicted with it.
    pub fn remove(&mut self, victim: usize) {
        debug_assert!(self.live[victim], "rule {victim} already removed");
        self.live[victim] = false;
        self.row_sums[victim] = 0;
        self.coverage[victim] = 0;
        for k in 0..self.size {
            if self.live[k] && self.cells[k * self.size + victim] {
                self.row_sums[k] -= 1;
            }
        }
    }

    /// Keep only the rules still alive, in their original order.
    pub fn retain_live(&self, rules: Vec<Rule>) -> Vec<Rule> {
        rules
            .into_iter()
            .zip(&self.live)
            .filter_map(|(rule, live)| live.then_some(rule))
            .collect()
    }
}

/// Discard rules until no anti-monotonic pair remains.
///
/// Returns the surviving rules and the number removed.
pub fn reduce_rules(
    rules: Vec<Rule>,
    instances: &[Instance],
    options: &InductionOptions,
    trace: &mut InductionTrace,
) -> Result<(Vec<Rule>, usize), MongelError> {
    let mut matrix = AntiMonotonicityMatrix::build(&rules, instances);
    trace.record(TraceStage::Reduce, TraceStepType::BuildMatrix, || {
        format!(
            "Anti-monotonicity matrix over {} rules has {} conflicting pair(s)",
            rules.len(),
            matrix.total_conflicts() / 2
        )
    });

    let mut removed = 0;
    loop {
        options.check_cancelled()?;

        let Some(victim) = matrix.select_victim() else {
            break;
        };

        trace.record(TraceStage::Reduce, TraceStepType::RemoveRule, || {
            format!(
                "Removed rule {} (class {}): {} conflict(s), covers {} instance(s)",
                victim,
                rules[victim].output(),
                matrix.row_sum(victim),
                matrix.coverage(victim)
            )
        });
        matrix.remove(victim);
        removed += 1;
    }

    Ok((matrix.retain_live(rules), removed))
}
