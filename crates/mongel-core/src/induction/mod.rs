pub mod initializer;
pub mod merger;
pub mod reducer;

use crate::error::MongelError;
use crate::model::Dataset;
use crate::rule_set::RuleSet;
use crate::trace::{InductionTrace, TraceStage, TraceStepType};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag a caller can raise to abort a running induction.
///
/// It is only observed between merge passes and between reducer removals.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InductionOptions {
    /// Record an [`InductionTrace`] of every decision.
    pub trace: bool,
    pub cancel: Option<CancelFlag>,
}

impl InductionOptions {
    pub(crate) fn check_cancelled(&self) -> Result<(), MongelError> {
        match &self.cancel {
            Some(flag) if flag.is_cancelled() => Err(MongelError::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Rule counts after each stage of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InductionStats {
    pub instances: usize,
    pub initial_rules: usize,
    pub after_dedup: usize,
    pub after_merge: usize,
    pub final_rules: usize,
    pub merges: usize,
    pub rejected_merges: usize,
    pub removed: usize,
}

#[derive(Debug, Clone)]
pub struct Induction {
    pub rule_set: RuleSet,
    pub trace: InductionTrace,
    pub stats: InductionStats,
}

/// Run the full pipeline: point rules, duplicate removal, merging and
/// anti-monotonic reduction.
pub fn induce(dataset: &Dataset, options: &InductionOptions) -> Result<Induction, MongelError> {
    if dataset.instances.is_empty() {
        return Err(MongelError::EmptyTrainingSet);
    }
    let expected = dataset.attributes.len();
    if let Some(bad) = dataset.instances.iter().find(|i| i.values.len() != expected) {
        return Err(MongelError::AttributeCountMismatch {
            expected,
            found: bad.values.len(),
        });
    }

    let mut trace = InductionTrace::new(options.trace);
    let mut stats = InductionStats {
        instances: dataset.instances.len(),
        initial_rules: dataset.instances.len(),
        ..InductionStats::default()
    };

    let mut rules = initializer::initialize(&dataset.instances, &dataset.attributes, &mut trace);
    stats.after_dedup = rules.len();

    let merge_stats = merger::merge_rules(&mut rules, options, &mut trace)?;
    stats.merges = merge_stats.merges;
    stats.rejected_merges = merge_stats.rejected;
    stats.after_merge = rules.len();

    let (rules, removed) = reducer::reduce_rules(rules, &dataset.instances, options, &mut trace)?;
    stats.removed = removed;
    stats.final_rules = rules.len();

    trace.record(TraceStage::Summary, TraceStepType::Finished, || {
        format!(
            "{} instances -> {} unique point rules -> {} merged rules -> {} final rules",
            stats.instances, stats.after_dedup, stats.after_merge, stats.final_rules
        )
    });

    let rule_set = RuleSet::from_induction(
        dataset.attributes.clone(),
        dataset.classes.clone(),
        rules,
    );

    Ok(Induction {
        rule_set,
        trace,
        stats,
    })
}
