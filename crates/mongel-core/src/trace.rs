use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStage {
    Initialize,
    Merge,
    Reduce,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    PointRules,
    RemoveDuplicates,
    AcceptMerge,
    RejectMerge,
    BuildMatrix,
    RemoveRule,
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub stage: TraceStage,
    pub step_type: TraceStepType,
    pub message: String,
}

/// Ordered record of the decisions taken while inducing a rule set.
///
/// Recording is a no-op unless the trace was created enabled, so the
/// message closures are never evaluated on untraced runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InductionTrace {
    pub trace_schema_version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<TraceStep>,
    #[serde(skip)]
    enabled: bool,
}

impl Default for InductionTrace {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InductionTrace {
    pub fn new(enabled: bool) -> Self {
        Self {
            trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
            steps: Vec::new(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn record<F>(&mut self, stage: TraceStage, step_type: TraceStepType, message: F)
    where
        F: FnOnce() -> String,
    {
        if self.enabled {
            self.steps.push(TraceStep {
                stage,
                step_type,
                message: message(),
            });
        }
    }

    pub fn count(&self, step_type: TraceStepType) -> usize {
        self.steps
            .iter()
            .filter(|s| s.step_type == step_type)
            .count()
    }
}
