use crate::model::Instance;
use serde::{Deserialize, Serialize};

/// Result of classifying a labeled dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Predicted class index per instance, in dataset order.
    pub predictions: Vec<usize>,
    /// Number of predictions that match the instance's known output.
    pub correct: usize,
    pub total: usize,
    /// `correct / total`, or 0 for an empty dataset.
    pub accuracy: f64,
}

impl Evaluation {
    pub fn new(instances: &[Instance], predictions: Vec<usize>) -> Self {
        let correct = instances
            .iter()
            .zip(&predictions)
            .filter(|(inst, predicted)| inst.output == **predicted)
            .count();
        let total = predictions.len();
        let accuracy = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        };
        Self {
            predictions,
            correct,
            total,
            accuracy,
        }
    }
}
