pub mod classify;
pub mod dataset;
pub mod describe;
pub mod error;
pub mod induction;
pub mod model;
pub mod rule;
pub mod rule_set;
pub mod trace;

pub use classify::{Classifier, Evaluation, Strategy};
pub use describe::{describe, rule_count, RuleSummary};
pub use induction::{induce, CancelFlag, Induction, InductionOptions, InductionStats};

use error::MongelError;
use model::Dataset;
use rule_set::RuleSet;

/// Classify one normalized instance against a rule set.
///
/// Fails fast when the instance does not carry one value per attribute.
pub fn classify(
    rule_set: &RuleSet,
    values: &[f64],
    strategy: Strategy,
) -> Result<usize, MongelError> {
    Classifier::new(rule_set, strategy).try_classify(values)
}

/// Induce a rule set from a training dataset and score it on a test dataset.
pub fn induce_and_evaluate(
    train: &Dataset,
    test: &Dataset,
    strategy: Strategy,
    options: &InductionOptions,
) -> Result<(Induction, Evaluation), MongelError> {
    let induction = induce(train, options)?;
    let evaluation = Classifier::new(&induction.rule_set, strategy).evaluate(test)?;
    Ok((induction, evaluation))
}
