use mongel_core::dataset::load_dataset;
use mongel_core::error::MongelError;
use mongel_core::rule_set::load_rule_set;
use mongel_core::{Classifier, Strategy};
use std::path::PathBuf;

use crate::output;

pub fn run(
    rules_file: PathBuf,
    input_file: PathBuf,
    strategy: &str,
    output_format: &str,
    show_all: bool,
) -> Result<(), MongelError> {
    let strategy: Strategy = strategy.parse()?;
    let rule_set = load_rule_set(&rules_file)?;
    let dataset = load_dataset(&input_file)?;

    if dataset.attributes != rule_set.attributes() {
        return Err(MongelError::DatasetInvalid(format!(
            "attributes of {} do not match the rule set in {}",
            input_file.display(),
            rules_file.display()
        )));
    }

    let evaluation = Classifier::new(&rule_set, strategy).evaluate(&dataset)?;

    match output_format {
        "json" => output::json::print(&serde_json::to_value(&evaluation)?)?,
        _ => output::table::print_predictions(&dataset, &rule_set, &evaluation, strategy, show_all),
    }

    Ok(())
}
