use mongel_core::dataset::load_dataset;
use mongel_core::error::MongelError;
use mongel_core::rule_set::save_rule_set;
use mongel_core::{describe, induce, Classifier, InductionOptions, Strategy};
use std::path::PathBuf;

use crate::output;

pub fn run(
    train_file: PathBuf,
    out: Option<PathBuf>,
    test_file: Option<PathBuf>,
    strategy: &str,
    output_format: &str,
    verbose: bool,
) -> Result<(), MongelError> {
    let strategy: Strategy = strategy.parse()?;
    let train = load_dataset(&train_file)?;

    let options = InductionOptions {
        trace: verbose || output_format == "json",
        ..InductionOptions::default()
    };
    let induction = induce(&train, &options)?;

    let evaluation = match &test_file {
        Some(path) => {
            let test = load_dataset(path)?;
            Some(Classifier::new(&induction.rule_set, strategy).evaluate(&test)?)
        }
        None => None,
    };

    if let Some(path) = &out {
        save_rule_set(&induction.rule_set, path)?;
        eprintln!(
            "Induced {} rule(s), written to {}",
            induction.rule_set.len(),
            path.display()
        );
    }

    let summaries = describe(&induction.rule_set);
    match output_format {
        "json" => output::json::print(&output::json::induction(
            &induction.stats,
            &summaries,
            &induction.trace,
            evaluation.as_ref(),
        )?)?,
        _ => {
            output::table::print_induction(&induction.stats, &summaries);
            if verbose {
                output::table::print_trace(&induction.trace);
            }
            if let Some(eval) = &evaluation {
                output::table::print_evaluation(eval, strategy);
            }
        }
    }

    Ok(())
}
