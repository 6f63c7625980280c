use mongel_core::error::MongelError;
use mongel_core::rule_set::load_rule_set;
use std::path::Path;

use crate::output;

pub fn run(rules_file: &Path, output_format: &str) -> Result<(), MongelError> {
    let rule_set = load_rule_set(rules_file)?;
    let summaries = mongel_core::describe(&rule_set);

    match output_format {
        "json" => output::json::print(&serde_json::to_value(&summaries)?)?,
        _ => {
            println!(
                "{} rule(s) over {} attribute(s)\n",
                mongel_core::rule_count(&rule_set),
                rule_set.attributes().len()
            );
            output::table::print_rules(&summaries);
        }
    }

    Ok(())
}
