use mongel_core::classify::Evaluation;
use mongel_core::error::MongelError;
use mongel_core::trace::InductionTrace;
use mongel_core::{InductionStats, RuleSummary};
use serde_json::{json, Value};

pub fn print(value: &Value) -> Result<(), MongelError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Report for `mongel induce -o json`.
pub fn induction(
    stats: &InductionStats,
    rules: &[RuleSummary],
    trace: &InductionTrace,
    evaluation: Option<&Evaluation>,
) -> Result<Value, MongelError> {
    let mut value = json!({
        "stats": serde_json::to_value(stats)?,
        "rules": serde_json::to_value(rules)?,
        "trace": serde_json::to_value(trace)?,
    });
    if let Some(eval) = evaluation {
        value["evaluation"] = serde_json::to_value(eval)?;
    }
    Ok(value)
}
