use mongel_core::classify::Evaluation;
use mongel_core::model::Dataset;
use mongel_core::rule_set::RuleSet;
use mongel_core::trace::InductionTrace;
use mongel_core::{InductionStats, RuleSummary, Strategy};

pub fn print_induction(stats: &InductionStats, rules: &[RuleSummary]) {
    println!("=== Induction ===\n");
    println!("  Training instances:   {}", stats.instances);
    println!("  Unique point rules:   {}", stats.after_dedup);
    println!(
        "  After merging:        {} ({} merge(s), {} rejected)",
        stats.after_merge, stats.merges, stats.rejected_merges
    );
    println!(
        "  Final rules:          {} ({} anti-monotonic rule(s) removed)\n",
        stats.final_rules, stats.removed
    );

    print_rules(rules);
}

pub fn print_rules(rules: &[RuleSummary]) {
    let width = rules.len().to_string().len();
    for summary in rules {
        println!("  #{:<width$}  {}", summary.index, summary, width = width);
    }
    println!();
}

pub fn print_trace(trace: &InductionTrace) {
    if trace.steps.is_empty() {
        return;
    }
    println!("=== Trace ===\n");
    for step in &trace.steps {
        println!("  [{:?}] {}", step.stage, step.message);
    }
    println!();
}

pub fn print_evaluation(eval: &Evaluation, strategy: Strategy) {
    println!("=== Evaluation ({strategy}) ===\n");
    println!(
        "  Accuracy: {:.2}% ({} of {} correct)\n",
        eval.accuracy * 100.0,
        eval.correct,
        eval.total
    );
}

pub fn print_predictions(
    dataset: &Dataset,
    rule_set: &RuleSet,
    eval: &Evaluation,
    strategy: Strategy,
    show_all: bool,
) {
    let rows: Vec<(usize, usize, usize)> = dataset
        .instances
        .iter()
        .zip(&eval.predictions)
        .enumerate()
        .map(|(idx, (inst, predicted))| (idx, inst.output, *predicted))
        .filter(|(_, actual, predicted)| show_all || actual != predicted)
        .collect();

    if !rows.is_empty() {
        let heading = if show_all {
            "Predictions"
        } else {
            "Misclassified"
        };
        println!("=== {heading} ===\n");
        let width = dataset.len().to_string().len();
        for (idx, actual, predicted) in rows {
            let marker = if actual == predicted { "" } else { "  (!)" };
            println!(
                "  #{:<width$}  expected {:<12} predicted {}{}",
                idx,
                dataset.class_name(actual),
                rule_set.class_name(predicted),
                marker,
                width = width
            );
        }
        println!();
    }

    print_evaluation(eval, strategy);
}
