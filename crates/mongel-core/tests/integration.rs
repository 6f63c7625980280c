//! End-to-end tests for induce() and classify().
//!
//! Scenario tests use tiny hand-built datasets; property tests run the full
//! pipeline over seeded random datasets with mixed attribute kinds.

use mongel_core::error::MongelError;
use mongel_core::model::{AttributeDef, Dataset, Instance};
use mongel_core::rule::{Condition, Rule};
use mongel_core::rule_set::RuleSet;
use mongel_core::trace::TraceStepType;
use mongel_core::{
    classify, describe, induce, rule_count, Classifier, InductionOptions, Strategy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn one_dim(points: &[(f64, usize)]) -> Dataset {
    Dataset {
        name: Some("one-dim".into()),
        attributes: vec![AttributeDef::numeric("x", 0.0, 1.0)],
        classes: vec!["zero".into(), "one".into()],
        instances: points
            .iter()
            .map(|&(x, output)| Instance::new(vec![x], output))
            .collect(),
    }
}

fn interval(rule: &Rule, attr: usize) -> (f64, f64) {
    match rule.conditions()[attr] {
        Condition::Interval { min, max } => (min, max),
        Condition::Members(_) => panic!("attribute {attr} is nominal"),
    }
}

/// Random dataset with two numeric attributes and one nominal attribute.
/// Labels follow a noisy monotone score so that merging and reduction both
/// have work to do.
fn random_dataset(seed: u64, size: usize, classes: usize) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let instances = (0..size)
        .map(|_| {
            let a: f64 = (rng.gen::<f64>() * 20.0).round() / 20.0;
            let b: f64 = (rng.gen::<f64>() * 20.0).round() / 20.0;
            let c = rng.gen_range(0..3) as f64 / 2.0;
            let score = (a + b + c) / 3.0 + rng.gen_range(-0.15..0.15);
            let output = ((score * classes as f64).floor().max(0.0) as usize).min(classes - 1);
            Instance::new(vec![a, b, c], output)
        })
        .collect();
    Dataset {
        name: Some(format!("random-{seed}")),
        attributes: vec![
            AttributeDef::numeric("a", 0.0, 100.0),
            AttributeDef::numeric("b", -1.0, 1.0),
            AttributeDef::nominal("c", vec!["low", "mid", "high"]),
        ],
        classes: (0..classes).map(|i| format!("c{i}")).collect(),
        instances,
    }
}

// ---------------------------------------------------------------------------
// Scenario A: two points of different classes stay separate
// ---------------------------------------------------------------------------
#[test]
fn two_points_two_classes() {
    let ds = one_dim(&[(0.2, 0), (0.8, 1)]);
    let result = induce(&ds, &InductionOptions::default()).unwrap();

    assert_eq!(rule_count(&result.rule_set), 2);
    assert_eq!(result.stats.merges, 0);
    assert_eq!(result.stats.removed, 0);
    assert_eq!(classify(&result.rule_set, &[0.3], Strategy::NearestRule).unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Scenario B: a single class collapses into one interval
// ---------------------------------------------------------------------------
#[test]
fn single_class_collapses() {
    let ds = one_dim(&[(0.1, 0), (0.2, 0), (0.3, 0)]);
    let result = induce(&ds, &InductionOptions::default()).unwrap();

    assert_eq!(result.rule_set.len(), 1);
    let rule = &result.rule_set.rules()[0];
    assert_eq!(rule.output(), 0);
    assert_eq!(interval(rule, 0), (0.1, 0.3));
}

// ---------------------------------------------------------------------------
// Scenario C: identical inputs with different outputs leave exactly one rule
// ---------------------------------------------------------------------------
#[test]
fn contradictory_duplicates_reduced_to_one() {
    let ds = one_dim(&[(0.5, 0), (0.5, 1)]);
    let result = induce(&ds, &InductionOptions::default()).unwrap();

    assert_eq!(result.stats.after_merge, 2);
    assert_eq!(result.stats.removed, 1);
    assert_eq!(result.rule_set.len(), 1);
}

// ---------------------------------------------------------------------------
// Scenario D: ordered-dominance lookup with fallback to the last rule
// ---------------------------------------------------------------------------
#[test]
fn ordered_dominance_lookup() {
    let rule_a = Rule::new(vec![Condition::Interval { min: 0.0, max: 0.5 }], 0).unwrap();
    let rule_b = Rule::new(vec![Condition::Interval { min: 0.51, max: 1.0 }], 1).unwrap();
    let rs = RuleSet::new(
        vec![AttributeDef::numeric("x", 0.0, 1.0)],
        vec!["zero".into(), "one".into()],
        vec![rule_a, rule_b],
    )
    .unwrap();

    let c = Classifier::new(&rs, Strategy::OrderedDominance);
    assert_eq!(c.classify(&[0.7]), 1);
    assert_eq!(c.classify(&[1.2]), 1);
    // strictly below rule_a: rule_a dominates the point
    assert_eq!(c.classify(&[-0.1]), 0);
}

// ---------------------------------------------------------------------------
// Precondition violations
// ---------------------------------------------------------------------------
#[test]
fn empty_training_set_fails_fast() {
    let ds = one_dim(&[]);
    assert!(matches!(
        induce(&ds, &InductionOptions::default()),
        Err(MongelError::EmptyTrainingSet)
    ));
}

#[test]
fn wrong_arity_at_classification_fails_fast() {
    let ds = one_dim(&[(0.2, 0), (0.8, 1)]);
    let result = induce(&ds, &InductionOptions::default()).unwrap();
    assert!(matches!(
        classify(&result.rule_set, &[0.2, 0.3], Strategy::OrderedDominance),
        Err(MongelError::AttributeCountMismatch {
            expected: 1,
            found: 2
        })
    ));
}

// ---------------------------------------------------------------------------
// Degenerate data terminates without errors
// ---------------------------------------------------------------------------
#[test]
fn all_identical_instances_one_class() {
    let ds = one_dim(&[(0.4, 1), (0.4, 1), (0.4, 1)]);
    let result = induce(&ds, &InductionOptions::default()).unwrap();
    assert_eq!(result.stats.after_dedup, 1);
    assert_eq!(result.stats.merges, 0);
    assert_eq!(result.rule_set.len(), 1);
}

#[test]
fn pairwise_incomparable_points_do_not_merge() {
    let ds = Dataset {
        name: None,
        attributes: vec![
            AttributeDef::numeric("x", 0.0, 1.0),
            AttributeDef::numeric("y", 0.0, 1.0),
        ],
        classes: vec![],
        instances: vec![
            Instance::new(vec![0.1, 0.9], 0),
            Instance::new(vec![0.5, 0.5], 0),
            Instance::new(vec![0.9, 0.1], 0),
        ],
    };
    let result = induce(&ds, &InductionOptions::default()).unwrap();
    assert_eq!(result.stats.merges, 0);
    assert_eq!(result.stats.removed, 0);
    assert_eq!(result.rule_set.len(), 3);
}

// ---------------------------------------------------------------------------
// Properties over random datasets
// ---------------------------------------------------------------------------
#[test]
fn no_anti_monotonic_pair_survives() {
    for seed in 0..8 {
        let ds = random_dataset(seed, 60, 3);
        let result = induce(&ds, &InductionOptions::default()).unwrap();
        let rules = result.rule_set.rules();
        assert!(!rules.is_empty());
        for a in rules {
            for b in rules {
                assert!(!a.is_anti_monotonic(b), "seed {seed}");
            }
        }
    }
}

#[test]
fn merged_rules_never_overlap_other_classes() {
    // reduction only removes rules, so the final set inherits merge safety
    for seed in 0..8 {
        let ds = random_dataset(seed, 60, 3);
        let result = induce(&ds, &InductionOptions::default()).unwrap();
        let rules = result.rule_set.rules();
        for a in rules {
            for b in rules {
                if a.output() != b.output() {
                    assert!(!a.overlaps(b), "seed {seed}");
                }
            }
        }
    }
}

#[test]
fn classification_is_total() {
    let ds = random_dataset(42, 80, 4);
    let result = induce(&ds, &InductionOptions::default()).unwrap();
    let observed: Vec<usize> = ds.instances.iter().map(|i| i.output).collect();

    let probe = random_dataset(7, 100, 4);
    for strategy in [Strategy::NearestRule, Strategy::OrderedDominance] {
        let predictions = Classifier::new(&result.rule_set, strategy)
            .classify_batch(&probe.instances)
            .unwrap();
        assert_eq!(predictions.len(), probe.instances.len());
        for p in predictions {
            assert!(observed.contains(&p), "{strategy} predicted unseen class {p}");
        }
    }
}

#[test]
fn merge_never_shrinks_area() {
    let ds = random_dataset(3, 30, 2);
    let attrs = &ds.attributes;
    for pair in ds.instances.windows(2) {
        let a = Rule::point(&pair[0].values, pair[0].output, attrs);
        let b = Rule::point(&pair[1].values, pair[1].output, attrs);
        let m = a.merge(&b);
        assert!(m.area() >= a.area().max(b.area()));
        let bigger = m.merge(&a);
        assert!(bigger.area() >= m.area());
    }
}

#[test]
fn nearest_rule_reproduces_training_labels_without_conflicts() {
    // clean monotone data: every training instance is covered by a rule of its class
    let ds = one_dim(&[(0.05, 0), (0.1, 0), (0.3, 0), (0.6, 1), (0.7, 1), (0.95, 1)]);
    let result = induce(&ds, &InductionOptions::default()).unwrap();
    assert_eq!(result.rule_set.len(), 2);
    let eval = Classifier::new(&result.rule_set, Strategy::NearestRule)
        .evaluate(&ds)
        .unwrap();
    assert_eq!(eval.correct, ds.len());
    assert_eq!(eval.accuracy, 1.0);
}

#[test]
fn induction_is_deterministic() {
    let ds = random_dataset(11, 70, 3);
    let first = induce(&ds, &InductionOptions::default()).unwrap();
    let second = induce(&ds, &InductionOptions::default()).unwrap();
    assert_eq!(first.rule_set.rules(), second.rule_set.rules());
    assert_eq!(first.stats, second.stats);
}

#[test]
fn describe_covers_every_rule() {
    let ds = random_dataset(5, 40, 2);
    let result = induce(&ds, &InductionOptions::default()).unwrap();
    let summaries = describe(&result.rule_set);
    assert_eq!(summaries.len(), result.rule_set.len());
    for (summary, rule) in summaries.iter().zip(result.rule_set.rules()) {
        assert_eq!(summary.output, rule.output());
        assert_eq!(summary.conditions.len(), 3);
        assert!(summary.to_string().starts_with("IF a "));
    }
}

#[test]
fn trace_records_pipeline() {
    let ds = random_dataset(9, 40, 3);
    let options = InductionOptions {
        trace: true,
        ..InductionOptions::default()
    };
    let result = induce(&ds, &options).unwrap();
    assert_eq!(result.trace.count(TraceStepType::AcceptMerge), result.stats.merges);
    assert_eq!(result.trace.count(TraceStepType::RemoveRule), result.stats.removed);
    assert_eq!(
        result.trace.count(TraceStepType::RejectMerge),
        result.stats.rejected_merges
    );
}
