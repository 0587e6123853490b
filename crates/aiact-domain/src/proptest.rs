//! Property-based tests for the evaluator.
//!
//! These tests use proptest to verify invariants around:
//! - Purity and determinism of `evaluate`
//! - Scoping of exceptions to their own criterion
//! - The inclusive compute threshold
//! - Answers for ids outside the module being ignored

use crate::engine::evaluate;
use crate::test_support::module_v2;
use aiact_catalog::{CatalogVersion, CriterionKind, Module, get_catalog};
use aiact_types::{AnswerSet, AnswerValue, ModuleId, Outcome};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// A valid answer for one criterion, or no answer at all.
fn arb_answer(kind: &CriterionKind) -> BoxedStrategy<Option<AnswerValue>> {
    let value: BoxedStrategy<AnswerValue> = match kind {
        CriterionKind::Boolean => any::<bool>().prop_map(AnswerValue::Bool).boxed(),
        CriterionKind::Enum { options } => prop::sample::select(options.clone())
            .prop_map(AnswerValue::Choice)
            .boxed(),
        CriterionKind::Numeric { threshold, .. } => {
            let threshold = *threshold;
            prop_oneof![
                Just(threshold),
                (0.0f64..2.0).prop_map(move |f| f * threshold),
            ]
            .prop_map(AnswerValue::Number)
            .boxed()
        }
    };
    prop::option::of(value).boxed()
}

/// A valid, possibly partial, answer set for every criterion of `module`.
fn arb_answers(module: &Module) -> BoxedStrategy<AnswerSet> {
    let entries: Vec<BoxedStrategy<(String, Option<AnswerValue>)>> = module
        .all_criteria()
        .into_iter()
        .map(|c| {
            let id = c.id.clone();
            arb_answer(&c.kind)
                .prop_map(move |v| (id.clone(), v))
                .boxed()
        })
        .collect();
    entries
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .filter_map(|(id, v)| v.map(|v| (id, v)))
                .collect::<AnswerSet>()
        })
        .boxed()
}

fn arb_module_id() -> impl Strategy<Value = ModuleId> {
    prop::sample::select(ModuleId::ALL.to_vec())
}

fn arb_version() -> impl Strategy<Value = CatalogVersion> {
    prop::sample::select(CatalogVersion::ALL.to_vec())
}

fn arb_module_with_answers() -> impl Strategy<Value = (&'static Module, AnswerSet)> {
    (arb_version(), arb_module_id()).prop_flat_map(|(version, id)| {
        let module = get_catalog(version)
            .module(id)
            .expect("every catalog carries all four modules");
        arb_answers(module).prop_map(move |answers| (module, answers))
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Same inputs always give the same determination, and the answers are left untouched.
    #[test]
    fn evaluate_is_pure((module, answers) in arb_module_with_answers()) {
        let before = answers.clone();
        let first = evaluate(module, &answers);
        let second = evaluate(module, &answers);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&answers, &before);
        prop_assert!(first.is_ok(), "valid answers rejected: {:?}", first);
    }

    /// Outcomes always belong to the evaluated module and carry no duplicate obligations.
    #[test]
    fn outcome_belongs_to_module((module, answers) in arb_module_with_answers()) {
        let det = evaluate(module, &answers).unwrap();
        prop_assert_eq!(det.outcome.module(), module.id);
        let mut seen = std::collections::HashSet::new();
        for obligation in &det.obligations {
            prop_assert!(seen.insert(obligation), "duplicate obligation {}", obligation);
        }
    }

    /// Answers for ids the module does not declare never change the result.
    #[test]
    fn foreign_answers_are_ignored(
        (module, answers) in arb_module_with_answers(),
        noise in prop::collection::btree_map("zz_[a-z]{1,8}", any::<bool>(), 0..5),
    ) {
        let mut noisy = answers.clone();
        for (id, value) in noise {
            noisy.insert(id, value);
        }
        prop_assert_eq!(evaluate(module, &answers), evaluate(module, &noisy));
    }

    /// An exception of one prohibition never clears another prohibition.
    #[test]
    fn prohibition_exceptions_are_scoped(
        answers in arb_answers(module_v2(ModuleId::ProhibitedPractices)),
    ) {
        let module = module_v2(ModuleId::ProhibitedPractices);
        let det = evaluate(module, &answers).unwrap();
        for criterion in &module.criteria {
            let answered_true = answers.get(&criterion.id) == Some(&AnswerValue::Bool(true));
            let own_exception_yes = criterion.exceptions.iter().any(|e| {
                answers.get(&e.id) == Some(&AnswerValue::Choice("Yes".to_string()))
            });
            let expected = answered_true && !own_exception_yes;
            prop_assert_eq!(det.triggered_by.contains(&criterion.id), expected, "{}", criterion.id);
        }
        prop_assert_eq!(det.outcome == Outcome::Prohibited, !det.triggered_by.is_empty());
    }

    /// Compute alone decides systemic risk once the gate holds: `>=` 1e25 FLOPs.
    #[test]
    fn compute_threshold_is_inclusive(compute in prop_oneof![0.0f64..2e25, Just(1e25)]) {
        let answers = AnswerSet::new()
            .with("g1", true)
            .with("g2", true)
            .with("compute", compute);
        let det = evaluate(module_v2(ModuleId::Gpai), &answers).unwrap();
        let expected = if compute >= 1e25 {
            Outcome::GpaiSystemicRisk
        } else {
            Outcome::GpaiGeneral
        };
        prop_assert_eq!(det.outcome, expected);
    }

    /// A "None / Other" domain is minimal risk whatever the derogation answers.
    #[test]
    fn none_domain_short_circuits(answers in arb_answers(module_v2(ModuleId::HighRisk))) {
        let mut answers = answers;
        answers.insert("domain", "None / Other");
        answers.insert("c1_b", false);
        let det = evaluate(module_v2(ModuleId::HighRisk), &answers).unwrap();
        prop_assert_eq!(det.outcome, Outcome::MinimalRisk);
    }
}
