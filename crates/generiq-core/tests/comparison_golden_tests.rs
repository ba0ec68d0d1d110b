//! Golden tests for alternative resolution and savings aggregation.
//!
//! These walk the documented end-to-end scenarios over the built-in
//! sample dataset.

use generiq_core::models::Drug;
use generiq_core::{alternatives, compare, sample_drugs, search};

/// One resolution scenario over the sample dataset.
struct GoldenCase {
    id: &'static str,
    ingredient_code: &'static str,
    expected_prices: &'static [u32],
    /// Name of the drug to compare from, and the expected per-pill savings.
    selected: &'static str,
    expected_savings: i64,
}

fn golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "celecoxib-switch-from-originator",
            ingredient_code: "636701ATB",
            expected_prices: &[285, 298, 350, 523],
            selected: "쎄레브렉스캡슐200mg",
            expected_savings: 238,
        },
        GoldenCase {
            id: "acetaminophen-er-switch",
            ingredient_code: "115201ATB",
            expected_prices: &[198, 250, 510],
            selected: "타이레놀8시간이알서방정",
            expected_savings: 312,
        },
        GoldenCase {
            id: "rebamipide-already-on-cheapest",
            ingredient_code: "222901ATB",
            expected_prices: &[68, 75, 106],
            selected: "무코원정",
            expected_savings: 0,
        },
    ]
}

#[test]
fn golden_resolution_and_savings() {
    let drugs = sample_drugs();

    for case in golden_cases() {
        let resolved = alternatives(&drugs, case.ingredient_code);
        let prices: Vec<u32> = resolved.iter().map(|d| d.price).collect();
        assert_eq!(prices, case.expected_prices, "case {}", case.id);

        let selected = drugs
            .iter()
            .find(|d| d.name == case.selected)
            .unwrap_or_else(|| panic!("case {}: selected drug missing", case.id));

        let comparison = compare(selected, resolved)
            .unwrap_or_else(|| panic!("case {}: expected comparison data", case.id));
        assert_eq!(
            comparison.savings_per_pill, case.expected_savings,
            "case {}",
            case.id
        );
        assert_eq!(comparison.cheapest, comparison.alternatives[0], "case {}", case.id);
    }
}

#[test]
fn comparison_is_none_exactly_when_resolution_is_empty() {
    let drugs = sample_drugs();
    let mut selected = drugs[0].clone();

    // Group present: Some.
    let resolved = alternatives(&drugs, &selected.ingredient_code);
    assert!(!resolved.is_empty());
    assert!(compare(&selected, resolved).is_some());

    // Group entirely absent from the catalog: None.
    selected.ingredient_code = "000000XXX".into();
    let resolved = alternatives(&drugs, &selected.ingredient_code);
    assert!(resolved.is_empty());
    assert!(compare(&selected, resolved).is_none());
}

#[test]
fn single_member_group_is_already_optimal_not_missing_data() {
    let loner = Drug {
        id: "100".into(),
        name: "유일정10mg".into(),
        ingredient_code: "777701ATB".into(),
        ingredient_name: "Solitarex".into(),
        price: 420,
        manufacturer: "단독제약".into(),
        category: "misc".into(),
        image: None,
    };
    let drugs = vec![loner.clone()];

    let comparison = compare(&loner, alternatives(&drugs, "777701ATB"))
        .expect("a one-member group still yields comparison data");
    assert_eq!(comparison.alternatives.len(), 1);
    assert_eq!(comparison.savings_per_pill, 0);
    assert!(comparison.already_cheapest());
}

#[test]
fn latin_ingredient_query_finds_korean_branded_products() {
    let drugs = sample_drugs();

    // The display names are Korean script; a lowercase Latin query can
    // only hit via the case-insensitive ingredient match.
    let results = search(&drugs, "acetaminophen");
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|d| d.ingredient_name == "Acetaminophen"));

    // And the match still resolves a full comparison afterwards.
    let comparison = compare(
        &results[0],
        alternatives(&drugs, &results[0].ingredient_code),
    )
    .unwrap();
    assert_eq!(comparison.cheapest.name, "타이리콜8시간이알서방정");
}
