//! Savings aggregation.

use crate::models::{Drug, DrugComparison};

/// Assumed daily intake for chronic-prescription projections. Purely
/// illustrative; not derived from patient data.
pub const PILLS_PER_DAY_DEFAULT: u32 = 2;

/// Aggregate a selected drug and its resolved alternatives into a
/// comparison.
///
/// `alternatives` must already be sorted ascending by price (the
/// resolver's output contract), so the cheapest option is the first
/// element. Returns `None` when `alternatives` is empty - the caller must
/// treat that as "no comparison data", which is different from a
/// zero-savings comparison.
pub fn compare(original: &Drug, alternatives: Vec<Drug>) -> Option<DrugComparison> {
    let cheapest = alternatives.first()?.clone();
    let savings_per_pill = i64::from(original.price) - i64::from(cheapest.price);

    Some(DrugComparison {
        original: original.clone(),
        cheapest,
        alternatives,
        savings_per_pill,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::alternatives;
    use crate::sample::sample_drugs;

    #[test]
    fn test_none_when_no_alternatives_resolve() {
        let drugs = sample_drugs();
        let original = drugs[0].clone();
        assert!(compare(&original, Vec::new()).is_none());
    }

    #[test]
    fn test_savings_is_exact_price_difference() {
        let drugs = sample_drugs();
        let original = drugs
            .iter()
            .find(|d| d.name == "쎄레브렉스캡슐200mg")
            .unwrap();

        let comparison =
            compare(original, alternatives(&drugs, &original.ingredient_code)).unwrap();

        assert_eq!(comparison.savings_per_pill, 523 - 285);
        assert_eq!(comparison.cheapest.name, "쏘롱캡슐200mg");
        assert_eq!(comparison.cheapest, comparison.alternatives[0]);
    }

    #[test]
    fn test_cheapest_original_yields_zero_savings() {
        let drugs = sample_drugs();
        let original = drugs.iter().find(|d| d.name == "쏘롱캡슐200mg").unwrap();

        let comparison =
            compare(original, alternatives(&drugs, &original.ingredient_code)).unwrap();

        assert_eq!(comparison.savings_per_pill, 0);
        assert!(comparison.already_cheapest());
        assert_eq!(comparison.alternatives.len(), 4);
    }

    #[test]
    fn test_savings_may_go_negative() {
        // The selected drug can come from a different snapshot than the
        // resolved set, so every cataloged option may cost more.
        let drugs = sample_drugs();
        let mut original = drugs[3].clone();
        original.price = 100;

        let comparison =
            compare(&original, alternatives(&drugs, &original.ingredient_code)).unwrap();

        assert_eq!(comparison.savings_per_pill, 100 - 285);
        assert!(comparison.already_cheapest());
    }
}
