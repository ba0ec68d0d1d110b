//! Same-ingredient alternative resolution.
//!
//! Drugs sharing an ingredient code are interchangeable for price
//! comparison. Resolution is an exact-equality filter followed by an
//! ascending price sort - no fuzzy matching, no scoring.

use crate::models::Drug;

/// All drugs in `drugs` whose ingredient code equals `ingredient_code`,
/// cheapest first. Equal prices keep their source order (the sort is
/// stable). Returns an empty Vec when the group is absent entirely.
pub fn alternatives(drugs: &[Drug], ingredient_code: &str) -> Vec<Drug> {
    let mut matches: Vec<Drug> = drugs
        .iter()
        .filter(|d| d.has_ingredient(ingredient_code))
        .cloned()
        .collect();
    matches.sort_by_key(|d| d.price);
    matches
}
