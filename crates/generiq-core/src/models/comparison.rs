//! Price comparison models.

use serde::{Deserialize, Serialize};

use super::Drug;

/// Result of comparing a selected drug against its same-ingredient
/// alternatives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugComparison {
    /// The drug the consumer was prescribed
    pub original: Drug,
    /// The lowest-priced interchangeable product
    pub cheapest: Drug,
    /// Every interchangeable product, ascending by price. Includes the
    /// original whenever the original is present in the catalog.
    pub alternatives: Vec<Drug>,
    /// Price difference per unit: original minus cheapest. Zero when the
    /// original is already the cheapest; negative when the original is
    /// priced below every cataloged alternative.
    pub savings_per_pill: i64,
}

/// Long-horizon savings derived from a per-unit difference and an assumed
/// daily intake. Illustrative only - the intake is a fixed constant, not
/// patient data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavingsProjection {
    /// KRW saved per year at the assumed intake
    pub yearly: i64,
    /// KRW saved over ten years
    pub decade: i64,
}

impl DrugComparison {
    /// Whether the consumer is already on the most economical product.
    /// Distinct from "no comparison data": that case yields no
    /// `DrugComparison` at all.
    pub fn already_cheapest(&self) -> bool {
        self.savings_per_pill <= 0
    }

    /// Project the per-unit savings over a year and a decade, assuming
    /// `pills_per_day` units taken daily.
    pub fn projected(&self, pills_per_day: u32) -> SavingsProjection {
        let yearly = self.savings_per_pill * i64::from(pills_per_day) * 365;
        SavingsProjection {
            yearly,
            decade: yearly * 10,
        }
    }
}
