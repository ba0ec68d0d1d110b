//! Drug record model.

use serde::{Deserialize, Serialize};

/// A single reimbursable drug product from the national price list.
///
/// Field names follow the static dataset's camelCase wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    /// Product code - unique identifier
    pub id: String,
    /// Display name as registered (frequently Korean script)
    pub name: String,
    /// Main ingredient code - the key grouping interchangeable drugs
    pub ingredient_code: String,
    /// Main ingredient name (e.g., "Celecoxib")
    pub ingredient_name: String,
    /// Reimbursement price per unit, in KRW (no minor unit)
    pub price: u32,
    /// Marketing company name
    pub manufacturer: String,
    /// Classification label (e.g., "NSAID")
    pub category: String,
    /// Product photo URL, attached lazily after load when available
    #[serde(default)]
    pub image: Option<String>,
}

/// The name to use when querying the identification service for a product
/// photo: everything before the first parenthetical qualifier, trimmed.
pub fn image_query_name(name: &str) -> &str {
    name.split('(').next().unwrap_or(name).trim()
}

impl Drug {
    /// Identification-service query name for this drug's display name.
    pub fn image_query_name(&self) -> &str {
        image_query_name(&self.name)
    }

    /// Whether this drug belongs to the given ingredient group.
    pub fn has_ingredient(&self, ingredient_code: &str) -> bool {
        self.ingredient_code == ingredient_code
    }
}
