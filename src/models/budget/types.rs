use serde::{Deserialize, Serialize};

/// One named share of a rupee, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub name: String,
    pub value: f64,
}

impl Allocation {
    pub fn new(name: &str, value: f64) -> Self {
        Self { name: name.to_string(), value }
    }

    /// Sum of a share sequence. Expected to be 100 but never enforced.
    pub fn total(shares: &[Allocation]) -> f64 {
        shares.iter().map(|a| a.value).sum()
    }
}

/// The figures shown across the deck. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetData {
    pub agriculture: String,
    pub education: String,
    pub infrastructure: String,
    pub fiscal_deficit: String,
    pub rupee_comes_from: Vec<Allocation>,
    pub rupee_goes_to: Vec<Allocation>,
    pub tax_slabs: String,
    pub viksit_bharat: String,
}

/// JSON keys the generator is asked for, in prompt order.
pub const BUDGET_KEYS: [&str; 8] = [
    "agriculture",
    "education",
    "infrastructure",
    "fiscalDeficit",
    "rupeeComesFrom",
    "rupeeGoesTo",
    "taxSlabs",
    "viksitBharat",
];
