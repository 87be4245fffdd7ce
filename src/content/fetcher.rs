use serde_json::{Map, Value};

use super::TextGenerator;
use crate::models::budget::{self, Allocation, BudgetData};

/// Issues one generation request and always comes back with a complete
/// `BudgetData`: whatever the generator fails to supply is filled from the
/// fallback dataset.
pub struct ContentFetcher<G> {
    generator: G,
    prompt: String,
}

impl<G: TextGenerator> ContentFetcher<G> {
    pub fn new(generator: G, prompt: String) -> Self {
        Self { generator, prompt }
    }

    /// Single attempt, no retry. Errors are logged and swallowed.
    pub async fn fetch(&self) -> BudgetData {
        log::info!("Requesting budget figures from generator");

        let live = match self.generator.generate_json(&self.prompt).await {
            Ok(text) => parse_reply(&text),
            Err(e) => {
                log::warn!("Budget generation failed, using fallback data: {e}");
                Value::Object(Map::new())
            }
        };

        let merged = budget::overlay(&budget::fallback(), &live);
        if merged.is_pure_fallback() {
            log::info!("Budget data ready (fallback only)");
        } else {
            log::info!(
                "Budget data ready ({} of {} fields live: {})",
                merged.live_keys.len(),
                budget::BUDGET_KEYS.len(),
                merged.live_keys.join(", ")
            );
        }

        warn_if_not_whole("rupeeComesFrom", &merged.data.rupee_comes_from);
        warn_if_not_whole("rupeeGoesTo", &merged.data.rupee_goes_to);

        merged.data
    }
}

/// Parse generator text as JSON; anything unparsable becomes `{}`.
pub fn parse_reply(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Generator reply is not valid JSON ({e}), using fallback data");
            Value::Object(Map::new())
        }
    }
}

fn warn_if_not_whole(key: &str, shares: &[Allocation]) {
    let total = Allocation::total(shares);
    if (total - 100.0).abs() > 0.5 {
        log::warn!("{key} shares add up to {total}, not 100");
    }
}
