use serde_json::{Map, Value};

use super::types::{Allocation, BudgetData};

/// Result of laying a live reply over a base record.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub data: BudgetData,
    /// Keys taken from the live reply, in field order.
    pub live_keys: Vec<&'static str>,
}

impl MergeOutcome {
    pub fn is_pure_fallback(&self) -> bool {
        self.live_keys.is_empty()
    }
}

/// Shallow key-wise overlay of `live` onto `base`.
///
/// Only the eight known keys are read. A key replaces the base field when it
/// is present and has the right shape: a non-blank string for text fields, a
/// non-empty array of `{name, value}` objects for share fields. Share arrays
/// replace the base array wholesale; one malformed element rejects the whole
/// array. Anything else, including a non-object `live`, leaves the base
/// value in place.
pub fn overlay(base: &BudgetData, live: &Value) -> MergeOutcome {
    let empty = Map::new();
    let obj = live.as_object().unwrap_or(&empty);
    let mut live_keys = Vec::new();

    let agriculture = pick(obj, "agriculture", text_field, &base.agriculture, &mut live_keys);
    let education = pick(obj, "education", text_field, &base.education, &mut live_keys);
    let infrastructure =
        pick(obj, "infrastructure", text_field, &base.infrastructure, &mut live_keys);
    let fiscal_deficit =
        pick(obj, "fiscalDeficit", text_field, &base.fiscal_deficit, &mut live_keys);
    let rupee_comes_from =
        pick(obj, "rupeeComesFrom", share_field, &base.rupee_comes_from, &mut live_keys);
    let rupee_goes_to = pick(obj, "rupeeGoesTo", share_field, &base.rupee_goes_to, &mut live_keys);
    let tax_slabs = pick(obj, "taxSlabs", text_field, &base.tax_slabs, &mut live_keys);
    let viksit_bharat = pick(obj, "viksitBharat", text_field, &base.viksit_bharat, &mut live_keys);

    MergeOutcome {
        data: BudgetData {
            agriculture,
            education,
            infrastructure,
            fiscal_deficit,
            rupee_comes_from,
            rupee_goes_to,
            tax_slabs,
            viksit_bharat,
        },
        live_keys,
    }
}

fn pick<T: Clone>(
    obj: &Map<String, Value>,
    key: &'static str,
    parse: fn(&Value) -> Option<T>,
    fallback: &T,
    live_keys: &mut Vec<&'static str>,
) -> T {
    match obj.get(key).and_then(parse) {
        Some(v) => {
            live_keys.push(key);
            v
        }
        None => fallback.clone(),
    }
}

fn text_field(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn share_field(v: &Value) -> Option<Vec<Allocation>> {
    let items = v.as_array()?;
    if items.is_empty() {
        return None;
    }
    items.iter().map(share_item).collect()
}

fn share_item(v: &Value) -> Option<Allocation> {
    let obj = v.as_object()?;
    let name = obj.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    let value = match obj.get("value")? {
        Value::Number(n) => n.as_f64()?,
        // "19" and "19%" both show up in generated replies
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok()?,
        _ => return None,
    };
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(Allocation { name: name.to_string(), value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::budget::fallback;
    use serde_json::json;

    #[test]
    fn empty_object_yields_fallback() {
        let base = fallback();
        let out = overlay(&base, &json!({}));
        assert_eq!(out.data, base);
        assert!(out.is_pure_fallback());
    }

    #[test]
    fn non_object_yields_fallback() {
        let base = fallback();
        for live in [json!(null), json!([1, 2]), json!("text"), json!(3.9)] {
            assert_eq!(overlay(&base, &live).data, base);
        }
    }

    #[test]
    fn single_key_overrides_only_that_field() {
        let base = fallback();
        let out = overlay(&base, &json!({ "fiscalDeficit": "3.9%" }));
        assert_eq!(out.data.fiscal_deficit, "3.9%");
        assert_eq!(out.live_keys, vec!["fiscalDeficit"]);
        let mut expected = base.clone();
        expected.fiscal_deficit = "3.9%".to_string();
        assert_eq!(out.data, expected);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let base = fallback();
        let out = overlay(&base, &json!({ "defence": "₹6 Lakh Crore", "year": 2026 }));
        assert_eq!(out.data, base);
    }

    #[test]
    fn mistyped_text_keeps_fallback() {
        let base = fallback();
        let out = overlay(
            &base,
            &json!({ "fiscalDeficit": 4.4, "education": "   ", "taxSlabs": null }),
        );
        assert_eq!(out.data, base);
    }

    #[test]
    fn share_array_replaced_wholesale() {
        let base = fallback();
        let out = overlay(
            &base,
            &json!({ "rupeeGoesTo": [ { "name": "Interest", "value": 60 }, { "name": "Rest", "value": "40%" } ] }),
        );
        assert_eq!(
            out.data.rupee_goes_to,
            vec![Allocation::new("Interest", 60.0), Allocation::new("Rest", 40.0)]
        );
        assert_eq!(out.data.rupee_comes_from, base.rupee_comes_from);
    }

    #[test]
    fn malformed_share_element_rejects_array() {
        let base = fallback();
        let out = overlay(
            &base,
            &json!({ "rupeeComesFrom": [ { "name": "GST", "value": 18 }, { "name": "Cess" } ] }),
        );
        assert_eq!(out.data.rupee_comes_from, base.rupee_comes_from);
        assert!(out.is_pure_fallback());
    }

    #[test]
    fn empty_share_array_keeps_fallback() {
        let base = fallback();
        let out = overlay(&base, &json!({ "rupeeComesFrom": [] }));
        assert_eq!(out.data.rupee_comes_from, base.rupee_comes_from);
    }

    #[test]
    fn full_reply_replaces_everything() {
        let base = fallback();
        let live = json!({
            "agriculture": "a", "education": "e", "infrastructure": "i",
            "fiscalDeficit": "4.4%",
            "rupeeComesFrom": [ { "name": "X", "value": 100 } ],
            "rupeeGoesTo": [ { "name": "Y", "value": 100 } ],
            "taxSlabs": "t", "viksitBharat": "v"
        });
        let out = overlay(&base, &live);
        assert_eq!(out.live_keys.len(), 8);
        assert_eq!(out.data.agriculture, "a");
        assert_eq!(out.data.viksit_bharat, "v");
        assert_eq!(out.data.rupee_goes_to, vec![Allocation::new("Y", 100.0)]);
    }
}
