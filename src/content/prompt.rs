use chrono::NaiveDate;

use crate::models::budget::BUDGET_KEYS;

/// Prompt asking for the eight budget keys as one JSON object.
pub fn budget_prompt(fiscal_year: &str, today: NaiveDate) -> String {
    format!(
        "Generate a detailed summary of the India Union Budget {fiscal_year}.\n\
         Include:\n\
         1. Key allocations for Agriculture, Education, and Infrastructure.\n\
         2. Fiscal Deficit target for {fiscal_year}.\n\
         3. 'Rupee Comes From' and 'Rupee Goes To' data percentages.\n\
         4. Major tax slab changes in the New Tax Regime.\n\
         5. Vision for 'Viksit Bharat @ 2047' as mentioned in the budget.\n\
         \n\
         Format the response as a JSON object with exactly these keys: {keys}.\n\
         agriculture, education, infrastructure, fiscalDeficit, taxSlabs and viksitBharat are strings.\n\
         rupeeComesFrom and rupeeGoesTo are arrays of objects {{\"name\": string, \"value\": number}} \
         where value is a percentage and each array sums to 100.\n\
         Since today is {date}, provide realistic data based on the actual budget presented for {fiscal_year}.",
        keys = BUDGET_KEYS.join(", "),
        date = today.format("%b %d, %Y"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_year_date_and_every_key() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 24).unwrap();
        let prompt = budget_prompt("2026-27", today);
        assert!(prompt.contains("India Union Budget 2026-27"));
        assert!(prompt.contains("Feb 24, 2026"));
        for key in BUDGET_KEYS {
            assert!(prompt.contains(key), "prompt missing {key}");
        }
    }
}
