use super::types::{Allocation, BudgetData};

/// Static figures used whenever the live generator is unavailable or
/// leaves a key out.
pub fn fallback() -> BudgetData {
    BudgetData {
        agriculture: "₹1.65 Lakh Crore for Digital Public Infrastructure".to_string(),
        education: "₹1.25 Lakh Crore with focus on Skill India 2.0".to_string(),
        infrastructure: "₹12.5 Lakh Crore (Capex increase of 11%)".to_string(),
        fiscal_deficit: "4.2%".to_string(),
        rupee_comes_from: vec![
            Allocation::new("Income Tax", 19.0),
            Allocation::new("GST", 18.0),
            Allocation::new("Corporation Tax", 17.0),
            Allocation::new("Borrowings", 27.0),
            Allocation::new("Excise Duty", 5.0),
            Allocation::new("Customs", 4.0),
            Allocation::new("Non-Tax Receipts", 9.0),
            Allocation::new("Non-Debt Capital", 1.0),
        ],
        rupee_goes_to: vec![
            Allocation::new("Interest Payments", 20.0),
            Allocation::new("States' Share", 20.0),
            Allocation::new("Central Sector Schemes", 16.0),
            Allocation::new("Centrally Sponsored Schemes", 8.0),
            Allocation::new("Defense", 8.0),
            Allocation::new("Subsidies", 6.0),
            Allocation::new("Finance Commission", 9.0),
            Allocation::new("Pensions", 4.0),
            Allocation::new("Other Expenditure", 9.0),
        ],
        tax_slabs: "Standard deduction increased to ₹75,000. Tax-free income up to ₹12 Lakhs."
            .to_string(),
        viksit_bharat:
            "Focus on 4 pillars: Poor, Women, Youth, and Farmers (Gyan) for a developed India by 2047."
                .to_string(),
    }
}
