pub mod fallback;
pub mod merge;
pub mod types;

pub use fallback::fallback;
pub use merge::{MergeOutcome, overlay};
pub use types::{Allocation, BUDGET_KEYS, BudgetData};
