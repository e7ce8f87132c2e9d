//! Category labels
//!
//! Categories are free-form strings. Expenses and category budgets refer to
//! the same category only through string equality; nothing here enforces it.

/// Categories offered by the entry form. Storage accepts any label.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Groceries",
    "Entertainment",
    "Transportation",
    "Utilities",
    "Dining",
    "Healthcare",
    "Shopping",
    "Housing",
    "Education",
    "Travel",
    "Personal Care",
    "Gifts",
    "Other",
];

/// Whether `category` is one of the suggested labels (exact match)
pub fn is_suggested(category: &str) -> bool {
    SUGGESTED_CATEGORIES.contains(&category)
}
