//! Expense CLI commands
//!
//! Implements the non-interactive `add` and `list` commands.

use crate::display::format_expense_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, ExpenseRecord};
use crate::storage::ExpenseStore;

use super::shell::parse_amount;

/// Validate the arguments into a record
pub fn build_record(amount: &str, description: &str, category: &str) -> TrackerResult<ExpenseRecord> {
    let amount = parse_amount(amount)?;
    let category = Category::parse(category).ok_or_else(|| {
        TrackerError::InvalidRecord(format!(
            "Invalid category: '{}'. Valid categories: Food, Transportation, Entertainment, Utilities, Other (or 1-5)",
            category
        ))
    })?;

    Ok(ExpenseRecord::new(amount, description, category)?)
}

/// Handle `add`
pub fn handle_add_command(
    store: &ExpenseStore,
    amount: &str,
    description: &str,
    category: &str,
) -> TrackerResult<()> {
    let record = build_record(amount, description, category)?;
    store.append(record.clone())?;

    println!("Expense saved.");
    println!("  Amount:      {}", record.amount);
    println!("  Category:    {}", record.category);
    println!("  Description: {}", record.description);
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(store: &ExpenseStore) -> TrackerResult<()> {
    let records = store.load_all()?;
    print!("{}", format_expense_list(&records)?);
    Ok(())
}
