//! Expense display formatting
//!
//! Formats stored records as a table for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, ExpenseRecord};

use super::report::truncate;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Amount")]
    amount: Amount,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format records as a table, numbered from 1 in insertion order
pub fn format_expense_list(records: &[ExpenseRecord]) -> TrackerResult<String> {
    if records.is_empty() {
        return Ok("No expenses recorded.\n".to_string());
    }

    let rows = records.iter().enumerate().map(|(i, r)| ExpenseRow {
        index: i + 1,
        amount: r.amount,
        category: r.category.to_string(),
        description: truncate(&r.description, DESCRIPTION_WIDTH),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(1), Alignment::right());

    let total = Amount::checked_sum(records.iter().map(|r| r.amount)).ok_or_else(|| {
        TrackerError::AmountOverflow("expense list total exceeds the representable range".into())
    })?;
    Ok(format!(
        "{}\n{} expense(s), total {}\n",
        table,
        records.len(),
        total
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[]).unwrap(), "No expenses recorded.\n");
    }

    #[test]
    fn test_list_contents() {
        let records = vec![
            ExpenseRecord::new(Amount::from(12), "Lunch", Category::Food).unwrap(),
            ExpenseRecord::new(Amount::parse("3.5").unwrap(), "Bus", Category::Transportation)
                .unwrap(),
        ];

        let output = format_expense_list(&records).unwrap();
        assert!(output.contains("Lunch"));
        assert!(output.contains("Transportation"));
        assert!(output.contains("12.00"));
        assert!(output.contains("3.50"));
        assert!(output.contains("2 expense(s), total 15.50"));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let long = "x".repeat(100);
        let records = vec![ExpenseRecord::new(Amount::from(1), long.clone(), Category::Other).unwrap()];

        let output = format_expense_list(&records).unwrap();
        assert!(!output.contains(&long));
        assert!(output.contains("..."));
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let huge = Amount::parse("50000000000000000000000000000").unwrap();
        let records = vec![
            ExpenseRecord {
                amount: huge,
                description: "a".into(),
                category: Category::Food,
            };
            2
        ];

        let err = format_expense_list(&records).unwrap_err();
        assert!(matches!(err, TrackerError::AmountOverflow(_)));
    }
}
