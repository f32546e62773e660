//! Expense record model
//!
//! One logged expense. Serialized field order is `amount`, `description`,
//! `category`, matching the backing file layout.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Amount spent, strictly positive for valid records
    pub amount: Amount,

    /// Free-text description
    pub description: String,

    /// Category of the expense
    pub category: Category,
}

impl ExpenseRecord {
    /// Create a validated record
    pub fn new(
        amount: Amount,
        description: impl Into<String>,
        category: Category,
    ) -> Result<Self, RecordValidationError> {
        let record = Self {
            amount,
            description: description.into(),
            category,
        };
        record.validate()?;
        Ok(record)
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !self.amount.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Amount::MAX_RECORD {
            return Err(RecordValidationError::AmountTooLarge(self.amount));
        }

        if let Category::Unrecognized(name) = &self.category {
            return Err(RecordValidationError::UnknownCategory(name.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.description, self.category, self.amount)
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordValidationError {
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Amount),

    #[error("Amount must not exceed {}, got {0}", Amount::MAX_RECORD)]
    AmountTooLarge(Amount),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
