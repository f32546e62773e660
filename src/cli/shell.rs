//! Interactive expense shell
//!
//! A menu loop over any line-based input and output. Bad input, including
//! bytes that are not UTF-8, is answered with a message and the same question
//! again. Out-of-range amounts in the store are reported and the menu goes on.
//! Only store I/O failures and terminal failures end the session with an
//! error. End of input ends the session quietly.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDateTime};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Category, ExpenseRecord};
use crate::reports::summarize;
use crate::storage::ExpenseStore;

/// Interactive menu over an expense store
pub struct Shell<'a, R, W> {
    store: &'a ExpenseStore,
    input: R,
    output: W,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Validate a typed amount
///
/// Text that is not a number is `InvalidInput`; a number that is not
/// positive or is above `Amount::MAX_RECORD` is `InvalidRecord`.
pub fn parse_amount(input: &str) -> TrackerResult<Amount> {
    let amount =
        Amount::parse(input).map_err(|e| TrackerError::InvalidInput(e.to_string()))?;
    if !amount.is_positive() {
        return Err(TrackerError::InvalidRecord(
            "Amount must be positive".to_string(),
        ));
    }
    if amount > Amount::MAX_RECORD {
        return Err(TrackerError::InvalidRecord(format!(
            "Amount must not exceed {}",
            Amount::MAX_RECORD
        )));
    }
    Ok(amount)
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a ExpenseStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            clock: local_now,
        }
    }

    /// Replace the clock used to stamp report ids
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            writeln!(self.output, "\n--- Expense Tracker ---")?;
            writeln!(self.output, "1. Add Expense")?;
            writeln!(self.output, "2. Analyze Expenses")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let outcome = match choice.trim() {
                "1" => match self.add_expense() {
                    Ok(true) => Ok(()),
                    Ok(false) => return Ok(()),
                    Err(e) => Err(e),
                },
                "2" => self.analyze(),
                "3" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Ok(())
                }
            };

            match outcome {
                Err(e) if e.is_amount_range() => writeln!(self.output, "Error: {}", e)?,
                other => other?,
            }
        }
    }

    /// Collect one expense and append it; `false` if input ended first
    fn add_expense(&mut self) -> TrackerResult<bool> {
        let Some(amount) = self.prompt_amount()? else {
            return Ok(false);
        };
        let Some(description) = self.prompt("Enter expense description: ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt_category()? else {
            return Ok(false);
        };

        let record = ExpenseRecord::new(amount, description, category)?;
        self.store.append(record)?;
        writeln!(self.output, "Expense saved.")?;
        Ok(true)
    }

    fn analyze(&mut self) -> TrackerResult<()> {
        let snapshot = self.store.snapshot()?;
        if snapshot.status.is_corrupt() {
            writeln!(
                self.output,
                "Warning: stored expense data could not be read and was treated as empty."
            )?;
        }

        let report = summarize(&snapshot.records, (self.clock)())?;
        write!(self.output, "{}", report.format_terminal())?;
        Ok(())
    }

    fn prompt_amount(&mut self) -> TrackerResult<Option<Amount>> {
        loop {
            let Some(line) = self.prompt("Enter expense amount: ")? else {
                return Ok(None);
            };

            match parse_amount(&line) {
                Ok(amount) => return Ok(Some(amount)),
                Err(TrackerError::InvalidInput(_)) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?
                }
                Err(TrackerError::InvalidRecord(reason)) => {
                    writeln!(self.output, "{}.", reason)?
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn prompt_category(&mut self) -> TrackerResult<Option<Category>> {
        writeln!(self.output, "Select a category:")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, category)?;
        }

        loop {
            let Some(line) = self.prompt("Enter category number: ")? else {
                return Ok(None);
            };

            match line.trim().parse::<usize>() {
                Ok(choice) => match Category::from_menu_choice(choice) {
                    Some(category) => return Ok(Some(category)),
                    None => writeln!(self.output, "Invalid category number.")?,
                },
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Print `text` and read one line without its line ending
    ///
    /// Invalid UTF-8 is replaced with U+FFFD, so it reaches the caller as
    /// text that fails to parse rather than as a read error.
    fn prompt(&mut self, text: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
