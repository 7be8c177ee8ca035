//! The owner of the authoritative list of transactions.

use serde::Serialize;

use crate::{
    Error,
    aggregation::sum,
    transaction::core::{TransactionId, TransactionRecord, TransactionType},
};

/// Holds the submitted transactions in the order they were added.
///
/// Records are kept in memory only, they do not survive a restart.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The records in the order they were added.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Append `record` to the end of the ledger.
    pub fn add(&mut self, record: TransactionRecord) {
        tracing::info!(
            "Adding {} transaction {} for {}",
            record.transaction_type,
            record.id,
            record.value
        );
        self.records.push(record);
    }

    /// Remove the record with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if no record has the ID `id`.
    pub fn delete(&mut self, id: &TransactionId) -> Result<TransactionRecord, Error> {
        let index = self
            .records
            .iter()
            .position(|record| &record.id == id)
            .ok_or(Error::DeleteMissingTransaction)?;

        tracing::info!("Deleting transaction {id}");
        Ok(self.records.remove(index))
    }

    /// The income, expense and net totals of all records.
    pub fn totals(&self) -> Totals {
        let (income, expenses): (Vec<&TransactionRecord>, Vec<_>) = self
            .records
            .iter()
            .partition(|record| record.transaction_type == TransactionType::Income);

        let income = sum(&income);
        let expenses = sum(&expenses);

        Totals {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// Running totals over a [Ledger].
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    /// The sum of all income values.
    pub income: f64,
    /// The sum of all expense values.
    pub expenses: f64,
    /// Income minus expenses.
    pub balance: f64,
}
