//! Defines the core data models for transactions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::HasValue;

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned.
    #[default]
    Income,
    /// Money that was spent.
    Expense,
}

impl TransactionType {
    /// The value used for this type in HTML forms and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The human readable label for this type.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unique identifier of a [TransactionRecord].
///
/// IDs are opaque strings, they are never parsed or compared other than for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap `id` as a transaction ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An expense or income that has been submitted through the transaction form.
///
/// Records are created by [crate::transaction::TransactionForm::submit] and
/// are never modified afterwards. The `id` is the only key used for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction was income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub value: f64,
}

impl HasValue for TransactionRecord {
    fn value(&self) -> f64 {
        self.value
    }
}

// ============================================================================
// ID GENERATION
// ============================================================================

/// Creates the IDs for new transaction records.
///
/// Implementations must never return the same ID twice for the lifetime of
/// the process.
pub trait IdGenerator: Send + 'static {
    /// Create a new, unique ID.
    fn generate(&mut self) -> TransactionId;
}

/// Generates random version 4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> TransactionId {
        TransactionId(Uuid::new_v4().to_string())
    }
}

/// Generates the IDs "1", "2", "3", ...
///
/// Useful where the generated IDs need to be known ahead of time, e.g. in tests.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    last: u64,
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> TransactionId {
        self.last += 1;
        TransactionId(self.last.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{
        IdGenerator, SequentialIds, TransactionId, TransactionRecord, TransactionType,
        UuidGenerator,
    };

    #[test]
    fn uuid_generator_does_not_repeat() {
        let mut generator = UuidGenerator;

        let ids: HashSet<TransactionId> = (0..100).map(|_| generator.generate()).collect();

        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn sequential_ids_count_up_from_one() {
        let mut generator = SequentialIds::default();

        let ids: Vec<_> = (0..3).map(|_| generator.generate()).collect();

        assert_eq!(
            ids,
            vec![
                TransactionId::new("1"),
                TransactionId::new("2"),
                TransactionId::new("3")
            ]
        );
    }

    #[test]
    fn record_serializes_type_field_in_lowercase() {
        let record = TransactionRecord {
            id: TransactionId::new("a"),
            transaction_type: TransactionType::Expense,
            description: "Ticket to the Moon".to_owned(),
            value: 9.99,
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "a",
                "type": "expense",
                "description": "Ticket to the Moon",
                "value": 9.99
            })
        );
    }

    #[test]
    fn default_type_is_income() {
        assert_eq!(TransactionType::default(), TransactionType::Income);
    }
}
