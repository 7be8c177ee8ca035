//! Transaction entry and listing.
//!
//! This module contains everything related to transactions:
//! - The `TransactionRecord` model and the ID generators
//! - The `TransactionForm` draft and the `TransactionList` projection
//! - The in-memory `Ledger` that owns the submitted records
//! - Route handlers for the main page and the htmx fragments

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod form;
mod form_endpoints;
mod ledger;
mod list;
mod transactions_page;

pub use core::{
    IdGenerator, SequentialIds, TransactionId, TransactionRecord, TransactionType, UuidGenerator,
};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
pub use form::{FormField, FormSurface, HtmlFormSurface, TransactionForm, parse_value};
pub use form_endpoints::{change_description_endpoint, change_type_endpoint, change_value_endpoint};
pub use ledger::{Ledger, Totals};
pub use list::{TransactionItem, TransactionList};
pub use transactions_page::{get_transactions_json, get_transactions_page};
