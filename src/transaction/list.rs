//! Displays transaction records as a list with a delete button per record.
//!
//! The list does not own or change the records, deletion requests are passed
//! up to whoever owns the records via the `on_delete_click` callback.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{ALERT_CONTAINER_ID, BUTTON_DELETE_STYLE, TAG_BADGE_STYLE},
    transaction::core::{TransactionId, TransactionRecord, TransactionType},
};

/// The HTML element ID of the transaction list.
pub const TRANSACTION_LIST_ID: &str = "transaction-list";

/// A single record in a [TransactionList].
pub struct TransactionItem<'a, F> {
    record: &'a TransactionRecord,
    on_delete_click: &'a F,
}

impl<'a, F: Fn(&TransactionId)> TransactionItem<'a, F> {
    /// The record shown by this item.
    pub fn record(&self) -> &'a TransactionRecord {
        self.record
    }

    /// The ID of the record shown by this item.
    pub fn id(&self) -> &'a TransactionId {
        &self.record.id
    }

    /// The route that deletes this item's record.
    pub fn delete_url(&self) -> String {
        delete_url(&self.record.id)
    }

    /// Request deletion of this item's record.
    pub fn click_delete(&self) {
        (self.on_delete_click)(&self.record.id);
    }
}

/// A view of a sequence of records.
///
/// Items are listed in the same order as the records they were created from.
pub struct TransactionList<'a, F> {
    list: &'a [TransactionRecord],
    on_delete_click: F,
}

impl<'a, F: Fn(&TransactionId)> TransactionList<'a, F> {
    /// Create a list of `list` where each item calls `on_delete_click` with
    /// its own record's ID when its delete button is clicked.
    pub fn new(list: &'a [TransactionRecord], on_delete_click: F) -> Self {
        Self {
            list,
            on_delete_click,
        }
    }

    /// The items in display order.
    pub fn items(&self) -> impl Iterator<Item = TransactionItem<'_, F>> {
        self.list.iter().map(|record| TransactionItem {
            record,
            on_delete_click: &self.on_delete_click,
        })
    }

    /// The item for the record with `id`, if it is in the list.
    pub fn item(&self, id: &TransactionId) -> Option<TransactionItem<'_, F>> {
        self.items().find(|item| item.id() == id)
    }

    /// The number of items in the list.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

fn delete_url(id: &TransactionId) -> String {
    format_endpoint(endpoints::TRANSACTION, id)
}

fn value_class(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "text-green-700 dark:text-green-300",
        TransactionType::Expense => "text-red-700 dark:text-red-300",
    }
}

/// Render `records` as an HTML list.
///
/// Each item's delete button sends a delete request to [TransactionItem::delete_url]
/// and replaces the whole list with the response. Set `swap_oob` when the
/// list is sent alongside another fragment.
pub fn transaction_list_view(records: &[TransactionRecord], swap_oob: bool) -> Markup {
    html! {
        section
            id=(TRANSACTION_LIST_ID)
            hx-swap-oob=[swap_oob.then_some("true")]
            class="w-full space-y-2"
        {
            ul class="divide-y divide-gray-200 dark:divide-gray-700"
            {
                @for record in records {
                    (transaction_item_view(record))
                }
            }

            @if records.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400" { "No transactions yet." }
            }
        }
    }
}

fn transaction_item_view(record: &TransactionRecord) -> Markup {
    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
        record.description
    );

    html! {
        li class="flex items-center justify-between gap-3 py-3" data-transaction-item=(record.id)
        {
            div class="min-w-0 flex-1 truncate text-sm font-medium" title=(record.description)
            {
                (record.description)
            }

            span class=(TAG_BADGE_STYLE) { (record.transaction_type.label()) }

            span class={ "text-sm tabular-nums text-right " (value_class(record.transaction_type)) }
            {
                (record.value)
            }

            button
                type="button"
                hx-delete=(delete_url(&record.id))
                hx-confirm=(confirm_message)
                hx-target={ "#" (TRANSACTION_LIST_ID) }
                hx-target-error={ "#" (ALERT_CONTAINER_ID) }
                hx-swap="outerHTML"
                class=(BUTTON_DELETE_STYLE)
            {
                "Delete"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::transaction::core::{TransactionId, TransactionRecord, TransactionType};

    use super::TransactionList;

    fn income_list() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord {
                id: TransactionId::new("a"),
                transaction_type: TransactionType::Income,
                description: "Salary".to_owned(),
                value: 999.0,
            },
            TransactionRecord {
                id: TransactionId::new("b"),
                transaction_type: TransactionType::Income,
                description: "Lottery".to_owned(),
                value: 10000.0,
            },
        ]
    }

    #[test]
    fn has_one_item_per_record_in_order() {
        let records = income_list();

        let list = TransactionList::new(&records, |_: &TransactionId| {});

        let descriptions: Vec<_> = list
            .items()
            .map(|item| item.record().description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Salary", "Lottery"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_list_has_no_items() {
        let list = TransactionList::new(&[], |_: &TransactionId| {});

        assert!(list.is_empty());
        assert_eq!(list.items().count(), 0);
    }

    #[test]
    fn item_delete_passes_only_its_own_id() {
        let records = income_list();
        let deleted = RefCell::new(Vec::new());
        let list = TransactionList::new(&records, |id: &TransactionId| {
            deleted.borrow_mut().push(id.clone())
        });

        list.items().next().unwrap().click_delete();

        assert_eq!(*deleted.borrow(), vec![TransactionId::new("a")]);
    }

    #[test]
    fn finds_item_by_id() {
        let records = income_list();
        let deleted = RefCell::new(Vec::new());
        let list = TransactionList::new(&records, |id: &TransactionId| {
            deleted.borrow_mut().push(id.clone())
        });

        list.item(&TransactionId::new("b")).unwrap().click_delete();

        assert!(list.item(&TransactionId::new("c")).is_none());
        assert_eq!(*deleted.borrow(), vec![TransactionId::new("b")]);
    }

    #[test]
    fn item_delete_url_uses_its_own_id() {
        let records = income_list();
        let list = TransactionList::new(&records, |_: &TransactionId| {});

        let urls: Vec<_> = list.items().map(|item| item.delete_url()).collect();

        assert_eq!(urls, vec!["/api/transactions/a", "/api/transactions/b"]);
    }

    #[test]
    fn does_not_change_records() {
        let records = income_list();

        let list = TransactionList::new(&records, |_: &TransactionId| {});
        for item in list.items() {
            item.click_delete();
        }

        assert_eq!(records, income_list());
    }
}

#[cfg(test)]
mod view_tests {
    use scraper::{Html, Selector};

    use crate::{
        test_utils::assert_valid_html,
        transaction::core::{TransactionId, TransactionRecord, TransactionType},
    };

    use super::transaction_list_view;

    fn render(records: &[TransactionRecord]) -> Html {
        Html::parse_fragment(&transaction_list_view(records, false).into_string())
    }

    fn record(id: &str, description: &str, value: f64) -> TransactionRecord {
        TransactionRecord {
            id: TransactionId::new(id),
            transaction_type: TransactionType::Expense,
            description: description.to_owned(),
            value,
        }
    }

    #[test]
    fn renders_every_description() {
        let html = render(&[record("a", "Salary", 999.0), record("b", "Lottery", 10000.0)]);

        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Salary"), "want Salary in {text:?}");
        assert!(text.contains("Lottery"), "want Lottery in {text:?}");
    }

    #[test]
    fn delete_buttons_target_their_own_record() {
        let html = render(&[record("a", "Apple", 10.0), record("b", "Banana", 2.5)]);

        let selector = Selector::parse("li button").unwrap();
        let delete_urls: Vec<_> = html
            .select(&selector)
            .map(|button| button.value().attr("hx-delete").unwrap_or_default())
            .collect();
        assert_eq!(
            delete_urls,
            vec!["/api/transactions/a", "/api/transactions/b"]
        );
    }

    #[test]
    fn empty_list_renders_no_items() {
        let html = render(&[]);

        let selector = Selector::parse("li").unwrap();
        assert_eq!(html.select(&selector).count(), 0);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("No transactions yet."));
    }

    #[test]
    fn out_of_band_flag_sets_swap_attribute() {
        let oob = Html::parse_fragment(&transaction_list_view(&[], true).into_string());
        let inline = render(&[]);

        let selector = Selector::parse("section[hx-swap-oob=true]").unwrap();
        assert_eq!(oob.select(&selector).count(), 1);
        assert_eq!(inline.select(&selector).count(), 0);
    }

    #[test]
    fn shows_type_and_value() {
        let html = render(&[record("test-id", "Apple", 10.0)]);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Expense"), "want type in {text:?}");
        assert!(text.contains("10"), "want value in {text:?}");
    }
}
