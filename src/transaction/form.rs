//! The form for entering new transactions.
//!
//! [TransactionForm] holds the draft transaction while the user is typing,
//! decides whether the draft can be submitted, and turns the draft into a
//! [TransactionRecord] on submission.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{ALERT_CONTAINER_ID, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    transaction::core::{IdGenerator, TransactionRecord, TransactionType},
};

/// The HTML element ID of the transaction form.
pub const TRANSACTION_FORM_ID: &str = "transaction-form";
/// The HTML element ID of the submit button.
pub const SUBMIT_BUTTON_ID: &str = "submit-transaction";

/// The controls of the transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The income/expense select.
    Type,
    /// The description text input.
    Description,
    /// The value number input.
    Value,
}

impl FormField {
    /// The HTML element ID and form field name of the control.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Type => "type",
            FormField::Description => "description",
            FormField::Value => "value",
        }
    }
}

/// The thing that displays the form to the user.
pub trait FormSurface {
    /// Move input focus to `field`.
    fn focus(&mut self, field: FormField);
}

/// A [FormSurface] for forms rendered as HTML.
///
/// Focus requests are remembered and applied as the `autofocus` attribute the
/// next time the form is rendered.
#[derive(Debug, Default, Clone)]
pub struct HtmlFormSurface {
    focused: Option<FormField>,
}

impl HtmlFormSurface {
    /// The field that should have focus when the form is next rendered.
    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }
}

impl FormSurface for HtmlFormSurface {
    fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }
}

/// The draft of a transaction that has not been submitted yet.
///
/// The draft starts out as an income with an empty description and value.
/// Whether the draft can be submitted is always derived from the current
/// draft, see [TransactionForm::can_submit].
#[derive(Debug, Clone)]
pub struct TransactionForm<G> {
    transaction_type: TransactionType,
    description: String,
    value: String,
    id_generator: G,
}

impl<G: IdGenerator> TransactionForm<G> {
    /// Create an empty form that uses `id_generator` to create IDs for submitted transactions.
    pub fn new(id_generator: G) -> Self {
        Self {
            transaction_type: TransactionType::default(),
            description: String::new(),
            value: String::new(),
            id_generator,
        }
    }

    /// The currently selected transaction type.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// The description exactly as it was typed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The value exactly as it was typed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Select a different transaction type.
    pub fn change_type(&mut self, transaction_type: TransactionType) {
        self.transaction_type = transaction_type;
    }

    /// Replace the description. The text is stored as is, untrimmed.
    pub fn change_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replace the value text. The text is not parsed until submission, so
    /// partially typed numbers such as "-" or "1." are accepted.
    pub fn change_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the draft has a description and a numeric value.
    pub fn can_submit(&self) -> bool {
        self.submittable_value().is_some()
    }

    /// Submit the draft.
    ///
    /// If the draft can be submitted and `surface` is present, a new record
    /// is passed to `on_submit`, the description and value are cleared and the
    /// description field is focused. The transaction type is kept for the
    /// next entry.
    ///
    /// Otherwise nothing happens: `on_submit` is not called and the draft is
    /// left untouched.
    pub fn submit<S, F>(&mut self, surface: Option<&mut S>, on_submit: F)
    where
        S: FormSurface + ?Sized,
        F: FnOnce(TransactionRecord),
    {
        let Some(surface) = surface else {
            tracing::debug!("Ignoring transaction form submission, the form is not mounted");
            return;
        };

        let Some(value) = self.submittable_value() else {
            tracing::debug!("Ignoring transaction form submission, the draft is incomplete");
            return;
        };

        let record = TransactionRecord {
            id: self.id_generator.generate(),
            transaction_type: self.transaction_type,
            description: self.description.clone(),
            value,
        };

        on_submit(record);

        self.description.clear();
        self.value.clear();
        surface.focus(FormField::Description);
    }

    /// The parsed value, if the draft passes the submission checks.
    fn submittable_value(&self) -> Option<f64> {
        if self.description.trim().is_empty() {
            return None;
        }

        parse_value(&self.value)
    }
}

/// Parse `text` as a finite decimal number.
///
/// Returns `None` for empty strings, non-numeric text, NaN and infinities.
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Render the transaction form.
///
/// `focused` controls which field, if any, gets the `autofocus` attribute.
pub fn transaction_form_view<G: IdGenerator>(
    form: &TransactionForm<G>,
    focused: Option<FormField>,
) -> Markup {
    let transaction_types = [TransactionType::Income, TransactionType::Expense];
    let is_focused = |field: FormField| focused == Some(field);

    html! {
        form
            id=(TRANSACTION_FORM_ID)
            data-testid="form"
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error={ "#" (ALERT_CONTAINER_ID) }
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for=(FormField::Type.name()) class=(FORM_LABEL_STYLE) { "Type" }

                select
                    name=(FormField::Type.name())
                    id=(FormField::Type.name())
                    hx-post=(endpoints::FORM_TYPE)
                    hx-trigger="change"
                    hx-target={ "#" (SUBMIT_BUTTON_ID) }
                    hx-swap="outerHTML"
                    autofocus[is_focused(FormField::Type)]
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for transaction_type in transaction_types {
                        option
                            value=(transaction_type.as_str())
                            selected[transaction_type == form.transaction_type()]
                        {
                            (transaction_type.label())
                        }
                    }
                }
            }

            div
            {
                label for=(FormField::Description.name()) class=(FORM_LABEL_STYLE) { "Description" }

                input
                    name=(FormField::Description.name())
                    id=(FormField::Description.name())
                    type="text"
                    placeholder="Description"
                    value=(form.description())
                    hx-post=(endpoints::FORM_DESCRIPTION)
                    hx-trigger="input"
                    hx-target={ "#" (SUBMIT_BUTTON_ID) }
                    hx-swap="outerHTML"
                    autofocus[is_focused(FormField::Description)]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for=(FormField::Value.name()) class=(FORM_LABEL_STYLE) { "Value" }

                input
                    name=(FormField::Value.name())
                    id=(FormField::Value.name())
                    type="number"
                    step="any"
                    placeholder="0.00"
                    value=(form.value())
                    hx-post=(endpoints::FORM_VALUE)
                    hx-trigger="input"
                    hx-target={ "#" (SUBMIT_BUTTON_ID) }
                    hx-swap="outerHTML"
                    autofocus[is_focused(FormField::Value)]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            (submit_button_view(form.can_submit()))
        }
    }
}

/// Render the submit button, disabled unless `can_submit` is true.
pub fn submit_button_view(can_submit: bool) -> Markup {
    html! {
        button
            type="submit"
            id=(SUBMIT_BUTTON_ID)
            disabled[!can_submit]
            class=(BUTTON_PRIMARY_STYLE)
        {
            "Add"
        }
    }
}


#[cfg(test)]
mod view_tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        test_utils::{assert_hx_endpoint, assert_valid_html, must_get_form},
        transaction::core::{SequentialIds, TransactionType},
    };

    use super::{FormField, SUBMIT_BUTTON_ID, TransactionForm, transaction_form_view};

    fn render(form: &TransactionForm<SequentialIds>, focused: Option<FormField>) -> Html {
        Html::parse_fragment(&transaction_form_view(form, focused).into_string())
    }

    fn select_one<'a>(html: &'a Html, selector: &str) -> scraper::ElementRef<'a> {
        let selector = Selector::parse(selector).unwrap();
        let mut elements = html.select(&selector);
        let element = elements
            .next()
            .unwrap_or_else(|| panic!("no element matches {selector:?}"));
        assert!(elements.next().is_none(), "want exactly one {selector:?}");
        element
    }

    #[test]
    fn renders_controls() {
        let form = TransactionForm::new(SequentialIds::default());

        let html = render(&form, None);

        assert_valid_html(&html);
        let form_element = must_get_form(&html);
        assert_hx_endpoint(&form_element, endpoints::TRANSACTIONS_API, "hx-post");
        assert_eq!(form_element.value().attr("data-testid"), Some("form"));
        select_one(&html, "select[name=type]");
        select_one(&html, "input[type=text][name=description]");
        select_one(&html, "input[type=number][name=value]");
        let button = select_one(&html, "button");
        assert_eq!(button.value().attr("type"), Some("submit"));
        assert_eq!(button.value().id(), Some(SUBMIT_BUTTON_ID));
    }

    #[test]
    fn initial_form_is_empty_income_with_disabled_submit() {
        let form = TransactionForm::new(SequentialIds::default());

        let html = render(&form, None);

        let selected = select_one(&html, "select[name=type] option[selected]");
        assert_eq!(selected.value().attr("value"), Some("income"));
        let description = select_one(&html, "input[name=description]");
        assert_eq!(description.value().attr("value"), Some(""));
        let value = select_one(&html, "input[name=value]");
        assert_eq!(value.value().attr("value"), Some(""));
        let button = select_one(&html, "button");
        assert!(button.value().attr("disabled").is_some());
    }

    #[test]
    fn complete_draft_enables_submit() {
        let mut form = TransactionForm::new(SequentialIds::default());
        form.change_type(TransactionType::Expense);
        form.change_description("Ticket to the Moon");
        form.change_value("9.99");

        let html = render(&form, None);

        let selected = select_one(&html, "select[name=type] option[selected]");
        assert_eq!(selected.value().attr("value"), Some("expense"));
        let button = select_one(&html, "button");
        assert!(button.value().attr("disabled").is_none());
    }

    #[test]
    fn focused_field_gets_autofocus() {
        let form = TransactionForm::new(SequentialIds::default());

        let html = render(&form, Some(FormField::Description));

        let autofocused = select_one(&html, "[autofocus]");
        assert_eq!(autofocused.value().attr("name"), Some("description"));
    }

    #[test]
    fn nothing_autofocused_without_focus() {
        let form = TransactionForm::new(SequentialIds::default());

        let html = render(&form, None);

        let selector = Selector::parse("[autofocus]").unwrap();
        assert_eq!(html.select(&selector).count(), 0);
    }
}
