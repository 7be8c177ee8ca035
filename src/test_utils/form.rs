use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    let selector = Selector::parse("form").unwrap();
    let mut forms = html.select(&selector);
    let form = forms.next().expect("No form found");
    assert!(forms.next().is_none(), "want exactly one form");

    form
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(element: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = element
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got, endpoint,
        "want element with attribute {attribute}=\"{endpoint}\", got {got:?}"
    );
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::must_get_form;

    #[test]
    fn finds_the_only_form() {
        let html = Html::parse_fragment(r#"<div><form id="only"></form></div>"#);

        let form = must_get_form(&html);

        assert_eq!(form.value().id(), Some("only"));
    }

    #[test]
    #[should_panic(expected = "want exactly one form")]
    fn rejects_more_than_one_form() {
        let html = Html::parse_fragment("<form></form><form></form>");

        must_get_form(&html);
    }
}
