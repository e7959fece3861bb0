use crate::errors::{PageOpsError, Result};
use crate::types::KeyValue;
use scraper::{Html, Selector};

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| PageOpsError::InvalidSelector(selector.to_string()))
}

/// Attribute of the first element matching `selector`.
///
/// `None` when nothing matches; a matched element without the attribute
/// yields `Some("")`, mirroring `getAttribute(..) || ""` semantics.
pub fn first_attribute(html: &str, selector: &str, attribute: &str) -> Result<Option<String>> {
    let sel = parse_selector(selector)?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&sel)
        .next()
        .map(|el| el.value().attr(attribute).unwrap_or_default().to_string()))
}

/// Concatenated text content of the first element matching `selector`.
pub fn first_text(html: &str, selector: &str) -> Result<Option<String>> {
    let sel = parse_selector(selector)?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>()))
}

/// The named attribute of every element matching `selector`, in document
/// order. Elements without the attribute contribute `""`.
pub fn all_attributes(html: &str, selector: &str, attribute: &str) -> Result<Vec<String>> {
    let sel = parse_selector(selector)?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&sel)
        .map(|el| el.value().attr(attribute).unwrap_or_default().to_string())
        .collect())
}

/// One `KeyValue` row per element matching `row_selector`, in document order.
///
/// The name is the text of the row's first descendant matching
/// `key_selector`, the rate likewise for `value_selector`. A missing
/// descendant yields an empty field, never a skipped row.
pub fn key_value_rows(
    html: &str,
    row_selector: &str,
    key_selector: &str,
    value_selector: &str,
) -> Result<Vec<KeyValue>> {
    let rows = parse_selector(row_selector)?;
    let key = parse_selector(key_selector)?;
    let value = parse_selector(value_selector)?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&rows)
        .map(|row| KeyValue {
            name: row
                .select(&key)
                .next()
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default(),
            rate: row
                .select(&value)
                .next()
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default(),
        })
        .collect())
}

/// Whether at least one element matches `selector`.
pub fn any_match(html: &str, selector: &str) -> Result<bool> {
    let sel = parse_selector(selector)?;
    let document = Html::parse_document(html);

    Ok(document.select(&sel).next().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
            <select id="fines">
                <option class="fine" value="a">First</option>
                <option class="fine" value="b">Second</option>
                <option class="fine">No value</option>
            </select>
            <ul>
                <li class="row"><span class="k">Speeding</span><span class="v">$50</span></li>
                <li class="row"><span class="k">Parking</span></li>
            </ul>
        </body></html>
    "#;

    #[test]
    fn first_attribute_returns_none_when_nothing_matches() {
        let result = first_attribute(LISTING, ".missing", "href").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn first_attribute_returns_empty_string_for_absent_attribute() {
        let result = first_attribute(LISTING, "#fines", "href").unwrap();
        assert_eq!(result, Some(String::new()));
    }

    #[test]
    fn all_attributes_preserves_document_order() {
        let values = all_attributes(LISTING, ".fine", "value").unwrap();
        assert_eq!(values, vec!["a", "b", ""]);
    }

    #[test]
    fn all_attributes_is_empty_for_zero_matches() {
        let values = all_attributes(LISTING, ".missing", "value").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn key_value_rows_keeps_rows_with_missing_fields() {
        let rows = key_value_rows(LISTING, ".row", ".k", ".v").unwrap();

        assert_eq!(
            rows,
            vec![
                KeyValue {
                    name: "Speeding".to_string(),
                    rate: "$50".to_string(),
                },
                KeyValue {
                    name: "Parking".to_string(),
                    rate: String::new(),
                },
            ]
        );
    }

    #[test]
    fn invalid_selector_is_reported() {
        let result = any_match(LISTING, "li[");
        assert!(matches!(result, Err(PageOpsError::InvalidSelector(_))));
    }

    #[test]
    fn any_match_probes_existence() {
        assert!(any_match(LISTING, ".row .k").unwrap());
        assert!(!any_match(LISTING, ".row .missing").unwrap());
    }
}
