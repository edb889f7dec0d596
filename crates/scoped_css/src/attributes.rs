use scoped_css_core::{escape_attribute, to_hyphen_case, AttrValue, AttributeSet, RawHtml};

/// Serializes an attribute collection into a flat HTML attribute string.
///
/// `extra_classes` (typically namespaced names looked up in a
/// [`ClassMap`](scoped_css_core::ClassMap)) are merged into the `class`
/// attribute ahead of its original value. Keys are hyphen-cased, boolean
/// `true` emits a bare attribute name, and `false`, [`AttrValue::None`]
/// and empty strings emit nothing. Values are escaped individually, so
/// the returned string is safe to insert without re-escaping.
pub fn serialize_attributes(attributes: &AttributeSet, extra_classes: &[&str]) -> RawHtml {
    let original_class = match attributes.get("class") {
        Some(AttrValue::Str(value)) => value.as_str(),
        _ => "",
    };

    let mut merged = attributes.clone();
    merged.set("class", merge_classes(original_class, extra_classes));

    let mut out = String::new();
    for (name, value) in merged.iter() {
        let mut hyphenated = String::new();
        let _ = to_hyphen_case(name, &mut hyphenated); // ignore fault
        if hyphenated.is_empty() {
            continue;
        }

        match value {
            AttrValue::Bool(true) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&hyphenated);
            }
            AttrValue::Bool(false) | AttrValue::None => {}
            AttrValue::Str(text) => {
                if text.is_empty() {
                    continue;
                }
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&hyphenated);
                out.push_str("=\"");
                escape_attribute(text, &mut out);
                out.push('"');
            }
        }
    }

    RawHtml::new(out)
}

/// Prepends the extra class tokens to the original `class` value,
/// single-space separated, dropping empty tokens.
fn merge_classes(original: &str, extra_classes: &[&str]) -> String {
    let mut merged = extra_classes
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let original = original.trim();
    if !original.is_empty() {
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(original);
    }

    merged
}
