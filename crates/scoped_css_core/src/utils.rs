use std::fmt::{Error, Write};

/// Converts an attribute key to its hyphen-cased output form:
/// `dataValue` and `data_value` both become `data-value`.
pub fn to_hyphen_case(s: &str, buf: &mut impl Write) -> Result<(), Error> {
    for (idx, ch) in s.chars().enumerate() {
        if ch == '_' {
            buf.write_char('-')?;
        } else if ch.is_ascii_uppercase() {
            if idx != 0 {
                buf.write_char('-')?;
            }
            buf.write_char(ch.to_ascii_lowercase())?;
        } else {
            buf.write_char(ch)?;
        }
    }

    Ok(())
}

/// Escapes the characters that break out of a double-quoted attribute value.
pub fn escape_attribute(value: &str, buf: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            _ => buf.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hyphenate(s: &str) -> String {
        let mut buf = String::new();
        let _ = to_hyphen_case(s, &mut buf);
        buf
    }

    #[test]
    fn hyphen_case() {
        assert_eq!(hyphenate("dataValue"), "data-value");
        assert_eq!(hyphenate("data_value"), "data-value");
        assert_eq!(hyphenate("aria-label"), "aria-label");
        assert_eq!(hyphenate("disabled"), "disabled");
        assert_eq!(hyphenate("DataValue"), "data-value");
        assert_eq!(hyphenate(""), "");
    }

    #[test]
    fn escaping() {
        let mut buf = String::new();
        escape_attribute(r#"<a href="x">&"#, &mut buf);
        assert_eq!(buf, "&lt;a href=&quot;x&quot;&gt;&amp;");
    }
}
