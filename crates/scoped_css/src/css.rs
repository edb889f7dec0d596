use regex::{Captures, Regex};
use scoped_css_core::ClassMap;
use sha2::{Digest, Sha256};

lazy_static! {
    // A class selector in dot-notation. Purely lexical: tokens inside
    // comments and string literals match too.
    static ref CLASS_SELECTOR_RE: Regex = Regex::new(r"\.([_a-zA-Z][_a-zA-Z0-9-]*)").unwrap();
}

/// Computes the content fingerprint of a CSS block: a leading `a`
/// (class names must not start with a digit) followed by the first
/// 7 hex characters of the SHA-256 digest.
pub fn fingerprint(css_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(css_text.as_bytes());
    let hex = format!("{:x}", hasher.finalize());
    format!("a{}", &hex[..7])
}

/// Rewrites every `.class` selector token to `.{prefix}-class` and
/// records the renames. Everything that is not a class selector token
/// passes through unchanged; malformed CSS never fails.
pub fn rewrite_classes(css_text: &str, prefix: &str) -> (String, ClassMap) {
    let mut classes = ClassMap::default();

    let rewritten = CLASS_SELECTOR_RE.replace_all(css_text, |caps: &Captures| {
        let original = &caps[1];
        let prefixed = format!("{}-{}", prefix, original);
        let replacement = format!(".{}", prefixed);
        classes.insert(original.to_owned(), prefixed);
        replacement
    });

    (rewritten.into_owned(), classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_all_class_selectors() {
        let css = ".test { color: red; } .another-class { font-size: 12px; }";
        let (result, classes) = rewrite_classes(css, "abc123");

        assert_eq!(
            result,
            ".abc123-test { color: red; } .abc123-another-class { font-size: 12px; }"
        );
        assert_eq!(classes["test"], "abc123-test");
        assert_eq!(classes["another-class"], "abc123-another-class");
        assert_eq!(classes.len(), 2);
    }

    #[test]
    fn leaves_property_bodies_untouched() {
        let (result, classes) = rewrite_classes(".a { x:1 } .b-2 { y:2 }", "p");

        assert_eq!(result, ".p-a { x:1 } .p-b-2 { y:2 }");
        let mut keys: Vec<_> = classes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b-2"]);
    }

    #[test]
    fn repeated_selector_maps_once() {
        let (result, classes) = rewrite_classes(".a { x:1 } .a:hover { x:2 }", "p");

        assert_eq!(result, ".p-a { x:1 } .p-a:hover { x:2 }");
        assert_eq!(classes.len(), 1);
        assert_eq!(classes["a"], "p-a");
    }

    #[test]
    fn tokens_inside_comments_are_still_rewritten() {
        // Accepted limitation of the lexical matcher
        let (result, classes) = rewrite_classes("/* .note */ .a { x:1 }", "p");

        assert_eq!(result, "/* .p-note */ .p-a { x:1 }");
        assert!(classes.contains_key("note"));
        assert!(classes.contains_key("a"));
    }

    #[test]
    fn non_class_tokens_pass_through() {
        let css = "#id > div { margin: .5em; }";
        let (result, classes) = rewrite_classes(css, "p");

        // `.5em` does not match the identifier grammar
        assert_eq!(result, css);
        assert!(classes.is_empty());
    }

    #[test]
    fn fingerprint_shape() {
        let prefix = fingerprint(".a { x:1 }");

        assert_eq!(prefix.len(), 8);
        assert!(prefix.starts_with('a'));
        assert!(prefix[1..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn fingerprint_is_content_addressed() {
        assert_eq!(fingerprint(".header { font-weight: bold; }"), "a867888b");
        assert_eq!(fingerprint(""), "ae3b0c44");
        assert_ne!(fingerprint(".a {}"), fingerprint(".b {}"));
    }
}
