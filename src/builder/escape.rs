use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Characters left as-is by a URI component encoder: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Backslash-escapes the reserved characters of the `WIFI:` micro-format.
pub fn wifi_field(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            res.push('\\');
        }
        res.push(c);
    }
    res
}

/// Inverse of [`wifi_field`]. A dangling trailing backslash is kept.
pub fn unescape_wifi_field(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => res.push(chars.next().unwrap_or('\\')),
            _ => res.push(c),
        }
    }
    res
}

/// vCard 3.0 text value escaping.
pub fn vcard_text(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => res.push_str("\\\\"),
            ',' => res.push_str("\\,"),
            ';' => res.push_str("\\;"),
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    res.push_str("\\n");
                }
            }
            '\n' => res.push_str("\\n"),
            _ => res.push(c),
        }
    }
    res
}

#[cfg(test)]
mod escape_tests {
    use test_case::test_case;

    use super::{unescape_wifi_field, uri_component, vcard_text, wifi_field};

    #[test_case("Hi there", "Hi%20there")]
    #[test_case("Hello", "Hello")]
    #[test_case("a&b=c?d", "a%26b%3Dc%3Fd")]
    #[test_case("-_.!~*'()", "-_.!~*'()")]
    #[test_case("line\nbreak", "line%0Abreak")]
    #[test_case("café", "caf%C3%A9")]
    #[test_case("", "")]
    fn test_uri_component(input: &str, exp: &str) {
        assert_eq!(uri_component(input), exp);
    }

    #[test_case("Home", "Home")]
    #[test_case("a;b", "a\\;b")]
    #[test_case("k:v,\"q\"", "k\\:v\\,\\\"q\\\"")]
    #[test_case("back\\slash", "back\\\\slash")]
    fn test_wifi_field(input: &str, exp: &str) {
        assert_eq!(wifi_field(input), exp);
        assert_eq!(unescape_wifi_field(exp), input);
    }

    #[test]
    fn test_unescape_dangling_backslash() {
        assert_eq!(unescape_wifi_field("abc\\"), "abc\\");
    }

    #[test_case("Ada", "Ada")]
    #[test_case("1 Main St, Springfield", "1 Main St\\, Springfield")]
    #[test_case("a;b\\c", "a\\;b\\\\c")]
    #[test_case("line1\nline2", "line1\\nline2")]
    #[test_case("line1\r\nline2", "line1\\nline2")]
    fn test_vcard_text(input: &str, exp: &str) {
        assert_eq!(vcard_text(input), exp);
    }
}
