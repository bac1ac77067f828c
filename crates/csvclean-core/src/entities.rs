//! HTML character-entity decoding for text cells.

use quick_xml::escape::resolve_html5_entity;

/// Decodes character references such as `&amp;`, `&nbsp;`, and `&#39;` in a
/// text value. References are resolved one at a time: a bare ampersand or a
/// reference that cannot be resolved is left intact without stopping the
/// rest of the text from decoding, since cell text is arbitrary user data.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while let Some(offset) = text[i..].find('&') {
        let start = i + offset;
        out.push_str(&text[i..start]);
        match parse_reference(&text[start + 1..]) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                i = start + 1 + consumed;
            }
            None => {
                out.push('&');
                i = start + 1;
            }
        }
    }
    out.push_str(&text[i..]);
    out
}

/// Parses one character reference sitting right after an ampersand.
/// Returns the decoded text and the length consumed, including the
/// terminating semicolon.
fn parse_reference(rest: &str) -> Option<(String, usize)> {
    if let Some(numeric) = rest.strip_prefix('#') {
        return parse_numeric_reference(numeric);
    }
    let name_len = rest
        .bytes()
        .take_while(|byte| byte.is_ascii_alphanumeric())
        .count();
    if name_len == 0 || rest[name_len..].as_bytes().first() != Some(&b';') {
        return None;
    }
    let resolved = resolve_html5_entity(&rest[..name_len])?;
    Some((resolved.to_string(), name_len + 1))
}

/// Parses the digits of `&#NNN;` or `&#xHH;` after the `#`.
fn parse_numeric_reference(rest: &str) -> Option<(String, usize)> {
    let (digits, radix, prefix_len) = match rest.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16, 2),
        None => (rest, 10, 1),
    };
    let digit_len = digits
        .bytes()
        .take_while(|byte| (*byte as char).is_digit(radix))
        .count();
    if digit_len == 0 || digits[digit_len..].as_bytes().first() != Some(&b';') {
        return None;
    }
    let code = u32::from_str_radix(&digits[..digit_len], radix).ok()?;
    let decoded = char::from_u32(code)?;
    Some((decoded.to_string(), prefix_len + digit_len + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_and_numeric_references() {
        assert_eq!(decode_entities("Fish &amp; Chips"), "Fish & Chips");
        assert_eq!(decode_entities("O&#39;Brien"), "O'Brien");
        assert_eq!(decode_entities("O&#x27;Brien"), "O'Brien");
        assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
    }

    #[test]
    fn decodes_html_named_entities() {
        assert_eq!(decode_entities("a&nbsp;b"), "a\u{a0}b");
        assert_eq!(decode_entities("caf&eacute;"), "café");
    }

    #[test]
    fn bare_ampersand_does_not_block_later_references() {
        assert_eq!(decode_entities("AT&T &amp; Co"), "AT&T & Co");
        assert_eq!(decode_entities("a & b &lt; c"), "a & b < c");
    }

    #[test]
    fn leaves_plain_and_unresolvable_text_unchanged() {
        assert_eq!(decode_entities("plain"), "plain");
        assert_eq!(decode_entities("AT&T Store"), "AT&T Store");
        assert_eq!(decode_entities("&notareference;"), "&notareference;");
        assert_eq!(decode_entities("&#;"), "&#;");
        assert_eq!(decode_entities("&#xZZ;"), "&#xZZ;");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(decode_entities(""), "");
    }

    #[test]
    fn invalid_code_points_stay_escaped() {
        assert_eq!(decode_entities("&#x110000;"), "&#x110000;");
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
    }
}
