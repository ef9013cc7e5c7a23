//! Character classes used when generating cookie values.

/// A set of ASCII characters stored as a 128-bit mask.
///
/// Non-ASCII characters are never members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AsciiSet {
    mask: u128,
}

impl AsciiSet {
    pub const EMPTY: AsciiSet = AsciiSet { mask: 0 };

    /// All characters in `lo..=hi`.
    pub const fn range(lo: u8, hi: u8) -> Self {
        let mut mask = 0u128;
        let mut b = lo;
        while b <= hi && b < 128 {
            mask |= 1 << b;
            b += 1;
        }
        AsciiSet { mask }
    }

    pub const fn add(self, byte: u8) -> Self {
        AsciiSet { mask: self.mask | (1 << byte) }
    }

    pub const fn remove(self, byte: u8) -> Self {
        AsciiSet { mask: self.mask & !(1 << byte) }
    }

    pub const fn difference(self, other: AsciiSet) -> Self {
        AsciiSet { mask: self.mask & !other.mask }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.mask & (1 << c as u32) != 0
    }
}

/// Tab, space, comma and semicolon. Netscape cookies already treat these as separators.
pub(crate) const V0_SEPARATORS: AsciiSet = AsciiSet::EMPTY
    .add(b'\t')
    .add(b' ')
    .add(b',')
    .add(b';');

/// RFC 2616 separators, except `/` which is configured separately.
pub(crate) const HTTP_SEPARATORS: AsciiSet = V0_SEPARATORS
    .add(b'"')
    .add(b'(')
    .add(b')')
    .add(b':')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'{')
    .add(b'}');

/// Printable ASCII, space included.
pub(crate) const PRINTABLE: AsciiSet = AsciiSet::range(0x20, 0x7e);

/// Characters allowed in an RFC 6265 cookie value.
///
/// `=` and `/` are allowed, the other HTTP separators are not.
pub(crate) const COOKIE_OCTETS: AsciiSet = AsciiSet::range(0x21, 0x7e)
    .difference(HTTP_SEPARATORS)
    .add(b'=');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// Can be written unquoted.
    Plain,
    /// Needs the value to be quoted (and escaped where required).
    Quotable,
    /// Not valid on the wire. RFC 6265 rejects it; legacy quotes it and logs a warning.
    Forbidden,
}

pub(crate) trait Classifier {
    fn classify(&self, c: char) -> CharClass;
}

/// Splits off a surrounding pair of double quotes.
///
/// Returns the text between the quotes and `true` when `value` is at least two
/// characters long and starts and ends with `"`, otherwise `value` itself and `false`.
pub(crate) fn split_quoted(value: &str) -> (&str, bool) {
    if value.len() > 1 && value.starts_with('"') && value.ends_with('"') {
        (&value[1..value.len() - 1], true)
    } else {
        (value, false)
    }
}

/// Returns the byte offset of the first character of `text` that is not
/// [`CharClass::Plain`], together with that character.
pub(crate) fn first_violation(text: &str, classifier: &impl Classifier) -> Option<(usize, char)> {
    text.char_indices().find(|&(_, c)| classifier.classify(c) != CharClass::Plain)
}

/// Appends `text` to `buf`, escaping `\` and `"` with a backslash.
pub(crate) fn push_escaped(buf: &mut String, text: &str) {
    for c in text.chars() {
        if c == '\\' || c == '"' {
            buf.push('\\');
        }
        buf.push(c);
    }
}

/// Appends the text between the quotes of an already quoted value to `buf`.
///
/// A backslash and the character after it form an escaped pair and are copied as
/// they are. A bare `"` and a trailing lone `\` get escaped. Returns the first
/// character that is not [`CharClass::Plain`], ignoring escaped `\"` and `\\` pairs.
pub(crate) fn push_requoted(buf: &mut String, text: &str, classifier: &impl Classifier) -> Option<(usize, char)> {
    let mut violation = None;
    let mut chars = text.char_indices();

    while let Some((pos, c)) = chars.next() {
        let checked = match c {
            '\\' => match chars.next() {
                Some((escaped_pos, escaped)) => {
                    buf.push('\\');
                    buf.push(escaped);
                    (escaped != '\\' && escaped != '"').then_some((escaped_pos, escaped))
                }
                None => {
                    buf.push_str("\\\\");
                    Some((pos, c))
                }
            },
            '"' => {
                buf.push_str("\\\"");
                Some((pos, c))
            }
            _ => {
                buf.push(c);
                Some((pos, c))
            }
        };

        if violation.is_none() {
            violation = checked.filter(|&(_, c)| classifier.classify(c) != CharClass::Plain);
        }
    }

    violation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_operations() {
        let set = AsciiSet::EMPTY.add(b'a').add(b'b').remove(b'a');
        assert!(!set.contains('a'));
        assert!(set.contains('b'));
        assert!(!set.contains('é'));
        assert!(AsciiSet::range(0x20, 0x7e).contains('~'));
        assert!(!AsciiSet::range(0x20, 0x7e).contains('\u{7f}'));
        assert!(AsciiSet::range(0, 127).contains('\u{7f}'));
    }

    #[test]
    fn cookie_octets() {
        for c in ['a', 'Z', '0', '!', '#', '/', '=', '~', '%', '-'] {
            assert!(COOKIE_OCTETS.contains(c), "{c:?} should be allowed");
        }
        for c in [' ', '\t', '"', ',', ';', '\\', '(', ')', '<', '>', '@', ':', '[', ']', '?', '{', '}', '\u{7f}', '\n', 'é'] {
            assert!(!COOKIE_OCTETS.contains(c), "{c:?} should be rejected");
        }
    }

    #[test]
    fn http_separators_exclude_forward_slash() {
        assert!(!HTTP_SEPARATORS.contains('/'));
        assert!(HTTP_SEPARATORS.contains('='));
        assert!(HTTP_SEPARATORS.contains(';'));
        assert!(PRINTABLE.difference(HTTP_SEPARATORS).contains('/'));
    }

    #[test]
    fn split_quoted_needs_two_chars() {
        assert_eq!(split_quoted("\"bar\""), ("bar", true));
        assert_eq!(split_quoted("\"\""), ("", true));
        assert_eq!(split_quoted("\""), ("\"", false));
        assert_eq!(split_quoted("\"bar"), ("\"bar", false));
        assert_eq!(split_quoted("bar"), ("bar", false));
    }

    #[test]
    fn escapes_in_single_pass() {
        let mut buf = String::new();
        push_escaped(&mut buf, "a\"b\\c\\");
        assert_eq!(buf, "a\\\"b\\\\c\\\\");
    }

    struct DigitsOnly;

    impl Classifier for DigitsOnly {
        fn classify(&self, c: char) -> CharClass {
            if c.is_ascii_digit() { CharClass::Plain } else { CharClass::Forbidden }
        }
    }

    #[test]
    fn first_violation_reports_byte_offset() {
        assert_eq!(first_violation("123", &DigitsOnly), None);
        assert_eq!(first_violation("1é2x", &DigitsOnly), Some((1, 'é')));
        assert_eq!(first_violation("12x", &DigitsOnly), Some((2, 'x')));
    }

    struct QuotesAndBackslashesQuotable;

    impl Classifier for QuotesAndBackslashesQuotable {
        fn classify(&self, c: char) -> CharClass {
            match c {
                '"' | '\\' | ';' => CharClass::Quotable,
                _ => CharClass::Plain,
            }
        }
    }

    fn requote(text: &str) -> (String, Option<(usize, char)>) {
        let mut buf = String::new();
        let violation = push_requoted(&mut buf, text, &QuotesAndBackslashesQuotable);
        (buf, violation)
    }

    #[test]
    fn requote_keeps_escaped_pairs() {
        assert_eq!(requote("a\\\"b"), ("a\\\"b".to_string(), None));
        assert_eq!(requote("a\\\\b"), ("a\\\\b".to_string(), None));
        assert_eq!(requote("\\\\\\\""), ("\\\\\\\"".to_string(), None));
    }

    #[test]
    fn requote_escapes_bare_quote_and_trailing_backslash() {
        assert_eq!(requote("a\"b"), ("a\\\"b".to_string(), Some((1, '"'))));
        assert_eq!(requote("ab\\"), ("ab\\\\".to_string(), Some((2, '\\'))));
    }

    #[test]
    fn requote_still_checks_escaped_separators() {
        // `\;` is copied as a pair but `;` itself is not plain.
        assert_eq!(requote("a\\;b"), ("a\\;b".to_string(), Some((2, ';'))));
    }
}
