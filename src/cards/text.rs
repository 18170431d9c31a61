//! HTML entity decoding for card text.
//!
//! Published packs store card text HTML-escaped (`&quot;`, `&#39;`,
//! `&Eacute;` ...). Text is decoded once, when a pack is loaded, following
//! the HTML5 rules for character references in text:
//!
//! - named references come from the full HTML5 table; the legacy names
//!   (`&amp`, `&eacute` ...) also match without a trailing `;`, even as a
//!   prefix of a longer word
//! - numeric references in the Windows-1252 range map to the characters
//!   browsers show, `&#0;` and out-of-range numbers become U+FFFD, and
//!   noncharacters are dropped
//! - anything else is kept verbatim

use serde::{Deserialize, Deserializer};

/// Longest name a named reference may have.
const MAX_NAME_LEN: usize = 32;

/// Names that decode without a trailing `;`.
const LEGACY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren",
    "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34",
    "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

/// Numeric references that do not mean their code point.
const REMAPPED_CODES: &[(u32, char)] = &[
    (0x00, '\u{fffd}'),
    (0x0d, '\r'),
    (0x80, '\u{20ac}'),
    (0x81, '\u{81}'),
    (0x82, '\u{201a}'),
    (0x83, '\u{0192}'),
    (0x84, '\u{201e}'),
    (0x85, '\u{2026}'),
    (0x86, '\u{2020}'),
    (0x87, '\u{2021}'),
    (0x88, '\u{02c6}'),
    (0x89, '\u{2030}'),
    (0x8a, '\u{0160}'),
    (0x8b, '\u{2039}'),
    (0x8c, '\u{0152}'),
    (0x8d, '\u{8d}'),
    (0x8e, '\u{017d}'),
    (0x8f, '\u{8f}'),
    (0x90, '\u{90}'),
    (0x91, '\u{2018}'),
    (0x92, '\u{2019}'),
    (0x93, '\u{201c}'),
    (0x94, '\u{201d}'),
    (0x95, '\u{2022}'),
    (0x96, '\u{2013}'),
    (0x97, '\u{2014}'),
    (0x98, '\u{02dc}'),
    (0x99, '\u{2122}'),
    (0x9a, '\u{0161}'),
    (0x9b, '\u{203a}'),
    (0x9c, '\u{0153}'),
    (0x9d, '\u{9d}'),
    (0x9e, '\u{017e}'),
    (0x9f, '\u{0178}'),
];

/// Decode HTML entities in `input`.
///
/// ```
/// use cardparty::cards::unescape;
///
/// assert_eq!(unescape("Tom &amp; Jerry&#39;s &quot;show&quot;"), "Tom & Jerry's \"show\"");
/// assert_eq!(unescape("Caf&eacute; &hearts;"), "Café ♥");
/// assert_eq!(unescape("50 &unknown; cents"), "50 &unknown; cents");
/// ```
#[must_use]
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        match decode_reference(after) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &after[consumed..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode the reference at the start of `after` (the text following `&`).
///
/// Returns the replacement and how many bytes of `after` it used.
fn decode_reference(after: &str) -> Option<(String, usize)> {
    match after.strip_prefix('#') {
        Some(numeric) => decode_numeric(numeric).map(|(text, used)| (text, used + 1)),
        None => decode_named(after),
    }
}

fn decode_numeric(body: &str) -> Option<(String, usize)> {
    let (radix, prefix) = match body.as_bytes().first() {
        Some(b'x') | Some(b'X') => (16, 1),
        _ => (10, 0),
    };
    let digits = &body[prefix..];
    let len = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if len == 0 {
        return None;
    }

    let mut used = prefix + len;
    if digits[len..].starts_with(';') {
        used += 1;
    }

    // Too many digits for a u32 is out of range all the same
    let code = u32::from_str_radix(&digits[..len], radix).unwrap_or(u32::MAX);
    Some((code_point_text(code), used))
}

fn code_point_text(code: u32) -> String {
    if let Some(&(_, c)) = REMAPPED_CODES.iter().find(|(n, _)| *n == code) {
        return c.to_string();
    }
    if (0xd800..=0xdfff).contains(&code) || code > 0x10ffff {
        return '\u{fffd}'.to_string();
    }
    if is_dropped_code(code) {
        return String::new();
    }
    char::from_u32(code).map(String::from).unwrap_or_default()
}

/// Control characters and noncharacters, which decode to nothing.
fn is_dropped_code(code: u32) -> bool {
    matches!(code, 0x01..=0x08 | 0x0b | 0x0e..=0x1f | 0x7f..=0x9f | 0xfdd0..=0xfdef)
        || code & 0xfffe == 0xfffe
}

fn decode_named(after: &str) -> Option<(String, usize)> {
    let name_len = after
        .char_indices()
        .take_while(|&(_, c)| !matches!(c, '\t' | '\n' | '\x0c' | ' ' | '<' | '&' | '#' | ';'))
        .take(MAX_NAME_LEN)
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    if name_len == 0 {
        return None;
    }
    let name = &after[..name_len];
    let terminated = after[name_len..].starts_with(';');

    if terminated {
        if let Some(text) = lookup_entity(name) {
            return Some((text, name_len + 1));
        }
    } else if LEGACY_NAMES.contains(&name) {
        return lookup_entity(name).map(|text| (text, name_len));
    }

    // Longest legacy name the reference starts with, e.g. "&notit;" is "¬it;"
    let longest = if terminated { name_len } else { name_len - 1 };
    name.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(name_len))
        .filter(|&end| end >= 2 && end <= longest)
        .rev()
        .find(|&end| LEGACY_NAMES.contains(&&name[..end]))
        .and_then(|end| lookup_entity(&name[..end]).map(|text| (text, end)))
}

/// Look `name` up in the HTML5 entity table.
fn lookup_entity(name: &str) -> Option<String> {
    let reference = format!("&{};", name);
    let decoded = html_escape::decode_html_entities(&reference);
    // Every HTML5 entity expands to one or two characters
    if decoded.as_ref() != reference.as_str() && decoded.chars().count() <= 2 {
        Some(decoded.into_owned())
    } else {
        None
    }
}

/// Serde helper: deserialize a string and decode its entities.
pub(crate) fn deserialize_unescaped<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(unescape(&raw))
}
