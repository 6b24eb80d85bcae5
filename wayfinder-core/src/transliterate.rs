//! Lossy ASCII transliteration for script-sensitive consumers.
//!
//! Generative-model prompts and some renderers cope poorly with non-Latin
//! text. [`to_ascii_safe`] maps letters from other scripts to Latin, strips
//! diacritics and drops whatever is still not ASCII. Currency signs are
//! spelled out (`€` becomes `EUR`); other symbols and emoji have no safe form
//! and are removed.
//!
//! Whitespace runs collapse to a single space, and the result only starts or
//! ends with a space when the input does.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Convert `text` to an ASCII-only approximation.
///
/// Returns an empty string when no safe form exists. Callers may display the
/// original text in that case but must not forward it to a script-sensitive
/// consumer; see [`prompt_text`] and [`display_text`].
///
/// # Examples
/// ```
/// use wayfinder_core::to_ascii_safe;
///
/// assert_eq!(to_ascii_safe("Café"), "Cafe");
/// assert_eq!(to_ascii_safe("Москва"), "Moskva");
/// assert_eq!(to_ascii_safe("🎉"), "");
/// ```
#[must_use]
pub fn to_ascii_safe(text: &str) -> String {
    let latin = tidy_whitespace(&transliterate_to_latin(text), text);
    if latin.is_empty() {
        tidy_whitespace(&strip_to_ascii(text), text)
    } else {
        latin
    }
}

/// ASCII-safe text for a model prompt, or `None` when none exists.
///
/// # Examples
/// ```
/// use wayfinder_core::prompt_text;
///
/// assert_eq!(prompt_text("Zürich").as_deref(), Some("Zurich"));
/// assert_eq!(prompt_text("🏛️"), None);
/// ```
#[must_use]
pub fn prompt_text(text: &str) -> Option<String> {
    Some(to_ascii_safe(text)).filter(|safe| !safe.is_empty())
}

/// ASCII-safe text for display, falling back to `text` itself.
#[must_use]
pub fn display_text(text: &str) -> String {
    prompt_text(text).unwrap_or_else(|| text.to_owned())
}

/// Script-aware pass: transliterate, strip marks, keep ASCII.
fn transliterate_to_latin(text: &str) -> String {
    let mut latin = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            latin.push(c);
        } else if is_transliterable(c)
            && let Some(replacement) = deunicode::deunicode_char(c)
        {
            if c.is_alphabetic() {
                // Letters only contribute letters, digits and word breaks.
                latin.extend(
                    replacement
                        .chars()
                        .filter(|r| r.is_ascii_alphanumeric() || *r == ' '),
                );
            } else {
                latin.push_str(replacement);
            }
        }
    }
    latin
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii)
        .collect()
}

/// Fallback pass: canonical decomposition without diacritics, keep ASCII.
fn strip_to_ascii(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_diacritic(*c))
        .filter(char::is_ascii)
        .collect()
}

/// Letters, digits, spacing, punctuation and currency signs have Latin forms
/// worth keeping. Emoji and pictographs do not.
fn is_transliterable(c: char) -> bool {
    c.is_alphanumeric()
        || c.is_whitespace()
        || matches!(
            c,
            '\u{00A1}'..='\u{00BF}'
                | '\u{2010}'..='\u{205E}'
                | '\u{20A0}'..='\u{20CF}'
                | '\u{3000}'..='\u{303F}'
        )
}

/// Collapse whitespace runs and trim edges that `original` does not have.
fn tidy_whitespace(ascii: &str, original: &str) -> String {
    let mut tidy = String::with_capacity(ascii.len());
    for word in ascii.split_ascii_whitespace() {
        if !tidy.is_empty() {
            tidy.push(' ');
        }
        tidy.push_str(word);
    }
    if tidy.is_empty() {
        return tidy;
    }
    if original.starts_with(char::is_whitespace) {
        tidy.insert(0, ' ');
    }
    if original.ends_with(char::is_whitespace) {
        tidy.push(' ');
    }
    tidy
}

fn is_diacritic(c: char) -> bool {
    is_combining_mark(c) || matches!(c, '\u{02B0}'..='\u{02FF}')
}
