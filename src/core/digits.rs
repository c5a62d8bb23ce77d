use std::borrow::Cow;

/// Extended Arabic-Indic (Persian) digits, index-aligned with `0..=9`.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

fn to_ascii_digit(ch: char) -> Option<char> {
    PERSIAN_DIGITS
        .iter()
        .position(|&d| d == ch)
        .and_then(|index| char::from_digit(index as u32, 10))
}

/// Replace every Persian digit with its ASCII counterpart; everything else
/// passes through untouched.
pub fn normalize_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| to_ascii_digit(ch).is_some()) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|ch| to_ascii_digit(ch).unwrap_or(ch))
            .collect(),
    )
}
