use crate::domain::model::{Diagnostic, PhoneNumber};
use std::borrow::Cow;

const COUNTRY_CODE_PLUS: &str = "+98";
const COUNTRY_CODE: &str = "98";
const MOBILE_LEADING_DIGIT: &str = "9";
const TRUNK_PREFIX: &str = "0";

/// Rewrite the common international / trunkless spellings into the domestic
/// form. First match wins: `+98…` → `0…`, `98…` → `0…`, `9…` → `09…`.
///
/// The `+98` arm cannot fire for runs coming out of
/// [`extract_numbers`](crate::core::extract::extract_numbers), which strips
/// the `+` first. It is kept so the function is correct for callers that pass
/// raw text.
pub fn rewrite_prefix(run: &str) -> Cow<'_, str> {
    if let Some(rest) = run.strip_prefix(COUNTRY_CODE_PLUS) {
        Cow::Owned(format!("{TRUNK_PREFIX}{rest}"))
    } else if let Some(rest) = run.strip_prefix(COUNTRY_CODE) {
        Cow::Owned(format!("{TRUNK_PREFIX}{rest}"))
    } else if run.starts_with(MOBILE_LEADING_DIGIT) {
        Cow::Owned(format!("{TRUNK_PREFIX}{run}"))
    } else {
        Cow::Borrowed(run)
    }
}

pub fn is_canonical(candidate: &str) -> bool {
    candidate.len() == PhoneNumber::LENGTH
        && candidate.starts_with(PhoneNumber::PREFIX)
        && candidate.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize one digit run. A rejected run comes back as a [`Diagnostic`]
/// carrying both the original and the rewritten text.
pub fn validate_run(run: &str) -> Result<PhoneNumber, Diagnostic> {
    let rewritten = rewrite_prefix(run);

    if is_canonical(&rewritten) {
        Ok(PhoneNumber::new_unchecked(rewritten.into_owned()))
    } else {
        Err(Diagnostic::dropped(run, rewritten))
    }
}
