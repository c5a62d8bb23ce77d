use crate::core::digits::normalize_digits;
use crate::core::phone::validate_run;
use crate::domain::model::{CellValue, PhoneNumber};
use crate::domain::ports::DiagnosticSink;
use regex::Regex;
use std::sync::OnceLock;

fn digit_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII 限定，`\d` 會吃到其他文字系統的數字
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+").unwrap())
}

/// Translate Persian digits, then drop every character that is not an ASCII
/// digit.
pub fn strip_non_digits(text: &str) -> String {
    normalize_digits(text)
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// Maximal runs of ASCII digits in `text`.
pub fn digit_runs(text: &str) -> impl Iterator<Item = &str> {
    digit_run_pattern().find_iter(text).map(|m| m.as_str())
}

/// Pull every valid phone number out of one cell, in discovery order.
///
/// Non-digits are removed *before* runs are split, so all digits in a cell
/// end up in a single run: `"0912 345 6789"` is one number, and two numbers
/// in the same cell are validated together (and usually dropped).
/// Rejected runs go to `sink`.
pub fn extract_numbers<S>(cell: &CellValue, sink: &mut S) -> Vec<PhoneNumber>
where
    S: DiagnosticSink + ?Sized,
{
    let digits = strip_non_digits(&cell.to_text());

    digit_runs(&digits)
        .filter_map(|run| match validate_run(run) {
            Ok(number) => Some(number),
            Err(diagnostic) => {
                sink.report(diagnostic);
                None
            }
        })
        .collect()
}
