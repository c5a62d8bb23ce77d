use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// One raw cell as read from a tabular file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Textual form fed into number extraction.
    ///
    /// `f64`'s `Display` never prints a trailing `.0` or an exponent, so a
    /// numeric spreadsheet cell holding `9123456789` becomes `"9123456789"`.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Text(s) => Cow::Borrowed(s),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

/// Header-less, possibly ragged grid of cells in row-major order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// 逐格走訪，順序為 row-major
    pub fn cells(&self) -> impl Iterator<Item = (CellPosition, &CellValue)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, cell)| (CellPosition { row, column }, cell))
        })
    }
}

/// Zero-based cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.column + 1)
    }
}

/// A validated domestic mobile number: 11 ASCII digits starting with `09`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const LENGTH: usize = 11;
    pub const PREFIX: &'static str = "09";

    /// Only the validator constructs these; the invariant is checked there.
    pub(crate) fn new_unchecked(value: String) -> Self {
        debug_assert!(value.len() == Self::LENGTH && value.starts_with(Self::PREFIX));
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropReason {
    InvalidFormatOrLength,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::InvalidFormatOrLength => "Invalid format/length",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A digit run that did not make it into the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub original: String,
    pub rewritten: String,
    pub reason: DropReason,
    pub position: Option<CellPosition>,
}

impl Diagnostic {
    pub fn dropped(original: impl Into<String>, rewritten: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Dropped,
            original: original.into(),
            rewritten: rewritten.into(),
            reason: DropReason::InvalidFormatOrLength,
            position: None,
        }
    }

    pub fn at(mut self, position: CellPosition) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dropped: {} | Cleaned: {} | Reason: {}",
            self.original, self.rewritten, self.reason
        )
    }
}

/// Supported tabular file formats, chosen by file-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabularFormat {
    Csv,
    Xlsx,
}

impl TabularFormat {
    pub const ALL: [TabularFormat; 2] = [TabularFormat::Csv, TabularFormat::Xlsx];

    pub fn extension(&self) -> &'static str {
        match self {
            TabularFormat::Csv => ".csv",
            TabularFormat::Xlsx => ".xlsx",
        }
    }

    // 與舊工具一致：大小寫敏感的後綴比對
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| path.ends_with(format.extension()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    /// Deduplicated, first-seen order.
    pub numbers: Vec<PhoneNumber>,
    pub diagnostics: Vec<Diagnostic>,
    pub cells_scanned: usize,
    /// Accepted numbers before deduplication.
    pub accepted_total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: String,
    pub output: String,
    pub cells_scanned: usize,
    pub accepted_total: usize,
    pub unique_numbers: usize,
    pub dropped_runs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub input: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: Vec<FileReport>,
    pub failed: Vec<FailedFile>,
}

impl RunSummary {
    pub fn unique_numbers(&self) -> usize {
        self.processed.iter().map(|r| r.unique_numbers).sum()
    }
}
