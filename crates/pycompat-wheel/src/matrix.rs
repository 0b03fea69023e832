//! torch / torchvision compatibility matrix from the torchvision README.
//!
//! The README carries a current table and, inside a `<details>` block, a
//! table of older releases. Both share the header
//!
//! ```text
//! | `torch` | `torchvision` | Python |
//! ```
//!
//! Current rows are read before historical rows and insertion never
//! overwrites, so the current table wins whenever both list a version.

use indexmap::map::Entry;
use indexmap::IndexMap;

use pycompat_core::version::truncate_major_minor;
use pycompat_util::errors::{PycompatError, PycompatResult};

const HEADER: [&str; 3] = ["`torch`", "`torchvision`", "Python"];

/// Ordered mapping from a torch version to its torchvision baseline.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityMatrix {
    entries: IndexMap<String, String>,
}

impl CompatibilityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless `primary` is already present. Returns whether the entry
    /// was added.
    pub fn insert(&mut self, primary: impl Into<String>, companion: impl Into<String>) -> bool {
        match self.entries.entry(primary.into()) {
            Entry::Vacant(slot) => {
                slot.insert(companion.into());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, primary: &str) -> Option<&str> {
        self.entries.get(primary).map(String::as_str)
    }

    /// Companion `major.minor` baseline for a `major.minor` primary version.
    ///
    /// An exact key wins. Otherwise the first key whose own `major.minor`
    /// equals `major_minor` is used (tables sometimes list `2.1.0` rather
    /// than `2.1`). The value is always cut to `major.minor`.
    pub fn companion_baseline(&self, major_minor: &str) -> Option<String> {
        self.get(major_minor)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(key, _)| truncate_major_minor(key) == major_minor)
                    .map(|(_, value)| value.as_str())
            })
            .map(truncate_major_minor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One table found in the document: its body lines and whether it sat
/// inside a `<details>` block.
#[derive(Debug)]
struct TableBody<'a> {
    historical: bool,
    rows: Vec<&'a str>,
}

/// Parse the README markdown into a matrix.
///
/// Fails only when no table with the expected header exists at all.
pub fn parse_matrix(markdown: &str) -> PycompatResult<CompatibilityMatrix> {
    let tables = locate_tables(markdown);

    let current_idx = tables
        .iter()
        .position(|t| !t.historical)
        .or_else(|| (!tables.is_empty()).then_some(0))
        .ok_or_else(|| PycompatError::Matrix {
            message: "no `torch` | `torchvision` | Python table found".to_string(),
        })?;
    let historical_idx = (0..tables.len()).find(|&i| i != current_idx && tables[i].historical);

    let mut rows: Vec<&str> = tables[current_idx].rows.clone();
    if let Some(idx) = historical_idx {
        rows.extend(tables[idx].rows.iter().copied());
    }

    let mut matrix = CompatibilityMatrix::new();
    for line in rows {
        let Some((primary, companion)) = parse_row(line) else {
            continue;
        };
        if !matrix.insert(primary.clone(), companion) {
            tracing::debug!("keeping earlier matrix entry for torch {primary}");
        }
    }
    tracing::debug!(entries = matrix.len(), "parsed compatibility matrix");
    Ok(matrix)
}

/// Parse one table row into `(primary, companion)`.
///
/// Cells are trimmed of whitespace and backticks. Header, separator and
/// non-release rows (`main` / `nightly`) fail the numeric check and yield
/// `None`.
pub fn parse_row(line: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = line.trim().split('|').collect();
    if parts.len() < 2 {
        return None;
    }
    let cells: Vec<&str> = parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim_matches(|c: char| c.is_whitespace() || c == '`'))
        .collect();
    if cells.len() < 2 {
        return None;
    }
    let (primary, companion) = (cells[0], cells[1]);
    if !is_numeric_leading(primary) || !is_numeric_leading(companion) {
        return None;
    }
    Some((primary.to_string(), companion.to_string()))
}

fn is_numeric_leading(cell: &str) -> bool {
    cell.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn is_header(line: &str) -> bool {
    let cells: Vec<&str> = line.trim().split('|').map(str::trim).collect();
    cells.len() > HEADER.len() && cells[1..=HEADER.len()] == HEADER
}

fn locate_tables(markdown: &str) -> Vec<TableBody<'_>> {
    let mut tables = Vec::new();
    let mut in_details = false;
    let mut lines = markdown.lines().peekable();

    while let Some(line) = lines.next() {
        if line.contains("<details") {
            in_details = true;
        }
        if is_header(line) {
            let mut body = TableBody {
                historical: in_details,
                rows: Vec::new(),
            };
            // The line that ends the body stays unread; it may open or close
            // a `<details>` block.
            while let Some(row) = lines.next_if(|row| row.trim_start().starts_with('|')) {
                body.rows.push(row);
            }
            tables.push(body);
            continue;
        }
        if line.contains("</details>") {
            in_details = false;
        }
    }
    tables
}
