use serde::{Deserialize, Serialize};

pub const SALES_COLUMN: &str = "Sales";
pub const PROFIT_COLUMN: &str = "Profit";
pub const DISCOUNT_COLUMN: &str = "Discount";
pub const CATEGORY_COLUMN: &str = "Category";
pub const REGION_COLUMN: &str = "Region";
pub const SEGMENT_COLUMN: &str = "Segment";
pub const SHIP_MODE_COLUMN: &str = "Ship Mode";

/// Columns an uploaded file must carry for the dashboard to work.
pub const REQUIRED_COLUMNS: [&str; 2] = [SALES_COLUMN, PROFIT_COLUMN];

/// Dataset-wide totals embedded in recommendation and report prompts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetAggregate {
    pub total_sales: f64,
    pub total_profit: f64,
}

/// An uploaded table of string cells with trimmed header names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Rows shorter than the header are padded with empty cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self {
            headers: headers.into_iter().map(|h| h.trim().to_string()).collect(),
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cells of a named column, top to bottom.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + use<'a>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Numeric view of a column. Unparseable or empty cells yield `None`.
    pub fn numeric_column<'a>(
        &'a self,
        name: &str,
    ) -> Option<impl Iterator<Item = Option<f64>> + use<'a>> {
        Some(self.column(name)?.map(parse_number))
    }

    pub fn missing_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.trim().is_empty())
            .count()
    }

    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Parses a numeric cell, tolerating currency symbols and thousands separators.
pub fn parse_number(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
