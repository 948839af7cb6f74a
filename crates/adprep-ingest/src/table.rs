//! Uniform tabular structure shared by the CSV and workbook readers.

/// A single spreadsheet cell as read from disk.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Builds a text cell, collapsing whitespace-only input to [`CellValue::Blank`].
    pub fn text(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::Blank
        } else {
            Self::Text(value.to_string())
        }
    }

    /// String form used for matching and mapping.
    ///
    /// Blank cells, NaN floats and the literal `nan` all become the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Text(s) if s.trim().eq_ignore_ascii_case("nan") => String::new(),
            Self::Text(s) => s.clone(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) if v.is_nan() => String::new(),
            Self::Float(v) => format_numeric(*v),
            Self::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.to_text().trim().is_empty()
    }
}

/// Formats a float without a fractional part when it holds an integer.
pub fn format_numeric(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Header names plus data rows, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of declared columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Trims whitespace and a stray byte-order mark from a header name.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_and_blank_collapse() {
        assert_eq!(CellValue::Blank.to_text(), "");
        assert_eq!(CellValue::Text("nan".to_string()).to_text(), "");
        assert_eq!(CellValue::Text(" NaN ".to_string()).to_text(), "");
        assert_eq!(CellValue::Float(f64::NAN).to_text(), "");
        assert!(CellValue::text("   ").is_blank());
    }

    #[test]
    fn test_numbers_render_without_trailing_zero() {
        assert_eq!(CellValue::Float(2024.0).to_text(), "2024");
        assert_eq!(CellValue::Float(1.5).to_text(), "1.5");
        assert_eq!(CellValue::Int(12345).to_text(), "12345");
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        assert_eq!(CellValue::text(" Spot A ").to_text(), " Spot A ");
        assert_eq!(CellValue::Text("Nancy".to_string()).to_text(), "Nancy");
    }

    #[test]
    fn test_header_normalization() {
        assert_eq!(normalize_header("\u{feff}Description "), "Description");
        assert_eq!(normalize_header("  AD ID"), "AD ID");
    }
}
