//! Conversion between 1-based (row, column) pairs and `A1`-style labels.
//!
//! Columns use the bijective base-26 letter encoding (`A`..`Z`, `AA`, `AB`, ...).
//! Rows are plain decimal numbers without leading zeros.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Encode a 1-based column number as letters: 1 -> A, 26 -> Z, 27 -> AA.
pub fn column_to_letters(column: u32) -> String {
    debug_assert!(column >= 1, "columns are 1-based");
    let mut n = column;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push(b'A' + rem);
        n = (n - 1) / 26;
    }
    letters.reverse();
    // Only ASCII uppercase letters were pushed.
    String::from_utf8(letters).unwrap_or_default()
}

/// Decode a run of uppercase letters into a 1-based column number.
pub fn letters_to_column(letters: &str) -> Result<u32> {
    let invalid = |reason| Error::InvalidCoordinate {
        label: letters.to_string(),
        reason,
    };
    if letters.is_empty() {
        return Err(invalid("missing column letters"));
    }
    letters.bytes().try_fold(0u32, |acc, b| {
        if !b.is_ascii_uppercase() {
            return Err(invalid("expected uppercase column letters"));
        }
        acc.checked_mul(26)
            .and_then(|v| v.checked_add(u32::from(b - b'A') + 1))
            .ok_or_else(|| invalid("column out of range"))
    })
}

/// Build the label for a 1-based (row, column) pair, e.g. `(2, 2)` -> `B2`.
pub fn to_label(row: u32, column: u32) -> String {
    debug_assert!(row >= 1, "rows are 1-based");
    format!("{}{}", column_to_letters(column), row)
}

/// Parse a label such as `B2` into its 1-based (row, column) pair.
///
/// The label must be exactly one run of `A-Z` followed by one run of digits.
/// Lowercase letters, `$` markers, whitespace, a zero row and leading zeros
/// are rejected so that the result always maps back to the same label.
pub fn to_coordinate(label: &str) -> Result<(u32, u32)> {
    let invalid = |reason| Error::InvalidCoordinate {
        label: label.to_string(),
        reason,
    };

    let split = label
        .bytes()
        .position(|b| !b.is_ascii_uppercase())
        .ok_or_else(|| invalid("missing row number"))?;
    let (letters, digits) = label.split_at(split);
    if letters.is_empty() {
        return Err(invalid("missing column letters"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected column letters followed by row digits"));
    }
    if digits.starts_with('0') {
        return Err(invalid("row must be a positive number without leading zeros"));
    }

    let row = digits
        .parse::<u32>()
        .map_err(|_| invalid("row out of range"))?;
    let column = letters_to_column(letters).map_err(|_| invalid("column out of range"))?;
    Ok((row, column))
}

/// A 1-based cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoordinate {
    pub row: u32,
    pub column: u32,
}

impl CellCoordinate {
    pub fn new(row: u32, column: u32) -> Result<Self> {
        if row == 0 || column == 0 {
            return Err(Error::InvalidCoordinate {
                label: format!("({}, {})", row, column),
                reason: "rows and columns are 1-based",
            });
        }
        Ok(Self { row, column })
    }

    pub fn label(&self) -> String {
        to_label(self.row, self.column)
    }

    /// `(column, row)`, the tuple order umya-spreadsheet expects.
    pub fn col_row(&self) -> (u32, u32) {
        (self.column, self.row)
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_to_letters(self.column), self.row)
    }
}

impl FromStr for CellCoordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (row, column) = to_coordinate(s)?;
        Ok(Self { row, column })
    }
}

/// A rectangular block of cells such as `B2:C2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellCoordinate,
    pub end: CellCoordinate,
}

impl CellRange {
    /// Build a range from two corners in any order.
    pub fn new(a: CellCoordinate, b: CellCoordinate) -> Self {
        Self {
            start: CellCoordinate {
                row: a.row.min(b.row),
                column: a.column.min(b.column),
            },
            end: CellCoordinate {
                row: a.row.max(b.row),
                column: a.column.max(b.column),
            },
        }
    }

    pub fn contains(&self, cell: CellCoordinate) -> bool {
        (self.start.row..=self.end.row).contains(&cell.row)
            && (self.start.column..=self.end.column).contains(&cell.column)
    }

    /// Every coordinate of the range, grouped row by row.
    pub fn rows(&self) -> Vec<Vec<CellCoordinate>> {
        (self.start.row..=self.end.row)
            .map(|row| {
                (self.start.column..=self.end.column)
                    .map(|column| CellCoordinate { row, column })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for CellRange {
    type Err = Error;

    /// Accepts `B2:C3` or a single cell `B2`; absolute `$` markers are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let cleaned: String = s.trim().chars().filter(|&c| c != '$').collect();
        let mut parts = cleaned.split(':');
        let first = parts.next().unwrap_or_default();
        let second = parts.next();
        if parts.next().is_some() {
            return Err(Error::InvalidRange(s.to_string()));
        }

        let parse = |part: &str| {
            part.parse::<CellCoordinate>()
                .map_err(|_| Error::InvalidRange(s.to_string()))
        };
        let start = parse(first)?;
        let end = match second {
            Some(part) => parse(part)?,
            None => start,
        };
        Ok(Self::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(to_label(1, 1), "A1");
        assert_eq!(to_label(2, 2), "B2");
        assert_eq!(to_label(1, 26), "Z1");
        assert_eq!(to_label(1, 27), "AA1");
        assert_eq!(to_label(10, 52), "AZ10");
        assert_eq!(to_label(7, 703), "AAA7");
        assert_eq!(to_label(1_048_576, 16_384), "XFD1048576");
    }

    #[test]
    fn test_known_coordinates() {
        assert_eq!(to_coordinate("B2").unwrap(), (2, 2));
        assert_eq!(to_coordinate("A1").unwrap(), (1, 1));
        assert_eq!(to_coordinate("AA1").unwrap(), (1, 27));
        assert_eq!(to_coordinate("XFD1048576").unwrap(), (1_048_576, 16_384));
    }

    #[test]
    fn test_malformed_labels_are_format_errors() {
        for label in [
            "", "A", "12", "b2", "Bb2", "B2C", "2B", "B 2", "$B$2", "B0", "B02", "B-1",
            "B99999999999",
        ] {
            let err = to_coordinate(label).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "label {:?}", label);
        }
    }

    #[test]
    fn test_zero_based_coordinate_rejected() {
        assert!(CellCoordinate::new(0, 1).is_err());
        assert!(CellCoordinate::new(1, 0).is_err());
        assert_eq!(CellCoordinate::new(3, 4).unwrap().label(), "D3");
    }

    #[test]
    fn test_range_parse_and_rows() {
        let range: CellRange = "B2:C3".parse().unwrap();
        assert_eq!(range.to_string(), "B2:C3");
        let labels: Vec<Vec<String>> = range
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| c.label()).collect())
            .collect();
        assert_eq!(labels, vec![vec!["B2", "C2"], vec!["B3", "C3"]]);

        assert!(range.contains("C3".parse().unwrap()));
        assert!(!range.contains("D2".parse().unwrap()));
        assert!(!range.contains("B1".parse().unwrap()));
    }

    #[test]
    fn test_range_normalises_corners_and_markers() {
        let range: CellRange = "$C$3:B2".parse().unwrap();
        assert_eq!(range.to_string(), "B2:C3");
        let single: CellRange = "D4".parse().unwrap();
        assert_eq!(single.rows().len(), 1);
        assert!("B2:C2:D2".parse::<CellRange>().is_err());
        assert!("B2:".parse::<CellRange>().is_err());
    }

    proptest! {
        #[test]
        fn prop_label_then_coordinate_is_identity(row in 1u32..=1_048_576, column in 1u32..=100_000) {
            prop_assert_eq!(to_coordinate(&to_label(row, column)).unwrap(), (row, column));
        }

        #[test]
        fn prop_coordinate_then_label_is_identity(label in "[A-Z]{1,4}[1-9][0-9]{0,6}") {
            let (row, column) = to_coordinate(&label).unwrap();
            prop_assert_eq!(to_label(row, column), label);
        }
    }
}
