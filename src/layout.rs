/// Where the sample sheet keeps its header and data, and how data cells are styled.
///
/// Both the writer and the inspector take a layout, so a file produced with a
/// given layout reads back with the same one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub sheet_name: String,
    /// Text written to A1.
    pub header: String,
    pub first_data_row: u32,
    /// Upper bound on scanned data rows.
    pub max_rows: u32,
    pub id_column: u32,
    /// Anchor of the two-column merge holding the localized name.
    pub localized_column: u32,
    pub name_column: u32,
    /// ARGB of the solid fill applied to identifier cells.
    pub fill_argb: String,
    /// ARGB of the thin border drawn around written cells.
    pub border_argb: String,
}

pub const DEFAULT_SHEET_NAME: &str = "オフィス";

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            header: "書き込みサンプル".to_string(),
            first_data_row: 2,
            max_rows: 100,
            id_column: 1,
            localized_column: 2,
            name_column: 4,
            fill_argb: "FFA0A0A0".to_string(),
            border_argb: "FF000000".to_string(),
        }
    }
}

impl SheetLayout {
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Row holding the item at `index` (0-based).
    pub fn data_row(&self, index: usize) -> u32 {
        self.first_data_row + index as u32
    }

    /// Last row the inspector may visit.
    pub fn last_scan_row(&self) -> u32 {
        self.first_data_row + self.max_rows.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scan_window_is_rows_2_to_101() {
        let layout = SheetLayout::default();
        assert_eq!(layout.data_row(0), 2);
        assert_eq!(layout.data_row(3), 5);
        assert_eq!(layout.last_scan_row(), 101);
    }
}
