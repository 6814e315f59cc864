use crate::coordinate::{CellCoordinate, CellRange};
use crate::error::{Error, Result};
use crate::layout::SheetLayout;
use crate::reader;
use std::path::Path;
use umya_spreadsheet::structs::{Border, PatternValues, Style, Worksheet};
use umya_spreadsheet::Spreadsheet;

/// One data row of the sample sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub localized_name: String,
}

impl Item {
    pub fn new(name: impl Into<String>, localized_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            localized_name: localized_name.into(),
        }
    }
}

pub const DEFAULT_ITEMS: [(&str, &str); 4] = [
    ("word", "ワード"),
    ("excel", "エクセル"),
    ("powerpoint", "パワポ"),
    ("pdf", "ピーディーエフ"),
];

pub fn default_items() -> Vec<Item> {
    DEFAULT_ITEMS
        .iter()
        .map(|&(name, localized)| Item::new(name, localized))
        .collect()
}

/// Create a workbook holding only the layout's sheet, filled with `items`.
pub fn build_workbook(items: &[Item], layout: &SheetLayout) -> Result<Spreadsheet> {
    let mut book = umya_spreadsheet::new_file();
    let defaults = reader::get_sheet_names(&book);

    if !defaults.contains(&layout.sheet_name) {
        book.new_sheet(layout.sheet_name.as_str())
            .map_err(|e| sheet_error(&layout.sheet_name, e))?;
    }
    for name in defaults.iter().filter(|name| **name != layout.sheet_name) {
        book.remove_sheet_by_name(name)
            .map_err(|e| sheet_error(name, e))?;
    }

    let sheet = book
        .get_sheet_by_name_mut(&layout.sheet_name)
        .ok_or_else(|| Error::SheetNotFound {
            name: layout.sheet_name.clone(),
            available: String::new(),
        })?;
    write_items(sheet, items, layout)?;
    Ok(book)
}

/// Write the header and one bordered row per item.
///
/// Identifier cells get the gray fill; the localized name is merged across
/// its column and the next one.
pub fn write_items(sheet: &mut Worksheet, items: &[Item], layout: &SheetLayout) -> Result<()> {
    sheet
        .get_cell_mut((1u32, 1u32))
        .set_value_string(layout.header.as_str());

    let bordered = bordered_style(layout);
    let mut filled = bordered.clone();
    apply_solid_fill(&mut filled, &layout.fill_argb);

    for (index, item) in items.iter().enumerate() {
        let row = layout.data_row(index);

        let cell = sheet.get_cell_mut((layout.id_column, row));
        cell.set_value_string((index + 1).to_string());
        cell.set_style(filled.clone());

        let cell = sheet.get_cell_mut((layout.localized_column, row));
        cell.set_value_string(item.localized_name.as_str());
        cell.set_style(bordered.clone());
        let merge = CellRange::new(
            CellCoordinate::new(row, layout.localized_column)?,
            CellCoordinate::new(row, layout.localized_column + 1)?,
        );
        sheet.add_merge_cells(merge.to_string());

        let cell = sheet.get_cell_mut((layout.name_column, row));
        cell.set_value_string(item.name.as_str());
        cell.set_style(bordered.clone());
    }
    Ok(())
}

pub fn save_workbook(book: &Spreadsheet, path: &Path) -> Result<()> {
    umya_spreadsheet::writer::xlsx::write(book, path).map_err(|e| Error::SaveFailed {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

fn sheet_error(name: &str, details: impl ToString) -> Error {
    Error::SheetOperation {
        name: name.to_string(),
        details: details.to_string(),
    }
}

// set_argb() turns colours from the built-in palette into indexed="n";
// lowercase hex keeps an explicit rgb attribute.
fn rgb(argb: &str) -> String {
    argb.to_ascii_lowercase()
}

fn bordered_style(layout: &SheetLayout) -> Style {
    let mut style = Style::default();
    let borders = style.get_borders_mut();
    thin_line(borders.get_left_mut(), &layout.border_argb);
    thin_line(borders.get_right_mut(), &layout.border_argb);
    thin_line(borders.get_top_mut(), &layout.border_argb);
    thin_line(borders.get_bottom_mut(), &layout.border_argb);
    style
}

fn thin_line(border: &mut Border, argb: &str) {
    border.set_border_style(Border::BORDER_THIN);
    border.get_color_mut().set_argb(rgb(argb));
}

fn apply_solid_fill(style: &mut Style, argb: &str) {
    let pattern = style.get_fill_mut().get_pattern_fill_mut();
    pattern.set_pattern_type(PatternValues::Solid);
    pattern.get_foreground_color_mut().set_argb(rgb(argb));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::{inspect_sheet, BorderEdges, CellRole, CellValue, NO_FILL};
    use pretty_assertions::assert_eq;

    fn built() -> Spreadsheet {
        build_workbook(&default_items(), &SheetLayout::default()).unwrap()
    }

    #[test]
    fn test_default_sheet_is_replaced() {
        let book = built();
        assert_eq!(reader::get_sheet_names(&book), vec!["オフィス".to_string()]);
    }

    #[test]
    fn test_reusing_default_sheet_name() {
        let layout = SheetLayout::default().with_sheet_name("Sheet1");
        let book = build_workbook(&default_items(), &layout).unwrap();
        assert_eq!(reader::get_sheet_names(&book), vec!["Sheet1".to_string()]);
    }

    #[test]
    fn test_first_row_layout() {
        let book = built();
        let sheet = book.get_sheet_by_name("オフィス").unwrap();

        assert_eq!(sheet.get_value("A1"), "書き込みサンプル");
        assert_eq!(sheet.get_value("A2"), "1");
        assert_eq!(sheet.get_value("B2"), "ワード");
        assert_eq!(sheet.get_value("C2"), "");
        assert_eq!(sheet.get_value("D2"), "word");
        assert_eq!(sheet.get_value("A5"), "4");
        assert_eq!(sheet.get_value("D5"), "pdf");

        let merges: Vec<String> = sheet
            .get_merge_cells()
            .iter()
            .map(|range| range.get_range())
            .collect();
        assert_eq!(merges, vec!["B2:C2", "B3:C3", "B4:C4", "B5:C5"]);
    }

    #[test]
    fn test_styles_read_back() {
        let book = built();
        let sheet = book.get_sheet_by_name("オフィス").unwrap();
        let records = inspect_sheet(sheet, &SheetLayout::default()).unwrap();
        assert_eq!(records.len(), 12);

        let id = &records[0];
        assert_eq!(id.role, CellRole::Number);
        assert_eq!(id.value, CellValue::Text("1".into()));
        assert_eq!(id.borders, BorderEdges::ALL);
        assert!(id.fill_color.eq_ignore_ascii_case("FFA0A0A0"));
        assert_eq!(id.merge, None);
        let pattern = sheet
            .get_cell("A2")
            .and_then(|cell| cell.get_style().get_fill())
            .and_then(|fill| fill.get_pattern_fill())
            .unwrap();
        assert!(pattern.get_background_color().is_none());

        let localized = &records[1];
        assert_eq!(localized.value.as_text(), Some("ワード"));
        assert_eq!(localized.borders, BorderEdges::ALL);
        assert_eq!(localized.fill_color, NO_FILL);
        let merged: Vec<String> = localized.merge.as_ref().unwrap()[0]
            .iter()
            .map(|c| c.label())
            .collect();
        assert_eq!(merged, vec!["B2", "C2"]);

        let name = &records[2];
        assert_eq!(name.value.as_text(), Some("word"));
        assert_eq!(name.borders, BorderEdges::ALL);
        assert_eq!(name.fill_color, NO_FILL);
        assert_eq!(name.merge, None);
    }

    #[test]
    fn test_merged_partner_cell_is_untouched() {
        let book = built();
        let sheet = book.get_sheet_by_name("オフィス").unwrap();
        let partner = sheet.get_cell("C2");
        let has_border = partner
            .map(|cell| !BorderEdges::from_style(cell.get_style()).is_empty())
            .unwrap_or(false);
        assert!(!has_border);
    }

    #[test]
    fn test_no_items_writes_only_header() {
        let book = build_workbook(&[], &SheetLayout::default()).unwrap();
        let sheet = book.get_sheet_by_name("オフィス").unwrap();
        assert_eq!(sheet.get_value("A1"), "書き込みサンプル");
        assert!(sheet.get_merge_cells().is_empty());
        assert!(inspect_sheet(sheet, &SheetLayout::default()).unwrap().is_empty());
    }
}
