//! Reads back the value, fill, borders and merge membership of sample sheet cells.

use crate::coordinate::{CellCoordinate, CellRange};
use crate::error::Result;
use crate::layout::SheetLayout;
use crate::reader;
use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use umya_spreadsheet::structs::{Border, Cell, Style, Worksheet};
use umya_spreadsheet::Spreadsheet;

/// Reported for cells without a fill colour.
pub const NO_FILL: &str = "00000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Number,
    LocalizedName,
    Name,
}

impl CellRole {
    pub fn label(&self) -> &'static str {
        match self {
            CellRole::Number => "number",
            CellRole::LocalizedName => "name-jp",
            CellRole::Name => "name",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Values that mark the end of the data rows: no value, or the number 0.
    pub fn ends_data(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(n) => *n == 0.0,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str("None"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) if n.fract() == 0.0 => write!(f, "{:.0}", n),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Which sides of a cell carry a border line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderEdges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BorderEdges {
    pub const ALL: BorderEdges = BorderEdges {
        left: true,
        right: true,
        top: true,
        bottom: true,
    };

    /// Edges of a cell style; a style without borders has none.
    pub fn from_style(style: &Style) -> Self {
        let Some(borders) = style.get_borders() else {
            return Self::default();
        };
        Self {
            left: has_line(borders.get_left()),
            right: has_line(borders.get_right()),
            top: has_line(borders.get_top()),
            bottom: has_line(borders.get_bottom()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Active edges in left, right, top, bottom order.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.left, "LEFT"),
            (self.right, "RIGHT"),
            (self.top, "TOP"),
            (self.bottom, "BOTTOM"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

fn has_line(border: &Border) -> bool {
    let style = border.get_border_style();
    !style.is_empty() && style != Border::BORDER_NONE
}

/// Merge ranges of a worksheet, bucketed by row over a fixed window.
///
/// Lookups return the first range, in definition order, containing the cell.
#[derive(Debug, Default)]
pub struct MergeIndex {
    ranges: Vec<CellRange>,
    by_row: HashMap<u32, Vec<usize>>,
}

impl MergeIndex {
    pub fn new(ranges: Vec<CellRange>, rows: RangeInclusive<u32>) -> Self {
        let mut by_row: HashMap<u32, Vec<usize>> = HashMap::new();
        for (idx, range) in ranges.iter().enumerate() {
            let first = range.start.row.max(*rows.start());
            let last = range.end.row.min(*rows.end());
            for row in first..=last {
                by_row.entry(row).or_default().push(idx);
            }
        }
        Self { ranges, by_row }
    }

    pub fn from_sheet(sheet: &Worksheet, rows: RangeInclusive<u32>) -> Self {
        let references: Vec<String> = sheet
            .get_merge_cells()
            .iter()
            .map(|range| range.get_range())
            .collect();
        Self::from_references(&references, rows)
    }

    /// Build from `B2:C2`-style references; references that do not parse are skipped.
    pub fn from_references<S: AsRef<str>>(references: &[S], rows: RangeInclusive<u32>) -> Self {
        let ranges = references
            .iter()
            .filter_map(|reference| reference.as_ref().parse::<CellRange>().ok())
            .collect();
        Self::new(ranges, rows)
    }

    pub fn lookup(&self, cell: CellCoordinate) -> Option<&CellRange> {
        self.by_row
            .get(&cell.row)?
            .iter()
            .map(|&idx| &self.ranges[idx])
            .find(|range| range.contains(cell))
    }
}

/// Everything reported about one inspected cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRecord {
    pub role: CellRole,
    pub coordinate: CellCoordinate,
    pub value: CellValue,
    pub fill_color: String,
    pub borders: BorderEdges,
    /// All cells of the containing merge range, row by row.
    pub merge: Option<Vec<Vec<CellCoordinate>>>,
}

impl fmt::Display for CellRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:value={},bgcolor={},borders={},merged_cells=",
            self.role.label(),
            self.coordinate,
            self.value,
            self.fill_color,
            self.borders.names().join(",")
        )?;
        match &self.merge {
            None => f.write_str("None"),
            Some(rows) => {
                let rows: Vec<String> = rows
                    .iter()
                    .map(|row| {
                        let cells: Vec<String> = row.iter().map(|c| c.label()).collect();
                        format!("[{}]", cells.join(", "))
                    })
                    .collect();
                write!(f, "[{}]", rows.join(", "))
            }
        }
    }
}

/// Result of inspecting the sample sheet of a workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetReport {
    pub sheet_names: Vec<String>,
    pub header: CellValue,
    pub records: Vec<CellRecord>,
}

pub fn inspect_workbook(workbook: &Spreadsheet, layout: &SheetLayout) -> Result<SheetReport> {
    let sheet_names = reader::get_sheet_names(workbook);
    let sheet = reader::find_sheet(workbook, &layout.sheet_name)?;
    let header = read_value(sheet.get_cell((1u32, 1u32)));
    let records = inspect_sheet(sheet, layout)?;
    Ok(SheetReport {
        sheet_names,
        header,
        records,
    })
}

/// Scan the data rows and report the identifier, localized-name and name cells.
///
/// The scan stops at the first row whose identifier cell is empty or holds
/// the number 0, or after `layout.max_rows` rows.
pub fn inspect_sheet(sheet: &Worksheet, layout: &SheetLayout) -> Result<Vec<CellRecord>> {
    let merges = MergeIndex::from_sheet(sheet, layout.first_data_row..=layout.last_scan_row());
    let columns = [
        (CellRole::Number, layout.id_column),
        (CellRole::LocalizedName, layout.localized_column),
        (CellRole::Name, layout.name_column),
    ];

    let mut records = Vec::new();
    for offset in 0..layout.max_rows {
        let row = layout.first_data_row + offset;
        if read_value(sheet.get_cell((layout.id_column, row))).ends_data() {
            break;
        }
        for (role, column) in columns {
            let coordinate = CellCoordinate::new(row, column)?;
            records.push(inspect_cell(sheet, &merges, role, coordinate));
        }
    }
    Ok(records)
}

pub fn inspect_cell(
    sheet: &Worksheet,
    merges: &MergeIndex,
    role: CellRole,
    coordinate: CellCoordinate,
) -> CellRecord {
    let cell = sheet.get_cell(coordinate.col_row());
    let style = cell.map(|c| c.get_style());

    CellRecord {
        role,
        coordinate,
        value: read_value(cell),
        fill_color: style
            .and_then(fill_color)
            .unwrap_or_else(|| NO_FILL.to_string()),
        borders: style.map(BorderEdges::from_style).unwrap_or_default(),
        merge: merges.lookup(coordinate).map(CellRange::rows),
    }
}

fn read_value(cell: Option<&Cell>) -> CellValue {
    let Some(cell) = cell else {
        return CellValue::Empty;
    };

    let raw = cell.get_value().to_string();
    if raw.is_empty() {
        return CellValue::Empty;
    }
    if cell.get_data_type() == "n" {
        if let Ok(num) = raw.parse::<f64>() {
            return CellValue::Number(num);
        }
    }
    CellValue::Text(raw)
}

fn fill_color(style: &Style) -> Option<String> {
    let color = style
        .get_fill()?
        .get_pattern_fill()?
        .get_foreground_color()?;
    let argb = color.get_argb();
    (!argb.is_empty()).then(|| argb.to_string())
}
