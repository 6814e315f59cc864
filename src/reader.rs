use crate::error::{Error, Result};
use std::path::Path;
use umya_spreadsheet::structs::Worksheet;
use umya_spreadsheet::Spreadsheet;

pub fn open_workbook(path: &Path) -> Result<Spreadsheet> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" => open_xlsx(path),
        _ => Err(Error::UnsupportedFormat(extension)),
    }
}

fn open_xlsx(path: &Path) -> Result<Spreadsheet> {
    umya_spreadsheet::reader::xlsx::read(path).map_err(|e| Error::InvalidExcel {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

pub fn get_sheet_names(workbook: &Spreadsheet) -> Vec<String> {
    workbook
        .get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .collect()
}

/// Look a worksheet up by its exact name.
pub fn find_sheet<'a>(workbook: &'a Spreadsheet, name: &str) -> Result<&'a Worksheet> {
    workbook
        .get_sheet_by_name(name)
        .ok_or_else(|| Error::SheetNotFound {
            name: name.to_string(),
            available: get_sheet_names(workbook).join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn missing_file_is_reported_before_parsing() {
        let err = open_workbook(Path::new("does/not/exist.xlsx")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert_eq!(err.kind(), ErrorKind::WorkbookAccess);
    }

    #[test]
    fn unknown_sheet_lists_available_names() {
        let book = umya_spreadsheet::new_file();
        let err = find_sheet(&book, "オフィス").unwrap_err();
        match err {
            Error::SheetNotFound { name, available } => {
                assert_eq!(name, "オフィス");
                assert_eq!(available, "Sheet1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
