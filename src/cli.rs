//! Entry points shared by the `read_xls` and `write_xls` binaries.

use crate::coordinate::{to_coordinate, to_label};
use crate::error::{Error, Result};
use crate::inspector;
use crate::layout::{SheetLayout, DEFAULT_SHEET_NAME};
use crate::reader;
use crate::writer;
use clap::Parser;
use std::error::Error as _;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "read_xls")]
#[command(version, about = "Print values, fills, borders and merges of the sample sheet")]
pub struct InspectArgs {
    /// Excel file to inspect (.xlsx)
    pub xlsfile: PathBuf,

    /// Worksheet to inspect
    #[arg(short, long, default_value = DEFAULT_SHEET_NAME)]
    pub sheet: String,

    /// Print detailed progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "write_xls")]
#[command(version, about = "Write a bordered, filled and merged sample sheet")]
pub struct WriteArgs {
    /// Excel file to create (.xlsx)
    pub xlsfile: PathBuf,

    /// Name of the created worksheet
    #[arg(short, long, default_value = DEFAULT_SHEET_NAME)]
    pub sheet: String,

    /// Print detailed progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run_inspect<W: Write>(args: &InspectArgs, out: &mut W) -> Result<()> {
    if args.verbose {
        eprintln!("reading: {:?}", args.xlsfile);
    }

    let workbook = reader::open_workbook(&args.xlsfile)?;
    let layout = SheetLayout::default().with_sheet_name(args.sheet.as_str());
    let report = inspector::inspect_workbook(&workbook, &layout)?;

    if args.verbose {
        eprintln!("sheets: {}", report.sheet_names.join(", "));
    }

    let quoted: Vec<String> = report
        .sheet_names
        .iter()
        .map(|name| format!("<Worksheet \"{}\">", name))
        .collect();
    writeln!(out, "wb.worksheets:[{}]", quoted.join(", "))?;
    let quoted: Vec<String> = report
        .sheet_names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect();
    writeln!(out, "wb.sheetnames:[{}]", quoted.join(", "))?;
    writeln!(out, "ws['A1']:{}", report.header)?;

    for record in &report.records {
        writeln!(out, "{}", record)?;
    }

    if args.verbose {
        eprintln!("rows: {}", report.records.len() / 3);
    }
    writeln!(out, "complete")?;
    Ok(())
}

pub fn run_write<W: Write>(args: &WriteArgs, out: &mut W) -> Result<()> {
    let (row, column) = to_coordinate("B2")?;
    writeln!(out, "(2, 2)={}", to_label(2, 2))?;
    writeln!(out, "(B2)=({}, {})", row, column)?;

    let layout = SheetLayout::default().with_sheet_name(args.sheet.as_str());
    let items = writer::default_items();
    let workbook = writer::build_workbook(&items, &layout)?;

    if args.verbose {
        eprintln!("writing: {:?} ({} items)", args.xlsfile, items.len());
    }

    writer::save_workbook(&workbook, &args.xlsfile)?;
    writeln!(out, "complete")?;
    Ok(())
}

/// Print a failed run as `ERROR:` plus one line per underlying cause.
pub fn report_error<W: Write>(err: &Error, out: &mut W) {
    // Nothing is left to report a failed stdout write to.
    let _ = writeln!(out, "ERROR: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(out, "caused by: {}", cause);
        source = cause.source();
    }
}
