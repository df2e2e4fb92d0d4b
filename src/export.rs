use log::info;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::config::{ScrapeConfig, SheetLayout};
use crate::error::ScrapeError;
use crate::records::{Snapshot, COMBINED_HEADERS};

/// Serialize the snapshot to the configured xlsx path, overwriting any
/// previous run's file. Each sheet is a header row plus one row per record.
pub fn write_workbook(snapshot: &Snapshot, config: &ScrapeConfig) -> Result<(), ScrapeError> {
    let mut workbook = Workbook::new();

    match config.layout {
        SheetLayout::PerCategory => {
            for (category, records) in snapshot.collections() {
                let worksheet = workbook.add_worksheet();
                worksheet.set_name(category.sheet_name())?;
                write_row(worksheet, 0, category.headers())?;
                for (i, record) in records.iter().enumerate() {
                    write_row(worksheet, (i + 1) as u32, &record.row(category))?;
                }
            }
        }
        SheetLayout::Combined => {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name("Zwierzęta")?;
            write_row(worksheet, 0, &COMBINED_HEADERS)?;
            let mut row = 1u32;
            for (_, records) in snapshot.collections() {
                for record in records {
                    write_row(worksheet, row, &record.combined_row())?;
                    row += 1;
                }
            }
        }
    }

    workbook.save(&config.output_path)?;
    info!("Wrote {}", config.output_path.display());
    Ok(())
}

fn write_row(worksheet: &mut Worksheet, row: u32, cells: &[&str]) -> Result<(), ScrapeError> {
    for (col, value) in cells.iter().enumerate() {
        worksheet.write_string(row, col as u16, *value)?;
    }
    Ok(())
}
