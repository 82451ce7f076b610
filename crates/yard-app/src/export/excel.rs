//! Excel export of a yard snapshot

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;
use yard_domain::model::{OccupancySnapshot, YardArea};
use yard_domain::service::OccupancyStatsCalculator;
use yard_types::{Error, Result};

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export per-area statistics and every slot to an Excel workbook
pub fn export_layout_to_excel(
    areas: &[YardArea],
    snapshot: &OccupancySnapshot,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, areas, snapshot)?;

    let slots_sheet = workbook.add_worksheet();
    write_slots_sheet(slots_sheet, areas, snapshot)?;

    workbook.save(output_path).map_err(xlsx_err)?;
    info!(path = %output_path.display(), slots = snapshot.len(), "Exported layout to Excel");

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    areas: &[YardArea],
    snapshot: &OccupancySnapshot,
) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let calc = OccupancyStatsCalculator::new(areas, snapshot);

    sheet
        .write_string_with_format(0, 0, "Yard Occupancy Report", &header_format)
        .map_err(xlsx_err)?;
    sheet.write_string(1, 0, "Generated:").map_err(xlsx_err)?;
    sheet
        .write_string(1, 1, snapshot.generated_at().to_rfc3339())
        .map_err(xlsx_err)?;
    if let Some(seed) = snapshot.seed() {
        sheet.write_string(2, 0, "Seed:").map_err(xlsx_err)?;
        sheet.write_string(2, 1, seed.to_string()).map_err(xlsx_err)?;
    }

    let headers = ["Area", "Name", "Total", "Occupied", "Available", "Rate %", "Level"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(4, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    let mut row = 5;
    for entry in calc.compute_all_area_stats() {
        let s = entry.stats;
        sheet.write_string(row, 0, &entry.area_id).map_err(xlsx_err)?;
        sheet.write_string(row, 1, &entry.area_name).map_err(xlsx_err)?;
        sheet.write_number(row, 2, s.total as f64).map_err(xlsx_err)?;
        sheet.write_number(row, 3, s.occupied as f64).map_err(xlsx_err)?;
        sheet.write_number(row, 4, s.available as f64).map_err(xlsx_err)?;
        sheet
            .write_number(row, 5, s.occupancy_rate as f64)
            .map_err(xlsx_err)?;
        sheet.write_string(row, 6, s.level().label()).map_err(xlsx_err)?;
        row += 1;
    }

    let totals = calc.compute_totals().stats;
    sheet
        .write_string_with_format(row, 0, "Total", &header_format)
        .map_err(xlsx_err)?;
    sheet.write_number(row, 2, totals.total as f64).map_err(xlsx_err)?;
    sheet
        .write_number(row, 3, totals.occupied as f64)
        .map_err(xlsx_err)?;
    sheet
        .write_number(row, 4, totals.available as f64)
        .map_err(xlsx_err)?;
    sheet
        .write_number(row, 5, totals.occupancy_rate as f64)
        .map_err(xlsx_err)?;

    sheet.set_column_width(1, 12).map_err(xlsx_err)?;
    Ok(())
}

fn write_slots_sheet(
    sheet: &mut Worksheet,
    areas: &[YardArea],
    snapshot: &OccupancySnapshot,
) -> Result<()> {
    sheet.set_name("Slots").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Area",
        "Row",
        "Col",
        "Layer",
        "Status",
        "Container No",
        "Type",
        "Customer",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    let mut row = 1;
    for area in areas {
        for slot in snapshot.slots_for(&area.id) {
            sheet.write_string(row, 0, &slot.area_id).map_err(xlsx_err)?;
            sheet
                .write_number(row, 1, slot.position.row as f64)
                .map_err(xlsx_err)?;
            sheet
                .write_number(row, 2, slot.position.col as f64)
                .map_err(xlsx_err)?;
            sheet
                .write_number(row, 3, slot.position.layer as f64)
                .map_err(xlsx_err)?;

            match &slot.container {
                Some(container) => {
                    sheet.write_string(row, 4, "occupied").map_err(xlsx_err)?;
                    sheet
                        .write_string(row, 5, &container.container_no)
                        .map_err(xlsx_err)?;
                    sheet
                        .write_string(row, 6, container.container_type.code())
                        .map_err(xlsx_err)?;
                    sheet
                        .write_string(row, 7, &container.customer)
                        .map_err(xlsx_err)?;
                }
                None => {
                    sheet.write_string(row, 4, "empty").map_err(xlsx_err)?;
                }
            }
            row += 1;
        }
    }

    sheet.set_column_width(5, 14).map_err(xlsx_err)?;
    Ok(())
}
