//! Report export (Excel workbook, CSV layout)

pub mod excel;

use std::fs::File;
use std::path::Path;

use tracing::info;
use yard_domain::model::{OccupancySnapshot, YardArea};
use yard_types::Result;

pub use excel::export_layout_to_excel;

/// Write the slot layout as CSV to a file, returning the number of slot rows
pub fn export_layout_to_csv(
    areas: &[YardArea],
    snapshot: &OccupancySnapshot,
    output_path: &Path,
) -> Result<usize> {
    let file = File::create(output_path)?;
    let rows = yard_infra::write_layout_csv(file, areas, snapshot)?;
    info!(path = %output_path.display(), rows, "Exported layout to CSV");
    Ok(rows)
}
