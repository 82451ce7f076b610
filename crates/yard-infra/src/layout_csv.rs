//! CSV output of a yard layout snapshot

use std::io::Write;

use yard_domain::model::{OccupancySnapshot, YardArea};
use yard_types::{Error, Result};

const HEADERS: [&str; 8] = [
    "area_id",
    "row",
    "col",
    "layer",
    "status",
    "container_no",
    "container_type",
    "customer",
];

/// Write one row per slot, areas in configuration order.
///
/// Empty slots keep blank container columns.
pub fn write_layout_csv<W: Write>(
    writer: W,
    areas: &[YardArea],
    snapshot: &OccupancySnapshot,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADERS)
        .map_err(|e| Error::Csv(e.to_string()))?;

    let mut rows = 0;
    for area in areas {
        for slot in snapshot.slots_for(&area.id) {
            let status = if slot.is_empty() { "empty" } else { "occupied" };
            let (row, col, layer) = (
                slot.position.row.to_string(),
                slot.position.col.to_string(),
                slot.position.layer.to_string(),
            );
            wtr.write_record([
                slot.area_id.as_str(),
                row.as_str(),
                col.as_str(),
                layer.as_str(),
                status,
                slot.container_no().unwrap_or(""),
                slot.container_type().map(|t| t.code()).unwrap_or(""),
                slot.customer().unwrap_or(""),
            ])
            .map_err(|e| Error::Csv(e.to_string()))?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yard_domain::model::{container_number, SlotOccupancy, SlotPosition, StoredContainer};
    use yard_types::ContainerType;

    #[test]
    fn test_write_layout_csv() {
        let area = YardArea::new("AA", "AA区", 1, 1, 2, "#ff6b6b");
        let ground = SlotPosition::new(1, 1, 1);
        let snapshot = OccupancySnapshot::new(vec![
            SlotOccupancy::occupied(
                "AA",
                ground,
                StoredContainer {
                    container_no: container_number("AA", ground),
                    container_type: ContainerType::Hc40,
                    customer: "东方海外".to_string(),
                },
            ),
            SlotOccupancy::empty("AA", SlotPosition::new(1, 1, 2)),
        ]);

        let mut buf = Vec::new();
        let rows = write_layout_csv(&mut buf, &[area], &snapshot).unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "area_id,row,col,layer,status,container_no,container_type,customer");
        assert_eq!(lines[1], "AA,1,1,1,occupied,AA010101,40HC,东方海外");
        assert_eq!(lines[2], "AA,1,1,2,empty,,,");
    }

    #[test]
    fn test_skips_unconfigured_areas() {
        let snapshot = OccupancySnapshot::new(vec![SlotOccupancy::empty(
            "ZZ",
            SlotPosition::new(1, 1, 1),
        )]);
        let mut buf = Vec::new();
        let rows = write_layout_csv(&mut buf, &[], &snapshot).unwrap();
        assert_eq!(rows, 0);
    }
}
