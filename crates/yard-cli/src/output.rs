//! Output formatting module

use serde::Serialize;
use yard_app::app::AreaBreakdown;
use yard_domain::model::{
    AreaStats, AreaStatsEntry, SlotOccupancy, SlotPosition, ViewConfiguration, YardArea,
    YardTotals,
};
use yard_domain::service::{DrawList, DrawPrimitive};
use yard_types::{OutputFormat, Result};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_areas(format: OutputFormat, areas: &[YardArea]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(areas);
    }

    println!("\nYard Areas");
    println!("==========");
    println!("{:<6} {:<8} {:>5} {:>5} {:>7} {:>7}  Color", "ID", "Name", "Rows", "Cols", "Layers", "Slots");
    for area in areas {
        println!(
            "{:<6} {:<8} {:>5} {:>5} {:>7} {:>7}  {}",
            area.id,
            area.name,
            area.rows,
            area.cols,
            area.max_layers,
            area.slot_count(),
            area.color
        );
    }
    Ok(())
}

pub fn print_area_stats(format: OutputFormat, area: &YardArea, stats: &AreaStats) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(stats);
    }

    println!("\n{} ({})", area.name, area.id);
    println!("==========");
    println!("Dimensions:      {} x {} x {}", area.rows, area.cols, area.max_layers);
    println!("Total slots:     {}", stats.total);
    println!("Occupied:        {}", stats.occupied);
    println!("Available:       {}", stats.available);
    println!(
        "Occupancy:       {}% ({})",
        stats.occupancy_rate,
        stats.level().label_en()
    );
    Ok(())
}

#[derive(Serialize)]
struct Overview<'a> {
    areas: &'a [AreaStatsEntry],
    totals: &'a YardTotals,
}

pub fn print_overview(format: OutputFormat, entries: &[AreaStatsEntry], totals: &YardTotals) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&Overview {
            areas: entries,
            totals,
        });
    }

    println!("\nYard Occupancy");
    println!("==============");
    println!("{:<6} {:>7} {:>9} {:>10} {:>6}  Level", "Area", "Total", "Occupied", "Available", "Rate");
    for entry in entries {
        let s = &entry.stats;
        println!(
            "{:<6} {:>7} {:>9} {:>10} {:>5}%  {}",
            entry.area_id,
            s.total,
            s.occupied,
            s.available,
            s.occupancy_rate,
            s.level().label_en()
        );
    }
    let t = &totals.stats;
    println!("------------------------------------------------");
    println!(
        "{:<6} {:>7} {:>9} {:>10} {:>5}%  {}",
        "Total",
        t.total,
        t.occupied,
        t.available,
        t.occupancy_rate,
        t.level().label_en()
    );
    Ok(())
}

pub fn print_slots(format: OutputFormat, slots: &[&SlotOccupancy]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(slots);
    }

    println!("{:<10} {:<10} {:<12} {:<6} Customer", "Slot", "Status", "Container", "Type");
    for slot in slots {
        match &slot.container {
            Some(c) => println!(
                "{:<10} {:<10} {:<12} {:<6} {}",
                slot.position.to_string(),
                "occupied",
                c.container_no,
                c.container_type.code(),
                c.customer
            ),
            None => println!("{:<10} {:<10}", slot.position.to_string(), "empty"),
        }
    }
    println!("\n{} slots", slots.len());
    Ok(())
}

pub fn print_positions(format: OutputFormat, area_id: &str, positions: &[SlotPosition]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(positions);
    }

    println!("\nPlaceable slots in {}", area_id);
    println!("====================");
    for position in positions {
        println!("{}", position);
    }
    println!("\n{} slots", positions.len());
    Ok(())
}

pub fn print_breakdown(format: OutputFormat, breakdown: &AreaBreakdown) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(breakdown);
    }

    println!("\nBreakdown for {}", breakdown.area_id);
    println!("=================");
    println!("\nBy container type:");
    for entry in &breakdown.container_types {
        println!("  {:<8} {:>6}", entry.label, entry.count);
    }
    println!("\nBy customer:");
    for entry in &breakdown.customers {
        println!("  {:<10} {:>6}", entry.label, entry.count);
    }
    println!("\nBy layer:");
    for layer in &breakdown.layers {
        println!("  L{:<3} {:>5} / {}", layer.layer, layer.occupied, layer.capacity);
    }
    Ok(())
}

pub fn print_draw_list(format: OutputFormat, view: &ViewConfiguration, list: &DrawList) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(list);
    }

    println!("\nRender: {} / {} / {}%", view.selected_area, view.angle.name, view.effective_zoom());
    if list.is_empty() {
        println!("(nothing to draw)");
        return Ok(());
    }
    println!("Primitives:      {}", list.len());
    println!("Grid lines:      {}", list.line_count());
    println!("Containers:      {}", list.rects().count());
    println!("Labels:          {}", list.text_count());

    if let Some(DrawPrimitive::Rect { slot, origin, width, .. }) = list.rects().last() {
        println!(
            "Top-most:        {} at ({:.1}, {:.1}) size {:.1}",
            slot, origin.x, origin.y, width
        );
    }
    Ok(())
}
