//! Command handlers

use std::path::PathBuf;

use tracing::debug;
use yard_app::app::YardPlanningService;
use yard_app::config::Config;
use yard_app::export::{export_layout_to_csv, export_layout_to_excel};
use yard_domain::model::{ViewConfiguration, ViewPreset};
use yard_domain::service::Surface;
use yard_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Config changes operate on the stored file, not on CLI overrides
    if let Commands::Config {
        show,
        set_seed,
        clear_seed,
        set_areas,
        set_min_rate,
        set_max_rate,
        set_zoom,
        set_view,
        set_output,
        reset,
    } = cli.command
    {
        return cmd_config(ConfigChanges {
            show,
            set_seed,
            clear_seed,
            set_areas,
            set_min_rate,
            set_max_rate,
            set_zoom,
            set_view,
            set_output,
            reset,
        });
    }

    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref areas) = cli.areas {
        config.areas_file = Some(areas.clone());
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(seed = ?config.seed, areas_file = ?config.areas_file, "Effective configuration");

    let service = YardPlanningService::from_config(&config)?;

    match cli.command {
        Commands::Areas => output::print_areas(output_format, service.areas()),

        Commands::Stats { area } => cmd_stats(&service, output_format, area.as_deref()),

        Commands::Slots {
            area,
            placeable,
            layer,
        } => cmd_slots(&service, output_format, &area, placeable, layer),

        Commands::Breakdown { area } => {
            let breakdown = service.breakdown(&area)?;
            output::print_breakdown(output_format, &breakdown)
        }

        Commands::Render {
            area,
            view,
            zoom,
            layer,
            width,
            height,
        } => {
            let view = ViewConfiguration::new(area)
                .with_preset(view.unwrap_or(config.default_view))
                .with_zoom(zoom.unwrap_or_else(|| config.initial_zoom()))
                .with_layer(layer);
            cmd_render(&service, output_format, &view, Surface::new(width, height))
        }

        Commands::Export { output, csv } => cmd_export(&service, output, csv),

        Commands::Config { .. } => Ok(()),
    }
}

fn cmd_stats(service: &YardPlanningService, format: OutputFormat, area: Option<&str>) -> Result<()> {
    match area {
        Some(area_id) => {
            let area = service.area(area_id)?;
            let stats = service.area_stats(area_id)?;
            output::print_area_stats(format, area, &stats)
        }
        None => output::print_overview(format, &service.overview(), &service.totals()),
    }
}

fn cmd_slots(
    service: &YardPlanningService,
    format: OutputFormat,
    area_id: &str,
    placeable: bool,
    layer: Option<u32>,
) -> Result<()> {
    if placeable {
        let positions: Vec<_> = service
            .placeable_slots(area_id)?
            .into_iter()
            .filter(|p| layer.map_or(true, |l| p.layer == l))
            .collect();
        return output::print_positions(format, area_id, &positions);
    }

    let slots = service.slots(area_id, layer)?;
    output::print_slots(format, &slots)
}

fn cmd_render(
    service: &YardPlanningService,
    format: OutputFormat,
    view: &ViewConfiguration,
    surface: Surface,
) -> Result<()> {
    // An unknown area draws nothing rather than failing
    let list = service.render(view, surface);
    output::print_draw_list(format, view, &list)
}

fn cmd_export(service: &YardPlanningService, output: PathBuf, csv: bool) -> Result<()> {
    if csv {
        let rows = export_layout_to_csv(service.areas(), service.snapshot(), &output)?;
        println!("Exported {} slots to {}", rows, output.display());
    } else {
        export_layout_to_excel(service.areas(), service.snapshot(), &output)?;
        println!(
            "Exported {} slots ({} areas) to {}",
            service.snapshot().len(),
            service.areas().len(),
            output.display()
        );
    }
    Ok(())
}

struct ConfigChanges {
    show: bool,
    set_seed: Option<u64>,
    clear_seed: bool,
    set_areas: Option<PathBuf>,
    set_min_rate: Option<f64>,
    set_max_rate: Option<f64>,
    set_zoom: Option<u32>,
    set_view: Option<ViewPreset>,
    set_output: Option<OutputFormat>,
    reset: bool,
}

fn cmd_config(changes: ConfigChanges) -> Result<()> {
    if changes.reset {
        let mut config = Config::load()?;
        config.reset();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(seed) = changes.set_seed {
        config.seed = Some(seed);
        modified = true;
    }

    if changes.clear_seed {
        config.seed = None;
        modified = true;
    }

    if let Some(path) = changes.set_areas {
        config.areas_file = Some(path);
        modified = true;
    }

    if let Some(rate) = changes.set_min_rate {
        config.min_occupancy_rate = rate;
        modified = true;
    }

    if let Some(rate) = changes.set_max_rate {
        config.max_occupancy_rate = rate;
        modified = true;
    }

    if let Some(zoom) = changes.set_zoom {
        config.default_zoom = zoom;
        modified = true;
    }

    if let Some(view) = changes.set_view {
        config.default_view = view;
        modified = true;
    }

    if let Some(format) = changes.set_output {
        config.output_format = format;
        modified = true;
    }

    if modified {
        // Reject a range the generator cannot use before writing it
        config.generation_policy()?;
        config.save()?;
        println!("Configuration saved");
    }

    if changes.show || !modified {
        println!("{}", config);
    }

    Ok(())
}
