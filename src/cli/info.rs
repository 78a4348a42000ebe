use serde_json::json;
use tabled::Tabled;

use crate::cli::output::{print_json, print_output, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;
use crate::models::channel::AmbilightSide;
use crate::service::ambilight::AmbilightService;

#[derive(Tabled)]
struct SideRow {
    #[tabled(rename = "Side")]
    side: String,
    #[tabled(rename = "Pixels")]
    pixels: u32,
    #[tabled(rename = "Layers")]
    layers: u32,
}

pub async fn handle_topology(
    ambilight: &AmbilightService,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let topology = ambilight.topology().await?;
    match config.output_mode {
        OutputMode::Table => {
            let rows: Vec<SideRow> = AmbilightSide::ALL
                .into_iter()
                .map(|side| SideRow {
                    side: side.to_string(),
                    pixels: topology.pixels_on(side),
                    layers: topology.layers,
                })
                .collect();
            print_table(&rows);
        }
        OutputMode::Json => print_json(&json!({"topology": topology})),
    }
    Ok(())
}

pub async fn handle_mode(
    ambilight: &AmbilightService,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let mode = ambilight.mode().await?;
    print_output(&json!({"mode": mode.current}), config.output_mode);
    Ok(())
}
