use super::args::{Cli, Commands};
use super::handlers;
use crate::presentation::view_models::{DisplayOptions, PresentOptions};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let enable_color = cli.color.resolve();

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Show {
            target,
            raw,
            no_agent,
            weight_fallback,
            date_format,
        } => handlers::show::handle(handlers::show::ShowRequest {
            target,
            raw,
            format: cli.format.into(),
            present: PresentOptions {
                show_agent_section: !no_agent,
                weight_fallback: weight_fallback.into(),
            },
            display: DisplayOptions {
                enable_color,
                date_format: date_format.into(),
            },
        }),

        Commands::Demo { no_agent } => handlers::demo::handle(
            cli.format.into(),
            PresentOptions {
                show_agent_section: !no_agent,
                ..PresentOptions::default()
            },
            DisplayOptions {
                enable_color,
                ..DisplayOptions::default()
            },
        ),
    }
}

fn show_guidance() {
    println!("scanchain - Batch passport viewer\n");
    println!("Render a scanned QR link:");
    println!("  scanchain show \"https://scan.example/batch?data=...\"\n");
    println!("Try it without a QR code:");
    println!("  scanchain demo\n");
    println!("For more commands:");
    println!("  scanchain --help");
}
