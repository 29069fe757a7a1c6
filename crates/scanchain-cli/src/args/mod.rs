mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "scanchain")]
#[command(about = "Decode and render Scanchain batch passports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
