use super::common::{DateFormatArg, WeightFallbackArg};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render the batch passport for a scanned link")]
    Show {
        #[arg(help = "Full URL, query string, or (with --raw) the encoded data value")]
        target: String,

        #[arg(
            long,
            help = "Treat TARGET as the already-extracted data parameter value"
        )]
        raw: bool,

        #[arg(long, help = "Hide the Collection Agent section")]
        no_agent: bool,

        #[arg(
            long,
            default_value = "omit",
            help = "How to handle an absent weight field"
        )]
        weight_fallback: WeightFallbackArg,

        #[arg(long, default_value = "long", help = "Calendar style for date fields")]
        date_format: DateFormatArg,
    },

    #[command(about = "Render a built-in sample passport")]
    Demo {
        #[arg(long, help = "Hide the Collection Agent section")]
        no_agent: bool,
    },
}
