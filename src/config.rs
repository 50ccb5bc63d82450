use clap::Args;
use strum_macros::{Display, EnumString};

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct OutputOptions {
    // Decimal places for effort, schedule and productivity
    #[arg(global = true, long, default_value_t = 1)]
    pub decimals: usize,

    #[arg(global = true, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            decimals: 1,
            format: OutputFormat::Table,
        }
    }
}
