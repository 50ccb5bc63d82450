use crate::reports;
use clap::Args;
use cocomo::api::{self, EstimateRequest};
use cocomo::config::{Config, OutputFormat};
use cocomo::error::CocomoResult;
use cocomo::export;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Project size in thousands of lines of code
    #[arg(allow_hyphen_values = true)]
    pub kloc: String,

    #[arg(short, long, default_value = "organic")]
    pub mode: String,

    /// Directory to write a JSON snapshot of the estimate into
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: EstimateArgs, config: &Config) -> CocomoResult<()> {
    let request = EstimateRequest {
        kloc: args.kloc,
        mode: args.mode,
    };

    info!("📐 Estimating {} KLOC ({})", request.kloc.trim(), request.mode);
    let result = api::calculate(&request)?;

    match config.output.format {
        OutputFormat::Table => reports::print_estimate_report(&result, &config.output),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if let Some(dir) = args.export {
        let path = export::write_to_dir(&result, &dir)?;
        if config.output.format == OutputFormat::Table {
            println!("Exported: {}", path.display());
        }
    }

    Ok(())
}
