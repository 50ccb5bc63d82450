use crate::reports;
use clap::Args;
use cocomo::api;
use cocomo::config::{Config, OutputFormat};
use cocomo::error::CocomoResult;
use cocomo::input::parse_kloc;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Project size in thousands of lines of code
    #[arg(allow_hyphen_values = true)]
    pub kloc: String,
}

pub fn run(args: CompareArgs, config: &Config) -> CocomoResult<()> {
    let size_kloc = parse_kloc(&args.kloc)?;
    let results = api::compare_modes(size_kloc)?;

    match config.output.format {
        OutputFormat::Table => {
            println!("\n🔎 === MODE COMPARISON: {} KLOC === 🔎", size_kloc);
            reports::print_comparison_report(&results, &config.output);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }

    Ok(())
}
