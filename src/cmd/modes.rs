use crate::reports;
use cocomo::api;
use cocomo::config::{Config, OutputFormat};
use cocomo::error::CocomoResult;

pub fn run(config: &Config) -> CocomoResult<()> {
    let modes = api::list_modes();

    match config.output.format {
        OutputFormat::Table => reports::print_modes_report(&modes),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&modes)?),
    }

    Ok(())
}
