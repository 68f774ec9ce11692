use clap::Parser;
use imgsweep::config::{CliConfig, Config};
use imgsweep::reporting::logging;
use imgsweep::ui::{Cli, cli_to_config, output};

fn main() {
    let cli = Cli::parse();

    match run_imgsweep_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main sweep logic extracted from main() for testing
///
/// The report is only printed once the whole scan has succeeded.
pub fn run_imgsweep_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config, cli_config.root());

    let outcome = imgsweep::sweep(cli_config.root(), &config)?;

    output::display_results(&outcome, config.output_format())?;

    Ok(0)
}

/// Load configuration from file or the site root and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        if cli_config.config_file.is_some() {
            logging::log_warning("--config is ignored because --no-config is set");
        }
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_root(cli_config.root())?
    };

    // CLI takes precedence over the config file
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
