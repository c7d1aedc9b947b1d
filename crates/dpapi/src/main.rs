//! dpapi - HAProxy Data Plane API configuration tool
//!
//! Validates configuration documents, prints them in normalized form and
//! reports the changes between two of them.

use dpapi_command::{Cli, Commands};
use dpapi_config::RuntimeConfig;
use dpapi_error::DpapiError;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = dpapi_command::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&RuntimeConfig::default());
            error!("Application error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&settings);
    debug!("Runtime settings: {:?}", settings);

    match handle_commands(args.command, &settings) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Application error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Install the log subscriber, `RUST_LOG` taking precedence over the settings.
fn init_tracing(settings: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(args: &Cli) -> Result<RuntimeConfig, DpapiError> {
    match &args.settings {
        Some(path) => RuntimeConfig::from_file(path),
        None => Ok(RuntimeConfig::default()),
    }
}

/// Handle different command types
///
/// # Arguments
///
/// * `command` - Parsed command
/// * `settings` - Runtime settings
///
/// # Returns
///
/// * `Result<String, DpapiError>` - Text to print on stdout
fn handle_commands(command: Commands, settings: &RuntimeConfig) -> Result<String, DpapiError> {
    match command {
        Commands::Validate { path } => dpapi_command::handle_validate(&path),
        Commands::Diff {
            old,
            new,
            strict,
            format,
        } => dpapi_command::handle_diff(&old, &new, strict, format, settings),
        Commands::Show { path, format } => dpapi_command::handle_show(&path, format, settings),
    }
}
