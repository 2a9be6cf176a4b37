//! Command-line interface for the Atlas client.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use anyhow::Result;
use tracing::debug;

use crate::domain::models::config::Config;
use crate::infrastructure::atlas::AtlasClient;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};

/// Resolve configuration for a CLI invocation
///
/// Loads `--config` if given, otherwise the project hierarchy, then applies
/// command-line overrides. Validation runs once, on the overridden result,
/// so a flag can replace a bad file or environment value.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    cli.apply_overrides(&mut config);
    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Run a parsed command line to completion
pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let _logger = LoggerImpl::init(&LogConfig::try_from(&config.logging)?)?;
    debug!(?config, "configuration resolved");

    let client = AtlasClient::from_config(&config)?;
    let json = cli.json;

    match cli.command {
        Commands::CreateDid(args) => commands::did::create(&client, args, json).await,
        Commands::ResolveDid { did } => commands::did::resolve(&client, &did, json).await,
        Commands::AttachStewardship { did, body } => {
            commands::did::attach_stewardship(&client, &did, body, json).await
        }
        Commands::Issue(args) => commands::credential::issue(&client, args, json).await,
        Commands::Verify(args) => commands::credential::verify(&client, args, json).await,
        Commands::Status { credential_id } => {
            commands::credential::status(&client, &credential_id, json).await
        }
        Commands::RegisterSensor(args) => {
            commands::oracle::register_sensor(&client, args, json).await
        }
        Commands::SubmitMeasurement(args) => {
            commands::oracle::submit_measurement(&client, args, json).await
        }
        Commands::Aggregate(args) => commands::oracle::aggregate(&client, args, json).await,
        Commands::SubmitActivation(args) => {
            commands::rve::submit_activation(&client, args, json).await
        }
        Commands::ActivationStatus { activation_id } => {
            commands::rve::activation_status(&client, &activation_id, json).await
        }
        Commands::VerifyAndTrigger(args) => {
            commands::rve::verify_and_trigger(&client, args, json).await
        }
        Commands::Metrics(args) => commands::commons::metrics(&client, args, json).await,
        Commands::AuditTrail(args) => commands::commons::audit_trail(&client, args, json).await,
    }
}

/// Print an error in the selected output mode and exit with status 1
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1)
}
