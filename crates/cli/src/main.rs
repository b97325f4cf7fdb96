mod link_command;

use std::path::PathBuf;

use {
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {
    atende_config::{AtendeConfig, Severity},
    atende_handoff::SystemOpener,
    atende_wizard::terminal::run_intake,
};

#[derive(Parser)]
#[command(name = "atende", about = "Atende — scripted contact-intake chat wizard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Config file path (overrides discovery).
    #[arg(long, global = true, env = "ATENDE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the intake conversation in the terminal (default).
    Chat {
        /// Pre-seed the request type (e.g. "Orçamento").
        #[arg(long)]
        request_type: Option<String>,
    },
    /// Build the handoff link for a fully specified request and print it.
    Link(link_command::LinkArgs),
    /// Configuration management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active config file path.
    Path,
    /// Print the effective configuration as TOML.
    Show,
    /// Validate the configuration and report diagnostics.
    Check,
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

fn load_effective_config(cli: &Cli) -> anyhow::Result<AtendeConfig> {
    match &cli.config {
        Some(path) => atende_config::load_config(path),
        None => Ok(atende_config::discover_and_load()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    let config = load_effective_config(&cli)?;

    match cli.command.unwrap_or(Commands::Chat { request_type: None }) {
        Commands::Chat { request_type } => {
            info!(version = env!("CARGO_PKG_VERSION"), "atende starting");
            run_intake(&config, &SystemOpener, request_type.as_deref()).await
        },
        Commands::Link(args) => link_command::run(&config, &args),
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                let path = cli
                    .config
                    .unwrap_or_else(atende_config::find_or_default_config_path);
                println!("{}", path.display());
                Ok(())
            },
            ConfigAction::Show => {
                println!("{}", toml::to_string_pretty(&config)?);
                Ok(())
            },
            ConfigAction::Check => {
                let result = atende_config::validate_config(&config, cli.config);
                for d in &result.diagnostics {
                    println!("{}: [{}] {}: {}", d.severity, d.category, d.path, d.message);
                }
                if result.has_errors() {
                    anyhow::bail!(
                        "configuration has {} error(s)",
                        result.count(Severity::Error)
                    );
                }
                println!("configuration OK");
                Ok(())
            },
        },
    }
}
