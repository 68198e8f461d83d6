use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use omnibioai_sdk::{ClientConfig, ClientOptions, OmniClient};
use serde_json::Value;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "omnibioai")]
#[command(version, about = "OmniBioAI object registry client", long_about = None)]
struct Cli {
    #[command(flatten)]
    registry: RegistryOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RegistryOpts {
    /// Registry base URL (default: $OMNIBIOAI_BASE_URL or http://127.0.0.1:8001)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Bearer token (default: $OMNIBIOAI_TOKEN or `dev`)
    #[arg(long, global = true, value_name = "TOKEN")]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Query registry objects
    #[command(subcommand)]
    Objects(ObjectsCommand),

    /// Show the resolved client configuration
    Config,
}

#[derive(Subcommand)]
enum ObjectsCommand {
    /// List objects
    List,

    /// Fetch one object by identifier
    Get {
        /// Object identifier
        #[arg(value_name = "ID")]
        id: String,
    },
}

fn main() -> Result<()> {
    // A missing .env is fine; real env vars still apply.
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let config = resolve_config(&cli.registry)?;
    match cli.command {
        Commands::Objects(cmd) => objects(config, cmd),
        Commands::Config => show_config(&config),
    }
}

fn resolve_config(opts: &RegistryOpts) -> Result<ClientConfig> {
    let options = ClientOptions {
        base_url: opts.base_url.clone(),
        token: opts.token.clone(),
        timeout: opts.timeout.map(Duration::from_secs),
    };
    ClientConfig::from_env(options).context("invalid registry configuration")
}

fn objects(config: ClientConfig, cmd: ObjectsCommand) -> Result<()> {
    let client = OmniClient::new(config).context("failed to build registry client")?;
    let rt = runtime()?;

    let out = match cmd {
        ObjectsCommand::List => {
            tracing::debug!("executing objects list");
            rt.block_on(client.objects_list())
                .context("failed to list objects")?
        }
        ObjectsCommand::Get { id } => {
            tracing::debug!(%id, "executing objects get");
            rt.block_on(client.object_get(&id))
                .with_context(|| format!("failed to get object '{id}'"))?
        }
    };
    print_json(&out)
}

fn show_config(config: &ClientConfig) -> Result<()> {
    println!("base_url: {}", config.base_url());
    println!("token:    {}", redact(config.token()));
    println!("timeout:  {}s", config.timeout().as_secs());
    Ok(())
}

fn redact(token: &str) -> String {
    let shown: String = token.chars().take(2).collect();
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{shown}****")
    }
}

fn print_json(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{text}");
    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to initialize async runtime")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_hides_short_tokens_entirely() {
        assert_eq!(redact("dev"), "****");
        assert_eq!(redact("abcdefgh"), "ab****");
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "omnibioai",
            "objects",
            "get",
            "abc",
            "--token",
            "t",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.registry.token.as_deref(), Some("t"));
        assert_eq!(cli.registry.timeout, Some(5));
        assert!(matches!(
            cli.command,
            Commands::Objects(ObjectsCommand::Get { ref id }) if id == "abc"
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let res = Cli::try_parse_from(["omnibioai", "--timeout", "0", "objects", "list"]);
        assert!(res.is_err());

        let cli = Cli::try_parse_from(["omnibioai", "--timeout", "1", "objects", "list"]).unwrap();
        assert_eq!(cli.registry.timeout, Some(1));
    }
}
