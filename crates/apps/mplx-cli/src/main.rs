//! mplx CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

use mplx_cli::{
    cli::{Cli, Commands},
    commands,
    config::{default_config_path, CliConfig},
    context::HybridContext,
    error::{CliError, CliResult},
    output::OutputFormat,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.command.is_server());

    if let Err(e) = run(cli).await {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Initialize logging on stderr. Stdout carries the MCP transport.
///
/// Servers log at info by default; one-shot commands stay quiet unless
/// `--verbose` or `RUST_LOG` is set.
fn init_logging(verbose: bool, serving: bool) {
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !(verbose || has_rust_log || serving) {
        return;
    }

    let mut filter = EnvFilter::from_default_env();
    let default_level = if verbose {
        Some("mplx=debug")
    } else if !has_rust_log {
        Some("mplx=info")
    } else {
        None
    };
    if let Some(directive) = default_level.and_then(|d| d.parse::<Directive>().ok()) {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Print a user-friendly error message with a recovery hint.
fn print_error(e: &CliError) {
    eprintln!("{}: {}", "Error".red().bold(), e);

    if let Some(hint) = e.hint() {
        eprintln!("{}: {}", "Hint".cyan(), hint);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let mut config = CliConfig::load(&config_path)?;

    // Flags override the file
    if let Some(cluster) = cli.cluster {
        config.chain.cluster = cluster;
    }
    if let Some(rpc_url) = cli.rpc_url {
        config.chain.rpc_url = Some(rpc_url);
    }

    let format: OutputFormat = cli.format.into();
    let serving = cli.command.is_server();

    // Dispatch command
    let output = match cli.command {
        // Server commands
        Commands::HybridServer { connect_timeout } => {
            commands::hybrid_server(config, connect_timeout).await?
        }

        Commands::DocsServer {
            token,
            connect_timeout,
        } => commands::docs_server(config, token, connect_timeout).await?,

        // Inspection commands
        Commands::Recipe { collection } => {
            let ctx = HybridContext::from_config(&config)?;
            commands::recipe(&ctx, format, &collection).await?
        }

        Commands::Escrow { collection, escrow } => {
            let ctx = HybridContext::from_config(&config)?;
            commands::escrow(&ctx, format, &collection, &escrow).await?
        }

        Commands::Status { asset } => {
            let ctx = HybridContext::from_config(&config)?;
            commands::status(&ctx, format, &asset).await?
        }

        Commands::Fees { operation, amount } => {
            let ctx = HybridContext::from_config(&config)?;
            commands::fees(&ctx, format, &operation, amount).await?
        }

        Commands::Derive { collection } => {
            let ctx = HybridContext::from_config(&config)?;
            commands::derive(&ctx, format, &collection)?
        }
    };

    // Stdout belonged to the MCP transport while serving
    if serving {
        eprintln!("{}", output);
    } else if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
