mod config;
mod error;
mod guidelines;
mod model;
mod naming;
mod router;
mod server;
mod templates;
mod validate;

use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::AppError;
use mcp_common::error::CommonError;
use server::PageGuidelinesServer;

#[derive(Parser, Debug)]
#[clap(
    name = "page-guidelines",
    version = env!("CARGO_PKG_VERSION"),
    about = "MCP server for the Jingle frontend page guidelines: style guide, templates, checks and naming."
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve MCP on stdio, or on TCP when MCP_TCP_LISTEN_ADDR is set (default)
    Serve,
    /// List the published tools
    Tools,
    /// Invoke one tool and print its text result
    Call {
        /// Tool name, e.g. "generate_page_template"
        tool: String,
        /// Tool arguments as a JSON object, e.g. '{"type":"api","name":"task"}'
        #[clap(long)]
        args: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
    })?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Tools => {
            for tool in PageGuidelinesServer::tool_summaries() {
                println!("{}\t{}", tool.name, tool.description);
            }
            Ok(())
        }
        Command::Call { tool, args } => {
            let args = match args {
                Some(raw) => serde_json::from_str::<Value>(&raw)
                    .map_err(|e| AppError::Common(CommonError::InvalidArguments(e)))?,
                None => Value::Null,
            };
            let text = router::dispatch(&tool, args, &config)?;
            println!("{text}");
            Ok(())
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!(
        tcp = config.tcp_listen_addr.is_some(),
        strict_category = config.strict_category,
        "starting page-guidelines MCP server"
    );

    let server = PageGuidelinesServer::new(config.clone());

    if let Some(addr) = config.tcp_listen_addr.as_deref() {
        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            tracing::error!(error = %e, listen_addr = %addr, "failed to bind TCP listener");
        })?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        info!("MCP server ready, serving on stdio");
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
