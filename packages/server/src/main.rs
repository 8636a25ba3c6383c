#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! SafeT API server binary.
//!
//! Reads `BIND_ADDR`, `PORT`, `STATIC_DIR`, and `SESSION_COOKIE_SECURE` from
//! the environment; command-line flags override them.

use std::path::PathBuf;

use clap::Parser;
use safet_server::ServerConfig;

/// SafeT location safety API server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Prompt for bind address and port before starting.
    #[arg(long)]
    interactive: bool,

    /// Address to bind to.
    #[arg(long)]
    bind_addr: Option<String>,

    /// Port to listen on.
    #[arg(long)]
    port: Option<u16>,

    /// Directory of built frontend files to serve at `/`.
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let args = Args::parse();

    let mut config = ServerConfig::from_env();
    if let Some(bind_addr) = args.bind_addr {
        config.bind_addr = bind_addr;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    if args.interactive {
        safet_server::interactive::run(config).await
    } else {
        safet_server::run_server(config).await
    }
}
