use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tokio::net::TcpListener;

/// HTTP API for the Sudoku engine.
#[derive(Debug, Parser)]
#[command(name = "sudoku-api", version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let addr = SocketAddr::new(args.host, args.port);
    let listener = TcpListener::bind(addr).await?;
    log::info!("listening on {addr}");

    axum::serve(listener, sudoku_api::router()).await
}
