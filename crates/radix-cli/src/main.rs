//! radix
//!
//! Command-line front-end for a Radix node's JSON-RPC API. Each subcommand
//! makes exactly one call and prints what the node returned.
//!
//! Usage:
//!   radix [--node-url <url>] [--pretty] network-id
//!   radix token-balances       --address <addr>
//!   radix transaction-history  --address <addr> [--n <size>] [--cursor <cursor>]
//!   radix transfer-tokens      --from <addr> --to <addr> --amount <amt> --token-id <rri>
//!   radix submit-transaction   --public-key <hex> --blob <hex> --signature <hex>
//!
//! The node URL falls back to `RADIX_NODE_URL`, then the built-in default.

use clap::Parser;
use tracing::debug;

use radix_client::RadixClient;

mod cli;
use cli::{dispatch, render, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("warn,radix_cli=info,radix_client=info")
                }),
        )
        .init();

    let args = Args::parse();
    let client = RadixClient::new(args.node_url.as_deref());
    debug!(node = client.node_url(), command = ?args.command, "dispatching");

    let value = dispatch(args.command, &client).await?;
    println!("{}", render(&value, args.pretty));
    Ok(())
}
