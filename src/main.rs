//! Atlas CLI entry point.

use clap::Parser;

use atlas::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = atlas::cli::run(cli).await {
        atlas::cli::handle_error(err, json);
    }
}
