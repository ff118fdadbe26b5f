use std::process::exit;

use clap::Parser;
use rolodex_store::{cli::command::Cli, logging, prelude::run_app};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run_app(cli).await {
        eprintln!("{e}");
        exit(1);
    }
}
