mod api;
mod cli;
mod fmt;
mod prelude;
mod tables;

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(args.log_level)
        .init();
    info!(version = crate_version!(), "starting…");

    args.run().await?;

    info!("done!");
    Ok(())
}
