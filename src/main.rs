#![allow(clippy::doc_markdown)]

mod cli;
mod tables;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, crate_version};
use geotogether::core::time_period::look_back;
use itertools::Itertools;
use tracing::info;

use crate::{
    cli::{Args, Command},
    tables::{build_live_table, build_usage_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let mut client = args.connection.connect().await?;

    match args.command {
        Command::Live => {
            let usage = client.get_live_usage().await?;
            if usage.is_empty() {
                println!("No live power data available.");
            } else {
                println!("{}", build_live_table(&usage));
            }
        }
        Command::Periodic(args) => {
            let periodic = client.get_periodic_usage().await?;
            let usage =
                periodic.iter().filter_map(|periodic| periodic.get(args.period)).collect_vec();
            if usage.is_empty() {
                println!("No periodic energy data available.");
            } else {
                let label = args.period.friendly_label(0, Local::now().date_naive());
                println!("{}", build_usage_table(&label, usage));
            }
        }
        Command::Historic(args) => {
            let today = Local::now().date_naive();
            let usage = client.get_historic_usage_on(args.period, args.offset, today).await?;
            if usage.is_empty() {
                println!("No historic energy data available.");
            } else {
                // The client looks back whatever the sign, the label has to follow.
                let offset = look_back(args.offset);
                let label = args.period.resolve(offset, today).map_or_else(
                    || args.period.to_string(),
                    |range| args.period.friendly_label(offset, range.start),
                );
                println!("{}", build_usage_table(&label, &usage));
            }
        }
    }

    info!("done!");
    Ok(())
}
