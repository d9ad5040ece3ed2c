use chrono::Local;
use clap::Parser;
use deathtable::{
    config::{Cli, Config},
    info_time,
    process::process_site,
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let config = Config::from_cli(Cli::parse()).await?;
    process_site(&config).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
