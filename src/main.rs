use clap::Parser;
use softlayer_subnet_inventory::cli::{usage, Cli};
use softlayer_subnet_inventory::config;
use softlayer_subnet_inventory::generate_subnets;
use softlayer_subnet_inventory::logging::init_logging;
use softlayer_subnet_inventory::output::{log_summary, write_subnets};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let Some(options) = Cli::parse().run_options() else {
        println!("{}", usage());
        return Ok(());
    };
    init_logging()?;
    log::info!("#Start main()");

    let subnets = generate_subnets(&options).await?;
    write_subnets(config::OUTPUT_FILE, &subnets)?;
    log_summary(&subnets);

    Ok(())
}
