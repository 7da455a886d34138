mod cli;
mod core;
mod prelude;
mod quantity;
mod report;
mod store;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::Args,
    core::billing::aggregate,
    prelude::*,
    quantity::rate::KilowattHourRate,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();

    let args = Args::parse();
    info!(version = crate_version!(), "starting…");

    let tariff = args.tariff.tariff();
    ensure!(
        tariff.flat_rate >= KilowattHourRate::zero()
            && tariff.economy_rate >= KilowattHourRate::zero(),
        "tariff rates must be non-negative"
    );
    if tariff.economy_rate > tariff.flat_rate {
        warn!("the economy rate exceeds the flat rate, savings will be negative");
    }
    info!(
        flat_rate = %tariff.flat_rate,
        economy_rate = %tariff.economy_rate,
        night_window = ?tariff.night_window,
        "tariff"
    );

    let readings = store::load_readings(&args.input)?;
    let records = aggregate(&readings, &tariff);
    info!(n_records = records.len(), "aggregated");

    println!("{}", tables::build_billing_table(&records));
    report::write_records(&args.output, &records)?;

    info!("done!");
    Ok(())
}
