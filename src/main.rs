extern crate env_logger;
extern crate failure;
extern crate greatcircle;

use std::io::{self, Write};

use failure::Error;

use greatcircle::report::pairwise_reports;
use greatcircle::samples::sample_locations;

fn main() -> Result<(), Error> {
    env_logger::init();

    let locations = sample_locations();
    let reports = pairwise_reports(&locations);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        write!(out, "{}", report)?;
    }

    Ok(())
}
