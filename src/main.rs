use clap::Parser;

use crate::opts::Opts;
use crate::prelude::*;

mod logging;
mod math;
mod opts;
mod prelude;
mod quartet;
mod report;

fn main() -> Result {
    let opts = Opts::parse();
    logging::init()?;
    report::run(&opts)
}
