// Student Results - grade report from a delimited text file
//
// Usage: student-results [input] [output]

use anyhow::Result;
use coursework::{logging, StudentReportConfig, StudentResultProcessor};
use std::env;

fn main() -> Result<()> {
    logging::init();

    let config = StudentReportConfig::from_args(env::args().skip(1));
    let processor = StudentResultProcessor::new();
    println!("{}", processor.run(&config));

    Ok(())
}
