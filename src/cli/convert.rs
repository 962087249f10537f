//! Convert command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::convert::{convert_file, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Args)]
pub struct ConvertArgs {
    /// JSON file to write
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// CSV file to read (no header row; columns 3-5 are dialogs, options, answer)
    #[arg(short, long, value_name = "CSV", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let count = convert_file(&args.input, &args.output)?;
    println!("Converted {} problem(s) to {}", count, args.output.display());
    Ok(())
}
