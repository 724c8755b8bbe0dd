use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use tree_tool::convert::{TreeFormat, convert};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file
    #[arg(short = 'i', long = "input", value_name = "INPUT_FILE")]
    input: PathBuf,

    /// Format of the input file
    #[arg(long = "from", value_enum)]
    from: TreeFormat,

    /// Output file
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_FILE")]
    output: PathBuf,

    /// Format of the output file
    #[arg(long = "to", value_enum)]
    to: TreeFormat,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args = Cli::parse();

    convert(args.input, args.from, args.output, args.to)
}
