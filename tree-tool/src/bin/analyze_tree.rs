use std::path::PathBuf;

use bintree::Value;
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use tree_tool::convert::{TreeFormat, read_tree};
use tree_tool::report::TreeReport;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file
    #[arg(short = 'i', long = "input", value_name = "INPUT_FILE")]
    input: PathBuf,

    /// Format of the input file
    #[arg(short = 'f', long = "format", value_enum, default_value = "serialized")]
    format: TreeFormat,

    /// Value to look up in the tree. May be repeated.
    #[arg(short = 's', long = "search", value_name = "VALUE", allow_negative_numbers = true)]
    search: Vec<Value>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args = Cli::parse();

    let tree = read_tree(&args.input, args.format).wrap_err("Could not load tree.")?;
    let report = TreeReport::new(&tree, &args.search);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }

    Ok(())
}
