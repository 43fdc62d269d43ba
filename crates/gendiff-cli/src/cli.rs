use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gendiff",
    about = "Compares two configuration files and shows a difference.",
    version,
)]
pub struct Cli {
    pub filepath1: PathBuf,
    pub filepath2: PathBuf,

    /// Output format: stylish, plain or json [default: stylish]
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// TOML file with default settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}
