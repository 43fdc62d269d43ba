use gendiff::GenDiffConfig;
use tracing::debug;

use crate::cli::Cli;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let output = render(&cli)?;
    println!("{output}");
    Ok(())
}

/// Settings precedence: `--format` flag, then the config file, then defaults.
fn resolve_config(cli: &Cli) -> anyhow::Result<GenDiffConfig> {
    let config = match &cli.config {
        Some(path) => GenDiffConfig::from_file(path)?,
        None => GenDiffConfig::default(),
    };

    let config = match &cli.format {
        Some(format) => config.with_format(format.as_str()),
        None => config,
    };

    debug!(format = %config.format, base_dir = ?config.base_dir, "configuration resolved");
    Ok(config)
}

fn render(cli: &Cli) -> anyhow::Result<String> {
    let config = resolve_config(cli)?;
    let output = gendiff::gen_diff_with_config(&cli.filepath1, &cli.filepath2, &config)?;
    Ok(output)
}
