use clap::Parser;
use eta::cli::Cli;
use eta::cli::output::OutputFormatter;
use eta::log::{LogConfig, init_logger};
use eta::{EtaFormatter, log_debug};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logger(LogConfig {
        log_level: cli.log_level,
        plain: false,
    })?;

    let config = cli.formatter_config()?;
    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    log_debug!("Using formatter config {:?}", config);
    let formatter = EtaFormatter::new(config)?;

    let width = cli
        .seconds
        .iter()
        .map(|s| s.to_string().len())
        .max()
        .unwrap_or(0);

    for &seconds in &cli.seconds {
        let result = formatter.string_from_seconds(seconds);
        let line = OutputFormatter::eta(result.as_deref(), &cli.placeholder);
        if cli.verbose {
            println!(
                "{}",
                OutputFormatter::key_value(&seconds.to_string(), &line, width)
            );
        } else {
            println!("{line}");
        }
    }

    Ok(())
}
