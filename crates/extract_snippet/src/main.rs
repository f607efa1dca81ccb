use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use extract_snippet::{run, AppConfig, Cli};

/// Routes `log` records from the library crates to stderr.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let config: AppConfig = Cli::parse().into();
    init_logging(config.verbose);

    println!("[*] Extracting {}...", config.function_anchor);
    if let Some(trailing) = &config.trailing_anchor {
        println!("[*] Extracting {} and everything after it...", trailing);
    }

    let assembly = run(&config)?;
    println!(
        "[*] Captured {} block line(s) and {} trailing line(s)",
        assembly.block_lines, assembly.trailing_lines
    );
    println!("[*] Extracted logic to '{}'", config.output.display());
    Ok(())
}
