use anyhow::{Context, Result};
use clap::Parser;
use pabotscope::{cli::Cli, cli::USAGE, report::Analysis};
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let Some(log_path) = args.log.as_deref() else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    let config = args.scope_config();
    let analysis = Analysis::from_path(log_path, config)
        .with_context(|| format!("Failed to analyse {}", log_path.display()))?;

    let output = analysis.render(args.format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
