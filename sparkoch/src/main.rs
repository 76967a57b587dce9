//! Main entry point for the sparkoch binary

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use shared::{component_error, logging, Component};
use sparkoch::Args;

fn main() -> anyhow::Result<()> {
    // A missing .env file is not an error
    let _ = dotenv::dotenv();

    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = args.to_config();
    config.validate().context("Invalid configuration")?;
    logging::log_startup(
        Component::Cli,
        &format!(
            "sparkoch (policy: {}, page size: {}, storage: {})",
            config.parse_policy,
            config.page_size,
            config.storage_dir.display()
        ),
    );

    let source = sparkoch::item_source(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = sparkoch::run(&config, &args.command, source.as_ref(), &mut out) {
        component_error!(Component::Cli, command = ?args.command, error = %e, "Command failed");
        return Err(e);
    }
    out.flush()?;

    logging::log_shutdown(Component::Cli, "command finished");
    Ok(())
}
