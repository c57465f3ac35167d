//! Prints the JSON schema of `config.toml` for editor integration.

use anyhow::{Context, Result};
use std::io::{self, Write};

fn main() -> Result<()> {
    let schema = shapeboard::Config::json_schema();
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &schema).context("Failed to serialize schema")?;
    writeln!(stdout)?;
    Ok(())
}
