// File: src/logging.rs
// Logger bootstrap for embedding binaries and tests. Library code only
// ever emits through the `log` macros; whoever owns `main` picks one of
// these.
use anyhow::Result;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Log to the terminal, stderr for warnings and up.
pub fn init_terminal(level: LevelFilter) -> Result<()> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// Log to a file, truncating whatever was there.
pub fn init_file(level: LevelFilter, path: &Path) -> Result<()> {
    WriteLogger::init(level, Config::default(), File::create(path)?)?;
    Ok(())
}
