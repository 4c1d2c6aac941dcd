//! CLI commands for namecat

pub mod classify;
pub mod dispatch;
pub mod duplicates;
pub mod list;
pub mod phonetic;
pub mod similar;
pub mod syllables;

use namecat_core::error::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
