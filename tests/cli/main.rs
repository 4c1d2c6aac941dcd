//! CLI tests for namecat commands, run against a small fixture catalog

mod support;

mod classify;
mod duplicates;
mod list;
mod logging;
mod phonetic;
mod similar;
