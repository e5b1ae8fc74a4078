use anyhow::{Context, Result};

use crate::Commands;

mod catalogue;
mod compare;
mod dispatch;
mod render;
mod report;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    dispatch::handle_command(command)
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}
