//! Show command implementation.
//!
//! Displays a stored string with every computed property.

use string_store_rs::StringManager;

use super::{CommandContext, Result};
use crate::output::{format_record_details_table, format_record_json};

/// Options for the show command.
#[derive(Debug)]
pub struct ShowOptions {
    /// The stored string, matched exactly.
    pub value: String,
}

/// Executes the show command.
///
/// # Errors
///
/// Returns `ManagerError::NotFound` (with a suggestion when a close match is
/// stored) if the value is not in the catalog.
pub fn execute(ctx: &CommandContext, opts: &ShowOptions, manager: &StringManager) -> Result<()> {
    let record = manager.get(&opts.value)?;

    if ctx.json_output {
        println!("{}", format_record_json(record)?);
    } else if !ctx.quiet {
        print!("{}", format_record_details_table(record, ctx.use_colors));
    }

    Ok(())
}
