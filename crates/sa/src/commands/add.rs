//! Add command implementation.
//!
//! Analyzes a string and stores it in the catalog.

use string_store_rs::StringManager;

use super::{CommandContext, Result};
use crate::output::helpers::truncate_id;
use crate::output::{format_record_details_table, format_record_json};

/// Options for the add command.
#[derive(Debug)]
pub struct AddOptions {
    /// The string to analyze.
    pub value: String,
}

/// Executes the add command.
///
/// # Errors
///
/// Returns an error if the value is empty, already stored, or the catalog
/// cannot be saved.
pub async fn execute(
    ctx: &CommandContext,
    opts: &AddOptions,
    manager: &mut StringManager,
) -> Result<()> {
    let record = manager.create_async(&opts.value).await?;

    if ctx.json_output {
        println!("{}", format_record_json(&record)?);
    } else if !ctx.quiet {
        if ctx.verbose {
            print!("{}", format_record_details_table(&record, ctx.use_colors));
        } else {
            println!("Added: {} ({})", record.value, truncate_id(&record.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{quiet_ctx, seeded_manager};
    use crate::commands::CommandError;
    use string_store_rs::ManagerError;

    #[tokio::test]
    async fn test_add_stores_value() {
        let (mut manager, _dir) = seeded_manager(&[]);
        let opts = AddOptions {
            value: "racecar".to_string(),
        };

        execute(&quiet_ctx(), &opts, &mut manager).await.unwrap();
        assert!(manager.get("racecar").unwrap().properties.is_palindrome);
    }

    #[tokio::test]
    async fn test_add_duplicate_fails() {
        let (mut manager, _dir) = seeded_manager(&["twice"]);
        let opts = AddOptions {
            value: "twice".to_string(),
        };

        let err = execute(&quiet_ctx(), &opts, &mut manager).await.unwrap_err();
        assert!(matches!(
            err,
            CommandError::Manager(ManagerError::AlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_add_blank_value_fails() {
        let (mut manager, _dir) = seeded_manager(&[]);
        let opts = AddOptions {
            value: "  ".to_string(),
        };

        let err = execute(&quiet_ctx(), &opts, &mut manager).await.unwrap_err();
        assert!(matches!(
            err,
            CommandError::Manager(ManagerError::InvalidValue { .. })
        ));
        assert!(manager.catalog().is_empty());
    }
}
