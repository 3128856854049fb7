//! Delete command implementation.
//!
//! Removes one or more strings from the catalog. Deleting several at once
//! asks for confirmation unless `--force` is given. Missing values are
//! reported and skipped; a storage failure stops the run.

use string_store_rs::{ManagerError, StringManager};

use super::{confirm_bulk_operation, CommandContext, ConfirmResult, Result};
use crate::output::{format_deleted_json, format_deleted_table};

/// Options for the delete command.
#[derive(Debug)]
pub struct DeleteOptions {
    /// Values to delete, matched exactly.
    pub values: Vec<String>,
    /// Skip confirmation prompt.
    pub force: bool,
}

/// Outcome of a delete run.
#[derive(Debug, Default)]
pub struct DeleteResult {
    /// Values that were removed.
    pub deleted: Vec<String>,
    /// Values that could not be removed, with the reason.
    pub failed: Vec<(String, String)>,
}

/// Executes the delete command.
///
/// # Errors
///
/// Returns the lookup error if no value could be deleted, and a store error
/// as soon as a save fails.
pub async fn execute(
    ctx: &CommandContext,
    opts: &DeleteOptions,
    manager: &mut StringManager,
) -> Result<()> {
    match confirm_bulk_operation("delete", &opts.values, opts.force, ctx.quiet)? {
        ConfirmResult::Confirmed => {}
        ConfirmResult::Aborted => {
            if !ctx.quiet {
                eprintln!("Aborted.");
            }
            return Ok(());
        }
    }

    let mut result = DeleteResult::default();
    let mut first_error: Option<ManagerError> = None;

    for value in &opts.values {
        match manager.delete_async(value).await {
            Ok(record) => result.deleted.push(record.value),
            Err(e @ ManagerError::Store(_)) => return Err(e.into()),
            Err(e) => {
                result.failed.push((value.clone(), e.to_string()));
                first_error.get_or_insert(e);
            }
        }
    }

    if result.deleted.is_empty() {
        if let Some(e) = first_error {
            return Err(e.into());
        }
    }

    if ctx.json_output {
        println!("{}", format_deleted_json(&result)?);
    } else if !ctx.quiet {
        print!("{}", format_deleted_table(&result, ctx.use_colors));
        if ctx.verbose && opts.values.len() > 1 {
            println!(
                "\n{} deleted, {} failed",
                result.deleted.len(),
                result.failed.len()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{quiet_ctx, seeded_manager};
    use crate::commands::CommandError;

    fn opts(values: &[&str]) -> DeleteOptions {
        DeleteOptions {
            values: values.iter().map(|v| v.to_string()).collect(),
            force: true,
        }
    }

    #[tokio::test]
    async fn test_delete_single() {
        let (mut manager, _dir) = seeded_manager(&["a", "b"]);
        execute(&quiet_ctx(), &opts(&["a"]), &mut manager)
            .await
            .unwrap();
        assert!(manager.get("a").is_err());
        assert!(manager.get("b").is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_single_fails() {
        let (mut manager, _dir) = seeded_manager(&["a"]);
        let err = execute(&quiet_ctx(), &opts(&["ghost"]), &mut manager)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CommandError::Manager(ManagerError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_partial_success() {
        let (mut manager, _dir) = seeded_manager(&["a", "b"]);
        execute(&quiet_ctx(), &opts(&["a", "ghost", "b"]), &mut manager)
            .await
            .unwrap();
        assert!(manager.catalog().is_empty());
    }
}
