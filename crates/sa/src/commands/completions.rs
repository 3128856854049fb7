//! Shell completions command implementation.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell as ClapShell};

use crate::cli::{Cli, Shell};

const BIN_NAME: &str = "sa";

impl From<&Shell> for ClapShell {
    fn from(shell: &Shell) -> Self {
        match shell {
            Shell::Bash => ClapShell::Bash,
            Shell::Zsh => ClapShell::Zsh,
            Shell::Fish => ClapShell::Fish,
            Shell::Powershell => ClapShell::PowerShell,
        }
    }
}

/// Writes completions for `shell` to `out`.
pub fn write_completions(shell: &Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(ClapShell::from(shell), &mut cmd, BIN_NAME, out);
}

/// Generate shell completions for the given shell and write to stdout.
///
/// # Errors
///
/// Returns an error if flushing stdout fails.
pub fn execute(shell: &Shell) -> io::Result<()> {
    let mut stdout = io::stdout();
    write_completions(shell, &mut stdout);
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(&shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_shell_mapping() {
        assert!(matches!(ClapShell::from(&Shell::Bash), ClapShell::Bash));
        assert!(matches!(ClapShell::from(&Shell::Zsh), ClapShell::Zsh));
        assert!(matches!(ClapShell::from(&Shell::Fish), ClapShell::Fish));
        assert!(matches!(
            ClapShell::from(&Shell::Powershell),
            ClapShell::PowerShell
        ));
    }

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = render(Shell::Bash);
        assert!(script.contains("sa"));
        assert!(script.contains("query"));
        assert!(script.contains("serve"));
    }

    #[test]
    fn test_fish_completions_use_bin_name() {
        assert!(render(Shell::Fish).contains("complete -c sa"));
    }
}
