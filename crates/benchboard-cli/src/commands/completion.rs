// Dweve Benchboard - Benchmark Results Dashboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation - Tab completion for various shells

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Generate a shell completion script for `cmd` to stdout.
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), CliError> {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
    Ok(())
}

/// Shell-specific instructions for installing completions.
///
/// # Errors
///
/// Returns `Err` if the shell is not supported.
pub fn print_installation_instructions(shell: &str) -> Result<String, CliError> {
    let instructions = match shell.to_lowercase().as_str() {
        "bash" => {
            "# Add to ~/.bashrc:\n\
             eval \"$(benchboard completion bash)\"\n\
             \n\
             # Or install system-wide:\n\
             benchboard completion bash > /etc/bash_completion.d/benchboard"
        }
        "zsh" => {
            "# Add to ~/.zshrc (before compinit):\n\
             eval \"$(benchboard completion zsh)\"\n\
             \n\
             # Or write to a directory on $fpath:\n\
             benchboard completion zsh > \"${fpath[1]}/_benchboard\""
        }
        "fish" => {
            "# Install for the current user:\n\
             benchboard completion fish > ~/.config/fish/completions/benchboard.fish"
        }
        "powershell" | "pwsh" => {
            "# Add to your PowerShell profile ($PROFILE):\n\
             benchboard completion powershell | Out-String | Invoke-Expression"
        }
        "elvish" => {
            "# Add to ~/.config/elvish/rc.elv:\n\
             eval (benchboard completion elvish | slurp)"
        }
        _ => return Err(CliError::UnsupportedShell(shell.to_string())),
    };
    Ok(instructions.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_for_known_shells() {
        for shell in ["bash", "zsh", "fish", "powershell", "pwsh", "elvish", "BASH"] {
            let text = print_installation_instructions(shell).unwrap();
            assert!(text.contains("benchboard completion"), "{}", shell);
        }
    }

    #[test]
    fn test_unknown_shell() {
        assert!(matches!(
            print_installation_instructions("tcsh"),
            Err(CliError::UnsupportedShell(s)) if s == "tcsh"
        ));
    }
}
