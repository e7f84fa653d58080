//! Completion command - generate shell completions

use crate::cli::args::{Cli, CompletionArgs};
use crate::error::CacheResult;
use clap::CommandFactory;
use clap_complete::generate;
use std::io;

/// Execute the completion command
pub fn execute(args: CompletionArgs) -> CacheResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
