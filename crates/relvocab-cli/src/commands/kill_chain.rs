//! Kill-chain command implementation.

use crate::cli::KillChainArgs;
use crate::error::Result;
use crate::output::Formatter;
use relvocab_domain::has_kill_chain_phase;

/// Execute the kill-chain command.
pub fn execute_kill_chain(args: KillChainArgs, formatter: &Formatter) -> Result<()> {
    let kill_chain = has_kill_chain_phase(&args.verb);
    println!("{}", formatter.format_kill_chain(&args.verb, kill_chain)?);
    Ok(())
}
