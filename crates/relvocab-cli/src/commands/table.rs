//! Table command implementation.

use crate::cli::TableArgs;
use crate::error::Result;
use crate::output::Formatter;
use relvocab_domain::RelationsTable;

/// Execute the table command.
pub fn execute_table(args: TableArgs, formatter: &Formatter) -> Result<()> {
    let table = if args.observable {
        RelationsTable::observables()
    } else {
        RelationsTable::generic()
    };
    println!("{}", formatter.format_relations_table(table)?);
    Ok(())
}
