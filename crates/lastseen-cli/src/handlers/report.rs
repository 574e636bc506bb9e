use crate::args::OutputFormat;
use crate::output;
use anyhow::Result;
use is_terminal::IsTerminal;
use lastseen_engine::{resolve_records, select_records};
use lastseen_store::Database;
use lastseen_types::SelectionCriteria;

pub fn handle(db: &Database, criteria: &SelectionCriteria, format: OutputFormat) -> Result<()> {
    let records = select_records(db, criteria)?;
    let resolved = resolve_records(db, records)?;

    // Single-user mode has its own terminal path when the directory does
    // not know the user: a message instead of a record, still exit 0.
    if let SelectionCriteria::SingleUser { user_id } = criteria
        && resolved.first().is_some_and(|r| r.profile.is_none())
    {
        println!("User {} does not exist", user_id);
        return Ok(());
    }

    match format {
        OutputFormat::Json => output::print_json(&resolved)?,
        OutputFormat::Plain => {
            output::print_plain(&resolved, std::io::stdout().is_terminal());
        }
    }

    Ok(())
}
