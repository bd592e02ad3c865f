//! Suspects command implementation.

use crate::error::Result;
use crate::output::Formatter;
use detective_domain::Case;

/// Execute the suspects command.
pub fn execute_suspects(case: &Case, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_suspects(&case.suspects)?);
    Ok(())
}
