//! Map command implementation.

use crate::error::Result;
use crate::output::Formatter;
use detective_domain::Case;

/// Execute the map command.
pub fn execute_map(case: &Case, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_map(case)?);
    Ok(())
}
