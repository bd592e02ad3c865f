//! Export command implementation.

use crate::casefile::CaseFile;
use crate::cli::ExportArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use detective_domain::Case;
use std::fs;

/// Execute the export command.
pub fn execute_export(args: ExportArgs, case: &Case, formatter: &Formatter) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        )));
    }

    let contents = CaseFile::from_case(case).to_toml()?;
    if let Some(parent) = args.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.path, contents)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Case written to {} ({} rooms, {} suspect entries)",
            args.path.display(),
            case.mansion.len(),
            case.suspects.len()
        ))
    );
    Ok(())
}
