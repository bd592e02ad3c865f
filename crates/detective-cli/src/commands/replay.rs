//! Replay command implementation.
//!
//! Plays a fixed move string through the same investigation the REPL uses,
//! then optionally judges an accusation.

use crate::cli::ReplayArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::{accusation_json, Formatter};
use crate::repl::{accused_name, parse_key, ExploreInput};
use detective_domain::{
    Accusation, Case, ClueSet, Direction, Investigation, RoomId, Step, VerdictEngine, Visit,
};

/// Everything that happened during a replay.
#[derive(Debug)]
pub struct ReplayReport {
    /// Visit to the entrance
    pub opening: Visit,
    /// One entry per move, blocked moves included
    pub steps: Vec<Step>,
    /// Room the player ended in
    pub final_room: RoomId,
    /// Clues collected
    pub clues: ClueSet,
}

impl ReplayReport {
    /// Number of moves that hit a wall
    pub fn blocked(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Blocked { .. }))
            .count()
    }
}

/// Parse a move string such as `"edd"` or `"e, d, d"`.
///
/// Whitespace and commas are ignored and everything after the first stop
/// key is dropped.
pub fn parse_moves(moves: &str) -> Result<Vec<Direction>> {
    let mut directions = Vec::new();
    for key in moves.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        match parse_key(key) {
            ExploreInput::Move(direction) => directions.push(direction),
            ExploreInput::Stop => break,
            _ => {
                return Err(CliError::InvalidInput(format!(
                    "unknown move '{}' (use 'e', 'd' or 's')",
                    key
                )))
            }
        }
    }
    Ok(directions)
}

/// Walk the mansion along `moves`.
pub fn replay(case: &Case, moves: &[Direction]) -> ReplayReport {
    let (mut investigation, opening) = Investigation::start(&case.mansion);
    let steps: Vec<Step> = moves.iter().map(|d| investigation.step(*d)).collect();
    let final_room = investigation.current();

    ReplayReport {
        opening,
        steps,
        final_room,
        clues: investigation.finish(),
    }
}

/// Judge the `--accuse` name against the replayed clues.
///
/// `None` when no name was given or the name is blank.
pub fn judge_accusation(
    case: &Case,
    report: &ReplayReport,
    accuse: Option<&str>,
) -> Option<Accusation> {
    accuse
        .and_then(accused_name)
        .map(|name| VerdictEngine::new().judge(&report.clues, &case.suspects, name))
}

/// Execute the replay command.
pub fn execute_replay(args: ReplayArgs, case: &Case, formatter: &Formatter) -> Result<()> {
    let moves = parse_moves(&args.moves)?;
    let report = replay(case, &moves);
    let accusation = judge_accusation(case, &report, args.accuse.as_deref());

    tracing::info!(moves = moves.len(), blocked = report.blocked(), "replay finished");

    match formatter.format() {
        OutputFormat::Json => {
            let taken: Vec<&str> = report
                .steps
                .iter()
                .zip(&moves)
                .filter(|(step, _)| matches!(step, Step::Moved(_)))
                .map(|(_, direction)| direction.as_str())
                .collect();
            let value = serde_json::json!({
                "final_room": case.mansion[report.final_room].name(),
                "path": taken,
                "blocked": report.blocked(),
                "clues": report.clues.in_order().collect::<Vec<_>>(),
                "accusation": accusation.as_ref().map(accusation_json),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Quiet => {
            println!("{}", formatter.format_clues(&report.clues)?);
            if let Some(accusation) = &accusation {
                println!("{}", formatter.format_accusation(accusation)?);
            }
        }
        OutputFormat::Table => {
            println!("{}", formatter.describe_visit(&case.mansion, &report.opening));
            for step in &report.steps {
                match step {
                    Step::Moved(visit) => {
                        println!("{}", formatter.describe_visit(&case.mansion, visit))
                    }
                    Step::Blocked { direction, .. } => {
                        println!("{}", formatter.blocked(*direction))
                    }
                }
            }

            println!();
            println!("--- Collected clues (alphabetical) ---");
            println!("{}", formatter.format_clues(&report.clues)?);

            match (&accusation, &args.accuse) {
                (Some(accusation), _) => {
                    println!();
                    println!("{}", formatter.format_accusation(accusation)?);
                }
                (None, Some(_)) => {
                    println!("{}", formatter.warning("No name given; accusation aborted."))
                }
                (None, None) => {}
            }
        }
    }

    Ok(())
}
