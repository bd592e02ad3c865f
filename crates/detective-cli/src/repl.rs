//! Interactive exploration (Read-Eval-Print Loop).

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use detective_domain::{Case, ClueSet, Direction, Investigation, Step, VerdictEngine};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// What the player asked for at the exploration prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreInput {
    /// Take a passage
    Move(Direction),
    /// Stop exploring and move on to the accusation
    Stop,
    /// Show the clues collected so far
    Clues,
    /// Show the mansion map
    Map,
    /// Show the command list
    Help,
    /// Anything else
    Unknown,
}

/// Interpret a single-key move: `e` left, `d` right, `s` stop, in any case.
pub fn parse_key(key: char) -> ExploreInput {
    match key.to_ascii_lowercase() {
        'e' => ExploreInput::Move(Direction::Left),
        'd' => ExploreInput::Move(Direction::Right),
        's' => ExploreInput::Stop,
        _ => ExploreInput::Unknown,
    }
}

/// Interpret a line typed at the exploration prompt.
///
/// A few words are recognised as commands; otherwise only the first
/// non-blank character counts, so "esquerda" and "direita" work too.
pub fn parse_exploration_input(line: &str) -> ExploreInput {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "clues" | "pistas" => return ExploreInput::Clues,
        "map" | "mapa" => return ExploreInput::Map,
        "help" | "?" => return ExploreInput::Help,
        _ => {}
    }

    line.chars().next().map(parse_key).unwrap_or(ExploreInput::Unknown)
}

/// Name typed at the accusation prompt, or `None` to abort the accusation.
pub fn accused_name(line: &str) -> Option<&str> {
    let name = line.trim();
    (!name.is_empty()).then_some(name)
}

/// Run an interactive playthrough.
pub fn run_repl(case: &Case, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Detective Quest - explore the mansion and collect clues"));
    println!("Move with 'e' (left) and 'd' (right), stop with 's'. Type 'help' for more.");
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mansion = &case.mansion;
    let (mut investigation, opening) = Investigation::start(mansion);
    println!("{}", formatter.describe_visit(mansion, &opening));

    loop {
        println!("{}", formatter.exits(mansion, investigation.current()));

        match editor.readline("Choice> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_exploration_input(line) {
                    ExploreInput::Move(direction) => match investigation.step(direction) {
                        Step::Moved(visit) => {
                            println!();
                            println!("{}", formatter.describe_visit(mansion, &visit));
                        }
                        Step::Blocked { direction, .. } => {
                            println!("{}", formatter.blocked(direction));
                        }
                    },
                    ExploreInput::Stop => {
                        println!("{}", formatter.info("Exploration ended by the player."));
                        break;
                    }
                    ExploreInput::Clues => {
                        println!("{}", formatter.format_clues(investigation.clues())?)
                    }
                    ExploreInput::Map => println!("{}", formatter.format_map(case)?),
                    ExploreInput::Help => print_help(formatter),
                    ExploreInput::Unknown => {
                        eprintln!("{}", formatter.error("Invalid input. Use 'e', 'd' or 's'."));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 's' to stop exploring"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                editor.save_history(&history_path).ok();
                return Err(err.into());
            }
        }
    }

    tracing::info!(
        rooms_visited = investigation.rooms_visited(),
        moves = investigation.path().len(),
        "exploration finished"
    );
    let clues = investigation.finish();

    println!();
    println!("--- Collected clues (alphabetical) ---");
    println!("{}", formatter.format_clues(&clues)?);
    println!();

    let outcome = accuse(&mut editor, case, &clues, formatter);
    editor.save_history(&history_path).ok();
    outcome?;

    println!();
    println!("{}", formatter.info("Thanks for playing! Good investigating."));
    Ok(())
}

fn accuse(
    editor: &mut DefaultEditor,
    case: &Case,
    clues: &ClueSet,
    formatter: &Formatter,
) -> Result<()> {
    println!("Suspects: {}", case.suspects.suspects().join(", "));
    println!("Who is the culprit? (leave blank to give up)");

    let line = match editor.readline("Accuse> ") {
        Ok(line) => line,
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => String::new(),
        Err(err) => return Err(err.into()),
    };

    match accused_name(&line) {
        Some(name) => {
            let accusation = VerdictEngine::new().judge(clues, &case.suspects, name);
            println!("{}", formatter.format_accusation(&accusation)?);
        }
        None => println!("{}", formatter.warning("No name given; accusation aborted.")),
    }
    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  e, esquerda           - Take the left passage");
    println!("  d, direita            - Take the right passage");
    println!("  s, sair               - Stop exploring and make an accusation");
    println!("  clues, pistas         - Show clues collected so far");
    println!("  map, mapa             - Show the mansion map");
    println!("  help, ?               - Show this help");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_character_decides() {
        assert_eq!(parse_exploration_input("e"), ExploreInput::Move(Direction::Left));
        assert_eq!(parse_exploration_input("  Direita\n"), ExploreInput::Move(Direction::Right));
        assert_eq!(parse_exploration_input("S"), ExploreInput::Stop);
        assert_eq!(parse_exploration_input("sair"), ExploreInput::Stop);
    }

    #[test]
    fn test_words_take_precedence() {
        assert_eq!(parse_exploration_input("Clues"), ExploreInput::Clues);
        assert_eq!(parse_exploration_input("mapa"), ExploreInput::Map);
        assert_eq!(parse_exploration_input("?"), ExploreInput::Help);
    }

    #[test]
    fn test_only_first_character_counts_for_moves() {
        // "exit" starts with 'e', so it is a left turn
        assert_eq!(parse_exploration_input("exit"), ExploreInput::Move(Direction::Left));
        assert_eq!(parse_exploration_input("Esquerda"), ExploreInput::Move(Direction::Left));
        assert_eq!(parse_exploration_input("quit"), ExploreInput::Unknown);
    }

    #[test]
    fn test_only_e_d_s_are_keys() {
        for key in ['l', 'r', 'q', 'L', 'R', 'Q'] {
            assert_eq!(parse_key(key), ExploreInput::Unknown);
        }
        assert_eq!(parse_key('E'), ExploreInput::Move(Direction::Left));
        assert_eq!(parse_key('D'), ExploreInput::Move(Direction::Right));
        assert_eq!(parse_key('S'), ExploreInput::Stop);
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(parse_exploration_input("x"), ExploreInput::Unknown);
        assert_eq!(parse_exploration_input(""), ExploreInput::Unknown);
        assert_eq!(parse_exploration_input("   "), ExploreInput::Unknown);
    }

    #[test]
    fn test_accused_name_trims_and_aborts_on_blank() {
        assert_eq!(accused_name("  Carlos \n"), Some("Carlos"));
        assert_eq!(accused_name(""), None);
        assert_eq!(accused_name(" \t "), None);
    }

    #[test]
    fn test_accused_name_keeps_case() {
        assert_eq!(accused_name("carlos"), Some("carlos"));
    }
}
