//! Output formatting for the CLI.

use crate::casefile::CaseFile;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use detective_domain::{Accusation, Case, ClueSet, Direction, Mansion, RoomId, SuspectIndex, Visit};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Key the player types to take a passage.
pub fn direction_key(direction: Direction) -> char {
    match direction {
        Direction::Left => 'e',
        Direction::Right => 'd',
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the collected clues in alphabetical order.
    pub fn format_clues(&self, clues: &ClueSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let sorted: Vec<&str> = clues.in_order().collect();
                Ok(serde_json::to_string_pretty(&sorted)?)
            }
            OutputFormat::Quiet => Ok(clues.in_order().collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if clues.is_empty() {
                    return Ok(self.colorize("No clues were collected.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Clue"]);
                for (n, clue) in clues.in_order().enumerate() {
                    builder.push_record([(n + 1).to_string(), clue.to_string()]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the suspect table, grouped by suspect.
    pub fn format_suspects(&self, index: &SuspectIndex) -> Result<String> {
        let mut rows: Vec<(&str, &str)> = index.entries().collect();
        rows.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(b.0)));

        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|(clue, suspect)| serde_json::json!({ "clue": clue, "suspect": suspect }))
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(index.suspects().join("\n")),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No suspects on file.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Suspect", "Clue"]);
                for (clue, suspect) in rows {
                    builder.push_record([suspect, clue]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the outcome of an accusation.
    pub fn format_accusation(&self, accusation: &Accusation) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&accusation_json(accusation))?),
            OutputFormat::Quiet => Ok(accusation.verdict.as_str().to_string()),
            OutputFormat::Table => {
                let headline = if accusation.verdict.is_guilty() {
                    self.success(&format!(
                        "Accusation stands: {} clue(s) point to {} (needed {}).",
                        accusation.count(),
                        accusation.accused,
                        accusation.threshold
                    ))
                } else {
                    self.warning(&format!(
                        "Insufficient evidence against {}: {} of {} required clue(s).",
                        accusation.accused,
                        accusation.count(),
                        accusation.threshold
                    ))
                };

                if accusation.evidence.is_empty() {
                    return Ok(headline);
                }

                let mut builder = Builder::default();
                builder.push_record(["Evidence"]);
                for clue in &accusation.evidence {
                    builder.push_record([clue.as_str()]);
                }
                Ok(format!("{}\n{}", headline, self.render(builder)))
            }
        }
    }

    /// Format the mansion map.
    pub fn format_map(&self, case: &Case) -> Result<String> {
        let mansion = &case.mansion;
        match self.format {
            OutputFormat::Json => {
                Ok(serde_json::to_string_pretty(&CaseFile::from_case(case).rooms)?)
            }
            OutputFormat::Quiet => Ok(mansion
                .walk()
                .map(|(id, _)| mansion[id].name())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut lines = Vec::with_capacity(mansion.len());
                let mut stack: Vec<(RoomId, usize, Option<Direction>)> =
                    vec![(mansion.entrance(), 0, None)];

                while let Some((id, depth, via)) = stack.pop() {
                    let room = &mansion[id];
                    let label = via.map(|d| format!("{}: ", direction_key(d))).unwrap_or_default();
                    let clue = room
                        .clue()
                        .map(|c| format!("  [{}]", self.colorize(c.as_str(), "cyan")))
                        .unwrap_or_default();
                    lines.push(format!("{}{}{}{}", "  ".repeat(depth), label, room.name(), clue));

                    for direction in [Direction::Right, Direction::Left] {
                        if let Some(child) = room.exit(direction) {
                            stack.push((child, depth + 1, Some(direction)));
                        }
                    }
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Describe entering a room.
    pub fn describe_visit(&self, mansion: &Mansion, visit: &Visit) -> String {
        let name = mansion[visit.room()].name();
        let here = format!("You are in: {}", self.colorize(name, "magenta"));
        let detail = match visit {
            Visit::ClueFound {
                clue,
                newly_recorded: true,
                ..
            } => self.success(&format!("You found a clue here! -> \"{}\"", clue)),
            Visit::ClueFound { clue, .. } => {
                self.info(&format!("You found \"{}\" again; it is already in your notebook.", clue))
            }
            Visit::NothingNew { .. } => self.info("No new clue in this room."),
        };
        format!("{}\n{}", here, detail)
    }

    /// Describe the ways out of a room.
    pub fn exits(&self, mansion: &Mansion, id: RoomId) -> String {
        let room = &mansion[id];
        let mut parts = Vec::with_capacity(3);
        for (direction, word) in [(Direction::Left, "Left"), (Direction::Right, "Right")] {
            let key = direction_key(direction);
            match room.exit(direction) {
                Some(next) => parts.push(format!("[{}] {} ({})", key, word, mansion[next].name())),
                None => parts.push(format!("[{}] {} (not available)", key, word)),
            }
        }
        parts.push("[s] Stop and review clues".to_string());
        format!("Options: {}", parts.join("  "))
    }

    /// Describe a move into a wall.
    pub fn blocked(&self, direction: Direction) -> String {
        self.warning(&format!("There is no path to the {}. Choose another option.", direction))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON shape of an accusation.
pub fn accusation_json(accusation: &Accusation) -> serde_json::Value {
    serde_json::json!({
        "accused": accusation.accused,
        "count": accusation.count(),
        "threshold": accusation.threshold,
        "verdict": accusation.verdict.as_str(),
        "evidence": accusation.evidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use detective_domain::VerdictEngine;

    fn plain(format: OutputFormat) -> Formatter {
        Formatter::new(format, false)
    }

    fn carlos_clues() -> ClueSet {
        ["pegada de lama", "faca com impressao parcial"].into_iter().collect()
    }

    #[test]
    fn test_clues_table() {
        let output = plain(OutputFormat::Table).format_clues(&carlos_clues()).unwrap();
        assert!(output.contains("Clue"));
        let faca = output.find("faca com impressao parcial").unwrap();
        let pegada = output.find("pegada de lama").unwrap();
        assert!(faca < pegada);
    }

    #[test]
    fn test_empty_clues() {
        let output = plain(OutputFormat::Table).format_clues(&ClueSet::new()).unwrap();
        assert_eq!(output, "No clues were collected.");
    }

    #[test]
    fn test_clues_json_and_quiet() {
        let json = plain(OutputFormat::Json).format_clues(&carlos_clues()).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ["faca com impressao parcial", "pegada de lama"]);

        let quiet = plain(OutputFormat::Quiet).format_clues(&carlos_clues()).unwrap();
        assert_eq!(quiet, "faca com impressao parcial\npegada de lama");
    }

    #[test]
    fn test_suspects_quiet_lists_names() {
        let case = Case::builtin();
        let output = plain(OutputFormat::Quiet).format_suspects(&case.suspects).unwrap();
        assert_eq!(output, "Ana\nBeatriz\nCarlos\nDaniel");
    }

    #[test]
    fn test_accusation_formats() {
        let case = Case::builtin();
        let accusation = VerdictEngine::new().judge(&carlos_clues(), &case.suspects, "Carlos");

        let table = plain(OutputFormat::Table).format_accusation(&accusation).unwrap();
        assert!(table.starts_with("✓ Accusation stands"));
        assert!(table.contains("Evidence"));

        let quiet = plain(OutputFormat::Quiet).format_accusation(&accusation).unwrap();
        assert_eq!(quiet, "guilty");

        let json = plain(OutputFormat::Json).format_accusation(&accusation).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["verdict"], "guilty");
    }

    #[test]
    fn test_failed_accusation_headline() {
        let case = Case::builtin();
        let accusation = VerdictEngine::new().judge(&ClueSet::new(), &case.suspects, "Ana");
        let table = plain(OutputFormat::Table).format_accusation(&accusation).unwrap();
        assert_eq!(table, "⚠ Insufficient evidence against Ana: 0 of 2 required clue(s).");
    }

    #[test]
    fn test_map_table_is_indented_tree() {
        let case = Case::builtin();
        let output = plain(OutputFormat::Table).format_map(&case).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Hall de Entrada  [pegada de lama]");
        assert_eq!(lines[1], "  e: Sala de Estar  [lenço rasgado com monograma]");
        assert!(lines.contains(&"  d: Corredor"));
        assert_eq!(lines.len(), case.mansion.len());
    }

    #[test]
    fn test_exits_line() {
        let case = Case::builtin();
        let library = case.mansion.find("Biblioteca").unwrap();
        let output = plain(OutputFormat::Table).exits(&case.mansion, library);
        assert!(output.contains("[e] Left (not available)"));
        assert!(output.contains("[s] Stop"));
    }

    #[test]
    fn test_colorize_disabled() {
        let msg = plain(OutputFormat::Table).success("test");
        assert_eq!(msg, "✓ test");
    }
}
