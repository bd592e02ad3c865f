//! TOML case files: a mansion layout plus its suspect table.
//!
//! ```toml
//! entrance = "Hall"
//!
//! [[rooms]]
//! name = "Hall"
//! clue = "pegada de lama"
//! left = "Study"
//!
//! [[rooms]]
//! name = "Study"
//!
//! [[suspects]]
//! clue = "pegada de lama"
//! suspect = "Carlos"
//! ```

use crate::error::{CliError, Result};
use detective_domain::suspect_index::DEFAULT_BUCKET_COUNT;
use detective_domain::{
    Association, Case, Direction, MansionBuilder, MansionError, RoomId, SuspectIndex,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// On-disk description of a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    /// Name of the room the investigation starts in
    pub entrance: String,

    /// Bucket count for the suspect index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buckets: Option<usize>,

    /// Every room of the mansion
    #[serde(default)]
    pub rooms: Vec<RoomSpec>,

    /// Clue → suspect table, applied in order
    #[serde(default)]
    pub suspects: Vec<SuspectSpec>,
}

/// One room in a case file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Unique room name
    pub name: String,

    /// Clue hidden in the room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,

    /// Room reached through the left passage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,

    /// Room reached through the right passage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

/// One row of the suspect table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspectSpec {
    /// Clue text, matched exactly
    pub clue: String,

    /// Suspect the clue implicates
    pub suspect: String,
}

impl CaseFile {
    /// Read a case file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a case file from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Render as TOML text.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Describe an existing case. Rooms are listed depth-first from the
    /// entrance and suspects sorted by clue.
    pub fn from_case(case: &Case) -> Self {
        let mansion = &case.mansion;
        let name_of = |id: Option<RoomId>| id.map(|id| mansion[id].name().to_string());

        let rooms = mansion
            .walk()
            .map(|(id, _)| {
                let room = &mansion[id];
                RoomSpec {
                    name: room.name().to_string(),
                    clue: room.clue().map(|c| c.to_string()),
                    left: name_of(room.exit(Direction::Left)),
                    right: name_of(room.exit(Direction::Right)),
                }
            })
            .collect();

        let mut suspects: Vec<SuspectSpec> = case
            .suspects
            .entries()
            .map(|(clue, suspect)| SuspectSpec {
                clue: clue.to_string(),
                suspect: suspect.to_string(),
            })
            .collect();
        suspects.sort_by(|a, b| a.clue.cmp(&b.clue));

        let buckets = case.suspects.bucket_count();
        Self {
            entrance: mansion[mansion.entrance()].name().to_string(),
            buckets: (buckets != DEFAULT_BUCKET_COUNT).then_some(buckets),
            rooms,
            suspects,
        }
    }

    /// Validate the description and assemble the case.
    pub fn into_case(self) -> Result<Case> {
        let mut builder = MansionBuilder::new();
        let mut ids: HashMap<&str, RoomId> = HashMap::new();

        for room in &self.rooms {
            let id = builder.room(room.name.as_str(), room.clue.as_deref());
            if ids.insert(room.name.as_str(), id).is_some() {
                return Err(MansionError::DuplicateName(room.name.clone()).into());
            }
        }

        let lookup = |name: &str, from: &str, direction: Direction| {
            ids.get(name).copied().ok_or_else(|| {
                CliError::Case(format!(
                    "room '{}' leads {} to unknown room '{}'",
                    from, direction, name
                ))
            })
        };

        for room in &self.rooms {
            let parent = ids[room.name.as_str()];
            let exits = [(Direction::Left, &room.left), (Direction::Right, &room.right)];
            for (direction, target) in exits {
                if let Some(target) = target {
                    let child = lookup(target, &room.name, direction)?;
                    builder.connect(parent, direction, child)?;
                }
            }
        }

        let entrance = ids
            .get(self.entrance.as_str())
            .copied()
            .ok_or_else(|| CliError::Case(format!("entrance '{}' is not a room", self.entrance)))?;
        let mansion = builder.build(entrance)?;

        let mut suspects = SuspectIndex::with_buckets(self.buckets.unwrap_or(DEFAULT_BUCKET_COUNT));
        for row in &self.suspects {
            match suspects.associate(&row.clue, &row.suspect) {
                Association::Ignored => tracing::warn!(
                    clue = %row.clue,
                    suspect = %row.suspect,
                    "empty suspect table row skipped"
                ),
                Association::Replaced => tracing::warn!(
                    clue = %row.clue,
                    suspect = %row.suspect,
                    "clue listed twice; last suspect kept"
                ),
                Association::Created => {}
            }
        }

        tracing::info!(rooms = mansion.len(), suspects = suspects.len(), "case loaded");
        Ok(Case::new(mansion, suspects))
    }
}

/// Load the case to play: a case file if one is given, otherwise the
/// built-in case.
pub fn load_case(path: Option<&Path>) -> Result<Case> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading case file");
            CaseFile::load(path)?.into_case()
        }
        None => Ok(Case::builtin()),
    }
}
