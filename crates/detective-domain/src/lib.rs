//! Detective Quest Domain Layer
//!
//! The core of the game: what the player collects while exploring, who each
//! clue points at, and how an accusation is judged. Everything here is plain
//! in-memory data with no I/O; the only dependency is the `tracing` facade.
//!
//! ## Key Concepts
//!
//! - **Clue**: a piece of evidence, identified by its exact text
//! - **Clue Set**: the sorted, duplicate-free notebook of collected clues
//! - **Suspect Index**: a fixed-bucket hash table from clue to suspect
//! - **Verdict**: an accusation stands once enough collected clues match
//! - **Mansion / Investigation**: the binary tree of rooms and a walk through it
//!
//! ## Flow
//!
//! An [`Investigation`] walks the [`Mansion`] and feeds every clue it finds
//! into a [`ClueSet`]. When exploration ends, the [`VerdictEngine`] reads the
//! clue set and the [`SuspectIndex`] to judge the accused name.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod clue;
pub mod clue_set;
pub mod investigation;
pub mod mansion;
pub mod suspect_index;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use case::{Case, SUSPECT_TABLE};
pub use clue::Clue;
pub use clue_set::ClueSet;
pub use investigation::{Investigation, Step, Visit};
pub use mansion::{Direction, Mansion, MansionBuilder, MansionError, Room, RoomId};
pub use suspect_index::{Association, SuspectIndex};
pub use traits::{ClueSink, SuspectLookup};
pub use verdict::{Accusation, Verdict, VerdictEngine, ACCUSATION_THRESHOLD};
