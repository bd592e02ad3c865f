//! Investigation - one playthrough of the mansion
//!
//! Tracks where the player stands and which rooms have already been searched.
//! Entering a room for the first time collects its clue automatically and
//! pushes it into the clue sink; a room's clue is never collected twice.

use crate::clue::Clue;
use crate::clue_set::ClueSet;
use crate::mansion::{Direction, Mansion, RoomId};
use crate::traits::ClueSink;

/// What happened on entering a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// The room held a clue that is now collected
    ClueFound {
        /// Room entered
        room: RoomId,
        /// The clue
        clue: Clue,
        /// False if the same clue text had already been recorded elsewhere
        newly_recorded: bool,
    },
    /// No clue, or the room was already searched
    NothingNew {
        /// Room entered
        room: RoomId,
    },
}

impl Visit {
    /// Room that was entered
    pub fn room(&self) -> RoomId {
        match self {
            Visit::ClueFound { room, .. } | Visit::NothingNew { room } => *room,
        }
    }
}

/// Result of trying to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The player moved and entered a room
    Moved(Visit),
    /// There is no passage that way; nothing changed
    Blocked {
        /// Room the player is still in
        from: RoomId,
        /// Direction that was tried
        direction: Direction,
    },
}

/// A single playthrough
///
/// The sink defaults to a [`ClueSet`], which is what the verdict phase needs.
///
/// # Examples
///
/// ```
/// use detective_domain::{Case, Direction, Investigation, Step};
///
/// let case = Case::builtin();
/// let (mut investigation, _) = Investigation::start(&case.mansion);
/// assert!(matches!(investigation.step(Direction::Left), Step::Moved(_)));
///
/// let clues = investigation.finish();
/// assert!(clues.contains("pegada de lama"));
/// ```
#[derive(Debug)]
pub struct Investigation<'m, S: ClueSink = ClueSet> {
    mansion: &'m Mansion,
    current: RoomId,
    visited: Vec<bool>,
    path: Vec<Direction>,
    sink: S,
}

impl<'m> Investigation<'m, ClueSet> {
    /// Start at the entrance with an empty clue set
    pub fn start(mansion: &'m Mansion) -> (Self, Visit) {
        Self::with_sink(mansion, ClueSet::new())
    }
}

impl<'m, S: ClueSink> Investigation<'m, S> {
    /// Start at the entrance, sending clues to `sink`
    pub fn with_sink(mansion: &'m Mansion, sink: S) -> (Self, Visit) {
        let mut investigation = Self {
            mansion,
            current: mansion.entrance(),
            visited: vec![false; mansion.len()],
            path: Vec::new(),
            sink,
        };
        let visit = investigation.enter(mansion.entrance());
        (investigation, visit)
    }

    /// Try to leave the current room in `direction`
    pub fn step(&mut self, direction: Direction) -> Step {
        match self.mansion.child(self.current, direction) {
            Some(next) => {
                tracing::trace!(
                    from = self.current.index(),
                    to = next.index(),
                    %direction,
                    "moved"
                );
                self.path.push(direction);
                Step::Moved(self.enter(next))
            }
            None => Step::Blocked {
                from: self.current,
                direction,
            },
        }
    }

    /// Room the player is in
    pub fn current(&self) -> RoomId {
        self.current
    }

    /// Mansion being explored
    pub fn mansion(&self) -> &'m Mansion {
        self.mansion
    }

    /// Clues collected so far
    pub fn clues(&self) -> &S {
        &self.sink
    }

    /// Directions taken, in order
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Number of distinct rooms entered, including the entrance
    pub fn rooms_visited(&self) -> usize {
        self.visited.iter().filter(|v| **v).count()
    }

    /// End the exploration and hand over the collected clues
    pub fn finish(self) -> S {
        self.sink
    }

    fn enter(&mut self, id: RoomId) -> Visit {
        self.current = id;
        let first_time = !std::mem::replace(&mut self.visited[id.index()], true);

        match self.mansion[id].clue() {
            Some(clue) if first_time => {
                let newly_recorded = self.sink.record_clue(clue.as_str());
                Visit::ClueFound {
                    room: id,
                    clue: clue.clone(),
                    newly_recorded,
                }
            }
            _ => Visit::NothingNew { room: id },
        }
    }
}
