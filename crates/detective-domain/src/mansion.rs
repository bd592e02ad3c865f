//! Mansion module - the fixed binary tree of rooms
//!
//! Rooms live in an arena and refer to their children by [`RoomId`]. The
//! tree is assembled with [`MansionBuilder`], which refuses anything that is
//! not a single rooted binary tree.

use crate::clue::Clue;
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

/// Handle of a room inside its [`Mansion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(usize);

impl RoomId {
    /// Position of the room in the arena
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Which way to leave a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-hand passage
    Left,
    /// Right-hand passage
    Right,
}

impl Direction {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room of the mansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    clue: Option<Clue>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    /// Room name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clue hidden in the room, if any
    pub fn clue(&self) -> Option<&Clue> {
        self.clue.as_ref()
    }

    /// Room reached by leaving in `direction`
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// True if there is no way forward
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Errors raised while assembling a mansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MansionError {
    /// Room id does not belong to this builder
    UnknownRoom(RoomId),
    /// Room name is empty
    EmptyName,
    /// Two rooms share a name
    DuplicateName(String),
    /// The passage is already connected
    SlotTaken {
        /// Room whose passage is taken
        room: String,
        /// Passage that is taken
        direction: Direction,
    },
    /// Room is already reachable from another room
    MultipleParents(String),
    /// Connection would loop back to the room itself or an ancestor
    Cycle(String),
    /// Room cannot be reached from the entrance
    Unreachable(String),
}

impl fmt::Display for MansionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MansionError::UnknownRoom(id) => write!(f, "unknown room #{}", id.index()),
            MansionError::EmptyName => write!(f, "room name cannot be empty"),
            MansionError::DuplicateName(name) => write!(f, "room '{}' is defined twice", name),
            MansionError::SlotTaken { room, direction } => {
                write!(f, "room '{}' already has a {} passage", room, direction)
            }
            MansionError::MultipleParents(name) => {
                write!(f, "room '{}' is entered from more than one room", name)
            }
            MansionError::Cycle(name) => {
                write!(f, "connecting room '{}' would create a loop", name)
            }
            MansionError::Unreachable(name) => {
                write!(f, "room '{}' cannot be reached from the entrance", name)
            }
        }
    }
}

impl std::error::Error for MansionError {}

/// Incremental constructor for a [`Mansion`]
///
/// # Examples
///
/// ```
/// use detective_domain::{Direction, MansionBuilder};
///
/// let mut builder = MansionBuilder::new();
/// let hall = builder.room("Hall", Some("pegada de lama"));
/// let study = builder.room("Study", None);
/// builder.connect(hall, Direction::Left, study).unwrap();
///
/// let mansion = builder.build(hall).unwrap();
/// assert_eq!(mansion.len(), 2);
/// assert_eq!(mansion.child(hall, Direction::Left), Some(study));
/// ```
#[derive(Debug, Default)]
pub struct MansionBuilder {
    rooms: Vec<Room>,
    parents: Vec<Option<RoomId>>,
}

impl MansionBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room; an empty clue is treated as no clue
    pub fn room(&mut self, name: impl Into<String>, clue: Option<&str>) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            name: name.into(),
            clue: clue.and_then(Clue::new),
            left: None,
            right: None,
        });
        self.parents.push(None);
        id
    }

    /// Open a passage from `parent` to `child`
    pub fn connect(
        &mut self,
        parent: RoomId,
        direction: Direction,
        child: RoomId,
    ) -> Result<&mut Self, MansionError> {
        self.check(parent)?;
        self.check(child)?;

        let child_name = self.rooms[child.0].name.clone();
        if self.parents[child.0].is_some() {
            return Err(MansionError::MultipleParents(child_name));
        }
        if self.rooms[parent.0].exit(direction).is_some() {
            return Err(MansionError::SlotTaken {
                room: self.rooms[parent.0].name.clone(),
                direction,
            });
        }

        // Walking up from the parent must never meet the child.
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(MansionError::Cycle(child_name));
            }
            ancestor = self.parents[id.0];
        }

        let room = &mut self.rooms[parent.0];
        match direction {
            Direction::Left => room.left = Some(child),
            Direction::Right => room.right = Some(child),
        }
        self.parents[child.0] = Some(parent);
        Ok(self)
    }

    /// Finish the mansion with `entrance` as its root
    pub fn build(self, entrance: RoomId) -> Result<Mansion, MansionError> {
        self.check(entrance)?;

        let mut names = HashSet::new();
        for room in &self.rooms {
            if room.name.is_empty() {
                return Err(MansionError::EmptyName);
            }
            if !names.insert(room.name.as_str()) {
                return Err(MansionError::DuplicateName(room.name.clone()));
            }
        }

        let mansion = Mansion {
            rooms: self.rooms,
            entrance,
        };

        let mut reached = vec![false; mansion.rooms.len()];
        for (id, _) in mansion.walk() {
            reached[id.0] = true;
        }
        if let Some(pos) = reached.iter().position(|r| !r) {
            return Err(MansionError::Unreachable(mansion.rooms[pos].name.clone()));
        }

        Ok(mansion)
    }

    fn check(&self, id: RoomId) -> Result<(), MansionError> {
        if id.0 < self.rooms.len() {
            Ok(())
        } else {
            Err(MansionError::UnknownRoom(id))
        }
    }
}

/// The map of the mansion: a binary tree of rooms rooted at the entrance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mansion {
    rooms: Vec<Room>,
    entrance: RoomId,
}

impl Mansion {
    /// Room the investigation starts in
    pub fn entrance(&self) -> RoomId {
        self.entrance
    }

    /// Room by id, if it belongs to this mansion
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Child of `id` in `direction`
    pub fn child(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.get(id).and_then(|room| room.exit(direction))
    }

    /// Find a room by exact name
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.name == name).map(RoomId)
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false for a built mansion
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of rooms holding a clue
    pub fn clue_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.clue.is_some()).count()
    }

    /// Depth-first walk from the entrance (left before right), yielding
    /// each room with its depth
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            mansion: self,
            stack: vec![(self.entrance, 0)],
        }
    }
}

impl Index<RoomId> for Mansion {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }
}

/// Pre-order traversal of a [`Mansion`]
pub struct Walk<'a> {
    mansion: &'a Mansion,
    stack: Vec<(RoomId, usize)>,
}

impl Iterator for Walk<'_> {
    type Item = (RoomId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let room = &self.mansion.rooms[id.0];
        if let Some(right) = room.right {
            self.stack.push((right, depth + 1));
        }
        if let Some(left) = room.left {
            self.stack.push((left, depth + 1));
        }
        Some((id, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rooms() -> (MansionBuilder, RoomId, RoomId, RoomId) {
        let mut builder = MansionBuilder::new();
        let hall = builder.room("Hall", Some("pegada de lama"));
        let study = builder.room("Study", None);
        let kitchen = builder.room("Kitchen", Some("faca com impressao parcial"));
        (builder, hall, study, kitchen)
    }

    #[test]
    fn test_build_simple_tree() {
        let (mut builder, hall, study, kitchen) = three_rooms();
        builder.connect(hall, Direction::Left, study).unwrap();
        builder.connect(hall, Direction::Right, kitchen).unwrap();
        let mansion = builder.build(hall).unwrap();

        assert_eq!(mansion.entrance(), hall);
        assert_eq!(mansion.len(), 3);
        assert_eq!(mansion.clue_count(), 2);
        assert_eq!(mansion[hall].name(), "Hall");
        assert_eq!(mansion.child(hall, Direction::Right), Some(kitchen));
        assert!(mansion[study].is_dead_end());
        assert_eq!(mansion.find("Kitchen"), Some(kitchen));
        assert_eq!(mansion.find("kitchen"), None);
    }

    #[test]
    fn test_walk_is_preorder_left_first() {
        let (mut builder, hall, study, kitchen) = three_rooms();
        builder.connect(hall, Direction::Left, study).unwrap();
        builder.connect(hall, Direction::Right, kitchen).unwrap();
        let mansion = builder.build(hall).unwrap();

        let order: Vec<(RoomId, usize)> = mansion.walk().collect();
        assert_eq!(order, [(hall, 0), (study, 1), (kitchen, 1)]);
    }

    #[test]
    fn test_empty_clue_means_no_clue() {
        let mut builder = MansionBuilder::new();
        let hall = builder.room("Hall", Some(""));
        let mansion = builder.build(hall).unwrap();
        assert!(mansion[hall].clue().is_none());
    }

    #[test]
    fn test_slot_taken() {
        let (mut builder, hall, study, kitchen) = three_rooms();
        builder.connect(hall, Direction::Left, study).unwrap();
        let err = builder.connect(hall, Direction::Left, kitchen).unwrap_err();
        assert!(matches!(err, MansionError::SlotTaken { direction: Direction::Left, .. }));
    }

    #[test]
    fn test_multiple_parents_rejected() {
        let (mut builder, hall, study, kitchen) = three_rooms();
        builder.connect(hall, Direction::Left, kitchen).unwrap();
        let err = builder.connect(study, Direction::Left, kitchen).unwrap_err();
        assert_eq!(err, MansionError::MultipleParents("Kitchen".to_string()));
    }

    #[test]
    fn test_cycle_rejected() {
        let (mut builder, hall, study, _) = three_rooms();
        builder.connect(hall, Direction::Left, study).unwrap();
        let err = builder.connect(study, Direction::Right, hall);
        // hall has no parent yet, so the ancestor walk is what catches this
        assert_eq!(err.unwrap_err(), MansionError::Cycle("Hall".to_string()));

        let err = builder.connect(study, Direction::Left, study).unwrap_err();
        assert!(matches!(err, MansionError::MultipleParents(_) | MansionError::Cycle(_)));
    }

    #[test]
    fn test_unreachable_room_rejected() {
        let (mut builder, hall, study, _) = three_rooms();
        builder.connect(hall, Direction::Left, study).unwrap();
        let err = builder.build(hall).unwrap_err();
        assert_eq!(err, MansionError::Unreachable("Kitchen".to_string()));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut builder = MansionBuilder::new();
        let a = builder.room("Hall", None);
        let b = builder.room("Hall", None);
        builder.connect(a, Direction::Left, b).unwrap();
        assert_eq!(
            builder.build(a).unwrap_err(),
            MansionError::DuplicateName("Hall".to_string())
        );
    }

    #[test]
    fn test_unknown_room_rejected() {
        let builder = MansionBuilder::new();
        let err = builder.build(RoomId(3)).unwrap_err();
        assert_eq!(err, MansionError::UnknownRoom(RoomId(3)));
        assert_eq!(err.to_string(), "unknown room #3");
    }
}
