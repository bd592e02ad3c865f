//! Trait definitions for the seams between exploration and judgement
//!
//! The exploration side only ever pushes clue events into a [`ClueSink`];
//! the verdict side only ever asks a [`SuspectLookup`] who a clue points at.

/// Receiver of "clue found in room" events
///
/// Implemented by [`crate::ClueSet`]
pub trait ClueSink {
    /// Record a clue; returns `true` if it had not been recorded before
    fn record_clue(&mut self, clue: &str) -> bool;
}

/// Read-only clue → suspect association
///
/// Implemented by [`crate::SuspectIndex`]
pub trait SuspectLookup {
    /// The suspect a clue implicates, or `None` if it implicates nobody
    fn suspect_for(&self, clue: &str) -> Option<&str>;
}

impl<T: ClueSink + ?Sized> ClueSink for &mut T {
    fn record_clue(&mut self, clue: &str) -> bool {
        (**self).record_clue(clue)
    }
}

impl<T: SuspectLookup + ?Sized> SuspectLookup for &T {
    fn suspect_for(&self, clue: &str) -> Option<&str> {
        (**self).suspect_for(clue)
    }
}
