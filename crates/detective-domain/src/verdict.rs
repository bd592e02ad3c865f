//! Verdict engine - cross-references collected clues with the suspect index
//!
//! The engine is stateless: every call walks the clue set from scratch and
//! borrows both structures read-only.

use crate::clue_set::ClueSet;
use crate::traits::SuspectLookup;
use std::fmt;

/// Minimum number of matching clues for an accusation to stand
pub const ACCUSATION_THRESHOLD: usize = 2;

/// Outcome of an accusation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Enough collected clues implicate the accused
    Guilty,
    /// Too few collected clues implicate the accused
    InsufficientEvidence,
}

impl Verdict {
    /// Verdict for a matching-clue count against [`ACCUSATION_THRESHOLD`]
    pub fn from_count(count: usize) -> Self {
        if count >= ACCUSATION_THRESHOLD {
            Verdict::Guilty
        } else {
            Verdict::InsufficientEvidence
        }
    }

    /// True if the accusation succeeds
    pub fn is_guilty(&self) -> bool {
        matches!(self, Verdict::Guilty)
    }

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Guilty => "guilty",
            Verdict::InsufficientEvidence => "insufficient_evidence",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of judging one accusation. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accusation {
    /// Name that was accused, exactly as given
    pub accused: String,

    /// Collected clues implicating the accused, in ascending order
    pub evidence: Vec<String>,

    /// Threshold the count was compared against
    pub threshold: usize,

    /// Outcome
    pub verdict: Verdict,
}

impl Accusation {
    /// Number of matching clues
    pub fn count(&self) -> usize {
        self.evidence.len()
    }
}

/// Stateless accusation judge
#[derive(Debug, Clone, Copy, Default)]
pub struct VerdictEngine;

impl VerdictEngine {
    /// Create an engine
    pub fn new() -> Self {
        Self
    }

    /// Count collected clues whose suspect is exactly `accused`
    ///
    /// Clues unknown to the index contribute nothing. No trimming or case
    /// folding is applied, so a blank name never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use detective_domain::{ClueSet, SuspectIndex, VerdictEngine};
    ///
    /// let index = SuspectIndex::build([
    ///     ("pegada de lama", "Carlos"),
    ///     ("faca com impressao parcial", "Carlos"),
    /// ]);
    /// let clues: ClueSet = ["faca com impressao parcial", "pegada de lama"].into_iter().collect();
    ///
    /// assert_eq!(VerdictEngine::new().tally(&clues, &index, "Carlos"), 2);
    /// ```
    pub fn tally(&self, clues: &ClueSet, index: &impl SuspectLookup, accused: &str) -> usize {
        let count = self.matching(clues, index, accused).count();
        tracing::debug!(accused, count, "tally complete");
        count
    }

    /// Tally an accusation and render the verdict
    pub fn judge(&self, clues: &ClueSet, index: &impl SuspectLookup, accused: &str) -> Accusation {
        let evidence: Vec<String> = self
            .matching(clues, index, accused)
            .map(str::to_owned)
            .collect();
        let verdict = Verdict::from_count(evidence.len());

        tracing::info!(accused, count = evidence.len(), %verdict, "accusation judged");

        Accusation {
            accused: accused.to_owned(),
            evidence,
            threshold: ACCUSATION_THRESHOLD,
            verdict,
        }
    }

    fn matching<'a, L: SuspectLookup>(
        &self,
        clues: &'a ClueSet,
        index: &'a L,
        accused: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        clues
            .in_order()
            .filter(move |clue| index.suspect_for(clue) == Some(accused))
    }
}
