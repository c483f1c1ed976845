//! Cycling through a ranked candidate list across repeated invocations.

use crate::collect::CandidateList;
use std::str::FromStr;

/// Which way repeated invocations move through the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleDirection {
    /// Advance to the next (lower-ranked) candidate.
    #[default]
    Next,
    /// Step back to the previous (higher-ranked) candidate.
    Previous,
}

impl CycleDirection {
    /// Parse a direction name. `"previous"` selects [`CycleDirection::Previous`]; every other
    /// value, recognized or not, means [`CycleDirection::Next`].
    pub fn from_name(name: &str) -> Self {
        if name == "previous" {
            Self::Previous
        } else {
            Self::Next
        }
    }

    /// Canonical name of the direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }

    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Self::Next => (index + 1) % len,
            Self::Previous => (index + len - 1) % len,
        }
    }
}

impl FromStr for CycleDirection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Completion state carried between invocations of the completion command.
///
/// The state is owned by the caller (one per view or editing session). It is replaced
/// whenever the prefix changes and advanced while the user keeps cycling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleState {
    candidates: CandidateList,
    previous_completion: Option<String>,
}

impl CycleState {
    /// Create an empty state (nothing collected yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh cycle over `candidates`.
    pub fn with_candidates(candidates: CandidateList) -> Self {
        Self {
            candidates,
            previous_completion: None,
        }
    }

    /// The ranked candidates of the active cycle.
    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// The completion inserted by the last invocation, if the cycle has started.
    pub fn previous_completion(&self) -> Option<&str> {
        self.previous_completion.as_deref()
    }

    /// Returns `true` if an invocation for `prefix` continues this cycle.
    ///
    /// After a completion is applied the word before the caret is the inserted candidate, so
    /// the cycle continues exactly when the freshly extracted prefix equals it.
    pub fn continues_with(&self, prefix: &str) -> bool {
        self.previous_completion.as_deref() == Some(prefix)
    }

    /// Drop all candidates and the cycle position.
    pub fn reset(&mut self) {
        self.candidates = CandidateList::new();
        self.previous_completion = None;
    }

    /// Choose the next completion in `direction` and remember it.
    ///
    /// The first call after a reset returns the top-ranked candidate regardless of direction.
    /// Afterwards the position moves by one and wraps around both ends. If the remembered
    /// completion is no longer in the list the cycle restarts at the top. Returns `None` when
    /// there are no candidates.
    pub fn advance(&mut self, direction: CycleDirection) -> Option<String> {
        let len = self.candidates.len();
        if len == 0 {
            return None;
        }

        let index = match self
            .previous_completion
            .as_deref()
            .and_then(|prev| self.candidates.position(prev))
        {
            Some(prev) => direction.step(prev, len),
            None => 0,
        };

        let chosen = self.candidates.get(index)?.to_string();
        self.previous_completion = Some(chosen.clone());
        Some(chosen)
    }
}
