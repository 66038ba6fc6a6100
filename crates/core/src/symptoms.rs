//! The user-curated list of symptoms.

use crate::SymptomError;
use medware_types::{normalise, SymptomText};

/// Whether a symptom set has anything in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    NonEmpty,
}

/// Ordered, duplicate-free list of normalised symptoms.
///
/// Entries keep the order they were added in for display. Prediction does not depend on
/// that order except for how tied conditions are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSet {
    symptoms: Vec<SymptomText>,
}

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a symptom after normalising it.
    ///
    /// # Errors
    ///
    /// - `SymptomError::Empty` if the input is empty or whitespace-only.
    /// - `SymptomError::Duplicate` if the normalised input is already present.
    ///
    /// The set is unchanged on error.
    pub fn add(&mut self, candidate: &str) -> Result<&SymptomText, SymptomError> {
        let symptom = SymptomText::new(candidate)?;
        if self.symptoms.contains(&symptom) {
            return Err(SymptomError::Duplicate(symptom.into_string()));
        }
        self.symptoms.push(symptom);
        Ok(&self.symptoms[self.symptoms.len() - 1])
    }

    /// Removes the first entry matching `candidate` after normalisation.
    ///
    /// Returns `true` if something was removed. Removing an absent symptom is a no-op.
    pub fn remove(&mut self, candidate: &str) -> bool {
        let target = normalise(candidate);
        match self.symptoms.iter().position(|s| s.as_str() == target) {
            Some(i) => {
                self.symptoms.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.symptoms.clear();
    }

    pub fn contains(&self, candidate: &str) -> bool {
        let target = normalise(candidate);
        self.symptoms.iter().any(|s| s.as_str() == target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symptoms.iter().map(SymptomText::as_str)
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn state(&self) -> SessionState {
        if self.symptoms.is_empty() {
            SessionState::Empty
        } else {
            SessionState::NonEmpty
        }
    }
}
