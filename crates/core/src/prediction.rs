//! Condition scoring.
//!
//! Each submitted symptom votes once for every distinct condition its table entry names.
//! The highest vote count wins. When several conditions tie for the top:
//!
//! - with at least three symptoms and a top count of two or more, only the first-seen
//!   tied condition is reported and the others are dropped from the message;
//! - otherwise every tied condition is listed in first-seen order.
//!
//! The first rule discards equally scored alternatives. It is kept so results match the
//! existing predictor output.

use crate::constants::{
    LIKELY_PREFIX, NO_SYMPTOMS_MESSAGE, POSSIBLE_PREFIX, STRONG_MATCH_MIN_COUNT,
    STRONG_MATCH_MIN_SYMPTOMS, UNKNOWN_CONDITION_MESSAGE,
};
use crate::{ConditionTally, SymptomConditionTable, SymptomSet};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "conditions", rename_all = "snake_case")]
pub enum PredictionResult {
    /// Prediction was requested with no symptoms.
    NoSymptoms,
    /// None of the symptoms are in the table.
    Unknown,
    /// A single condition stands out.
    Likely(String),
    /// Several conditions are equally likely.
    Possible(Vec<String>),
}

impl std::fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionResult::NoSymptoms => f.write_str(NO_SYMPTOMS_MESSAGE),
            PredictionResult::Unknown => f.write_str(UNKNOWN_CONDITION_MESSAGE),
            PredictionResult::Likely(name) => write!(f, "{LIKELY_PREFIX}{name}"),
            PredictionResult::Possible(names) => {
                write!(f, "{POSSIBLE_PREFIX}{}", names.join(", "))
            }
        }
    }
}

/// Counts how many submitted symptoms name each condition.
pub fn tally(symptoms: &SymptomSet, table: &SymptomConditionTable) -> ConditionTally {
    let mut tally = ConditionTally::new();

    for symptom in symptoms.iter() {
        let Some(conditions) = table.conditions_for(symptom) else {
            tracing::debug!("symptom not in table: {symptom}");
            continue;
        };

        let mut counted: HashSet<&str> = HashSet::with_capacity(conditions.len());
        for condition in conditions {
            if counted.insert(condition.as_str()) {
                tally.increment(condition);
            }
        }
    }

    tally
}

/// Suggests the most plausible condition(s) for the given symptoms.
pub fn predict(symptoms: &SymptomSet, table: &SymptomConditionTable) -> PredictionResult {
    if symptoms.is_empty() {
        return PredictionResult::NoSymptoms;
    }

    let tally = tally(symptoms, table);
    let Some(max_count) = tally.max_count() else {
        return PredictionResult::Unknown;
    };

    let mut top = tally.top_conditions();
    let strong_match =
        symptoms.len() >= STRONG_MATCH_MIN_SYMPTOMS && max_count >= STRONG_MATCH_MIN_COUNT;

    tracing::debug!(
        "tallied {} conditions, max count {max_count}, {} at the top",
        tally.len(),
        top.len()
    );

    if top.len() == 1 || strong_match {
        PredictionResult::Likely(top.swap_remove(0))
    } else {
        PredictionResult::Possible(top)
    }
}
