//! Constants used throughout the medware core crate.
//!
//! User-facing messages live here so the session, the binaries and the tests all agree on
//! the exact wording.

/// Result text when a prediction is requested with no symptoms.
pub const NO_SYMPTOMS_MESSAGE: &str = "No symptoms provided";

/// Result text when none of the symptoms appear in the table.
pub const UNKNOWN_CONDITION_MESSAGE: &str = "Unknown condition. Please consult a doctor.";

/// Prefix for a single-condition suggestion.
pub const LIKELY_PREFIX: &str = "Based on your symptoms, it might be: ";

/// Prefix for a list of equally likely conditions.
pub const POSSIBLE_PREFIX: &str = "Possible conditions include: ";

/// Minimum number of submitted symptoms for a tied result to collapse to its first condition.
pub const STRONG_MATCH_MIN_SYMPTOMS: usize = 3;

/// Minimum top tally for a tied result to collapse to its first condition.
pub const STRONG_MATCH_MIN_COUNT: u32 = 2;

/// Embedded default symptom table.
pub const EMBEDDED_TABLE_YAML: &str = include_str!("../assets/symptom_conditions.yaml");

pub const NOTICE_SYMPTOM_ADDED: &str = "Symptom added successfully";
pub const NOTICE_SYMPTOM_EMPTY: &str = "Please enter a symptom";
pub const NOTICE_SYMPTOM_DUPLICATE: &str = "This symptom is already in the list";
pub const NOTICE_SYMPTOM_REMOVED: &str = "Symptom removed";
pub const NOTICE_PREDICTION_COMPLETE: &str = "Prediction complete";
pub const NOTICE_SYMPTOMS_CLEARED: &str = "All symptoms cleared";
