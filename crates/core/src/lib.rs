//! # Medware Core
//!
//! Condition suggestion engine for the Medware predictor.
//!
//! This crate contains the pure engine:
//! - the static symptom to condition table (embedded or loaded from YAML)
//! - the user-curated symptom set with case-insensitive de-duplication
//! - tally-and-max-count scoring that turns symptoms into a suggestion
//! - an interactive session wrapper that front ends drive
//!
//! **No presentation concerns**: terminal I/O and argument parsing belong in the binaries.
//! The suggestions are a fixed lookup, not medical advice.

pub mod config;
pub mod constants;
pub mod error;
pub mod prediction;
pub mod session;
pub mod symptoms;
pub mod table;
pub mod tally;

pub use config::CoreConfig;
pub use error::{PredictorError, PredictorResult, SymptomError};
pub use medware_types::{normalise, SymptomText, TextError};
pub use prediction::{predict, tally, PredictionResult};
pub use session::{Notice, NoticeLevel, PredictionRecord, PredictorSession};
pub use symptoms::{SessionState, SymptomSet};
pub use table::{SymptomConditionTable, TableEntry};
pub use tally::ConditionTally;
