//! Interactive predictor session.
//!
//! A session owns one symptom set and the most recent prediction. Every operation returns
//! a [`Notice`] carrying the message a front end shows the user.

use crate::constants::{
    NOTICE_PREDICTION_COMPLETE, NOTICE_SYMPTOMS_CLEARED, NOTICE_SYMPTOM_ADDED,
    NOTICE_SYMPTOM_DUPLICATE, NOTICE_SYMPTOM_EMPTY, NOTICE_SYMPTOM_REMOVED,
};
use crate::{
    predict, PredictionResult, PredictorResult, SessionState, SymptomConditionTable,
    SymptomError, SymptomSet,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A short user-facing message describing the outcome of a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

impl Notice {
    fn success(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
        }
    }

    fn info(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Info,
            message,
        }
    }

    fn error(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }
}

/// A prediction and when it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRecord {
    pub result: PredictionResult,
    pub predicted_at: DateTime<Utc>,
}

pub struct PredictorSession {
    table: Arc<SymptomConditionTable>,
    symptoms: SymptomSet,
    user_name: Option<String>,
    last_prediction: Option<PredictionRecord>,
}

impl PredictorSession {
    pub fn new(table: Arc<SymptomConditionTable>) -> Self {
        Self {
            table,
            symptoms: SymptomSet::new(),
            user_name: None,
            last_prediction: None,
        }
    }

    /// Attaches the name of the user this session belongs to.
    pub fn with_user(mut self, user_name: Option<String>) -> Self {
        self.user_name = user_name;
        self
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn table(&self) -> &SymptomConditionTable {
        &self.table
    }

    pub fn symptoms(&self) -> &SymptomSet {
        &self.symptoms
    }

    pub fn state(&self) -> SessionState {
        self.symptoms.state()
    }

    pub fn last_prediction(&self) -> Option<&PredictionRecord> {
        self.last_prediction.as_ref()
    }

    /// Adds a symptom, returning the notice to show and the underlying outcome.
    pub fn add_symptom(&mut self, text: &str) -> (Notice, PredictorResult<()>) {
        match self.symptoms.add(text) {
            Ok(symptom) => {
                tracing::debug!("added symptom: {symptom}");
                (Notice::success(NOTICE_SYMPTOM_ADDED), Ok(()))
            }
            Err(err) => {
                let (kind, notice) = match err {
                    SymptomError::Empty => ("empty", Notice::error(NOTICE_SYMPTOM_EMPTY)),
                    SymptomError::Duplicate(_) => {
                        ("duplicate", Notice::error(NOTICE_SYMPTOM_DUPLICATE))
                    }
                };
                tracing::warn!("rejected {kind} symptom");
                (notice, Err(err.into()))
            }
        }
    }

    pub fn remove_symptom(&mut self, text: &str) -> Notice {
        if self.symptoms.remove(text) {
            tracing::debug!("removed symptom: {}", text.trim());
        }
        Notice::info(NOTICE_SYMPTOM_REMOVED)
    }

    /// Runs a prediction over the current symptoms and keeps it as the last result.
    pub fn predict(&mut self) -> (Notice, &PredictionRecord) {
        let result = predict(&self.symptoms, &self.table);
        tracing::info!(
            "prediction over {} symptoms: {}",
            self.symptoms.len(),
            result
        );

        let record: &PredictionRecord = self.last_prediction.insert(PredictionRecord {
            result,
            predicted_at: Utc::now(),
        });
        (Notice::success(NOTICE_PREDICTION_COMPLETE), record)
    }

    /// Empties the symptom list and forgets the last prediction.
    pub fn clear(&mut self) -> Notice {
        self.symptoms.clear();
        self.last_prediction = None;
        tracing::debug!("cleared symptoms");
        Notice::info(NOTICE_SYMPTOMS_CLEARED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PredictorError;

    fn session() -> PredictorSession {
        let table = SymptomConditionTable::from_entries([
            ("fever", vec!["Flu", "COVID-19"]),
            ("cough", vec!["Flu", "Bronchitis"]),
        ])
        .unwrap();
        PredictorSession::new(Arc::new(table))
    }

    #[test]
    fn test_add_symptom_notices() {
        let mut session = session();

        let (notice, result) = session.add_symptom(" Fever ");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Symptom added successfully");
        assert!(result.is_ok());

        let (notice, result) = session.add_symptom("FEVER");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "This symptom is already in the list");
        assert!(matches!(result, Err(PredictorError::DuplicateSymptom(_))));

        let (notice, result) = session.add_symptom("  ");
        assert_eq!(notice.message, "Please enter a symptom");
        assert!(matches!(result, Err(PredictorError::EmptySymptom)));

        assert_eq!(session.symptoms().len(), 1);
    }

    #[test]
    fn test_remove_absent_still_reports_info() {
        let mut session = session();
        session.add_symptom("fever").1.unwrap();

        let notice = session.remove_symptom("rash");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(session.symptoms().len(), 1);

        session.remove_symptom("fever");
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_predict_records_last_result() {
        let mut session = session();
        assert!(session.last_prediction().is_none());

        session.add_symptom("fever").1.unwrap();
        session.add_symptom("cough").1.unwrap();

        let (notice, record) = session.predict();
        assert_eq!(notice.message, "Prediction complete");
        assert_eq!(record.result, PredictionResult::Likely("Flu".into()));

        let stored = session.last_prediction().expect("prediction should be kept");
        assert_eq!(stored.result.to_string(), "Based on your symptoms, it might be: Flu");
    }

    #[test]
    fn test_predict_on_empty_session() {
        let mut session = session();
        let (_, record) = session.predict();
        assert_eq!(record.result, PredictionResult::NoSymptoms);
    }

    #[test]
    fn test_clear_drops_symptoms_and_prediction() {
        let mut session = session();
        session.add_symptom("fever").1.unwrap();
        session.predict();

        let notice = session.clear();
        assert_eq!(notice.message, "All symptoms cleared");
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.last_prediction().is_none());

        session.clear();
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_user_name_is_injected() {
        let session = session().with_user(Some("Ada".into()));
        assert_eq!(session.user_name(), Some("Ada"));
        assert_eq!(session.table().len(), 2);
    }
}
