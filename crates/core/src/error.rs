use medware_types::TextError;

#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("symptom cannot be empty")]
    EmptySymptom,
    #[error("symptom '{0}' is already in the list")]
    DuplicateSymptom(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to read symptom table: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize symptom table YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
    #[error("symptom table lists '{0}' more than once")]
    DuplicateTableKey(String),
    #[error("symptom table entry '{0}' contains an empty condition name")]
    EmptyConditionName(String),
}

/// Why a symptom was not added to a `SymptomSet`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymptomError {
    #[error("symptom cannot be empty")]
    Empty,
    #[error("symptom '{0}' is already in the list")]
    Duplicate(String),
}

impl From<TextError> for SymptomError {
    fn from(err: TextError) -> Self {
        match err {
            TextError::Empty => SymptomError::Empty,
        }
    }
}

impl From<SymptomError> for PredictorError {
    fn from(err: SymptomError) -> Self {
        match err {
            SymptomError::Empty => PredictorError::EmptySymptom,
            SymptomError::Duplicate(symptom) => PredictorError::DuplicateSymptom(symptom),
        }
    }
}

pub type PredictorResult<T> = std::result::Result<T, PredictorError>;
