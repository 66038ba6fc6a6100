/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Normalises free text into its canonical lookup form.
///
/// Leading and trailing whitespace is trimmed and the remainder is lowercased. The same
/// form is used for stored symptoms and for symptom table keys, so matching is
/// case-insensitive and ignores surrounding whitespace.
pub fn normalise(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A symptom string in canonical form that is guaranteed to be non-empty.
///
/// Construction trims surrounding whitespace and lowercases the input. Two inputs that
/// differ only in case or outer whitespace produce equal `SymptomText` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymptomText(String);

impl SymptomText {
    /// Creates a new `SymptomText` from the given input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(SymptomText)` if the normalised input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let normalised = normalise(input.as_ref());
        if normalised.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(normalised))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SymptomText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SymptomText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for SymptomText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SymptomText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SymptomText::new(&s).map_err(serde::de::Error::custom)
    }
}
