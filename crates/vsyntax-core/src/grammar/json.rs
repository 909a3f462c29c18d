//! JSON form of [`GrammarInfo`].

use super::types::GrammarInfo;

/// Error during grammar metadata (de)serialization.
#[derive(Debug)]
pub enum GrammarError {
    Json(serde_json::Error),
    /// Precedence levels must be listed strongest first.
    Unordered { before: String, after: String },
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Unordered { before, after } => {
                write!(f, "precedence `{before}` is weaker than `{after}` listed after it")
            }
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Unordered { .. } => None,
        }
    }
}

impl GrammarInfo {
    /// Parse and validate grammar metadata from JSON.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let info: GrammarInfo = serde_json::from_str(json).map_err(GrammarError::Json)?;
        for pair in info.precedences.windows(2) {
            if pair[0].value < pair[1].value {
                return Err(GrammarError::Unordered {
                    before: pair[0].name.clone(),
                    after: pair[1].name.clone(),
                });
            }
        }
        Ok(info)
    }

    pub fn to_json(&self) -> Result<String, GrammarError> {
        serde_json::to_string_pretty(self).map_err(GrammarError::Json)
    }
}
