//! Model value object representing a backend completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Completion models hosted by the backend (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Mixtral8x7b,
    Llama3_8b,
    Llama3_70b,
    Llama31_8bInstant,
    Gemma2_9b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Mixtral8x7b => "mixtral-8x7b-32768",
            Model::Llama3_8b => "llama3-8b-8192",
            Model::Llama3_70b => "llama3-70b-8192",
            Model::Llama31_8bInstant => "llama-3.1-8b-instant",
            Model::Gemma2_9b => "gemma2-9b-it",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (Mixtral 8x7b)
    fn default() -> Self {
        Model::Mixtral8x7b
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "mixtral-8x7b-32768" => Model::Mixtral8x7b,
            "llama3-8b-8192" => Model::Llama3_8b,
            "llama3-70b-8192" => Model::Llama3_70b,
            "llama-3.1-8b-instant" => Model::Llama31_8bInstant,
            "gemma2-9b-it" => Model::Gemma2_9b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
