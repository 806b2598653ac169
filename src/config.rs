//! Build-time configuration for the grading service.

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraderConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl GraderConfig {
    /// Reads `GEMINI_API_KEY`, `ENCODE_GRADER_MODEL` and `ENCODE_GRADER_ENDPOINT`
    /// as they were set when the wasm bundle was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ENCODE_GRADER_ENDPOINT"),
            option_env!("ENCODE_GRADER_MODEL"),
            option_env!("GEMINI_API_KEY"),
        )
    }

    pub fn from_values(endpoint: Option<&str>, model: Option<&str>, api_key: Option<&str>) -> Self {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        let defaults = Self::default();
        Self {
            endpoint: non_empty(endpoint)
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
            model: non_empty(model).unwrap_or(defaults.model),
            api_key: non_empty(api_key),
        }
    }

    /// `generateContent` URL without the key query parameter.
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}
