use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::{domain::AnalysisResult, error::ValidationError};

pub const CREATE_ABSTRACT_PATH: &str = "/api/create-abstract";
pub const SAVE_PATH: &str = "/api/save";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAbstractQuery {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveQuery {
    pub filename: String,
}

/// A validated request for the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub url: String,
}

impl AnalysisRequest {
    /// Trims the raw input and checks it parses as an absolute URL.
    pub fn from_input(raw: &str) -> Result<Self, ValidationError> {
        let url = raw.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        Url::parse(url).map_err(|_| ValidationError::InvalidUrl)?;
        Ok(Self {
            url: url.to_string(),
        })
    }

    pub fn query(&self) -> CreateAbstractQuery {
        CreateAbstractQuery {
            url: self.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub filename: String,
    pub result: AnalysisResult,
}

impl SaveRequest {
    /// Filename is checked first so an empty name is reported even when there
    /// is nothing to save yet.
    pub fn new(
        raw_filename: &str,
        result: Option<&AnalysisResult>,
    ) -> Result<Self, ValidationError> {
        let filename = raw_filename.trim();
        if filename.is_empty() {
            return Err(ValidationError::EmptyFilename);
        }
        let result = result.ok_or(ValidationError::NothingToSave)?;
        Ok(Self {
            filename: filename.to_string(),
            result: result.clone(),
        })
    }

    pub fn query(&self) -> SaveQuery {
        SaveQuery {
            filename: self.filename.clone(),
        }
    }
}

/// The save endpoint answers with an arbitrary JSON value whose truthiness
/// signals success.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_url_is_rejected() {
        for raw in ["", "   ", "\t\n"] {
            assert_eq!(AnalysisRequest::from_input(raw), Err(ValidationError::EmptyUrl));
        }
    }

    #[test]
    fn relative_or_garbage_url_is_rejected() {
        for raw in ["not a url", "example.com/page", "/relative/path"] {
            assert_eq!(
                AnalysisRequest::from_input(raw),
                Err(ValidationError::InvalidUrl),
                "{raw}"
            );
        }
    }

    #[test]
    fn url_is_trimmed() {
        let request = AnalysisRequest::from_input("  https://example.com/a?b=c  ").expect("valid");
        assert_eq!(request.url, "https://example.com/a?b=c");
    }

    #[test]
    fn save_request_checks_filename_before_result() {
        assert_eq!(SaveRequest::new(" ", None), Err(ValidationError::EmptyFilename));
        assert_eq!(SaveRequest::new("notes", None), Err(ValidationError::NothingToSave));

        let result = AnalysisResult::default();
        let request = SaveRequest::new(" notes ", Some(&result)).expect("valid");
        assert_eq!(request.filename, "notes");
    }

    #[test]
    fn acknowledgement_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("ok")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }
}
