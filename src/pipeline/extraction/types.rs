use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// Text recovered from one source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,
    /// Output chunks the provider returned; usually one per page.
    pub chunk_count: usize,
}

impl ExtractedText {
    /// Decode a raw provider reply payload.
    pub fn from_provider_json(payload: &str) -> Result<ExtractedText, ExtractionError> {
        let reply: ProviderReply =
            serde_json::from_str(payload).map_err(|e| ExtractionError::Payload(e.to_string()))?;
        reply.into_text()
    }
}

/// Where report text comes from. The host wires its OCR provider in here.
pub trait TextSource {
    fn fetch_text(&self, reference: &str) -> Result<ExtractedText, ExtractionError>;
}

/// Reply envelope from an OCR provider.
///
/// Successful replies carry `status: "succeeded"` and an output that is
/// either one string or one string per page. Failure replies carry an
/// `error` message and may omit everything else.
#[derive(Debug, Deserialize)]
pub struct ProviderReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Option<ProviderOutput>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProviderReply {
    /// A reported error wins, then a non-success status, then output
    /// presence. Effectively blank output counts as no output.
    pub fn into_text(self) -> Result<ExtractedText, ExtractionError> {
        if let Some(message) = self.error {
            return Err(ExtractionError::Provider(message));
        }
        match self.status.as_deref() {
            Some("succeeded") => {}
            other => {
                return Err(ExtractionError::Failed(
                    other.unwrap_or("missing").to_string(),
                ))
            }
        }

        let output = self.output.ok_or(ExtractionError::EmptyOutput)?;
        let chunk_count = output.chunk_count();
        let text = output.into_text();
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyOutput);
        }
        Ok(ExtractedText { text, chunk_count })
    }
}

/// Provider output: one string, or one string per page.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProviderOutput {
    Single(String),
    Pages(Vec<String>),
}

impl ProviderOutput {
    fn chunk_count(&self) -> usize {
        match self {
            ProviderOutput::Single(_) => 1,
            ProviderOutput::Pages(pages) => pages.len(),
        }
    }

    fn into_text(self) -> String {
        match self {
            ProviderOutput::Single(text) => text,
            ProviderOutput::Pages(pages) => pages.join("\n"),
        }
    }
}

/// Fixed-output source for tests and offline use.
pub struct StaticTextSource {
    pub text: String,
    /// When set, `fetch_text` fails with this provider message instead.
    pub error: Option<String>,
}

impl StaticTextSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            error: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            text: String::new(),
            error: Some(message.to_string()),
        }
    }
}

impl TextSource for StaticTextSource {
    fn fetch_text(&self, _reference: &str) -> Result<ExtractedText, ExtractionError> {
        if let Some(message) = &self.error {
            return Err(ExtractionError::Provider(message.clone()));
        }
        Ok(ExtractedText {
            text: self.text.clone(),
            chunk_count: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_string_output() {
        let payload = r#"{"status": "succeeded", "output": "HEMATOLOGY\nHemoglobin 14.2 g/dL"}"#;
        let extracted = ExtractedText::from_provider_json(payload).unwrap();
        assert_eq!(extracted.text, "HEMATOLOGY\nHemoglobin 14.2 g/dL");
        assert_eq!(extracted.chunk_count, 1);
    }

    #[test]
    fn joins_page_chunks_with_newlines() {
        let payload = r#"{"status": "succeeded", "output": ["HEMATOLOGY", "Hemoglobin 14.2 g/dL"]}"#;
        let extracted = ExtractedText::from_provider_json(payload).unwrap();
        assert_eq!(extracted.text, "HEMATOLOGY\nHemoglobin 14.2 g/dL");
        assert_eq!(extracted.chunk_count, 2);
    }

    #[test]
    fn provider_error_wins_over_status() {
        let payload = r#"{"status": "succeeded", "output": "text", "error": "model crashed"}"#;
        let err = ExtractedText::from_provider_json(payload).unwrap_err();
        assert!(matches!(err, ExtractionError::Provider(message) if message == "model crashed"));
    }

    #[test]
    fn error_reply_without_status_decodes() {
        let payload = r#"{"error": "Failed to create prediction", "details": "timeout"}"#;
        let err = ExtractedText::from_provider_json(payload).unwrap_err();
        assert!(matches!(err, ExtractionError::Provider(_)));
    }

    #[test]
    fn non_success_status_fails() {
        let payload = r#"{"status": "processing", "output": null}"#;
        let err = ExtractedText::from_provider_json(payload).unwrap_err();
        assert!(matches!(err, ExtractionError::Failed(status) if status == "processing"));
    }

    #[test]
    fn missing_output_is_empty() {
        let payload = r#"{"status": "succeeded"}"#;
        assert!(matches!(
            ExtractedText::from_provider_json(payload),
            Err(ExtractionError::EmptyOutput)
        ));

        let payload = r#"{"status": "succeeded", "output": null}"#;
        assert!(matches!(
            ExtractedText::from_provider_json(payload),
            Err(ExtractionError::EmptyOutput)
        ));
    }

    #[test]
    fn blank_output_is_empty() {
        let payload = r#"{"status": "succeeded", "output": "  \n "}"#;
        assert!(matches!(
            ExtractedText::from_provider_json(payload),
            Err(ExtractionError::EmptyOutput)
        ));

        let payload = r#"{"status": "succeeded", "output": []}"#;
        assert!(matches!(
            ExtractedText::from_provider_json(payload),
            Err(ExtractionError::EmptyOutput)
        ));
    }

    #[test]
    fn malformed_payload_is_reported() {
        let err = ExtractedText::from_provider_json("not json at all").unwrap_err();
        assert!(matches!(err, ExtractionError::Payload(_)));
    }

    #[test]
    fn unknown_reply_fields_are_ignored() {
        let payload = r#"{
            "id": "p1",
            "status": "succeeded",
            "output": "CHEMISTRY\nGlucose 95 mg/dL",
            "metrics": {"predict_time": 3.2},
            "urls": {"get": "https://example.test/p1"}
        }"#;
        let extracted = ExtractedText::from_provider_json(payload).unwrap();
        assert!(extracted.text.contains("Glucose"));
    }

    #[test]
    fn static_source_returns_its_text() {
        let source = StaticTextSource::new("CHEMISTRY\nGlucose 95 mg/dL");
        let extracted = source.fetch_text("reports/any.pdf").unwrap();
        assert_eq!(extracted.text, "CHEMISTRY\nGlucose 95 mg/dL");
        assert_eq!(extracted.chunk_count, 1);
    }

    #[test]
    fn static_source_reports_configured_failure() {
        let source = StaticTextSource::failing("no credits left");
        let err = source.fetch_text("reports/any.pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Provider(message) if message == "no credits left"));
    }
}
