use crate::catalog::domain::{AnalysisResult, Component};
use crate::ports::outbound::{AnalysisOptions, ComponentAnalyzer};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Public Gemini API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables consulted, in order, when no key is passed
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

const PROMPT_TEMPLATE: &str = "You are an expert software architect who analyzes code repositories to identify, categorize and catalog the components within the codebase.

Analyze the following repository contents and identify the components, their types, programming languages and dependencies. Take into account the file structure, import and export statements, class definitions, configuration files, documentation patterns and naming conventions.

Repository Contents:
{{repository_contents}}

Return a JSON object with a `components` array. Each component has the following properties:
- name: The name of the component.
- description: A brief description of the component.
- type: The type of the component (e.g., service, library, resource, system).
- language: The programming language of the component.
- dependencies: A list of the names of the components this component depends on.
";

/// Component exactly as the model must return it
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawComponent {
    name: String,
    description: String,
    #[serde(rename = "type")]
    component_type: String,
    language: String,
    #[serde(default)]
    dependencies: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAnalysis {
    components: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// GeminiAnalyzer adapter calling the Gemini `generateContent` endpoint
///
/// The request embeds the document in a fixed prompt and declares the
/// response schema, so the model answers with JSON only. The call is made
/// once, with no client-side timeout and no retries.
pub struct GeminiAnalyzer {
    client: reqwest::Client,
    base_url: String,
    default_api_key: Option<String>,
}

impl GeminiAnalyzer {
    /// Creates an analyzer for `base_url` with an optional fallback key
    pub fn new(base_url: impl Into<String>, default_api_key: Option<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("repo-catalog/{}", version);
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_api_key: default_api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Creates an analyzer whose fallback key comes from the environment
    pub fn from_env(base_url: impl Into<String>) -> Result<Self> {
        let key = API_KEY_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()));
        Self::new(base_url, key)
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(model)
        )
    }

    fn resolve_api_key<'a>(&'a self, options: &'a AnalysisOptions) -> Option<&'a str> {
        options
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .or(self.default_api_key.as_deref())
    }

    pub(crate) fn build_prompt(document: &str) -> String {
        PROMPT_TEMPLATE.replace("{{repository_contents}}", document)
    }

    /// OpenAPI-style schema for `{components: [...]}`
    pub(crate) fn response_schema() -> Value {
        let string = |description: &str| json!({ "type": "STRING", "description": description });

        json!({
            "type": "OBJECT",
            "properties": {
                "components": {
                    "type": "ARRAY",
                    "description": "A list of components identified in the repository.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": string("The name of the component."),
                            "description": string("A brief description of the component."),
                            "type": string("The type of the component (e.g., service, library, resource, system)."),
                            "language": string("The programming language of the component."),
                            "dependencies": {
                                "type": "ARRAY",
                                "description": "A list of the component's dependencies.",
                                "items": { "type": "STRING" }
                            }
                        },
                        "required": ["name", "description", "type", "language", "dependencies"]
                    }
                }
            },
            "required": ["components"]
        })
    }

    pub(crate) fn build_request_body(document: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": Self::build_prompt(document) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema()
            }
        })
    }

    /// Extracts a readable message from a non-success response body
    pub(crate) fn parse_error_body(status: reqwest::StatusCode, body: &str) -> AnalysisError {
        let detail = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| match (envelope.error.message, envelope.error.status) {
                (Some(message), Some(status)) => Some(format!("{} ({})", message, status)),
                (Some(message), None) => Some(message),
                (None, status) => status,
            })
            .unwrap_or_else(|| body.trim().chars().take(200).collect());

        AnalysisError::analysis_failed(format!(
            "The model backend returned {}: {}",
            status, detail
        ))
    }

    /// Parses a successful `generateContent` body into the analysis result
    pub(crate) fn parse_response(body: &str) -> std::result::Result<AnalysisResult, AnalysisError> {
        let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
            AnalysisError::analysis_failed(format!("Malformed response from the model backend: {}", e))
        })?;

        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AnalysisError::analysis_failed(format!(
                "The request was blocked by the model backend: {}",
                reason
            )));
        }

        let candidate = response.candidates.into_iter().next().ok_or_else(|| {
            AnalysisError::analysis_failed("The model returned no candidates.")
        })?;

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
            return Err(AnalysisError::analysis_failed(format!(
                "The model returned no output (finish reason: {}).",
                reason
            )));
        }

        let raw: RawAnalysis = serde_json::from_str(&text).map_err(|e| {
            AnalysisError::analysis_failed(format!(
                "The model output does not match the component schema: {}",
                e
            ))
        })?;

        Ok(AnalysisResult::new(
            raw.components
                .into_iter()
                .map(|c| {
                    Component::new(c.name, c.description, c.component_type, c.language, c.dependencies)
                })
                .collect(),
        ))
    }
}

#[async_trait]
impl ComponentAnalyzer for GeminiAnalyzer {
    async fn analyze(
        &self,
        document: &str,
        options: &AnalysisOptions,
    ) -> std::result::Result<AnalysisResult, AnalysisError> {
        let api_key = self.resolve_api_key(options).ok_or_else(|| {
            AnalysisError::analysis_failed(format!(
                "No API key available. Pass --api-key or set {}.",
                API_KEY_ENV_VARS.join(" or ")
            ))
        })?;

        let response = self
            .client
            .post(self.endpoint(&options.model))
            .header("x-goog-api-key", api_key)
            .json(&Self::build_request_body(document))
            .send()
            .await
            .map_err(|e| {
                AnalysisError::analysis_failed(format!(
                    "Failed to reach the model backend: {}",
                    e
                ))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AnalysisError::analysis_failed(format!("Failed to read the model response: {}", e))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_body(status, &body));
        }

        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AnalysisErrorKind;

    fn wrap(text: &str) -> String {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
        .to_string()
    }

    #[test]
    fn test_request_body_embeds_document_and_schema() {
        let body = GeminiAnalyzer::build_request_body("--- File: src/lib.rs ---\nfn x() {}\n\n");

        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Repository Contents:\n--- File: src/lib.rs ---"));
        assert!(prompt.contains("naming conventions"));

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        let item = &config["responseSchema"]["properties"]["components"]["items"];
        assert_eq!(item["properties"]["type"]["type"], "STRING");
        assert_eq!(item["properties"]["dependencies"]["type"], "ARRAY");
    }

    #[test]
    fn test_endpoint_encodes_model() {
        let analyzer = GeminiAnalyzer::new("http://localhost:8080/v1beta/", None).unwrap();
        assert_eq!(
            analyzer.endpoint("gemini-1.5-flash"),
            "http://localhost:8080/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(
            analyzer.endpoint("a b/c"),
            "http://localhost:8080/v1beta/models/a%20b%2Fc:generateContent"
        );
    }

    #[test]
    fn test_request_key_overrides_default() {
        let analyzer = GeminiAnalyzer::new(DEFAULT_API_BASE_URL, Some("server".to_string())).unwrap();

        let with_key = AnalysisOptions::new("gemini-pro".to_string(), Some("user".to_string()));
        assert_eq!(analyzer.resolve_api_key(&with_key), Some("user"));

        let without_key = AnalysisOptions::default();
        assert_eq!(analyzer.resolve_api_key(&without_key), Some("server"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let analyzer = GeminiAnalyzer::new("http://127.0.0.1:9", None).unwrap();
        let err = analyzer
            .analyze("document", &AnalysisOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), AnalysisErrorKind::AnalysisFailed);
        assert!(err.to_string().contains("No API key available"));
    }

    #[test]
    fn test_parse_response_components() {
        let body = wrap(
            r#"{"components":[
                {"name":"A","description":"a","type":"service","language":"Go","dependencies":["B"]},
                {"name":"B","description":"b","type":"library","language":"Go"}
            ]}"#,
        );

        let result = GeminiAnalyzer::parse_response(&body).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.components()[0].dependencies(), ["B".to_string()]);
        assert!(result.components()[1].dependencies().is_empty());
    }

    #[test]
    fn test_parse_response_empty_components_is_valid() {
        let result = GeminiAnalyzer::parse_response(&wrap(r#"{"components":[]}"#)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_response_rejects_unknown_fields() {
        let body = wrap(
            r#"{"components":[{"name":"A","description":"a","type":"service","language":"Go","owner":"x"}]}"#,
        );

        let err = GeminiAnalyzer::parse_response(&body).unwrap_err();
        assert!(err.to_string().contains("does not match the component schema"));
    }

    #[test]
    fn test_parse_response_rejects_missing_field() {
        let body = wrap(r#"{"components":[{"name":"A","type":"service","language":"Go"}]}"#);
        assert!(GeminiAnalyzer::parse_response(&body).is_err());
    }

    #[test]
    fn test_parse_response_blocked_prompt() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = GeminiAnalyzer::parse_response(body).unwrap_err();
        assert!(err.to_string().contains("blocked"));
    }

    #[test]
    fn test_parse_response_no_candidate_text() {
        let body = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        let err = GeminiAnalyzer::parse_response(body).unwrap_err();
        assert!(err.to_string().contains("finish reason: SAFETY"));
    }

    #[test]
    fn test_parse_error_body_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let err = GeminiAnalyzer::parse_error_body(reqwest::StatusCode::BAD_REQUEST, body);
        assert!(err.to_string().contains("API key not valid. (INVALID_ARGUMENT)"));
    }

    #[test]
    fn test_parse_error_body_plain_text() {
        let err = GeminiAnalyzer::parse_error_body(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert!(err.to_string().contains("upstream down"));
    }
}
