use log::{info, warn};

use crate::llm::client::BedrockClient;
use crate::prompt::build_prompt;
use crate::response::{normalize_response, system_error_result};
use crate::schema::{AnalysisRequest, AnalysisResult};
use crate::session::SessionContext;

/// Orchestrates one analysis: prompt assembly, model invocation, response
/// normalization. By contract this never surfaces an error to the caller;
/// every failure mode degrades into a displayable [`AnalysisResult`].
pub struct IncentiveAnalyst {
    client: BedrockClient,
}

impl IncentiveAnalyst {
    pub fn new(client: BedrockClient) -> Self {
        Self { client }
    }

    /// Answer one request. Transport, auth, and service failures come back
    /// as a "System Error" result with the detail in the logic field.
    pub async fn ask(&self, request: &AnalysisRequest) -> AnalysisResult {
        info!(
            "Analyzing question (strict: {}): {:?}",
            request.strict, request.question
        );

        let prompt = build_prompt(request);
        match self.client.invoke(&prompt).await {
            Ok(raw) => normalize_response(&raw),
            Err(e) => {
                warn!("Model invocation failed: {e}");
                system_error_result(e)
            }
        }
    }

    /// Answer one request and append the outcome to the session history.
    /// Every question produces a history entry, successful or not.
    pub async fn ask_and_record(
        &self,
        session: &mut SessionContext,
        request: &AnalysisRequest,
    ) -> AnalysisResult {
        let result = self.ask(request).await;
        session.record(request.question.clone(), result.clone());
        result
    }
}
