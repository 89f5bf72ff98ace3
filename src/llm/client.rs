use log::debug;
use reqwest::Client;

use crate::config::NavigatorConfig;
use crate::error::{NavigatorError, Result};
use crate::llm::types::{InvokeModelRequest, InvokeModelResponse};

#[derive(Clone)]
pub struct BedrockClient {
    client: Client,
    config: NavigatorConfig,
}

impl BedrockClient {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    fn invoke_url(&self) -> String {
        format!(
            "https://bedrock-runtime.{}.amazonaws.com/model/{}/invoke",
            self.config.region, self.config.model_id
        )
    }

    /// Send one prompt and return the raw completion text. The reply is not
    /// parsed here; normalization is the caller's concern.
    pub async fn invoke(&self, prompt: &str) -> Result<String> {
        let url = self.invoke_url();
        let payload = InvokeModelRequest::single_user_message(prompt);

        debug!(
            "Invoking model {} ({} prompt bytes)",
            self.config.model_id,
            prompt.len()
        );

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NavigatorError::ModelInvocation(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let err_text = res
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(NavigatorError::ModelInvocation(format!(
                "Bedrock API error (status {status}): {err_text}"
            )));
        }

        let body: InvokeModelResponse = res
            .json()
            .await
            .map_err(|e| NavigatorError::ModelInvocation(e.to_string()))?;

        body.first_text()
            .map(str::to_string)
            .ok_or_else(|| {
                NavigatorError::ModelInvocation("Model returned no text content".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoke_url_embeds_region_and_model() {
        let client = BedrockClient::new(NavigatorConfig::new(
            "key",
            "eu-central-1",
            "anthropic.claude-3-5-sonnet-20240620-v1:0",
        ));

        assert_eq!(
            client.invoke_url(),
            "https://bedrock-runtime.eu-central-1.amazonaws.com/model/anthropic.claude-3-5-sonnet-20240620-v1:0/invoke"
        );
    }
}
