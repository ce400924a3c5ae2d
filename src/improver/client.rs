use std::time::Duration;

use anyhow::{anyhow, Context};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const IMPROVER_PROMPT: &str = "You are an expert in academic writing and plagiarism detection.\n\
\n\
You will receive a project abstract and must:\n\
1. Analyze the abstract for potential plagiarism issues, providing a detailed originality report.\n\
2. Suggest improvements to the abstract to enhance its clarity, conciseness, and originality.";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImproverInput {
    pub project_abstract: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImproverOutput {
    pub originality_report: String,
    pub improved_abstract: String,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    prompt: &'a str,
    input: &'a ImproverInput,
    output_schema: schemars::schema::RootSchema,
}

pub trait GenerationClient {
    fn improve(
        &self,
        input: &ImproverInput,
    ) -> impl std::future::Future<Output = anyhow::Result<ImproverOutput>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl HttpGenerationClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.improver_timeout_secs))
            .build()
            .context("failed to build generation client")?;

        Ok(Self {
            client,
            url: config.improver_url.clone(),
            token: config.improver_token.clone(),
        })
    }
}

impl GenerationClient for HttpGenerationClient {
    async fn improve(&self, input: &ImproverInput) -> anyhow::Result<ImproverOutput> {
        let body = GenerationRequest {
            prompt: IMPROVER_PROMPT,
            input,
            output_schema: schema_for!(ImproverOutput),
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = self.token.as_deref().filter(|value| !value.trim().is_empty()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.context("generation request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "generation service returned status {}",
                response.status()
            ));
        }

        response
            .json::<ImproverOutput>()
            .await
            .context("failed to decode generation response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_types_use_camel_case_fields() {
        let input = ImproverInput {
            project_abstract: "A study of campus energy usage.".to_string(),
        };
        let encoded = serde_json::to_value(&input).expect("input should serialize");
        assert_eq!(
            encoded["projectAbstract"],
            "A study of campus energy usage."
        );

        let decoded: ImproverOutput = serde_json::from_value(serde_json::json!({
            "originalityReport": "Largely original.",
            "improvedAbstract": "A clearer abstract.",
        }))
        .expect("output should deserialize");
        assert_eq!(decoded.originality_report, "Largely original.");
        assert_eq!(decoded.improved_abstract, "A clearer abstract.");
    }

    #[test]
    fn generation_request_carries_prompt_and_output_schema() {
        let input = ImproverInput {
            project_abstract: "A study of campus energy usage.".to_string(),
        };
        let body = GenerationRequest {
            prompt: IMPROVER_PROMPT,
            input: &input,
            output_schema: schema_for!(ImproverOutput),
        };

        let encoded = serde_json::to_value(&body).expect("request should serialize");
        assert!(encoded["prompt"]
            .as_str()
            .expect("prompt should be a string")
            .contains("plagiarism"));
        assert!(encoded["output_schema"]["properties"]
            .as_object()
            .expect("schema should list properties")
            .contains_key("originalityReport"));
    }
}
