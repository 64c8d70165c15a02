use anyhow::{Context, Result, bail};
use arus_finance::{CashFlowSummary, Recommender, build_prompt, prompt::SYSTEM_PROMPT};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmSection;

/// Used when neither the configured nor the provider-specific variable is set.
pub const FALLBACK_KEY_ENV: &str = "API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAI,
    Anthropic,
}

impl Provider {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAI),
            "anthropic" | "claude" => Ok(Provider::Anthropic),
            other => bail!("unknown llm provider: {other} (expected gemini, openai or anthropic)"),
        }
    }

    pub fn default_key_env(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: Provider,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub api_key_env: Option<String>,
}

impl LlmConfig {
    pub fn from_section(section: &LlmSection) -> Result<Self> {
        Ok(Self {
            provider: Provider::parse(&section.provider)?,
            model: section.model.clone(),
            base_url: section.base_url.trim_end_matches('/').to_string(),
            temperature: section.temperature,
            max_tokens: section.max_tokens,
            timeout: Duration::from_secs(section.timeout_secs),
            api_key_env: section.api_key_env.clone(),
        })
    }

    /// Variables consulted for the API key, in order
    pub fn key_env_candidates(&self) -> Vec<String> {
        let mut names = Vec::new();
        if let Some(name) = &self.api_key_env {
            names.push(name.clone());
        }
        names.push(self.provider.default_key_env().to_string());
        names.push(FALLBACK_KEY_ENV.to_string());
        names.dedup();
        names
    }

    fn api_key(&self) -> Result<String> {
        let names = self.key_env_candidates();
        names
            .iter()
            .find_map(|n| std::env::var(n).ok().filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| anyhow::anyhow!("API key not set; export one of: {}", names.join(", ")))
    }
}

pub fn complete(config: &LlmConfig, system: &str, prompt: &str) -> Result<String> {
    // Inside #[tokio::main] a nested runtime would panic, so reuse the current one.
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        tokio::task::block_in_place(|| handle.block_on(complete_async(config, system, prompt)))
    } else {
        let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
        rt.block_on(complete_async(config, system, prompt))
    }
}

async fn complete_async(config: &LlmConfig, system: &str, prompt: &str) -> Result<String> {
    let key = config.api_key()?;
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .context("build http client")?;

    tracing::debug!(provider = ?config.provider, model = %config.model, "requesting recommendations");

    match config.provider {
        Provider::Gemini => gemini_complete(&client, config, &key, system, prompt).await,
        Provider::OpenAI => openai_complete(&client, config, &key, system, prompt).await,
        Provider::Anthropic => anthropic_complete(&client, config, &key, system, prompt).await,
    }
}

async fn send_json<T: Serialize>(
    client: &reqwest::Client,
    url: &str,
    headers: HeaderMap,
    body: &T,
    label: &str,
) -> Result<reqwest::Response> {
    let resp = client
        .post(url)
        .headers(headers)
        .json(body)
        .send()
        .await
        .with_context(|| format!("{label} request"))?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("{label} error: {status} {txt}");
    }
    Ok(resp)
}

// ---- Gemini ----

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiReq {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResp {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiContent,
}

fn gemini_text(resp: GeminiResp) -> String {
    let mut s = String::new();
    if let Some(c) = resp.candidates.into_iter().next() {
        for p in c.content.parts {
            if let Some(t) = p.text {
                s.push_str(&t);
            }
        }
    }
    s.trim().to_string()
}

async fn gemini_complete(
    client: &reqwest::Client,
    config: &LlmConfig,
    key: &str,
    system: &str,
    prompt: &str,
) -> Result<String> {
    let text_content = |role: Option<&str>, text: &str| GeminiContent {
        role: role.map(str::to_string),
        parts: vec![GeminiPart {
            text: Some(text.to_string()),
        }],
    };

    let body = GeminiReq {
        system_instruction: text_content(None, system),
        contents: vec![text_content(Some("user"), prompt)],
        generation_config: GeminiGenerationConfig {
            temperature: config.temperature,
            max_output_tokens: config.max_tokens,
        },
    };

    let mut headers = HeaderMap::new();
    headers.insert("x-goog-api-key", HeaderValue::from_str(key)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let url = format!("{}/v1beta/models/{}:generateContent", config.base_url, config.model);
    let resp = send_json(client, &url, headers, &body, "gemini").await?;
    let out: GeminiResp = resp.json().await.context("parse gemini response")?;
    Ok(gemini_text(out))
}

// ---- OpenAI ----

#[derive(Serialize)]
struct OpenAiMsg {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct OpenAiReq {
    model: String,
    messages: Vec<OpenAiMsg>,
    temperature: f32,
}

#[derive(Deserialize)]
struct OpenAiResp {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMsgOut,
}

#[derive(Deserialize)]
struct OpenAiMsgOut {
    content: Option<String>,
}

fn openai_text(resp: OpenAiResp) -> String {
    resp.choices
        .first()
        .and_then(|c| c.message.content.clone())
        .unwrap_or_default()
        .trim()
        .to_string()
}

async fn openai_complete(
    client: &reqwest::Client,
    config: &LlmConfig,
    key: &str,
    system: &str,
    prompt: &str,
) -> Result<String> {
    let body = OpenAiReq {
        model: config.model.clone(),
        messages: vec![
            OpenAiMsg {
                role: "system".to_string(),
                content: system.to_string(),
            },
            OpenAiMsg {
                role: "user".to_string(),
                content: prompt.to_string(),
            },
        ],
        temperature: config.temperature,
    };

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {key}"))?);

    let url = format!("{}/v1/chat/completions", config.base_url);
    let resp = send_json(client, &url, headers, &body, "openai").await?;
    let out: OpenAiResp = resp.json().await.context("parse openai response")?;
    Ok(openai_text(out))
}

// ---- Anthropic ----

#[derive(Serialize)]
struct AnthropicReq {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<OpenAiMsg>,
}

#[derive(Deserialize)]
struct AnthropicResp {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    t: String,
    text: Option<String>,
}

fn anthropic_text(resp: AnthropicResp) -> String {
    let mut s = String::new();
    for b in resp.content {
        if b.t == "text" {
            if let Some(t) = b.text {
                s.push_str(&t);
            }
        }
    }
    s.trim().to_string()
}

async fn anthropic_complete(
    client: &reqwest::Client,
    config: &LlmConfig,
    key: &str,
    system: &str,
    prompt: &str,
) -> Result<String> {
    let body = AnthropicReq {
        model: config.model.clone(),
        max_tokens: config.max_tokens,
        system: system.to_string(),
        messages: vec![OpenAiMsg {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
    };

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_str(key)?);
    headers.insert("anthropic-version", HeaderValue::from_static("2023-06-01"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let url = format!("{}/v1/messages", config.base_url);
    let resp = send_json(client, &url, headers, &body, "anthropic").await?;
    let out: AnthropicResp = resp.json().await.context("parse anthropic response")?;
    Ok(anthropic_text(out))
}

/// [`Recommender`] backed by a hosted language model
pub struct LlmRecommender {
    config: LlmConfig,
}

impl LlmRecommender {
    pub fn new(config: LlmConfig) -> Self {
        Self { config }
    }
}

impl Recommender for LlmRecommender {
    fn recommend(&self, summary: &CashFlowSummary) -> Result<String> {
        let prompt = build_prompt(summary)?;
        let text = complete(&self.config, SYSTEM_PROMPT, &prompt)
            .context("failed to generate recommendations")?;
        if text.is_empty() {
            bail!("{:?} returned an empty response", self.config.provider);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse() {
        assert_eq!(Provider::parse("Gemini").unwrap(), Provider::Gemini);
        assert_eq!(Provider::parse("openai").unwrap(), Provider::OpenAI);
        assert_eq!(Provider::parse("claude").unwrap(), Provider::Anthropic);
        assert!(Provider::parse("ollama").is_err());
    }

    #[test]
    fn test_key_env_candidates() {
        let mut section = LlmSection::default();
        let cfg = LlmConfig::from_section(&section).unwrap();
        assert_eq!(cfg.key_env_candidates(), vec!["GEMINI_API_KEY", "API_KEY"]);

        section.provider = "openai".to_string();
        section.api_key_env = Some("KANTOR_KEY".to_string());
        section.base_url = "https://api.openai.com/".to_string();
        let cfg = LlmConfig::from_section(&section).unwrap();
        assert_eq!(cfg.key_env_candidates(), vec!["KANTOR_KEY", "OPENAI_API_KEY", "API_KEY"]);
        assert_eq!(cfg.base_url, "https://api.openai.com");
    }

    #[test]
    fn test_gemini_response_text() {
        let raw = r###"{"candidates":[{"content":{"role":"model","parts":[{"text":"## Tren\n"},{"text":"Naik."}]}}]}"###;
        let resp: GeminiResp = serde_json::from_str(raw).unwrap();
        assert_eq!(gemini_text(resp), "## Tren\nNaik.");

        let empty: GeminiResp = serde_json::from_str("{}").unwrap();
        assert_eq!(gemini_text(empty), "");
    }

    #[test]
    fn test_openai_and_anthropic_response_text() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"  Hemat biaya.  "}}]}"#;
        let resp: OpenAiResp = serde_json::from_str(raw).unwrap();
        assert_eq!(openai_text(resp), "Hemat biaya.");

        let raw = r#"{"content":[{"type":"text","text":"Kelola piutang."},{"type":"tool_use"}]}"#;
        let resp: AnthropicResp = serde_json::from_str(raw).unwrap();
        assert_eq!(anthropic_text(resp), "Kelola piutang.");
    }

    #[test]
    fn test_gemini_request_shape() {
        let body = GeminiReq {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: Some("sys".to_string()),
                }],
            },
            contents: vec![],
            generation_config: GeminiGenerationConfig {
                temperature: 0.5,
                max_output_tokens: 100,
            },
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(v["systemInstruction"].get("role").is_none());
        assert_eq!(v["generationConfig"]["maxOutputTokens"], 100);
    }
}
