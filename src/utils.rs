use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::DateTime;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Image generation backend selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Replicate,
    HuggingFace,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Replicate => "replicate",
            Provider::HuggingFace => "huggingface",
        };
        write!(f, "{}", name)
    }
}

pub fn parse_provider(input: &str) -> Result<Provider, String> {
    let normalized = input.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "" => Err("provider cannot be empty".to_string()),
        "replicate" => Ok(Provider::Replicate),
        "huggingface" | "hugging-face" | "hf" => Ok(Provider::HuggingFace),
        other => Err(format!(
            "invalid value '{}' (expected 'replicate' or 'huggingface')",
            other
        )),
    }
}

pub fn format_played_at(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn summarize_genres(genres: &[String]) -> String {
    genres.iter().take(3).cloned().collect::<Vec<_>>().join(",")
}
