use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{Res, config, warning};

/// Generates a portrait through a hosted inference endpoint.
///
/// Sends the prompt to the configured text-to-image model and returns the
/// raw image bytes. A 503 response means the model is still loading onto
/// an inference worker; the request is retried after a 10-second delay.
pub async fn generate(prompt: &str) -> Res<Vec<u8>> {
    loop {
        let client = Client::new();
        let response = client
            .post(&config::huggingface_apiurl())
            .bearer_auth(config::huggingface_api_token())
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await?;

        if response.status() == StatusCode::SERVICE_UNAVAILABLE {
            warning!("Model is still warming up, retrying in 10 seconds");
            sleep(Duration::from_secs(10)).await;
            continue; // retry
        }

        let bytes = response.error_for_status()?.bytes().await?;
        return Ok(bytes.to_vec());
    }
}
