use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::time::sleep;

use crate::{
    Res, config,
    types::{CreatePredictionRequest, PredictionInput, PredictionResponse},
};

/// Generates a portrait through the Replicate prediction API.
///
/// Creates a prediction job for the given model version, polls it until it
/// reaches a terminal status, and downloads the first output image. Jobs
/// that fail, get canceled, or exceed the polling budget surface as errors.
///
/// # Arguments
///
/// * `prompt` - Portrait prompt to feed the model
/// * `template_image` - Optional reference image (data URI or URL) for
///   image-to-image models
/// * `version` - Model version identifier to run
pub async fn generate(
    prompt: &str,
    template_image: Option<String>,
    version: &str,
) -> Res<Vec<u8>> {
    let client = Client::new();
    let request = CreatePredictionRequest {
        version: version.to_string(),
        input: PredictionInput {
            prompt: prompt.to_string(),
            image: template_image,
        },
    };

    let prediction: PredictionResponse = client
        .post(format!("{}/predictions", config::replicate_apiurl()))
        .bearer_auth(config::replicate_api_token())
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let output_url = wait_for_prediction(&client, &prediction.id).await?;

    let bytes = client
        .get(&output_url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    Ok(bytes.to_vec())
}

/// Polls a prediction until it succeeds, fails, or the budget runs out.
///
/// Polling interval is 2 seconds with a 120-second budget, matching the
/// latency of the hosted diffusion models in [`super::prompt::MODEL_VERSIONS`].
async fn wait_for_prediction(client: &Client, id: &str) -> Res<String> {
    let max_wait = Duration::from_secs(120);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let prediction: PredictionResponse = client
            .get(format!("{}/predictions/{}", config::replicate_apiurl(), id))
            .bearer_auth(config::replicate_api_token())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match prediction.status.as_str() {
            "succeeded" => {
                return prediction
                    .output
                    .and_then(|outputs| outputs.into_iter().next())
                    .ok_or_else(|| "prediction succeeded without output".into());
            }
            "failed" | "canceled" => {
                let reason = prediction
                    .error
                    .clone()
                    .unwrap_or_else(|| prediction.status.clone());
                return Err(format!("prediction {} did not complete: {}", id, reason).into());
            }
            _ => sleep(Duration::from_secs(2)).await,
        }
    }

    Err(format!("prediction {} timed out after {} seconds", id, max_wait.as_secs()).into())
}
