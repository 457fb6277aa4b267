//! # Image Generation Module
//!
//! This module forwards a templated portrait prompt to a third-party
//! image-generation API and hands back the finished image bytes. Two
//! backends are supported:
//!
//! - [`replicate`] - asynchronous job API: a prediction is created, polled
//!   until it succeeds or fails, and its first output image is downloaded
//! - [`huggingface`] - synchronous hosted inference endpoint that returns
//!   image bytes directly, with retry while the model warms up
//!
//! Prompt construction and model-version selection live in [`prompt`]; the
//! random choice of model version goes through the caller's random source
//! so it can be pinned in tests.
//!
//! The generation API is treated as a black box: no post-processing is
//! applied to the returned image beyond writing it to disk.

pub mod huggingface;
pub mod prompt;
pub mod replicate;

pub use prompt::{MODEL_VERSIONS, build_prompt, choose_model_version};

use crate::{Res, utils::Provider};

/// Dispatches portrait generation to the selected provider.
///
/// The optional `template_image` (a data URI or public URL) is only
/// meaningful for the Replicate backend; the synchronous endpoint is
/// text-to-image only.
pub async fn generate(
    provider: Provider,
    prompt: &str,
    template_image: Option<String>,
    version: &str,
) -> Res<Vec<u8>> {
    match provider {
        Provider::Replicate => replicate::generate(prompt, template_image, version).await,
        Provider::HuggingFace => huggingface::generate(prompt).await,
    }
}
