use rand::seq::IndexedRandom;

use crate::types::ScoreResult;

/// Model versions eligible for portrait generation. One is picked at
/// random per run so repeated portraits don't all share a style.
pub const MODEL_VERSIONS: [&str; 3] = [
    "stability-ai/sdxl:39ed52f2a78e934b3ba6e2a89f5b1c712de7dfea535525255b1aa35c5565e08b",
    "stability-ai/stable-diffusion:ac732df83cea7fff18b8472768c88ad041fa750ff7682a21affe81863cbe77e4",
    "bytedance/sdxl-lightning-4step:5f24084160c9089501c1b3545d9be3c27883ae2239b6f412990e82d4a6210f8f",
];

pub fn choose_model_version<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static str {
    MODEL_VERSIONS
        .choose(rng)
        .copied()
        .unwrap_or(MODEL_VERSIONS[0])
}

/// Renders the portrait prompt from a scoring result.
///
/// The category picks the animal, the influence keyword personalizes the
/// scene. Deterministic so a fixed seed yields a reproducible prompt.
pub fn build_prompt(result: &ScoreResult) -> String {
    format!(
        "A whimsical watercolor portrait of a {category} as a music spirit animal, \
         inspired by {keyword}, surrounded by floating vinyl records and soft stage light, \
         richly detailed, warm colors",
        category = result.category,
        keyword = result.influence_keyword
    )
}
