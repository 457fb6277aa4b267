use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    error, imagegen, info,
    management::{HistoryManager, ProfileManager},
    success, taste,
    utils::Provider,
    warning,
};

pub async fn portrait(
    provider: Provider,
    output: Option<String>,
    template: Option<String>,
    seed: Option<u64>,
) {
    let profile_mgr = match ProfileManager::load_or_default().await {
        Ok(manager) => manager,
        Err(e) => error!("Failed to load taste profile: {:?}", e),
    };

    let plays = match HistoryManager::load().await {
        Ok(manager) => manager.get_plays(),
        Err(e) => error!(
            "Failed to load recent plays: {}\nRun spiritcli recent update.",
            e
        ),
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = match taste::compute_score(&plays, profile_mgr.profile(), &mut rng) {
        Ok(result) => result,
        Err(taste::ScoreError::EmptyHistory) => {
            error!("No cached plays to score.\nRun spiritcli recent update first.");
        }
    };

    info!(
        "Taste score {} maps to spirit animal '{}'",
        result.definition_score, result.category
    );

    let prompt = imagegen::build_prompt(&result);
    let version = imagegen::choose_model_version(&mut rng);

    if template.is_some() && provider == Provider::HuggingFace {
        warning!("Template images are only used by the replicate provider, ignoring.");
    }

    let template_image = match template {
        Some(path) if provider == Provider::Replicate => {
            match async_fs::read(&path).await {
                Ok(bytes) => Some(format!("data:image/png;base64,{}", STANDARD.encode(bytes))),
                Err(e) => error!("Failed to read template image {}: {}", path, e),
            }
        }
        _ => None,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Generating portrait via {}...", provider));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let bytes = match imagegen::generate(provider, &prompt, template_image, version).await {
        Ok(bytes) => bytes,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to generate portrait: {}", e);
        }
    };

    pb.finish_and_clear();

    let output_path = output.unwrap_or_else(|| format!("{}-portrait.png", result.category));
    if let Err(e) = async_fs::write(&output_path, &bytes).await {
        error!("Failed to save portrait to {}: {}", output_path, e);
    }

    success!("Portrait saved to {}", output_path);
}
