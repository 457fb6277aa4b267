use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spiritcli::{cli, config, error, types::PkceToken, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Handle recently played tracks
    Recent(RecentOptions),

    /// Compute the taste score and spirit animal
    Score(ScoreOptions),

    #[clap(about = "Generate a spirit animal portrait")]
    Portrait(PortraitOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle recently played tracks",
    args_conflicts_with_subcommands = true // disallow mixing --limit with subcommands
)]
pub struct RecentOptions {
    /// Limit the number of listed plays
    #[clap(long)]
    pub limit: Option<usize>,

    /// Subcommands under `recent` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<RecentSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RecentSubcommand {
    /// Update recently played tracks
    Update(RecentUpdateOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct RecentUpdateOpts {
    /// Number of history entries to fetch (1-50)
    #[clap(long, default_value_t = 50)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct ScoreOptions {
    /// Fix the random seed for keyword selection
    #[clap(long)]
    pub seed: Option<u64>,

    /// Count repeated genre tags within a play only once
    #[clap(long)]
    pub dedupe_genres: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PortraitOptions {
    /// Image generation backend
    #[clap(long, default_value = "replicate", value_parser = utils::parse_provider)]
    pub provider: utils::Provider,

    /// Output file path for the portrait
    #[clap(long)]
    pub output: Option<String>,

    /// Template reference image to guide generation
    #[clap(long)]
    pub template: Option<String>,

    /// Fix the random seed for keyword and model selection
    #[clap(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Recent(opt) => match opt.command {
            Some(RecentSubcommand::Update(u)) => cli::update_recent(u.limit).await,
            None => cli::list_recent(opt.limit).await,
        },

        Command::Score(opt) => cli::score(opt.seed, opt.dedupe_genres).await,

        Command::Portrait(opt) => {
            cli::portrait(opt.provider, opt.output, opt.template, opt.seed).await
        }

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
