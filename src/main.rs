use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sp2yt::{
    cli,
    config::{self, Config},
    error,
    transfer::{DEFAULT_DESCRIPTION, TransferRequest},
    types::Privacy,
};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify or YouTube
    Auth(AuthOptions),

    /// Copy a Spotify playlist into a new YouTube playlist
    Transfer(TransferOptions),

    /// List the tracks of a Spotify playlist
    Tracks(TracksOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Service to authorize
    #[clap(value_enum)]
    service: cli::Service,
}

#[derive(Parser, Debug, Clone)]
pub struct TransferOptions {
    /// Spotify playlist URL, e.g. https://open.spotify.com/playlist/<id>
    url: String,

    /// Title of the YouTube playlist to create
    #[clap(long)]
    title: String,

    /// Description of the YouTube playlist
    #[clap(long, default_value = DEFAULT_DESCRIPTION)]
    description: String,

    /// Privacy status of the YouTube playlist
    #[clap(long, value_enum, default_value_t = Privacy::Private)]
    privacy: Privacy,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Spotify playlist URL
    url: String,
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

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    match cli.command {
        Command::Auth(opt) => cli::auth(&config, opt.service).await,
        Command::Transfer(opt) => {
            let request = TransferRequest {
                source_url: opt.url,
                title: opt.title,
                description: opt.description,
                privacy: opt.privacy,
            };
            cli::transfer(&config, request).await
        }
        Command::Tracks(opt) => cli::tracks(&config, &opt.url).await,
        Command::Completions(_) => {}
    }
}
