use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use spotkit::{cli, config, error};

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
    /// Authorize with the Spotify accounts service
    Auth(AuthOptions),

    /// Print the authorize URL without starting a flow
    Url(UrlOptions),

    /// Show the cached token
    Token,

    /// Refresh the cached token and save it
    Refresh,

    /// Show the profile of the authorized user
    Me,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Catch the redirect on a local callback server instead of pasting the code
    #[clap(long)]
    callback: bool,

    /// Force the consent dialog even if the app was already approved
    #[clap(long)]
    show_dialog: bool,

    /// Run the in-memory application flow instead of the cached user flow
    #[clap(long)]
    app_only: bool,

    /// Seconds to wait for the callback
    #[clap(long, default_value_t = 120)]
    timeout: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct UrlOptions {
    /// State value overriding SPOTIFY_STATE
    #[clap(long)]
    state: Option<String>,

    #[clap(long)]
    show_dialog: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }
    let settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("{}", e),
    };

    match cli.command {
        Command::Auth(opt) => cli::auth(
            &settings,
            opt.callback,
            opt.show_dialog,
            opt.app_only,
            opt.timeout,
        ),
        Command::Url(opt) => cli::authorize_url(&settings, opt.state, opt.show_dialog),
        Command::Token => cli::token(&settings),
        Command::Refresh => cli::refresh(&settings),
        Command::Me => cli::me(&settings),
        Command::Completions(_) => {}
    }
}
