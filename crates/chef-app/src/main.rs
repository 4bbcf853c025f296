mod ask;
mod cli;
mod providers;
mod repl;

use std::process::ExitCode;

use chef_ai::{ChatSession, Mode};
use chef_common::ChefError;
use chef_config::{ChefConfig, HandlePolicyKind, ProviderKind};
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/chef-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| "chef=info".parse().expect("static directive parses")),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Apply command-line overrides on top of the loaded config.
fn apply_overrides(config: &mut ChefConfig, args: &Args) -> Result<(), ChefError> {
    if let Some(ref provider) = args.provider {
        config.provider.kind = provider.parse::<ProviderKind>()?;
    }
    if let Some(ref policy) = args.policy {
        config.session.handle_policy = policy.parse::<HandlePolicyKind>()?;
    }
    if let Some(ref mode) = args.mode {
        config.session.mode = mode.clone();
    }
    Ok(())
}

async fn run(args: Args, mut config: ChefConfig) -> Result<(), ChefError> {
    apply_overrides(&mut config, &args)?;

    let client = providers::build_client(&config.provider)?;
    let mode = Mode::parse(&config.session.mode);

    match args.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let session = ChatSession::new(
                client,
                providers::session_config(
                    mode.as_str(),
                    &config.generation,
                    config.session.handle_policy,
                ),
            )?;
            session.initialize().await?;
            tracing::info!(conversation = session.id().short(), %mode, "Chat session ready");
            repl::run(&session, mode).await
        }
        Command::Ask {
            prompt,
            preferences,
        } => {
            let reply = ask::run(
                client,
                mode,
                providers::generation_settings(&config.generation),
                &prompt,
                &preferences.into(),
            )
            .await?;
            println!("{reply}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let loaded = chef_config::load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => format!("chef={level},chef_ai={level},chef_config={level}"),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "chef=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("Chef v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Config load failed: {e}");
            eprintln!("chef: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("chef: {e}");
            ExitCode::FAILURE
        }
    }
}
