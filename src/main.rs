//! Judo Dance - Entry Point
//!
//! Parses the command line, checks that a pad and all media are available,
//! then hands over to the windowed game loop.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use judo_dance::app::App;
use judo_dance::audio::{RodioPlayer, SoundLibrary};
use judo_dance::core::clock::SystemClock;
use judo_dance::core::config::GameConfig;
use judo_dance::core::error::{JudoError, Result};
use judo_dance::game::GameSession;
use judo_dance::input::{self, ButtonMap, PadInput};
use judo_dance::renderer::TextureCache;
use judo_dance::tasks::{create_task_database, AssetCatalog};
use judo_dance::ui::GameScreen;

/// Judo Dance - learn judo throws on a dance mat
#[derive(Parser, Debug)]
#[command(name = "judo-dance", version)]
#[command(about = "Practice judo techniques by stepping their positions on a dance pad")]
struct Args {
    /// Print the connected joysticks and their GUIDs, then exit
    #[arg(long)]
    list_devices: bool,

    /// GUID of the joystick to use (default: first connected)
    #[arg(long, value_name = "GUID")]
    device: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the images and sounds
    #[arg(long)]
    media_dir: Option<PathBuf>,

    /// Session length in seconds
    #[arg(long, value_name = "SECS")]
    duration: Option<u64>,

    /// Random seed for a reproducible task order
    #[arg(long)]
    seed: Option<u64>,

    /// Run in a window instead of fullscreen
    #[arg(long)]
    windowed: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("judo_dance=info")),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(dir) = &args.media_dir {
        config.media_dir = dir.clone();
    }
    if let Some(secs) = args.duration {
        config.session_secs = secs;
    }
    if args.windowed {
        config.fullscreen = false;
    }

    config.validate().map_err(JudoError::Config)?;
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let gilrs = input::pad::init()?;
    if args.list_devices {
        for device in input::list_devices(&gilrs) {
            println!("Device {}, GUID: {}", device.name, device.guid);
        }
        return Ok(());
    }

    let pad = PadInput::open(
        gilrs,
        args.device.as_deref(),
        ButtonMap::from_layout(&config.pad),
    )?;

    let db = create_task_database().with_reminder_slack(config.reminder_slack());
    AssetCatalog::from_database(&db).check_all_files_exist(&config.media_dir)?;
    tracing::info!("Media directory: {}", config.media_dir.display());

    let library = SoundLibrary::load(&db, &config.media_dir)?;
    let sound = RodioPlayer::new(library);

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Seed: {}", seed);
    let rng = ChaCha8Rng::seed_from_u64(seed);

    let session = GameSession::start(db, config.session_length(), SystemClock, rng, sound);
    let screen = GameScreen::new(TextureCache::new(config.media_dir.clone()), config.grades);

    App {
        session,
        pad,
        screen,
        fullscreen: config.fullscreen,
    }
    .run()
}
