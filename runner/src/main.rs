mod pilot;

use clap::Parser;
use tokio::sync::mpsc;

use snake_engine::config::{ConfigManager, GameConfig};
use snake_engine::log;
use snake_engine::logger;
use snake_engine::session::{
    GameOverNotification, SnakeSession, SnakeSessionState, StateBroadcaster, StepUpdate,
};

use pilot::GreedyPilot;

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    field_width: Option<usize>,

    #[arg(long)]
    field_height: Option<usize>,

    #[arg(long)]
    tick_interval_ms: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Clone)]
struct LogBroadcaster;

impl StateBroadcaster for LogBroadcaster {
    async fn broadcast_step(&self, update: StepUpdate) {
        if update.delta.new_food.is_some() || update.delta.freed_tail.is_none() {
            log!(
                "[tick {}] head at ({}, {}), score {}, level {}",
                update.tick,
                update.delta.new_head.col,
                update.delta.new_head.row,
                update.score,
                update.level
            );
        }
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        log!("Game over: {:?}", notification.cause);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match args.config.as_deref() {
        Some(path) => ConfigManager::from_yaml_file(path).get_config()?,
        None => GameConfig::default(),
    };

    let mut settings = config.settings.clone();
    if let Some(width) = args.field_width {
        settings.field_width = width;
    }
    if let Some(height) = args.field_height {
        settings.field_height = height;
    }
    if let Some(interval) = args.tick_interval_ms {
        settings.tick_interval_ms = interval;
    }
    settings.validate()?;

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    log!(
        "Starting {}x{} game, tick interval {}ms, seed {}",
        settings.field_width,
        settings.field_height,
        settings.tick_interval_ms,
        seed
    );

    let session_state = SnakeSessionState::create(&settings, seed)?;
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    let pilot_state = session_state.clone();
    let pilot_handle = tokio::spawn(async move {
        GreedyPilot::run(pilot_state, input_tx).await;
    });

    let notification = SnakeSession::run(session_state, LogBroadcaster, input_rx).await?;
    pilot_handle.abort();

    log!(
        "Final score: {} (level {}, snake length {})",
        notification.score,
        notification.level,
        notification.snake_length
    );

    Ok(())
}
