//! Async game engine
//!
//! Merges three event sources into one ordered stream and folds it through
//! the pure reducer:
//! - a fixed-step clock (tokio interval, 100 ms)
//! - a bounded item spawner (tokio interval, stops after the quota)
//! - caller-pushed direction commands (unbounded mpsc channel)
//!
//! One tokio task consumes the merged stream, so reductions are strictly
//! sequential and the state value needs no synchronization. Every snapshot
//! is handed to the caller's callback, ending with the first finished
//! snapshot (inclusive) unless the game is stopped early.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::{ConfigError, GameConfig};
use crate::consts::{FIELD_SIZE, ITEM_WIDTH, TICK_INTERVAL_MS};
use crate::sim::{Direction, FallingItem, GameEvent, GameState, reduce};

/// Control handle for a running game
pub struct GameHandle {
    directions: mpsc::UnboundedSender<Direction>,
    task: JoinHandle<()>,
}

impl GameHandle {
    /// Push a direction change into the control stream. Fire-and-forget;
    /// commands sent after the game ends are dropped.
    pub fn set_direction(&self, direction: Direction) {
        let _ = self.directions.send(direction);
    }

    /// Tear down the game loop. Idempotent; no snapshots are delivered
    /// afterward, regardless of outstanding timer events.
    pub fn stop(&self) {
        if !self.task.is_finished() {
            log::debug!("game stopped by caller");
        }
        self.task.abort();
    }

    /// Wait until the game finishes (or was stopped).
    pub async fn finished(self) {
        // Abort surfaces as a JoinError; either way the loop is done.
        let _ = self.task.await;
    }
}

/// Start a game on the ambient tokio runtime.
///
/// Validates the configuration eagerly, then returns the handle
/// synchronously while events fire on the runtime's timers. `on_change` is
/// invoked from the game task once per processed event, in reduction order.
pub fn start(
    config: GameConfig,
    on_change: impl FnMut(GameState) + Send + 'static,
) -> Result<GameHandle, ConfigError> {
    config.validate()?;
    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(config, rx, on_change));
    Ok(GameHandle {
        directions: tx,
        task,
    })
}

async fn run(
    config: GameConfig,
    mut directions: mpsc::UnboundedReceiver<Direction>,
    mut on_change: impl FnMut(GameState) + Send + 'static,
) {
    let quota = config.generator.max_items;
    let mut rng = match config.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    let mut state = GameState::new(config.cutter.into());

    let tick_period = Duration::from_millis(TICK_INTERVAL_MS);
    let spawn_period = Duration::from_millis(config.generator.interval_ms);
    // interval() fires immediately; shift both timers so the first event
    // lands one full period after start.
    let start = tokio::time::Instant::now();
    let mut clock = tokio::time::interval_at(start + tick_period, tick_period);
    let mut spawner = tokio::time::interval_at(start + spawn_period, spawn_period);
    let mut spawned: u32 = 0;

    log::info!(
        "game started: quota {quota}, spawn interval {}ms",
        config.generator.interval_ms
    );

    loop {
        let event = tokio::select! {
            _ = clock.tick() => GameEvent::Tick {
                delta_ms: TICK_INTERVAL_MS as f32,
            },
            _ = spawner.tick(), if spawned < quota => {
                let item = FallingItem::spawn(spawned, random_item_left(&mut rng));
                spawned += 1;
                GameEvent::Spawn { item }
            }
            Some(value) = directions.recv() => GameEvent::Direction { value },
        };

        state = reduce(&state, &event, quota);
        on_change(state.clone());

        if state.is_finished {
            log::info!(
                "game finished: {} cut, {} missed",
                state.cut_count(),
                state.missed_count()
            );
            break;
        }
    }
}

/// Random horizontal spawn position, keeping the item fully on the field.
fn random_item_left(rng: &mut Pcg32) -> f32 {
    rng.random_range(0.0..=FIELD_SIZE - ITEM_WIDTH).round()
}
