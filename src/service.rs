//! Session storage collaborator: creates, looks up, and attacks games
//! keyed by id, serializing access per session.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{Mutex, RwLock};

use crate::game::Game;
use crate::protocol::{AttackResponse, GameSnapshot};

/// Engine-facing contract consumed by the HTTP layer.
#[async_trait::async_trait]
pub trait GameService: Send + Sync {
    /// Create a session with a fresh random fleet and persist it.
    async fn create_game(&self) -> anyhow::Result<GameSnapshot>;
    /// Look a session up by id.
    async fn get_game(&self, id: u64) -> anyhow::Result<GameSnapshot>;
    /// Attack one cell of the identified session.
    async fn attack(&self, id: u64, row: usize, col: usize) -> anyhow::Result<AttackResponse>;
}

/// In-memory store. Each session sits behind its own mutex so concurrent
/// requests against the same id resolve one at a time against a consistent
/// board, while distinct sessions proceed in parallel.
pub struct MemoryStore {
    games: RwLock<HashMap<u64, Arc<Mutex<Game>>>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            games: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a session using the caller's RNG, e.g. a seeded `SmallRng`
    /// for reproducible fleets.
    pub async fn create_with_rng<R: Rng>(&self, rng: &mut R) -> anyhow::Result<GameSnapshot> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let game = Game::new(id, rng).map_err(|e| anyhow::anyhow!(e))?;
        let snapshot = GameSnapshot::from(&game);
        self.games
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(game)));
        log::info!("created game {}", id);
        Ok(snapshot)
    }

    async fn session(&self, id: u64) -> anyhow::Result<Arc<Mutex<Game>>> {
        self.games
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("game {} not found", id))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GameService for MemoryStore {
    async fn create_game(&self) -> anyhow::Result<GameSnapshot> {
        let mut rng = SmallRng::from_rng(&mut rand::rng());
        self.create_with_rng(&mut rng).await
    }

    async fn get_game(&self, id: u64) -> anyhow::Result<GameSnapshot> {
        let session = self.session(id).await?;
        let game = session.lock().await;
        Ok(GameSnapshot::from(&*game))
    }

    async fn attack(&self, id: u64, row: usize, col: usize) -> anyhow::Result<AttackResponse> {
        let session = self.session(id).await?;
        let mut game = session.lock().await;
        let outcome = game.attack(row, col);
        log::debug!("game {}: attack ({}, {}) -> {:?}", id, row, col, outcome);
        Ok(AttackResponse {
            attack_status: outcome,
            game: GameSnapshot::from(&*game),
        })
    }
}
