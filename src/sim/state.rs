//! Simulation state and entity types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::random::{SeededSpawner, SpawnSource};
use super::rect::Rect;
use crate::settings::{ConfigError, FieldConfig};

/// Something the host layer should react to (sounds, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new drop entered at the top of the field
    Spawned { id: u32, x: f32 },
    /// A drop landed in the bucket; score went up by one
    Caught { id: u32 },
    /// A drop fell below the field
    Missed { id: u32 },
}

/// A falling drop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Raindrop {
    pub id: u32,
    pub rect: Rect,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct SimulationState<S = SeededSpawner> {
    pub(crate) config: FieldConfig,
    /// Player bucket; only x ever changes
    pub(crate) catcher: Rect,
    /// Live drops, in spawn order
    pub(crate) drops: Vec<Raindrop>,
    /// Clock reading of the most recent spawn
    pub(crate) last_spawn: Duration,
    /// Cadence, fixed at construction
    pub(crate) spawn_interval: Duration,
    pub(crate) score: u64,
    pub(crate) source: S,
    next_id: u32,
}

impl<S: SpawnSource> SimulationState<S> {
    /// Validate the field, center the bucket and drop the first raindrop
    pub fn new(config: FieldConfig, source: S, now: Duration) -> Result<Self, ConfigError> {
        config.validate()?;

        let size = config.size();
        let catcher = Rect::square(config.width as f32 / 2.0 - size / 2.0, config.catcher_y, size);
        let spawn_interval = config.spawn_interval();

        let mut state = Self {
            config,
            catcher,
            drops: Vec::new(),
            last_spawn: now,
            spawn_interval,
            score: 0,
            source,
            next_id: 1,
        };
        state.spawn_drop(now);

        log::info!(
            "Simulation initialized: field {}x{}, object size {}",
            state.config.width,
            state.config.height,
            state.config.object_size
        );

        Ok(state)
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a drop at a random column along the top edge
    pub(crate) fn spawn_drop(&mut self, now: Duration) -> GameEvent {
        let id = self.next_entity_id();
        let max_x = self.config.width - self.config.object_size;
        let x = self.source.next_spawn_x(max_x).min(max_x) as f32;
        self.drops.push(Raindrop {
            id,
            rect: Rect::square(x, self.config.height as f32, self.config.size()),
        });
        self.last_spawn = now;
        log::debug!("Spawned drop {} at x={}", id, x);
        GameEvent::Spawned { id, x }
    }
}

impl<S> SimulationState<S> {
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn catcher(&self) -> Rect {
        self.catcher
    }

    pub fn drops(&self) -> &[Raindrop] {
        &self.drops
    }

    /// Drops caught so far
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn last_spawn(&self) -> Duration {
        self.last_spawn
    }

    pub fn spawn_interval(&self) -> Duration {
        self.spawn_interval
    }
}

/// Build the starting state for a run
pub fn initialize<S: SpawnSource>(
    config: FieldConfig,
    source: S,
    now: Duration,
) -> Result<SimulationState<S>, ConfigError> {
    SimulationState::new(config, source, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl SpawnSource for Fixed {
        fn next_spawn_x(&mut self, _max_inclusive: u32) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_initial_state() {
        let state = initialize(FieldConfig::default(), SeededSpawner::new(1), Duration::ZERO).unwrap();
        assert_eq!(state.catcher().x(), 368.0);
        assert_eq!(state.catcher().y(), 20.0);
        assert_eq!(state.catcher().size.x, 64.0);
        assert_eq!(state.drops().len(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.last_spawn(), Duration::ZERO);
        assert_eq!(state.spawn_interval(), Duration::from_secs(1));
        assert_eq!(state.config(), &FieldConfig::default());

        let drop = state.drops()[0];
        assert_eq!(drop.id, 1);
        assert_eq!(drop.rect.y(), 480.0);
        assert!((0.0..=736.0).contains(&drop.rect.x()));
    }

    #[test]
    fn test_spawn_uses_source_and_resets_clock() {
        let mut state = initialize(FieldConfig::default(), Fixed(100), Duration::ZERO).unwrap();
        assert_eq!(state.drops()[0].rect.x(), 100.0);

        let now = Duration::from_millis(1500);
        let event = state.spawn_drop(now);
        assert_eq!(event, GameEvent::Spawned { id: 2, x: 100.0 });
        assert_eq!(state.last_spawn(), now);
        assert_eq!(state.drops().len(), 2);
    }

    #[test]
    fn test_out_of_range_source_is_clamped() {
        let state = initialize(FieldConfig::default(), Fixed(10_000), Duration::ZERO).unwrap();
        assert_eq!(state.drops()[0].rect.x(), 736.0);
    }

    #[test]
    fn test_initialize_rejects_huge_spawn_interval() {
        let config = FieldConfig {
            spawn_interval_secs: 1e20,
            ..Default::default()
        };
        assert!(matches!(
            initialize(config, Fixed(0), Duration::ZERO),
            Err(ConfigError::InvalidSpawnInterval(_))
        ));
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let config = FieldConfig {
            object_size: 900,
            ..Default::default()
        };
        assert!(initialize(config, Fixed(0), Duration::ZERO).is_err());
    }
}
