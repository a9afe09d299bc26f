use serde::{Deserialize, Serialize};

/// Immutable game configuration, built once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the play field in cells
    pub grid_width: usize,
    /// Height of the play field in cells
    pub grid_height: usize,
    /// Snake length at the start of a round
    pub initial_snake_length: usize,
    /// Tick rate (ticks per second) at score zero
    pub base_speed: u32,
    /// Points required for each +1 to the tick rate
    pub speed_divisor: u32,
    /// Upper bound on the tick rate
    pub speed_cap: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            initial_snake_length: 1,
            base_speed: 10,
            speed_divisor: 5,
            speed_cap: 20,
        }
    }
}

impl GameConfig {
    /// Small grid for tests
    pub fn small() -> Self {
        Self {
            grid_width: 10,
            grid_height: 10,
            ..Default::default()
        }
    }

    /// Tick rate for a score: one step faster per `speed_divisor` points,
    /// capped at `speed_cap`
    pub fn speed_for(&self, score: u32) -> u32 {
        (self.base_speed + score / self.speed_divisor).min(self.speed_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.initial_snake_length, 1);
        assert_eq!(config.base_speed, 10);
    }

    #[test]
    fn test_speed_curve() {
        let config = GameConfig::default();
        assert_eq!(config.speed_for(0), 10);
        assert_eq!(config.speed_for(4), 10);
        assert_eq!(config.speed_for(5), 11);
        assert_eq!(config.speed_for(49), 19);
        assert_eq!(config.speed_for(50), 20);
        assert_eq!(config.speed_for(100), 20);
    }
}
