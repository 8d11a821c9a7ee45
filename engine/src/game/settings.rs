use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub tick_interval_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: defaults::FIELD_WIDTH,
            field_height: defaults::FIELD_HEIGHT,
            tick_interval_ms: defaults::TICK_INTERVAL_MS,
        }
    }
}

impl GameSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 100 {
            return Err("Field width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("Field height must be between 10 and 100".to_string());
        }
        if self.tick_interval_ms < 1 || self.tick_interval_ms > 1000 {
            return Err("Tick interval must be between 1ms and 1000ms".to_string());
        }
        Ok(())
    }
}
