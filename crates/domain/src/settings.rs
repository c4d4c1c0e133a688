use serde::{Deserialize, Serialize};

use crate::{ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait SettingsService: Send + Sync + 'static {
    async fn get_settings(&self) -> Result<Settings, ReadError>;
    async fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository: Send + Sync + 'static {
    /// Returns the default settings if none were written yet.
    async fn read_settings(&self) -> Result<Settings, ReadError>;
    async fn write_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Pick a random sample of the ranked candidates instead of the first ones.
    pub shuffle_candidates: bool,
    /// Fixed seed for reproducible workouts.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shuffle_candidates: true,
            seed: None,
        }
    }
}
