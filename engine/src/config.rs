use std::io::ErrorKind;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::game::GameSettings;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub settings: GameSettings,
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.settings.validate()
    }
}

pub struct YamlConfigSerializer;

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}

pub struct ConfigManager<TProvider = FileContentConfigProvider>
where
    TProvider: ConfigContentProvider,
{
    provider: TProvider,
    serializer: YamlConfigSerializer,
    cached: Mutex<Option<GameConfig>>,
}

impl ConfigManager<FileContentConfigProvider> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TProvider> ConfigManager<TProvider>
where
    TProvider: ConfigContentProvider,
{
    pub fn new(provider: TProvider) -> Self {
        Self {
            provider,
            serializer: YamlConfigSerializer::new(),
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<GameConfig, String> {
        let mut current = self.cached.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(content) = self.provider.get_config_content()? {
            let config: GameConfig = self.serializer.deserialize(&content)?;
            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(GameConfig::default())
    }

    pub fn set_config(&self, config: &GameConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized = self.serializer.serialize(config)?;
        self.provider.set_config_content(&serialized)?;

        let mut current = self.cached.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}
