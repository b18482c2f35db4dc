use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use sui_hero_kit_config::PackageConfig;

pub struct FixtureLoader {
    fixtures_dir: PathBuf,
}

impl FixtureLoader {
    pub fn new(fixtures_dir: impl AsRef<Path>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.fixtures_dir.join(path)
        }
    }

    /// Load a JSON fixture file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Value> {
        let full_path = self.resolve(path.as_ref());

        let content = std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read fixture file: {:?}", full_path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON fixture: {:?}", full_path))
    }

    /// Load a JSON fixture file into `T`
    pub fn load_as<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();
        serde_json::from_value(self.load(path)?)
            .with_context(|| format!("Fixture {:?} does not match the expected shape", path))
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path.as_ref()).exists()
    }

    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }

    /// The ids the recorded responses were captured with
    pub fn scenario(&self) -> Result<Scenario> {
        self.load_as("package.json")
    }
}

/// Contents of `package.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub package_id: String,
    pub hero_id: String,
    pub sender: String,
    pub recipient: String,
    pub transactions: ScenarioTransactions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioTransactions {
    pub mint_hero_with_sword: String,
    pub transfer_hero: String,
    pub failed_mint: String,
}

impl Scenario {
    pub fn package(&self) -> PackageConfig {
        PackageConfig::new(self.package_id.clone())
    }
}
