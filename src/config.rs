use serde::Deserialize;
use std::fs;
use std::path::Path;
use log::warn;

/// Initial capacity of the built-in demonstration walk.
pub const DEFAULT_DEMO_CAPACITY: usize = 3;

/// Raw shape of a TOML scenario file. Every field is optional; gaps are
/// filled from the built-in walk.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScenarioFile {
    #[serde(default)]
    pub capacity: Option<usize>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A validated demonstration scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub capacity: usize,
    pub items: Vec<String>,
}

impl Scenario {
    /// The walk used when no scenario file is given: capacity 3 and
    /// items `a` through `h`, enough to show wrap-around and one resize.
    pub fn built_in() -> Self {
        Self {
            capacity: DEFAULT_DEMO_CAPACITY,
            items: default_items(),
        }
    }
}

fn default_items() -> Vec<String> {
    ["a", "b", "c", "d", "e", "f", "g", "h"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Scenario file not found: {}", path).into());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read scenario file {}: {}", path, e))?;

    let scenario = parse_scenario(&content)
        .map_err(|e| format!("Bad scenario file {}: {}", path, e))?;

    log::info!("Scenario loaded from: {}", path);
    log::info!(
        "Scenario: capacity {}, {} items",
        scenario.capacity,
        scenario.items.len()
    );

    Ok(scenario)
}

fn parse_scenario(content: &str) -> Result<Scenario, Box<dyn std::error::Error>> {
    let file: ScenarioFile = toml::from_str(content)?;

    let capacity = file.capacity.unwrap_or(DEFAULT_DEMO_CAPACITY);
    if capacity < 1 {
        return Err(format!("capacity must be >= 1, got {}", capacity).into());
    }

    let items = if file.items.is_empty() {
        warn!("Scenario lists no items - falling back to the built-in walk");
        default_items()
    } else {
        file.items
    };

    Ok(Scenario { capacity, items })
}
