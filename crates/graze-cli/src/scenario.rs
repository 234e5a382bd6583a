//! Scenario files: the grid, the starting herd, and scripted path requests.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use graze_core::{Direction, GridPos};
use graze_grid::GridWorld;
use graze_herd::{Herd, HerdConfig};
use graze_nav::SearchAlgorithm;

/// A scenario, loaded from YAML. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub width: u32,
    pub height: u32,

    /// Regrowth cap.
    #[serde(default = "default_max_edible")]
    pub max_edible: u8,

    /// Edible level given to every passable tile before overrides.
    pub fill_edible: u8,

    /// Impassable tiles.
    pub ice: Vec<GridPos>,

    pub edible: Vec<EdibleOverride>,
    pub edge_costs: Vec<EdgeCostOverride>,

    /// Starting herd. Sheep ids are assigned in list order from 0.
    pub sheep: Vec<SheepSpec>,

    pub seed: u64,
    pub ticks: u64,

    /// Pause between ticks when running in realtime.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    pub herd: HerdConfig,

    pub paths: Vec<PathRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdibleOverride {
    pub at: GridPos,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeCostOverride {
    pub at: GridPos,
    pub dir: Direction,
    pub cost: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheepSpec {
    pub at: GridPos,
    #[serde(default = "default_health")]
    pub health: u8,
}

/// Ask a sheep to walk somewhere at the start of `tick`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRequest {
    pub tick: u64,
    pub sheep: u64,
    pub goal: GridPos,
    #[serde(default = "default_algorithm")]
    pub algorithm: SearchAlgorithm,
}

fn default_max_edible() -> u8 {
    graze_grid::DEFAULT_MAX_EDIBLE
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_health() -> u8 {
    5
}
fn default_algorithm() -> SearchAlgorithm {
    SearchAlgorithm::Heuristic
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            width: 16,
            height: 10,
            max_edible: default_max_edible(),
            fill_edible: 0,
            ice: Vec::new(),
            edible: Vec::new(),
            edge_costs: Vec::new(),
            sheep: Vec::new(),
            seed: 0,
            ticks: 100,
            tick_interval_ms: default_tick_interval_ms(),
            herd: HerdConfig::default(),
            paths: Vec::new(),
        }
    }
}

impl Scenario {
    /// Load a scenario from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario from {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse scenario from {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let scenario: Self = serde_yaml::from_str(content)?;
        Ok(scenario)
    }

    /// The pasture used when no scenario file is given.
    pub fn meadow() -> Self {
        let mut ice = Vec::new();
        for y in 2..8 {
            ice.push(GridPos::new(7, y));
        }
        Self {
            fill_edible: 2,
            ice,
            sheep: vec![
                SheepSpec {
                    at: GridPos::new(1, 1),
                    health: 10,
                },
                SheepSpec {
                    at: GridPos::new(2, 1),
                    health: 10,
                },
                SheepSpec {
                    at: GridPos::new(12, 6),
                    health: 3,
                },
            ],
            herd: HerdConfig {
                regrow_every_ticks: 10,
                ..HerdConfig::default()
            },
            paths: vec![PathRequest {
                tick: 5,
                sheep: 2,
                goal: GridPos::new(3, 8),
                algorithm: SearchAlgorithm::Heuristic,
            }],
            ..Self::default()
        }
    }

    /// Build the grid and populate the herd.
    pub fn build(&self) -> Result<Herd> {
        let mut grid = GridWorld::new(self.width, self.height)
            .context("Invalid grid dimensions")?
            .with_max_edible(self.max_edible);
        grid.fill_edible(self.fill_edible);

        for &pos in &self.ice {
            grid.set_passable(pos, false)
                .with_context(|| format!("Invalid ice tile {pos}"))?;
        }
        for o in &self.edible {
            grid.set_edible_level(o.at, o.level)
                .with_context(|| format!("Invalid edible override at {}", o.at))?;
        }
        for o in &self.edge_costs {
            grid.set_edge_cost(o.at, o.dir, o.cost)
                .with_context(|| format!("Invalid edge cost at {}", o.at))?;
        }

        let mut herd = Herd::new(grid, self.herd);
        for spec in &self.sheep {
            herd.spawn(spec.at, spec.health)
                .with_context(|| format!("Cannot place sheep at {}", spec.at))?;
        }
        Ok(herd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let scenario = Scenario::parse("{}").unwrap();
        assert_eq!(scenario.width, 16);
        assert_eq!(scenario.tick_interval_ms, 1000);
        assert_eq!(scenario.herd, HerdConfig::default());
        assert!(scenario.sheep.is_empty());
    }

    #[test]
    fn parses_a_full_scenario() {
        let yaml = r#"
width: 6
height: 4
fill_edible: 1
ice:
  - { x: 3, y: 0 }
edible:
  - { at: { x: 0, y: 0 }, level: 3 }
edge_costs:
  - { at: { x: 0, y: 0 }, dir: East, cost: 2.5 }
sheep:
  - { at: { x: 0, y: 0 }, health: 9 }
  - { at: { x: 5, y: 3 } }
seed: 42
ticks: 20
herd:
  regrow_every_ticks: 4
paths:
  - { tick: 2, sheep: 1, goal: { x: 0, y: 3 }, algorithm: uniform }
"#;
        let scenario = Scenario::parse(yaml).unwrap();
        assert_eq!(scenario.herd.regrow_every_ticks, 4);
        assert_eq!(scenario.herd.max_health, 10);
        assert_eq!(scenario.sheep[1].health, 5);
        assert_eq!(scenario.paths[0].algorithm, SearchAlgorithm::Uniform);

        let herd = scenario.build().unwrap();
        let grid = herd.grid();
        assert!(!grid.is_passable(GridPos::new(3, 0)).unwrap());
        assert_eq!(grid.edible_level(GridPos::new(0, 0)).unwrap(), 3);
        assert_eq!(grid.edible_level(GridPos::new(1, 0)).unwrap(), 1);
        assert_eq!(
            grid.edge_cost(GridPos::new(0, 0), GridPos::new(1, 0)).unwrap(),
            Some(2.5)
        );
        assert_eq!(herd.len(), 2);
    }

    #[test]
    fn path_algorithm_defaults_to_heuristic() {
        let scenario =
            Scenario::parse("paths:\n  - { tick: 0, sheep: 0, goal: { x: 1, y: 1 } }\n").unwrap();
        assert_eq!(scenario.paths[0].algorithm, SearchAlgorithm::Heuristic);
    }

    #[test]
    fn sheep_on_ice_is_rejected() {
        let scenario = Scenario::parse(
            "ice: [{ x: 1, y: 1 }]\nsheep:\n  - { at: { x: 1, y: 1 } }\n",
        )
        .unwrap();
        assert!(scenario.build().is_err());
    }

    #[test]
    fn shipped_scenarios_build() {
        Scenario::meadow().build().unwrap();
        let scenario = Scenario::parse(include_str!("../../../scenarios/pasture.yaml")).unwrap();
        scenario.build().unwrap();
    }
}
