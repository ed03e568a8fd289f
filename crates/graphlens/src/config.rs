//! Tunable parameters for the iterative algorithms and the layout engine.
//!
//! Every section has defaults matching the engine's reference behavior, so
//! a YAML file only needs the keys it wants to change:
//!
//! ```yaml
//! community:
//!   resolution: 1.5
//!   seed: 42
//! layout:
//!   iterations: 200
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default convergence threshold for LeaderRank and community detection.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Configuration for every tunable engine component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    /// LeaderRank centrality
    pub leader_rank: LeaderRankConfig,
    /// Greedy modularity community detection
    pub community: CommunityConfig,
    /// Native force-directed layout
    pub layout: LayoutConfig,
    /// Delegated force-simulation layout
    pub simulation: SimulationConfig,
}

impl EngineConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, [`Error::Yaml`] if it
    /// is not valid YAML for this structure, and [`Error::Config`] if a value
    /// fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] on a parse failure or an unknown value type,
    /// and [`Error::Config`] if a value fails [`validate`](Self::validate).
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every section for unusable values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first offending key, e.g. a
    /// non-positive epsilon, a zero iteration cap or a damping factor
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        self.leader_rank.validate()?;
        self.community.validate()?;
        self.layout.validate()?;
        self.simulation.validate()
    }
}

/// LeaderRank iteration control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LeaderRankConfig {
    /// Stop once the largest per-vertex rank change falls below this
    pub epsilon: f64,
    /// Hard cap on iterations for inputs that converge slowly
    pub max_iterations: u32,
}

impl Default for LeaderRankConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: 10_000,
        }
    }
}

impl LeaderRankConfig {
    fn validate(&self) -> Result<()> {
        positive("leader-rank.epsilon", self.epsilon)?;
        nonzero("leader-rank.max-iterations", self.max_iterations)
    }
}

/// Community detection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CommunityConfig {
    /// Weight of the null-model penalty; above 1 favors smaller communities
    pub resolution: f64,
    /// Minimum modularity improvement that counts as progress
    pub epsilon: f64,
    /// Hard cap on local-move rounds
    pub max_rounds: u32,
    /// Seed for the vertex visiting order; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            resolution: 1.0,
            epsilon: DEFAULT_EPSILON,
            max_rounds: 100,
            seed: None,
        }
    }
}

impl CommunityConfig {
    /// Default parameters with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.resolution.is_finite() || self.resolution < 0.0 {
            return Err(Error::config(format!(
                "community.resolution must be a non-negative number, got {}",
                self.resolution
            )));
        }
        positive("community.epsilon", self.epsilon)?;
        nonzero("community.max-rounds", self.max_rounds)
    }
}

/// Native force-directed layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LayoutConfig {
    /// Inverse-square repulsion constant between every vertex pair
    pub repulsion: f64,
    /// Spring constant along edges
    pub attraction: f64,
    /// Velocity damping applied to each displacement
    pub damping: f64,
    /// Fixed number of relaxation iterations
    pub iterations: u32,
    /// Extra short-range repulsion for overlapping vertices
    pub overlap_prevention: f64,
    /// Minimum allowed distance as a multiple of the default radius
    pub min_distance_multiplier: f64,
    /// Radius restored by `reset_vertices`
    pub default_vertex_radius: f64,
    /// Width restored by `reset_edges`
    pub default_edge_width: f32,
    /// Seed for the initial scatter; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            repulsion: 300.0,
            attraction: 0.1,
            damping: 0.8,
            iterations: 500,
            overlap_prevention: 1500.0,
            min_distance_multiplier: 3.0,
            default_vertex_radius: 25.0,
            default_edge_width: 1.0,
            seed: None,
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(Error::config(format!(
                "layout.damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        positive("layout.default-vertex-radius", self.default_vertex_radius)?;
        positive("layout.default-edge-width", f64::from(self.default_edge_width))?;
        for (name, value) in [
            ("layout.repulsion", self.repulsion),
            ("layout.attraction", self.attraction),
            ("layout.overlap-prevention", self.overlap_prevention),
            ("layout.min-distance-multiplier", self.min_distance_multiplier),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Parameters for the delegated `force_graph` simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SimulationConfig {
    /// Charge repelling every pair of nodes
    pub charge: f32,
    /// Spring constant along edges
    pub spring: f32,
    /// Upper bound on the force applied to one node per step
    pub max_force: f32,
    /// Velocity scale
    pub node_speed: f32,
    /// Fraction of velocity kept between steps
    pub damping_factor: f32,
    /// Maximum number of simulation steps
    pub steps: u32,
    /// Simulated seconds per step
    pub time_step: f32,
    /// Steps without overlap improvement before stopping early
    pub patience: u32,
    /// Radius restored by `reset_vertices`
    pub default_vertex_radius: f64,
    /// Width restored by `reset_edges`
    pub default_edge_width: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            charge: 150.0,
            spring: 0.05,
            max_force: 100.0,
            node_speed: 3000.0,
            damping_factor: 0.9,
            steps: 1000,
            time_step: 0.016,
            patience: 50,
            default_vertex_radius: 25.0,
            default_edge_width: 1.0,
        }
    }
}

impl SimulationConfig {
    fn validate(&self) -> Result<()> {
        nonzero("simulation.steps", self.steps)?;
        positive("simulation.time-step", f64::from(self.time_step))?;
        positive("simulation.default-vertex-radius", self.default_vertex_radius)?;
        positive("simulation.default-edge-width", f64::from(self.default_edge_width))
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::config(format!("{name} must be positive, got {value}")))
    }
}

fn nonzero(name: &str, value: u32) -> Result<()> {
    if value == 0 {
        Err(Error::config(format!("{name} must be at least 1")))
    } else {
        Ok(())
    }
}
