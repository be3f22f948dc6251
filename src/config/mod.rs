//! Test-case recipe configuration

use crate::{GenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shape of a single generated test case
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaseRecipe {
    /// `n` skewed integers in `[min, max]`
    Array {
        /// Element count
        n: usize,
        /// Lower bound (inclusive)
        min: i64,
        /// Upper bound (inclusive)
        max: i64,
        /// Skew toward `max` (positive) or `min` (negative)
        #[serde(default)]
        skew: i32,
    },
    /// Random tree on `n` nodes
    Tree {
        /// Node count
        n: usize,
        /// Chain-likeness; 0 gives logarithmic height
        #[serde(default)]
        skew: i32,
    },
    /// Directed graph with every node reachable from a start node
    ConnectedGraph {
        /// Node count
        n: usize,
        /// Edge count, at least `n - 1`
        m: usize,
        /// Shape of the spanning tree
        #[serde(default)]
        skew: i32,
    },
    /// `num` values picked from distinct positions of `values`
    Sample {
        /// Pool to draw from
        values: Vec<i64>,
        /// Number of picks
        num: usize,
    },
}

fn default_one_indexed() -> bool {
    true
}

fn default_extension() -> String {
    "in".to_string()
}

/// Generator configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base seed; derived from the command line when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Print node ids starting from 1
    #[serde(default = "default_one_indexed")]
    pub one_indexed: bool,
    /// Extension of each test file
    #[serde(default = "default_extension")]
    pub extension: String,
    /// What each test case contains
    pub recipe: CaseRecipe,
}

impl GeneratorConfig {
    /// Wrap a recipe with default settings
    pub fn new(recipe: CaseRecipe) -> Self {
        GeneratorConfig {
            seed: None,
            one_indexed: default_one_indexed(),
            extension: default_extension(),
            recipe,
        }
    }

    /// Create config for uniform arrays
    pub fn for_array(n: usize, min: i64, max: i64) -> Self {
        Self::new(CaseRecipe::Array { n, min, max, skew: 0 })
    }

    /// Create config for random trees
    pub fn for_tree(n: usize) -> Self {
        Self::new(CaseRecipe::Tree { n, skew: 0 })
    }

    /// Create config for connected directed graphs
    pub fn for_graph(n: usize, m: usize) -> Self {
        Self::new(CaseRecipe::ConnectedGraph { n, m, skew: 0 })
    }

    /// Set the base seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(GenError::InvalidConfig(msg));

        if self.extension.is_empty() {
            return invalid("Extension must not be empty".to_string());
        }

        match &self.recipe {
            CaseRecipe::Array { min, max, .. } => {
                if min > max {
                    return invalid(format!("Array bounds are reversed: {min} > {max}"));
                }
            }
            CaseRecipe::Tree { .. } => {}
            CaseRecipe::ConnectedGraph { n, m, .. } => {
                if *n == 0 {
                    return invalid("Graph must have at least one node".to_string());
                }
                if *m < n - 1 {
                    return invalid(format!("{m} edges cannot connect {n} nodes"));
                }
                if *n == 1 && *m > 0 {
                    return invalid("Extra edges need at least two nodes".to_string());
                }
            }
            CaseRecipe::Sample { values, num } => {
                if *num == 0 || *num > values.len() {
                    return invalid(format!(
                        "Cannot pick {num} of {} values",
                        values.len()
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_tree(10)
    }
}
