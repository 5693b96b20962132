use serde::{Deserialize, Serialize};

/// Options governing random question generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionOptions {
    /// Smallest boundary value a question may use (inclusive).
    #[serde(default = "default_boundary_min")]
    pub boundary_min: i32,

    /// Largest boundary value a question may use (inclusive).
    /// Must be strictly greater than `boundary_min` so that compound
    /// questions can always find an ordered boundary pair.
    #[serde(default = "default_boundary_max")]
    pub boundary_max: i32,

    /// Probability that the next question is a compound inequality.
    #[serde(default = "default_compound_probability")]
    pub compound_probability: f64,
}

impl Default for QuestionOptions {
    fn default() -> Self {
        Self {
            boundary_min: default_boundary_min(),
            boundary_max: default_boundary_max(),
            compound_probability: default_compound_probability(),
        }
    }
}

/// Options governing graph snapshot interpretation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphOptions {
    /// Slack around a boundary tick before a shaded segment counts as
    /// extending to one side. Tolerates circle-radius rendering noise at
    /// the boundary tick itself.
    #[serde(default = "default_shading_margin")]
    pub shading_margin: f64,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            shading_margin: default_shading_margin(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub question: QuestionOptions,

    #[serde(default)]
    pub graph: GraphOptions,
}

impl SessionConfig {
    pub fn default_config() -> Self {
        SessionConfig {
            question: QuestionOptions::default(),
            graph: GraphOptions::default(),
        }
    }
}

//Default Functions

fn default_boundary_min() -> i32 {
    -5
}

fn default_boundary_max() -> i32 {
    5
}

fn default_compound_probability() -> f64 {
    0.5
}

fn default_shading_margin() -> f64 {
    0.5
}
