use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_one() -> f64 {
    1.0
}

fn default_process_noise() -> f64 {
    0.1
}

fn default_window_size() -> usize {
    5
}

fn default_alpha() -> f64 {
    0.3
}

/// Serializable choice of smoothing filter plus its parameters.
///
/// The tagged layout (`type` + `params`) keeps configuration files stable
/// when parameters evolve; `FilterKind` is the bare discriminant for
/// enumeration and parsing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(FilterKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum FilterChoice {
    #[strum_discriminants(strum(
        message = "Scalar Kalman",
        detailed_message = "Recursive linear-Gaussian estimator (predict, gain, correct)."
    ))]
    Kalman(KalmanParameters),

    #[strum_discriminants(strum(
        message = "Sliding-Window Mean",
        detailed_message = "Arithmetic mean over the last N samples with oldest-first eviction."
    ))]
    SlidingWindow(SlidingWindowParameters),

    #[strum_discriminants(strum(
        message = "EWMA",
        detailed_message = "Exponentially weighted moving average with clamped alpha."
    ))]
    Ewma(EwmaParameters),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KalmanParameters {
    #[schemars(
        title = "Initial estimate",
        description = "Starting value of the state estimate."
    )]
    pub initial_estimate: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "State transition (A)",
        description = "How the previous state maps to the current one.",
        default = "default_one"
    )]
    pub state_transition: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "Observation (H)",
        description = "How the current state maps to a measurement.",
        default = "default_one"
    )]
    pub observation: f64,

    #[serde(default = "default_process_noise")]
    #[schemars(
        title = "Process noise (Q)",
        description = "Variance of the modeled state evolution noise.",
        default = "default_process_noise"
    )]
    pub process_noise: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "Observation noise (R)",
        description = "Variance of the measurement noise.",
        default = "default_one"
    )]
    pub observation_noise: f64,

    #[serde(default = "default_one")]
    #[schemars(
        title = "Initial covariance (P)",
        description = "Starting error covariance of the estimate.",
        default = "default_one"
    )]
    pub initial_covariance: f64,
}

impl Default for KalmanParameters {
    fn default() -> Self {
        Self {
            initial_estimate: 0.0,
            state_transition: 1.0,
            observation: 1.0,
            process_noise: 0.1,
            observation_noise: 1.0,
            initial_covariance: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SlidingWindowParameters {
    #[serde(default = "default_window_size")]
    #[schemars(
        title = "Window size",
        description = "Number of most recent samples the mean covers.",
        default = "default_window_size"
    )]
    pub window_size: usize,
}

impl Default for SlidingWindowParameters {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EwmaParameters {
    #[serde(default = "default_alpha")]
    #[schemars(
        title = "Alpha",
        description = "Smoothing weight in [0, 1]; higher favors new samples.",
        default = "default_alpha"
    )]
    pub alpha: f64,
}

impl Default for EwmaParameters {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
        }
    }
}

impl FilterChoice {
    /// JSON Schema for the whole tagged enum.
    pub fn schema() -> Schema {
        schema_for!(FilterChoice)
    }

    /// Bare discriminant of this choice.
    pub fn kind(&self) -> FilterKind {
        FilterKind::from(self)
    }

    /// Default `params` JSON for a given kind.
    pub fn default_params(kind: FilterKind) -> Value {
        let params = match kind {
            FilterKind::Kalman => serde_json::to_value(KalmanParameters::default()),
            FilterKind::SlidingWindow => serde_json::to_value(SlidingWindowParameters::default()),
            FilterKind::Ewma => serde_json::to_value(EwmaParameters::default()),
        };
        params.unwrap_or(Value::Null)
    }

    /// Builds the typed enum from kind + params.
    pub fn from_parts(kind: FilterKind, params: Value) -> anyhow::Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }
}
