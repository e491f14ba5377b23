//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the core. It provides:
//! 1. **Defaults:** Baseline machine parameters (fetch width, unit counts, multipliers).
//! 2. **Structures:** A small hierarchical config for general options and the pipeline.
//! 3. **Derived sizes:** Reservation-station and dispatch-queue capacities.
//! 4. **Validation:** Rejection of machines that could never make progress.
//!
//! Configuration is supplied as JSON (`Config::from_json`), or use
//! `Config::default()` and override fields from the command line.

use serde::Deserialize;

use crate::common::{ConfigError, SimError, UnitClass};

/// Default configuration constants for the simulator.
mod defaults {
    /// Instructions fetched per cycle.
    pub const FETCH_WIDTH: usize = 4;

    /// Number of single-stage (K0) lanes.
    pub const K0_UNITS: usize = 1;

    /// Number of two-stage (K1) lanes.
    pub const K1_UNITS: usize = 2;

    /// Number of three-stage (K2) lanes.
    pub const K2_UNITS: usize = 3;

    /// Dispatch queue multiplier (D).
    ///
    /// The dispatch queue holds `D` times the total number of reservation
    /// stations.
    pub const DISPATCH_MULTIPLIER: usize = 2;

    /// Scheduling multiplier (M).
    ///
    /// Each class gets `M` reservation stations per functional unit.
    pub const SCHEDULE_MULTIPLIER: usize = 2;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use procsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.pipeline.fetch_width, 4);
/// assert_eq!(config.pipeline.dispatch_queue_capacity(), 24);
/// ```
///
/// Deserializing from JSON; missing fields take their defaults:
///
/// ```
/// use procsim_core::common::UnitClass;
/// use procsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "record_timeline": true },
///     "pipeline": { "fetch_width": 8, "k2_units": 1, "schedule_multiplier": 4 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.pipeline.fetch_width, 8);
/// assert_eq!(config.pipeline.k0_units, 1);
/// assert_eq!(config.pipeline.rs_capacity(UnitClass::K2), 4);
/// assert!(config.general.record_timeline);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline geometry
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigParse`] for malformed JSON and
    /// [`SimError::Config`] when the parsed values fail [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configured machine can make forward progress.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: zero fetch width, a class
    /// without units, or a zero multiplier.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        self.pipeline.validate()
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace events (the CLI raises its log filter to `trace`).
    #[serde(default)]
    pub trace_instructions: bool,

    /// Record the per-instruction stage timeline and the retirement order.
    /// Both grow with the trace, so they are off unless asked for.
    #[serde(default)]
    pub record_timeline: bool,
}

/// Pipeline geometry: fetch width, lanes per class and queue multipliers.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Instructions fetched per cycle (F)
    #[serde(default = "PipelineConfig::default_fetch_width")]
    pub fetch_width: usize,

    /// Number of K0 lanes
    #[serde(default = "PipelineConfig::default_k0_units")]
    pub k0_units: usize,

    /// Number of K1 lanes
    #[serde(default = "PipelineConfig::default_k1_units")]
    pub k1_units: usize,

    /// Number of K2 lanes
    #[serde(default = "PipelineConfig::default_k2_units")]
    pub k2_units: usize,

    /// Dispatch queue multiplier (D)
    #[serde(default = "PipelineConfig::default_dispatch_multiplier")]
    pub dispatch_multiplier: usize,

    /// Reservation stations per functional unit (M)
    #[serde(default = "PipelineConfig::default_schedule_multiplier")]
    pub schedule_multiplier: usize,
}

impl PipelineConfig {
    /// Returns the default fetch width.
    const fn default_fetch_width() -> usize {
        defaults::FETCH_WIDTH
    }

    /// Returns the default K0 unit count.
    const fn default_k0_units() -> usize {
        defaults::K0_UNITS
    }

    /// Returns the default K1 unit count.
    const fn default_k1_units() -> usize {
        defaults::K1_UNITS
    }

    /// Returns the default K2 unit count.
    const fn default_k2_units() -> usize {
        defaults::K2_UNITS
    }

    /// Returns the default dispatch multiplier.
    const fn default_dispatch_multiplier() -> usize {
        defaults::DISPATCH_MULTIPLIER
    }

    /// Returns the default scheduling multiplier.
    const fn default_schedule_multiplier() -> usize {
        defaults::SCHEDULE_MULTIPLIER
    }

    /// Number of functional-unit lanes of `class`.
    pub const fn units(&self, class: UnitClass) -> usize {
        match class {
            UnitClass::K0 => self.k0_units,
            UnitClass::K1 => self.k1_units,
            UnitClass::K2 => self.k2_units,
        }
    }

    /// Reservation-station capacity of `class` (`units × M`).
    pub const fn rs_capacity(&self, class: UnitClass) -> usize {
        self.units(class) * self.schedule_multiplier
    }

    /// Total reservation stations across all classes.
    pub const fn total_rs_capacity(&self) -> usize {
        self.rs_capacity(UnitClass::K0)
            + self.rs_capacity(UnitClass::K1)
            + self.rs_capacity(UnitClass::K2)
    }

    /// Dispatch queue capacity (`D × total reservation stations`).
    pub const fn dispatch_queue_capacity(&self) -> usize {
        self.dispatch_multiplier * self.total_rs_capacity()
    }

    /// Checks the pipeline geometry.
    ///
    /// # Errors
    ///
    /// Returns the first zero-valued parameter as a [`ConfigError`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_width == 0 {
            return Err(ConfigError::ZeroFetchWidth);
        }
        let mut i = 0;
        while i < UnitClass::ALL.len() {
            let class = UnitClass::ALL[i];
            if self.units(class) == 0 {
                return Err(ConfigError::ZeroUnits { class });
            }
            i += 1;
        }
        if self.dispatch_multiplier == 0 {
            return Err(ConfigError::ZeroMultiplier { name: "dispatch" });
        }
        if self.schedule_multiplier == 0 {
            return Err(ConfigError::ZeroMultiplier { name: "schedule" });
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fetch_width: defaults::FETCH_WIDTH,
            k0_units: defaults::K0_UNITS,
            k1_units: defaults::K1_UNITS,
            k2_units: defaults::K2_UNITS,
            dispatch_multiplier: defaults::DISPATCH_MULTIPLIER,
            schedule_multiplier: defaults::SCHEDULE_MULTIPLIER,
        }
    }
}
