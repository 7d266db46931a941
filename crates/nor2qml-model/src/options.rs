//! Conversion options shared by the mapper and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Default authority used in `smi:` resource identifiers.
pub const DEFAULT_AUTHORITY_ID: &str = "wh.atis.ids";

/// Default network code written into waveform identifiers.
pub const DEFAULT_NETWORK_CODE: &str = "netcode";

/// How much of the event is written to QuakeML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Event, comments, origins and focal mechanisms only.
    Short,
    /// Adds magnitudes, picks, amplitudes and arrivals.
    #[default]
    Long,
}

impl OutputMode {
    pub fn is_long(&self) -> bool {
        matches!(self, OutputMode::Long)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Short => "short",
            OutputMode::Long => "long",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(OutputMode::Short),
            "long" => Ok(OutputMode::Long),
            _ => Err(ModelError::UnknownOutputMode(s.to_string())),
        }
    }
}

/// Nanometre to metre conversion for amplitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmplitudeConversion {
    /// `value * 1e-9`.
    #[default]
    Scale,
    /// `value ^ -9`, reproducing output of the legacy converter.
    LegacyPower,
}

impl AmplitudeConversion {
    pub fn to_meters(&self, nanometers: f64) -> f64 {
        match self {
            AmplitudeConversion::Scale => nanometers / 1e9,
            AmplitudeConversion::LegacyPower => nanometers.powi(-9),
        }
    }
}

impl FromStr for AmplitudeConversion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "scale" => Ok(AmplitudeConversion::Scale),
            "legacy_power" | "legacy" => Ok(AmplitudeConversion::LegacyPower),
            _ => Err(ModelError::UnknownAmplitudeConversion(s.to_string())),
        }
    }
}

/// Options for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    pub mode: OutputMode,
    pub authority_id: String,
    pub network_code: String,
    pub amplitude_conversion: AmplitudeConversion,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            authority_id: DEFAULT_AUTHORITY_ID.to_string(),
            network_code: DEFAULT_NETWORK_CODE.to_string(),
            amplitude_conversion: AmplitudeConversion::default(),
        }
    }
}

impl ConversionOptions {
    pub fn short() -> Self {
        Self::default().with_mode(OutputMode::Short)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_authority_id(mut self, authority_id: impl Into<String>) -> Self {
        self.authority_id = authority_id.into();
        self
    }

    #[must_use]
    pub fn with_network_code(mut self, network_code: impl Into<String>) -> Self {
        self.network_code = network_code.into();
        self
    }

    #[must_use]
    pub fn with_amplitude_conversion(mut self, conversion: AmplitudeConversion) -> Self {
        self.amplitude_conversion = conversion;
        self
    }
}
