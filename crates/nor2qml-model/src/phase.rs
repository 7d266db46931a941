use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Day offset of a phase arrival relative to the event date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInfo {
    #[default]
    SameDay,
    /// `+`: the arrival falls on the day after the origin date.
    NextDay,
    /// `-`: the arrival falls on the day before the origin date.
    PreviousDay,
}

impl TimeInfo {
    pub fn from_flag(flag: char) -> Result<Self> {
        match flag {
            ' ' => Ok(TimeInfo::SameDay),
            '+' => Ok(TimeInfo::NextDay),
            '-' => Ok(TimeInfo::PreviousDay),
            other => Err(ModelError::UnknownTimeInfo(other)),
        }
    }

    pub fn flag(&self) -> char {
        match self {
            TimeInfo::SameDay => ' ',
            TimeInfo::NextDay => '+',
            TimeInfo::PreviousDay => '-',
        }
    }

    /// Day shift to apply to the event date.
    pub fn day_offset(&self) -> i64 {
        match self {
            TimeInfo::SameDay => 0,
            TimeInfo::NextDay => 1,
            TimeInfo::PreviousDay => -1,
        }
    }
}

impl fmt::Display for TimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// One observed phase at one station.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseData {
    pub station_code: Option<String>,
    pub sp_instrument_type: Option<char>,
    pub sp_component: Option<char>,
    pub quality_indicator: Option<char>,
    pub phase_type: Option<String>,
    pub weight: Option<u8>,
    pub automatic: Option<char>,
    pub first_motion: Option<char>,
    pub time_info: TimeInfo,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<f64>,
    /// Duration to noise, seconds.
    pub signal_duration: Option<u32>,
    /// Zero-peak amplitude in nanometres.
    pub max_amplitude: Option<f64>,
    pub max_amplitude_period: Option<f64>,
    pub back_azimuth: Option<f64>,
    pub apparent_velocity: Option<f64>,
    pub signal_to_noise: Option<f64>,
    pub azimuth_residual: Option<i32>,
    pub travel_time_residual: Option<f64>,
    pub location_weight: Option<u8>,
    /// Epicentral distance in kilometres.
    pub epicenter_distance: Option<f64>,
    pub epicenter_to_station_azimuth: Option<u16>,
}

impl PhaseData {
    /// Phase type when present and not blank.
    pub fn phase(&self) -> Option<&str> {
        self.phase_type
            .as_deref()
            .map(str::trim)
            .filter(|phase| !phase.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_info_flags() {
        assert_eq!(TimeInfo::from_flag('+').unwrap(), TimeInfo::NextDay);
        assert_eq!(TimeInfo::from_flag('-').unwrap(), TimeInfo::PreviousDay);
        assert_eq!(TimeInfo::from_flag(' ').unwrap(), TimeInfo::SameDay);
        assert!(TimeInfo::from_flag('x').is_err());
        assert_eq!(TimeInfo::NextDay.day_offset(), 1);
    }

    #[test]
    fn test_blank_phase_is_none() {
        let phase = PhaseData {
            phase_type: Some("   ".to_string()),
            ..PhaseData::default()
        };
        assert_eq!(phase.phase(), None);
    }
}
