//! Nordic header records.
//!
//! Every header line carries a single-character type code in column 80.
//! The kinds the converter understands get their own struct; anything else
//! is kept as [`OtherHeader`] so the source order stays intact.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Discriminator of a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderKind {
    /// Type 1: hypocenter solution.
    Main,
    /// Type 2: macroseismic observations.
    Macroseismic,
    /// Type 3: free-text comment.
    Comment,
    /// Type 5 (`E` in SEISAN files): hypocenter error estimates.
    Error,
    /// Type 6: waveform file reference.
    Waveform,
    /// Any other type code; carried but never emitted.
    Other,
}

impl HeaderKind {
    /// Classify a column-80 type code.
    ///
    /// Blank and `4` belong to phase lines and `7` to the phase caption line,
    /// so those return `None`.
    pub fn from_type_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(HeaderKind::Main),
            '2' => Some(HeaderKind::Macroseismic),
            '3' => Some(HeaderKind::Comment),
            '5' | 'E' => Some(HeaderKind::Error),
            '6' => Some(HeaderKind::Waveform),
            ' ' | '4' | '7' => None,
            _ => Some(HeaderKind::Other),
        }
    }

    /// Numeric type code as used in the Nordic format description.
    pub fn type_code(&self) -> Option<u8> {
        match self {
            HeaderKind::Main => Some(1),
            HeaderKind::Macroseismic => Some(2),
            HeaderKind::Comment => Some(3),
            HeaderKind::Error => Some(5),
            HeaderKind::Waveform => Some(6),
            HeaderKind::Other => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderKind::Main => "main",
            HeaderKind::Macroseismic => "macroseismic",
            HeaderKind::Comment => "comment",
            HeaderKind::Error => "error",
            HeaderKind::Waveform => "waveform",
            HeaderKind::Other => "other",
        }
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Type 1 line: one origin solution with up to three magnitudes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainHeader {
    pub date: Option<NaiveDate>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<f64>,
    pub location_model: Option<char>,
    pub distance_indicator: Option<char>,
    pub event_desc_id: Option<char>,
    pub epicenter_latitude: Option<f64>,
    pub epicenter_longitude: Option<f64>,
    /// Depth in kilometres.
    pub depth: Option<f64>,
    pub depth_control: Option<char>,
    pub locating_indicator: Option<char>,
    pub epicenter_reporting_agency: Option<String>,
    pub stations_used: Option<u32>,
    pub rms_time_residuals: Option<f64>,
    pub magnitude_1: Option<f64>,
    pub type_of_magnitude_1: Option<char>,
    pub magnitude_reporting_agency_1: Option<String>,
    pub magnitude_2: Option<f64>,
    pub type_of_magnitude_2: Option<char>,
    pub magnitude_reporting_agency_2: Option<String>,
    pub magnitude_3: Option<f64>,
    pub type_of_magnitude_3: Option<char>,
    pub magnitude_reporting_agency_3: Option<String>,
}

/// Type 2 line: macroseismic summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacroseismicHeader {
    pub description: Option<String>,
    pub diastrophism_code: Option<char>,
    pub tsunami_code: Option<char>,
    pub seiche_code: Option<char>,
    pub cultural_effects: Option<char>,
    pub unusual_effects: Option<char>,
    pub maximum_observed_intensity: Option<u8>,
    pub maximum_intensity_qualifier: Option<char>,
    pub intensity_scale: Option<String>,
    pub macroseismic_latitude: Option<f64>,
    pub macroseismic_longitude: Option<f64>,
    pub macroseismic_magnitude: Option<f64>,
    pub type_of_magnitude: Option<char>,
    pub logarithm_of_radius: Option<f64>,
    pub logarithm_of_area_1: Option<f64>,
    pub bordering_intensity_1: Option<u8>,
    pub logarithm_of_area_2: Option<f64>,
    pub bordering_intensity_2: Option<u8>,
    pub quality_rank: Option<char>,
    pub reporting_agency: Option<String>,
}

/// Type 3 line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentHeader {
    pub h_comment: Option<String>,
}

/// Type 5 line: uncertainties of the hypocenter solution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorHeader {
    /// Azimuthal gap in degrees.
    pub gap: Option<u16>,
    pub second_error: Option<f64>,
    pub epicenter_latitude_error: Option<f64>,
    pub epicenter_longitude_error: Option<f64>,
    pub depth_error: Option<f64>,
    pub covariance_xy: Option<f64>,
    pub magnitude_error: Option<f64>,
}

/// Type 6 line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveformHeader {
    pub waveform_info: Option<String>,
}

/// A header line of a kind the converter does not interpret.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherHeader {
    pub type_code: char,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Header {
    Main(MainHeader),
    Macroseismic(MacroseismicHeader),
    Comment(CommentHeader),
    Error(ErrorHeader),
    Waveform(WaveformHeader),
    Other(OtherHeader),
}

impl Header {
    pub fn kind(&self) -> HeaderKind {
        match self {
            Header::Main(_) => HeaderKind::Main,
            Header::Macroseismic(_) => HeaderKind::Macroseismic,
            Header::Comment(_) => HeaderKind::Comment,
            Header::Error(_) => HeaderKind::Error,
            Header::Waveform(_) => HeaderKind::Waveform,
            Header::Other(_) => HeaderKind::Other,
        }
    }

    pub fn as_main(&self) -> Option<&MainHeader> {
        match self {
            Header::Main(header) => Some(header),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorHeader> {
        match self {
            Header::Error(header) => Some(header),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&CommentHeader> {
        match self {
            Header::Comment(header) => Some(header),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_code() {
        assert_eq!(HeaderKind::from_type_code('1'), Some(HeaderKind::Main));
        assert_eq!(HeaderKind::from_type_code('E'), Some(HeaderKind::Error));
        assert_eq!(HeaderKind::from_type_code('5'), Some(HeaderKind::Error));
        assert_eq!(HeaderKind::from_type_code('I'), Some(HeaderKind::Other));
        assert_eq!(HeaderKind::from_type_code(' '), None);
        assert_eq!(HeaderKind::from_type_code('4'), None);
        assert_eq!(HeaderKind::from_type_code('7'), None);
    }

    #[test]
    fn test_header_kind_matches_variant() {
        let header = Header::Comment(CommentHeader {
            h_comment: Some("felt in Helsinki".to_string()),
        });
        assert_eq!(header.kind(), HeaderKind::Comment);
        assert!(header.as_comment().is_some());
        assert!(header.as_main().is_none());
    }
}
