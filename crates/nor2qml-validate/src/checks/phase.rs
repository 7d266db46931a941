//! Phase data row checks.

use nor2qml_model::{Issue, PhaseData};

use crate::util::{check_non_negative, check_range, check_range_exclusive, check_text};

/// Allowed weight codes; 9 marks a phase used only for display.
const WEIGHTS: [u8; 6] = [0, 1, 2, 3, 4, 9];

pub fn check(phase: &PhaseData) -> Vec<Issue> {
    let mut issues = Vec::new();

    check_text(&mut issues, "station_code", phase.station_code.as_deref());
    check_range(&mut issues, "hour", phase.hour.map(f64::from), 0.0, 23.0);
    check_range(&mut issues, "minute", phase.minute.map(f64::from), 0.0, 59.0);
    check_range_exclusive(&mut issues, "second", phase.second, 0.0, 60.0);

    for (field, value) in [
        ("max_amplitude", phase.max_amplitude),
        ("max_amplitude_period", phase.max_amplitude_period),
        ("signal_duration", phase.signal_duration.map(f64::from)),
        ("epicenter_distance", phase.epicenter_distance),
    ] {
        check_non_negative(&mut issues, field, value);
    }

    check_range(&mut issues, "back_azimuth", phase.back_azimuth, 0.0, 360.0);
    check_range(
        &mut issues,
        "epicenter_to_station_azimuth",
        phase.epicenter_to_station_azimuth.map(f64::from),
        0.0,
        360.0,
    );

    if let Some(weight) = phase.weight
        && !WEIGHTS.contains(&weight)
    {
        issues.push(Issue::InvalidCode {
            field: "weight".to_string(),
            code: char::from(b'0' + weight % 10),
            allowed: "012349".to_string(),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PhaseData {
        PhaseData {
            station_code: Some("HEL".to_string()),
            phase_type: Some("P".to_string()),
            hour: Some(3),
            minute: Some(7),
            second: Some(15.3),
            ..PhaseData::default()
        }
    }

    #[test]
    fn test_valid_phase() {
        assert!(check(&valid()).is_empty());
    }

    #[test]
    fn test_missing_station() {
        let phase = PhaseData {
            station_code: None,
            ..valid()
        };
        assert_eq!(check(&phase)[0].code(), "NRD005");
    }

    #[test]
    fn test_weight_codes() {
        for weight in [0, 4, 9] {
            let phase = PhaseData {
                weight: Some(weight),
                ..valid()
            };
            assert!(check(&phase).is_empty(), "weight {weight}");
        }
        let phase = PhaseData {
            weight: Some(5),
            ..valid()
        };
        assert_eq!(check(&phase)[0].field(), Some("weight"));
    }

    #[test]
    fn test_azimuth_and_amplitude() {
        let phase = PhaseData {
            back_azimuth: Some(361.0),
            max_amplitude: Some(-2.0),
            ..valid()
        };
        let issues = check(&phase);
        let fields: Vec<&str> = issues.iter().filter_map(Issue::field).collect();
        assert_eq!(fields, vec!["max_amplitude", "back_azimuth"]);
    }
}
