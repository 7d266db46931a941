//! Type 1 header checks.

use nor2qml_model::{Issue, MainHeader};

use crate::util::{check_non_negative, check_range, check_range_exclusive, require};

const MIN_DEPTH_KM: f64 = -10.0;
const MAX_DEPTH_KM: f64 = 800.0;
const MIN_MAGNITUDE: f64 = -3.0;
const MAX_MAGNITUDE: f64 = 10.0;

pub fn check(header: &MainHeader) -> Vec<Issue> {
    let mut issues = Vec::new();

    require(&mut issues, "date", header.date.as_ref());
    check_range(&mut issues, "hour", header.hour.map(f64::from), 0.0, 23.0);
    check_range(&mut issues, "minute", header.minute.map(f64::from), 0.0, 59.0);
    check_range_exclusive(&mut issues, "second", header.second, 0.0, 60.0);
    check_range(&mut issues, "epicenter_latitude", header.epicenter_latitude, -90.0, 90.0);
    check_range(&mut issues, "epicenter_longitude", header.epicenter_longitude, -180.0, 180.0);
    check_range(&mut issues, "depth", header.depth, MIN_DEPTH_KM, MAX_DEPTH_KM);
    check_non_negative(&mut issues, "rms_time_residuals", header.rms_time_residuals);

    for (field, magnitude) in [
        ("magnitude_1", header.magnitude_1),
        ("magnitude_2", header.magnitude_2),
        ("magnitude_3", header.magnitude_3),
    ] {
        check_range(&mut issues, field, magnitude, MIN_MAGNITUDE, MAX_MAGNITUDE);
    }

    issues
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn valid() -> MainHeader {
        MainHeader {
            date: NaiveDate::from_ymd_opt(2021, 3, 15),
            hour: Some(3),
            minute: Some(7),
            second: Some(9.5),
            epicenter_latitude: Some(61.2),
            epicenter_longitude: Some(24.5),
            depth: Some(10.0),
            magnitude_1: Some(2.3),
            ..MainHeader::default()
        }
    }

    #[test]
    fn test_valid_header() {
        assert!(check(&valid()).is_empty());
    }

    #[test]
    fn test_missing_date() {
        let header = MainHeader {
            date: None,
            ..valid()
        };
        let issues = check(&header);
        assert_eq!(
            issues,
            vec![Issue::MissingField {
                field: "date".to_string()
            }]
        );
    }

    #[test]
    fn test_ranges() {
        let header = MainHeader {
            hour: Some(24),
            second: Some(60.0),
            epicenter_latitude: Some(91.0),
            depth: Some(-11.0),
            magnitude_3: Some(10.5),
            rms_time_residuals: Some(-0.1),
            ..valid()
        };
        let issues = check(&header);
        let fields: Vec<&str> = issues.iter().filter_map(Issue::field).collect();
        assert_eq!(
            fields,
            vec![
                "hour",
                "second",
                "epicenter_latitude",
                "depth",
                "rms_time_residuals",
                "magnitude_3"
            ]
        );
    }
}
