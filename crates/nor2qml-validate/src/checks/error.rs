//! Type 5 header checks.

use nor2qml_model::{ErrorHeader, Issue};

use crate::util::{check_non_negative, check_range};

pub fn check(header: &ErrorHeader) -> Vec<Issue> {
    let mut issues = Vec::new();

    check_range(&mut issues, "gap", header.gap.map(f64::from), 0.0, 360.0);
    for (field, value) in [
        ("second_error", header.second_error),
        ("epicenter_latitude_error", header.epicenter_latitude_error),
        ("epicenter_longitude_error", header.epicenter_longitude_error),
        ("depth_error", header.depth_error),
        ("magnitude_error", header.magnitude_error),
    ] {
        check_non_negative(&mut issues, field, value);
    }

    issues
}
