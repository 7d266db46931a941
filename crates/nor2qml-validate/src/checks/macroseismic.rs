//! Type 2 header checks.

use nor2qml_model::{Issue, MacroseismicHeader};

use crate::util::{check_code, check_range};

const INTENSITY_QUALIFIERS: &str = "+-";
const QUALITY_RANKS: &str = "ABCD";

pub fn check(header: &MacroseismicHeader) -> Vec<Issue> {
    let mut issues = Vec::new();

    check_range(
        &mut issues,
        "maximum_observed_intensity",
        header.maximum_observed_intensity.map(f64::from),
        1.0,
        12.0,
    );
    check_code(
        &mut issues,
        "maximum_intensity_qualifier",
        header.maximum_intensity_qualifier,
        INTENSITY_QUALIFIERS,
    );
    check_range(&mut issues, "macroseismic_latitude", header.macroseismic_latitude, -90.0, 90.0);
    check_range(
        &mut issues,
        "macroseismic_longitude",
        header.macroseismic_longitude,
        -180.0,
        180.0,
    );
    check_code(&mut issues, "quality_rank", header.quality_rank, QUALITY_RANKS);

    issues
}
