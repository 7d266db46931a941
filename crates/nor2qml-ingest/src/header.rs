//! Decoders for the Nordic header layouts.

use chrono::NaiveDate;

use nor2qml_model::{
    CommentHeader, ErrorHeader, MacroseismicHeader, MainHeader, OtherHeader, WaveformHeader,
};

use crate::columns::{Columns, FieldReader};

/// Type 1 line.
pub fn decode_main(reader: &mut FieldReader<'_>) -> MainHeader {
    MainHeader {
        date: decode_date(reader),
        hour: reader.number("hour", 12, 13),
        minute: reader.number("minute", 14, 15),
        second: reader.number("second", 17, 20),
        location_model: reader.char_at(21),
        distance_indicator: reader.char_at(22),
        event_desc_id: reader.char_at(23),
        epicenter_latitude: reader.number("epicenter_latitude", 24, 30),
        epicenter_longitude: reader.number("epicenter_longitude", 31, 38),
        depth: reader.number("depth", 39, 43),
        depth_control: reader.char_at(44),
        locating_indicator: reader.char_at(45),
        epicenter_reporting_agency: reader.text(46, 48),
        stations_used: reader.number("stations_used", 49, 51),
        rms_time_residuals: reader.number("rms_time_residuals", 52, 55),
        magnitude_1: reader.number("magnitude_1", 56, 59),
        type_of_magnitude_1: reader.char_at(60),
        magnitude_reporting_agency_1: reader.text(61, 63),
        magnitude_2: reader.number("magnitude_2", 64, 67),
        type_of_magnitude_2: reader.char_at(68),
        magnitude_reporting_agency_2: reader.text(69, 71),
        magnitude_3: reader.number("magnitude_3", 72, 75),
        type_of_magnitude_3: reader.char_at(76),
        magnitude_reporting_agency_3: reader.text(77, 79),
    }
}

/// Year, month and day of a type 1 line. All three blank means no date.
fn decode_date(reader: &mut FieldReader<'_>) -> Option<NaiveDate> {
    let raw_year = reader.text(2, 5);
    let raw_month = reader.text(7, 8);
    let raw_day = reader.text(9, 10);
    if raw_year.is_none() && raw_month.is_none() && raw_day.is_none() {
        return None;
    }
    let year: Option<i32> = reader.number("year", 2, 5);
    let month: Option<u32> = reader.number("month", 7, 8);
    let day: Option<u32> = reader.number("day", 9, 10);
    let (year, month, day) = (year?, month?, day?);
    let date = NaiveDate::from_ymd_opt(year, month, day);
    if date.is_none() {
        reader.malformed("date", &format!("{year:04}-{month:02}-{day:02}"));
    }
    date
}

/// Type 2 line.
pub fn decode_macroseismic(reader: &mut FieldReader<'_>) -> MacroseismicHeader {
    MacroseismicHeader {
        description: reader.text(2, 6),
        diastrophism_code: reader.char_at(22),
        tsunami_code: reader.char_at(23),
        seiche_code: reader.char_at(24),
        cultural_effects: reader.char_at(25),
        unusual_effects: reader.char_at(26),
        maximum_observed_intensity: reader.number("maximum_observed_intensity", 28, 29),
        maximum_intensity_qualifier: reader.char_at(30),
        intensity_scale: reader.text(31, 32),
        macroseismic_latitude: reader.number("macroseismic_latitude", 34, 39),
        macroseismic_longitude: reader.number("macroseismic_longitude", 41, 47),
        macroseismic_magnitude: reader.number("macroseismic_magnitude", 49, 51),
        type_of_magnitude: reader.char_at(52),
        logarithm_of_radius: reader.number("logarithm_of_radius", 53, 56),
        logarithm_of_area_1: reader.number("logarithm_of_area_1", 57, 61),
        bordering_intensity_1: reader.number("bordering_intensity_1", 62, 63),
        logarithm_of_area_2: reader.number("logarithm_of_area_2", 64, 68),
        bordering_intensity_2: reader.number("bordering_intensity_2", 69, 70),
        quality_rank: reader.char_at(72),
        reporting_agency: reader.text(73, 75),
    }
}

/// Type 3 line.
pub fn decode_comment(reader: &FieldReader<'_>) -> CommentHeader {
    CommentHeader {
        h_comment: reader.text(2, 79),
    }
}

/// Type 5 (`E`) line.
pub fn decode_error(reader: &mut FieldReader<'_>) -> ErrorHeader {
    ErrorHeader {
        gap: reader.number("gap", 6, 8),
        second_error: reader.number("second_error", 15, 20),
        epicenter_latitude_error: reader.number("epicenter_latitude_error", 25, 30),
        epicenter_longitude_error: reader.number("epicenter_longitude_error", 33, 38),
        depth_error: reader.number("depth_error", 39, 43),
        covariance_xy: reader.number("covariance_xy", 44, 55),
        magnitude_error: reader.number("magnitude_error", 56, 59),
    }
}

/// Type 6 line.
pub fn decode_waveform(reader: &FieldReader<'_>) -> WaveformHeader {
    WaveformHeader {
        waveform_info: reader.text(2, 79),
    }
}

pub fn decode_other(columns: &Columns) -> OtherHeader {
    OtherHeader {
        type_code: columns.type_code(),
        text: columns.slice(1, 79).trim_end().to_string(),
    }
}
