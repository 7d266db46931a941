//! Decoder for phase data rows.

use nor2qml_model::{PhaseData, TimeInfo};

use crate::columns::FieldReader;

/// Hours at or past this value belong to the following day.
const HOURS_PER_DAY: u8 = 24;

pub fn decode_phase(reader: &mut FieldReader<'_>) -> PhaseData {
    let (time_info, hour) = decode_day_and_hour(reader);

    PhaseData {
        station_code: reader.text(2, 6),
        sp_instrument_type: reader.char_at(7),
        sp_component: reader.char_at(8),
        quality_indicator: reader.char_at(10),
        phase_type: reader.text(11, 14),
        weight: reader.number("weight", 15, 15),
        automatic: reader.char_at(16),
        first_motion: reader.char_at(17),
        time_info,
        hour,
        minute: reader.number("minute", 21, 22),
        second: reader.number("second", 23, 28),
        signal_duration: reader.number("signal_duration", 30, 33),
        max_amplitude: reader.number("max_amplitude", 34, 40),
        max_amplitude_period: reader.number("max_amplitude_period", 42, 45),
        back_azimuth: reader.number("back_azimuth", 47, 51),
        apparent_velocity: reader.number("apparent_velocity", 53, 56),
        signal_to_noise: reader.number("signal_to_noise", 57, 60),
        azimuth_residual: reader.number("azimuth_residual", 61, 63),
        travel_time_residual: reader.number("travel_time_residual", 64, 68),
        location_weight: reader.number("location_weight", 69, 70),
        epicenter_distance: reader.number("epicenter_distance", 71, 75),
        epicenter_to_station_azimuth: reader.number("epicenter_to_station_azimuth", 77, 79),
    }
}

/// Day flag of column 18 combined with the hour of columns 19-20.
///
/// Hours 24-47 are written for arrivals after midnight and fold into the
/// following day. Such an hour cannot be combined with a `+` flag.
fn decode_day_and_hour(reader: &mut FieldReader<'_>) -> (TimeInfo, Option<u8>) {
    let flag = reader.char_at(18).unwrap_or(' ');
    let time_info = match TimeInfo::from_flag(flag) {
        Ok(time_info) => time_info,
        Err(_) => {
            reader.malformed("time_info", &flag.to_string());
            TimeInfo::SameDay
        }
    };
    let hour: Option<u8> = reader.number("hour", 19, 20);
    match hour {
        Some(hour) if hour >= HOURS_PER_DAY => match time_info {
            TimeInfo::SameDay => (TimeInfo::NextDay, Some(hour - HOURS_PER_DAY)),
            TimeInfo::PreviousDay => (TimeInfo::SameDay, Some(hour - HOURS_PER_DAY)),
            TimeInfo::NextDay => {
                reader.malformed("hour", &hour.to_string());
                (TimeInfo::NextDay, None)
            }
        },
        hour => (time_info, hour),
    }
}
