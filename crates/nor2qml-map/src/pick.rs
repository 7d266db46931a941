//! `pick` and `amplitude` elements.

use chrono::{Days, NaiveDate};

use nor2qml_model::{ConversionOptions, PhaseData, TimeInfo};

use crate::codes;
use crate::ids::PublicIds;
use crate::time::{format_real, format_time};
use crate::tree::XmlElement;

/// Arrival time of a phase row. The date is the event date shifted by the
/// row's day offset.
pub fn pick_time(event_date: NaiveDate, phase: &PhaseData) -> String {
    let date = match phase.time_info {
        TimeInfo::SameDay => Some(event_date),
        TimeInfo::NextDay => event_date.checked_add_days(Days::new(1)),
        TimeInfo::PreviousDay => event_date.checked_sub_days(Days::new(1)),
    }
    .unwrap_or(event_date);
    format_time(date, phase.hour, phase.minute, phase.second)
}

pub fn build_pick(
    phase: &PhaseData,
    time: &str,
    number: u64,
    options: &ConversionOptions,
    ids: PublicIds<'_>,
) -> XmlElement {
    let mut pick = XmlElement::new("pick")
        .with_attribute("publicID", ids.pick(number))
        .with_child(XmlElement::value_element("time", time));

    let mut waveform = XmlElement::new("waveformID")
        .with_attribute("networkCode", options.network_code.as_str())
        .with_attribute(
            "stationCode",
            phase.station_code.as_deref().unwrap_or_default().trim(),
        );
    if let (Some(prefix), Some(component)) = (
        phase.sp_instrument_type.and_then(codes::channel_prefix),
        phase.sp_component,
    ) {
        waveform = waveform.with_attribute("channelCode", format!("{prefix}{component}"));
    }
    pick.push(waveform);

    if let Some(polarity) = phase.first_motion.and_then(codes::polarity) {
        pick.push(XmlElement::text_element("polarity", polarity));
    }
    if let Some(back_azimuth) = phase.back_azimuth {
        pick.push(XmlElement::value_element("backazimuth", format_real(back_azimuth)));
    }
    pick
}

/// Amplitude reading of a phase row; `None` without a maximum amplitude.
pub fn build_amplitude(
    phase: &PhaseData,
    time: &str,
    number: u64,
    options: &ConversionOptions,
    ids: PublicIds<'_>,
) -> Option<XmlElement> {
    let nanometers = phase.max_amplitude?;
    let meters = options.amplitude_conversion.to_meters(nanometers);

    let mut amplitude = XmlElement::new("amplitude")
        .with_attribute("publicID", ids.amplitude(number))
        .with_child(XmlElement::value_element("genericAmplitude", format_real(meters)));

    if let Some(period) = phase.max_amplitude_period {
        amplitude.push(XmlElement::value_element("period", format_real(period)));
    }
    amplitude.push(XmlElement::text_element("unit", "m"));

    if let Some(duration) = phase.signal_duration {
        amplitude.push(
            XmlElement::new("timeWindow")
                .with_child(XmlElement::text_element("begin", format_real(0.0)))
                .with_child(XmlElement::text_element("end", format_real(f64::from(duration))))
                .with_child(XmlElement::text_element("reference", time)),
        );
    }
    if let Some(snr) = phase.signal_to_noise {
        amplitude.push(XmlElement::text_element("snr", format_real(snr)));
    }
    Some(amplitude)
}

#[cfg(test)]
mod tests {
    use nor2qml_model::AmplitudeConversion;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 12, 31).unwrap()
    }

    fn phase() -> PhaseData {
        PhaseData {
            station_code: Some(" HEL ".to_string()),
            sp_instrument_type: Some('S'),
            sp_component: Some('Z'),
            first_motion: Some('C'),
            hour: Some(23),
            minute: Some(59),
            second: Some(58.7),
            ..PhaseData::default()
        }
    }

    #[test]
    fn test_pick_time_day_shift() {
        assert_eq!(pick_time(date(), &phase()), "2021-12-31T23:59:58Z");
        let next = PhaseData {
            time_info: TimeInfo::NextDay,
            hour: Some(0),
            ..phase()
        };
        assert_eq!(pick_time(date(), &next), "2022-01-01T00:59:58Z");
        let previous = PhaseData {
            time_info: TimeInfo::PreviousDay,
            ..phase()
        };
        assert_eq!(pick_time(date(), &previous), "2021-12-30T23:59:58Z");
    }

    #[test]
    fn test_pick_waveform_and_polarity() {
        let options = ConversionOptions::default().with_network_code("FN");
        let pick = build_pick(&phase(), "t", 7, &options, PublicIds::new("a"));
        assert_eq!(pick.attribute("publicID"), Some("smi:a/path/to/pick/7"));
        let waveform = pick.child("waveformID").unwrap();
        assert_eq!(waveform.attribute("networkCode"), Some("FN"));
        assert_eq!(waveform.attribute("stationCode"), Some("HEL"));
        assert_eq!(waveform.attribute("channelCode"), Some("SHZ"));
        assert_eq!(pick.text_at("polarity"), Some("positive"));
        assert!(pick.child("backazimuth").is_none());
    }

    #[test]
    fn test_unknown_instrument_omits_channel() {
        let row = PhaseData {
            sp_instrument_type: Some('H'),
            ..phase()
        };
        let pick = build_pick(&row, "t", 1, &ConversionOptions::default(), PublicIds::new("a"));
        assert_eq!(pick.child("waveformID").unwrap().attribute("channelCode"), None);
    }

    #[test]
    fn test_amplitude_only_value() {
        let row = PhaseData {
            max_amplitude: Some(100.0),
            ..phase()
        };
        let amplitude =
            build_amplitude(&row, "t", 2, &ConversionOptions::default(), PublicIds::new("a"))
                .unwrap();
        assert_eq!(amplitude.text_at("genericAmplitude/value"), Some("0.0000001"));
        assert_eq!(amplitude.text_at("unit"), Some("m"));
        assert!(amplitude.child("period").is_none());
        assert!(amplitude.child("timeWindow").is_none());
        assert!(amplitude.child("snr").is_none());
    }

    #[test]
    fn test_amplitude_time_window_and_legacy_power() {
        let row = PhaseData {
            max_amplitude: Some(2.0),
            signal_duration: Some(12),
            ..phase()
        };
        let options = ConversionOptions::default()
            .with_amplitude_conversion(AmplitudeConversion::LegacyPower);
        let amplitude =
            build_amplitude(&row, "2021-12-31T23:59:58Z", 2, &options, PublicIds::new("a"))
                .unwrap();
        assert_eq!(
            amplitude.text_at("genericAmplitude/value"),
            Some(format_real(2f64.powi(-9)).as_str())
        );
        assert_eq!(amplitude.text_at("timeWindow/begin"), Some("0.0"));
        assert_eq!(amplitude.text_at("timeWindow/end"), Some("12.0"));
        assert_eq!(
            amplitude.text_at("timeWindow/reference"),
            Some("2021-12-31T23:59:58Z")
        );
    }
}
