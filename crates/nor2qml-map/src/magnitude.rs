//! `magnitude` and `focalMechanism` elements.

use nor2qml_model::{ErrorHeader, MainHeader};

use crate::codes;
use crate::ids::PublicIds;
use crate::time::format_real;
use crate::tree::XmlElement;

/// Magnitude of a main header, from its first magnitude slot.
pub fn build_magnitude(
    main: &MainHeader,
    error: Option<&ErrorHeader>,
    ids: PublicIds<'_>,
) -> Option<XmlElement> {
    let value = main.magnitude_1?;
    let mut magnitude = XmlElement::new("magnitude").with_attribute("publicID", ids.magnitude());

    let mut mag = XmlElement::value_element("mag", format_real(value));
    if let Some(uncertainty) = error.and_then(|error| error.magnitude_error) {
        mag.push(XmlElement::text_element("uncertainty", format_real(uncertainty)));
    }
    magnitude.push(mag);

    if let Some(kind) = main.type_of_magnitude_1.and_then(codes::magnitude_type) {
        magnitude.push(XmlElement::text_element("type", kind));
    }
    if let Some(count) = main.stations_used {
        magnitude.push(XmlElement::text_element("stationCount", count.to_string()));
    }
    if let Some(agency) = &main.magnitude_reporting_agency_1 {
        magnitude.push(
            XmlElement::new("creationInfo")
                .with_child(XmlElement::text_element("agencyID", agency.as_str()))
                .with_child(XmlElement::text_element("agencyURI", ids.agency())),
        );
    }
    magnitude.push(XmlElement::text_element("originID", ids.origin()));

    Some(magnitude)
}

/// Focal mechanism carrying the azimuthal gap of an error header.
pub fn build_focal_mechanism(error: &ErrorHeader, ids: PublicIds<'_>) -> Option<XmlElement> {
    let gap = error.gap?;
    Some(
        XmlElement::new("focalMechanism")
            .with_attribute("publicID", ids.focal_mechanism())
            .with_child(XmlElement::text_element("azimuthalGap", format_real(f64::from(gap)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_fields() {
        let main = MainHeader {
            magnitude_1: Some(2.3),
            type_of_magnitude_1: Some('L'),
            stations_used: Some(12),
            magnitude_reporting_agency_1: Some("HEL".to_string()),
            ..MainHeader::default()
        };
        let error = ErrorHeader {
            magnitude_error: Some(0.2),
            ..ErrorHeader::default()
        };
        let magnitude = build_magnitude(&main, Some(&error), PublicIds::new("a")).unwrap();
        assert_eq!(magnitude.text_at("mag/value"), Some("2.3"));
        assert_eq!(magnitude.text_at("mag/uncertainty"), Some("0.2"));
        assert_eq!(magnitude.text_at("type"), Some("ML"));
        assert_eq!(magnitude.text_at("stationCount"), Some("12"));
        assert_eq!(magnitude.text_at("creationInfo/agencyID"), Some("HEL"));
        assert_eq!(
            magnitude.text_at("creationInfo/agencyURI"),
            Some("smi:a/path/to/agency")
        );
        assert_eq!(magnitude.text_at("originID"), Some("smi:a/path/to/origin"));
    }

    #[test]
    fn test_unknown_magnitude_type_is_omitted() {
        let main = MainHeader {
            magnitude_1: Some(1.0),
            type_of_magnitude_1: Some('Q'),
            ..MainHeader::default()
        };
        let magnitude = build_magnitude(&main, None, PublicIds::new("a")).unwrap();
        assert!(magnitude.child("type").is_none());
        assert!(build_magnitude(&MainHeader::default(), None, PublicIds::new("a")).is_none());
    }

    #[test]
    fn test_focal_mechanism_needs_gap() {
        let ids = PublicIds::new("a");
        assert!(build_focal_mechanism(&ErrorHeader::default(), ids).is_none());
        let error = ErrorHeader {
            gap: Some(180),
            ..ErrorHeader::default()
        };
        let mechanism = build_focal_mechanism(&error, ids).unwrap();
        assert_eq!(mechanism.text_at("azimuthalGap"), Some("180.0"));
    }
}
