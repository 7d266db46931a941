//! `origin` and `arrival` elements.

use nor2qml_model::{ErrorHeader, MainHeader, PhaseData};

use crate::error::{MapError, Result};
use crate::ids::PublicIds;
use crate::time::{format_real, format_time};
use crate::tree::XmlElement;

/// Build the origin of main header `index`. Uncertainties come from the
/// event's first error header.
pub fn build_origin(
    index: usize,
    main: &MainHeader,
    error: Option<&ErrorHeader>,
    ids: PublicIds<'_>,
) -> Result<XmlElement> {
    let date = main.date.ok_or(MapError::MissingDate { index })?;
    let mut origin = XmlElement::new("origin").with_attribute("publicID", ids.origin());

    let mut time = XmlElement::value_element(
        "time",
        format_time(date, main.hour, main.minute, main.second),
    );
    if let Some(uncertainty) = error
        .and_then(|error| error.second_error)
        .filter(|uncertainty| *uncertainty != 0.0)
    {
        time.push(XmlElement::text_element("uncertainty", format_real(uncertainty)));
    }
    origin.push(time);

    origin.push_opt(quantity(
        "latitude",
        main.epicenter_latitude,
        error.and_then(|error| error.epicenter_latitude_error),
    ));
    origin.push_opt(quantity(
        "longitude",
        main.epicenter_longitude,
        error.and_then(|error| error.epicenter_longitude_error),
    ));
    origin.push_opt(quantity(
        "depth",
        main.depth,
        error.and_then(|error| error.depth_error),
    ));

    if let Some(rms) = main.rms_time_residuals {
        origin.push(
            XmlElement::new("quality")
                .with_child(XmlElement::text_element("standardError", format_real(rms))),
        );
    }

    Ok(origin)
}

/// `arrival` linking a phase row to the pick numbered `number`.
///
/// Rows without a phase name produce no arrival.
pub fn build_arrival(phase: &PhaseData, number: u64, ids: PublicIds<'_>) -> Option<XmlElement> {
    let name = phase.phase()?;
    let mut arrival = XmlElement::new("arrival")
        .with_attribute("publicID", ids.arrival(number))
        .with_child(XmlElement::text_element("pickID", ids.pick(number)))
        .with_child(XmlElement::text_element("phase", name));

    if let Some(azimuth) = phase.epicenter_to_station_azimuth {
        arrival.push(XmlElement::text_element("azimuth", azimuth.to_string()));
    }
    if let Some(residual) = phase.travel_time_residual {
        arrival.push(XmlElement::text_element("timeResidual", format_real(residual)));
    }
    if let Some(distance) = phase.epicenter_distance {
        arrival.push(XmlElement::text_element("distance", format_real(distance)));
    }
    Some(arrival)
}

/// `<name><value/><uncertainty/></name>` when the value is present.
fn quantity(name: &str, value: Option<f64>, uncertainty: Option<f64>) -> Option<XmlElement> {
    let mut element = XmlElement::value_element(name, format_real(value?));
    if let Some(uncertainty) = uncertainty {
        element.push(XmlElement::text_element("uncertainty", format_real(uncertainty)));
    }
    Some(element)
}
