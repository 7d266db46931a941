//! Whole-document assembly.

use tracing::debug;

use nor2qml_model::{ConversionOptions, NordicEvent};

use crate::codes;
use crate::error::{MapError, Result};
use crate::ids::{IdSequence, PublicIds};
use crate::magnitude::{build_focal_mechanism, build_magnitude};
use crate::origin::{build_arrival, build_origin};
use crate::pick::{build_amplitude, build_pick, pick_time};
use crate::tree::XmlElement;

pub const QUAKEML_NS: &str = "http://quakeml.org/xmlns/quakeml/1.2";
pub const BED_NS: &str = "http://quakeml.org/xmlns/bed/1.2";
pub const INGV_NS: &str = "http://webservices.ingv.it/fdsnws/event/1";

/// Build the QuakeML document for one validated event.
///
/// In long mode every phase row advances `sequence` once; the pick, the
/// amplitude and the arrivals of that row share the number.
pub fn build_quakeml(
    event: &NordicEvent,
    options: &ConversionOptions,
    sequence: &mut IdSequence,
) -> Result<XmlElement> {
    let first_main = event.first_main().ok_or(MapError::MissingMainHeader)?;
    let event_date = first_main.date.ok_or(MapError::MissingDate { index: 0 })?;
    let ids = PublicIds::new(&options.authority_id);
    let long = options.mode.is_long();

    // Short documents carry no picks, so no numbers are drawn.
    let pick_numbers: Vec<u64> = if long {
        event.phase_data.iter().map(|_| sequence.advance()).collect()
    } else {
        Vec::new()
    };

    let mut quake_event = XmlElement::new("event").with_attribute("publicID", ids.event());
    let event_id = event.main_headers().filter_map(|main| main.event_desc_id).last();
    quake_event.push(XmlElement::text_element("type", codes::event_type(event_id)));

    for comment in event.comment_headers() {
        if let Some(text) = &comment.h_comment {
            quake_event.push(
                XmlElement::new("comment").with_child(XmlElement::text_element("text", text.as_str())),
            );
        }
    }

    let first_error = event.first_error();
    for (index, main) in event.main_headers().enumerate() {
        let mut origin = build_origin(index, main, first_error, ids)?;
        for (phase, &number) in event.phase_data.iter().zip(&pick_numbers) {
            origin.push_opt(build_arrival(phase, number, ids));
        }
        quake_event.push(origin);

        if long {
            quake_event.push_opt(build_magnitude(main, first_error, ids));
        }
    }

    for error in event.error_headers() {
        quake_event.push_opt(build_focal_mechanism(error, ids));
    }

    for (phase, &number) in event.phase_data.iter().zip(&pick_numbers) {
        let time = pick_time(event_date, phase);
        quake_event.push(build_pick(phase, &time, number, options, ids));
        quake_event.push_opt(build_amplitude(phase, &time, number, options, ids));
    }

    debug!(
        mode = %options.mode,
        origins = quake_event.children_named("origin").count(),
        picks = pick_numbers.len(),
        last_id = sequence.current(),
        "built QuakeML event"
    );

    let event_parameters = XmlElement::new("eventParameters")
        .with_attribute("publicID", ids.event_parameters())
        .with_child(quake_event);

    Ok(XmlElement::new("q:quakeml")
        .with_attribute("xmlns:q", QUAKEML_NS)
        .with_attribute("xmlns", BED_NS)
        .with_attribute("xmlns:ingv", INGV_NS)
        .with_child(event_parameters))
}
