//! QuakeML 1.2 mapping of Nordic events.
//!
//! [`build_quakeml`] turns one validated [`NordicEvent`](nor2qml_model::NordicEvent)
//! into an [`XmlElement`] tree rooted at `q:quakeml`; [`to_xml_string`]
//! serializes it. Identifiers for picks, amplitudes and arrivals come from an
//! explicit [`IdSequence`] owned by the caller.

pub mod codes;
pub mod error;
pub mod ids;
pub mod magnitude;
pub mod origin;
pub mod pick;
pub mod quakeml;
pub mod time;
pub mod tree;
pub mod writer;

pub use error::{MapError, Result};
pub use ids::{IdSequence, PublicIds};
pub use quakeml::{BED_NS, INGV_NS, QUAKEML_NS, build_quakeml};
pub use time::{format_real, format_time};
pub use tree::XmlElement;
pub use writer::{to_xml_string, write_document};
