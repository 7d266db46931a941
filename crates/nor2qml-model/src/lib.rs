//! Nordic event record model.
//!
//! This crate holds the in-memory representation of one seismic event read
//! from a Nordic bulletin, together with the discrepancy types produced by
//! parsing and validation and the options that drive QuakeML conversion.
//!
//! - **Headers**: closed [`Header`] enum over the Nordic line kinds
//! - **Phase data**: one [`PhaseData`] row per observed arrival
//! - **Discrepancies**: typed [`Issue`] values collected in a [`ValidationReport`]
//! - **Options**: [`ConversionOptions`] for output mode, identifiers and units

pub mod discrepancy;
pub mod error;
pub mod event;
pub mod header;
pub mod options;
pub mod phase;

pub use discrepancy::{Discrepancy, Issue, IssueCategory, RecordLocation, ValidationReport};
pub use error::{ModelError, Result};
pub use event::NordicEvent;
pub use header::{
    CommentHeader, ErrorHeader, Header, HeaderKind, MacroseismicHeader, MainHeader, OtherHeader,
    WaveformHeader,
};
pub use options::{AmplitudeConversion, ConversionOptions, OutputMode};
pub use phase::{PhaseData, TimeInfo};
