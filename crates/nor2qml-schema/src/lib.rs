//! Schema conformance gate for generated QuakeML.
//!
//! [`XsdSchema`] is loaded from the subset of XML Schema that QuakeML uses.
//! [`SchemaGate`] serializes a mapped element tree, parses the text back and
//! validates it, so only conforming documents ever reach the output file.

pub mod builtin;
pub mod error;
pub mod gate;
mod loader;
pub mod model;
mod validator;
pub mod violation;

pub use builtin::{Builtin, XSD_NS};
pub use error::{Result, SchemaError};
pub use gate::{SchemaGate, SchemaOracle};
pub use model::XsdSchema;
pub use violation::{SchemaViolation, ViolationDomain, ViolationKind};
