//! Schema gate in front of the output writer.

use roxmltree::Document;
use tracing::{debug, error, info_span};

use nor2qml_map::{XmlElement, to_xml_string};

use crate::error::{Result, SchemaError};
use crate::model::XsdSchema;

/// Anything that can decide whether a serialized document conforms.
pub trait SchemaOracle {
    fn validate(&self, document: &str) -> Result<()>;
}

impl SchemaOracle for XsdSchema {
    fn validate(&self, document: &str) -> Result<()> {
        let parsed = Document::parse(document).map_err(|err| SchemaError::Parse {
            what: "document".to_string(),
            message: err.to_string(),
        })?;
        let violations = self.validate_document(&parsed);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Invalid { violations })
        }
    }
}

/// Serializes element trees and only hands out text the oracle accepts.
#[derive(Debug, Clone)]
pub struct SchemaGate<O = XsdSchema> {
    oracle: O,
}

impl<O: SchemaOracle> SchemaGate<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Serialize `root` and validate the text. Returns the text on success.
    pub fn check(&self, root: &XmlElement) -> Result<String> {
        let _span = info_span!("schema").entered();
        let document = to_xml_string(root)?;
        match self.oracle.validate(&document) {
            Ok(()) => {
                debug!(bytes = document.len(), "document passed schema validation");
                Ok(document)
            }
            Err(err) => {
                if let Some(first) = err.violations().first() {
                    error!(
                        domain = %first.domain,
                        violation_type = first.type_name(),
                        path = %first.path,
                        violations = err.violations().len(),
                        "schema validation failed: {}",
                        first.message
                    );
                } else {
                    error!(error = %err, "schema validation failed");
                }
                Err(err)
            }
        }
    }
}
