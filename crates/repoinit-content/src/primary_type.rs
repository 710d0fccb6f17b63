//! Extraction of the declared primary type from node metadata.

use quick_xml::Reader;
use quick_xml::events::Event;

/// Attribute on the metadata root element that declares the node type.
const PRIMARY_TYPE_ATTRIBUTE: &[u8] = b"jcr:primaryType";

/// Extracts the `jcr:primaryType` attribute from a `.content.xml` document.
///
/// Only the root element is inspected. A well-formed document without the
/// attribute yields the configured default; malformed markup is an error,
/// never a silent fallback.
#[derive(Debug, Clone)]
pub struct PrimaryTypeParser {
    default_type: String,
}

impl PrimaryTypeParser {
    /// Create a parser that falls back to `default_type`.
    pub fn new(default_type: impl Into<String>) -> Self {
        Self {
            default_type: default_type.into(),
        }
    }

    /// Parse a metadata document and return the declared primary type.
    pub fn parse(&self, xml: &str) -> Result<String, quick_xml::Error> {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event()? {
                Event::Start(element) | Event::Empty(element) => {
                    for attribute in element.attributes() {
                        let attribute = attribute?;
                        if attribute.key.as_ref() == PRIMARY_TYPE_ATTRIBUTE {
                            return Ok(attribute.unescape_value()?.into_owned());
                        }
                    }
                    return Ok(self.default_type.clone());
                }
                Event::Eof => return Ok(self.default_type.clone()),
                _ => {}
            }
        }
    }
}
