//! Extension payload handed to the feature-model assembler.

use serde::{Deserialize, Serialize};

/// Extension name under which the generated script is attached.
pub const REPOINIT_EXTENSION_NAME: &str = "repoinit";

/// Payload kind of a feature-model extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionKind {
    /// Line-oriented text payload.
    Text,
    /// Structured JSON payload.
    Json,
    /// Artifact-list payload.
    Artifacts,
}

/// A named, typed, non-binary extension payload.
///
/// The consolidator produces the `repoinit` text extension; embedding it
/// into a feature model and persisting it is the assembler's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub name: String,
    pub kind: ExtensionKind,
    /// Whether consumers must understand this extension.
    pub required: bool,
    pub text: String,
}

impl Extension {
    /// Create a text extension.
    pub fn text(name: impl Into<String>, text: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            kind: ExtensionKind::Text,
            required,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_constructor() {
        let extension = Extension::text(REPOINIT_EXTENSION_NAME, "create path (a) /a\n", true);
        assert_eq!(extension.name, "repoinit");
        assert_eq!(extension.kind, ExtensionKind::Text);
        assert!(extension.required);
    }

    #[test]
    fn test_serializes_with_lowercase_kind() {
        let extension = Extension::text("repoinit", "end\n", true);
        let json = serde_json::to_value(&extension).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["name"], "repoinit");

        let back: Extension = serde_json::from_value(json).unwrap();
        assert_eq!(back, extension);
    }
}
