use serde::{Deserialize, Serialize};

use super::image_upload::UploadTicket;

/// Every way a user can poke at a generated control. UI adapters translate
/// their native events into these and feed them to
/// [`super::renderer::ControlRenderer::handle`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Interaction {
    /// A slider drag tick with the raw (unsnapped) handle value
    Slide { name: String, value: f32 },
    Toggle { name: String },
    /// Click on a palette or color option
    Choose { name: String, index: usize },
    /// Dropdown change
    Select { name: String, index: usize },
    /// Click on an upload label or an image preview
    OpenPicker { name: String },
}

impl Interaction {
    pub fn name(&self) -> &str {
        match self {
            Interaction::Slide { name, .. }
            | Interaction::Toggle { name }
            | Interaction::Choose { name, .. }
            | Interaction::Select { name, .. }
            | Interaction::OpenPicker { name } => name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InteractionOutcome {
    /// The store changed and the update callback ran
    Applied,
    /// Unknown target, wrong widget kind or invalid option; nothing changed
    Ignored,
    /// The host should show a file picker and later complete the ticket
    UploadRequested(UploadTicket),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_frontend_messages() {
        let json = r#"[
            {"type": "slide", "name": "speed", "value": 7.5},
            {"type": "toggle", "name": "glow"},
            {"type": "choose", "name": "colorMode", "index": 2},
            {"type": "openPicker", "name": "image"}
        ]"#;

        let interactions: Vec<Interaction> = serde_json::from_str(json).unwrap();

        assert_eq!(
            interactions[0],
            Interaction::Slide {
                name: "speed".into(),
                value: 7.5
            }
        );
        assert_eq!(interactions[2].name(), "colorMode");
        assert!(matches!(interactions[3], Interaction::OpenPicker { .. }));
    }
}
