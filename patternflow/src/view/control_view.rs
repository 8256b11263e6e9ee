use serde::{Deserialize, Serialize};

use crate::control::icons::Icon;
use crate::control::params::Params;
use crate::control::renderer::ControlRenderer;
use crate::control::schema::WidgetKind;
use crate::control::widgets::{WidgetBinding, WidgetState, WidgetTree};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlKind {
    Slider,
    Toggle,
    Palette,
    Color,
    Select,
    ImageUpload,
}

/// One widget, flattened into a single shape for every kind so frontends can
/// filter and map over controls without first switching on a variant key.
/// Fields that do not apply to a kind keep their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlView {
    pub kind: ControlKind,
    pub name: String,
    pub label: String,
    /// The raw store value, stringified
    pub value: String,
    /// What the widget shows next to its label
    pub display: String,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Select labels or single colors
    pub options: Vec<String>,
    /// Palette swatch groups
    pub swatches: Vec<Vec<String>>,
    pub active: Option<usize>,
    pub preview: Option<String>,
    /// False once an image has been uploaded and the preview replaces the
    /// upload affordance
    pub show_upload: bool,
}

impl Default for ControlView {
    fn default() -> Self {
        Self {
            kind: ControlKind::Slider,
            name: String::new(),
            label: String::new(),
            value: String::new(),
            display: String::new(),
            min: 0.0,
            max: 1.0,
            step: 1.0,
            options: vec![],
            swatches: vec![],
            active: None,
            preview: None,
            show_upload: false,
        }
    }
}

impl ControlView {
    pub fn from_binding(binding: &WidgetBinding, params: &Params) -> Self {
        let mut result = ControlView {
            name: binding.spec.name.clone(),
            label: binding.spec.label.clone(),
            value: params
                .value(binding.name())
                .map(|v| v.to_string())
                .unwrap_or_default(),
            active: binding.state.active_option(),
            ..Default::default()
        };

        match (&binding.spec.kind, &binding.state) {
            (
                WidgetKind::Slider { min, max, step },
                WidgetState::Slider { label, .. },
            ) => {
                result.kind = ControlKind::Slider;
                result.min = *min;
                result.max = *max;
                result.step = *step;
                result.display = label.clone();
            }
            (WidgetKind::Toggle, WidgetState::Toggle { active }) => {
                result.kind = ControlKind::Toggle;
                result.display = if *active { "On" } else { "Off" }.into();
            }
            (WidgetKind::Palette { options }, _) => {
                result.kind = ControlKind::Palette;
                result.swatches = options.clone();
                result.display = result
                    .active
                    .and_then(|i| options.get(i))
                    .map(|colors| colors.join(" "))
                    .unwrap_or_default();
            }
            (WidgetKind::Color { options }, _) => {
                result.kind = ControlKind::Color;
                result.options = options.clone();
                result.display = active_label(result.active, options);
            }
            (WidgetKind::Select { options }, _) => {
                result.kind = ControlKind::Select;
                result.options = options.clone();
                result.display = active_label(result.active, options);
            }
            (WidgetKind::ImageUpload, WidgetState::ImageUpload { preview }) => {
                result.kind = ControlKind::ImageUpload;
                result.show_upload = preview.is_none();
                result.display = preview
                    .as_deref()
                    .map(describe_data_uri)
                    .unwrap_or_else(|| "Upload image".into());
                result.preview = preview.clone();
            }
            // Renderer never pairs a kind with another kind's state
            (kind, _) => {
                result.kind = ControlKind::from(kind);
            }
        }

        result
    }
}

impl From<&WidgetKind> for ControlKind {
    fn from(kind: &WidgetKind) -> Self {
        match kind {
            WidgetKind::Slider { .. } => ControlKind::Slider,
            WidgetKind::Toggle => ControlKind::Toggle,
            WidgetKind::Palette { .. } => ControlKind::Palette,
            WidgetKind::Color { .. } => ControlKind::Color,
            WidgetKind::Select { .. } => ControlKind::Select,
            WidgetKind::ImageUpload => ControlKind::ImageUpload,
        }
    }
}

fn active_label(active: Option<usize>, options: &[String]) -> String {
    active
        .and_then(|i| options.get(i))
        .cloned()
        .unwrap_or_default()
}

fn describe_data_uri(uri: &str) -> String {
    let mime = uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .unwrap_or("image");
    format!("{} ({} chars)", mime, uri.len())
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub title: Option<String>,
    pub icon: Option<Icon>,
    pub icon_svg: Option<String>,
    pub controls: Vec<ControlView>,
}

/// Everything a frontend needs to draw a control panel
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub sections: Vec<SectionView>,
}

impl PanelView {
    pub fn from_renderer(renderer: &ControlRenderer) -> Self {
        Self::from_tree(renderer.tree(), renderer.params_ref())
    }

    /// Empty sections are kept except for a headerless root, so group
    /// markers with no parameters still show up as headings.
    pub fn from_tree(tree: &WidgetTree, params: &Params) -> Self {
        let sections = tree
            .sections()
            .iter()
            .filter(|s| s.header.is_some() || !s.widgets.is_empty())
            .map(|section| SectionView {
                title: section.header.as_ref().map(|h| h.title.clone()),
                icon: section.header.as_ref().and_then(|h| h.icon),
                icon_svg: section
                    .header
                    .as_ref()
                    .and_then(|h| h.icon)
                    .map(|icon| icon.svg().to_string()),
                controls: tree
                    .section_bindings(section)
                    .map(|b| ControlView::from_binding(b, params))
                    .collect(),
            })
            .collect();

        Self { sections }
    }

    pub fn controls(&self) -> impl Iterator<Item = &ControlView> {
        self.sections.iter().flat_map(|s| s.controls.iter())
    }

    pub fn control(&self, name: &str) -> Option<&ControlView> {
        self.controls().find(|c| c.name == name)
    }
}
