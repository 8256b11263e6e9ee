//! Toolkit independent widget descriptions.
//!
//! The renderer never touches a real UI. It maintains a [`WidgetTree`] of
//! sections and [`WidgetBinding`]s whose [`WidgetState`] is exactly what a
//! UI adapter needs to draw (see [`crate::view`]).

use super::param_value::ParamValue;
use super::schema::{GroupMarker, ParamSpec, WidgetKind};
use crate::core::util::{decimal_places, round_to, safe_range};

/// Formats a slider value for display.
///
/// Whole steps of 1 or more show the value as-is. Anything finer shows 3
/// decimals when `step < 0.01`, else 2, with trailing zeros dropped so a
/// value of `7.5` reads `"7.5"` rather than `"7.50"`.
pub fn format_slider_value(value: f32, step: f32) -> String {
    if step >= 1.0 && step.fract() == 0.0 {
        return format!("{}", value);
    }

    let decimals = if step < 0.01 { 3 } else { 2 };
    let fixed = format!("{:.*}", decimals, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" | "" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Clamps `value` into `[min, max]` and snaps it onto the `min + k * step`
/// grid, the same values a stepped range input can produce
pub fn snap_slider_value(value: f32, min: f32, max: f32, step: f32) -> f32 {
    if !min.is_finite() || !max.is_finite() {
        return value;
    }

    let (min, max) = safe_range(min, max);
    let clamped = value.clamp(min, max);
    if step <= 0.0 || !step.is_finite() {
        return clamped;
    }

    let steps = ((clamped - min) / step).round();
    let places = decimal_places(step).max(decimal_places(min));
    round_to(min + steps * step, places).clamp(min, max)
}

/// The live visual state of one widget
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetState {
    Slider {
        /// Handle position
        value: f32,
        /// Formatted value label
        label: String,
    },
    Toggle {
        active: bool,
    },
    /// Palette and color choices. At most one option is active.
    Choice {
        active: Option<usize>,
    },
    Select {
        selected: Option<usize>,
    },
    ImageUpload {
        /// Data URI shown as thumbnail. While `None` the upload affordance
        /// is shown instead.
        preview: Option<String>,
    },
}

impl WidgetState {
    /// Builds the visual state `spec` should show for `value`. Returns
    /// `None` when the value does not belong to the widget's kind.
    pub fn for_value(spec: &ParamSpec, value: &ParamValue) -> Option<Self> {
        let state = match &spec.kind {
            WidgetKind::Slider { step, .. } => {
                let value = value.as_float()?;
                WidgetState::Slider {
                    value,
                    label: format_slider_value(value, *step),
                }
            }
            WidgetKind::Toggle => WidgetState::Toggle {
                active: value.as_bool()?,
            },
            WidgetKind::Palette { options } => WidgetState::Choice {
                active: valid_index(value.as_index()?, options.len()),
            },
            WidgetKind::Color { options } => WidgetState::Choice {
                active: valid_index(value.as_index()?, options.len()),
            },
            WidgetKind::Select { options } => WidgetState::Select {
                selected: valid_index(value.as_index()?, options.len()),
            },
            WidgetKind::ImageUpload => {
                let uri = value.as_text()?;
                WidgetState::ImageUpload {
                    preview: (!uri.is_empty()).then(|| uri.to_string()),
                }
            }
        };

        Some(state)
    }

    /// The option index currently marked active, for option based widgets
    pub fn active_option(&self) -> Option<usize> {
        match self {
            WidgetState::Choice { active } => *active,
            WidgetState::Select { selected } => *selected,
            _ => None,
        }
    }
}

fn valid_index(index: usize, len: usize) -> Option<usize> {
    (index < len).then_some(index)
}

/// Associates a schema entry with its rendered state
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetBinding {
    pub spec: ParamSpec,
    pub state: WidgetState,
}

impl WidgetBinding {
    pub fn name(&self) -> &str {
        &self.spec.name
    }
}

/// A visual section. The root section has no header and holds the widgets
/// declared before the first group marker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    pub header: Option<GroupMarker>,
    /// Indexes into [`WidgetTree::bindings`]
    pub widgets: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetTree {
    sections: Vec<Section>,
    bindings: Vec<WidgetBinding>,
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self {
            sections: vec![Section::default()],
            bindings: vec![],
        }
    }
}

impl WidgetTree {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All bindings in creation (schema) order
    pub fn bindings(&self) -> &[WidgetBinding] {
        &self.bindings
    }

    pub fn binding(&self, name: &str) -> Option<&WidgetBinding> {
        self.bindings.iter().find(|b| b.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub(crate) fn binding_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut WidgetBinding> {
        self.bindings.iter_mut().find(|b| b.name() == name)
    }

    pub(crate) fn bindings_mut(&mut self) -> &mut [WidgetBinding] {
        &mut self.bindings
    }

    pub(crate) fn open_section(&mut self, header: GroupMarker) {
        self.sections.push(Section {
            header: Some(header),
            widgets: vec![],
        });
    }

    /// Appends to the most recently opened section
    pub(crate) fn push(&mut self, binding: WidgetBinding) {
        let index = self.bindings.len();
        self.bindings.push(binding);
        if let Some(section) = self.sections.last_mut() {
            section.widgets.push(index);
        }
    }

    pub fn section_bindings<'a>(
        &'a self,
        section: &'a Section,
    ) -> impl Iterator<Item = &'a WidgetBinding> + 'a {
        section.widgets.iter().filter_map(|i| self.bindings.get(*i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_steps() {
        assert_eq!(format_slider_value(7.0, 1.0), "7");
        assert_eq!(format_slider_value(1200.0, 100.0), "1200");
        assert_eq!(format_slider_value(2.5, 1.0), "2.5");
    }

    #[test]
    fn test_format_fine_steps() {
        assert_eq!(format_slider_value(0.12345, 0.005), "0.123");
        assert_eq!(format_slider_value(7.5, 0.5), "7.5");
        assert_eq!(format_slider_value(0.333, 0.05), "0.33");
        assert_eq!(format_slider_value(2.0, 0.2), "2");
        assert_eq!(format_slider_value(0.0, 0.001), "0");
        assert_eq!(format_slider_value(0.002, 0.001), "0.002");
    }

    #[test]
    fn test_snap_slider_value() {
        assert_eq!(snap_slider_value(7.4, 0.0, 10.0, 0.5), 7.5);
        assert_eq!(snap_slider_value(7.55, 0.2, 10.0, 0.2), 7.6);
        assert_eq!(snap_slider_value(12.0, 0.0, 10.0, 0.5), 10.0);
        assert_eq!(snap_slider_value(-1.0, 0.0, 10.0, 0.5), 0.0);
        assert_eq!(snap_slider_value(1234.0, 100.0, 4000.0, 100.0), 1200.0);
    }

    #[test]
    fn test_state_for_value_rejects_wrong_kind() {
        let spec = ParamSpec {
            name: "glow".into(),
            label: "Glow".into(),
            kind: WidgetKind::Toggle,
        };

        assert_eq!(
            WidgetState::for_value(&spec, &ParamValue::Bool(true)),
            Some(WidgetState::Toggle { active: true })
        );
        assert_eq!(WidgetState::for_value(&spec, &ParamValue::Float(1.0)), None);
    }

    #[test]
    fn test_choice_state_ignores_out_of_range_index() {
        let spec = ParamSpec {
            name: "tint".into(),
            label: "Tint".into(),
            kind: WidgetKind::Color {
                options: vec!["#fff".into(), "#000".into()],
            },
        };

        assert_eq!(
            WidgetState::for_value(&spec, &ParamValue::Index(1)),
            Some(WidgetState::Choice { active: Some(1) })
        );
        assert_eq!(
            WidgetState::for_value(&spec, &ParamValue::Index(2)),
            Some(WidgetState::Choice { active: None })
        );
    }

    #[test]
    fn test_tree_nests_under_latest_section() {
        let binding = |name: &str| WidgetBinding {
            spec: ParamSpec {
                name: name.into(),
                label: name.into(),
                kind: WidgetKind::Toggle,
            },
            state: WidgetState::Toggle { active: false },
        };

        let mut tree = WidgetTree::default();
        tree.push(binding("a"));
        tree.open_section(GroupMarker {
            title: "G".into(),
            icon: None,
        });
        tree.push(binding("b"));
        tree.push(binding("c"));

        assert_eq!(tree.sections().len(), 2);
        assert_eq!(tree.sections()[0].widgets, vec![0]);
        assert_eq!(tree.sections()[1].widgets, vec![1, 2]);
        let names: Vec<&str> = tree
            .section_bindings(&tree.sections()[1])
            .map(WidgetBinding::name)
            .collect();
        assert_eq!(names, vec!["b", "c"]);
    }
}
