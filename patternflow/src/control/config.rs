//! Pattern files: a pattern's schema and defaults authored as YAML (JSON
//! works too since it is a YAML subset).
//!
//! ```yaml
//! name: neon_rings
//! display_name: Neon Rings
//! description: Concentric glowing rings
//! defaults:
//!   ringCount: 12
//!   showInner: true
//! controls:
//!   - group: Rings
//!     icon: layers
//!   - name: ringCount
//!     label: Layer Count
//!     type: slider
//!     min: 3
//!     max: 30
//!     step: 1
//!   - name: showInner
//!     label: Solid Core
//!     type: toggle
//! ```
//!
//! YAML merge keys (`<<: *anchor`) are resolved before decoding so common
//! slider settings can be shared between entries.

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;
use serde_yml::Value;
use yaml_merge_keys::merge_keys_serde_yml;

use super::icons::Icon;
use super::params::Params;
use super::schema::{
    GroupMarker, ParamSpec, PatternSchema, SchemaEntry, WidgetKind,
};
use crate::core::util::safe_range;

//------------------------------------------------------------------------------
// File Types
//------------------------------------------------------------------------------

#[derive(Deserialize, Debug)]
pub struct PatternFile {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub defaults: Params,
    #[serde(default)]
    pub controls: Vec<MaybeControlConfig>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum MaybeControlConfig {
    Group(GroupConfig),
    Control(ControlConfig),
    Other(Value),
}

#[derive(Deserialize, Debug)]
pub struct GroupConfig {
    pub group: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ControlConfig {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub control_type: String,
    #[serde(flatten)]
    pub config: Value,
}

#[derive(Deserialize, Debug)]
struct SliderConfig {
    min: f32,
    max: f32,
    #[serde(default = "default_step")]
    step: f32,
}

fn default_step() -> f32 {
    1.0
}

#[derive(Deserialize, Debug)]
struct OptionsConfig<T> {
    options: Vec<T>,
}

//------------------------------------------------------------------------------
// Loading
//------------------------------------------------------------------------------

/// A decoded pattern file
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPattern {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub category: Option<String>,
    pub schema: PatternSchema,
}

pub fn load_pattern_file(path: &Path) -> Result<LoadedPattern, String> {
    let source = fs::read_to_string(path).map_err(|err| {
        format!("failed to read pattern file '{}': {}", path.display(), err)
    })?;

    parse_pattern(&source)
        .map_err(|err| format!("{} in '{}'", err, path.display()))
}

pub fn parse_pattern(source: &str) -> Result<LoadedPattern, String> {
    let raw: Value = serde_yml::from_str(source)
        .map_err(|err| format!("failed to parse pattern: {}", err))?;

    let merged = merge_keys_serde_yml(raw).map_err(|err| {
        format!("failed to process YAML merge keys: {}", err)
    })?;

    let file: PatternFile = serde_yml::from_value(merged)
        .map_err(|err| format!("failed to decode pattern: {}", err))?;

    Ok(LoadedPattern::from(file))
}

impl From<PatternFile> for LoadedPattern {
    fn from(file: PatternFile) -> Self {
        let controls = file.controls.into_iter().map(to_entry).collect();
        let mut schema = PatternSchema::new(file.defaults, controls);
        schema.normalize_defaults();

        Self {
            display_name: file.display_name.unwrap_or_else(|| file.name.clone()),
            name: file.name,
            description: file.description,
            category: file.category,
            schema,
        }
    }
}

fn to_entry(config: MaybeControlConfig) -> SchemaEntry {
    match config {
        MaybeControlConfig::Group(group) => {
            SchemaEntry::Group(GroupMarker {
                icon: group.icon.as_deref().and_then(parse_icon),
                title: group.group,
            })
        }
        MaybeControlConfig::Control(control) => {
            let name = control.name.clone();
            let kind = control.control_type.clone();
            match to_widget_kind(&control) {
                Ok(Some(widget_kind)) => SchemaEntry::Param(ParamSpec {
                    label: control.label.unwrap_or_else(|| name.clone()),
                    name,
                    kind: widget_kind,
                }),
                Ok(None) => SchemaEntry::Unrecognized {
                    name: Some(name),
                    kind,
                },
                Err(err) => {
                    warn!("Malformed `{}` control `{}`: {}", kind, name, err);
                    SchemaEntry::Unrecognized {
                        name: Some(name),
                        kind,
                    }
                }
            }
        }
        MaybeControlConfig::Other(value) => SchemaEntry::Unrecognized {
            name: value.get("name").and_then(Value::as_str).map(Into::into),
            kind: value
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("<missing>")
                .to_string(),
        },
    }
}

/// `Ok(None)` for widget kinds this crate does not know about
fn to_widget_kind(
    control: &ControlConfig,
) -> Result<Option<WidgetKind>, String> {
    let config = || control.config.clone();

    let kind = match control.control_type.as_str() {
        "slider" => {
            let slider: SliderConfig = decode(config())?;
            if !slider.min.is_finite() || !slider.max.is_finite() {
                return Err("slider bounds must be finite".into());
            }
            if slider.step <= 0.0 || !slider.step.is_finite() {
                return Err(format!("invalid step {}", slider.step));
            }
            let (min, max) = safe_range(slider.min, slider.max);
            WidgetKind::Slider {
                min,
                max,
                step: slider.step,
            }
        }
        "toggle" => WidgetKind::Toggle,
        "palette" => {
            let palette: OptionsConfig<Vec<String>> = decode(config())?;
            WidgetKind::Palette {
                options: palette.options,
            }
        }
        "color" => {
            let color: OptionsConfig<String> = decode(config())?;
            WidgetKind::Color {
                options: color.options,
            }
        }
        "select" => {
            let select: OptionsConfig<String> = decode(config())?;
            WidgetKind::Select {
                options: select.options,
            }
        }
        "imageUpload" => WidgetKind::ImageUpload,
        _ => return Ok(None),
    };

    Ok(Some(kind))
}

fn decode<T>(value: Value) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    serde_yml::from_value(value).map_err(|err| err.to_string())
}

fn parse_icon(id: &str) -> Option<Icon> {
    match id.parse() {
        Ok(icon) => Some(icon),
        Err(err) => {
            warn!("{}. Group will render without an icon.", err);
            None
        }
    }
}
