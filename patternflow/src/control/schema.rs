//! Declarative description of a pattern's tunable values.
//!
//! A [`PatternSchema`] pairs an ordered list of [`SchemaEntry`] items with the
//! default value of every parameter. Schemas are plain data: authored in Rust
//! with [`SchemaBuilder`] or loaded from a pattern file (see
//! [`super::config`]), then handed to
//! [`super::renderer::ControlRenderer::generate_controls`].

use std::fmt;

use super::icons::Icon;
use super::param_value::ParamValue;
use super::params::Params;
use crate::core::util::{HashSet, safe_range};

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    Slider { min: f32, max: f32, step: f32 },
    Toggle,
    /// Each option is a group of CSS colors shown as one swatch strip
    Palette { options: Vec<Vec<String>> },
    /// Each option is a single CSS color
    Color { options: Vec<String> },
    Select { options: Vec<String> },
    ImageUpload,
}

impl WidgetKind {
    /// Number of selectable options for option based kinds
    pub fn option_count(&self) -> Option<usize> {
        match self {
            WidgetKind::Palette { options } => Some(options.len()),
            WidgetKind::Color { options } => Some(options.len()),
            WidgetKind::Select { options } => Some(options.len()),
            _ => None,
        }
    }

    pub fn variant_str(&self) -> &'static str {
        match self {
            WidgetKind::Slider { .. } => "slider",
            WidgetKind::Toggle => "toggle",
            WidgetKind::Palette { .. } => "palette",
            WidgetKind::Color { .. } => "color",
            WidgetKind::Select { .. } => "select",
            WidgetKind::ImageUpload => "imageUpload",
        }
    }
}

/// A schema entry that produces a widget and a parameter
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub label: String,
    pub kind: WidgetKind,
}

/// Starts a new visual section; not a parameter
#[derive(Clone, Debug, PartialEq)]
pub struct GroupMarker {
    pub title: String,
    pub icon: Option<Icon>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SchemaEntry {
    Group(GroupMarker),
    Param(ParamSpec),
    /// An entry whose widget kind is unknown or whose fields could not be
    /// read. Kept so it can be reported; never rendered.
    Unrecognized { name: Option<String>, kind: String },
}

impl SchemaEntry {
    pub fn param_name(&self) -> Option<&str> {
        match self {
            SchemaEntry::Param(spec) => Some(&spec.name),
            _ => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, SchemaEntry::Group(_))
    }
}

/// Problems [`PatternSchema::issues`] can find. None of them are fatal: the
/// renderer skips whatever it cannot render and keeps going.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaIssue {
    MissingDefault(String),
    ExtraDefault(String),
    DuplicateName(String),
    Unrecognized { name: Option<String>, kind: String },
    TypeMismatch { name: String, expected: String, found: String },
    OptionOutOfRange { name: String, index: usize, len: usize },
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaIssue::MissingDefault(name) => {
                write!(f, "`{}` has no default value", name)
            }
            SchemaIssue::ExtraDefault(name) => {
                write!(f, "default `{}` has no matching control", name)
            }
            SchemaIssue::DuplicateName(name) => {
                write!(f, "`{}` is declared more than once", name)
            }
            SchemaIssue::Unrecognized { name, kind } => write!(
                f,
                "unrecognized control `{}` of type `{}`",
                name.as_deref().unwrap_or("<unnamed>"),
                kind
            ),
            SchemaIssue::TypeMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "`{}` is a {} control but its default is a {} value",
                name, expected, found
            ),
            SchemaIssue::OptionOutOfRange { name, index, len } => write!(
                f,
                "`{}` defaults to option {} but only has {} options",
                name, index, len
            ),
        }
    }
}

/// Everything the control system consumes from a pattern module
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternSchema {
    pub defaults: Params,
    pub controls: Vec<SchemaEntry>,
}

impl PatternSchema {
    pub fn new(defaults: Params, controls: Vec<SchemaEntry>) -> Self {
        Self { defaults, controls }
    }

    pub fn params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.controls.iter().filter_map(|entry| match entry {
            SchemaEntry::Param(spec) => Some(spec),
            _ => None,
        })
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params().find(|spec| spec.name == name)
    }

    /// Rewrites authored defaults into the value domain of their widget
    /// kind where that is unambiguous. See [`ParamValue::coerce_for`].
    pub fn normalize_defaults(&mut self) {
        let conversions: Vec<(String, ParamValue)> = self
            .params()
            .filter_map(|spec| {
                let value = self.defaults.value(&spec.name)?;
                if value.fits(&spec.kind) {
                    return None;
                }
                value
                    .coerce_for(&spec.kind)
                    .map(|coerced| (spec.name.clone(), coerced))
            })
            .collect();

        for (name, value) in conversions {
            self.defaults.insert(&name, value);
        }
    }

    /// Checks the schema/defaults invariant: every parameter has exactly one
    /// well-typed default and there are no strays.
    pub fn issues(&self) -> Vec<SchemaIssue> {
        let mut issues = Vec::new();
        let mut seen: HashSet<&str> = HashSet::default();

        for entry in &self.controls {
            match entry {
                SchemaEntry::Group(_) => {}
                SchemaEntry::Unrecognized { name, kind } => {
                    issues.push(SchemaIssue::Unrecognized {
                        name: name.clone(),
                        kind: kind.clone(),
                    });
                }
                SchemaEntry::Param(spec) => {
                    if !seen.insert(&spec.name) {
                        issues
                            .push(SchemaIssue::DuplicateName(spec.name.clone()));
                        continue;
                    }
                    match self.defaults.value(&spec.name) {
                        None => issues.push(SchemaIssue::MissingDefault(
                            spec.name.clone(),
                        )),
                        Some(value) => {
                            if let Some(issue) = check_default(spec, value) {
                                issues.push(issue);
                            }
                        }
                    }
                }
            }
        }

        for name in self.defaults.names() {
            if !seen.contains(name) {
                issues.push(SchemaIssue::ExtraDefault(name.to_string()));
            }
        }

        issues
    }
}

fn check_default(spec: &ParamSpec, value: &ParamValue) -> Option<SchemaIssue> {
    if value.coerce_for(&spec.kind).is_none() {
        return Some(SchemaIssue::TypeMismatch {
            name: spec.name.clone(),
            expected: spec.kind.variant_str().to_string(),
            found: value.type_name().to_string(),
        });
    }

    match (spec.kind.option_count(), value.as_index()) {
        (Some(len), Some(index)) if index >= len => {
            Some(SchemaIssue::OptionOutOfRange {
                name: spec.name.clone(),
                index,
                len,
            })
        }
        _ => None,
    }
}

/// Authoring helper that declares each control together with its default so
/// the two can never drift apart.
///
/// # Example
/// ```rust
/// let schema = SchemaBuilder::new()
///     .group("Motion", Some(Icon::Play))
///     .slider("speed", "Speed", 2.0, (0.0, 10.0), 0.5)
///     .toggle("glow", "Glow", true)
///     .build();
/// ```
#[derive(Default)]
pub struct SchemaBuilder {
    defaults: Params,
    controls: Vec<SchemaEntry>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, entry: SchemaEntry) -> Self {
        self.controls.push(entry);
        self
    }

    pub fn param(
        mut self,
        name: &str,
        label: &str,
        kind: WidgetKind,
        default: impl Into<ParamValue>,
    ) -> Self {
        self.defaults.insert(name, default);
        self.entry(SchemaEntry::Param(ParamSpec {
            name: name.to_string(),
            label: label.to_string(),
            kind,
        }))
    }

    pub fn group(self, title: &str, icon: Option<Icon>) -> Self {
        self.entry(SchemaEntry::Group(GroupMarker {
            title: title.to_string(),
            icon,
        }))
    }

    pub fn slider(
        self,
        name: &str,
        label: &str,
        value: f32,
        range: (f32, f32),
        step: f32,
    ) -> Self {
        let (min, max) = safe_range(range.0, range.1);
        self.param(name, label, WidgetKind::Slider { min, max, step }, value)
    }

    pub fn toggle(self, name: &str, label: &str, value: bool) -> Self {
        self.param(name, label, WidgetKind::Toggle, value)
    }

    pub fn palette(
        self,
        name: &str,
        label: &str,
        value: usize,
        options: &[&[&str]],
    ) -> Self {
        let options = options
            .iter()
            .map(|colors| colors.iter().map(|c| c.to_string()).collect())
            .collect();
        self.param(name, label, WidgetKind::Palette { options }, value)
    }

    pub fn color<S>(
        self,
        name: &str,
        label: &str,
        value: usize,
        options: &[S],
    ) -> Self
    where
        S: AsRef<str>,
    {
        let options = options.iter().map(|s| s.as_ref().to_string()).collect();
        self.param(name, label, WidgetKind::Color { options }, value)
    }

    pub fn select<S>(
        self,
        name: &str,
        label: &str,
        value: usize,
        options: &[S],
    ) -> Self
    where
        S: AsRef<str>,
    {
        let options = options.iter().map(|s| s.as_ref().to_string()).collect();
        self.param(name, label, WidgetKind::Select { options }, value)
    }

    /// Image uploads always start empty
    pub fn image_upload(self, name: &str, label: &str) -> Self {
        self.param(name, label, WidgetKind::ImageUpload, String::new())
    }

    pub fn build(self) -> PatternSchema {
        PatternSchema::new(self.defaults, self.controls)
    }
}
