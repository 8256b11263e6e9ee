//! Turns a [`PatternSchema`] into a widget tree and keeps the parameter store
//! in sync with it.
//!
//! # Flow
//! ```md
//! generate_controls(schema) -> store = defaults, tree rebuilt
//! user interaction          -> store mutated -> on_update(&store)
//! reset_to_defaults(d)      -> store = d, every widget resynced -> on_update
//! render loop               -> params() every frame
//! ```

use std::fmt;

use log::{debug, trace, warn};

use super::image_upload::{ImageFile, UploadError, UploadTicket};
use super::interaction::{Interaction, InteractionOutcome};
use super::param_value::ParamValue;
use super::params::Params;
use super::schema::{PatternSchema, SchemaEntry, WidgetKind};
use super::widgets::{
    WidgetBinding, WidgetState, WidgetTree, format_slider_value,
    snap_slider_value,
};

/// Change-notification callback. Receives the full store after every
/// mutation. Its result is not inspected.
pub type UpdateFn = Box<dyn FnMut(&Params)>;

/// Owns the parameter store and the widget bindings for one pattern at a
/// time. Each open pattern (or thumbnail) gets its own instance.
pub struct ControlRenderer {
    on_update: UpdateFn,
    params: Params,
    tree: WidgetTree,
    session: u64,
    generated: bool,
}

impl ControlRenderer {
    pub fn new<F>(on_update: F) -> Self
    where
        F: FnMut(&Params) + 'static,
    {
        Self {
            on_update: Box::new(on_update),
            params: Params::default(),
            tree: WidgetTree::default(),
            session: 0,
            generated: false,
        }
    }

    /// A renderer whose updates nobody listens to, e.g. for previews where
    /// the render loop polls [`Self::params`]
    pub fn detached() -> Self {
        Self::new(|_| {})
    }

    pub fn has_controls(&self) -> bool {
        self.generated
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn binding(&self, name: &str) -> Option<&WidgetBinding> {
        self.tree.binding(name)
    }

    /// Independent copy of the current store
    pub fn params(&self) -> Params {
        self.params.clone()
    }

    /// Borrowing alternative to [`Self::params`] for hot paths
    pub fn params_ref(&self) -> &Params {
        &self.params
    }

    /// Discards every existing widget, seeds the store from the schema's
    /// defaults and builds one binding per parameter entry in schema order.
    /// Widgets are nested under the most recent group marker.
    ///
    /// Entries that cannot be rendered (unrecognized kind, missing or
    /// ill-typed default, duplicate name) are logged and skipped; the rest of
    /// the schema still renders.
    pub fn generate_controls(&mut self, schema: &PatternSchema) {
        self.tree = WidgetTree::default();
        self.params = schema.defaults.clone();
        self.session += 1;
        self.generated = true;

        for entry in &schema.controls {
            match entry {
                SchemaEntry::Group(marker) => {
                    self.tree.open_section(marker.clone());
                }
                SchemaEntry::Unrecognized { name, kind } => {
                    warn!(
                        "Skipping control `{}` with unrecognized type `{}`",
                        name.as_deref().unwrap_or("<unnamed>"),
                        kind
                    );
                }
                SchemaEntry::Param(spec) => {
                    if self.tree.binding(&spec.name).is_some() {
                        warn!(
                            "Skipping duplicate control `{}`. Only the first \
                            declaration is rendered.",
                            spec.name
                        );
                        continue;
                    }

                    let Some(value) = self.params.value(&spec.name) else {
                        warn!(
                            "Skipping control `{}`: no default value",
                            spec.name
                        );
                        continue;
                    };

                    let Some(state) = WidgetState::for_value(spec, value)
                    else {
                        warn!(
                            "Skipping control `{}`: a {} value cannot drive \
                            a {} widget",
                            spec.name,
                            value.type_name(),
                            spec.kind.variant_str()
                        );
                        continue;
                    };

                    if matches!(
                        state,
                        WidgetState::Choice { active: None }
                            | WidgetState::Select { selected: None }
                    ) {
                        warn!(
                            "Default for `{}` is not a valid option index",
                            spec.name
                        );
                    }

                    self.tree.push(WidgetBinding {
                        spec: spec.clone(),
                        state,
                    });
                }
            }
        }

        debug!(
            "Generated {} controls in {} sections",
            self.tree.bindings().len(),
            self.tree.sections().len()
        );
    }

    /// Replaces the store with a copy of `defaults` and brings every widget's
    /// visual state in line with it without rebuilding the tree. Notifies
    /// once, after all widgets are synced.
    pub fn reset_to_defaults(&mut self, defaults: &Params) {
        self.params = defaults.clone();

        for binding in self.tree.bindings_mut() {
            let state = self
                .params
                .value(&binding.spec.name)
                .and_then(|value| WidgetState::for_value(&binding.spec, value));

            match state {
                Some(state) => binding.state = state,
                None => {
                    warn!(
                        "Reset value for `{}` does not fit its widget",
                        binding.spec.name
                    );
                    binding.state = blank_state(&binding.spec.kind);
                }
            }
        }

        self.notify();
    }

    /// Applies one user interaction
    pub fn handle(&mut self, interaction: Interaction) -> InteractionOutcome {
        trace!("Interaction: {:?}", interaction);

        match interaction {
            Interaction::Slide { name, value } => {
                applied(self.slide(&name, value))
            }
            Interaction::Toggle { name } => applied(self.toggle(&name)),
            Interaction::Choose { name, index } => {
                applied(self.choose(&name, index))
            }
            Interaction::Select { name, index } => {
                applied(self.select(&name, index))
            }
            Interaction::OpenPicker { name } => self
                .begin_image_upload(&name)
                .map_or(InteractionOutcome::Ignored, |ticket| {
                    InteractionOutcome::UploadRequested(ticket)
                }),
        }
    }

    /// Slider drag tick. The raw value is clamped and snapped to the
    /// slider's step grid before it is stored.
    pub fn slide(&mut self, name: &str, raw: f32) -> bool {
        if !raw.is_finite() {
            warn!("Ignoring non-finite value for slider `{}`", name);
            return false;
        }

        if !self.params.has(name) {
            return unstored(name);
        }
        let Some(binding) = self.tree.binding_mut(name) else {
            return ignored(name, "slide");
        };
        let WidgetKind::Slider { min, max, step } = binding.spec.kind else {
            return ignored(name, "slide");
        };

        let value = snap_slider_value(raw, min, max, step);
        binding.state = WidgetState::Slider {
            value,
            label: format_slider_value(value, step),
        };

        self.commit(name, ParamValue::Float(value))
    }

    /// Toggle click
    pub fn toggle(&mut self, name: &str) -> bool {
        if !self.params.has(name) {
            return unstored(name);
        }
        let Some(binding) = self.tree.binding_mut(name) else {
            return ignored(name, "toggle");
        };
        let WidgetState::Toggle { active } = &mut binding.state else {
            return ignored(name, "toggle");
        };

        *active = !*active;
        let value = *active;

        self.commit(name, ParamValue::Bool(value))
    }

    /// Click on option `index` of a palette or color widget. Exactly one
    /// option is active afterwards.
    pub fn choose(&mut self, name: &str, index: usize) -> bool {
        if !self.params.has(name) {
            return unstored(name);
        }
        let Some(binding) = self.tree.binding_mut(name) else {
            return ignored(name, "choose");
        };
        let len = match &binding.spec.kind {
            WidgetKind::Palette { options } => options.len(),
            WidgetKind::Color { options } => options.len(),
            _ => return ignored(name, "choose"),
        };
        if index >= len {
            warn!("`{}` has no option {}", name, index);
            return false;
        }

        binding.state = WidgetState::Choice {
            active: Some(index),
        };

        self.commit(name, ParamValue::Index(index))
    }

    /// Dropdown change on an enum select
    pub fn select(&mut self, name: &str, index: usize) -> bool {
        if !self.params.has(name) {
            return unstored(name);
        }
        let Some(binding) = self.tree.binding_mut(name) else {
            return ignored(name, "select");
        };
        let WidgetKind::Select { options } = &binding.spec.kind else {
            return ignored(name, "select");
        };
        if index >= options.len() {
            warn!("`{}` has no option {}", name, index);
            return false;
        }

        binding.state = WidgetState::Select {
            selected: Some(index),
        };

        self.commit(name, ParamValue::Index(index))
    }

    /// Starts an image upload for `name`. The store is untouched until the
    /// returned ticket is completed.
    pub fn begin_image_upload(&mut self, name: &str) -> Option<UploadTicket> {
        match self.tree.binding(name).map(|b| &b.spec.kind) {
            Some(WidgetKind::ImageUpload) => Some(UploadTicket {
                session: self.session,
                name: name.to_string(),
            }),
            _ => {
                ignored(name, "upload");
                None
            }
        }
    }

    /// Finishes an upload started with [`Self::begin_image_upload`]. Failed
    /// reads and tickets from a previous session leave everything as it was.
    /// When several uploads overlap, the last one to complete wins.
    pub fn complete_image_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<ImageFile, UploadError>,
    ) -> bool {
        if ticket.session != self.session {
            debug!(
                "Dropping upload for `{}` from a previous session",
                ticket.name
            );
            return false;
        }

        let file = match result {
            Ok(file) => file,
            Err(err) => {
                warn!("Image upload for `{}` failed: {}", ticket.name, err);
                return false;
            }
        };

        if !self.params.has(&ticket.name) {
            return unstored(&ticket.name);
        }
        let Some(binding) = self.tree.binding_mut(&ticket.name) else {
            return ignored(&ticket.name, "upload");
        };

        let uri = file.to_data_uri();
        binding.state = WidgetState::ImageUpload {
            preview: Some(uri.clone()),
        };
        debug!(
            "Loaded {} ({}, {} bytes) into `{}`",
            file.name,
            file.mime,
            file.bytes.len(),
            ticket.name
        );

        self.commit(&ticket.name, ParamValue::Text(uri))
    }

    fn commit(&mut self, name: &str, value: ParamValue) -> bool {
        if !self.params.set(name, value) {
            return unstored(name);
        }
        self.notify();
        true
    }

    fn notify(&mut self) {
        (self.on_update)(&self.params);
    }
}

impl Default for ControlRenderer {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for ControlRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlRenderer")
            .field("params", &self.params)
            .field("tree", &self.tree)
            .field("session", &self.session)
            .field("on_update", &"<function>")
            .finish()
    }
}

fn applied(ok: bool) -> InteractionOutcome {
    if ok {
        InteractionOutcome::Applied
    } else {
        InteractionOutcome::Ignored
    }
}

fn ignored(name: &str, action: &str) -> bool {
    warn!("Cannot {} `{}`: no matching control", action, name);
    false
}

/// Widgets whose name is missing from the store stay inert so their visual
/// state never drifts from the store
fn unstored(name: &str) -> bool {
    warn!("`{}` is not in the parameter store", name);
    false
}

fn blank_state(kind: &WidgetKind) -> WidgetState {
    match kind {
        WidgetKind::Slider { min, step, .. } => WidgetState::Slider {
            value: *min,
            label: format_slider_value(*min, *step),
        },
        WidgetKind::Toggle => WidgetState::Toggle { active: false },
        WidgetKind::Palette { .. } | WidgetKind::Color { .. } => {
            WidgetState::Choice { active: None }
        }
        WidgetKind::Select { .. } => WidgetState::Select { selected: None },
        WidgetKind::ImageUpload => WidgetState::ImageUpload { preview: None },
    }
}
