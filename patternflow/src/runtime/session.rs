//! The gallery host: a template view listing every pattern and a workspace
//! view with one pattern open and its control panel generated.

use log::{debug, info};

use super::registry::PatternRegistry;
use crate::control::params::Params;
use crate::control::renderer::ControlRenderer;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ViewState {
    #[default]
    Templates,
    Workspace {
        pattern: String,
    },
}

/// A template card. Its params are a private copy of the pattern's
/// defaults, never shared with an open session or other thumbnails.
#[derive(Clone, Debug, PartialEq)]
pub struct Thumbnail {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub params: Params,
}

struct OpenPattern {
    name: String,
    defaults: Params,
    renderer: ControlRenderer,
}

pub struct Gallery {
    registry: PatternRegistry,
    view: ViewState,
    open: Option<OpenPattern>,
}

impl Gallery {
    pub fn new(registry: PatternRegistry) -> Self {
        Self {
            registry,
            view: ViewState::Templates,
            open: None,
        }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn templates(&self) -> Vec<Thumbnail> {
        self.registry
            .entries()
            .map(|entry| Thumbnail {
                name: entry.name.clone(),
                display_name: entry.display_name.clone(),
                description: entry.description.clone(),
                params: entry.schema().defaults,
            })
            .collect()
    }

    /// Tears down any open session and opens `name` with a freshly generated
    /// control panel. `on_update` receives the store after every change.
    pub fn open_pattern<F>(
        &mut self,
        name: &str,
        on_update: F,
    ) -> Result<&mut ControlRenderer, String>
    where
        F: FnMut(&Params) + 'static,
    {
        let entry = self
            .registry
            .get(name)
            .ok_or_else(|| format!("unknown pattern: {}", name))?;

        if let Some(previous) = self.open.take() {
            debug!("Closing {}", previous.name);
        }

        let schema = entry.schema();
        let mut renderer = ControlRenderer::new(on_update);
        renderer.generate_controls(&schema);
        info!("Opened {} ({})", entry.display_name, entry.name);

        self.view = ViewState::Workspace {
            pattern: name.to_string(),
        };
        let open = self.open.insert(OpenPattern {
            name: name.to_string(),
            defaults: schema.defaults,
            renderer,
        });

        Ok(&mut open.renderer)
    }

    /// Returns false when no pattern is open
    pub fn reset_pattern(&mut self) -> bool {
        match self.open.as_mut() {
            Some(open) => {
                open.renderer.reset_to_defaults(&open.defaults);
                true
            }
            None => false,
        }
    }

    pub fn go_to_templates(&mut self) {
        self.open = None;
        self.view = ViewState::Templates;
    }

    pub fn current_pattern(&self) -> Option<&str> {
        self.open.as_ref().map(|open| open.name.as_str())
    }

    pub fn renderer(&self) -> Option<&ControlRenderer> {
        self.open.as_ref().map(|open| &open.renderer)
    }

    pub fn renderer_mut(&mut self) -> Option<&mut ControlRenderer> {
        self.open.as_mut().map(|open| &mut open.renderer)
    }

    /// What the render loop reads every frame
    pub fn frame_params(&self) -> Option<Params> {
        self.renderer().map(ControlRenderer::params)
    }
}
