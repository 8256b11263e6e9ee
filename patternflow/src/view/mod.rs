//! Adapters that materialize a renderer's widget tree for a concrete
//! frontend.

pub mod control_view;
pub mod terminal;

pub use control_view::{ControlKind, ControlView, PanelView, SectionView};
