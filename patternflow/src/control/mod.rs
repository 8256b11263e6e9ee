pub mod config;
pub mod icons;
pub mod image_upload;
pub mod interaction;
pub mod param_value;
pub mod params;
pub mod renderer;
pub mod schema;
pub mod widgets;

pub use config::{LoadedPattern, load_pattern_file, parse_pattern};
pub use icons::Icon;
pub use image_upload::{ImageFile, UploadError, UploadTicket};
pub use interaction::{Interaction, InteractionOutcome};
pub use param_value::ParamValue;
pub use params::Params;
pub use renderer::ControlRenderer;
pub use schema::{
    GroupMarker, ParamSpec, PatternSchema, SchemaBuilder, SchemaEntry,
    SchemaIssue, WidgetKind,
};
pub use widgets::{Section, WidgetBinding, WidgetState, WidgetTree};
