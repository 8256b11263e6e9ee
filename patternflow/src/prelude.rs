pub use crate::control::*;
pub use crate::core::logging::{init_logger, init_logger_with};
pub use crate::core::logging::{debug, error, info, trace, warn};
pub use crate::core::util::HashMap;
pub use crate::core::util::HashSet;
pub use crate::core::util::bool_to_f32;
pub use crate::core::util::safe_range;
pub use crate::runtime::registry::{PatternConfig, PatternRegistry};
pub use crate::runtime::session::{Gallery, Thumbnail, ViewState};
pub use crate::view::PanelView;
pub use crate::warn_once;
