//! Message storage, resolution and rendering.

mod engine;
mod error;
mod localized;
mod resolution;
mod selection;
mod store;

pub use engine::{BasicTemplateEngine, EngineRegistry, Segment, TemplateEngine, join_segments};
pub use error::{LoadError, RenderError};
pub use localized::select_localized;
pub use resolution::{LanguageResolutionFn, basic_language_resolution};
pub use selection::{is_candidate, most_specific, specificity};
pub use store::MessageStore;
