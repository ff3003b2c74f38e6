//! Strongly-typed identifiers for detected languages and frameworks.
//!
//! Both ID enums carry a `Custom(String)` variant so that documents written by
//! newer versions, or edited by hand, still load.

#[macro_use]
pub mod id_enum_macro;

pub mod framework_id;
pub mod language_id;

pub use framework_id::FrameworkId;
pub use language_id::{LanguageId, FALLBACK_PORT};
