//! Core types and rules shared by the refresher and the viewer.
pub mod bulletins;
pub mod content;
pub mod departments;

pub use bulletins::{FILLER_BULLETIN, fallback_bulletins, normalize_bulletins};
pub use content::{BULLETIN_COUNT, Bulletins, ContentDocument, DepartmentEntry, today};
pub use departments::{DEPARTMENTS, Department, topic_hint};
