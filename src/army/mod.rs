//! Army list aggregate - the points-capped list being built
//!
//! ## Key Types
//!
//! - `ArmyList`: chosen units plus the points ceiling they must stay under
//! - `UnitGroup`: one category's slice of the list, in first-seen order
//! - `Session`: the explicit "no army" / "army" state owned by the caller
//! - `ExportArtifact`: rendered list plus suggested file name

pub mod list;
pub mod render;
pub mod session;

pub use list::{ArmyList, UnitGroup, MAX_POINTS_LIMIT, MIN_POINTS_LIMIT};
pub use render::{render_text, ExportArtifact};
pub use session::Session;
