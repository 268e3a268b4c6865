//! Controllers layer - orchestration and coordination.
//!
//! - Editor host (single live editing surface)
//! - Syntax highlighting of the live surface

pub mod editor_host;
pub mod highlight;
