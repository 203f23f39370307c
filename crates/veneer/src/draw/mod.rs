//! String-producing rendering primitives.
//!
//! Everything here renders to `String`; printing happens at the call site
//! (usually [`StyledConsole`](crate::StyledConsole)). This keeps the
//! geometry and styling of rules, panels, and grids directly testable.

mod border;
mod grid;
mod panel;
mod rule;
pub(crate) mod text;

pub use border::{BoxChars, BoxStyle};
pub use grid::Grid;
pub use panel::{Panel, Severity};
pub use rule::render_rule;
pub use text::{display_width, pad, wrap};
