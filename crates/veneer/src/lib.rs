//! # Veneer - Styled Terminal Console
//!
//! `veneer` gives command-line tools a consistent, styled output
//! vocabulary: horizontal rules, semantic message panels
//! (error/warning/info/note), tables with alternating row styling, raw
//! inline writes, and a helper that runs an external command with timing
//! feedback.
//!
//! ## Core Concepts
//!
//! - [`StyledConsole`]: the single facade owning the terminal handle, the
//!   style profile, and the command timer
//! - [`StyleProfile`]: justification, colors, and box-drawing choices
//!   applied to subsequent draw operations
//! - [`StyleSpec`]: a typed, validated style descriptor
//!   (`"bold yellow"`, `"black on red"`, `"#ffdd00 on #ffdd00"`)
//! - [`draw`]: the string-producing primitives behind the console methods
//!
//! ## Quick Start
//!
//! ```rust
//! use veneer::{StyleSpec, StyledConsole};
//!
//! let mut console = StyledConsole::with_width(60);
//!
//! console.labeled_rule("clients").unwrap();
//! console.panel("Running a query").unwrap();
//! console
//!     .table(
//!         &["client_name", "orders"],
//!         &[vec!["Acme", "12"], vec!["Globex", "3"]],
//!     )
//!     .unwrap();
//!
//! console.set_line_style(StyleSpec::parse("blue").unwrap());
//! console.info("Query done").unwrap();
//! ```
//!
//! ## Styling
//!
//! Style descriptors are parsed and validated up front; a typo fails at
//! [`StyleSpec::parse`] rather than surfacing later inside a draw call.
//! Colors may be named ANSI colors, `bright_` variants, 256-color palette
//! indices, or hex RGB (downmapped to the 256-color palette).
//!
//! ## Running Commands
//!
//! [`StyledConsole::run_command`] runs a shell command with inherited
//! standard streams and logs the elapsed whole seconds since the previous
//! run finished. The child's exit status is deliberately not interpreted;
//! [`StyledConsole::try_run_command`] returns it for callers that care.
//!
//! Veneer is single-threaded: one console per process, no internal
//! locking. The terminal handle is reachable via
//! [`StyledConsole::term`] for primitives beyond this vocabulary.

pub mod console;
pub mod draw;
mod error;
pub mod style;

pub use crate::console::{StyleProfile, StyledConsole};
pub use draw::{BoxStyle, Grid, Panel, Severity};
pub use error::RenderError;
pub use style::{ColorDef, Justify, StyleError, StyleSpec};
