//! Debugger data models shown by the panels.
//!
//! These are plain state containers; a revision counter stands in for change
//! notifications.

pub mod breakpoints;
pub mod callstack;
pub mod sources;
pub mod variables;

pub use breakpoints::{Breakpoint, BreakpointsModel};
pub use callstack::{CallstackModel, Frame};
pub use sources::{Source, SourcesModel};
pub use variables::{convert_type, ConvertedValue, Scope, Variable, VariablesModel};
