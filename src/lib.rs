pub mod traits;
pub mod layout;
pub mod model;
pub mod session;
pub mod writer;
pub mod demo;

// Export traits
pub use traits::SessionReader;

// Export layout engine
pub use layout::{
    CaretIcon, CellBox, CellStyle, BoxSizing, ColumnResizeController, ColumnState,
    PanelCollapseController, PanelId, PanelSlot, PanelState, RedistributionPolicy,
    SplitContainer, TableLayout, padding_diff,
    COLLAPSED_RELATIVE_SIZE, EXPANDED_RELATIVE_SIZE,
};

// Export debugger models
pub use model::{
    Breakpoint, BreakpointsModel, CallstackModel, Frame,
    Source, SourcesModel, Scope, Variable, VariablesModel,
    ConvertedValue, convert_type,
};

// Export session snapshot support
pub use session::{DebugSession, JsonSessionReader, parse_session};
pub use writer::SessionWriter;
pub use demo::DemoSessionReader;
