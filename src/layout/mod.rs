//! Layout engine for debugger panels.
//!
//! - `split_container` - ordered panels with relative sizes and splitter handles
//! - `collapse` - caret-driven collapse/expand of split panels
//! - `table_layout` - column geometry shared by a table header and its rows
//! - `column_resize` - drag gestures that resize adjacent columns

pub mod split_container;
pub mod collapse;
pub mod table_layout;
pub mod column_resize;

pub use split_container::{
    PanelId, PanelSlot, SplitContainer, COLLAPSED_RELATIVE_SIZE, EXPANDED_RELATIVE_SIZE,
};
pub use collapse::{CaretIcon, PanelCollapseController, PanelState, RedistributionPolicy};
pub use table_layout::{padding_diff, BoxSizing, CellBox, CellStyle, TableLayout};
pub use column_resize::{ColumnResizeController, ColumnState};
