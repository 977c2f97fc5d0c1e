//! Low-level drawing helpers shared by the panels.

pub mod text_utils;
