//! Small reusable rendering helpers shared by the panes

pub mod help_line;
pub mod popup;
pub mod spinner;
