pub mod catalog_ops;
pub mod check;
pub mod color_picker;
pub mod form;
pub mod grouping;
pub mod reorder;
