pub mod metric;
pub mod tenant;
pub mod template;
