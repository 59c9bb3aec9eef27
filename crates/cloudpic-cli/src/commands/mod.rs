pub mod common;
pub mod completions;
pub mod destroy;
pub mod sign;
pub mod upload;
