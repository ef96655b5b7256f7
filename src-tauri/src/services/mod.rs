pub mod archive;
pub mod catalog;
pub mod config;
pub mod images;
pub mod pipeline;
