pub mod config;
pub mod dataset;
pub mod images;
pub mod medium;
