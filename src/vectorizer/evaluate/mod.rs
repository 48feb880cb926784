pub mod scoring;
pub mod ranking;
