pub mod limit;
pub mod parse;
pub mod participant;
pub mod scoring;
