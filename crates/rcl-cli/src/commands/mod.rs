pub mod analyze;
pub mod dataset;
pub mod dispatch;
pub mod key;
pub mod log;
pub mod metrics;
pub mod parse;
pub mod participant;
pub mod reference;
pub mod schema;
pub mod shared;
