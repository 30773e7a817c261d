//! Data models

pub mod farmer;
pub mod recommendation;
pub mod pest_report;
pub mod soil_test;

pub use farmer::*;
pub use recommendation::*;
pub use pest_report::*;
pub use soil_test::*;
