/*!
This crate contains the data plumbing around the metrics: loading and validating result csvs, the bundled sample dataset, the session state model, and the report consumed by any presentation layer.
*/

pub mod load;
pub mod report;
pub mod sample;
pub mod session;
