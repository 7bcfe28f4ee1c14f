pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::daily_buckets;
pub use exec::exec;
pub use output::{output_calendar, output_json, output_ndjson};
