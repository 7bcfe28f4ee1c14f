pub mod apply;
pub mod exec;
pub mod output;
pub mod plan;

pub use apply::apply_plan;
pub use exec::exec;
pub use plan::{plan_window, PlanOptions};
