pub mod cli;
pub mod error;
pub mod fill;
pub mod git;
pub mod heat;
pub mod logging;
pub mod model;
pub mod rewrite;
pub mod util;
