pub mod commit;
pub mod repo;

pub use commit::{Committer, GitCli};
pub use repo::GitRepo;
