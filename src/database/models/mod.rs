pub mod club;
pub mod project;

pub use club::Club;
pub use project::Project;
