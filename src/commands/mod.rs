//! Command implementations

pub mod add;
pub mod add_directory;
pub mod base;
pub mod delete;
pub mod list;
pub mod reset;
pub mod run;
pub mod validators;

pub use add::AddRepoCommand;
pub use add_directory::AddDirectoryCommand;
pub use base::{Command, CommandContext, Outcome};
pub use delete::DeleteRepoCommand;
pub use list::ListCommand;
pub use reset::ResetConfigCommand;
pub use run::RunCommand;
pub use validators::UsageError;
