//! CLI commands

mod changelog;
mod init;
mod name;
mod validate;

pub use changelog::ChangelogCommand;
pub use init::InitCommand;
pub use name::NameCommand;
pub use validate::ValidateCommand;
