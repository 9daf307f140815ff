pub mod builder;
pub mod error;
pub mod escape;
pub mod measure;
pub mod wide;

pub use builder::{CommandLine, CommandLineBuilder, build_command_line};
pub use error::CommandLineError;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
