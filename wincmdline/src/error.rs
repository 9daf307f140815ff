use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandLineError {
    #[error("no command was provided")]
    MissingCommand,

    #[error("command contains an embedded NUL at offset {offset}")]
    NulInCommand { offset: usize },

    #[error("argument {index} contains an embedded NUL at offset {offset}")]
    NulInArgument { index: usize, offset: usize },

    #[error("command line size computation overflowed")]
    Overflow,

    #[error("failed to allocate {len} elements for the command line")]
    OutOfMemory {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}
