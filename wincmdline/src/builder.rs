use std::fmt;

use crate::error::CommandLineError;
use crate::escape;
use crate::measure::{self, ArgPlan, SPACE, checked_add, checked_mul};
use crate::wide;

// Vec refuses allocations whose byte size exceeds isize::MAX; a request that
// large is a pathological input, not memory pressure.
const MAX_ALLOC_BYTES: usize = isize::MAX as usize;

/// Collects a command and its arguments, then produces the flat
/// NUL-terminated wide command line in one allocation.
#[derive(Debug, Clone, Default)]
pub struct CommandLineBuilder {
    command: Option<Vec<u16>>,
    arguments: Vec<Vec<u16>>,
}

impl CommandLineBuilder {
    pub fn new(command: &[u16]) -> Self {
        Self {
            command: Some(command.to_vec()),
            arguments: Vec::new(),
        }
    }

    pub fn new_str(command: &str) -> Self {
        Self {
            command: Some(wide::to_wide(command)),
            arguments: Vec::new(),
        }
    }

    pub fn command(mut self, command: &[u16]) -> Self {
        self.command = Some(command.to_vec());
        self
    }

    pub fn arg(mut self, argument: &[u16]) -> Self {
        self.arguments.push(argument.to_vec());
        self
    }

    pub fn arg_str(mut self, argument: &str) -> Self {
        self.arguments.push(wide::to_wide(argument));
        self
    }

    pub fn args<I, A>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u16]>,
    {
        self.arguments
            .extend(arguments.into_iter().map(|a| a.as_ref().to_vec()));
        self
    }

    /// Measures every piece, validates the total size, then writes the whole
    /// line into one exactly-sized allocation. On any error nothing beyond
    /// measurement scratch was allocated and no partial line escapes.
    pub fn build(&self) -> Result<CommandLine, CommandLineError> {
        let command = self
            .command
            .as_deref()
            .ok_or(CommandLineError::MissingCommand)?;
        if let Some(offset) = find_nul(command) {
            return Err(CommandLineError::NulInCommand { offset });
        }
        for (index, argument) in self.arguments.iter().enumerate() {
            if let Some(offset) = find_nul(argument) {
                return Err(CommandLineError::NulInArgument { index, offset });
            }
        }

        let command_plan = measure::plan(command)?;
        let mut plans = reserve_exact::<ArgPlan>(self.arguments.len())?;
        for argument in &self.arguments {
            plans.push(measure::plan(argument)?);
        }

        let units = total_units(command_plan, &plans)?;
        let mut out = reserve_exact::<u16>(units)?;

        write_piece(&mut out, command, command_plan);
        for (argument, plan) in self.arguments.iter().zip(&plans) {
            out.push(SPACE);
            write_piece(&mut out, argument, *plan);
        }
        out.push(0);
        debug_assert_eq!(out.len(), units);

        Ok(CommandLine { units: out })
    }
}

pub fn build_command_line(
    command: &[u16],
    arguments: &[&[u16]],
) -> Result<CommandLine, CommandLineError> {
    CommandLineBuilder::new(command).args(arguments).build()
}

/// A built command line: owned wide code units ending in exactly one NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    units: Vec<u16>,
}

impl CommandLine {
    pub fn as_wide(&self) -> &[u16] {
        &self.units[..self.units.len() - 1]
    }

    pub fn as_wide_with_nul(&self) -> &[u16] {
        &self.units
    }

    pub fn into_wide_with_nul(self) -> Vec<u16> {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&wide::display_lossy(self.as_wide()))
    }
}

fn find_nul(units: &[u16]) -> Option<usize> {
    units.iter().position(|&unit| unit == 0)
}

// Command, one space per argument, each argument, one trailing NUL.
fn total_units(command: ArgPlan, arguments: &[ArgPlan]) -> Result<usize, CommandLineError> {
    let mut total = command.units;
    for plan in arguments {
        total = checked_add(total, 1)?;
        total = checked_add(total, plan.units)?;
    }
    checked_add(total, 1)
}

// One allocation discipline for the output buffer and the plan scratch:
// checked byte sizing, then a fallible reserve.
fn reserve_exact<T>(len: usize) -> Result<Vec<T>, CommandLineError> {
    let bytes = checked_mul(len, size_of::<T>())?;
    if bytes > MAX_ALLOC_BYTES {
        return Err(CommandLineError::Overflow);
    }
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|source| CommandLineError::OutOfMemory { len, source })?;
    Ok(out)
}

fn write_piece(out: &mut Vec<u16>, argument: &[u16], plan: ArgPlan) {
    let start = out.len();
    if plan.quoted {
        escape::escape_into(out, argument);
    } else {
        out.extend_from_slice(argument);
    }
    debug_assert_eq!(out.len() - start, plan.units);
}
