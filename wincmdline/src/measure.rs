use crate::error::CommandLineError;

pub(crate) const QUOTE: u16 = b'"' as u16;
pub(crate) const BACKSLASH: u16 = b'\\' as u16;
pub(crate) const SPACE: u16 = b' ' as u16;
pub(crate) const TAB: u16 = b'\t' as u16;
pub(crate) const LINE_FEED: u16 = b'\n' as u16;
pub(crate) const VERTICAL_TAB: u16 = 0x0b;

/// Per-argument sizing decided before any output buffer exists: whether the
/// argument must be surrounded by quotes, and exactly how many code units its
/// emitted form occupies (separator and terminator excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgPlan {
    pub quoted: bool,
    pub units: usize,
}

pub(crate) fn forces_quoting(unit: u16) -> bool {
    matches!(unit, SPACE | TAB | LINE_FEED | VERTICAL_TAB | QUOTE)
}

pub fn plan(argument: &[u16]) -> Result<ArgPlan, CommandLineError> {
    if argument.is_empty() {
        // Emitted as a bare quote pair.
        return Ok(ArgPlan {
            quoted: true,
            units: 2,
        });
    }

    if !argument.iter().copied().any(forces_quoting) {
        // Verbatim copy; the slice length is already a valid usize, so no
        // further length arithmetic happens on this path.
        return Ok(ArgPlan {
            quoted: false,
            units: argument.len(),
        });
    }

    Ok(ArgPlan {
        quoted: true,
        units: quoted_len(argument)?,
    })
}

fn quoted_len(argument: &[u16]) -> Result<usize, CommandLineError> {
    let mut total: usize = 2;
    let mut i = 0;
    while i < argument.len() {
        let run_start = i;
        while i < argument.len() && argument[i] == BACKSLASH {
            i += 1;
        }
        let run = i - run_start;

        let contribution = if i == argument.len() {
            // Trailing run: every backslash doubles so the closing quote
            // appended afterwards is not read as escaped.
            checked_mul(run, 2)?
        } else if argument[i] == QUOTE {
            i += 1;
            checked_add(checked_mul(run, 2)?, 2)?
        } else {
            i += 1;
            checked_add(run, 1)?
        };
        total = checked_add(total, contribution)?;
    }
    Ok(total)
}

pub(crate) fn checked_add(a: usize, b: usize) -> Result<usize, CommandLineError> {
    a.checked_add(b).ok_or(CommandLineError::Overflow)
}

pub(crate) fn checked_mul(a: usize, b: usize) -> Result<usize, CommandLineError> {
    a.checked_mul(b).ok_or(CommandLineError::Overflow)
}
