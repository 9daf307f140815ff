use crate::measure::{BACKSLASH, QUOTE};

/// Appends the quoted/escaped form of `argument` to `out`. Must stay in
/// lock-step with `measure::plan`: the builder sizes the buffer from the plan
/// and this writer has no way to report a shortfall.
pub fn escape_into(out: &mut Vec<u16>, argument: &[u16]) {
    out.push(QUOTE);

    let mut i = 0;
    while i < argument.len() {
        let run_start = i;
        while i < argument.len() && argument[i] == BACKSLASH {
            i += 1;
        }
        let run = i - run_start;

        if i == argument.len() {
            push_backslashes(out, run * 2);
            break;
        }

        if argument[i] == QUOTE {
            push_backslashes(out, run * 2 + 1);
        } else {
            push_backslashes(out, run);
        }
        out.push(argument[i]);
        i += 1;
    }

    out.push(QUOTE);
}

fn push_backslashes(out: &mut Vec<u16>, count: usize) {
    out.extend(std::iter::repeat_n(BACKSLASH, count));
}
