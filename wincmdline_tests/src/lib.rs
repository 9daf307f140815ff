//! Shared support for the integration tests: a reference argv-reconstruction
//! parser (the consumer-side convention the builder targets) and a
//! deterministic generator of hostile argument strings.

const QUOTE: u16 = b'"' as u16;
const BACKSLASH: u16 = b'\\' as u16;
const SPACE: u16 = b' ' as u16;
const TAB: u16 = b'\t' as u16;

pub fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Splits a flat wide command line back into argument strings using the
/// classic rules: space/tab separate outside quotes, a quote toggles quoted
/// mode, 2n backslashes before a quote collapse to n, 2n+1 backslashes
/// before a quote collapse to n plus a literal quote, and backslashes not
/// before a quote are literal.
pub fn parse_command_line(units: &[u16]) -> Vec<Vec<u16>> {
    let mut argv = Vec::new();
    let len = units.len();
    let mut i = 0;

    while i < len {
        while i < len && (units[i] == SPACE || units[i] == TAB) {
            i += 1;
        }
        if i == len {
            break;
        }

        let mut current = Vec::new();
        let mut in_quotes = false;
        while i < len {
            if !in_quotes && (units[i] == SPACE || units[i] == TAB) {
                break;
            }
            if units[i] == BACKSLASH {
                let run_start = i;
                while i < len && units[i] == BACKSLASH {
                    i += 1;
                }
                let run = i - run_start;
                if i < len && units[i] == QUOTE {
                    current.extend(std::iter::repeat_n(BACKSLASH, run / 2));
                    if run % 2 == 1 {
                        current.push(QUOTE);
                    } else {
                        in_quotes = !in_quotes;
                    }
                    i += 1;
                } else {
                    current.extend(std::iter::repeat_n(BACKSLASH, run));
                }
            } else if units[i] == QUOTE {
                in_quotes = !in_quotes;
                i += 1;
            } else {
                current.push(units[i]);
                i += 1;
            }
        }
        argv.push(current);
    }

    argv
}

/// Tiny multiplicative congruential generator so the randomized round-trip
/// test is reproducible without extra dependencies.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0
    }

    pub fn below(&mut self, bound: usize) -> usize {
        (self.next() >> 33) as usize % bound
    }
}

const HOSTILE_ALPHABET: &[u16] = &[
    b'a' as u16,
    b'b' as u16,
    BACKSLASH,
    QUOTE,
    SPACE,
    TAB,
];

pub fn hostile_argument(rng: &mut Lcg, max_len: usize) -> Vec<u16> {
    let len = rng.below(max_len + 1);
    (0..len)
        .map(|_| HOSTILE_ALPHABET[rng.below(HOSTILE_ALPHABET.len())])
        .collect()
}
