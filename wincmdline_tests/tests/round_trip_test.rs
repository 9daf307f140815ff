use similar_asserts::assert_eq;
use wincmdline::{CommandLineBuilder, escape, measure};
use wincmdline_tests::{Lcg, hostile_argument, parse_command_line, wide};

fn round_trips(command: &str, args: &[&str]) {
    let mut builder = CommandLineBuilder::new_str(command);
    for arg in args {
        builder = builder.arg_str(arg);
    }
    let line = builder.build().unwrap();

    let mut expected = vec![wide(command)];
    expected.extend(args.iter().map(|a| wide(a)));
    assert_eq!(parse_command_line(line.as_wide()), expected);
}

#[test]
fn plain_arguments_round_trip() {
    round_trips("app.exe", &["hello", "world"]);
}

#[test]
fn whitespace_arguments_round_trip() {
    round_trips("app.exe", &["a b", "c\td", "e\nf", "g\u{b}h"]);
}

#[test]
fn empty_arguments_round_trip() {
    round_trips("app.exe", &["", "x", ""]);
}

#[test]
fn quote_and_backslash_soup_round_trips() {
    round_trips(
        "app.exe",
        &[
            "a\"b",
            r#"\""#,
            r"trailing\",
            r"double\\",
            r#"mix \" of "everything" \\"#,
            r#""quoted from both ends""#,
        ],
    );
}

#[test]
fn quoted_command_round_trips() {
    round_trips(r"C:\Program Files\app.exe", &["a b", r"c\"]);
}

#[test]
fn empty_command_round_trips_as_empty_token() {
    round_trips("", &["arg"]);
}

#[test]
fn randomized_inputs_round_trip_and_sizes_agree() {
    let mut rng = Lcg::new(0x77696e63);

    for _ in 0..2000 {
        let command = hostile_argument(&mut rng, 12);
        let arg_count = rng.below(4);
        let args: Vec<Vec<u16>> = (0..arg_count)
            .map(|_| hostile_argument(&mut rng, 12))
            .collect();

        // Measured length must match what the escaper actually emits.
        for piece in std::iter::once(&command).chain(&args) {
            let plan = measure::plan(piece).unwrap();
            if plan.quoted {
                let mut out = Vec::new();
                escape::escape_into(&mut out, piece);
                assert_eq!(out.len(), plan.units, "piece: {piece:?}");
            } else {
                assert_eq!(piece.len(), plan.units);
            }
        }

        let line = CommandLineBuilder::new(&command).args(&args).build().unwrap();
        assert_eq!(*line.as_wide_with_nul().last().unwrap(), 0);

        let mut expected = vec![command.clone()];
        expected.extend(args.iter().cloned());
        assert_eq!(
            parse_command_line(line.as_wide()),
            expected,
            "line: {}",
            line
        );
    }
}
