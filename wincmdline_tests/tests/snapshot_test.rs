use wincmdline::CommandLineBuilder;

fn rendered(command: &str, args: &[&str]) -> String {
    let mut builder = CommandLineBuilder::new_str(command);
    for arg in args {
        builder = builder.arg_str(arg);
    }
    builder.build().unwrap().to_string()
}

#[test]
fn scenario_table_snapshots() {
    let lines = [
        rendered("app.exe", &["hello"]),
        rendered("app.exe", &["a b"]),
        rendered("app.exe", &[""]),
        rendered("app.exe", &[r"a\b"]),
        rendered("app.exe", &["a\"b"]),
        rendered("app.exe", &[r"a \"]),
        rendered(r"C:\Program Files\app.exe", &["--log", "out dir\\", ""]),
    ]
    .join("\n");

    insta::assert_snapshot!("scenario_table", lines);
}
