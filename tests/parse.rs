use std::path::PathBuf;

use pargs::{Error, ErrorKind, FieldKind, LoadedArguments, MandatoryPolicy, Options, Target};

fn input(tokens: &[&str]) -> Options {
    Options::new().input(tokens.iter().copied())
}

#[derive(Target, Debug, Default, PartialEq)]
struct Verbose {
    #[pargs("flag:verbose")]
    verbose: bool,
}

#[derive(Target, Debug, Default, PartialEq)]
struct Short {
    #[pargs("flag:v")]
    verbose: bool,
}

#[derive(Target, Debug, Default, PartialEq)]
struct Renamed {
    #[pargs("flag:default-config")]
    totally_different_field_name: bool,
}

#[derive(Target, Debug, Default, PartialEq)]
struct Pair {
    #[pargs("flag:a")]
    a: bool,

    #[pargs("flag:b")]
    b: bool,
}

#[test]
fn number_is_not_a_target() {
    let mut x: i32 = 12;
    let err = pargs::parse(&mut x, None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidTargetType);
}

#[test]
fn enum_is_not_a_target() {
    #[derive(Target)]
    #[allow(dead_code)]
    enum Direction {
        Up,
        Down,
    }

    let mut direction = Direction::Up;
    let err = pargs::parse_from(&mut direction, &["--up"]).unwrap_err();

    assert_eq!(
        err,
        Error::InvalidTargetType { found: "enum" }
    );
}

#[test]
fn no_field_tagged() {
    #[derive(Target, Default)]
    #[allow(dead_code)]
    struct Arguments {
        verbose: bool,
        quiet: bool,
        config_path: String,
    }

    let mut args = Arguments::default();
    let err = pargs::parse(&mut args, None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::StructFieldNotTagged);
}

#[test]
fn one_untagged_field_fails_the_whole_struct() {
    #[derive(Target, Default)]
    #[allow(dead_code)]
    struct Arguments {
        #[pargs("flag:v")]
        verbose: bool,

        #[pargs("mandatory")]
        quiet: bool,
    }

    let mut args = Arguments::default();
    let err = pargs::parse(&mut args, Some(&input(&["-v"]))).unwrap_err();

    assert_eq!(err, Error::StructFieldNotTagged { field: "quiet" });
    assert!(!args.verbose);
}

#[test]
fn long_boolean_flag() {
    let mut args = Verbose::default();
    pargs::parse(&mut args, Some(&input(&["--verbose"]))).unwrap();

    assert!(args.verbose);
}

#[test]
fn absent_long_boolean_flag() {
    let mut args = Verbose::default();
    pargs::parse_from(&mut args, &[] as &[&str]).unwrap();
    assert!(!args.verbose);

    let mut args = Verbose::default();
    pargs::parse_from(&mut args, &["--other"]).unwrap();
    assert!(!args.verbose);
}

/// Binds every test harness flag that could plausibly appear on the command
/// line, so the result depends on what the process arguments hold.
#[derive(Target, Debug, Default, PartialEq)]
struct HarnessFlags {
    #[pargs("flag:nocapture")]
    nocapture: bool,

    #[pargs("flag:ignored")]
    ignored: bool,

    #[pargs("flag:include-ignored")]
    include_ignored: bool,

    #[pargs("flag:exact")]
    exact: bool,

    #[pargs("flag:q;quiet")]
    quiet: bool,

    #[pargs("flag:show-output")]
    show_output: bool,
}

#[test]
fn missing_input_falls_back_to_process_arguments() {
    let mut expected = HarnessFlags::default();
    pargs::parse_from(&mut expected, LoadedArguments::from_env().tokens()).unwrap();

    let mut from_none = HarnessFlags::default();
    pargs::parse(&mut from_none, None).unwrap();
    assert_eq!(from_none, expected);

    let mut from_default = HarnessFlags::default();
    pargs::parse(&mut from_default, Some(&Options::new())).unwrap();
    assert_eq!(from_default, expected);

    let mut from_empty = HarnessFlags::default();
    let options = Options::new().input(Vec::<String>::new());
    pargs::parse(&mut from_empty, Some(&options)).unwrap();
    assert_eq!(from_empty, expected);
}

#[test]
fn process_arguments_exclude_the_program_name() {
    let expected: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    assert_eq!(LoadedArguments::from_env().tokens(), expected.as_slice());
}

#[test]
fn short_boolean_flag() {
    let mut args = Short::default();
    pargs::parse(&mut args, Some(&input(&["-v"]))).unwrap();

    assert!(args.verbose);
}

#[test]
fn flag_value_different_than_field_name() {
    let mut args = Renamed::default();
    pargs::parse(&mut args, Some(&input(&["--default-config"]))).unwrap();

    assert!(args.totally_different_field_name);
}

#[test]
fn fresh_targets_get_identical_results() {
    let tokens = ["-b", "--unknown"];

    let mut first = Pair::default();
    let mut second = Pair::default();

    pargs::parse_from(&mut first, &tokens).unwrap();
    pargs::parse_from(&mut second, &tokens).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, Pair { a: false, b: true });
}

#[test]
fn token_exclusivity() {
    let mut args = Pair::default();
    pargs::parse_from(&mut args, &["-a", "-b"]).unwrap();
    assert_eq!(args, Pair { a: true, b: true });

    let mut args = Pair::default();
    pargs::parse_from(&mut args, &["-a"]).unwrap();
    assert_eq!(args, Pair { a: true, b: false });
}

#[test]
fn empty_flag_spec() {
    #[derive(Target, Default)]
    #[allow(dead_code)]
    struct Arguments {
        #[pargs("flag:")]
        verbose: bool,
    }

    let mut args = Arguments::default();
    let err = pargs::parse_from(&mut args, &["--verbose"]).unwrap_err();

    assert_eq!(err, Error::MissingFlagValue { field: "verbose" });
    assert_eq!(err.to_string(), r#"field "verbose": missing flag value"#);
}

#[test]
fn aliases() {
    #[derive(Target, Default)]
    struct Arguments {
        #[pargs("flag:v;verbose")]
        verbose: bool,
    }

    for token in ["-v", "--verbose"] {
        let mut args = Arguments::default();
        pargs::parse_from(&mut args, &[token]).unwrap();

        assert!(args.verbose, "token: {token}");
    }
}

#[test]
fn unsupported_field_kinds() {
    #[derive(Target, Default)]
    #[allow(dead_code)]
    struct Arguments {
        #[pargs("flag:v")]
        verbose: bool,

        #[pargs("flag:j;jobs")]
        jobs: u32,

        #[pargs("flag:config")]
        config: Option<PathBuf>,

        #[pargs("flag:I")]
        include: Vec<PathBuf>,
    }

    let mut args = Arguments::default();
    pargs::parse_from(&mut args, &["-v"]).unwrap();
    assert!(args.verbose);

    let cases = [
        ("--jobs", "jobs", FieldKind::Integer),
        ("--config", "config", FieldKind::Optional),
        ("-I", "include", FieldKind::Repeated),
    ];

    for (token, field, kind) in cases {
        let mut args = Arguments::default();
        let err = pargs::parse_from(&mut args, &["-v", token]).unwrap_err();

        assert_eq!(err, Error::UnsupportedFieldKind { field, kind });
        assert!(!args.verbose, "target was written before failing");
    }
}

#[test]
fn mandatory_policy() {
    #[derive(Target, Default)]
    struct Arguments {
        #[pargs("flag:y;yes,mandatory")]
        yes: bool,
    }

    let mut args = Arguments::default();
    pargs::parse(&mut args, Some(&input(&["--no"]))).unwrap();
    assert!(!args.yes);

    let options = input(&["--no"]).mandatory(MandatoryPolicy::Enforce);
    let err = pargs::parse(&mut args, Some(&options)).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"mandatory field "yes" was absent (expected -y, --yes)"#
    );

    let options = input(&["--yes"]).mandatory(MandatoryPolicy::Enforce);
    pargs::parse(&mut args, Some(&options)).unwrap();
    assert!(args.yes);
}

#[test]
fn tuple_and_unit_structs() {
    #[derive(Target, Default)]
    struct Flags(#[pargs("flag:x")] bool, #[pargs("flag:y")] bool);

    let mut flags = Flags::default();
    pargs::parse_from(&mut flags, &["-y"]).unwrap();
    assert!(!flags.0);
    assert!(flags.1);

    #[derive(Target)]
    struct Nothing;

    pargs::parse_from(&mut Nothing, &["-x"]).unwrap();
}

#[test]
fn raw_identifier_field_names() {
    #[derive(Target, Default)]
    #[allow(dead_code)]
    struct Arguments {
        #[pargs("flag:t")]
        r#type: bool,

        r#loop: bool,
    }

    let mut args = Arguments::default();
    let err = pargs::parse_from(&mut args, &["-t"]).unwrap_err();

    assert_eq!(err, Error::StructFieldNotTagged { field: "loop" });
}

#[test]
fn rules_can_be_inspected() {
    #[derive(Target, Default)]
    #[allow(dead_code)]
    struct Arguments {
        #[pargs("flag:n;dry-run,mandatory")]
        dry_run: bool,
    }

    let rules = pargs::introspect::<Arguments>().unwrap();
    let [rule] = rules.as_slice() else {
        panic!("expected exactly one rule, got {rules:?}");
    };

    assert_eq!(rule.name(), "dry_run");
    assert!(rule.mandatory());

    let spellings: Vec<String> = rule.spellings().map(|s| s.to_string()).collect();
    assert_eq!(spellings, ["-n", "--dry-run"]);
}
