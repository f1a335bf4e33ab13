use super::*;

#[test]
fn empty_token_list_has_no_options() {
    let parsed = parse_args(Vec::<String>::new());
    assert!(parsed.options.is_empty());
    assert!(parsed.input().is_none());
    assert!(!parsed.wants_help());
}

#[test]
fn numeric_values_are_coerced() {
    assert_eq!(OptionValue::coerce("128"), OptionValue::Number(128.0));
    assert_eq!(OptionValue::coerce("2.5"), OptionValue::Number(2.5));
    assert_eq!(OptionValue::coerce("-3"), OptionValue::Number(-3.0));
    assert_eq!(
        OptionValue::coerce("cool.gif"),
        OptionValue::Text("cool.gif".to_string())
    );
    assert_eq!(OptionValue::coerce("NaN"), OptionValue::Text("NaN".to_string()));
    assert_eq!(OptionValue::coerce(""), OptionValue::Text(String::new()));
}

#[test]
fn first_bare_token_is_the_input() {
    let parsed = parse_args(["my_anim.svg", "--output", "cool.gif", "--colors", "128", "extra.svg"]);
    assert_eq!(
        parsed.input(),
        Some(&OptionValue::Text("my_anim.svg".to_string()))
    );
    assert_eq!(
        parsed.get("output"),
        Some(&OptionValue::Text("cool.gif".to_string()))
    );
    assert_eq!(parsed.get("colors"), Some(&OptionValue::Number(128.0)));
}

#[test]
fn input_may_follow_options() {
    let parsed = parse_args(["--fps", "30", "wave.svg"]);
    assert_eq!(parsed.get("fps"), Some(&OptionValue::Number(30.0)));
    assert_eq!(parsed.input(), Some(&OptionValue::Text("wave.svg".to_string())));
}

#[test]
fn options_without_values_are_flags() {
    let parsed = parse_args(["--help"]);
    assert_eq!(parsed.get("help"), Some(&OptionValue::Flag));
    assert!(parsed.wants_help());

    let parsed = parse_args(["--keep-frames", "--fps", "10"]);
    assert_eq!(parsed.get("keep-frames"), Some(&OptionValue::Flag));
    assert_eq!(parsed.get("fps"), Some(&OptionValue::Number(10.0)));
}

#[test]
fn explicit_help_value_uses_truthiness() {
    assert!(parse_args(["--help", "1"]).wants_help());
    assert!(!parse_args(["--help", "0"]).wants_help());
}

#[test]
fn later_occurrence_of_an_option_wins() {
    let parsed = parse_args(["--fps", "10", "--fps", "12"]);
    assert_eq!(parsed.get("fps"), Some(&OptionValue::Number(12.0)));
}
