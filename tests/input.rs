use stipula::error::StoreError;
use stipula::input::InputParser;
use stipula::store::{ParameterStore, ValueStore};

fn args(tokens: &[&str]) -> InputParser {
    InputParser::from_args(tokens.iter().map(|t| t.to_string()))
}

#[test]
fn keys_pair_with_following_values() {
    let input = args(&["--threads", "8", "--case", "run1"]);
    assert_eq!(input.value("threads").unwrap(), "8");
    assert_eq!(input.value("case").unwrap(), "run1");
}

#[test]
fn a_bare_flag_has_an_empty_value() {
    let input = args(&["--verbose", "--threads", "8"]);
    assert!(input.contains("verbose"));
    assert_eq!(input.value("verbose").unwrap(), "");
}

#[test]
fn dashes_are_removed_from_keys() {
    let input = args(&["--max-size", "10"]);
    assert!(input.contains("maxsize"));
    assert_eq!(input.value("maxsize").unwrap(), "10");
}

#[test]
fn a_missing_argument_is_a_key_not_found() {
    let input = args(&["--threads", "8"]);
    let err = input.value("tolerance").unwrap_err();
    assert_eq!(
        err,
        StoreError::KeyNotFound {
            key: "tolerance".to_owned()
        }
    );
}

#[test]
fn populate_infers_value_types() {
    let input = args(&["--threads", "8", "--tolerance", "0.5", "--verbose", "--case", "run1"]);
    let mut store = ParameterStore::new();
    input.populate(&mut store);
    assert_eq!(*store.get::<i64>("threads").unwrap(), 8);
    assert_eq!(*store.get::<f64>("tolerance").unwrap(), 0.5);
    assert_eq!(*store.get::<bool>("verbose").unwrap(), true);
    assert_eq!(store.get::<String>("case").unwrap(), "run1");
}

#[test]
fn help_entries_are_listed() {
    let mut input = args(&[]);
    input.add_help("threads", "worker threads", "number of worker threads");
    input.add_help("case", "case name", "name of the case to run");
    let help = input.print_help();
    assert!(help.contains("threads worker threads number of worker threads\n"));
    assert!(help.contains("case case name name of the case to run\n"));
}

#[test]
fn print_lists_decomposed_arguments() {
    let input = args(&["--threads", "8", "--verbose"]);
    let printed = input.print();
    assert!(printed.contains("threads 8\n"));
    assert!(printed.contains("verbose \n"));
}
