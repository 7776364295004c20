use std::io::Cursor;
use tstamp::ui::prompt::confirm_from;

fn answer(input: &str) -> (bool, String) {
    let mut out = Vec::new();
    let ok = confirm_from("Reset default?", &mut Cursor::new(input), &mut out);
    (ok, String::from_utf8(out).unwrap())
}

#[test]
fn test_yes_answers_confirm() {
    for input in ["y\n", "yes\n", "Y\n", " YES \n"] {
        assert!(answer(input).0, "{input:?}");
    }
}

#[test]
fn test_anything_else_aborts() {
    for input in ["n\n", "\n", "", "yep\n", "no\n"] {
        assert!(!answer(input).0, "{input:?}");
    }
}

#[test]
fn test_prompt_is_written_before_reading() {
    let (_, out) = answer("y\n");
    assert_eq!(out, "Reset default? (y/n) ");
}
