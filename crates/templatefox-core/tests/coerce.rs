//! Value coercion behavior: structured-literal sniffing with graceful
//! degradation to the original string.

use serde_json::{Value, json};

use templatefox_core::coerce::coerce;

#[test]
fn plain_strings_pass_through_unchanged() {
    for text in ["hello", "  padded  ", "a [bracket] inside", ""] {
        assert_eq!(coerce(json!(text)), json!(text));
    }
}

#[test]
fn numeric_and_boolean_looking_text_is_not_coerced() {
    assert_eq!(coerce(json!("42")), json!("42"));
    assert_eq!(coerce(json!("3.5")), json!("3.5"));
    assert_eq!(coerce(json!("true")), json!("true"));
    assert_eq!(coerce(json!("false")), json!("false"));
}

#[test]
fn non_strings_pass_through_unchanged() {
    assert_eq!(coerce(Value::Null), Value::Null);
    assert_eq!(coerce(json!(true)), json!(true));
    assert_eq!(coerce(json!(7)), json!(7));
    assert_eq!(coerce(json!([1, 2])), json!([1, 2]));
    assert_eq!(coerce(json!({"a": 1})), json!({"a": 1}));
}

#[test]
fn array_literal_text_parses_to_an_array() {
    assert_eq!(coerce(json!("[1, 2]")), json!([1, 2]));
    assert_eq!(
        coerce(json!(r#"[{"product": "Widget", "qty": 2}]"#)),
        json!([{"product": "Widget", "qty": 2}])
    );
}

#[test]
fn object_literal_text_parses_to_an_object() {
    assert_eq!(coerce(json!(r#"{"name": "John"}"#)), json!({"name": "John"}));
}

#[test]
fn literal_text_is_trimmed_before_sniffing_and_parsing() {
    assert_eq!(coerce(json!("  [1, 2]  ")), json!([1, 2]));
    assert_eq!(coerce(json!("\n{\"a\": 1}\t")), json!({"a": 1}));
}

#[test]
fn invalid_literal_text_stays_the_original_untrimmed_string() {
    for text in ["[1, 2", "{invalid", "  {broken ", "[1,, 2]"] {
        assert_eq!(coerce(json!(text)), json!(text));
    }
}
