use super::detect;
use crate::env::EnvKind;
use crate::test_utils::code_cursor;

/// Detect on a `┇`-marked line; returns the env and the scoped substring
fn detect_at(marked: &str) -> (EnvKind, Option<String>) {
    let (code, cursor) = code_cursor(marked);
    let detection = detect(&code, cursor);
    let scoped = detection.scope.map(|(s, e)| {
        code.chars().skip(s).take(e - s + 1).collect::<String>()
    });
    (detection.env, scoped)
}

#[test]
fn test_detects_nothing_on_plain_code() {
    let (env, scope) = detect_at("const a┇ = 1");
    assert_eq!(env, EnvKind::Simple);
    assert_eq!(scope, None);
}

#[test]
fn test_does_not_fail_on_empty_code() {
    let (env, scope) = detect_at("┇");
    assert_eq!(env, EnvKind::Simple);
    assert_eq!(scope, None);
}

#[test]
fn test_detects_array() {
    let (env, scope) = detect_at("[ 1, 2, 3, ┇4 ]");
    assert_eq!(env, EnvKind::Array);
    assert_eq!(scope.as_deref(), Some("1, 2, 3, 4"));
}

#[test]
fn test_detects_object() {
    let (env, scope) = detect_at("{ a: 1, ┇b: 2 }");
    assert_eq!(env, EnvKind::Object);
    assert_eq!(scope.as_deref(), Some("a: 1, b: 2"));
}

#[test]
fn test_detects_bare_tag_attributes() {
    let (env, scope) = detect_at("<┇Component a b c />");
    assert_eq!(env, EnvKind::TagAttributes);
    assert_eq!(scope.as_deref(), Some("a b c"));
}

#[test]
fn test_detects_tag_attributes_with_values() {
    let (env, scope) = detect_at("<Component somePros={x┇} here=\"aa\" />");
    assert_eq!(env, EnvKind::TagAttributes);
    assert_eq!(scope.as_deref(), Some("somePros={x} here=\"aa\""));
}

#[test]
fn test_detects_tag_attributes_with_nested_values() {
    let (env, scope) = detect_at("<Component items┇={[1,2]} onClick={() => x()} cfg={{a:1}} />");
    assert_eq!(env, EnvKind::TagAttributes);
    assert_eq!(
        scope.as_deref(),
        Some("items={[1,2]} onClick={() => x()} cfg={{a:1}}")
    );
}

#[test]
fn test_detects_array_inside_tag_attribute() {
    let (env, scope) = detect_at("<Component items={[1,┇2,3]} />");
    assert_eq!(env, EnvKind::Array);
    assert_eq!(scope.as_deref(), Some("1,2,3"));
}

#[test]
fn test_detects_object_inside_attribute_fragment() {
    let (env, scope) = detect_at("items={{ a: 1, b: 2, ┇c: 3}}");
    assert_eq!(env, EnvKind::Object);
    assert_eq!(scope.as_deref(), Some("a: 1, b: 2, c: 3"));
}

#[test]
fn test_detects_function_params() {
    let (env, scope) = detect_at("(key: Key┇, value: number) => {}");
    assert_eq!(env, EnvKind::FunctionParams);
    assert_eq!(scope.as_deref(), Some("key: Key, value: number"));
}

#[test]
fn test_detects_call_arguments_as_function_params() {
    let (env, scope) = detect_at("onSubmit(varA, ┇vatB, \"something\")");
    assert_eq!(env, EnvKind::FunctionParams);
    assert_eq!(scope.as_deref(), Some("varA, vatB, \"something\""));
}

#[test]
fn test_keyword_parens_are_not_a_call() {
    let (env, scope) = detect_at("if (some && condi┇tion || here)");
    assert_eq!(env, EnvKind::Logical);
    assert_eq!(scope.as_deref(), Some("some && condition || here"));
}

#[test]
fn test_bare_parens_without_inner_operators_yield_line_logical() {
    // no call, no arrow, no operator inside the pair: the pair falls
    // through and the whole-line logical rule claims the cursor
    let (env, scope) = detect_at("(a, ┇b) && c");
    assert_eq!(env, EnvKind::Logical);
    assert_eq!(scope.as_deref(), Some("(a, b) && c"));
}

#[test]
fn test_detects_union() {
    let (env, scope) = detect_at("type Union = 'a' | '┇b' | 'c'");
    assert_eq!(env, EnvKind::Union);
    assert_eq!(scope.as_deref(), Some("'a' | 'b' | 'c'"));
}

#[test]
fn test_union_scope_stops_at_semicolon() {
    let (env, scope) = detect_at("type U = A | ┇B | C;");
    assert_eq!(env, EnvKind::Union);
    assert_eq!(scope.as_deref(), Some("A | B | C"));
}

#[test]
fn test_union_scope_stops_at_comment() {
    let (env, scope) = detect_at("type U = A | ┇B // members");
    assert_eq!(env, EnvKind::Union);
    assert_eq!(scope.as_deref(), Some("A | B"));
}

#[test]
fn test_detects_type_params_attached_to_identifier() {
    let (env, scope) = detect_at("let m: Map<Key, ┇Value> = x");
    assert_eq!(env, EnvKind::TypeParams);
    assert_eq!(scope.as_deref(), Some("Key, Value"));
}

#[test]
fn test_detects_type_params_of_generic_signature() {
    let (env, scope) = detect_at("fn apply<┇T, U>(t: T) {}");
    assert_eq!(env, EnvKind::TypeParams);
    assert_eq!(scope.as_deref(), Some("T, U"));
}

#[test]
fn test_unattached_angles_are_not_type_params() {
    // '<' preceded by '=' is a tag, not a generic
    let (env, _) = detect_at("const x = <C a ┇b />");
    assert_eq!(env, EnvKind::TagAttributes);
}

#[test]
fn test_detects_class_list_inside_class_attribute() {
    let (env, scope) = detect_at("<div class=\"bg red ┇large\"></div>");
    assert_eq!(env, EnvKind::ClassList);
    assert_eq!(scope.as_deref(), Some("bg red large"));
}

#[test]
fn test_detects_class_list_inside_class_name_attribute() {
    let (env, scope) = detect_at("<C className=\"p-2 ┇m-4\" id=\"x\" />");
    assert_eq!(env, EnvKind::ClassList);
    assert_eq!(scope.as_deref(), Some("p-2 m-4"));
}

#[test]
fn test_class_attribute_outside_cursor_stays_tag() {
    let (env, scope) = detect_at("<div class=\"bg red\" ┇id=\"x\"></div>");
    assert_eq!(env, EnvKind::TagAttributes);
    assert_eq!(scope.as_deref(), Some("class=\"bg red\" id=\"x\""));
}

#[test]
fn test_detects_logical_on_bare_line() {
    let (env, scope) = detect_at("a || b || ┇c || d");
    assert_eq!(env, EnvKind::Logical);
    assert_eq!(scope.as_deref(), Some("a || b || c || d"));
}

#[test]
fn test_detects_nested_object_inside_array() {
    let (env, scope) = detect_at("[ {┇a:1, b:2}, 1, 2, 3 ]");
    assert_eq!(env, EnvKind::Object);
    assert_eq!(scope.as_deref(), Some("a:1, b:2"));
}

#[test]
fn test_detects_outer_array_after_nested_object() {
    let (env, scope) = detect_at("[ {a:1, b:2}, 1, ┇2, 3 ]");
    assert_eq!(env, EnvKind::Array);
    assert_eq!(scope.as_deref(), Some("{a:1, b:2}, 1, 2, 3"));
}

#[test]
fn test_detects_array_inside_object() {
    let (env, scope) = detect_at("{ a: [1,┇2,3], b: [4,5,6] }");
    assert_eq!(env, EnvKind::Array);
    assert_eq!(scope.as_deref(), Some("1,2,3"));

    let (env, scope) = detect_at("{ a: [1,2,3], b: [4,┇5,6] }");
    assert_eq!(env, EnvKind::Array);
    assert_eq!(scope.as_deref(), Some("4,5,6"));
}

#[test]
fn test_detects_object_when_cursor_on_property_name() {
    let (env, scope) = detect_at("{ a┇: [1,2,3], b: [4,5,6] }");
    assert_eq!(env, EnvKind::Object);
    assert_eq!(scope.as_deref(), Some("a: [1,2,3], b: [4,5,6]"));
}

#[test]
fn test_scope_within_larger_assignment() {
    let (env, scope) = detect_at("const a: SomeType = [1, ┇2, 3]");
    assert_eq!(env, EnvKind::Array);
    assert_eq!(scope.as_deref(), Some("1, 2, 3"));

    let (env, scope) = detect_at("const my = { a: 1, b: 2┇ } // trailing");
    assert_eq!(env, EnvKind::Object);
    assert_eq!(scope.as_deref(), Some("a: 1, b: 2"));
}

#[test]
fn test_union_after_closed_generic() {
    // the generic's '>' sits before the cursor, so the union rule claims it
    let (env, scope) =
        detect_at("type U = Simple | Generic<T, X> | [string, number] | { a: number } | ┇never");
    assert_eq!(env, EnvKind::Union);
    assert_eq!(
        scope.as_deref(),
        Some("Simple | Generic<T, X> | [string, number] | { a: number } | never")
    );
}

#[test]
fn test_naive_pair_rescues_unbalanced_quote() {
    // the stray apostrophe poisons the quote mask; the naive probe recovers
    let (env, scope) = detect_at("it's [1, ┇2]");
    assert_eq!(env, EnvKind::Array);
    assert_eq!(scope.as_deref(), Some("1, 2"));
}

#[test]
fn test_quoted_scope_delimiters_are_excluded() {
    // scope purity: a detected scope never contains its own delimiters
    for marked in [
        "[ 1, 2, ┇3 ]",
        "{ a: 1, ┇b: 2 }",
        "(x, ┇y) => {}",
        "<C a={1} ┇b c />",
        "Map<K, ┇V> x",
    ] {
        let (code, cursor) = code_cursor(marked);
        let detection = detect(&code, cursor);
        let (s, e) = detection.scope.unwrap();
        let scoped: String = code.chars().skip(s).take(e - s + 1).collect();
        assert!(!scoped.starts_with(['[', '{', '(', '<']), "scope {scoped:?}");
        assert!(!scoped.ends_with([']', '}', ')', '>']), "scope {scoped:?}");
    }
}
