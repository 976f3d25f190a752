#![cfg(feature = "dynamic")]
//! Tests for the dynamic value model: `is`, `Matcher`, path lookup and the
//! way `Optional<Value>` treats null and undefined.

use std::sync::Arc;

use algebrars::container::Optional;
use algebrars::dynamic::{
    Class, Function, Instance, Matcher, Object, Tag, Value, get, is, is_a, match_value, pluck,
};
use algebrars::error::Error;
use rstest::{fixture, rstest};

#[fixture]
fn shapes() -> (Arc<Class>, Arc<Class>) {
    let shape = Arc::new(Class::new("Shape").with_method(
        "map",
        Function::new(|value| value),
    ));
    let circle = Arc::new(Class::new("Circle").extends(&shape));
    (shape, circle)
}

fn circle_of(class: &Arc<Class>, radius: i32) -> Value {
    Value::from(Instance::new(
        class,
        Object::from([(String::from("radius"), Value::from(radius))]),
    ))
}

// =============================================================================
// is
// =============================================================================

#[rstest]
fn nominal_tags_follow_inheritance(shapes: (Arc<Class>, Arc<Class>)) {
    let (shape, circle) = shapes;
    let unit = circle_of(&circle, 1);

    assert!(is(&Tag::from(&circle), &unit));
    assert!(is(&Tag::from(&shape), &unit));
    assert!(is(&Tag::Object, &unit));
    assert!(is(&Tag::Functor, &unit));
}

#[rstest]
fn curried_is_filters_values() {
    let mixed = [
        Value::from(1),
        Value::from("two"),
        Value::array([3]),
        Value::from(4.5),
    ];
    let numbers: Vec<&Value> = mixed.iter().filter(|value| is_a(Tag::Number)(*value)).collect();
    assert_eq!(numbers, vec![&Value::from(1), &Value::from(4.5)]);
}

// =============================================================================
// match
// =============================================================================

#[rstest]
fn match_dispatches_on_class_name(shapes: (Arc<Class>, Arc<Class>)) {
    let (_, circle) = shapes;
    let area = Matcher::new()
        .case(
            "Circle",
            Value::function(|value| match value.member("radius") {
                Some(Value::Number(radius)) => Value::from(radius * radius * 3.0),
                _ => Value::Undefined,
            }),
        )
        .case("_", 0);

    assert_eq!(area.run(&circle_of(&circle, 2)), Ok(Value::from(12.0)));
    assert_eq!(area.run(&Value::from("square")), Ok(Value::from(0)));
}

#[rstest]
fn match_without_default_reports_value() {
    let matcher = Matcher::from([("String", "text")]);
    let error = match_value(&matcher, &Value::array([1, 2])).unwrap_err();
    assert_eq!(
        error,
        Error::NoMatch {
            value: String::from("[1, 2]")
        }
    );
    assert_eq!(error.to_string(), "no match found for value: [1, 2]");
}

// =============================================================================
// Optional<Value> and path lookup
// =============================================================================

#[rstest]
#[case(Value::Null)]
#[case(Value::Undefined)]
fn null_and_undefined_are_absent(#[case] value: Value) {
    assert!(Optional::of(value).is_absent());
}

#[rstest]
fn mapping_to_null_becomes_absent() {
    let mapped = Optional::of(Value::from(1)).map(|_| Value::Null);
    assert!(mapped.is_absent());
}

#[rstest]
fn get_then_map_reads_nested_fields() {
    let config = Value::object([(
        "server",
        Value::object([("ports", Value::array([8080, 8443]))]),
    )]);
    let second_port = get(&config, "server.ports.1").map(|port| port.to_string());
    assert_eq!(second_port.into_option(), Some(String::from("8443")));
}

#[rstest]
fn pluck_reads_every_row() {
    let rows = [
        Value::object([("id", 1)]),
        Value::object([("name", "no id")]),
        Value::object([("id", 3)]),
    ];
    assert_eq!(
        pluck("id", &rows),
        vec![Value::from(1), Value::Undefined, Value::from(3)]
    );
}

// =============================================================================
// Optional<Value> concat
// =============================================================================

#[rstest]
fn concat_of_overflowing_big_integers_stays_present() {
    let sum = Optional::of(Value::from(i128::MAX)).concat(Value::from(1_i128));
    assert!(matches!(sum.into_option(), Some(Value::Number(_))));
}

#[rstest]
fn concat_of_function_into_object_keeps_fields() {
    let merged = Optional::of(Value::object([("a", 1)])).concat(Value::function(|value| value));
    assert_eq!(merged, Optional::some(Value::object([("a", 1)])));
}

#[rstest]
fn some_keeps_null_present_while_of_normalizes() {
    assert!(Optional::some(Value::Null).is_present());
    assert!(Optional::of(Value::Null).is_absent());
}
