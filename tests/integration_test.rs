//! End-to-end scenarios combining containers, composition and dynamic values.

use algebrars::prelude::*;
use rstest::rstest;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
struct Order {
    quantity: u32,
    unit_price: u32,
}

fn parse_quantity(text: &str) -> Outcome<u32, String> {
    Outcome::of(text.trim().parse::<u32>().map_err(|error| error.to_string()))
}

fn validate(quantity: u32) -> Outcome<u32, String> {
    if quantity == 0 {
        Outcome::failure(String::from("quantity must be positive"))
    } else {
        Outcome::success(quantity)
    }
}

#[rstest]
#[case(" 3 ", Ok(30))]
#[case("0", Err(String::from("quantity must be positive")))]
#[case("x", Err(String::from("invalid digit found in string")))]
fn order_pipeline(#[case] input: &str, #[case] expected: std::result::Result<u32, String>) {
    let price = curry2(|unit_price: u32, quantity: u32| Order { quantity, unit_price });
    let priced_at_ten = price.call((10,));

    let total = parse_quantity(input)
        .bind(validate)
        .fmap(|quantity| priced_at_ten.call((quantity,)))
        .map(|order| order.quantity * order.unit_price);

    assert_eq!(total.into_result(), expected);
}

#[rstest]
fn applicative_application_in_both_containers() {
    let add_ten = Optional::some(|n: i32| n + 10);
    assert_eq!(Optional::some(5).apply(add_ten), Optional::some(15));

    let missing: Optional<fn(i32) -> i32> = Optional::none();
    assert!(Optional::some(5).apply(missing).is_absent());
}

#[rstest]
fn attempt_turns_panics_into_failures() {
    init_tracing();
    let index = attempt(|position: usize| [10, 20, 30][position]);
    assert_eq!(index(1).into_result(), Ok(20));
    assert!(matches!(index(9).into_result(), Err(Error::Panicked { .. })));
}

#[rstest]
fn dynamic_records_flow_through_optional() {
    init_tracing();
    let record = Value::object([("name", Value::from("ada")), ("score", Value::from(7))]);

    let bumped = get(&record, "score")
        .concat(Value::from(3))
        .match_with(|score| score.to_string(), || String::from("missing"));
    assert_eq!(bumped, "10");

    let kind = Matcher::from([("Number", "numeric"), ("_", "other")]).into_fn();
    assert_eq!(kind(&Value::from(1)), Ok(Value::from("numeric")));
}

#[rstest]
fn collection_helpers_compose() {
    let values = [Some(5), None, Some(1), Some(3)];
    let smallest_two = compose!(
        |items: Vec<i32>| slice(&items, 0, 2),
        |items: Vec<i32>| sorted(&items),
        |items: [Option<i32>; 4]| compact(items),
    );
    assert_eq!(smallest_two(values), vec![1, 3]);
}

#[rstest]
fn memoized_lookup_shares_results() {
    let lookup = memoize(|key: String| key.repeat(2));
    let first = lookup.call(String::from("ab"));
    let second = lookup.call(String::from("ab"));
    assert_eq!(first.as_str(), "abab");
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}
