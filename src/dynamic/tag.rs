//! Runtime type tags and the `is` predicate.

use std::sync::Arc;

use super::value::{Class, Value};

/// What [`is`] can test a value against.
///
/// Primitive tags match exactly one [`Value`] variant, with two exceptions:
/// [`Tag::Object`] accepts plain objects and class instances but never
/// arrays or functions, and [`Tag::Functor`] accepts any object or instance
/// exposing a callable `map`.
#[derive(Debug, Clone)]
pub enum Tag {
    /// Big integers.
    BigInt,
    /// Booleans.
    Boolean,
    /// Functions.
    Function,
    /// Numbers.
    Number,
    /// Plain objects and class instances.
    Object,
    /// Symbols.
    Symbol,
    /// Strings.
    String,
    /// Values with a callable `map` member.
    Functor,
    /// Arrays.
    Array,
    /// `Undefined`.
    Undefined,
    /// `Null`.
    Null,
    /// Instances of the class or one of its subclasses.
    Class(Arc<Class>),
    /// Values whose [`Kind`](super::Kind) equals the sample's.
    Like(Value),
}

impl From<Arc<Class>> for Tag {
    fn from(class: Arc<Class>) -> Self {
        Self::Class(class)
    }
}

impl From<&Arc<Class>> for Tag {
    fn from(class: &Arc<Class>) -> Self {
        Self::Class(Arc::clone(class))
    }
}

/// Returns `true` when `value` matches `tag`.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use algebrars::dynamic::{Class, Instance, Object, Tag, Value, is};
///
/// assert!(is(&Tag::Number, &Value::from(2)));
/// assert!(!is(&Tag::Object, &Value::array([1, 2])));
///
/// let animal = Arc::new(Class::new("Animal"));
/// let dog = Arc::new(Class::new("Dog").extends(&animal));
/// let rex = Value::from(Instance::new(&dog, Object::new()));
/// assert!(is(&Tag::from(&animal), &rex));
/// assert!(is(&Tag::Object, &rex));
/// ```
pub fn is(tag: &Tag, value: &Value) -> bool {
    match tag {
        Tag::BigInt => matches!(value, Value::BigInt(_)),
        Tag::Boolean => matches!(value, Value::Boolean(_)),
        Tag::Function => matches!(value, Value::Function(_)),
        Tag::Number => matches!(value, Value::Number(_)),
        Tag::Object => matches!(value, Value::Object(_) | Value::Instance(_)),
        Tag::Symbol => matches!(value, Value::Symbol(_)),
        Tag::String => matches!(value, Value::String(_)),
        Tag::Functor => {
            matches!(value, Value::Object(_) | Value::Instance(_)) && value.method("map").is_some()
        }
        Tag::Array => matches!(value, Value::Array(_)),
        Tag::Undefined => matches!(value, Value::Undefined),
        Tag::Null => matches!(value, Value::Null),
        Tag::Class(class) => {
            matches!(value, Value::Instance(instance) if instance.class().is_subclass_of(class))
        }
        Tag::Like(sample) => sample.type_of() == value.type_of(),
    }
}

/// The curried form of [`is`]: fixes the tag, returns the predicate.
///
/// # Examples
///
/// ```rust
/// use algebrars::dynamic::{Tag, Value, is_a};
///
/// let values = [Value::from("a"), Value::from(1), Value::from("b")];
/// let strings = values.iter().filter(|value| is_a(Tag::String)(*value)).count();
/// assert_eq!(strings, 2);
/// ```
pub fn is_a(tag: Tag) -> impl Fn(&Value) -> bool + Clone {
    move |value| is(&tag, value)
}
