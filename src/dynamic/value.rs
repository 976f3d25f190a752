//! The closed dynamic value model.
//!
//! [`Value`] covers every runtime shape the `is` predicate, structural
//! `match`, path lookup and dynamic `concat` understand. Classes and
//! instances give nominal types; functions are shared closures compared by
//! identity; symbols are unique by construction.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::container::{Fallible, Nullable};
use crate::typeclass::Semigroup;

/// String-keyed fields of an object or instance, in key order.
pub type Object = BTreeMap<String, Value>;

/// A dynamically typed value.
///
/// # Examples
///
/// ```rust
/// use algebrars::dynamic::Value;
///
/// let point = Value::object([("x", Value::from(1)), ("y", Value::from(2))]);
/// assert_eq!(point.type_name(), "Object");
/// assert_eq!(point.to_string(), "{x: 1, y: 2}");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value at all.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double-precision number.
    Number(f64),
    /// An integer too large for the number representation.
    BigInt(i128),
    /// A string.
    String(String),
    /// A unique symbol.
    Symbol(Symbol),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// A plain object.
    Object(Object),
    /// A callable.
    Function(Function),
    /// An instance of a [`Class`].
    Instance(Instance),
}

/// The `typeof`-style classification of a [`Value`].
///
/// `Null`, arrays, objects and instances all classify as [`Kind::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `Value::Undefined`.
    Undefined,
    /// `Null`, arrays, objects, instances.
    Object,
    /// Booleans.
    Boolean,
    /// Numbers.
    Number,
    /// Big integers.
    BigInt,
    /// Strings.
    String,
    /// Symbols.
    Symbol,
    /// Functions.
    Function,
}

impl Value {
    /// Builds an object from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds an array from values.
    pub fn array<V, I>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Wraps a closure as a function value.
    pub fn function<F>(body: F) -> Self
    where
        F: Fn(Self) -> Self + Send + Sync + 'static,
    {
        Self::Function(Function::new(body))
    }

    /// Returns `true` for `Undefined` and `Null`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// The `typeof`-style kind.
    pub const fn type_of(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null | Self::Array(_) | Self::Object(_) | Self::Instance(_) => Kind::Object,
            Self::Boolean(_) => Kind::Boolean,
            Self::Number(_) => Kind::Number,
            Self::BigInt(_) => Kind::BigInt,
            Self::String(_) => Kind::String,
            Self::Symbol(_) => Kind::Symbol,
            Self::Function(_) => Kind::Function,
        }
    }

    /// The runtime type name; instances report their class name.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::BigInt(_) => "BigInt",
            Self::String(_) => "String",
            Self::Symbol(_) => "Symbol",
            Self::Array(_) => "Array",
            Self::Object(_) => "Object",
            Self::Function(_) => "Function",
            Self::Instance(instance) => instance.class().name(),
        }
    }

    /// Looks up one member: an object key, an instance field, or an array index.
    pub fn member(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(fields) => fields.get(key),
            Self::Instance(instance) => instance.field(key),
            Self::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
            _ => None,
        }
    }

    /// Finds a callable member, including methods inherited through classes.
    pub fn method(&self, name: &str) -> Option<&Function> {
        match self.member(name) {
            Some(Self::Function(function)) => Some(function),
            _ => match self {
                Self::Instance(instance) => instance.class().method(name),
                _ => None,
            },
        }
    }

    const fn is_record(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Instance(_))
    }

    fn into_fields(self) -> Object {
        match self {
            Self::Object(fields) => fields,
            Self::Instance(instance) => instance.fields,
            _ => Object::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::BigInt(number) => write!(formatter, "{number}n"),
            Self::String(text) => write!(formatter, "{text:?}"),
            Self::Symbol(symbol) => write!(formatter, "Symbol({})", symbol.description()),
            Self::Array(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Object(fields) => write_fields(formatter, fields),
            Self::Function(_) => formatter.write_str("[Function]"),
            Self::Instance(instance) => {
                write!(formatter, "{} ", instance.class().name())?;
                write_fields(formatter, instance.fields())
            }
        }
    }
}

fn write_fields(formatter: &mut fmt::Formatter<'_>, fields: &Object) -> fmt::Result {
    formatter.write_str("{")?;
    for (index, (key, value)) in fields.iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{key}: {value}")?;
    }
    formatter.write_str("}")
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i128> for Value {
    fn from(number: i128) -> Self {
        Self::BigInt(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(items)
    }
}

impl From<Object> for Value {
    fn from(fields: Object) -> Self {
        Self::Object(fields)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Nullable for Value {
    type Present = Self;

    #[inline]
    fn into_present(self) -> Option<Self> {
        if self.is_absent() { None } else { Some(self) }
    }
}

impl<E> Fallible<E> for Value {
    type Success = Self;

    #[inline]
    fn into_result(self) -> Result<Self, E> {
        Ok(self)
    }
}

/// Dynamic `concat`: same-kind values combine, anything else is replaced.
///
/// | held / argument | result |
/// |---|---|
/// | `BigInt` / `BigInt` | sum; a sum past `i128` becomes a `Number` |
/// | `Number` / `Number` | sum |
/// | `String` / `String` | concatenation |
/// | `Boolean` / `Boolean` | logical AND |
/// | `Array` / `Array` | concatenation |
/// | record / record or function | shallow merge into a plain object |
/// | anything else | the argument |
///
/// Records are objects and instances. In a merge the argument's keys win; a
/// function has no keys, so merging one keeps the held fields.
impl Semigroup for Value {
    #[allow(clippy::cast_precision_loss)]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::BigInt(left), Self::BigInt(right)) => left
                .checked_add(right)
                .map_or_else(|| Self::Number(left as f64 + right as f64), Self::BigInt),
            (Self::Number(left), Self::Number(right)) => Self::Number(left + right),
            (Self::String(left), Self::String(right)) => Self::String(left.combine(right)),
            (Self::Boolean(left), Self::Boolean(right)) => Self::Boolean(left && right),
            (Self::Array(left), Self::Array(right)) => Self::Array(left.combine(right)),
            (left, right)
                if left.is_record() && (right.is_record() || matches!(right, Self::Function(_))) =>
            {
                Self::Object(left.into_fields().combine(right.into_fields()))
            }
            (_, other) => other,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Undefined | Self::Null | Self::Function(_) => serializer.serialize_unit(),
            Self::Boolean(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::BigInt(number) => serializer.serialize_i128(*number),
            Self::String(text) => serializer.serialize_str(text),
            Self::Symbol(symbol) => serializer.serialize_str(symbol.description()),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Object(fields) => serializer.collect_map(fields),
            Self::Instance(instance) => serializer.collect_map(instance.fields()),
        }
    }
}

#[cfg(feature = "collection")]
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Boolean(flag),
            serde_json::Value::Number(number) => number.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => Self::array(items),
            serde_json::Value::Object(fields) => Self::object(fields),
        }
    }
}

/// A shared closure from [`Value`] to [`Value`].
///
/// Two `Function`s are equal only when they share the same closure.
#[derive(Clone)]
pub struct Function {
    body: Arc<dyn Fn(Value) -> Value + Send + Sync>,
}

impl Function {
    /// Wraps `body`.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self {
            body: Arc::new(body),
        }
    }

    /// Invokes the function.
    #[inline]
    pub fn call(&self, argument: Value) -> Value {
        (self.body)(argument)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Function")
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A unique token with a description.
///
/// Every call to [`Symbol::new`] yields a symbol unequal to all others, even
/// with the same description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: u64,
    description: Arc<str>,
}

impl Symbol {
    /// Creates a fresh symbol.
    pub fn new(description: &str) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: Arc::from(description),
        }
    }

    /// The description given at creation.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A nominal type with optional single inheritance and methods.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use algebrars::dynamic::{Class, Instance, Object, Value};
///
/// let shape = Arc::new(Class::new("Shape"));
/// let circle = Arc::new(Class::new("Circle").extends(&shape));
///
/// let unit = Value::from(Instance::new(&circle, Object::new()));
/// assert_eq!(unit.type_name(), "Circle");
/// assert!(circle.is_subclass_of(&shape));
/// ```
#[derive(Debug)]
pub struct Class {
    name: String,
    parent: Option<Arc<Class>>,
    methods: BTreeMap<String, Function>,
}

impl Class {
    /// A root class named `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            methods: BTreeMap::new(),
        }
    }

    /// Sets the parent class.
    #[must_use]
    pub fn extends(mut self, parent: &Arc<Self>) -> Self {
        self.parent = Some(Arc::clone(parent));
        self
    }

    /// Adds a method available to every instance.
    #[must_use]
    pub fn with_method(mut self, name: &str, function: Function) -> Self {
        self.methods.insert(name.to_string(), function);
        self
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent class, if any.
    pub const fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Finds a method on this class or its ancestors.
    pub fn method(&self, name: &str) -> Option<&Function> {
        self.methods
            .get(name)
            .or_else(|| self.parent.as_ref().and_then(|parent| parent.method(name)))
    }

    /// Returns `true` when `self` is `ancestor` or inherits from it.
    pub fn is_subclass_of(&self, ancestor: &Arc<Self>) -> bool {
        std::ptr::eq(self, Arc::as_ptr(ancestor))
            || self
                .parent
                .as_ref()
                .is_some_and(|parent| parent.is_subclass_of(ancestor))
    }
}

/// An object tagged with its [`Class`].
#[derive(Debug, Clone)]
pub struct Instance {
    class: Arc<Class>,
    fields: Object,
}

impl Instance {
    /// Creates an instance of `class` holding `fields`.
    pub fn new(class: &Arc<Class>, fields: Object) -> Self {
        Self {
            class: Arc::clone(class),
            fields,
        }
    }

    /// The instance's class.
    pub const fn class(&self) -> &Arc<Class> {
        &self.class
    }

    /// All own fields.
    pub const fn fields(&self) -> &Object {
        &self.fields
    }

    /// One own field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.class, &other.class) && self.fields == other.fields
    }
}
