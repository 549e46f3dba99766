//! Value model
//!
//! [`Value`] is the closed set of shapes the engine knows how to walk.
//! Integer width is preserved through [`Int`]; rule evaluation compares the
//! widened `i64` value.
//!
//! The tree is owned, so it is always finite and acyclic.

use std::fmt;

// ============================================================================
// INT
// ============================================================================

/// A signed integer that remembers its declared width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Int {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
}

impl Int {
    /// Widened value.
    #[must_use]
    pub fn get(self) -> i64 {
        match self {
            Self::I8(n) => i64::from(n),
            Self::I16(n) => i64::from(n),
            Self::I32(n) => i64::from(n),
            Self::I64(n) => n,
            Self::Isize(n) => n as i64,
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.get() == 0
    }

    /// Rust type name of the width, for logs.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
        }
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// Ordered `(declared name, value)` members of a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member. Declaration order is traversal order.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Looks up a member by declared name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A node of the object graph handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text leaf.
    Str(String),
    /// Boolean leaf.
    Bool(bool),
    /// Signed integer leaf of any width.
    Int(Int),
    /// Unsigned integer. Never validated.
    Uint(u64),
    /// Floating point number. Never validated.
    Float(f64),
    /// Key/value map. Never validated or descended into.
    Map(Vec<(String, Value)>),
    /// Fixed-size array. Never validated or descended into.
    Array(Vec<Value>),
    /// Reference that may be absent.
    Optional(Option<Box<Value>>),
    /// Nested record.
    Record(Record),
    /// Variable-length sequence.
    Sequence(Vec<Value>),
}

impl Value {
    /// An absent optional.
    #[must_use]
    pub const fn none() -> Self {
        Self::Optional(None)
    }

    /// A present optional wrapping `value`.
    pub fn some(value: impl Into<Value>) -> Self {
        Self::Optional(Some(Box::new(value.into())))
    }

    /// Short shape name, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Int(n) => n.type_name(),
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Map(_) => "map",
            Self::Array(_) => "array",
            Self::Optional(_) => "optional",
            Self::Record(_) => "record",
            Self::Sequence(_) => "sequence",
        }
    }

    /// Converts a JSON document into the value model.
    ///
    /// Objects become records in document order, arrays become sequences and
    /// `null` becomes an absent optional. Integers that fit `i64` are signed
    /// leaves; larger unsigned integers and fractional numbers are left
    /// unvalidated.
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::none(),
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(Int::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Self::Str(s),
            Json::Array(items) => Self::Sequence(items.into_iter().map(Self::from_json).collect()),
            Json::Object(map) => Self::Record(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::from_json(json)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Int> for Value {
    fn from(n: Int) -> Self {
        Self::Int(n)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        Self::Optional(opt.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Int(Int::$variant(n))
                }
            }
        )+
    };
}

impl_from_signed!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);

macro_rules! impl_from_unsigned {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Uint(u64::from(n))
                }
            }
        )+
    };
}

impl_from_unsigned!(u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Uint(n as u64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}
