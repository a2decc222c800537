//! Core value type for all JKSN data.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Error;
use crate::kind::Kind;
use crate::number::Number;

/// Payload of an array value.
pub type Array = Vec<Value>;

/// Payload of an object value, ordered by the [`Value`] total order.
pub type Object = BTreeMap<Value, Value>;

/// Nesting limit used by callers that have no stricter requirement.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Dynamically-typed JKSN value.
///
/// Exactly one of eleven kinds is active. Heap-backed payloads (strings,
/// blobs, arrays and objects) are exclusively owned, so cloning a value
/// deep-copies it and the copy is structurally independent.
///
/// `==` and the [`Ord`] impl are loose across numeric kinds: `Int(3)`
/// equals `Double(3.0)`. Values of unrelated kinds fall back to the fixed
/// ranking in [`Kind::rank`], which makes the order total and lets any
/// value act as an [`Object`] key.
#[derive(Clone, Default)]
pub enum Value {
    /// The undefined value.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 32-bit floating point.
    Float(f32),
    /// 64-bit floating point.
    Double(f64),
    /// Extended precision floating point.
    ///
    /// Stored at the widest precision the platform offers natively (binary64);
    /// kept distinct from `Double` so the originating precision survives a
    /// round-trip through the codec.
    LongDouble(f64),
    /// Text string.
    String(String),
    /// Opaque binary data.
    Blob(Vec<u8>),
    /// Ordered sequence of values.
    Array(Array),
    /// Mapping from value to value, ordered by key.
    Object(Object),
}

impl Value {
    /// Creates a blob value.
    #[must_use]
    pub fn blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Blob(bytes.into())
    }

    /// Creates an empty array.
    #[must_use]
    pub const fn array() -> Self {
        Self::Array(Vec::new())
    }

    /// Creates an empty object.
    #[must_use]
    pub const fn object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Returns the active kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Double(_) => Kind::Double,
            Self::LongDouble(_) => Kind::LongDouble,
            Self::String(_) => Kind::String,
            Self::Blob(_) => Kind::Blob,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
        }
    }

    /// Returns true if this value is undefined.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for `Int`, `Float`, `Double` and `LongDouble`.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        self.kind().is_number()
    }

    /// Projects a numeric value for promotion-aware comparison.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Int(n) => Some(Number::Int(*n)),
            Self::Float(x) => Some(Number::Float(*x)),
            Self::Double(x) => Some(Number::Double(*x)),
            Self::LongDouble(x) => Some(Number::LongDouble(*x)),
            _ => None,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a binary32 value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to extract a binary64 value.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to extract an extended precision value.
    #[must_use]
    pub const fn as_long_double(&self) -> Option<f64> {
        match self {
            Self::LongDouble(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the raw contents of a string or blob.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(s) => Some(s.as_bytes()),
            Self::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Attempts to extract an array reference.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract a mutable array reference.
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract an object reference.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Attempts to extract a mutable object reference.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Number of elements, entries or bytes held by a heap-backed value.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.len()),
            Self::Blob(b) => Some(b.len()),
            Self::Array(a) => Some(a.len()),
            Self::Object(o) => Some(o.len()),
            _ => None,
        }
    }

    /// Returns true if this is an empty string, blob, array or object.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Appends to an array.
    ///
    /// # Errors
    ///
    /// Returns a type error if this value is not an array.
    pub fn push(&mut self, item: impl Into<Value>) -> crate::Result<()> {
        match self {
            Self::Array(a) => {
                a.push(item.into());
                Ok(())
            }
            other => Err(Error::type_error("array", other.kind())),
        }
    }

    /// Inserts into an object, returning the previous value for an equal key.
    ///
    /// An existing equal key is kept and only its value is replaced, so
    /// `Int(1)` and `Double(1.0)` address the same entry.
    ///
    /// # Errors
    ///
    /// Returns a type error if this value is not an object.
    pub fn insert(
        &mut self,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> crate::Result<Option<Value>> {
        match self {
            Self::Object(o) => Ok(o.insert(key.into(), value.into())),
            other => Err(Error::type_error("object", other.kind())),
        }
    }

    /// Looks up a key in an object. Returns `None` for non-objects.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Copies `source` into this value.
    ///
    /// The copy is built in full before the previous payload is dropped, so
    /// a panic while copying (allocation failure) leaves `self` untouched.
    /// Self-assignment cannot be expressed: `source` is borrowed shared while
    /// `self` is borrowed exclusively.
    pub fn assign(&mut self, source: &Value) {
        let copy = source.clone();
        *self = copy;
    }

    /// Moves `value` into this slot and returns the previous value.
    pub fn replace(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(self, value.into())
    }

    /// Moves the value out, leaving `Undefined` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Container nesting depth. Scalars are depth 0.
    ///
    /// Walks the tree iteratively so adversarial input cannot exhaust the
    /// stack here.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0usize)];
        while let Some((value, level)) = pending.pop() {
            deepest = deepest.max(level);
            push_children(value, level + 1, &mut pending);
        }
        deepest
    }

    /// Fails if nesting exceeds `limit`.
    ///
    /// Equality, ordering, hashing, cloning and display all recurse once per
    /// nesting level; callers accepting untrusted trees should check first.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DepthExceeded`](crate::ErrorKind::DepthExceeded)
    /// when any path is deeper than `limit`.
    pub fn check_depth(&self, limit: usize) -> crate::Result<()> {
        let mut pending = vec![(self, 0usize)];
        while let Some((value, level)) = pending.pop() {
            if level > limit {
                tracing::debug!(limit, "value nesting exceeds limit");
                return Err(Error::depth_exceeded(limit));
            }
            push_children(value, level + 1, &mut pending);
        }
        Ok(())
    }
}

fn push_children<'a>(value: &'a Value, level: usize, pending: &mut Vec<(&'a Value, usize)>) {
    match value {
        Value::Array(a) => pending.extend(a.iter().map(|v| (v, level))),
        Value::Object(o) => {
            for (k, v) in o {
                pending.push((k, level));
                pending.push((v, level));
            }
        }
        _ => {}
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return a.compare(b);
        }
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Blob(a), Self::Blob(b)) => a.cmp(b),
            (Self::Array(a), Self::Array(b)) => a.cmp(b),
            // Lexicographic over (key, value) pairs in key order
            (Self::Object(a), Self::Object(b)) => a.cmp(b),
            _ => self.kind().rank().cmp(&other.kind().rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality is defined through the ordering so the two cannot drift apart.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(n) = self.as_number() {
            // All numeric kinds share one tag; cross-kind equal numbers collide.
            Kind::Int.rank().hash(state);
            n.hash_into(state);
            return;
        }
        self.kind().rank().hash(state);
        match self {
            Self::Bool(b) => b.hash(state),
            Self::String(s) => s.hash(state),
            Self::Blob(b) => b.hash(state),
            Self::Array(a) => a.hash(state),
            Self::Object(o) => {
                o.len().hash(state);
                for (k, v) in o {
                    k.hash(state);
                    v.hash(state);
                }
            }
            _ => {}
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}f"),
            Self::Double(x) => write!(f, "{x:?}"),
            Self::LongDouble(x) => write!(f, "{x:?}L"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Blob(b) => {
                write!(f, "b\"")?;
                for byte in b {
                    write!(f, "{}", std::ascii::escape_default(*byte))?;
                }
                write!(f, "\"")
            }
            Self::Array(a) => f.debug_list().entries(a).finish(),
            Self::Object(o) => f.debug_map().entries(o).finish(),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Double(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(Value, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().collect())
    }
}
