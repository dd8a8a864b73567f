//! Objects and their builders

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::intrinsics::intrinsics;
use super::{Key, Value};

/// The internal kind of an object, deciding which built-in it behaves as.
#[derive(Clone, Debug)]
pub enum ObjectKind {
    /// A plain object or a class instance.
    Ordinary,
    /// An array with its elements.
    Array(Vec<Value>),
    /// A date holding its time value in milliseconds; NaN marks an invalid date.
    Date(f64),
    /// A regular expression.
    RegExp {
        /// Pattern source.
        source: Arc<str>,
        /// Flags such as `gi`.
        flags: Arc<str>,
    },
    /// A map with its entries in insertion order.
    Map(Vec<(Value, Value)>),
    /// A set with its members in insertion order.
    Set(Vec<Value>),
    /// A weak map. Entries are not observable.
    WeakMap,
    /// A weak set. Members are not observable.
    WeakSet,
    /// A native promise.
    Promise,
    /// A `Boolean` wrapper object.
    BoxedBoolean(bool),
    /// A `Number` wrapper object.
    BoxedNumber(f64),
    /// A `String` wrapper object.
    BoxedString(Arc<str>),
}

struct ObjectData {
    kind: ObjectKind,
    prototype: Option<Object>,
    properties: IndexMap<Key, Value>,
}

/// A shared, immutable object.
///
/// Cloning an `Object` clones the handle, not the object: clones are the
/// same object under strict equality.
#[derive(Clone)]
pub struct Object(Arc<ObjectData>);

impl Object {
    /// Start building an ordinary object inheriting from `Object.prototype`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::{Key, Object};
    ///
    /// let object = Object::builder().property("name", "typeguard").build();
    /// assert!(object.has_own(&Key::from("name")));
    /// ```
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::new(ObjectKind::Ordinary)
    }

    /// An array holding `elements`.
    pub fn array(elements: Vec<Value>) -> Self {
        ObjectBuilder::new(ObjectKind::Array(elements)).build()
    }

    /// A date at `time` milliseconds since the epoch.
    pub fn date(time: f64) -> Self {
        ObjectBuilder::new(ObjectKind::Date(time)).build()
    }

    /// A date whose time value is NaN, as produced by parsing garbage.
    pub fn invalid_date() -> Self {
        Self::date(f64::NAN)
    }

    /// A regular expression object.
    pub fn reg_exp(source: &str, flags: &str) -> Self {
        ObjectBuilder::new(ObjectKind::RegExp {
            source: Arc::from(source),
            flags: Arc::from(flags),
        })
        .property("lastIndex", 0)
        .build()
    }

    /// A map holding `entries`.
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        ObjectBuilder::new(ObjectKind::Map(entries)).build()
    }

    /// A set holding `members`.
    pub fn set(members: Vec<Value>) -> Self {
        ObjectBuilder::new(ObjectKind::Set(members)).build()
    }

    /// An empty weak map.
    pub fn weak_map() -> Self {
        ObjectBuilder::new(ObjectKind::WeakMap).build()
    }

    /// An empty weak set.
    pub fn weak_set() -> Self {
        ObjectBuilder::new(ObjectKind::WeakSet).build()
    }

    /// A native promise.
    pub fn promise() -> Self {
        ObjectBuilder::new(ObjectKind::Promise).build()
    }

    /// `new Boolean(value)`.
    pub fn boxed_boolean(value: bool) -> Self {
        ObjectBuilder::new(ObjectKind::BoxedBoolean(value)).build()
    }

    /// `new Number(value)`.
    pub fn boxed_number(value: f64) -> Self {
        ObjectBuilder::new(ObjectKind::BoxedNumber(value)).build()
    }

    /// `new String(value)`.
    pub fn boxed_string(value: &str) -> Self {
        ObjectBuilder::new(ObjectKind::BoxedString(Arc::from(value))).build()
    }

    /// The kind of this object.
    pub fn kind(&self) -> &ObjectKind {
        &self.0.kind
    }

    /// The next object on the prototype chain, if any.
    pub fn prototype(&self) -> Option<&Object> {
        self.0.prototype.as_ref()
    }

    /// The ordinary (non-exotic) own properties in insertion order.
    pub fn properties(&self) -> &IndexMap<Key, Value> {
        &self.0.properties
    }

    /// The elements of an array.
    pub fn elements(&self) -> Option<&[Value]> {
        match &self.0.kind {
            ObjectKind::Array(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` if `prototype` appears on this object's prototype chain.
    pub fn inherits_from(&self, prototype: &Object) -> bool {
        let mut next = self.prototype();
        while let Some(object) = next {
            if object.ptr_eq(prototype) {
                return true;
            }
            next = object.prototype();
        }
        false
    }

    /// Look up an own property, exotic ones (array indices, `length`) included.
    pub fn get_own(&self, key: &Key) -> Option<Value> {
        let exotic = match &self.0.kind {
            ObjectKind::Array(elements) => match key {
                Key::Index(i) => elements.get(*i as usize).cloned(),
                Key::String(s) if &**s == "length" => Some(Value::from(elements.len() as f64)),
                _ => None,
            },
            ObjectKind::BoxedString(s) => string_property(s, key),
            _ => None,
        };
        exotic.or_else(|| self.0.properties.get(key).cloned())
    }

    /// Returns `true` if `key` is an own property.
    pub fn has_own(&self, key: &Key) -> bool {
        self.get_own(key).is_some()
    }

    /// Own keys: indices ascending, then strings, then symbols. Strings and
    /// symbols keep insertion order.
    pub fn own_keys(&self) -> Vec<Key> {
        let mut keys = match &self.0.kind {
            ObjectKind::Array(elements) => index_keys(elements.len()),
            ObjectKind::BoxedString(s) => string_keys(s),
            _ => Vec::new(),
        };
        let ordinary: Vec<Key> = self
            .0
            .properties
            .keys()
            .filter(|key| !keys_contains(&keys, key))
            .cloned()
            .collect();
        keys.extend(ordinary);
        keys.sort_by(|a, b| match (a, b) {
            (Key::Index(x), Key::Index(y)) => x.cmp(y),
            _ => a.rank().cmp(&b.rank()),
        });
        keys
    }
}

fn keys_contains(keys: &[Key], key: &Key) -> bool {
    keys.iter().any(|k| k == key)
}

fn index_keys(len: usize) -> Vec<Key> {
    let mut keys: Vec<Key> = (0..len).map(Key::from).collect();
    keys.push(Key::from("length"));
    keys
}

// String exotic properties. Indices address code points.
pub(crate) fn string_property(s: &str, key: &Key) -> Option<Value> {
    match key {
        Key::Index(i) => s
            .chars()
            .nth(*i as usize)
            .map(|c| Value::from(c.to_string())),
        Key::String(name) if &**name == "length" => Some(Value::from(s.chars().count() as f64)),
        _ => None,
    }
}

pub(crate) fn string_keys(s: &str) -> Vec<Key> {
    index_keys(s.chars().count())
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("kind", &self.0.kind)
            .field("properties", &self.0.properties)
            .finish()
    }
}

enum PrototypeSlot {
    Default,
    Explicit(Option<Object>),
}

/// Builder for [`Object`].
///
/// Unless told otherwise, the built object inherits from the intrinsic
/// prototype matching its kind (`Array.prototype` for arrays, and so on).
///
/// # Example
///
/// ```rust
/// use typeguard::{Key, Object, ObjectBuilder, ObjectKind, Value};
///
/// // `Object.create(null)` with one property
/// let bare = Object::builder().null_prototype().property("a", 1).build();
/// assert!(bare.prototype().is_none());
///
/// // an array that also carries a named property
/// let tagged = ObjectBuilder::new(ObjectKind::Array(vec![Value::from(1)]))
///     .property("tag", "x")
///     .build();
/// assert!(tagged.has_own(&Key::Index(0)));
/// assert!(tagged.has_own(&Key::from("tag")));
/// ```
pub struct ObjectBuilder {
    kind: ObjectKind,
    prototype: PrototypeSlot,
    properties: IndexMap<Key, Value>,
}

impl ObjectBuilder {
    /// Start building an object of the given kind.
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            prototype: PrototypeSlot::Default,
            properties: IndexMap::new(),
        }
    }

    /// Set the prototype.
    pub fn prototype(mut self, prototype: Object) -> Self {
        self.prototype = PrototypeSlot::Explicit(Some(prototype));
        self
    }

    /// Build an object without a prototype.
    pub fn null_prototype(mut self) -> Self {
        self.prototype = PrototypeSlot::Explicit(None);
        self
    }

    /// Add (or replace) an own property.
    pub fn property(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Finish the object.
    pub fn build(self) -> Object {
        let prototype = match self.prototype {
            PrototypeSlot::Explicit(prototype) => prototype,
            PrototypeSlot::Default => Some(intrinsics().prototype_for(&self.kind).clone()),
        };
        Object(Arc::new(ObjectData {
            kind: self.kind,
            prototype,
            properties: self.properties,
        }))
    }
}

impl fmt::Debug for ObjectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBuilder")
            .field("kind", &self.kind)
            .field("properties", &self.properties)
            .finish()
    }
}
