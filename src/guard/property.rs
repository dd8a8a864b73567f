//! Property guards
//!
//! [`is_property`] is the membership test every structural guard builds on:
//! a key is present if it is an own property of the value or is found along
//! its prototype chain. Own presence covers objects built without a
//! prototype; chain lookup covers inherited members such as class methods.

use super::combinators::Guard;
use crate::value::{Key, Value};

/// Returns `true` if `value` is neither `null` nor `undefined` and `key` is
/// found on it, as an own property or through its prototype chain.
///
/// Symbol keys are found the same way as string and index keys. Primitives
/// are looked up through the prototype of their boxed form, so `"ab"` has
/// `length` and `0`, and a number has `toFixed`. Functions are objects here
/// too: a class has `prototype` and `name`. Guards built on this lookup
/// inherit both rules, which is why `is_array_like` accepts strings and
/// functions.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
/// use typeguard::Key;
///
/// let object = Value::from(Object::builder().property("a", 1).build());
/// assert!(is_property(&object, &Key::from("a")));
/// assert!(is_property(&object, &Key::from("toString")));
/// assert!(!is_property(&object, &Key::from("b")));
/// assert!(!is_property(&Value::Null, &Key::from("a")));
///
/// assert!(is_property(&Value::from("ab"), &Key::from("length")));
/// let class = Value::from(Function::class("A").build());
/// assert!(is_property(&class, &Key::from("prototype")));
/// ```
pub fn is_property(value: &Value, key: &Key) -> bool {
    !value.is_nullish() && (value.has_own(key) || value.has_in_chain(key))
}

/// Guard for values that have a given property.
#[derive(Clone, Debug)]
pub struct Has {
    key: Key,
}

impl Has {
    /// The key looked up.
    pub fn key(&self) -> &Key {
        &self.key
    }
}

impl Guard for Has {
    type Target<'a> = &'a Value;

    #[inline]
    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        is_property(value, &self.key).then_some(value)
    }
}

/// Create a guard that passes when the value has property `key`.
///
/// `has(key).check(v)` always equals `is_property(v, &key)`.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let named = has("name");
/// assert!(named.check(&Value::from(Object::builder().property("name", "x").build())));
/// assert!(!named.check(&Value::from(Object::builder().build())));
/// ```
pub fn has(key: impl Into<Key>) -> Has {
    Has { key: key.into() }
}

/// Guard for values with a property accepted by a field guard.
#[derive(Clone, Debug)]
pub struct HasWith<G> {
    key: Key,
    guard: G,
}

impl<G> HasWith<G> {
    /// The key looked up.
    pub fn key(&self) -> &Key {
        &self.key
    }
}

impl<G: Guard> Guard for HasWith<G> {
    type Target<'a> = &'a Value;

    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        if value.is_nullish() {
            return None;
        }
        let field = value.get(&self.key)?;
        self.guard.check(&field).then_some(value)
    }
}

/// Create a guard that passes when the value has property `key` and
/// `guard` accepts the property's value.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
///
/// let has_id = has_with("id", is_number());
/// assert!(has_id.check(&Value::from(Object::builder().property("id", 7).build())));
/// assert!(!has_id.check(&Value::from(Object::builder().property("id", "7").build())));
/// ```
pub fn has_with<G: Guard>(key: impl Into<Key>, guard: G) -> HasWith<G> {
    HasWith {
        key: key.into(),
        guard,
    }
}

/// Guard for keys of a fixed container.
#[derive(Clone, Debug)]
pub struct IsKeyOf {
    container: Value,
}

impl Guard for IsKeyOf {
    type Target<'a> = Key;

    fn narrow<'a>(&self, value: &'a Value) -> Option<Self::Target<'a>> {
        let key = Key::from_value(value)?;
        is_property(&self.container, &key).then_some(key)
    }
}

/// Create a guard that passes for values naming a property of `container`.
///
/// The inverse of [`has`]: the container is fixed and the key varies. The
/// candidate is converted to a [`Key`] first, so `"0"` and `0` are the same
/// key; values that are not keys never pass.
///
/// # Example
///
/// ```rust
/// use typeguard::prelude::*;
/// use typeguard::Key;
///
/// let colors = Object::builder().property("red", 1).property("blue", 2).build();
/// let is_color = is_key_of(colors);
/// assert_eq!(is_color.narrow(&Value::from("red")), Some(Key::from("red")));
/// assert!(!is_color.check(&Value::from("green")));
/// ```
pub fn is_key_of(container: impl Into<Value>) -> IsKeyOf {
    IsKeyOf {
        container: container.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{is_array_like, is_iterable, is_number, is_undefined};
    use crate::value::{Function, Object, Symbol};

    #[test]
    fn test_own_and_inherited() {
        let class = Function::class("A").method("greet").build();
        let instance = Value::from(class.new_instance().property("own", 1).build());
        assert!(is_property(&instance, &Key::from("own")));
        assert!(is_property(&instance, &Key::from("greet")));
        assert!(!instance.has_own(&Key::from("greet")));
    }

    #[test]
    fn test_null_prototype_object() {
        let bare = Value::from(Object::builder().null_prototype().property("a", 1).build());
        assert!(has("a").check(&bare));
        assert!(!has("toString").check(&bare));
    }

    #[test]
    fn test_symbol_keys() {
        let tag = Symbol::new("tag");
        let object = Value::from(Object::builder().property(tag.clone(), true).build());
        assert!(has(tag).check(&object));
        assert!(!has(Symbol::new("tag")).check(&object));
    }

    #[test]
    fn test_primitives_have_properties() {
        assert!(has("length").check(&Value::from("abc")));
        assert!(has(1u32).check(&Value::from("abc")));
        assert!(has("toFixed").check(&Value::from(1)));
        assert!(!has("length").check(&Value::Undefined));
    }

    #[test]
    fn test_functions_and_strings_through_structural_guards() {
        let class = Value::from(Function::class("A").build());
        assert!(has("prototype").check(&class));
        assert!(has("name").check(&class));
        assert!(has("length").check(&Value::from(Function::arrow("f"))));

        assert!(is_array_like().check(&Value::from("ab")));
        assert!(is_array_like().check(&class));
        assert!(is_iterable().check(&Value::from("abc")));
        assert!(!is_array_like().check(&Value::from(2)));
    }

    #[test]
    fn test_has_with_undefined_field() {
        let object = Value::from(Object::builder().property("a", Value::Undefined).build());
        assert!(has_with("a", is_undefined()).check(&object));
        assert!(!has_with("b", is_undefined()).check(&object));
        assert!(!has_with("a", is_number()).check(&object));
    }

    #[test]
    fn test_key_of_array() {
        let array = Object::array(vec![Value::from("x"), Value::from("y")]);
        let guard = is_key_of(array);
        assert_eq!(guard.narrow(&Value::from(1)), Some(Key::Index(1)));
        assert_eq!(guard.narrow(&Value::from("0")), Some(Key::Index(0)));
        assert!(guard.check(&Value::from("length")));
        assert!(!guard.check(&Value::from(2)));
        assert!(!guard.check(&Value::Null));
    }

    #[test]
    fn test_key_of_nullish_container() {
        assert!(!is_key_of(Value::Null).check(&Value::from("a")));
    }
}
