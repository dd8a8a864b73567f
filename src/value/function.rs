//! Functions and classes

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::{Key, Object, ObjectBuilder, Value};
use crate::guard::{Erased, Guard};

/// How a function was defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `() => {}`
    Arrow,
    /// `function f() {}`
    Declared,
    /// `async function f() {}`
    Async,
    /// `function* f() {}`
    Generator,
    /// A method defined in a class or object literal.
    Method,
    /// `class A {}`
    Class,
    /// A built-in function of the runtime.
    Builtin,
    /// A native guard exposed as a function value.
    Guard,
}

struct FunctionData {
    name: Arc<str>,
    kind: FunctionKind,
    length: u32,
    prototype: Option<Object>,
    properties: IndexMap<Key, Value>,
    guard: Option<Erased>,
}

/// A shared, immutable function value.
///
/// Functions expose `length` and `name` as own properties; constructors
/// (classes and declared functions) also expose `prototype`.
#[derive(Clone)]
pub struct Function(Arc<FunctionData>);

impl Function {
    /// A function of the given kind with no parameters.
    ///
    /// Declared functions and classes get a fresh prototype object.
    pub fn new(name: &str, kind: FunctionKind) -> Self {
        let prototype = matches!(kind, FunctionKind::Declared | FunctionKind::Class)
            .then(|| Object::builder().build());
        Self::from_parts(name, kind, 0, prototype, IndexMap::new(), None)
    }

    /// An arrow function.
    pub fn arrow(name: &str) -> Self {
        Self::new(name, FunctionKind::Arrow)
    }

    /// A declared (constructible) function.
    pub fn declared(name: &str) -> Self {
        Self::new(name, FunctionKind::Declared)
    }

    /// An async function.
    pub fn async_fn(name: &str) -> Self {
        Self::new(name, FunctionKind::Async)
    }

    /// A generator function.
    pub fn generator(name: &str) -> Self {
        Self::new(name, FunctionKind::Generator)
    }

    /// A built-in function taking `length` parameters.
    pub fn builtin(name: &str, length: u32) -> Self {
        Self::from_parts(name, FunctionKind::Builtin, length, None, IndexMap::new(), None)
    }

    /// Start building a class.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typeguard::{Function, Key, Value};
    ///
    /// let animal = Function::class("Animal").method("speak").build();
    /// let dog = Function::class("Dog").extends(&animal).build();
    ///
    /// let rex = Value::from(dog.new_instance().property("name", "Rex").build());
    /// assert!(rex.has_own(&Key::from("name")));
    /// // inherited through Dog.prototype -> Animal.prototype
    /// assert!(rex.has_in_chain(&Key::from("speak")));
    /// ```
    pub fn class(name: &str) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    /// Expose a guard as a function value taking one parameter.
    ///
    /// This is how guards travel inside dynamic values, for example as the
    /// fields of a shape object given to [`IsLike::from_value`](crate::guard::IsLike::from_value).
    pub fn from_guard<G>(name: &str, guard: G) -> Self
    where
        G: Guard + 'static,
    {
        Self::from_parts(
            name,
            FunctionKind::Guard,
            1,
            None,
            IndexMap::new(),
            Some(Erased::new(guard)),
        )
    }

    fn from_parts(
        name: &str,
        kind: FunctionKind,
        length: u32,
        prototype: Option<Object>,
        properties: IndexMap<Key, Value>,
        guard: Option<Erased>,
    ) -> Self {
        Function(Arc::new(FunctionData {
            name: Arc::from(name),
            kind,
            length,
            prototype,
            properties,
            guard,
        }))
    }

    /// The function's name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// How the function was defined.
    pub fn kind(&self) -> FunctionKind {
        self.0.kind
    }

    /// Declared parameter count.
    pub fn length(&self) -> u32 {
        self.0.length
    }

    /// The object instances created by this constructor inherit from.
    pub fn prototype_object(&self) -> Option<&Object> {
        self.0.prototype.as_ref()
    }

    /// Returns `true` if the function can be used with `new`.
    pub fn is_constructor(&self) -> bool {
        self.0.prototype.is_some()
    }

    /// The guard behind a function made with [`Function::from_guard`].
    pub fn guard(&self) -> Option<&Erased> {
        self.0.guard.as_ref()
    }

    /// Start building an instance whose prototype is this constructor's
    /// prototype object. Non-constructors produce a plain object.
    pub fn new_instance(&self) -> ObjectBuilder {
        match &self.0.prototype {
            Some(prototype) => Object::builder().prototype(prototype.clone()),
            None => Object::builder(),
        }
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Look up an own property.
    pub fn get_own(&self, key: &Key) -> Option<Value> {
        if let Key::String(name) = key {
            match &**name {
                "length" => return Some(Value::from(self.0.length)),
                "name" => return Some(Value::from(&*self.0.name)),
                "prototype" => {
                    if let Some(prototype) = &self.0.prototype {
                        return Some(Value::from(prototype.clone()));
                    }
                }
                _ => {}
            }
        }
        self.0.properties.get(key).cloned()
    }

    /// Own keys: `length`, `name`, `prototype` (constructors only), then
    /// static properties.
    pub fn own_keys(&self) -> Vec<Key> {
        let mut keys = vec![Key::from("length"), Key::from("name")];
        if self.0.prototype.is_some() {
            keys.push(Key::from("prototype"));
        }
        keys.extend(self.0.properties.keys().cloned());
        keys.sort_by(|a, b| match (a, b) {
            (Key::Index(x), Key::Index(y)) => x.cmp(y),
            _ => a.rank().cmp(&b.rank()),
        });
        keys
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.kind {
            FunctionKind::Class => write!(f, "[class {}]", self.0.name),
            kind => write!(f, "[Function({:?}): {}]", kind, self.0.name),
        }
    }
}

/// Builder for class constructors.
///
/// Classes carry methods on their prototype object. With [`extends`](Self::extends)
/// the prototype object inherits from the parent's prototype object, so
/// instances are instances of every class up the chain.
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    length: u32,
    parent: Option<Function>,
    members: IndexMap<Key, Value>,
    statics: IndexMap<Key, Value>,
}

impl ClassBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            length: 0,
            parent: None,
            members: IndexMap::new(),
            statics: IndexMap::new(),
        }
    }

    /// Inherit from another class.
    pub fn extends(mut self, parent: &Function) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Declared constructor parameter count.
    pub fn length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Add a method to the prototype.
    pub fn method(mut self, name: &str) -> Self {
        let method = Function::new(name, FunctionKind::Method);
        self.members.insert(Key::from(name), Value::from(method));
        self
    }

    /// Add an arbitrary member to the prototype.
    pub fn member(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.members.insert(key.into(), value.into());
        self
    }

    /// Add a static property to the constructor itself.
    pub fn static_property(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.statics.insert(key.into(), value.into());
        self
    }

    /// Finish the class.
    pub fn build(self) -> Function {
        let parent_prototype = self
            .parent
            .as_ref()
            .and_then(|parent| parent.prototype_object().cloned());
        let mut prototype = match parent_prototype {
            Some(parent_prototype) => Object::builder().prototype(parent_prototype),
            None => Object::builder(),
        };
        for (key, value) in self.members {
            prototype = prototype.property(key, value);
        }
        Function::from_parts(
            &self.name,
            FunctionKind::Class,
            self.length,
            Some(prototype.build()),
            self.statics,
            None,
        )
    }
}
