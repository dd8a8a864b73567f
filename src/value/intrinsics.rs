//! Built-in prototype objects
//!
//! Created once per process on first use. Every object built here sets its
//! prototype explicitly: the default-prototype path of [`ObjectBuilder`]
//! reads these intrinsics and must not run while they are being created.

use once_cell::sync::Lazy;

use super::{Function, Key, Object, ObjectBuilder, ObjectKind, Symbol, Value};

static INTRINSICS: Lazy<Intrinsics> = Lazy::new(Intrinsics::new);

pub(crate) fn intrinsics() -> &'static Intrinsics {
    &INTRINSICS
}

pub(crate) struct Intrinsics {
    pub(crate) object_prototype: Object,
    pub(crate) function_prototype: Object,
    pub(crate) array_prototype: Object,
    pub(crate) boolean_prototype: Object,
    pub(crate) number_prototype: Object,
    pub(crate) bigint_prototype: Object,
    pub(crate) string_prototype: Object,
    pub(crate) symbol_prototype: Object,
    pub(crate) date_prototype: Object,
    pub(crate) regexp_prototype: Object,
    pub(crate) map_prototype: Object,
    pub(crate) set_prototype: Object,
    pub(crate) weak_map_prototype: Object,
    pub(crate) weak_set_prototype: Object,
    pub(crate) promise_prototype: Object,
}

enum Member {
    Method(&'static str, u32),
    Iter(&'static str),
}

use Member::{Iter, Method};

fn prototype(parent: Option<&Object>, members: &[Member]) -> Object {
    let mut builder = match parent {
        Some(parent) => ObjectBuilder::new(ObjectKind::Ordinary).prototype(parent.clone()),
        None => ObjectBuilder::new(ObjectKind::Ordinary).null_prototype(),
    };
    for member in members {
        builder = match member {
            Method(name, length) => {
                builder.property(*name, Value::from(Function::builtin(name, *length)))
            }
            Iter(name) => builder.property(
                Key::Symbol(Symbol::iterator()),
                Value::from(Function::builtin(name, 0)),
            ),
        };
    }
    builder.build()
}

impl Intrinsics {
    fn new() -> Self {
        let object_prototype = prototype(
            None,
            &[
                Method("hasOwnProperty", 1),
                Method("isPrototypeOf", 1),
                Method("propertyIsEnumerable", 1),
                Method("toLocaleString", 0),
                Method("toString", 0),
                Method("valueOf", 0),
            ],
        );
        let root = Some(&object_prototype);

        let function_prototype = prototype(
            root,
            &[Method("apply", 2), Method("bind", 1), Method("call", 1)],
        );
        let array_prototype = prototype(
            root,
            &[
                Method("concat", 1),
                Method("every", 1),
                Method("filter", 1),
                Method("forEach", 1),
                Method("includes", 1),
                Method("indexOf", 1),
                Method("join", 1),
                Method("map", 1),
                Method("pop", 0),
                Method("push", 1),
                Method("reduce", 1),
                Method("slice", 2),
                Method("some", 1),
                Iter("values"),
            ],
        );
        let boolean_prototype = prototype(root, &[]);
        let number_prototype = prototype(
            root,
            &[
                Method("toExponential", 1),
                Method("toFixed", 1),
                Method("toPrecision", 1),
            ],
        );
        let bigint_prototype = prototype(root, &[]);
        let string_prototype = prototype(
            root,
            &[
                Method("charAt", 1),
                Method("endsWith", 1),
                Method("includes", 1),
                Method("indexOf", 1),
                Method("slice", 2),
                Method("split", 2),
                Method("startsWith", 1),
                Method("toLowerCase", 0),
                Method("toUpperCase", 0),
                Method("trim", 0),
                Iter("[Symbol.iterator]"),
            ],
        );
        let symbol_prototype = prototype(root, &[Method("description", 0)]);
        let date_prototype = prototype(
            root,
            &[
                Method("getTime", 0),
                Method("toISOString", 0),
                Method("getFullYear", 0),
            ],
        );
        let regexp_prototype = prototype(root, &[Method("exec", 1), Method("test", 1)]);
        let map_prototype = prototype(
            root,
            &[
                Method("clear", 0),
                Method("delete", 1),
                Method("entries", 0),
                Method("forEach", 1),
                Method("get", 1),
                Method("has", 1),
                Method("keys", 0),
                Method("set", 2),
                Method("size", 0),
                Method("values", 0),
                Iter("entries"),
            ],
        );
        let set_prototype = prototype(
            root,
            &[
                Method("add", 1),
                Method("clear", 0),
                Method("delete", 1),
                Method("entries", 0),
                Method("forEach", 1),
                Method("has", 1),
                Method("size", 0),
                Method("values", 0),
                Iter("values"),
            ],
        );
        let weak_map_prototype = prototype(
            root,
            &[
                Method("delete", 1),
                Method("get", 1),
                Method("has", 1),
                Method("set", 2),
            ],
        );
        let weak_set_prototype = prototype(
            root,
            &[Method("add", 1), Method("delete", 1), Method("has", 1)],
        );
        let promise_prototype = prototype(
            root,
            &[Method("catch", 1), Method("finally", 1), Method("then", 2)],
        );

        Self {
            object_prototype,
            function_prototype,
            array_prototype,
            boolean_prototype,
            number_prototype,
            bigint_prototype,
            string_prototype,
            symbol_prototype,
            date_prototype,
            regexp_prototype,
            map_prototype,
            set_prototype,
            weak_map_prototype,
            weak_set_prototype,
            promise_prototype,
        }
    }

    pub(crate) fn prototype_for(&self, kind: &ObjectKind) -> &Object {
        match kind {
            ObjectKind::Ordinary => &self.object_prototype,
            ObjectKind::Array(_) => &self.array_prototype,
            ObjectKind::Date(_) => &self.date_prototype,
            ObjectKind::RegExp { .. } => &self.regexp_prototype,
            ObjectKind::Map(_) => &self.map_prototype,
            ObjectKind::Set(_) => &self.set_prototype,
            ObjectKind::WeakMap => &self.weak_map_prototype,
            ObjectKind::WeakSet => &self.weak_set_prototype,
            ObjectKind::Promise => &self.promise_prototype,
            ObjectKind::BoxedBoolean(_) => &self.boolean_prototype,
            ObjectKind::BoxedNumber(_) => &self.number_prototype,
            ObjectKind::BoxedString(_) => &self.string_prototype,
        }
    }
}
