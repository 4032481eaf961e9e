use hashbrown::{HashMap, HashSet};
use string_cache::DefaultAtom;

use crate::decl::{DeclError, Parser};
use crate::kind::{Scalar, TyKind};
use crate::ty::Ty;

/// Names known to the engine, used to resolve declarations.
///
/// A name is either a plain type (`int`, `string`, ...) or a template that
/// takes one subtype (`array`).
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<DefaultAtom, Ty>,
    templates: HashSet<DefaultAtom>,
}

impl TypeRegistry {
    /// An empty registry. Nothing resolves until names are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the scalar types and the `array` template.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("bool", TyKind::Scalar(Scalar::Bool).alloc());
        registry.register("int", TyKind::Scalar(Scalar::Int).alloc());
        registry.register("int64", TyKind::Scalar(Scalar::Int).alloc());
        registry.register("float", TyKind::Scalar(Scalar::Float).alloc());
        registry.register("double", TyKind::Scalar(Scalar::Float).alloc());
        registry.register("string", TyKind::Scalar(Scalar::Str).alloc());
        registry.register_array_template("array");
        registry
    }

    /// Register `name` as a plain type. Replaces any previous binding.
    pub fn register(&mut self, name: &str, ty: Ty) {
        let name = DefaultAtom::from(name);
        self.templates.remove(&name);
        self.types.insert(name, ty);
    }

    /// Register `name` as an array template (`name<T>`).
    pub fn register_array_template(&mut self, name: &str) {
        let name = DefaultAtom::from(name);
        self.types.remove(&name);
        self.templates.insert(name);
    }

    pub fn lookup(&self, name: &str) -> Option<Ty> {
        self.types.get(&DefaultAtom::from(name)).cloned()
    }

    pub fn is_template(&self, name: &str) -> bool {
        self.templates.contains(&DefaultAtom::from(name))
    }

    /// Resolve a declaration such as `array<string>` or `int[]`.
    pub fn resolve(&self, decl: &str) -> Result<Ty, DeclError> {
        Parser::new(decl, self).parse()
    }
}
