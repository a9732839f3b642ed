use std::collections::HashMap;

use log::trace;

use crate::{error::EvalError, interpreter::value::Value};

/// Name of the constant bound in every root scope.
pub const NULL_CONSTANT: &str = "null";

/// Handle to a scope inside an [`Environment`].
///
/// A handle pairs an arena index with the serial number the scope was created
/// under. Handles do not keep the scope alive. Once a scope is discarded its
/// handle stays dead even after a new scope reuses the index: mutating
/// operations reject it with [`EvalError::InvalidScope`] and lookups find
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId {
    index:  usize,
    serial: u64,
}

impl ScopeId {
    /// Returns the arena index of the scope.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// A value stored under a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The bound value.
    pub value:    Value,
    /// Constant bindings reject assignment.
    pub constant: bool,
}

#[derive(Debug)]
struct Scope {
    bindings: HashMap<String, Binding>,
    parent:   Option<ScopeId>,
    serial:   u64,
}

/// The scope chain of one evaluation session.
///
/// Scopes live in an arena and point at their parent by index, so the chain
/// has no ownership cycles. Index `0` is the root scope, which is created with
/// the constant `null` and is never discarded. Child scopes are discarded in
/// LIFO order.
///
/// ## Example
/// ```
/// use simpl::interpreter::{environment::Environment, value::Value};
///
/// let mut env = Environment::new();
/// let root = env.root();
/// env.declare(root, "x", Value::Number(5.0)).unwrap();
///
/// let inner = env.push_scope(root);
/// assert_eq!(env.lookup(inner, "x"), Some(&Value::Number(5.0)));
///
/// env.declare(inner, "x", Value::Number(9.0)).unwrap();
/// assert_eq!(env.lookup(inner, "x"), Some(&Value::Number(9.0)));
/// assert_eq!(env.lookup(root, "x"), Some(&Value::Number(5.0)));
/// ```
#[derive(Debug)]
pub struct Environment {
    scopes:      Vec<Scope>,
    next_serial: u64,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the root scope.
    #[must_use]
    pub fn new() -> Self {
        let root = Scope { bindings: HashMap::new(),
                           parent:   None,
                           serial:   0, };
        let mut env = Self { scopes:      vec![root],
                             next_serial: 1, };
        let root = env.root();
        // A fresh root scope binds nothing, so this cannot clash.
        let _ = env.declare_constant(root, NULL_CONSTANT, Value::Null);
        env
    }

    /// Returns the root scope.
    #[must_use]
    pub const fn root(&self) -> ScopeId {
        ScopeId { index:  0,
                  serial: 0, }
    }

    /// Returns the number of live scopes, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` if `scope` refers to a live scope.
    #[must_use]
    pub fn contains(&self, scope: ScopeId) -> bool {
        self.frame(scope).is_some()
    }

    fn frame(&self, scope: ScopeId) -> Option<&Scope> {
        self.scopes
            .get(scope.index)
            .filter(|frame| frame.serial == scope.serial)
    }

    fn frame_mut(&mut self, scope: ScopeId) -> Option<&mut Scope> {
        self.scopes
            .get_mut(scope.index)
            .filter(|frame| frame.serial == scope.serial)
    }

    /// Returns the parent of `scope`, or `None` for the root or a dead handle.
    #[must_use]
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.frame(scope).and_then(|s| s.parent)
    }

    /// Creates an empty child scope of `parent`.
    ///
    /// A dead `parent` handle attaches the new scope to the root.
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        let parent = if self.contains(parent) { parent } else { self.root() };
        let id = ScopeId { index:  self.scopes.len(),
                           serial: self.next_serial, };
        self.next_serial += 1;
        self.scopes.push(Scope { bindings: HashMap::new(),
                                 parent:   Some(parent),
                                 serial:   id.serial, });
        trace!("entered scope {} (parent {})", id.index, parent.index);
        id
    }

    /// Discards `scope` together with every scope created after it.
    ///
    /// Discarding the root or a handle that is already dead is ignored.
    ///
    /// # Example
    /// ```
    /// use simpl::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// let outer = env.push_scope(env.root());
    /// let inner = env.push_scope(outer);
    ///
    /// env.discard(outer);
    ///
    /// assert!(!env.contains(inner));
    /// assert_eq!(env.depth(), 1);
    /// ```
    pub fn discard(&mut self, scope: ScopeId) {
        if scope.index == 0 || !self.contains(scope) {
            return;
        }
        trace!("discarding scopes from {}", scope.index);
        self.scopes.truncate(scope.index);
    }

    /// Binds `name` to `value` in `scope`.
    ///
    /// Only `scope`'s own bindings are checked for a clash; a binding of the
    /// same name in an ancestor is shadowed.
    ///
    /// # Errors
    /// - [`EvalError::AlreadyDeclared`] if `scope` already binds `name`.
    /// - [`EvalError::InvalidScope`] if `scope` has been discarded.
    pub fn declare(&mut self, scope: ScopeId, name: &str, value: Value) -> Result<(), EvalError> {
        self.insert(scope, name, Binding { value,
                                           constant: false })
    }

    /// Binds `name` to `value` in `scope` as a constant.
    ///
    /// The language itself has no constant declaration; this is how the root
    /// `null` is bound, and how a host embeds its own read-only names.
    ///
    /// # Errors
    /// Same as [`Environment::declare`].
    pub fn declare_constant(&mut self,
                            scope: ScopeId,
                            name: &str,
                            value: Value)
                            -> Result<(), EvalError> {
        self.insert(scope, name, Binding { value,
                                           constant: true })
    }

    fn insert(&mut self, scope: ScopeId, name: &str, binding: Binding) -> Result<(), EvalError> {
        let target = self.frame_mut(scope)
                         .ok_or(EvalError::InvalidScope(scope.index))?;
        if target.bindings.contains_key(name) {
            return Err(EvalError::AlreadyDeclared(name.to_string()));
        }
        trace!("declared '{name}' in scope {}", scope.index);
        target.bindings.insert(name.to_string(), binding);
        Ok(())
    }

    /// Finds the nearest scope, starting at `scope` itself, that binds `name`.
    #[must_use]
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = self.frame(id)?;
            if frame.bindings.contains_key(name) {
                return Some(id);
            }
            current = frame.parent;
        }
        None
    }

    /// Looks `name` up along the chain from `scope` to the root.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        self.binding(scope, name).map(|b| &b.value)
    }

    /// Like [`Environment::lookup`] but returns the whole binding.
    #[must_use]
    pub fn binding(&self, scope: ScopeId, name: &str) -> Option<&Binding> {
        let owner = self.resolve(scope, name)?;
        self.frame(owner)?.bindings.get(name)
    }

    /// Overwrites the nearest binding of `name`, searching from `scope` up.
    ///
    /// # Errors
    /// - [`EvalError::InvalidScope`] if `scope` has been discarded.
    /// - [`EvalError::UndefinedVariable`] if no scope in the chain binds
    ///   `name`.
    /// - [`EvalError::ConstantReassignment`] if the binding is constant.
    ///
    /// # Example
    /// ```
    /// use simpl::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// let root = env.root();
    /// env.declare(root, "y", Value::Number(1.0)).unwrap();
    ///
    /// let inner = env.push_scope(root);
    /// env.assign(inner, "y", Value::Number(5.0)).unwrap();
    /// env.discard(inner);
    ///
    /// assert_eq!(env.lookup(root, "y"), Some(&Value::Number(5.0)));
    /// ```
    pub fn assign(&mut self, scope: ScopeId, name: &str, value: Value) -> Result<(), EvalError> {
        if !self.contains(scope) {
            return Err(EvalError::InvalidScope(scope.index));
        }
        let owner = self.resolve(scope, name)
                        .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))?;
        let binding = self.frame_mut(owner)
                          .and_then(|frame| frame.bindings.get_mut(name))
                          .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))?;
        if binding.constant {
            return Err(EvalError::ConstantReassignment(name.to_string()));
        }
        trace!("assigned '{name}' in scope {}", owner.index);
        binding.value = value;
        Ok(())
    }
}
