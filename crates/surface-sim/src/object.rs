//! Simulated host objects

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use surface_sdk::{HostCallback, HostError, HostObject, HostRef, HostResult, HostValue};

use crate::fixture::Behaviour;
use crate::runtime::World;

/// One recorded host call
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    /// Id of the receiving object
    pub object: u64,
    /// Kind of the receiving object
    pub kind: String,
    /// Method name
    pub method: String,
    /// Arguments as passed. Objects are recorded as `"Kind#id"` strings and
    /// callbacks as `"<callback>"` so the log holds no references.
    pub args: Vec<HostValue>,
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}.{}(", self.kind, self.object, self.method)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

type ChildKey = (String, Box<[HostValue]>);

/// An object living in a simulated host.
///
/// Behaviour comes from the fixture entry for `kind`. Accessor children are
/// created on first request and then returned for the same arguments.
pub struct SimObject {
    id: u64,
    kind: String,
    world: Rc<World>,
    children: RefCell<FxHashMap<ChildKey, Rc<SimObject>>>,
    observers: RefCell<FxHashMap<String, Vec<HostCallback>>>,
}

impl SimObject {
    pub(crate) fn new(id: u64, kind: &str, world: Rc<World>) -> Self {
        Self {
            id,
            kind: kind.to_string(),
            world,
            children: RefCell::new(FxHashMap::default()),
            observers: RefCell::new(FxHashMap::default()),
        }
    }

    /// Unique id within the runtime
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Fixture kind
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Number of callbacks registered through `method`
    pub fn observer_count(&self, method: &str) -> usize {
        self.observers
            .borrow()
            .get(method)
            .map_or(0, |callbacks| callbacks.len())
    }

    /// Invoke every callback registered through `method` with `args`.
    ///
    /// Returns the number of callbacks invoked. Stops at the first callback
    /// error.
    pub fn fire(&self, method: &str, args: &[HostValue]) -> HostResult<usize> {
        // Snapshot so callbacks may register further observers.
        let callbacks = self
            .observers
            .borrow()
            .get(method)
            .cloned()
            .unwrap_or_default();

        tracing::debug!(
            kind = %self.kind,
            id = self.id,
            method,
            count = callbacks.len(),
            "firing observers"
        );
        for callback in &callbacks {
            callback.call(args)?;
        }
        Ok(callbacks.len())
    }

    fn accessor_child(&self, method: &str, args: &[HostValue], kind: &str) -> Rc<SimObject> {
        let key: ChildKey = (method.to_string(), args.into());
        if let Some(child) = self.children.borrow().get(&key) {
            return child.clone();
        }
        let child = self.world.spawn(kind);
        self.children.borrow_mut().insert(key, child.clone());
        child
    }

    fn register_observer(&self, method: &str, args: &[HostValue]) -> HostResult<HostValue> {
        let callbacks: Vec<HostCallback> = args
            .iter()
            .filter_map(HostValue::as_callback)
            .cloned()
            .collect();
        if callbacks.is_empty() {
            return Err(HostError::ArgumentError(format!(
                "{}.{} expects a callback argument",
                self.kind, method
            )));
        }
        self.observers
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .extend(callbacks);
        Ok(HostValue::Undefined)
    }
}

impl HostObject for SimObject {
    fn invoke(&self, method: &str, args: &[HostValue]) -> HostResult<HostValue> {
        self.world.record(CallRecord {
            object: self.id,
            kind: self.kind.clone(),
            method: method.to_string(),
            args: args.iter().map(|arg| self.world.detach(arg)).collect(),
        });
        tracing::trace!(kind = %self.kind, id = self.id, method, "sim call");

        let Some(behaviour) = self.world.fixture().behaviour(&self.kind, method) else {
            return Err(HostError::Invocation {
                method: method.to_string(),
                message: format!("{} has no member {}", self.kind, method),
                diagnostic: Some("TypeError".to_string()),
            });
        };

        match behaviour {
            Behaviour::Void => Ok(HostValue::Undefined),
            Behaviour::Returns(literal) => Ok(literal.to_host_value()),
            Behaviour::Accessor(kind) => {
                let child: HostRef = self.accessor_child(method, args, &kind);
                Ok(HostValue::Object(child))
            }
            Behaviour::Factory(kind) => {
                let child: HostRef = self.world.spawn(&kind);
                Ok(HostValue::Object(child))
            }
            Behaviour::Error(message) => Err(HostError::Invocation {
                method: method.to_string(),
                message,
                diagnostic: Some(format!(
                    "ControlSurfaceException at {}.{}",
                    self.kind, method
                )),
            }),
            Behaviour::Observer => self.register_observer(method, args),
        }
    }

    fn type_name(&self) -> &str {
        &self.kind
    }
}

impl fmt::Debug for SimObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimObject")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}
