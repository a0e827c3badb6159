//! Simulated host runtime

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::{Rc, Weak};

use surface_sdk::{same_object, HostRef, HostValue};

use crate::fixture::{FixtureError, HostFixture};
use crate::object::{CallRecord, SimObject};

/// Shared state of one simulated host
pub(crate) struct World {
    fixture: HostFixture,
    next_id: Cell<u64>,
    objects: RefCell<Vec<Weak<SimObject>>>,
    calls: RefCell<Vec<CallRecord>>,
}

impl World {
    pub(crate) fn fixture(&self) -> &HostFixture {
        &self.fixture
    }

    /// Create a new object of `kind` with a fresh id
    pub(crate) fn spawn(self: &Rc<Self>, kind: &str) -> Rc<SimObject> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let object = Rc::new(SimObject::new(id, kind, self.clone()));
        self.objects.borrow_mut().push(Rc::downgrade(&object));
        tracing::debug!(kind, id, "spawned sim object");
        object
    }

    pub(crate) fn record(&self, call: CallRecord) {
        self.calls.borrow_mut().push(call);
    }

    /// Copy of `value` that keeps no object or callback alive
    pub(crate) fn detach(&self, value: &HostValue) -> HostValue {
        match value {
            HostValue::Object(obj) => match self.id_of(obj) {
                Some(id) => HostValue::string(format!("{}#{}", obj.type_name(), id)),
                None => HostValue::string(obj.type_name()),
            },
            HostValue::Callback(_) => HostValue::string("<callback>"),
            HostValue::Array(items) => HostValue::array(items.iter().map(|v| self.detach(v))),
            other => other.clone(),
        }
    }

    fn id_of(&self, obj: &HostRef) -> Option<u64> {
        self.objects
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .find(|sim| {
                let candidate: HostRef = sim.clone();
                same_object(&candidate, obj)
            })
            .map(|sim| sim.id())
    }
}

/// An in-memory host built from a fixture.
///
/// The runtime owns the root object. Children are owned by whoever holds
/// them (the parent for accessor children, the caller for factory results).
pub struct SimRuntime {
    world: Rc<World>,
    root: Rc<SimObject>,
}

impl SimRuntime {
    /// Build a runtime from a validated fixture
    pub fn from_fixture(fixture: HostFixture) -> Self {
        let root_kind = fixture.root.clone();
        let world = Rc::new(World {
            fixture,
            next_id: Cell::new(1),
            objects: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        });
        let root = world.spawn(&root_kind);
        tracing::info!(root = %root_kind, "sim runtime ready");
        Self { world, root }
    }

    /// Load a fixture file (`.toml` or `.json`) and build a runtime
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        Ok(Self::from_fixture(HostFixture::from_file(path)?))
    }

    /// Build a runtime from the built-in controller host fixture
    pub fn with_default_fixture() -> Result<Self, FixtureError> {
        Ok(Self::from_fixture(HostFixture::default_fixture()?))
    }

    /// The fixture this runtime was built from
    pub fn fixture(&self) -> &HostFixture {
        &self.world.fixture
    }

    /// The root object as handed to a script
    pub fn root(&self) -> HostRef {
        self.root.clone()
    }

    /// The root object with its simulator API
    pub fn root_object(&self) -> &Rc<SimObject> {
        &self.root
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<CallRecord> {
        self.world.calls.borrow().clone()
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.world.calls.borrow().len()
    }

    /// Number of calls to `method` on any object
    pub fn calls_to(&self, method: &str) -> usize {
        self.world
            .calls
            .borrow()
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Forget recorded calls
    pub fn clear_calls(&self) {
        self.world.calls.borrow_mut().clear();
    }

    /// Find the simulator object behind a host reference
    pub fn lookup(&self, obj: &HostRef) -> Option<Rc<SimObject>> {
        self.world
            .objects
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .find(|sim| {
                let candidate: HostRef = sim.clone();
                same_object(&candidate, obj)
            })
    }

    /// Live objects of `kind`, in creation order
    pub fn objects_of_kind(&self, kind: &str) -> Vec<Rc<SimObject>> {
        self.world
            .objects
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .filter(|sim| sim.kind() == kind)
            .collect()
    }

    /// Number of objects still alive
    pub fn live_objects(&self) -> usize {
        let mut objects = self.world.objects.borrow_mut();
        objects.retain(|weak| weak.strong_count() > 0);
        objects.len()
    }
}
