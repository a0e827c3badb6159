//! Host fixture parsing (TOML / JSON)
//!
//! A fixture describes the object graph of a simulated host: which kinds of
//! objects exist, which members each kind has, and what each member does.
//!
//! ```toml
//! root = "Host"
//!
//! [objects.Host.methods]
//! getHostVendor = { returns = "Bitwig" }
//! getMidiInPort = { accessor = "MidiIn" }
//! createTrackBank = { factory = "TrackBank" }
//! println = {}
//!
//! [objects.MidiIn.methods]
//! setMidiCallback = { observer = true }
//!
//! [objects.CursorTrack]
//! extends = "Track"
//! ```
//!
//! A kind with `extends` inherits every member of its parent kind; its own
//! entries take precedence.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use surface_sdk::HostValue;
use thiserror::Error;

/// Built-in fixture describing the controller host surface
pub const DEFAULT_FIXTURE: &str = include_str!("../fixtures/host.toml");

/// Errors that can occur while loading a fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Failed to read fixture file
    #[error("Failed to read fixture file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse TOML fixture: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Failed to parse JSON
    #[error("Failed to parse JSON fixture: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("Unsupported fixture format: {0}")]
    UnsupportedFormat(String),

    /// Validation error
    #[error("Invalid fixture: {0}")]
    ValidationError(String),
}

/// Simulated host description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostFixture {
    /// Kind of the root object handed to the script
    pub root: String,

    /// Object kinds by name
    #[serde(default)]
    pub objects: BTreeMap<String, ObjectSpec>,
}

/// Members of one object kind
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObjectSpec {
    /// Kind whose members this kind inherits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Member behaviours by method name
    #[serde(default)]
    pub methods: BTreeMap<String, MethodSpec>,
}

/// Behaviour of one member, as written in the fixture.
///
/// At most one field may be set; an empty table is a void member.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MethodSpec {
    /// Return this literal
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub returns: Option<Literal>,

    /// Return one stable child of this kind per argument tuple
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor: Option<String>,

    /// Return a fresh child of this kind on every call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory: Option<String>,

    /// Fail with this message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Store callback arguments for later firing
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub observer: bool,
}

/// Keep a present field as `Some`, including an explicit `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Resolved member behaviour
#[derive(Debug, Clone, PartialEq)]
pub enum Behaviour {
    /// Returns nothing
    Void,
    /// Returns a literal value
    Returns(Literal),
    /// Returns a stable child per argument tuple
    Accessor(String),
    /// Returns a fresh child per call
    Factory(String),
    /// Raises a host error
    Error(String),
    /// Registers callback arguments
    Observer,
}

/// Literal value in a fixture
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Literal {
    /// null (JSON only)
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// String
    Str(String),
    /// Array
    List(Vec<Literal>),
}

impl Literal {
    /// Convert to a host value
    pub fn to_host_value(&self) -> HostValue {
        match self {
            Literal::Null => HostValue::Null,
            Literal::Bool(b) => HostValue::Bool(*b),
            Literal::Int(i) => HostValue::Int(*i),
            Literal::Float(f) => HostValue::Float(*f),
            Literal::Str(s) => HostValue::string(s),
            Literal::List(items) => HostValue::array(items.iter().map(Literal::to_host_value)),
        }
    }
}

impl MethodSpec {
    /// Resolve the single behaviour this spec describes
    pub fn behaviour(&self) -> Result<Behaviour, FixtureError> {
        let mut found = Vec::new();
        if let Some(lit) = &self.returns {
            found.push(Behaviour::Returns(lit.clone()));
        }
        if let Some(kind) = &self.accessor {
            found.push(Behaviour::Accessor(kind.clone()));
        }
        if let Some(kind) = &self.factory {
            found.push(Behaviour::Factory(kind.clone()));
        }
        if let Some(msg) = &self.error {
            found.push(Behaviour::Error(msg.clone()));
        }
        if self.observer {
            found.push(Behaviour::Observer);
        }

        match found.len() {
            0 => Ok(Behaviour::Void),
            1 => Ok(found.remove(0)),
            n => Err(FixtureError::ValidationError(format!(
                "member declares {} behaviours, expected at most one",
                n
            ))),
        }
    }
}

impl HostFixture {
    /// Parse a fixture from a file, choosing the format by extension
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(FixtureError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a fixture from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, FixtureError> {
        let fixture: HostFixture = toml::from_str(content)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Parse a fixture from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, FixtureError> {
        let fixture: HostFixture = serde_json::from_str(content)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// The built-in controller host fixture
    pub fn default_fixture() -> Result<Self, FixtureError> {
        Self::from_toml_str(DEFAULT_FIXTURE)
    }

    /// Validate the fixture
    pub fn validate(&self) -> Result<(), FixtureError> {
        if !self.objects.contains_key(&self.root) {
            return Err(FixtureError::ValidationError(format!(
                "root kind {} is not declared under [objects]",
                self.root
            )));
        }

        for (kind, spec) in &self.objects {
            if let Some(parent) = &spec.extends {
                if !self.objects.contains_key(parent) {
                    return Err(FixtureError::ValidationError(format!(
                        "{} extends undeclared kind {}",
                        kind, parent
                    )));
                }
            }
            if self.lineage(kind).count() > self.objects.len() {
                return Err(FixtureError::ValidationError(format!(
                    "{} has a cyclic extends chain",
                    kind
                )));
            }

            for (method, member) in &spec.methods {
                let behaviour = member.behaviour().map_err(|e| match e {
                    FixtureError::ValidationError(msg) => {
                        FixtureError::ValidationError(format!("{}.{}: {}", kind, method, msg))
                    }
                    other => other,
                })?;
                if let Behaviour::Accessor(child) | Behaviour::Factory(child) = &behaviour {
                    if !self.objects.contains_key(child) {
                        return Err(FixtureError::ValidationError(format!(
                            "{}.{} returns undeclared kind {}",
                            kind, method, child
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Resolved behaviour of `kind.method`, searching `kind` then its
    /// `extends` chain
    pub fn behaviour(&self, kind: &str, method: &str) -> Option<Behaviour> {
        self.lineage(kind)
            .find_map(|spec| spec.methods.get(method))?
            .behaviour()
            .ok()
    }

    /// Entry for `kind` followed by the entries of the kinds it extends
    pub fn lineage<'a>(&'a self, kind: &str) -> impl Iterator<Item = &'a ObjectSpec> + 'a {
        let mut next = self.objects.get(kind);
        // Bounded so that a cyclic chain is detectable instead of endless.
        let limit = self.objects.len() + 1;
        std::iter::from_fn(move || {
            let spec = next?;
            next = spec.extends.as_deref().and_then(|p| self.objects.get(p));
            Some(spec)
        })
        .take(limit)
    }

    /// Serialize the fixture as pretty TOML
    pub fn to_toml_string(&self) -> Result<String, FixtureError> {
        toml::to_string_pretty(self).map_err(|e| FixtureError::ValidationError(e.to_string()))
    }
}
