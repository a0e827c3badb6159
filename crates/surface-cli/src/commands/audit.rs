//! `surface audit` - compare declared cache policies with a fixture.
//!
//! A class is audited when the fixture declares a kind with the same name.
//! For each binding in the class's effective map the fixture member must
//! return an object of the bound class (or a subclass) with the matching
//! behaviour: `accessor` for cached bindings, `factory` otherwise.

use std::fmt;

use surface_sdk::{CachePolicy, ClassRegistry};
use surface_sim::{Behaviour, HostFixture};

use crate::output::StyledOutput;

#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    /// Fixture member has the opposite identity behaviour
    PolicyMismatch {
        declared: CachePolicy,
        found: CachePolicy,
    },
    /// Fixture kind lacks the member
    MissingMember,
    /// Fixture member never returns an object
    NotAnObject { behaviour: String },
    /// Fixture member returns an unrelated kind
    WrongKind { expected: String, found: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Note {
    /// Fixture member always fails, so its result cannot be checked
    AlwaysFails,
    /// Fixture member returns an object but the class has no binding for it
    Unbound { kind: String },
    /// Fixture kind has no wrapper class
    NoClass,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    Mismatch {
        class: String,
        method: String,
        problem: Problem,
    },
    Note {
        class: String,
        method: Option<String>,
        note: Note,
    },
}

impl Finding {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Finding::Mismatch { .. })
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::PolicyMismatch { declared, found } => {
                write!(f, "declared {} but the host behaves as {}", declared, found)
            }
            Problem::MissingMember => write!(f, "not declared in the fixture"),
            Problem::NotAnObject { behaviour } => {
                write!(f, "bound to a wrapper but the host {}", behaviour)
            }
            Problem::WrongKind { expected, found } => {
                write!(f, "bound to {} but the host returns {}", expected, found)
            }
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::AlwaysFails => write!(f, "always fails in the fixture; result not checked"),
            Note::Unbound { kind } => {
                write!(f, "returns {} but is not bound; results pass through raw", kind)
            }
            Note::NoClass => write!(f, "fixture kind has no wrapper class"),
        }
    }
}

fn describe(behaviour: &Behaviour) -> String {
    match behaviour {
        Behaviour::Void => "returns nothing".to_string(),
        Behaviour::Returns(literal) => format!("returns {}", literal.to_host_value()),
        Behaviour::Observer => "registers observers".to_string(),
        Behaviour::Error(_) => "fails".to_string(),
        Behaviour::Accessor(kind) | Behaviour::Factory(kind) => format!("returns {}", kind),
    }
}

/// Audit every class that has a same-named fixture kind
pub fn audit(registry: &ClassRegistry, fixture: &HostFixture) -> Vec<Finding> {
    let mut findings = Vec::new();

    for kind in fixture.objects.keys() {
        let Some(class) = registry.get(kind) else {
            findings.push(Finding::Note {
                class: kind.clone(),
                method: None,
                note: Note::NoClass,
            });
            continue;
        };

        for binding in class.effective_bindings() {
            let mismatch = |problem| Finding::Mismatch {
                class: class.name.to_string(),
                method: binding.method.to_string(),
                problem,
            };

            let (found_policy, found_kind) = match fixture.behaviour(kind, binding.method) {
                None => {
                    findings.push(mismatch(Problem::MissingMember));
                    continue;
                }
                Some(Behaviour::Accessor(k)) => (CachePolicy::Accessor, k),
                Some(Behaviour::Factory(k)) => (CachePolicy::Factory, k),
                Some(Behaviour::Error(_)) => {
                    findings.push(Finding::Note {
                        class: class.name.to_string(),
                        method: Some(binding.method.to_string()),
                        note: Note::AlwaysFails,
                    });
                    continue;
                }
                Some(other) => {
                    findings.push(mismatch(Problem::NotAnObject {
                        behaviour: describe(&other),
                    }));
                    continue;
                }
            };

            if found_policy != binding.policy {
                findings.push(mismatch(Problem::PolicyMismatch {
                    declared: binding.policy,
                    found: found_policy,
                }));
            }

            let related = registry
                .get(&found_kind)
                .is_some_and(|produced| produced.is_subclass_of(binding.class));
            if !related {
                findings.push(mismatch(Problem::WrongKind {
                    expected: binding.class.name.to_string(),
                    found: found_kind,
                }));
            }
        }

        // Object-returning members the class does not bind.
        let mut seen = std::collections::BTreeSet::new();
        for spec in fixture.lineage(kind) {
            for method in spec.methods.keys() {
                if !seen.insert(method.as_str()) || class.resolve(method).is_some() {
                    continue;
                }
                if let Some(Behaviour::Accessor(k) | Behaviour::Factory(k)) =
                    fixture.behaviour(kind, method)
                {
                    findings.push(Finding::Note {
                        class: class.name.to_string(),
                        method: Some(method.clone()),
                        note: Note::Unbound { kind: k },
                    });
                }
            }
        }
    }

    findings
}

/// Print findings; returns the number of mismatches
pub fn execute(
    registry: &ClassRegistry,
    fixture: &HostFixture,
    out: &mut StyledOutput,
) -> usize {
    let findings = audit(registry, fixture);
    let mut mismatches = 0;

    for finding in &findings {
        match finding {
            Finding::Mismatch {
                class,
                method,
                problem,
            } => {
                mismatches += 1;
                out.error("mismatch");
                out.plain(&format!(" {}.{}: {}", class, method, problem));
            }
            Finding::Note {
                class,
                method,
                note,
            } => {
                out.warning("note");
                match method {
                    Some(method) => out.plain(&format!(" {}.{}: {}", class, method, note)),
                    None => out.plain(&format!(" {}: {}", class, note)),
                }
            }
        }
        out.newline();
    }

    if mismatches == 0 {
        out.success("ok");
        out.plain(&format!(
            " {} kinds audited, {} notes",
            fixture.objects.len(),
            findings.len()
        ));
    } else {
        out.error(&format!("{} mismatches", mismatches));
    }
    out.newline();
    mismatches
}
