//! `surface walk` - navigate a call path against the simulated host.

use std::rc::Rc;

use anyhow::{bail, Context};
use surface_api::Host;
use surface_sdk::{ApiProxy, CachePolicy, HostValue, Returned, Wrapper};
use surface_sim::{CallRecord, SimRuntime};

use crate::output::StyledOutput;
use crate::path::{self, Segment};

/// Result of one step
#[derive(Debug)]
pub enum Outcome {
    /// Wrapped in a proxy of `class`
    Wrapped {
        proxy: Rc<ApiProxy>,
        object_id: Option<u64>,
        policy: CachePolicy,
    },
    /// Plain value
    Value(HostValue),
}

#[derive(Debug)]
pub struct Step {
    pub segment: Segment,
    pub outcome: Outcome,
}

/// What calling the final step a second time returned
#[derive(Debug, PartialEq)]
pub enum Repeat {
    SameWrapper,
    NewWrapper,
    EqualValue,
    DifferentValue,
}

#[derive(Debug)]
pub struct Walk {
    pub steps: Vec<Step>,
    pub repeat: Option<Repeat>,
    /// Host calls made while walking, in order
    pub calls: Vec<CallRecord>,
}

/// Follow `path` from the runtime's root
pub fn walk(rt: &SimRuntime, path: &[Segment], repeat: bool) -> anyhow::Result<Walk> {
    rt.clear_calls();
    let host = Host::new(rt.root());
    let mut current = host.proxy().clone();
    let mut steps = Vec::with_capacity(path.len());

    for (i, segment) in path.iter().enumerate() {
        let last = i + 1 == path.len();
        let outcome = call(rt, &current, segment)
            .with_context(|| format!("step {} `{}` failed", i + 1, segment))?;

        if last {
            let repeat = if repeat {
                let again = call(rt, &current, segment)
                    .with_context(|| format!("repeating `{}` failed", segment))?;
                Some(compare(&outcome, &again))
            } else {
                None
            };
            steps.push(Step {
                segment: segment.clone(),
                outcome,
            });
            return Ok(Walk {
                steps,
                repeat,
                calls: rt.calls(),
            });
        }

        match &outcome {
            Outcome::Wrapped { proxy, .. } => current = proxy.clone(),
            Outcome::Value(value) => bail!(
                "`{}` returned a {} value; only wrapped results can be navigated further",
                segment,
                value.type_name()
            ),
        }
        steps.push(Step {
            segment: segment.clone(),
            outcome,
        });
    }

    // `path::parse` never yields an empty path.
    bail!("empty call path")
}

fn call(rt: &SimRuntime, proxy: &Rc<ApiProxy>, segment: &Segment) -> anyhow::Result<Outcome> {
    let returned = proxy.call(&segment.method, &segment.args)?;
    Ok(match returned {
        Returned::Wrapped(wrapped) => {
            let policy = proxy
                .class()
                .resolve(&segment.method)
                .map_or(CachePolicy::Factory, |b| b.policy);
            let object_id = rt.lookup(wrapped.target()).map(|o| o.id());
            Outcome::Wrapped {
                proxy: wrapped,
                object_id,
                policy,
            }
        }
        Returned::Value(value) => Outcome::Value(value),
    })
}

fn compare(first: &Outcome, second: &Outcome) -> Repeat {
    match (first, second) {
        (Outcome::Wrapped { proxy: a, .. }, Outcome::Wrapped { proxy: b, .. }) => {
            if Rc::ptr_eq(a, b) {
                Repeat::SameWrapper
            } else {
                Repeat::NewWrapper
            }
        }
        (Outcome::Value(a), Outcome::Value(b)) if a == b => Repeat::EqualValue,
        _ => Repeat::DifferentValue,
    }
}

pub fn execute(
    rt: &SimRuntime,
    path: &str,
    repeat: bool,
    out: &mut StyledOutput,
) -> anyhow::Result<()> {
    let segments = path::parse(path)?;
    let walk = walk(rt, &segments, repeat)?;

    out.heading("Host");
    out.newline();
    for step in &walk.steps {
        out.plain(&format!("  {} -> ", step.segment));
        match &step.outcome {
            Outcome::Wrapped {
                proxy,
                object_id,
                policy,
            } => {
                out.heading(proxy.class().name);
                if let Some(id) = object_id {
                    out.dim(&format!(" #{}", id));
                }
                out.plain(" ");
                match policy {
                    CachePolicy::Accessor => out.accessor("[accessor]"),
                    CachePolicy::Factory => out.factory("[factory]"),
                }
            }
            Outcome::Value(value) => out.plain(&value.to_string()),
        }
        out.newline();
    }

    if let Some(repeat) = walk.repeat {
        let text = match repeat {
            Repeat::SameWrapper => "repeat: same wrapper instance",
            Repeat::NewWrapper => "repeat: new wrapper instance",
            Repeat::EqualValue => "repeat: equal value",
            Repeat::DifferentValue => "repeat: different value",
        };
        out.dim(text);
        out.newline();
    }

    out.dim(&format!("{} host calls", walk.calls.len()));
    out.newline();
    for call in &walk.calls {
        out.dim(&format!("  {}", call));
        out.newline();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(path: &str, repeat: bool) -> anyhow::Result<Walk> {
        let rt = SimRuntime::with_default_fixture()?;
        walk(&rt, &path::parse(path)?, repeat)
    }

    #[test]
    fn test_walk_chain() {
        let walk = run("createTrackBank(8, 2, 0).getTrack(1).getVolume()", false).unwrap();
        let classes: Vec<_> = walk
            .steps
            .iter()
            .map(|s| match &s.outcome {
                Outcome::Wrapped { proxy, .. } => proxy.class().name,
                Outcome::Value(_) => "value",
            })
            .collect();
        assert_eq!(classes, ["TrackBank", "Track", "AutomatableRangedValue"]);
        assert!(walk.repeat.is_none());
    }

    #[test]
    fn test_walk_repeat_accessor_and_factory() {
        let walk = run("getMidiInPort(0)", true).unwrap();
        assert_eq!(walk.repeat, Some(Repeat::SameWrapper));

        let walk = run("createTransport()", true).unwrap();
        assert_eq!(walk.repeat, Some(Repeat::NewWrapper));

        let walk = run("getHostVendor()", true).unwrap();
        assert_eq!(walk.repeat, Some(Repeat::EqualValue));
        assert!(matches!(
            &walk.steps[0].outcome,
            Outcome::Value(v) if v.as_str() == Some("Bitwig")
        ));
    }

    #[test]
    fn test_walk_reports_only_its_own_calls() {
        let rt = SimRuntime::with_default_fixture().unwrap();
        rt.root().invoke("println", &["before".into()]).unwrap();

        let walk = walk(&rt, &path::parse("getMidiInPort(0)").unwrap(), true).unwrap();
        let methods: Vec<_> = walk.calls.iter().map(|c| c.method.as_str()).collect();
        assert_eq!(methods, ["getMidiInPort", "getMidiInPort"]);
        assert_eq!(walk.calls[0].to_string(), "Host#1.getMidiInPort(0)");
    }

    #[test]
    fn test_walk_through_value_fails() {
        let err = run("getHostVendor().getTrack(0)", false).unwrap_err();
        assert!(err.to_string().contains("only wrapped results"));
    }

    #[test]
    fn test_walk_host_error_has_context() {
        let err = run("createTrackBank(8, 0, 0).getNothing()", false).unwrap_err();
        assert!(err.to_string().contains("step 2 `getNothing()` failed"));
    }

    #[test]
    fn test_walk_records_policy() {
        let walk = run("createCursorTrack(\"c\", 0, 0).getPrimaryDevice()", false).unwrap();
        match &walk.steps[1].outcome {
            Outcome::Wrapped { proxy, policy, object_id } => {
                assert_eq!(proxy.class().name, "PrimaryDevice");
                assert_eq!(*policy, CachePolicy::Accessor);
                assert!(object_id.is_some());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
