//! `surface classes` - list wrapper classes and their effective method maps.

use anyhow::bail;
use surface_sdk::{CachePolicy, ClassRegistry, ProxyClass};

use crate::output::StyledOutput;

/// Class in `class`'s ancestry that declares `method`
fn declared_in(class: &'static ProxyClass, method: &str) -> &'static ProxyClass {
    class
        .ancestry()
        .find(|c| c.own_binding(method).is_some())
        .unwrap_or(class)
}

/// `Owner.method` for every binding that produces `class`
fn produced_by(registry: &ClassRegistry, class: &'static ProxyClass) -> Vec<String> {
    registry
        .producers_of(class)
        .into_iter()
        .map(|(owner, binding)| format!("{}.{}", owner.name, binding.method))
        .collect()
}

pub fn execute(
    registry: &ClassRegistry,
    only: Option<&str>,
    out: &mut StyledOutput,
) -> anyhow::Result<()> {
    let classes: Vec<&'static ProxyClass> = match only {
        Some(name) => match registry.get(name) {
            Some(class) => vec![class],
            None => bail!("unknown class `{}`", name),
        },
        None => registry.iter().collect(),
    };

    for class in classes {
        print_class(registry, class, out);
    }
    Ok(())
}

fn print_class(registry: &ClassRegistry, class: &'static ProxyClass, out: &mut StyledOutput) {
    out.heading(class.name);
    if let Some(parent) = class.parent {
        out.dim(&format!(" extends {}", parent.name));
    }
    out.dim(&format!(" (depth {})", class.depth()));
    out.newline();

    let producers = produced_by(registry, class);
    if !producers.is_empty() {
        out.dim(&format!("  produced by {}", producers.join(", ")));
        out.newline();
    }

    for binding in class.effective_bindings() {
        out.plain(&format!("  {} -> {} ", binding.method, binding.class.name));
        match binding.policy {
            CachePolicy::Accessor => out.accessor("accessor"),
            CachePolicy::Factory => out.factory("factory"),
        }
        let origin = declared_in(class, binding.method);
        if !std::ptr::eq(origin, class) {
            out.dim(&format!(" (from {})", origin.name));
        }
        out.newline();
    }
}
