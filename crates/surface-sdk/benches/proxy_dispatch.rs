use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use surface_sdk::{
    ApiProxy, HostObject, HostResult, HostValue, MethodBinding, ProxyClass, API_PROXY,
};

struct Bench;

impl HostObject for Bench {
    fn invoke(&self, method: &str, _args: &[HostValue]) -> HostResult<HostValue> {
        match method {
            "getPort" | "createBank" => Ok(HostValue::Object(Rc::new(Bench))),
            _ => Ok(HostValue::Int(1)),
        }
    }
}

static PORT: ProxyClass = ProxyClass::extend("Port", &API_PROXY, &[]);
static ROOT: ProxyClass = ProxyClass {
    name: "Root",
    parent: Some(&API_PROXY),
    bindings: &[
        MethodBinding::accessor("getPort", &PORT),
        MethodBinding::factory("createBank", &PORT),
    ],
};
static LEAF: ProxyClass = ProxyClass::extend("Leaf", &ROOT, &[]);

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for (label, class) in [("own_map", &ROOT), ("inherited_map", &LEAF)] {
        let proxy = ApiProxy::new(Rc::new(Bench), class);
        group.bench_with_input(BenchmarkId::new("unmapped", label), &proxy, |b, proxy| {
            b.iter(|| proxy.call(black_box("getHostVendor"), &[]).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("accessor_hit", label), &proxy, |b, proxy| {
            let args = [HostValue::Int(0)];
            b.iter(|| proxy.call(black_box("getPort"), &args).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("factory", label), &proxy, |b, proxy| {
            b.iter(|| proxy.call(black_box("createBank"), &[]).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
