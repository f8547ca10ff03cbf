//! Throughput of the pure transition function (spec §9: "transition
//! computation is the hot path, not interpreter bookkeeping"), grounded on
//! the teacher's `benches/simple_benchmarks.rs` shape: one `criterion_group`
//! per concern, plain `c.bench_function` closures, no custom harness.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use statechart_core::{EventLike, Machine, MachineOptions, NodeConfig, Trigger, TransitionConfig};

#[derive(Clone, Debug, Default)]
struct Ctx {
    count: u32,
}

#[derive(Clone, Debug)]
struct Ev(&'static str);

impl EventLike for Ev {
    fn event_type(&self) -> &str {
        self.0
    }
}

fn traffic_light() -> Machine<Ctx, Ev> {
    let root = NodeConfig::compound("light", "green")
        .state(
            NodeConfig::atomic("green")
                .on("TIMER", vec![TransitionConfig::new(["yellow"])]),
        )
        .state(
            NodeConfig::atomic("yellow")
                .on("TIMER", vec![TransitionConfig::new(["red"])]),
        )
        .state(
            NodeConfig::atomic("red")
                .on("TIMER", vec![TransitionConfig::new(["green"])]),
        );
    Machine::build("light", root, MachineOptions::default()).expect("valid machine")
}

fn bench_single_region_cycle(c: &mut Criterion) {
    let machine = traffic_light();
    let state = machine.initial_state(Ctx::default());

    c.bench_function("transition_single_region_cycle", |b| {
        b.iter(|| {
            let next = machine.transition(&state, Trigger::External(Ev("TIMER")));
            black_box(next)
        });
    });
}

fn parallel_region(key: &'static str) -> NodeConfig<Ctx, Ev> {
    NodeConfig::compound(key, "on")
        .state(NodeConfig::atomic("on").on("TOGGLE", vec![TransitionConfig::new(["off"])]))
        .state(NodeConfig::atomic("off").on("TOGGLE", vec![TransitionConfig::new(["on"])]))
}

fn four_way_parallel() -> Machine<Ctx, Ev> {
    let root = NodeConfig::parallel("panel")
        .state(parallel_region("a"))
        .state(parallel_region("b"))
        .state(parallel_region("c"))
        .state(parallel_region("d"));
    Machine::build("panel", root, MachineOptions::default()).expect("valid machine")
}

fn bench_parallel_macrostep(c: &mut Criterion) {
    let machine = four_way_parallel();
    let state = machine.initial_state(Ctx::default());

    c.bench_function("transition_four_parallel_regions", |b| {
        b.iter(|| {
            let next = machine.transition(&state, Trigger::External(Ev("TOGGLE")));
            black_box(next)
        });
    });
}

criterion_group!(benches, bench_single_region_cycle, bench_parallel_macrostep);
criterion_main!(benches);
