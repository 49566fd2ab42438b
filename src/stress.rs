//! Randomized stress exercises for the container and its traversal views.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use vistra_container::container::Container;
use vistra_traversal::view::OrderedViews;

/// Statistics collected during stress testing
#[derive(Clone, Debug)]
pub struct StressStats {
    pub num_elements: usize,
    pub num_traversals: usize,
    pub num_mutations: usize,
    pub total_time: Duration,
    pub avg_traversal_time: Duration,
    pub elements_per_second: f64,
}

impl StressStats {
    pub fn print(&self) {
        println!("\n╔════════════════════════════════════════════════════════════╗");
        println!("║              Stress Test Statistics                         ║");
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║  Elements in Container:     {:>30} ║", self.num_elements);
        println!("║  Full Traversals:           {:>30} ║", self.num_traversals);
        println!("║  Structural Mutations:      {:>30} ║", self.num_mutations);
        println!(
            "║  Total Time:                {:>29}s ║",
            format!("{:.3}", self.total_time.as_secs_f64())
        );
        println!(
            "║  Average Traversal Time:    {:>28}µs ║",
            format!("{:.2}", self.avg_traversal_time.as_micros())
        );
        println!("║  Elements/Second:           {:>30.0} ║", self.elements_per_second);
        println!("╚════════════════════════════════════════════════════════════╝");
    }
}

/// Walk one view to exhaustion, panicking on any unexpected error.
fn drain<I>(iter: I) -> usize
where
    I: IntoIterator<Item = vistra_traversal::error::Result<i32>>,
{
    iter.into_iter().map(|v| v.unwrap()).count()
}

/// Run every traversal order over a randomized container `rounds` times
/// and verify each one visits every element exactly once.
pub fn stress_traversals(num_elements: usize, rounds: usize, seed: u64) -> StressStats {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut container = Container::new();
    for _ in 0..num_elements {
        container.add(rng.gen_range(0..1_000_000));
    }

    let start = Instant::now();
    let mut traversal_times = Vec::new();
    let mut num_traversals = 0;

    for _ in 0..rounds {
        let traversal_start = Instant::now();

        assert_eq!(drain(container.ascending()), num_elements);
        assert_eq!(drain(container.descending()), num_elements);
        assert_eq!(drain(container.side_cross()), num_elements);
        assert_eq!(drain(container.middle_out()), num_elements);
        assert_eq!(drain(container.normal()), num_elements);
        assert_eq!(drain(container.reverse()), num_elements);

        traversal_times.push(traversal_start.elapsed() / 6);
        num_traversals += 6;
    }

    let total_time = start.elapsed();
    let avg_traversal_time = if traversal_times.is_empty() {
        Duration::ZERO
    } else {
        traversal_times.iter().sum::<Duration>() / traversal_times.len() as u32
    };
    let visited = (num_traversals * num_elements) as f64;

    StressStats {
        num_elements,
        num_traversals,
        num_mutations: num_elements,
        total_time,
        avg_traversal_time,
        elements_per_second: visited / total_time.as_secs_f64().max(f64::EPSILON),
    }
}

/// Interleave random adds and remove-alls against a model vector and
/// verify the container tracks it exactly, version included.
pub fn stress_mutation_churn(operations: usize, seed: u64) -> StressStats {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut container: Container<i32> = Container::new();
    let mut model: Vec<i32> = Vec::new();
    let mut num_mutations = 0;

    let start = Instant::now();

    for _ in 0..operations {
        if model.is_empty() || rng.gen_bool(0.7) {
            let value = rng.gen_range(0..50);
            container.add(value);
            model.push(value);
            num_mutations += 1;
        } else {
            let value = rng.gen_range(0..50);
            let expected: Vec<i32> = model.iter().copied().filter(|&v| v != value).collect();
            match container.remove(&value) {
                Ok(()) => {
                    assert_ne!(expected.len(), model.len());
                    model = expected;
                    num_mutations += 1;
                }
                Err(_) => assert_eq!(expected.len(), model.len()),
            }
        }

        assert_eq!(container.len(), model.len());
        assert_eq!(container.version(), num_mutations);
    }

    // The sorted traversal must agree with the model at the end.
    let ascending: Vec<i32> = container
        .ascending()
        .into_iter()
        .map(|v| v.unwrap())
        .collect();
    let mut expected = model.clone();
    expected.sort();
    assert_eq!(ascending, expected);

    let total_time = start.elapsed();

    StressStats {
        num_elements: container.len(),
        num_traversals: 1,
        num_mutations: num_mutations as usize,
        total_time,
        avg_traversal_time: total_time / operations.max(1) as u32,
        elements_per_second: operations as f64 / total_time.as_secs_f64().max(f64::EPSILON),
    }
}

/// Measure how traversal cost scales with container size.
pub fn stress_scaling(max_power: u32, seed: u64) {
    println!("\n  {:>10}  {:>14}", "elements", "traversal µs");
    for power in 1..=max_power {
        let n = 10usize.pow(power);
        let mut rng = StdRng::seed_from_u64(seed + power as u64);
        let container: Container<i32> = (0..n).map(|_| rng.gen_range(0..1_000_000)).collect();

        let start = Instant::now();
        assert_eq!(drain(container.side_cross()), n);
        let elapsed = start.elapsed();

        println!("  {:>10}  {:>14.2}", n, elapsed.as_secs_f64() * 1e6);
    }
}
