use vistra_container::container::Container;
use vistra_traversal::error::Result as TraversalResult;
use vistra_traversal::view::OrderedViews;

use stress::{stress_mutation_churn, stress_scaling, stress_traversals};
pub mod stress;

fn collect_into_container<I>(iter: I) -> TraversalResult<Container<i32>>
where
    I: IntoIterator<Item = TraversalResult<i32>>,
{
    iter.into_iter().collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --------- Part 1: basic container operations -----------
    let mut cont = Container::new();

    println!("Adding elements...");
    for value in [7, 15, 6, 1, 2] {
        cont.add(value);
    }
    println!("Container after add: {}", cont);

    println!("\nRemoving element 15...");
    cont.remove(&15)?;
    println!("Container after removal: {}", cont);

    println!("\nTrying to remove non-existent element 100:");
    if let Err(e) = cont.remove(&100) {
        println!("Caught error: {}", e);
    }

    // --------- Part 2: mutation during iteration is detected -----------
    println!("\n--- Demonstrating error: modified during iteration ---");
    let mut it = cont.ascending().begin();
    loop {
        match it.next() {
            Some(Ok(value)) => {
                print!("{} ", value);
                cont.add(999); // modifying the container during iteration
            }
            Some(Err(e)) => {
                println!("\nCaught error during iteration: {}", e);
                break;
            }
            None => break,
        }
    }

    // --------- Part 3: all six traversal orders -----------
    let asc_result = collect_into_container(cont.ascending())?;
    println!("\nAscending: {}", asc_result);

    let desc_result = collect_into_container(cont.descending())?;
    println!("Descending: {}", desc_result);

    let cross_result = collect_into_container(cont.side_cross())?;
    println!("SideCross: {}", cross_result);

    let mid_result = collect_into_container(cont.middle_out())?;
    println!("MiddleOut: {}", mid_result);

    let norm_result = collect_into_container(cont.normal())?;
    println!("Normal: {}", norm_result);

    let rev_result = collect_into_container(cont.reverse())?;
    println!("Reverse: {}", rev_result);

    // --------- Part 4: non-numeric element type -----------
    println!("\n--- String container example ---");
    let mut str_cont = Container::new();
    str_cont.add("banana".to_string());
    str_cont.add("apple".to_string());
    str_cont.add("cherry".to_string());
    println!("Original string container: {}", str_cont);

    let normal_str: Vec<String> = str_cont
        .normal()
        .into_iter()
        .collect::<TraversalResult<_>>()?;
    println!("Normal (string): [{}]", normal_str.join(", "));

    let reverse_str: Vec<String> = str_cont
        .reverse()
        .into_iter()
        .collect::<TraversalResult<_>>()?;
    println!("Reverse (string): [{}]", reverse_str.join(", "));

    // --------- Part 5: stress runs -----------
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            STRESS TESTS                                     ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    let stats = stress_traversals(1_000, 50, 7);
    stats.print();

    let stats = stress_traversals(10_000, 10, 7);
    stats.print();

    let stats = stress_mutation_churn(5_000, 11);
    stats.print();

    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║          SCALING ANALYSIS (SideCross)                      ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    stress_scaling(5, 3);

    println!("\n✓ Demo completed successfully!");
    Ok(())
}
