//! Exploring the least-squares cost model directly.
//!
//! Run with: cargo run --example cost_surface

use volatility_breaks::changepoint::{l2_cost, total_cost, L2Cost};

fn main() {
    println!("=== Segment Cost Model Example ===\n");

    // Signal with two flat volatility levels.
    let mut signal = vec![1.0; 8];
    signal.extend(vec![25.0; 8]);

    println!("Signal: [1.0 × 8] + [25.0 × 8]\n");

    let cost = L2Cost::fit(&signal);

    // Cost of a single split as it sweeps across the signal: the valley
    // at the true boundary is what the optimizer searches for.
    println!("{:<8} {:>14} {:>14} {:>14}", "Split", "Left", "Right", "Total");
    println!("{:-<52}", "");

    for s in 1..signal.len() {
        let left = cost.cost(0, s);
        let right = cost.cost(s, signal.len());
        println!(
            "{:<8} {:>14.2} {:>14.2} {:>14.2}",
            s,
            left,
            right,
            left + right
        );
    }

    println!("\nWhole-signal cost: {:.2}", cost.cost(0, signal.len()));
    println!("Direct computation agrees: {:.2}", l2_cost(&signal));

    println!(
        "\nCost with the true breakpoint: {:.2}",
        total_cost(&signal, &[8])
    );
    println!(
        "Cost with a misplaced breakpoint: {:.2}",
        total_cost(&signal, &[4])
    );
}
