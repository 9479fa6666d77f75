//! Modulo Three
//!
//! This example builds an automaton that computes the remainder of a binary
//! number divided by three.
//!
//! Key concepts:
//! - States live in an arena and are referenced by handle
//! - Construction validates every component before wiring transitions
//! - Each state's output is the remainder it represents
//! - Traces show the path taken through the automaton
//!
//! Run with: cargo run --example modulo_three

use finite_automaton::builder::AutomatonBuilder;
use finite_automaton::core::StateArena;
use finite_automaton::transitions;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Modulo Three Example ===\n");

    let mut states = StateArena::new();
    let s0 = states.add("0");
    let s1 = states.add("1");
    let s2 = states.add("2");

    let automaton = AutomatonBuilder::new()
        .states(states)
        .alphabet("01".chars().collect())
        .initial(s0)
        .accepting([s0, s1, s2])
        .transitions(transitions![
            s0, '0' => s0;
            s0, '1' => s1;
            s1, '0' => s2;
            s1, '1' => s0;
            s2, '0' => s1;
            s2, '1' => s2;
        ])
        .build()?;

    for input in ["1001", "10110", "101100"] {
        let output = automaton.compute(input)?;
        println!("Input: {input} - Final state output: {output}");
    }

    println!("\n=== Rejected Input ===");
    match automaton.compute("1021") {
        Ok(output) => println!("Unexpectedly accepted: {output}"),
        Err(e) => println!("Rejected: {e}"),
    }

    println!("\n=== Trace of 110 ===");
    let trace = automaton.trace("110")?;
    for step in trace.steps() {
        println!("  {} --{}--> {}", step.from, step.symbol, step.to);
    }
    println!("Trace as JSON: {}", serde_json::to_string(&trace)?);

    println!("\n=== Example Complete ===");
    Ok(())
}
