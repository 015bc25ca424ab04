//! Payment Flow State Machine
//!
//! This example walks a transaction through pending -> authorized -> captured.
//!
//! Key concepts:
//! - Identity taken from a payload field
//! - Guards that compare the live start and goal payloads
//! - Unconditional edges
//! - Rejections leave the machine where it was
//!
//! Run with: cargo run --example payment_flow

use automaton::builder::{matching, requires, RulesetBuilder};
use automaton::core::{Identify, IdentityError, Transition};
use automaton::engine::{Machine, MachineError};

#[derive(Clone, Debug)]
struct Transaction {
    status: String,
    amount: f64,
}

impl Identify for Transaction {
    type Id = String;

    fn identify(&self) -> Result<String, IdentityError> {
        if self.status.is_empty() {
            return Err(IdentityError::new("transaction has no status"));
        }
        Ok(self.status.clone())
    }
}

fn transaction(status: &str, amount: f64) -> Transaction {
    Transaction {
        status: status.to_string(),
        amount,
    }
}

fn report(label: &str, result: Result<(), MachineError<String>>, machine: &Machine<Transaction>) {
    match result {
        Ok(()) => println!("  {label}: ok, now {}", machine.identity()),
        Err(err) => println!("  {label}: {err} (still {})", machine.identity()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Payment Flow State Machine ===\n");

    let pending = transaction("pending", 0.0);
    let authorized = transaction("authorized", 0.0);
    let captured = transaction("captured", 0.0);

    // Amount checks use cents so the comparison is exact
    let rules = RulesetBuilder::new()
        .guarded(
            Transition::of(&pending, &authorized)?,
            [
                requires("positive-amount", "Can't transition, amount is <= 0", |t: &Transaction| {
                    t.amount > 0.0
                }),
                matching("amount", |t: &Transaction| (t.amount * 100.0).round() as i64),
            ],
        )
        .transition(Transition::of(&authorized, &captured)?)
        .shared();

    println!("Zero-amount transaction:");
    let mut machine = Machine::builder()
        .rules(rules.clone())
        .initial_payload(transaction("pending", 0.0))
        .build()?;
    let result = machine.transition_to(transaction("authorized", 0.0));
    report("authorize", result, &machine);

    println!("\nPositive-amount transaction:");
    let mut machine = Machine::builder()
        .rules(rules)
        .initial_payload(transaction("pending", 1.99))
        .build()?;
    let result = machine.transition_to(transaction("authorized", 2.50));
    report("authorize with changed amount", result, &machine);
    let result = machine.transition_to(transaction("authorized", 1.99));
    report("authorize", result, &machine);
    let result = machine.transition_to(transaction("authorized", 1.99));
    report("authorize again", result, &machine);
    let result = machine.transition_to(transaction("captured", 1.99));
    report("capture", result, &machine);

    println!("\nVisited: {:?}", machine.history().path());
    println!("Terminal: {}", machine.is_terminal());

    Ok(())
}
