//! Turnstile State Machine
//!
//! The classic two-state turnstile: a coin unlocks it, a push relocks it.
//! Demonstrates the smallest complete table the engine accepts.
//!
//! Run with: cargo run --example turnstile

use gearshift::{event_enum, state_enum, Event, StateMachine, Transition, TransitionTable};

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

event_enum! {
    enum Visitor {
        Coin,
        Push,
    }
}

fn main() {
    println!("=== Turnstile ===\n");

    let table = TransitionTable::new()
        .state(
            Turnstile::Locked,
            vec![Transition::new(
                Visitor::Coin,
                Turnstile::Unlocked,
                Turnstile::Locked,
                Box::new(|_, _| true),
            )],
        )
        .state(
            Turnstile::Unlocked,
            vec![Transition::new(
                Visitor::Push,
                Turnstile::Locked,
                Turnstile::Unlocked,
                Box::new(|_, _| true),
            )],
        );

    let machine: StateMachine<Turnstile, Visitor, ()> =
        StateMachine::new(Turnstile::Locked, table, ()).expect("turnstile table is valid");

    for event in [Visitor::Push, Visitor::Coin, Visitor::Coin, Visitor::Push] {
        machine.handle(&Event::new(event));
        println!("{event:?} -> {:?}", machine.current_state());
    }
}
