//! Vending Machine State Machine
//!
//! A sample consumer of the engine: a tea vending machine cycling between
//! idle, dispensing, and servicing.
//!
//! Key concepts:
//! - Per-state transition lists with success/failure branches
//! - An owner context shared with every handler
//! - An event payload read through a checked accessor
//!
//! Run with: cargo run --example vending_machine

use gearshift::{event_enum, state_enum, Event, StateMachine, Transition, TransitionTable};
use std::sync::atomic::{AtomicUsize, Ordering};

state_enum! {
    enum VendingState {
        Idle,
        Dispensing,
        Servicing,
    }
}

event_enum! {
    enum VendingEvent {
        TeaButtonPushed,
        CupFull,
        AbortButtonPushed,
        ServiceButtonPushed,
    }
}

/// Abort events carry the dispenser slot being cancelled.
type SlotId = u32;

#[derive(Default)]
struct VendingContext {
    cups_poured: AtomicUsize,
}

type VendingMachine = StateMachine<VendingState, VendingEvent, VendingContext, SlotId>;

fn build_machine() -> VendingMachine {
    let table = TransitionTable::new()
        .state(
            VendingState::Idle,
            vec![
                Transition::new(
                    VendingEvent::TeaButtonPushed,
                    VendingState::Dispensing,
                    VendingState::Idle,
                    Box::new(|ctx: &VendingContext, _| {
                        println!("dispensing tea");
                        ctx.cups_poured.fetch_add(1, Ordering::SeqCst);
                        true
                    }),
                ),
                Transition::new(
                    VendingEvent::ServiceButtonPushed,
                    VendingState::Servicing,
                    VendingState::Idle,
                    Box::new(|_, _| {
                        println!("releasing service lock");
                        true
                    }),
                ),
            ],
        )
        .state(
            VendingState::Dispensing,
            vec![
                Transition::new(
                    VendingEvent::CupFull,
                    VendingState::Idle,
                    VendingState::Idle,
                    Box::new(|_, _| {
                        println!("cup full, back to idle");
                        true
                    }),
                ),
                Transition::new(
                    VendingEvent::AbortButtonPushed,
                    VendingState::Idle,
                    VendingState::Idle,
                    Box::new(|_, event: &Event<VendingEvent, SlotId>| {
                        match event.payload() {
                            Some(slot) => println!("aborting pour on slot {slot}"),
                            None => println!("aborting pour"),
                        }
                        true
                    }),
                ),
            ],
        )
        .state(
            VendingState::Servicing,
            vec![Transition::new(
                VendingEvent::TeaButtonPushed,
                VendingState::Dispensing,
                VendingState::Idle,
                Box::new(|_, _| {
                    println!("test pour during service");
                    true
                }),
            )],
        );

    StateMachine::new(VendingState::Idle, table, VendingContext::default())
        .expect("vending table is structurally valid")
}

fn main() {
    println!("=== Vending Machine ===\n");

    let machine = build_machine();
    println!("Initial state: {:?}", machine.current_state());

    machine.handle(&Event::new(VendingEvent::TeaButtonPushed));
    println!("After tea button: {:?}", machine.current_state());

    machine.handle(&Event::with_payload(VendingEvent::AbortButtonPushed, 3));
    println!("After abort: {:?}", machine.current_state());

    // Cup-full only means something while dispensing; here it is ignored.
    machine.handle(&Event::new(VendingEvent::CupFull));
    println!("After stray cup-full: {:?}", machine.current_state());

    println!(
        "\nCups poured: {}",
        machine.context().cups_poured.load(Ordering::SeqCst)
    );
}
