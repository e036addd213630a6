//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `viewer` carries what the floor viewers publish (selection, zoom, faults)
//! and the commands chrome sends back to them. `booking` is the form the
//! viewers hand reservations to.

pub mod booking;
pub mod viewer;
