//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its viewer state and delegates rendering details to
//! `components`.

pub mod desktop_floor;
pub mod mobile_reservations;
