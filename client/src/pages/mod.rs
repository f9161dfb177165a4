//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `simulator` is the only route and owns panel switching; the other pages
//! are static panels it renders.

pub mod about;
pub mod dashboard;
pub mod home;
pub mod simulator;
