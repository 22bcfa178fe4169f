//! Auxiliary asset locators (favicon, logo).
//!
//! Single-pass lookups over the parsed page. Unlike the hero pipeline they do
//! no size checks and never touch the network.

pub mod favicon;
pub mod logo;
