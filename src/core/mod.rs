//! Domain derivations of the registration grid.
//!
//! Every module exposes plain pure functions; [`views::GridViews`] wires them
//! to the root containers through the derivation engine.

pub mod calculator;
pub mod days;
pub mod favorites;
pub mod hint;
pub mod import;
pub mod logic;
pub mod status;
pub mod totals;
pub mod validity;
pub mod views;

pub use views::GridViews;
