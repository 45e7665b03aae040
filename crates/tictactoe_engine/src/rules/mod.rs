//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so that search, game tracking and hosts share one source
//! of truth.

pub mod draw;
pub mod win;

pub use draw::{is_full, outcome};
pub use win::{LINES, winner};
