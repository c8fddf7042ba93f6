//! Model-View-Intent (MVI) reducer primitives.
//!
//! This module provides the base traits every reducer combinator in the
//! crate is written against.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State
//!    ↑                     │
//!    └─────────────────────┘
//! ```
//!
//! - **Action**: a message identified by its type string
//! - **Reducer**: pure function that transforms state based on actions
//! - **StateMapper**: pure function that reshapes state on its way in or out

mod action;
mod mapper;
mod reducer;

pub use action::Action;
pub use mapper::{Identity, StateMapper};
pub use reducer::{NullReducer, Reducer};
