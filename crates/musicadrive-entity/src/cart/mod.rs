//! The storefront shopping cart.
//!
//! A pure, synchronous state machine owned by one client session: a tagged
//! [`CartAction`] union dispatched through [`CartState::apply`], plus the
//! derived [`CartTotals`] that gate checkout. Persistence to client-local
//! storage goes through [`storage`].

pub mod action;
pub mod state;
pub mod storage;
pub mod totals;

pub use action::CartAction;
pub use state::{CartItem, CartState};
pub use totals::CartTotals;
