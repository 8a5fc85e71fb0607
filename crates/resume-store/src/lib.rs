//! Observable document store for Resume Studio.
//!
//! [`DocumentStore`] is the single shared mutable resource of an editing
//! session: it owns the live `{document, order, settings}` triple and
//! notifies subscribers synchronously, exactly once per mutation. Every
//! consumer — forms, history, templates, persistence — goes through its
//! accessor API; nothing outside the store holds a reference into live
//! document internals.
//!
//! # Notification semantics
//!
//! - Listeners run synchronously inside the mutating call, in subscription
//!   order, each receiving the same post-mutation snapshot.
//! - Calls that do not change state (re-attaching an attached section,
//!   writing an identical payload) do not notify, so observers never see
//!   redundant "changes".
//! - [`DocumentStore::replace_all`] swaps the entire state in one step and
//!   notifies once; downstream observers see a single change, never a
//!   sequence of partial ones.
//!
//! The store is single-threaded. While a notification is running the store
//! itself is mutably borrowed, so listeners cannot re-enter it; re-entrancy
//! concerns live one level up, in the history manager's replay guard.

mod error;
mod event;
mod store;

pub use error::{Result, StoreError};
pub use event::{StoreChange, StoreEvent};
pub use store::{DocumentStore, SubscriptionId};
