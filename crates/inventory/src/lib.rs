//! Inventory domain module: named, quantified items and their in-memory store.
//!
//! This crate contains the validation and mutation rules for items, implemented
//! purely as deterministic domain logic (no IO, no HTTP).

pub mod item;
pub mod repository;

pub use item::{Amount, Item, ItemName, ItemPayload, NAME_MAX_LEN, NAME_MIN_LEN};
pub use repository::ItemRepository;
