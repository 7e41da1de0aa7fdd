//! In-memory item store with seed/reset support.

use std::sync::{Mutex, MutexGuard, PoisonError};

use storeapi_core::{DomainError, DomainResult};

use crate::item::{Item, ItemName, ItemPayload};

/// Ordered, name-unique collection of items.
///
/// All state sits behind one mutex and every operation holds it for its whole
/// duration, so each call is atomic with respect to the others. Lookups are
/// linear scans.
#[derive(Debug)]
pub struct ItemRepository {
    seed: Vec<Item>,
    items: Mutex<Vec<Item>>,
}

impl ItemRepository {
    /// Create a store holding a copy of `seed`. Seed names must be unique.
    pub fn new(seed: Vec<Item>) -> DomainResult<Self> {
        for (i, item) in seed.iter().enumerate() {
            err_if_present(&seed[..i], item.name())?;
        }

        Ok(Self {
            items: Mutex::new(seed.clone()),
            seed,
        })
    }

    /// Exact match on the trimmed name.
    pub fn find_by_name(&self, name: &str) -> DomainResult<Item> {
        let name = name.trim();
        let items = self.lock();
        position(&items, name)
            .map(|i| items[i].clone())
            .ok_or_else(|| item_not_found(name))
    }

    /// Current contents, in insertion order.
    pub fn list_all(&self) -> Vec<Item> {
        self.lock().clone()
    }

    /// Validate `candidate` and append it. Fails if the name is already taken.
    pub fn insert(&self, candidate: &ItemPayload) -> DomainResult<Item> {
        let name = candidate.name()?;
        let mut items = self.lock();
        err_if_present(&items, &name)?;
        let amount = candidate.amount()?;

        let item = Item::new(name, amount);
        items.push(item.clone());
        Ok(item)
    }

    /// Validate `candidate` and overwrite the amount of the item with the same
    /// name. Fails with [`DomainError::NotFound`] if there is no such item.
    pub fn update(&self, candidate: &ItemPayload) -> DomainResult<Item> {
        let name = candidate.name()?;
        let mut items = self.lock();
        let index = err_if_absent(&items, &name)?;
        let amount = candidate.amount()?;

        let item = &mut items[index];
        item.set_amount(amount);
        Ok(item.clone())
    }

    /// Remove the item with the trimmed name.
    pub fn delete(&self, name: &str) -> DomainResult<()> {
        let name = name.trim();
        let mut items = self.lock();
        let index = position(&items, name).ok_or_else(|| item_not_found(name))?;
        items.remove(index);
        Ok(())
    }

    /// Discard every mutation and go back to the seed snapshot.
    pub fn reset(&self) {
        let mut items = self.lock();
        *items = self.seed.clone();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while the lock is held cannot leave the vector half-written
    // (every mutation is a single push/remove/assign), so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn position(items: &[Item], name: &str) -> Option<usize> {
    items.iter().position(|item| item.name().as_str() == name)
}

/// Insert-side rule: the name must not be taken yet.
fn err_if_present(items: &[Item], name: &ItemName) -> DomainResult<()> {
    match position(items, name.as_str()) {
        Some(_) => Err(DomainError::duplicate_name(format!(
            "Name '{name}' already exists in DB. Please use PATCH to update"
        ))),
        None => Ok(()),
    }
}

/// Update-side rule: the name must already exist. Returns its index.
fn err_if_absent(items: &[Item], name: &ItemName) -> DomainResult<usize> {
    position(items, name.as_str()).ok_or_else(|| {
        DomainError::not_found(format!(
            "Name '{name}' does not exist in DB. Please use POST to add"
        ))
    })
}

fn item_not_found(name: &str) -> DomainError {
    DomainError::not_found(format!("Item '{name}' was not found"))
}
