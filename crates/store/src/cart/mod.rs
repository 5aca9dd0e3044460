//! Shopping cart store.
//!
//! Owns the in-memory line items, mirrors them to the persistence slot after
//! every mutation, and emits success notifications through the injected
//! notifier. All operations are synchronous; nothing suspends mid-operation,
//! so mutations are atomic with respect to each other.

mod storage;

pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};

use std::sync::Arc;

use rust_decimal::Decimal;
use tangelo_core::{CartItem, ProductId};

use crate::notify::{Notification, Notifier};

/// The shopping-cart state container.
///
/// Line items keep insertion order. At most one line exists per product id;
/// adding an existing id merges quantities instead of duplicating the line.
pub struct CartStore {
    items: Vec<CartItem>,
    storage: Box<dyn CartStorage>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Create an empty cart wired to its collaborators.
    #[must_use]
    pub fn new(storage: Box<dyn CartStorage>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            items: Vec::new(),
            storage,
            notifier,
        }
    }

    /// Rehydrate the cart from the persisted snapshot.
    ///
    /// An absent slot yields an empty cart. A malformed snapshot is logged
    /// and discarded, also yielding an empty cart.
    pub fn load(&mut self) {
        let snapshot = match self.storage.load() {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!(%error, "failed to read cart slot, starting empty");
                None
            }
        };

        self.items = snapshot.map_or_else(Vec::new, |raw| {
            serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(%error, "malformed cart snapshot, starting empty");
                Vec::new()
            })
        });
    }

    /// Serialize the current list and replace the slot contents.
    ///
    /// Called after every mutation. Write failures are logged, not surfaced;
    /// mutations never fail from the caller's perspective.
    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(snapshot) => {
                if let Err(error) = self.storage.save(&snapshot) {
                    tracing::error!(%error, "failed to persist cart snapshot");
                }
            }
            Err(error) => tracing::error!(%error, "failed to serialize cart snapshot"),
        }
    }

    /// Add an item to the cart.
    ///
    /// If a line with the same id exists, its quantity grows by
    /// `item.quantity` and every other field is left untouched; otherwise
    /// the item is appended as a new line.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
        self.persist();
        self.notifier
            .notify(Notification::success("success", "Cart updated successfully."));
    }

    /// Remove every line matching `id` (zero or one expected).
    ///
    /// Removing a missing id is a no-op on the list but still persists and
    /// notifies success.
    pub fn remove_item(&mut self, id: ProductId) {
        self.items.retain(|i| i.id != id);
        self.persist();
        self.notifier
            .notify(Notification::success("success", "Cart removed successfully."));
    }

    /// Set the quantity of the line matching `id`.
    ///
    /// No matching line: silent no-op, no persistence write, no
    /// notification. A quantity of zero removes the line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        let Some(position) = self.items.iter().position(|i| i.id == id) else {
            return;
        };

        if quantity == 0 {
            self.items.remove(position);
        } else if let Some(item) = self.items.get_mut(position) {
            item.quantity = quantity;
        }
        self.persist();
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
