//! Item drops and inventory stacks.

pub mod inventory;

pub use inventory::{DropEntry, Inventory, InventoryStack};
