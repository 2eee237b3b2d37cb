use serde::{Deserialize, Serialize};

/// One possible drop in an enemy's drop table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEntry {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

impl DropEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }
}

/// A stack of identical items in the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStack {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// Unix timestamp (milliseconds) of the first acquisition
    pub acquired_at: i64,
    /// Where the stack was first obtained (e.g. encounter location)
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    stacks: Vec<InventoryStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a drop into the inventory.
    ///
    /// An existing stack with the same id grows by the drop's quantity and keeps
    /// its original acquisition metadata; otherwise a new stack is appended.
    pub fn add(&mut self, entry: &DropEntry, acquired_at: i64, source: &str) {
        if let Some(stack) = self.stacks.iter_mut().find(|s| s.id == entry.id) {
            stack.quantity = stack.quantity.saturating_add(entry.quantity);
            return;
        }
        self.stacks.push(InventoryStack {
            id: entry.id.clone(),
            name: entry.name.clone(),
            quantity: entry.quantity,
            acquired_at,
            source: source.to_string(),
        });
    }

    pub fn quantity_of(&self, id: &str) -> u32 {
        self.get(id).map_or(0, |s| s.quantity)
    }

    pub fn get(&self, id: &str) -> Option<&InventoryStack> {
        self.stacks.iter().find(|s| s.id == id)
    }

    pub fn stacks(&self) -> &[InventoryStack] {
        &self.stacks
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}
