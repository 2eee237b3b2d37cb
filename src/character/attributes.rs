use crate::core::constants::{BASE_ATTRIBUTE_VALUE, NUM_ATTRIBUTES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttributeType {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
    Luck,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Dexterity,
            AttributeType::Constitution,
            AttributeType::Intelligence,
            AttributeType::Wisdom,
            AttributeType::Charisma,
            AttributeType::Luck,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Dexterity => 1,
            AttributeType::Constitution => 2,
            AttributeType::Intelligence => 3,
            AttributeType::Wisdom => 4,
            AttributeType::Charisma => 5,
            AttributeType::Luck => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            values: [BASE_ATTRIBUTE_VALUE; NUM_ATTRIBUTES],
        }
    }

    /// All attributes at zero. Handy for isolating a single stat in formulas.
    pub fn zeroed() -> Self {
        Self {
            values: [0; NUM_ATTRIBUTES],
        }
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: u32) {
        self.values[attr.index()] = value;
    }

    /// Builder-style setter.
    pub fn with(mut self, attr: AttributeType, value: u32) -> Self {
        self.set(attr, value);
        self
    }

    pub fn strength(&self) -> u32 {
        self.get(AttributeType::Strength)
    }

    pub fn dexterity(&self) -> u32 {
        self.get(AttributeType::Dexterity)
    }

    pub fn constitution(&self) -> u32 {
        self.get(AttributeType::Constitution)
    }

    pub fn intelligence(&self) -> u32 {
        self.get(AttributeType::Intelligence)
    }

    pub fn wisdom(&self) -> u32 {
        self.get(AttributeType::Wisdom)
    }

    pub fn luck(&self) -> u32 {
        self.get(AttributeType::Luck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attributes() {
        let attrs = Attributes::new();
        for attr_type in AttributeType::all() {
            assert_eq!(attrs.get(attr_type), 10);
        }
    }

    #[test]
    fn test_zeroed_attributes() {
        let attrs = Attributes::zeroed();
        for attr_type in AttributeType::all() {
            assert_eq!(attrs.get(attr_type), 0);
        }
    }

    #[test]
    fn test_get_set() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeType::Strength, 16);
        assert_eq!(attrs.get(AttributeType::Strength), 16);
        assert_eq!(attrs.get(AttributeType::Dexterity), 10);
    }

    #[test]
    fn test_with_builder() {
        let attrs = Attributes::zeroed()
            .with(AttributeType::Dexterity, 9)
            .with(AttributeType::Luck, 3);
        assert_eq!(attrs.dexterity(), 9);
        assert_eq!(attrs.luck(), 3);
        assert_eq!(attrs.strength(), 0);
    }

    #[test]
    fn test_index_returns_unique_values() {
        let all = AttributeType::all();
        for (i, attr) in all.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }
}
