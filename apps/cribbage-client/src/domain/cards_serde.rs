//! Serialization and deserialization for card types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;

// Card serde (authority pair format `[value, suit]`, e.g. `[12, 2]` for the queen of diamonds)
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [value, suit] = <[u8; 2]>::deserialize(deserializer)?;
        Card::from_wire(value, suit).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
