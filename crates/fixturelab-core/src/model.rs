use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Three-way state for fields that distinguish "explicitly false/zero" from
/// "explicitly absent".
///
/// Serializes `Absent` as an explicit null and `Present(v)` as the bare
/// value, so the owning key is always structurally present in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T> TriState<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, TriState::Absent)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            TriState::Absent => None,
            TriState::Present(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for TriState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => TriState::Present(value),
            None => TriState::Absent,
        }
    }
}

impl<T: Serialize> Serialize for TriState<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TriState::Absent => serializer.serialize_none(),
            TriState::Present(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for TriState<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(TriState::from)
    }
}

/// Mood of a generated human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Sadness,
    Sorrow,
    Longing,
    Apathy,
    Calm,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Sadness,
        Mood::Sorrow,
        Mood::Longing,
        Mood::Apathy,
        Mood::Calm,
    ];
}

/// Weapon carried by a generated human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeaponType {
    Hammer,
    Shotgun,
    Rifle,
}

impl WeaponType {
    pub const ALL: [WeaponType; 3] = [WeaponType::Hammer, WeaponType::Shotgun, WeaponType::Rifle];
}

/// Location of a generated human.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: i64,
}

/// Fully inlined vehicle, as opposed to a reference into the id pool.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub label: String,
    pub is_desirable: TriState<bool>,
}

/// Polymorphic vehicle slot: either a foreign-key style id drawn from the
/// caller-supplied pool, or an inlined record from the fixed catalog. The two
/// shapes are never merged.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Vehicle {
    ById(i64),
    Inline(VehicleRecord),
}

impl Vehicle {
    pub fn is_inline(&self) -> bool {
        matches!(self, Vehicle::Inline(_))
    }
}

/// One generated HumanBeing fixture record.
///
/// Field declaration order is the wire order for both output formats; keys
/// use camelCase. `schema_version` is a variant-level decoy field: within one
/// batch it is either present on every record or on none.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanRecord {
    pub name: String,
    pub coordinates: Coordinates,
    pub is_heroic: bool,
    pub has_accessory: TriState<bool>,
    pub vehicle: Vehicle,
    pub mood: Mood,
    pub impact_speed: i64,
    pub soundtrack_name: String,
    pub wait_minutes: TriState<i64>,
    pub weapon_type: WeaponType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<i64>,
}
