use serde::Deserialize;

/// One row of the Mobile Food Schedule dataset, limited to the fields the
/// program selects and prints. Unknown response fields are ignored;
/// sparse records stay renderable: absent strings become empty, absent
/// hours become `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodTruck {
    /// Vendor name.
    #[serde(default)]
    pub applicant: String,
    /// Street address.
    #[serde(default)]
    pub location: String,
    /// Opening time, zero-padded 24h `HH:MM`.
    #[serde(default)]
    pub start24: Option<String>,
    /// Closing time, zero-padded 24h `HH:MM`.
    #[serde(default)]
    pub end24: Option<String>,
}

impl FoodTruck {
    /// Canonical `$select` list; the first entry doubles as the sort
    /// field.
    pub const FIELDS: [&'static str; 4] = ["applicant", "location", "start24", "end24"];

    pub const SORT_FIELD: &'static str = Self::FIELDS[0];
}
