//! The persisted content document: department name → five bulletins.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of bulletins every department entry carries.
pub const BULLETIN_COUNT: usize = 5;

/// Exactly [`BULLETIN_COUNT`] bulletins, in display order.
pub type Bulletins = [String; BULLETIN_COUNT];

/// Bulletins shown for the seed department before the first refresh.
const SEED_DEPARTMENT: &str = "Department of State";
const SEED_BULLETINS: [&str; BULLETIN_COUNT] = [
    "The Department is currently reviewing all diplomatic communications protocols.",
    "An internal assessment of international agreements is underway.",
    "Updates to foreign policy frameworks are pending administrative approval.",
    "Standard diplomatic procedures remain in effect until further notice.",
    "International relations continue to be a priority for the Department.",
];

/// One department's bulletins.
///
/// The fixed-size array makes a wrong count a parse error, so a stored
/// document with four or six bulletins is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentEntry {
    pub bulletins: Bulletins,
}

impl DepartmentEntry {
    pub fn new(bulletins: Bulletins) -> Self {
        Self { bulletins }
    }
}

/// The whole content store document.
///
/// Serialised as `{"last_updated": "YYYY-MM-DD", "departments": {...}}`.
/// `departments` may hold any subset of the fixed department list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub last_updated: NaiveDate,
    pub departments: BTreeMap<String, DepartmentEntry>,
}

impl ContentDocument {
    /// A document with no departments, dated `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            last_updated: date,
            departments: BTreeMap::new(),
        }
    }

    /// The first-run document written by the viewer: one seed department
    /// with placeholder bulletins.
    pub fn seeded(date: NaiveDate) -> Self {
        let mut doc = Self::empty(date);
        doc.set_bulletins(SEED_DEPARTMENT, SEED_BULLETINS.map(String::from));
        doc
    }

    pub fn department(&self, name: &str) -> Option<&DepartmentEntry> {
        self.departments.get(name)
    }

    /// Replace the entry for `name` wholesale.
    pub fn set_bulletins(&mut self, name: &str, bulletins: Bulletins) {
        self.departments
            .insert(name.to_string(), DepartmentEntry::new(bulletins));
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
