//! Document-level types.

use super::{null_as_default, Topic};
use serde::{Deserialize, Serialize};

/// A decoded mind-map document: the sheets of `content.json` in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// Sheets in the document
    pub sheets: Vec<Sheet>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sheets in the document.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Add a sheet to the document.
    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Check if the document has any sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Total number of topics across all sheets, root topics included.
    pub fn topic_count(&self) -> usize {
        self.sheets
            .iter()
            .map(|sheet| 1 + sheet.root_topic.descendant_count())
            .sum()
    }
}

impl From<Vec<Sheet>> for Document {
    fn from(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }
}

/// One page of the mind map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sheet {
    /// Sheet identifier
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Class tag (usually `"sheet"`)
    #[serde(deserialize_with = "null_as_default")]
    pub class: String,

    /// Root of the topic tree
    #[serde(deserialize_with = "null_as_default")]
    pub root_topic: Topic,
}

impl Sheet {
    /// Create a sheet around a root topic.
    pub fn new(root_topic: Topic) -> Self {
        Self {
            class: "sheet".to_string(),
            root_topic,
            ..Default::default()
        }
    }

    /// Title of the root topic.
    pub fn title(&self) -> &str {
        &self.root_topic.title
    }
}
