//! Topic (node) types.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// A single node of a mind-map tree.
///
/// Every field is optional in the source JSON. Missing strings decode as
/// empty and missing child lists decode as empty, so an absent field and an
/// empty-but-present one look the same to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Topic {
    /// Topic identifier
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Class tag (usually `"topic"`)
    #[serde(deserialize_with = "null_as_default")]
    pub class: String,

    /// Display title, may contain embedded newlines
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Layout structure class (e.g. `"org.xmind.ui.map.unbalanced"`)
    #[serde(deserialize_with = "null_as_default")]
    pub structure_class: String,

    /// Branch state (e.g. `"folded"`)
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub branch: String,

    /// Attached children container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,

    /// Detached (floating) topics owned by this topic
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub detached: Vec<Topic>,

    /// Hyperlink target; a non-empty value renders the topic as a link
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub href: String,
}

/// The `children` object of a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Children {
    /// Topics attached to the parent in the main tree
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub attached: Vec<Topic>,
}

impl Topic {
    /// Create a topic with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            class: "topic".to_string(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the hyperlink target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    /// Append an attached child.
    pub fn with_attached(mut self, child: Topic) -> Self {
        self.children
            .get_or_insert_with(Children::default)
            .attached
            .push(child);
        self
    }

    /// Append a detached child.
    pub fn with_detached(mut self, child: Topic) -> Self {
        self.detached.push(child);
        self
    }

    /// Attached children, empty when the topic has no `children` object.
    pub fn attached(&self) -> &[Topic] {
        self.children
            .as_ref()
            .map(|c| c.attached.as_slice())
            .unwrap_or(&[])
    }

    /// Detached children.
    pub fn detached(&self) -> &[Topic] {
        &self.detached
    }

    /// All direct children: attached first, then detached.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Topic> {
        self.attached().iter().chain(self.detached.iter())
    }

    /// The link target, if one is set.
    pub fn link(&self) -> Option<&str> {
        if self.href.is_empty() {
            None
        } else {
            Some(&self.href)
        }
    }

    /// Number of topics below this one (not counting itself).
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Topic> = self.children().collect();
        while let Some(topic) = stack.pop() {
            count += 1;
            stack.extend(topic.children());
        }
        count
    }
}
