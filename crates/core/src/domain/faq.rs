use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::contains_any;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub answer: String,
}

impl FaqEntry {
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("general")
    }

    /// Heading shown above the answer, e.g. `returns & refunds` -> `Returns & Refunds`.
    pub fn title(&self) -> String {
        self.category.as_deref().map(title_case).unwrap_or_else(|| "Info".to_string())
    }
}

/// FAQ entries keyed by id, in file order. Lookup is first-match in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqBook {
    entries: IndexMap<String, FaqEntry>,
}

impl FaqBook {
    pub fn new(entries: IndexMap<String, FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FaqEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// `normalized_query` must already be lower-cased.
    pub fn find(&self, normalized_query: &str) -> Option<(&str, &FaqEntry)> {
        self.iter().find(|(_, entry)| contains_any(normalized_query, &entry.keywords))
    }
}

pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut at_word_start = true;
    for character in text.chars() {
        if character.is_alphabetic() {
            if at_word_start {
                output.extend(character.to_uppercase());
            } else {
                output.extend(character.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(character);
            at_word_start = true;
        }
    }
    output
}
