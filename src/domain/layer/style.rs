// SPDX-License-Identifier: MPL-2.0
//! Free-form presentation attributes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Style bag of a layer.
///
/// Every attribute is optional. Merging is additive: a set attribute in the
/// incoming style overwrites, an unset one leaves the existing value alone,
/// and nothing is ever cleared by a merge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    /// Attributes without a dedicated field (e.g. `letterSpacing`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Style {
    /// Merges `other` into `self`, returning whether anything changed.
    pub fn merge(&mut self, other: &Style) -> bool {
        let before = self.clone();

        merge_field(&mut self.background, &other.background);
        merge_field(&mut self.border, &other.border);
        merge_field(&mut self.font_family, &other.font_family);
        merge_field(&mut self.font_size, &other.font_size);
        merge_field(&mut self.font_weight, &other.font_weight);
        merge_field(&mut self.color, &other.color);
        merge_field(&mut self.text_align, &other.text_align);
        merge_field(&mut self.padding, &other.padding);
        merge_field(&mut self.shadow, &other.shadow);
        self.extra
            .extend(other.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        *self != before
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

fn merge_field<T: Clone>(target: &mut Option<T>, incoming: &Option<T>) {
    if let Some(value) = incoming {
        *target = Some(value.clone());
    }
}
