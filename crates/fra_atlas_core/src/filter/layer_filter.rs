//! Atlas map layer selection and marker filtering.
//!
//! # Invariants
//! - `toggle` is its own inverse.
//! - An empty active set shows every location, not none.

use crate::model::location::{LayerType, LocationItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of map layers currently switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveLayers(BTreeSet<LayerType>);

impl ActiveLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers switched on when the atlas page opens.
    pub fn atlas_default() -> Self {
        [LayerType::Water, LayerType::Pmkisan].into_iter().collect()
    }

    /// Flips membership of `layer`; returns whether it is now active.
    pub fn toggle(&mut self, layer: LayerType) -> bool {
        if self.0.remove(&layer) {
            false
        } else {
            self.0.insert(layer);
            true
        }
    }

    /// Sets membership explicitly; returns whether the set changed.
    pub fn set(&mut self, layer: LayerType, active: bool) -> bool {
        if active {
            self.0.insert(layer)
        } else {
            self.0.remove(&layer)
        }
    }

    pub fn contains(&self, layer: LayerType) -> bool {
        self.0.contains(&layer)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = LayerType> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<LayerType> for ActiveLayers {
    fn from_iter<T: IntoIterator<Item = LayerType>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Returns locations on active layers, or all locations when none are active.
pub fn filter_locations<'a, I>(locations: I, active: &ActiveLayers) -> Vec<&'a LocationItem>
where
    I: IntoIterator<Item = &'a LocationItem>,
{
    if active.is_empty() {
        return locations.into_iter().collect();
    }
    locations
        .into_iter()
        .filter(|location| active.contains(location.layer))
        .collect()
}
