//! Atlas page controller: map layer switches, markers and map surface status.
//!
//! # Invariants
//! - Markers are derived from `visible_locations()` on every read.
//! - Without a provider credential the map never leaves `MissingCredential`.

use crate::config::MapConfig;
use crate::filter::layer_filter::{filter_locations, ActiveLayers};
use crate::model::location::{LatLng, LayerType, LocationItem, MapMarker};
use crate::repo::record_repo::RecordRepository;
use crate::view::listeners::{ListenerId, ViewListeners};
use log::{debug, info};
use serde::Serialize;

/// Lifecycle of the external map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapStatus {
    /// Provider script still initializing; show the loading placeholder.
    Loading,
    Ready,
    MissingCredential,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtlasViewEvent {
    LayerChanged { layer: LayerType, active: bool },
    MapStatusChanged(MapStatus),
}

/// One row of the layer-control panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerControl {
    pub layer: LayerType,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapViewport {
    pub center: LatLng,
    pub zoom: u8,
}

pub struct AtlasView<R: RecordRepository> {
    repo: R,
    active: ActiveLayers,
    viewport: MapViewport,
    map_status: MapStatus,
    revision: u64,
    listeners: ViewListeners<AtlasViewEvent>,
}

impl<R: RecordRepository> AtlasView<R> {
    /// Opens the atlas with the default water + PM-KISAN layers.
    pub fn new(repo: R, map: &MapConfig) -> Self {
        let map_status = if map.api_key().is_some() {
            MapStatus::Loading
        } else {
            MapStatus::MissingCredential
        };
        Self {
            repo,
            active: ActiveLayers::atlas_default(),
            viewport: MapViewport {
                center: map.center,
                zoom: map.zoom,
            },
            map_status,
            revision: 0,
            listeners: ViewListeners::new(),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AtlasViewEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Flips one layer switch; returns whether the layer is now active.
    pub fn toggle_layer(&mut self, layer: LayerType) -> bool {
        let active = self.active.toggle(layer);
        debug!(
            "event=layer_toggle module=view layer={} active={}",
            layer.as_str(),
            active
        );
        self.commit(AtlasViewEvent::LayerChanged { layer, active });
        active
    }

    pub fn set_layer_active(&mut self, layer: LayerType, active: bool) {
        if self.active.set(layer, active) {
            self.commit(AtlasViewEvent::LayerChanged { layer, active });
        }
    }

    pub fn is_active(&self, layer: LayerType) -> bool {
        self.active.contains(layer)
    }

    pub fn active_layers(&self) -> &ActiveLayers {
        &self.active
    }

    pub fn layer_controls(&self) -> Vec<LayerControl> {
        LayerType::ALL
            .into_iter()
            .map(|layer| LayerControl {
                layer,
                label: layer.label(),
                active: self.active.contains(layer),
            })
            .collect()
    }

    pub fn visible_locations(&self) -> Vec<&LocationItem> {
        filter_locations(self.repo.locations(), &self.active)
    }

    pub fn markers(&self) -> Vec<MapMarker> {
        self.visible_locations()
            .into_iter()
            .map(MapMarker::from)
            .collect()
    }

    pub fn map_viewport(&self) -> MapViewport {
        self.viewport
    }

    pub fn map_status(&self) -> MapStatus {
        self.map_status
    }

    /// Records that the map provider finished loading.
    ///
    /// Returns `false` when the map was not in `Loading`.
    pub fn mark_map_loaded(&mut self) -> bool {
        if self.map_status != MapStatus::Loading {
            return false;
        }
        self.map_status = MapStatus::Ready;
        info!("event=map_ready module=view status=ok");
        self.commit(AtlasViewEvent::MapStatusChanged(MapStatus::Ready));
        true
    }

    pub fn unmount(&mut self) {
        self.listeners.clear();
    }

    fn commit(&mut self, event: AtlasViewEvent) {
        self.revision += 1;
        self.listeners.notify(&event);
    }
}
