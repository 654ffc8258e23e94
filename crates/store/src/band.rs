use serde::Serialize;
use shared::{
    domain::BandId,
    protocol::{Band, BandAction},
};
use tracing::debug;

use crate::Slice;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandState {
    /// Insertion order, never sorted.
    pub bands: Vec<Band>,
    pub current_band: Option<Band>,
    /// Bands of the active user. Not kept in sync with `bands` beyond the id
    /// matching done by `UpdateBand` and `RemoveBand`.
    pub user_bands: Vec<Band>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl BandState {
    pub fn find_band(&self, id: &BandId) -> Option<&Band> {
        self.bands.iter().find(|band| &band.id == id)
    }

    pub fn find_user_band(&self, id: &BandId) -> Option<&Band> {
        self.user_bands.iter().find(|band| &band.id == id)
    }

    fn is_current(&self, id: &BandId) -> bool {
        self.current_band
            .as_ref()
            .is_some_and(|current| &current.id == id)
    }

    fn update_band(&mut self, band: Band) {
        let replaced_band = replace_first(&mut self.bands, &band);
        let replaced_user_band = replace_first(&mut self.user_bands, &band);
        if !replaced_band && !replaced_user_band {
            debug!(band_id = %band.id, "update for unknown band left collections unchanged");
        }

        if self.is_current(&band.id) {
            self.current_band = Some(band);
        }
    }

    fn remove_band(&mut self, id: BandId) {
        let before = self.bands.len() + self.user_bands.len();
        self.bands.retain(|band| band.id != id);
        self.user_bands.retain(|band| band.id != id);
        if before == self.bands.len() + self.user_bands.len() {
            debug!(band_id = %id, "remove for unknown band");
        }

        if self.is_current(&id) {
            self.current_band = None;
        }
    }
}

/// Replaces the first entry sharing `band.id`, keeping its position.
fn replace_first(bands: &mut [Band], band: &Band) -> bool {
    match bands.iter_mut().find(|existing| existing.id == band.id) {
        Some(existing) => {
            *existing = band.clone();
            true
        }
        None => false,
    }
}

impl Slice for BandState {
    type Action = BandAction;

    const NAME: &'static str = "bands";

    fn reduce(&mut self, action: BandAction) {
        match action {
            BandAction::SetBands(bands) => self.bands = bands,
            BandAction::SetCurrentBand(band) => self.current_band = Some(band),
            BandAction::ClearCurrentBand => self.current_band = None,
            BandAction::SetUserBands(bands) => self.user_bands = bands,
            // No dedup: a repeated id yields a second entry in both lists.
            BandAction::AddBand(band) => {
                self.bands.push(band.clone());
                self.user_bands.push(band);
            }
            BandAction::UpdateBand(band) => self.update_band(band),
            BandAction::RemoveBand(id) => self.remove_band(id),
            BandAction::SetError(error) => self.error = error,
            BandAction::SetLoading(is_loading) => self.is_loading = is_loading,
        }
    }
}

#[cfg(test)]
#[path = "tests/band_tests.rs"]
mod tests;
