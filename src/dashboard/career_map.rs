//! Career map page: tab selection between learning tracks.

use crate::catalog::roadmap::{self, Track, TrackId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerMap {
    selected: TrackId,
}

impl Default for CareerMap {
    fn default() -> Self {
        Self {
            selected: TrackId::JobReady,
        }
    }
}

impl CareerMap {
    pub fn selected(&self) -> TrackId {
        self.selected
    }

    pub fn select(&mut self, id: TrackId) {
        self.selected = id;
    }

    pub fn next_track(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn track(&self) -> &'static Track {
        roadmap::track(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_job_ready_and_cycles() {
        let mut map = CareerMap::default();
        assert_eq!(map.track().title, "Job-Ready Track");
        map.next_track();
        assert_eq!(map.selected(), TrackId::FutureReady);
        map.next_track();
        assert_eq!(map.selected(), TrackId::JobReady);
    }
}
