//! Discovery feed: one career video at a time with wrap-around navigation.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::{CareerVideo, CAREER_VIDEOS};

#[derive(Debug, Clone)]
pub struct DiscoveryFeed {
    videos: &'static [CareerVideo],
    index: usize,
    liked: HashSet<&'static str>,
}

impl Default for DiscoveryFeed {
    fn default() -> Self {
        Self::new(&CAREER_VIDEOS)
    }
}

impl DiscoveryFeed {
    pub fn new(videos: &'static [CareerVideo]) -> Self {
        Self {
            videos,
            index: 0,
            liked: HashSet::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn current(&self) -> Option<&'static CareerVideo> {
        self.videos.get(self.index)
    }

    /// Advance to the next video, wrapping to the first.
    pub fn next_video(&mut self) {
        if self.videos.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.videos.len();
    }

    /// Go to the previous video, wrapping to the last.
    pub fn prev_video(&mut self) {
        if self.videos.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.videos.len() - 1
        } else {
            self.index - 1
        };
    }

    /// Toggle the like on a video id. Returns the new liked state.
    pub fn toggle_like(&mut self, id: &str) -> bool {
        let Some(video) = self.videos.iter().find(|v| v.id == id) else {
            return false;
        };
        let liked = if self.liked.remove(video.id) {
            false
        } else {
            self.liked.insert(video.id);
            true
        };
        debug!(video = video.id, liked, "toggled like");
        liked
    }

    /// Toggle the like on the video being shown.
    pub fn toggle_like_current(&mut self) -> bool {
        match self.current() {
            Some(video) => self.toggle_like(video.id),
            None => false,
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }
}
