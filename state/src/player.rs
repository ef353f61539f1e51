use crate::{Episode, StateError};
use rand::{Rng, RngCore};
use std::sync::Arc;

/// The playback portion of the state: the active queue plus transport
/// flags.
///
/// `has_next` and `has_previous` are computed from the queue and index on
/// every read, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    episode_list: Arc<Vec<Episode>>,
    current_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlayerState {
    pub fn new() -> PlayerState {
        PlayerState {
            episode_list: Arc::new(Vec::new()),
            current_index: 0,
            is_playing: false,
            is_looping: false,
            is_shuffling: false,
        }
    }

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Whether skipping forward can land on an episode. Shuffling can
    /// always pick a position; otherwise there must be one after the
    /// current index.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.episode_list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Replaces the queue with a single episode and starts playing it.
    pub fn play(&mut self, episode: Episode) {
        self.episode_list = Arc::new(vec![episode]);
        self.current_index = 0;
        self.is_playing = true;
    }

    /// Replaces the queue and starts playing from `index`.
    ///
    /// The index must refer to an episode in `list`; an empty list has no
    /// such index. On rejection the state is unchanged.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<(), StateError> {
        if index >= list.len() {
            return Err(StateError::InvalidIndex {
                index,
                len: list.len(),
            });
        }

        self.episode_list = Arc::new(list);
        self.current_index = index;
        self.is_playing = true;

        Ok(())
    }

    /// Skips forward. Shuffling draws a uniform queue position; otherwise
    /// this advances to the next episode if there is one.
    pub fn play_next(&mut self, rng: &mut dyn RngCore) {
        if self.is_shuffling {
            if self.episode_list.is_empty() {
                return;
            }
            self.current_index = rng.random_range(0..self.episode_list.len());
        } else if self.has_next() {
            self.current_index += 1;
        }
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_index -= 1;
        }
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Sets `is_playing` exactly; used by the playback-completion signal.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Empties the queue and resets the index, leaving the transport
    /// flags alone.
    pub fn clear(&mut self) {
        self.episode_list = Arc::new(Vec::new());
        self.current_index = 0;
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::new()
    }
}
