use crossbeam_channel::{unbounded, Sender, TryRecvError};
use futures::channel::mpsc::{channel as fchannel, Receiver as FReceiver};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, RwLock};
use std::thread;

mod episode;
mod player;
mod state_error;

pub use episode::Episode;
pub use player::PlayerState;
pub use state_error::StateError;

/// A mutation of the shared state. Updates are submitted in batches, and
/// a batch is applied atomically: observers never see it half-done.
#[derive(Debug)]
pub enum StateAction {
    /// Replace the queue with a single episode and start playing it.
    Play(Episode),
    /// Replace the queue and start playing from `index`. Prefer
    /// [`StateAction::play_list`], which checks the index against the
    /// list; an out-of-range index here is dropped at apply time.
    PlayList { list: Vec<Episode>, index: usize },
    PlayNext,
    PlayPrevious,
    TogglePlay,
    ToggleLoop,
    ToggleShuffle,
    /// Set `is_playing` exactly, e.g. from a playback-completion signal.
    SetPlayingState(bool),
    /// Empty the queue, keeping the transport flags.
    ClearPlayerState,
}

impl StateAction {
    /// Builds a queue-replacing action, rejecting an index the new queue
    /// cannot satisfy.
    pub fn play_list(list: Vec<Episode>, index: usize) -> Result<StateAction, StateError> {
        if index >= list.len() {
            return Err(StateError::InvalidIndex {
                index,
                len: list.len(),
            });
        }

        Ok(StateAction::PlayList { list, index })
    }
}

/// Everything that is needed to render the UI.
#[derive(Debug, Clone)]
pub struct State {
    pub(crate) player: PlayerState,
}

impl State {
    pub fn new() -> Self {
        State {
            player: PlayerState::new(),
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    fn apply(&self, actions: Vec<StateAction>, rng: &mut dyn RngCore) -> State {
        let mut next = self.clone();

        for action in actions {
            match action {
                StateAction::Play(episode) => {
                    next.player.play(episode);
                }
                StateAction::PlayList { list, index } => {
                    if let Err(err) = next.player.play_list(list, index) {
                        log::warn!("dropping play_list action: {}", err);
                    }
                }
                StateAction::PlayNext => {
                    next.player.play_next(rng);
                }
                StateAction::PlayPrevious => {
                    next.player.play_previous();
                }
                StateAction::TogglePlay => {
                    next.player.toggle_play();
                }
                StateAction::ToggleLoop => {
                    next.player.toggle_loop();
                }
                StateAction::ToggleShuffle => {
                    next.player.toggle_shuffle();
                }
                StateAction::SetPlayingState(playing) => {
                    next.player.set_playing_state(playing);
                }
                StateAction::ClearPlayerState => {
                    next.player.clear();
                }
            }
        }

        next
    }
}

impl Default for State {
    fn default() -> Self {
        State::new()
    }
}

pub struct CurrentState(Arc<RwLock<Arc<State>>>, Sender<Vec<StateAction>>);

impl std::fmt::Debug for CurrentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CurrentState")
    }
}

impl CurrentState {
    /// Creates a state that can be gotten or updated (async).
    ///
    /// Also creates a notifier that can be used to figure out when the state
    /// has been updated.
    pub fn new() -> (Arc<CurrentState>, FReceiver<()>) {
        CurrentState::with_rng(StdRng::from_os_rng())
    }

    /// Like [`CurrentState::new`], with a caller-supplied source of
    /// shuffle randomness, so tests can pin a seed.
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> (Arc<CurrentState>, FReceiver<()>) {
        let state = Arc::new(RwLock::new(Arc::new(State::new())));
        let (send_action, receive_action) = unbounded();
        let (mut send_update, receive_update) = fchannel(1);

        let current_state = Arc::new(CurrentState(state.clone(), send_action));

        thread::spawn(move || {
            let mut rng = rng;
            let mut send_actions = |actions: Vec<StateAction>| {
                let curr = state.read().unwrap().clone();
                let next = Arc::new(curr.apply(actions, &mut rng));
                *state.write().unwrap() = next;
            };

            loop {
                match receive_action.try_recv() {
                    Ok(actions) => {
                        send_actions(actions);
                    }
                    Err(TryRecvError::Empty) => {
                        // Only send if they're not already waiting for an update.
                        let _ = send_update.try_send(());
                        if let Ok(actions) = receive_action.recv() {
                            send_actions(actions);
                        } else {
                            break;
                        }
                    }
                    Err(TryRecvError::Disconnected) => {
                        break;
                    }
                }
            }
        });

        (current_state, receive_update)
    }

    pub fn get(&self) -> Arc<State> {
        self.0.read().unwrap().clone()
    }

    pub fn update(&self, actions: Vec<StateAction>) {
        self.1.send(actions).unwrap();
    }
}
