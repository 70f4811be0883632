use crate::library::Catalog;

use super::PlayerCmd;

/// Who moved the current track.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IndexChange {
    /// The user settled the carousel on a page.
    UserSwipe(usize),
    /// The player reported its current item index.
    PlayerAdvance(usize),
}

/// What the other side has to do to catch up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reconcile {
    Nothing,
    /// Seek the player to the start of this track.
    SeekPlayer(usize),
    /// Scroll the carousel to this page without treating it as a swipe.
    ScrollPager(usize),
}

impl Reconcile {
    pub fn command(self) -> Option<PlayerCmd> {
        match self {
            Reconcile::SeekPlayer(index) => Some(PlayerCmd::SeekToTrack {
                index,
                offset_ms: 0,
            }),
            Reconcile::Nothing | Reconcile::ScrollPager(_) => None,
        }
    }
}

/// Keeps the carousel page and the player's current item pointing at the same
/// track.
///
/// `current_index` is the single authoritative value. A swipe updates it
/// optimistically and marks the seek as pending. Until the player reports the
/// pending index, reports of the index it had before the swipe (or of earlier
/// swipe targets) are echoes and are dropped. Any other index means the player
/// moved on by itself or by a later command; the pending seek is abandoned and
/// the carousel follows.
#[derive(Debug, Default)]
pub struct CarouselBinder {
    loaded: bool,
    current_index: usize,
    last_player_index: Option<usize>,
    pending_seek: Option<usize>,
    /// Indices the player may still report while `pending_seek` is set.
    stale: Vec<usize>,
}

impl CarouselBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn pending_seek(&self) -> Option<usize> {
        self.pending_seek
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Queue every track in catalog order and prepare the player. Only the
    /// first call does anything.
    pub fn load(&mut self, catalog: &Catalog) -> Vec<PlayerCmd> {
        if self.loaded {
            return Vec::new();
        }
        self.loaded = true;

        let mut cmds: Vec<PlayerCmd> = catalog
            .tracks()
            .iter()
            .map(|t| PlayerCmd::AddItem(t.audio.clone()))
            .collect();
        cmds.push(PlayerCmd::Prepare);
        log::info!("queued {} tracks", catalog.len());
        cmds
    }

    pub fn reconcile(&mut self, change: IndexChange) -> Reconcile {
        match change {
            IndexChange::UserSwipe(page) => {
                if page == self.current_index {
                    return Reconcile::Nothing;
                }
                match self.pending_seek {
                    Some(previous) => self.stale.push(previous),
                    None => self.stale.extend(self.last_player_index),
                }
                self.current_index = page;
                self.pending_seek = Some(page);
                Reconcile::SeekPlayer(page)
            }
            IndexChange::PlayerAdvance(index) => {
                if let Some(pending) = self.pending_seek {
                    if pending == index {
                        self.clear_pending();
                        self.last_player_index = Some(index);
                        return Reconcile::Nothing;
                    }
                    if self.stale.contains(&index) {
                        return Reconcile::Nothing;
                    }
                    log::debug!("player moved to {index} before reaching {pending}");
                    self.clear_pending();
                }

                if self.last_player_index == Some(index) {
                    return Reconcile::Nothing;
                }
                self.last_player_index = Some(index);

                if index == self.current_index {
                    Reconcile::Nothing
                } else {
                    self.current_index = index;
                    Reconcile::ScrollPager(index)
                }
            }
        }
    }

    fn clear_pending(&mut self) {
        self.pending_seek = None;
        self.stale.clear();
    }
}
