//! Media Sync - reconciles the live audio element with the player's props.
//! Runs after every render; keeps the high-frequency progress writes off the
//! declarative render path.

use crate::api::TrackId;
use crate::store::Volume;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
use native::{audio_handle, status_bar};
#[cfg(target_arch = "wasm32")]
use web::{audio_handle, status_bar};

/// Id of the progress strip inside the player.
pub const STATUS_BAR_ID: &str = "player-status-bar";
/// Id of the player's audio element.
pub const AUDIO_ELEMENT_ID: &str = "audio";

/// Percentage of `duration` reached at `current_time`, rounded to 2 decimals.
/// Anything that cannot be a real position (nothing played yet, unknown or
/// live duration) reads as 0.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !(current_time > 0.0) || !(duration > 0.0) || !duration.is_finite() {
        return 0.0;
    }
    ((100.0 / duration) * current_time * 100.0).round() / 100.0
}

/// CSS width written to the status bar.
pub fn progress_width(percent: f64) -> String {
    format!("{percent:.2}%")
}

/// Detaches a listener when dropped.
pub struct ListenerGuard {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Callback receiving `(current_time, duration)` in seconds.
pub type ProgressCallback = Box<dyn FnMut(f64, f64)>;

/// The imperative side of an audio element.
pub trait PlaybackHandle {
    /// Identity of the underlying element. A different key means a different
    /// node, even when it plays the same track.
    fn element_key(&self) -> usize;
    /// Start playback. Implementations may skip the command when the element
    /// is already playing.
    fn play(&self);
    fn pause(&self);
    /// `fraction` is in 0.0..=1.0.
    fn set_volume(&self, fraction: f64);
    /// Register for playback-time advancement until the guard is dropped.
    fn on_time_update(&self, callback: ProgressCallback) -> ListenerGuard;
}

/// The progress strip written outside the render path.
pub trait StatusBar {
    fn set_progress(&self, percent: f64);
}

/// The props the sync step reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncProps {
    pub track_id: Option<TrackId>,
    pub is_playing: bool,
    pub volume: Volume,
}

/// What a progress listener was attached for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerKey {
    element: usize,
    track_id: Option<TrackId>,
}

/// Listener bookkeeping that outlives a single render.
#[derive(Default)]
pub struct MediaSync {
    listener: Option<ListenerGuard>,
    listening_to: Option<ListenerKey>,
}

impl MediaSync {
    /// One sync pass. With no handle mounted this only releases the listener.
    pub fn reconcile<H>(
        &mut self,
        handle: Option<&H>,
        status_bar: Option<Rc<dyn StatusBar>>,
        props: SyncProps,
    ) where
        H: PlaybackHandle + ?Sized,
    {
        let Some(handle) = handle else {
            self.detach();
            return;
        };

        let key = ListenerKey {
            element: handle.element_key(),
            track_id: props.track_id,
        };
        if self.listener.is_some() && self.listening_to != Some(key) {
            debug!(track_id = ?props.track_id, "audio element or track changed, dropping progress listener");
            self.detach();
        }

        if props.is_playing {
            handle.play();
            if self.listener.is_none() {
                if let Some(bar) = status_bar {
                    self.listener = Some(handle.on_time_update(Box::new(
                        move |current_time, duration| {
                            bar.set_progress(progress_percent(current_time, duration));
                        },
                    )));
                    self.listening_to = Some(key);
                }
            }
        } else {
            handle.pause();
            self.detach();
        }

        handle.set_volume(props.volume.as_fraction());
    }

    pub fn detach(&mut self) {
        self.listener = None;
        self.listening_to = None;
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }
}

/// Mounted element slot filled by `onmounted`.
pub type NodeRef = Signal<Option<Rc<MountedData>>>;

/// Key for a mounted node, stable while the node stays mounted.
fn node_key(node: &Rc<MountedData>) -> usize {
    Rc::as_ptr(node) as usize
}

fn clear_node(node: &mut NodeRef) {
    if node.peek().is_some() {
        node.set(None);
    }
}

/// Wire the sync step to the player's element refs. Re-runs whenever the
/// props or a ref change; the listener is released when the player unmounts.
///
/// Without an active track the player renders no `<audio>`, so both refs are
/// cleared and the next track waits for its own `onmounted`.
pub fn use_media_sync(mut audio: NodeRef, mut status: NodeRef, props: SyncProps) {
    let sync = use_hook(|| Rc::new(RefCell::new(MediaSync::default())));

    {
        let sync = sync.clone();
        use_drop(move || sync.borrow_mut().detach());
    }

    use_effect(use_reactive((&props,), move |(props,)| {
        if props.track_id.is_none() {
            clear_node(&mut audio);
            clear_node(&mut status);
        }
        let handle = audio().and_then(|node| audio_handle(&node));
        let bar = status().and_then(|node| status_bar(&node));
        debug!(
            mounted = handle.is_some(),
            is_playing = props.is_playing,
            volume = props.volume.get(),
            "media sync"
        );
        sync.borrow_mut().reconcile(handle.as_ref(), bar, props);
    }));
}
