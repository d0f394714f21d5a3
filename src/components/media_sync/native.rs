// Desktop handles: the webview owns the DOM, so commands go through eval and
// progress is polled.
use super::{
    node_key, progress_width, ListenerGuard, PlaybackHandle, ProgressCallback, StatusBar, AUDIO_ELEMENT_ID,
    STATUS_BAR_ID,
};
use dioxus::prelude::*;
use serde::Deserialize;
use std::rc::Rc;
use std::time::Duration;

const PROGRESS_POLL_MS: u64 = 250;

pub(super) struct EvalAudioHandle {
    element_id: &'static str,
    key: usize,
}

/// The mounted ref only tells us the element exists; it is addressed by id.
pub(super) fn audio_handle(node: &Rc<MountedData>) -> Option<EvalAudioHandle> {
    Some(EvalAudioHandle {
        element_id: AUDIO_ELEMENT_ID,
        key: node_key(node),
    })
}

pub(super) fn status_bar(_node: &MountedData) -> Option<Rc<dyn StatusBar>> {
    Some(Rc::new(EvalStatusBar {
        element_id: STATUS_BAR_ID,
    }))
}

impl EvalAudioHandle {
    fn run(&self, body: &str) {
        let id = self.element_id;
        let script = format!(
            r#"(function () {{
                const el = document.getElementById("{id}");
                if (!el) return false;
                {body}
                return true;
            }})();"#
        );
        let _ = document::eval(&script);
    }
}

#[derive(Debug, Deserialize)]
struct ProgressSnapshot {
    current_time: f64,
    duration: f64,
    paused: bool,
}

impl PlaybackHandle for EvalAudioHandle {
    fn element_key(&self) -> usize {
        self.key
    }

    fn play(&self) {
        self.run("if (el.paused) { const p = el.play(); if (p) p.catch(() => {}); }");
    }

    fn pause(&self) {
        self.run("el.pause();");
    }

    fn set_volume(&self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.run(&format!("el.volume = {fraction};"));
    }

    fn on_time_update(&self, mut callback: ProgressCallback) -> ListenerGuard {
        let id = self.element_id;
        let script = format!(
            r#"return (function () {{
                const el = document.getElementById("{id}");
                if (!el) return {{ current_time: 0, duration: 0, paused: true }};
                const currentTime = Number.isFinite(el.currentTime) ? el.currentTime : 0;
                const duration = Number.isFinite(el.duration) ? el.duration : 0;
                return {{ current_time: currentTime, duration, paused: !!el.paused }};
            }})();"#
        );

        let task = spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(PROGRESS_POLL_MS)).await;
                let Ok(snapshot) = document::eval(&script).join::<ProgressSnapshot>().await else {
                    continue;
                };
                // timeupdate only fires while the clock advances
                if !snapshot.paused {
                    callback(snapshot.current_time, snapshot.duration);
                }
            }
        });

        ListenerGuard::new(move || task.cancel())
    }
}

struct EvalStatusBar {
    element_id: &'static str,
}

impl StatusBar for EvalStatusBar {
    fn set_progress(&self, percent: f64) {
        let id = self.element_id;
        let width = progress_width(percent);
        let _ = document::eval(&format!(
            r#"(function () {{
                const el = document.getElementById("{id}");
                if (el) el.style.width = "{width}";
            }})();"#
        ));
    }
}
