// Browser handles: the mounted <audio> element and the status strip.
use super::{node_key, progress_width, ListenerGuard, PlaybackHandle, ProgressCallback, StatusBar};
use dioxus::prelude::*;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlAudioElement, HtmlElement};

pub(super) struct WebAudioHandle {
    audio: HtmlAudioElement,
    key: usize,
}

pub(super) fn audio_handle(node: &Rc<MountedData>) -> Option<WebAudioHandle> {
    let audio = node
        .downcast::<web_sys::Element>()?
        .clone()
        .dyn_into::<HtmlAudioElement>()
        .ok()?;
    Some(WebAudioHandle {
        audio,
        key: node_key(node),
    })
}

pub(super) fn status_bar(node: &MountedData) -> Option<Rc<dyn StatusBar>> {
    let element = node
        .downcast::<web_sys::Element>()?
        .clone()
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(Rc::new(WebStatusBar(element)))
}

impl PlaybackHandle for WebAudioHandle {
    fn element_key(&self) -> usize {
        self.key
    }

    fn play(&self) {
        if !self.audio.paused() {
            return;
        }
        // Autoplay rejections land here; the next update tries again.
        if let Ok(promise) = self.audio.play() {
            spawn(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }

    fn pause(&self) {
        let _ = self.audio.pause();
    }

    fn set_volume(&self, fraction: f64) {
        self.audio.set_volume(fraction.clamp(0.0, 1.0));
    }

    fn on_time_update(&self, mut callback: ProgressCallback) -> ListenerGuard {
        let audio = self.audio.clone();
        let closure = Closure::wrap(Box::new(move || {
            callback(audio.current_time(), audio.duration());
        }) as Box<dyn FnMut()>);

        let target = self.audio.clone();
        if target
            .add_event_listener_with_callback("timeupdate", closure.as_ref().unchecked_ref())
            .is_err()
        {
            return ListenerGuard::new(|| {});
        }

        ListenerGuard::new(move || {
            let _ = target
                .remove_event_listener_with_callback("timeupdate", closure.as_ref().unchecked_ref());
        })
    }
}

struct WebStatusBar(HtmlElement);

impl StatusBar for WebStatusBar {
    fn set_progress(&self, percent: f64) {
        let _ = self
            .0
            .style()
            .set_property("width", &progress_width(percent));
    }
}
