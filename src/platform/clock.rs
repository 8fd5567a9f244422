//! `requestAnimationFrame` frame clock

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::scheduler::FrameClock;

/// A requested frame that has not fired yet
#[derive(Debug)]
struct PendingFrame {
    id: i32,
    /// Settles the promise the loop is awaiting
    resolve: Function,
}

/// Shared handle to the pending animation frame, used to cancel it from
/// outside the loop (e.g. the pause key).
#[derive(Debug, Clone, Default)]
pub struct FrameHandle {
    pending: Rc<RefCell<Option<PendingFrame>>>,
}

impl FrameHandle {
    /// Drop the pending frame and wake the loop with no timestamp, so
    /// `next_frame` yields `None` and the loop returns.
    pub fn cancel(&self) {
        let frame = self.pending.borrow_mut().take();
        if let Some(frame) = frame {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(frame.id);
            }
            let _ = frame.resolve.call1(&JsValue::NULL, &JsValue::UNDEFINED);
            log::debug!("Cancelled animation frame {}", frame.id);
        }
    }
}

pub struct BrowserClock {
    window: Window,
    handle: FrameHandle,
    /// Callback of the most recent request. Replaced on the next request,
    /// once it has either fired or been cancelled.
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl BrowserClock {
    pub fn new() -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
            handle: FrameHandle::default(),
            callback: None,
        })
    }

    pub fn handle(&self) -> FrameHandle {
        self.handle.clone()
    }
}

impl FrameClock for BrowserClock {
    fn next_frame(&mut self) -> impl Future<Output = Option<f64>> {
        let slot = self.handle.pending.clone();
        let callback: Closure<dyn FnMut(f64)> = Closure::once(move |time: f64| {
            let frame = slot.borrow_mut().take();
            if let Some(frame) = frame {
                let _ = frame.resolve.call1(&JsValue::NULL, &JsValue::from_f64(time));
            }
        });

        let window = &self.window;
        let pending = &self.handle.pending;
        let mut request = |resolve: Function, reject: Function| {
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => *pending.borrow_mut() = Some(PendingFrame { id, resolve }),
                Err(e) => {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                    let _ = reject.call1(&JsValue::NULL, &e);
                }
            }
        };
        let frame = JsFuture::from(Promise::new(&mut request));
        self.callback = Some(callback);

        async move { frame.await.ok()?.as_f64() }
    }

    fn cancel(&mut self) {
        self.handle.cancel();
    }
}
