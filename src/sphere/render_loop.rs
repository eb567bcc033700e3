//! Animation Frame Loop
//!
//! Calls a frame callback on every `requestAnimationFrame` until stopped.
//! Dropping the loop stops it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

struct LoopInner {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    on_frame: RefCell<Box<dyn FnMut()>>,
}

impl LoopInner {
    fn schedule(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = self.callback.borrow().as_ref() {
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(handle) => self.handle.set(Some(handle)),
                Err(e) => {
                    log::error!("[SPHERE] requestAnimationFrame failed: {:?}", e);
                    self.running.set(false);
                }
            }
        }
    }

    fn cancel(&self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

pub struct RenderLoop {
    inner: Rc<LoopInner>,
}

impl RenderLoop {
    pub fn new(on_frame: impl FnMut() + 'static) -> Self {
        Self {
            inner: Rc::new(LoopInner {
                running: Cell::new(false),
                handle: Cell::new(None),
                callback: RefCell::new(None),
                on_frame: RefCell::new(Box::new(on_frame)),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Start drawing every frame. No-op when already running.
    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if !inner.running.get() {
                return;
            }
            (inner.on_frame.borrow_mut())();
            inner.schedule();
        });
        *self.inner.callback.borrow_mut() = Some(callback);
        self.inner.schedule();
        log::debug!("[SPHERE] Render loop started");
    }

    /// Cancel the pending frame. The loop can be started again.
    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        self.inner.cancel();
        log::debug!("[SPHERE] Render loop stopped");
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
