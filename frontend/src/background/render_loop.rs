use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::Result;

/// One-shot frame callback handed to a [`FrameScheduler`].
pub type Tick = Rc<dyn Fn(f64)>;

/// Host primitive that runs a callback once at the next display refresh.
pub trait FrameScheduler {
    fn request(&self, tick: Tick) -> Result<i32>;
    fn cancel(&self, handle: i32);
}

/// `requestAnimationFrame` on the browser window, reusing one JS closure for
/// every request.
pub struct WindowScheduler {
    window: Window,
    next_tick: Rc<RefCell<Option<Tick>>>,
    closure: Closure<dyn FnMut(f64)>,
}

impl WindowScheduler {
    pub fn new(window: Window) -> Self {
        let next_tick: Rc<RefCell<Option<Tick>>> = Rc::new(RefCell::new(None));
        let slot = next_tick.clone();
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            let tick = slot.borrow_mut().take();
            if let Some(tick) = tick {
                tick(timestamp);
            }
        }) as Box<dyn FnMut(f64)>);
        Self {
            window,
            next_tick,
            closure,
        }
    }
}

impl FrameScheduler for WindowScheduler {
    fn request(&self, tick: Tick) -> Result<i32> {
        *self.next_tick.borrow_mut() = Some(tick);
        Ok(self
            .window
            .request_animation_frame(self.closure.as_ref().unchecked_ref())?)
    }

    fn cancel(&self, handle: i32) {
        self.next_tick.borrow_mut().take();
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            debug!("cancelAnimationFrame({}) failed: {:?}", handle, e);
        }
    }
}

struct LoopInner<S> {
    scheduler: S,
    active: Cell<bool>,
    pending: Cell<Option<i32>>,
    on_frame: RefCell<Box<dyn FnMut(f64)>>,
}

impl<S: FrameScheduler + 'static> LoopInner<S> {
    fn schedule(this: &Rc<Self>) -> Result<()> {
        // Weak so the scheduler's pending tick never keeps the loop alive.
        let weak: Weak<Self> = Rc::downgrade(this);
        let tick: Tick = Rc::new(move |timestamp: f64| {
            if let Some(inner) = weak.upgrade() {
                LoopInner::tick(&inner, timestamp);
            }
        });
        let handle = this.scheduler.request(tick)?;
        this.pending.set(Some(handle));
        Ok(())
    }

    fn tick(this: &Rc<Self>, timestamp: f64) {
        this.pending.set(None);
        if !this.active.get() {
            return;
        }
        {
            let mut on_frame = this.on_frame.borrow_mut();
            (&mut *on_frame)(timestamp);
        }
        if !this.active.get() {
            return;
        }
        if let Err(e) = LoopInner::schedule(this) {
            warn!("Render loop halted, next frame could not be scheduled: {}", e);
            this.active.set(false);
        }
    }
}

/// A frame loop that keeps rescheduling itself while active.
pub struct RenderLoop<S: FrameScheduler + 'static> {
    inner: Rc<LoopInner<S>>,
}

impl<S: FrameScheduler + 'static> RenderLoop<S> {
    /// Schedule `on_frame` for the next display refresh and every refresh
    /// after it, passing the frame timestamp in milliseconds.
    pub fn start<F>(scheduler: S, on_frame: F) -> Result<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let inner = Rc::new(LoopInner {
            scheduler,
            active: Cell::new(true),
            pending: Cell::new(None),
            on_frame: RefCell::new(Box::new(on_frame)),
        });
        LoopInner::schedule(&inner)?;
        Ok(Self { inner })
    }

    /// Stop rescheduling and cancel the frame already requested, if any.
    pub fn stop(&self) {
        if !self.inner.active.replace(false) {
            return;
        }
        if let Some(handle) = self.inner.pending.take() {
            self.inner.scheduler.cancel(handle);
        }
        debug!("Render loop stopped");
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }
}

impl<S: FrameScheduler + 'static> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
