use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};
use yew::prelude::*;

use crate::background::{Animator, CanvasSurface, RenderLoop, Viewport, WindowScheduler};
use crate::error::{DomError, Result};

type SharedAnimator = Rc<RefCell<Animator<CanvasSurface, SmallRng>>>;

fn window_viewport(window: &Window) -> Result<Viewport> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width.max(0.0) as u32, height.max(0.0) as u32))
}

/// Everything that lives between mount and unmount.
struct Mounted {
    window: Window,
    animator: SharedAnimator,
    render_loop: RenderLoop<WindowScheduler>,
    on_resize: Closure<dyn FnMut()>,
}

impl Mounted {
    fn attach(canvas: HtmlCanvasElement) -> Result<Self> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let now = window
            .performance()
            .map(|p| p.now())
            .unwrap_or_default();

        let surface = CanvasSurface::new(&document, canvas)?;
        let mut animator = Animator::new(surface, SmallRng::from_entropy(), window_viewport(&window)?);
        animator.start(now)?;
        let animator: SharedAnimator = Rc::new(RefCell::new(animator));

        let render_loop = {
            let animator = animator.clone();
            let mut reported = false;
            RenderLoop::start(WindowScheduler::new(window.clone()), move |timestamp| {
                if let Err(e) = animator.borrow_mut().render_frame(timestamp) {
                    if !reported {
                        warn!("Fluid background frame failed: {}", e);
                        reported = true;
                    }
                }
            })?
        };

        let on_resize = {
            let animator = animator.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                let resized = window_viewport(&window)
                    .and_then(|viewport| animator.borrow_mut().resize(viewport));
                if let Err(e) = resized {
                    warn!("Fluid background resize failed: {}", e);
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        Ok(Self {
            window,
            animator,
            render_loop,
            on_resize,
        })
    }

    fn detach(self) {
        self.render_loop.stop();
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            debug!("Removing resize listener failed: {:?}", e);
        }
        self.animator.borrow_mut().stop();
    }
}

#[function_component(FluidBackground)]
pub fn fluid_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(DomError::MissingCanvas)
                    .and_then(Mounted::attach);
                let mounted = match mounted {
                    Ok(mounted) => {
                        info!("Fluid background mounted");
                        Some(mounted)
                    }
                    Err(e) => {
                        error!("Fluid background unavailable: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(mounted) = mounted {
                        mounted.detach();
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="fluid-background" aria-hidden="true" />
    }
}
