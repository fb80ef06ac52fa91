use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, PointerEvent};
use yew::prelude::*;

use crate::components::data_ticker::DataTicker;
use crate::components::spline_scene::SplineScene;
use crate::config;
use crate::motion::{
    after_headline_delay, headline_delay, parallax_offset, parallax_style, scroll_progress,
    HeroMotion,
};

#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();
    let parallax_ref = use_node_ref();
    let motion = use_state(HeroMotion::default);

    // Scroll-linked transforms
    {
        let section_ref = section_ref.clone();
        let motion = motion.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let update = move || {
                    if let Some(section) = section_ref.cast::<Element>() {
                        let rect = section.get_bounding_client_rect();
                        motion.set(HeroMotion::at(scroll_progress(rect.top(), rect.height())));
                    }
                };
                update();
                let scroll_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    // Pointer parallax for the 3D scene wrapper
    {
        let parallax_ref = parallax_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();
                let pointer_callback = Closure::wrap(Box::new(move |e: PointerEvent| {
                    let Some(el) = parallax_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let w = window_clone.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    let h = window_clone.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    let offset = parallax_offset(e.client_x() as f64, e.client_y() as f64, w, h);
                    let _ = el.set_attribute("style", &parallax_style(offset));
                }) as Box<dyn FnMut(PointerEvent)>);
                window
                    .add_event_listener_with_callback("pointermove", pointer_callback.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback("pointermove", pointer_callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    let lines = config::HEADLINE_LINES;
    let subheadline_delay = after_headline_delay(lines.len(), config::SUBHEADLINE_EXTRA_DELAY_S);
    let cta_delay = after_headline_delay(lines.len(), config::CTA_EXTRA_DELAY_S);

    html! {
        <section ref={section_ref} class="hero">
            <div class="hero-inner">
                <div class="hero-grid">
                    <div class="hero-copy" style={motion.headline_style()}>
                        <div class="hero-headline">
                            { for lines.iter().enumerate().map(|(i, line)| html! {
                                <h1
                                    key={*line}
                                    class="hero-line"
                                    style={format!("animation-delay: {}s;", headline_delay(i))}
                                >
                                    { *line }
                                </h1>
                            }) }
                        </div>
                        <p class="hero-subheadline reveal" style={format!("animation-delay: {}s;", subheadline_delay)}>
                            {"Psychology-driven design for brands that demand measurable results."}
                        </p>
                        <div class="hero-ticker">
                            <DataTicker />
                        </div>
                        <div class="hero-cta reveal" style={format!("animation-delay: {}s;", cta_delay)}>
                            <a href="#framework" class="cta-button">
                                {"Explore The Framework →"}
                            </a>
                        </div>
                    </div>

                    <div class="hero-network" style={motion.network_style()}>
                        <div ref={parallax_ref} class="hero-parallax">
                            <SplineScene url={config::SPLINE_SCENE_URL} />
                            <div class="hero-network-fade"></div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator" style={motion.indicator_style()}>
                <div class="scroll-indicator-label">{"Scroll to see psychology in action"}</div>
                <div class="scroll-indicator-line" aria-hidden="true">
                    <span class="scroll-indicator-ping"></span>
                    <span class="scroll-indicator-dot"></span>
                </div>
            </div>
        </section>
    }
}
