use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};
use yew::prelude::*;

use crate::config;
use crate::error::{DomError, Result};

#[derive(Properties, PartialEq)]
pub struct SplineSceneProps {
    pub url: AttrValue,
}

fn viewer_registered() -> bool {
    web_sys::window()
        .map(|w| !w.custom_elements().get(config::SPLINE_VIEWER_TAG).is_undefined())
        .unwrap_or(false)
}

/// Finds the viewer script, injecting it into the document on first use.
fn viewer_script(document: &Document) -> Result<HtmlScriptElement> {
    if let Some(existing) = document.query_selector("script[data-spline-viewer]")? {
        return existing
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| DomError::UnexpectedElement("script"));
    }
    let script = document
        .create_element("script")?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| DomError::UnexpectedElement("script"))?;
    script.set_type("module");
    script.set_src(config::SPLINE_VIEWER_SCRIPT_URL);
    script.set_attribute("data-spline-viewer", "")?;
    document
        .body()
        .ok_or(DomError::NoDocument)?
        .append_child(&script)?;
    debug!("Injected 3D viewer script");
    Ok(script)
}

/// Third-party 3D scene, loaded lazily with a placeholder until the viewer is ready.
#[function_component(SplineScene)]
pub fn spline_scene(props: &SplineSceneProps) -> Html {
    let loaded = use_state(viewer_registered);

    {
        let already_loaded = *loaded;
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |already_loaded: &bool| {
                let mut listener: Option<(HtmlScriptElement, Closure<dyn FnMut()>)> = None;
                if !*already_loaded {
                    let attached = web_sys::window()
                        .and_then(|w| w.document())
                        .ok_or(DomError::NoDocument)
                        .and_then(|document| viewer_script(&document))
                        .and_then(|script| {
                            let on_load = Closure::wrap(Box::new(move || {
                                loaded.set(true);
                            }) as Box<dyn FnMut()>);
                            script.add_event_listener_with_callback(
                                "load",
                                on_load.as_ref().unchecked_ref(),
                            )?;
                            Ok((script, on_load))
                        });
                    match attached {
                        Ok(pair) => listener = Some(pair),
                        Err(e) => error!("3D scene unavailable: {}", e),
                    }
                }
                move || {
                    if let Some((script, on_load)) = listener {
                        if let Err(e) = script.remove_event_listener_with_callback(
                            "load",
                            on_load.as_ref().unchecked_ref(),
                        ) {
                            debug!("Removing viewer load listener failed: {:?}", e);
                        }
                    }
                }
            },
            already_loaded,
        );
    }

    html! {
        <div class="spline-scene">
            if *loaded {
                <spline-viewer url={props.url.clone()} class="spline-viewer" />
            } else {
                <div class="spline-placeholder">{"Loading scene…"}</div>
            }
        </div>
    }
}
