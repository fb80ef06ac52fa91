use yew::prelude::*;

use crate::components::fluid_background::FluidBackground;
use crate::components::hero::Hero;
use crate::components::layout::Layout;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Layout>
            <div class="stage">
                <FluidBackground />
                <Hero />
            </div>
            <section id="framework" class="framework">
                <div class="framework-inner">
                    <h2>{"The Framework"}</h2>
                    <p>
                        {"This section intentionally left succinct to let the hero establish the emotional tone. \
                          Scroll interactions reduce cognitive load while building anticipation for method clarity."}
                    </p>
                </div>
            </section>
        </Layout>
    }
}
