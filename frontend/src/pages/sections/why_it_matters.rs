use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::{Direction, FadeIn};
use crate::content::SiteContent;

#[function_component(WhyItMattersSection)]
pub fn why_it_matters_section() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    let why = &content.why_it_matters;

    html! {
        <section id="why-it-matters" class="section section-dark" aria-labelledby="why-heading">
            <div class="container narrow">
                <FadeIn>
                    <h2 id="why-heading" class="section-heading">{&why.heading}</h2>
                </FadeIn>
                <FadeIn delay_ms={200} direction={Direction::None}>
                    <p class="lead">{&why.narrative}</p>
                </FadeIn>
            </div>
        </section>
    }
}
