use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::reveal_classes;
use crate::content::SiteContent;
use crate::motion::visibility::{use_reveal, RevealOptions};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::threshold(0.2));
    let about = &content.about;

    html! {
        <section id="about" ref={node} class="section section-tinted" aria-labelledby="about-heading">
            <div class="container narrow">
                <p class={classes!("label-uppercase", reveal_classes(visible, 0))}>{&about.kicker}</p>
                <h2 id="about-heading" class={classes!("section-heading", reveal_classes(visible, 0))}>
                    {&about.heading}
                </h2>
                { for about.paragraphs.iter().enumerate().map(|(index, paragraph)| html! {
                    <p class={reveal_classes(visible, index + 1)}>{paragraph}</p>
                }) }
                if let Some(funding) = &about.funding_line {
                    <p class={classes!("funding-line", reveal_classes(visible, 4))}>{funding}</p>
                }
            </div>
        </section>
    }
}
