use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::reveal_classes;
use crate::content::SiteContent;
use crate::motion::visibility::{use_reveal, RevealOptions};

#[function_component(MissionSection)]
pub fn mission_section() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::threshold(0.2));
    let mission = &content.mission;

    html! {
        <section id="mission" ref={node} class="section section-tinted" aria-labelledby="mission-heading">
            <div class="container narrow">
                <h2 id="mission-heading" class={classes!("section-heading", reveal_classes(visible, 0))}>
                    {&mission.heading}
                </h2>
                <p class={classes!("lead", reveal_classes(visible, 1))}>{&mission.statement}</p>
                <p class={classes!("support-line", reveal_classes(visible, 2))}>{&mission.support_line}</p>
            </div>
        </section>
    }
}
