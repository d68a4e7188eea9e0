use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::reveal_classes;
use crate::components::spotlight::SpotlightCard;
use crate::content::{ActivityIcon, SiteContent};
use crate::motion::visibility::{use_reveal, RevealOptions};

fn activity_icon(icon: ActivityIcon) -> Html {
    let path = match icon {
        ActivityIcon::Users => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
        ActivityIcon::BookOpen => "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253",
        ActivityIcon::Lightbulb => "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z",
        ActivityIcon::ShieldCheck => "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
    };
    html! {
        <svg class="activity-icon" fill="none" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path d={path} />
        </svg>
    }
}

#[function_component(ActivitiesSection)]
pub fn activities_section() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::threshold(0.1));
    let activities = &content.activities;

    html! {
        <section id="activities" ref={node} class="section" aria-labelledby="activities-heading">
            <div class="container">
                <div class={classes!("section-header", reveal_classes(visible, 1))}>
                    <h2 id="activities-heading" class="section-heading">{&activities.heading}</h2>
                    <p class="section-subheading">{&activities.subheading}</p>
                </div>
                <div class="activities-grid">
                    { for activities.items.iter().enumerate().map(|(index, activity)| html! {
                        <SpotlightCard class={classes!("activity-card", reveal_classes(visible, index + 2))}>
                            <div class="activity-icon-wrap">{ activity_icon(activity.icon) }</div>
                            <h3 id={format!("activity-{}", activity.id)}>{&activity.title}</h3>
                            <p>{&activity.description}</p>
                        </SpotlightCard>
                    }) }
                </div>
                <p class={classes!("closing-line", reveal_classes(visible, 4))}>{&activities.closing_line}</p>
            </div>
        </section>
    }
}
