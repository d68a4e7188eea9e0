use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::reveal_classes;
use crate::config::NAV_HEIGHT_PX;
use crate::content::{section_anchor, SiteContent};
use crate::motion::scroll::scroll_to_section;
use crate::motion::visibility::use_mount_reveal;

/// Smooth-scrolls in-page CTA targets; other hrefs are left to the browser.
fn cta_click(href: &str) -> Callback<MouseEvent> {
    let target = section_anchor(href).map(str::to_string);
    Callback::from(move |e: MouseEvent| {
        if let Some(id) = &target {
            if scroll_to_section(id, NAV_HEIGHT_PX) {
                e.prevent_default();
            }
        }
    })
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    // Above the fold, so reveal on mount rather than on intersection.
    let visible = use_mount_reveal(100);
    let hero = &content.hero;

    html! {
        <section id="home" class="hero" aria-label="Hero section">
            <div class="hero-grid" aria-hidden="true"></div>
            <div class="container hero-content">
                <div class={classes!("hero-kicker", reveal_classes(visible, 1))}>
                    <span class="hero-kicker-dot"></span>
                    {&hero.kicker}
                </div>
                <h1 class={classes!("hero-title", visible.then(|| "animate-reveal"), (!visible).then(|| "reveal-pending"))}>
                    {&content.org.name}
                </h1>
                <p class={classes!("hero-subhead", reveal_classes(visible, 3))}>
                    {&hero.subhead}
                </p>
                <div class={classes!("hero-cta-group", reveal_classes(visible, 4))}>
                    <a
                        href={hero.cta_href.clone()}
                        class="button button-primary"
                        onclick={cta_click(&hero.cta_href)}
                        aria-label={format!("{} - Navigate to contact form", hero.cta_text)}
                    >
                        {&hero.cta_text}
                    </a>
                    <a
                        href={hero.secondary_cta_href.clone()}
                        class="button button-secondary"
                        onclick={cta_click(&hero.secondary_cta_href)}
                    >
                        {&hero.secondary_cta_text}
                    </a>
                </div>
            </div>
            <div class="scroll-indicator" aria-hidden="true"></div>
        </section>
    }
}
