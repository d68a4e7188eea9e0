use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::FadeIn;
use crate::content::SiteContent;
use crate::seo::{use_page_meta, PageMeta};

#[function_component(Blog)]
pub fn blog() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    let blog = &content.blog;

    use_page_meta(
        PageMeta {
            title: format!("{} | {}", blog.title, content.org.name),
            description: blog.description.clone(),
            path: "/blog",
        },
        content.metadata.url.clone(),
    );

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main id="main-content" class="blog-page">
            <section class="section">
                <div class="container narrow">
                    <FadeIn class={classes!("section-header")}>
                        <h1 class="section-heading">{&blog.title}</h1>
                        <p class="section-subheading">{&blog.description}</p>
                    </FadeIn>
                    <FadeIn delay_ms={150}>
                        <div class="glass-card blog-embed">
                            <h2>{&blog.subscribe_heading}</h2>
                            <p>{&blog.subscribe_text}</p>
                            <iframe
                                src={blog.embed_url.clone()}
                                title={format!("Subscribe to the {} newsletter", content.org.name)}
                                width="100%"
                                height="320"
                                frameborder="0"
                                scrolling="no"
                                loading="lazy"
                            />
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={300} class={classes!("blog-more")}>
                        <a
                            href={blog.newsletter_url.clone()}
                            class="button button-secondary"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"View all posts on Substack"}
                        </a>
                    </FadeIn>
                </div>
            </section>
        </main>
    }
}
