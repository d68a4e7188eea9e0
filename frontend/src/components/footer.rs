use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::content::{SiteContent, SocialIcon};

fn social_icon(icon: SocialIcon) -> Html {
    let path = match icon {
        SocialIcon::Linkedin => "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
        SocialIcon::Facebook => "M24 12.073C24 5.405 18.627 0 12 0S0 5.405 0 12.073C0 18.1 4.388 23.094 10.125 24v-8.437H7.078v-3.49h3.047V9.41c0-3.025 1.792-4.697 4.533-4.697 1.312 0 2.686.236 2.686.236v2.971H15.83c-1.491 0-1.956.93-1.956 1.886v2.267h3.328l-.532 3.49h-2.796V24C19.612 23.094 24 18.1 24 12.073z",
        SocialIcon::Instagram => "M12 2.163c3.204 0 3.584.012 4.85.07 1.17.054 1.97.24 2.43.403a4.9 4.9 0 011.772 1.153 4.9 4.9 0 011.153 1.772c.163.46.35 1.26.403 2.43.058 1.266.07 1.646.07 4.85s-.012 3.584-.07 4.85c-.054 1.17-.24 1.97-.403 2.43a4.9 4.9 0 01-1.153 1.772 4.9 4.9 0 01-1.772 1.153c-.46.163-1.26.35-2.43.403-1.266.058-1.646.07-4.85.07s-3.584-.012-4.85-.07c-1.17-.054-1.97-.24-2.43-.403a4.9 4.9 0 01-1.772-1.153 4.9 4.9 0 01-1.153-1.772c-.163-.46-.35-1.26-.403-2.43C2.175 15.584 2.163 15.204 2.163 12s.012-3.584.07-4.85c.054-1.17.24-1.97.403-2.43a4.9 4.9 0 011.153-1.772A4.9 4.9 0 015.38 2.636c.46-.163 1.26-.35 2.43-.403C9.076 2.175 9.456 2.163 12 2.163zM12 7a5 5 0 100 10 5 5 0 000-10zm0 8.25a3.25 3.25 0 110-6.5 3.25 3.25 0 010 6.5zm5.2-9.65a1.2 1.2 0 100 2.4 1.2 1.2 0 000-2.4z",
    };
    html! {
        <svg class="social-icon" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path d={path} />
        </svg>
    }
}

pub fn copyright_line(year: i32, org_name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, org_name)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    let year = chrono::Local::now().year();
    let email = &content.metadata.contact_email;

    html! {
        <footer class="site-footer" aria-labelledby="footer-heading">
            <h2 id="footer-heading" class="sr-only">{"Footer"}</h2>
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{&content.org.name}</h3>
                    <p>{&content.footer.blurb}</p>
                </div>
                <nav class="footer-links" aria-label="Footer navigation">
                    { for content.nav_links.iter().map(|link| html! {
                        <a href={link.href.clone()}>{&link.label}</a>
                    }) }
                </nav>
                <div class="footer-contact">
                    <a href={format!("mailto:{}", email)}>{email}</a>
                    <div class="footer-social">
                        { for content.footer.social.iter().map(|social| html! {
                            <a
                                href={social.url.clone()}
                                aria-label={format!("Follow us on {}", social.platform)}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                { social_icon(social.icon) }
                            </a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-ender">
                <p class="footer-wordmark" aria-hidden="true">{"RESPONSIBLE AI"}</p>
                <p>{ copyright_line(year, &content.org.name) }</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(
            copyright_line(2026, "Responsible AI OK"),
            "© 2026 Responsible AI OK. All rights reserved."
        );
    }
}
