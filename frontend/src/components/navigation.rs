use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config::NAV_HEIGHT_PX;
use crate::content::{section_anchor, SiteContent};
use crate::motion::active_section::use_active_section;
use crate::motion::scroll::scroll_to_section;
use crate::Route;

/// Where a navigation link leads.
#[derive(Clone, Debug, PartialEq)]
enum NavTarget {
    Section(String),
    Page(Route),
    External,
}

fn nav_target(href: &str) -> NavTarget {
    if let Some(id) = section_anchor(href) {
        return NavTarget::Section(id.to_string());
    }
    match Route::recognize(href) {
        Some(route) if route != Route::NotFound => NavTarget::Page(route),
        _ => NavTarget::External,
    }
}

/// Sections the highlight follows. Only the home page has them; other pages
/// track nothing, so coming back re-binds against the new section nodes.
fn tracked_sections(route: Option<&Route>, content: &SiteContent) -> Vec<String> {
    match route {
        Some(Route::Home) => content.section_ids(),
        _ => Vec::new(),
    }
}

/// Scrolls to `id` when it is on this page; otherwise the browser follows
/// the link's href. Always closes the mobile menu.
fn section_click(id: String, menu_open: UseStateHandle<bool>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if scroll_to_section(&id, NAV_HEIGHT_PX) {
            e.prevent_default();
        }
        menu_open.set(false);
    })
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();
    let active = use_active_section(tracked_sections(route.as_ref(), &content));

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            is_scrolled.set(scroll_y > 20.0);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let render_link = |href: &str, label: &str, class: &'static str| -> Html {
        match nav_target(href) {
            NavTarget::Section(id) => {
                let is_active = *active == id;
                html! {
                    <a
                        href={href.to_string()}
                        class={classes!(class, is_active.then(|| "active"))}
                        aria-current={is_active.then(|| "page")}
                        onclick={section_click(id, menu_open.clone())}
                    >
                        {label}
                    </a>
                }
            }
            NavTarget::Page(route) => html! {
                <span onclick={close_menu.clone()}>
                    <Link<Route> to={route} classes={class}>{label}</Link<Route>>
                </span>
            },
            NavTarget::External => html! {
                <a href={href.to_string()} class={class} target="_blank" rel="noopener noreferrer">{label}</a>
            },
        }
    };

    let open = *menu_open;

    html! {
        <nav
            class={classes!("top-nav", (*is_scrolled || open).then(|| "scrolled"))}
            aria-label="Main navigation"
        >
            <div class="nav-content">
                <a
                    href="/#home"
                    class="nav-logo"
                    aria-label={format!("{} home", content.org.name)}
                    onclick={section_click("home".to_string(), menu_open.clone())}
                >
                    <span class="nav-logo-bar"></span>
                    {&content.org.name}
                </a>

                <ul class="nav-links">
                    { for content.nav_links.iter().map(|link| html! {
                        <li>{ render_link(&link.href, &link.label, "nav-link") }</li>
                    }) }
                </ul>

                <button
                    class={classes!("burger-menu", open.then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label={if open { "Close menu" } else { "Open menu" }}
                    aria-expanded={open.to_string()}
                    aria-controls="mobile-menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div id="mobile-menu" class={classes!("mobile-menu", open.then(|| "mobile-menu-open"))}>
                <ul>
                    { for content.nav_links.iter().map(|link| html! {
                        <li>{ render_link(&link.href, &link.label, "mobile-nav-link") }</li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_links() {
        assert_eq!(nav_target("/#mission"), NavTarget::Section("mission".to_string()));
        assert_eq!(nav_target("#get-involved"), NavTarget::Section("get-involved".to_string()));
        assert_eq!(nav_target("/blog"), NavTarget::Page(Route::Blog));
        assert_eq!(nav_target("https://responsibleaiok.substack.com"), NavTarget::External);
    }

    #[test]
    fn only_home_tracks_sections() {
        let content = SiteContent::load().unwrap();
        let home = tracked_sections(Some(&Route::Home), &content);
        assert_eq!(home, content.section_ids());
        assert!(!home.is_empty());

        // Leaving and returning changes the tracked list, which re-binds the observer.
        for route in [Some(&Route::Blog), Some(&Route::NotFound), None] {
            let away = tracked_sections(route, &content);
            assert!(away.is_empty());
            assert_ne!(away, home);
        }
    }
}
