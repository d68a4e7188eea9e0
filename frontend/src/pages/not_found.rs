use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main id="main-content" class="not-found-page">
            <section class="section">
                <div class="container narrow">
                    <h1 class="section-heading">{"Page not found"}</h1>
                    <p class="section-subheading">{"The page you are looking for does not exist or has moved."}</p>
                    <Link<Route> to={Route::Home} classes="button button-primary">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            </section>
        </main>
    }
}
