use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpotlightCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

/// Card with a soft teal glow that follows the pointer.
#[function_component(SpotlightCard)]
pub fn spotlight_card(props: &SpotlightCardProps) -> Html {
    let onmousemove = Callback::from(|e: MouseEvent| {
        let Some(card) = e.current_target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let style = card.style();
        let _ = style.set_property("--spot-x", &format!("{}px", e.client_x() as f64 - rect.left()));
        let _ = style.set_property("--spot-y", &format!("{}px", e.client_y() as f64 - rect.top()));
    });

    html! {
        <div class={classes!("spotlight-card", props.class.clone())} style={props.style.clone()} {onmousemove}>
            <div class="spotlight-glow" aria-hidden="true"></div>
            { for props.children.iter() }
        </div>
    }
}
