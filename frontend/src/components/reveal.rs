use yew::prelude::*;

use crate::motion::visibility::{use_reveal, RevealOptions};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Offset the content starts from before it slides into place.
    pub fn initial_transform(&self) -> &'static str {
        match self {
            Direction::Up => "translate3d(0, 20px, 0)",
            Direction::Down => "translate3d(0, -20px, 0)",
            Direction::Left => "translate3d(20px, 0, 0)",
            Direction::Right => "translate3d(-20px, 0, 0)",
            Direction::None => "none",
        }
    }
}

/// Delay for the `index`th child of a staggered group.
pub fn stagger_delay(index: usize, step_ms: u32, base_ms: u32) -> u32 {
    base_ms + step_ms.saturating_mul(index as u32)
}

/// Classes for an element inside a revealed section: hidden until the
/// section is visible, then faded in after `step` delay increments.
pub fn reveal_classes(visible: bool, step: usize) -> Classes {
    if !visible {
        return classes!("reveal-pending");
    }
    match step {
        0 => classes!("fade-in"),
        step => classes!("fade-in", format!("fade-in-delay-{}", step.min(6))),
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(500)]
    pub duration_ms: u32,
    #[prop_or(0.1)]
    pub threshold: f64,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(
        node.clone(),
        RevealOptions { threshold: props.threshold, root_margin: "0px 0px -50px 0px" },
    );

    let style = if visible {
        format!(
            "opacity: 1; transform: none; transition: opacity {d}ms cubic-bezier(0.21, 0.47, 0.32, 0.98) {delay}ms, transform {d}ms cubic-bezier(0.21, 0.47, 0.32, 0.98) {delay}ms;",
            d = props.duration_ms,
            delay = props.delay_ms,
        )
    } else {
        format!("opacity: 0; transform: {};", props.direction.initial_transform())
    };

    html! {
        <div ref={node} class={classes!("fade-in-block", props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_steps_from_base() {
        assert_eq!(stagger_delay(0, 100, 200), 200);
        assert_eq!(stagger_delay(3, 100, 200), 500);
    }

    #[test]
    fn reveal_classes_by_step() {
        assert_eq!(reveal_classes(false, 3).to_string(), "reveal-pending");
        assert_eq!(reveal_classes(true, 0).to_string(), "fade-in");
        assert_eq!(reveal_classes(true, 2).to_string(), "fade-in fade-in-delay-2");
        assert_eq!(reveal_classes(true, 9).to_string(), "fade-in fade-in-delay-6");
    }

    #[test]
    fn directions_start_offset() {
        assert_eq!(Direction::default(), Direction::Up);
        assert_eq!(Direction::None.initial_transform(), "none");
        assert!(Direction::Left.initial_transform().starts_with("translate3d(20px"));
    }
}
