use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One-shot "has this region been seen" flag. Only ever goes from hidden to
/// visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityFlag {
    visible: bool,
}

impl VisibilityFlag {
    /// Reduced motion resolves the flag up front.
    pub fn new(reduced_motion: bool) -> Self {
        Self { visible: reduced_motion }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn needs_observer(&self) -> bool {
        !self.visible
    }

    /// Feeds one intersection report. Returns true only for the report that
    /// flips the flag.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.2, root_margin: "0px" }
    }
}

impl RevealOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self { threshold, ..Self::default() }
    }
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn intersection_observer(
    callback: &ObserverCallback,
    threshold: f64,
    root_margin: &str,
) -> Result<IntersectionObserver, JsValue> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let function: &Function = callback.as_ref().unchecked_ref();
    IntersectionObserver::new_with_options(function, &init)
}

pub fn entries(batch: &Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    batch
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
}

/// Becomes true the first time `node` is at least `threshold` visible and
/// stays true. Observation stops as soon as that happens.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state(prefers_reduced_motion);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let mut active: Option<(IntersectionObserver, ObserverCallback)> = None;
                let flag = Rc::new(RefCell::new(VisibilityFlag::new(*visible)));

                if flag.borrow().needs_observer() {
                    if let Some(element) = node.cast::<Element>() {
                        let setter = visible.setter();
                        let flag = flag.clone();
                        let callback = Closure::wrap(Box::new(
                            move |batch: Array, observer: IntersectionObserver| {
                                let intersecting = entries(&batch).any(|entry| entry.is_intersecting());
                                if flag.borrow_mut().observe(intersecting) {
                                    setter.set(true);
                                    observer.disconnect();
                                }
                            },
                        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

                        match intersection_observer(&callback, options.threshold, options.root_margin) {
                            Ok(observer) => {
                                observer.observe(&element);
                                active = Some((observer, callback));
                            }
                            Err(e) => warn!("could not create intersection observer: {:?}", e),
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = active {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *visible
}

/// Reveal shortly after mount instead of on intersection. Used above the
/// fold where the region is already on screen.
#[hook]
pub fn use_mount_reveal(delay_ms: u32) -> bool {
    let visible = use_state(prefers_reduced_motion);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let timeout = (!*visible).then(|| {
                    let setter = visible.setter();
                    Timeout::new(*delay_ms, move || setter.set(true))
                });
                move || drop(timeout)
            },
            delay_ms,
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_once_and_never_reverts() {
        let mut flag = VisibilityFlag::new(false);
        assert!(!flag.is_visible());
        assert!(!flag.observe(false));
        assert!(flag.observe(true));
        assert!(flag.is_visible());

        for intersecting in [false, true, false] {
            assert!(!flag.observe(intersecting));
            assert!(flag.is_visible());
        }
    }

    #[test]
    fn reduced_motion_starts_visible_without_observer() {
        let mut flag = VisibilityFlag::new(true);
        assert!(flag.is_visible());
        assert!(!flag.needs_observer());
        assert!(!flag.observe(true));
    }

    #[test]
    fn stops_needing_observer_after_reveal() {
        let mut flag = VisibilityFlag::default();
        assert!(flag.needs_observer());
        flag.observe(true);
        assert!(!flag.needs_observer());
    }
}
