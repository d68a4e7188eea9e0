use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlScriptElement;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptStatus {
    /// Loading was not requested.
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Remembers whether this component instance already injected its script.
#[derive(Debug, Default)]
pub struct InjectionGuard {
    injected: bool,
}

impl InjectionGuard {
    /// True exactly once.
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.injected, true)
    }
}

struct InjectedScript {
    element: HtmlScriptElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

/// Unmount work for an injected tag. Handlers come off first: a tag that is
/// already fetching still fires `load` after removal, and its closures are
/// dropped with the `InjectedScript`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Teardown {
    DetachHandlers,
    RemoveElement,
}

fn teardown_steps(in_document: bool) -> &'static [Teardown] {
    if in_document {
        &[Teardown::DetachHandlers, Teardown::RemoveElement]
    } else {
        &[Teardown::DetachHandlers]
    }
}

impl InjectedScript {
    fn remove(self) {
        for step in teardown_steps(self.element.parent_node().is_some()) {
            match step {
                Teardown::DetachHandlers => {
                    self.element.set_onload(None);
                    self.element.set_onerror(None);
                }
                Teardown::RemoveElement => self.element.remove(),
            }
        }
    }
}

fn inject(src: &'static str, status: UseStateSetter<ScriptStatus>) -> Result<InjectedScript, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let element = document.create_element("script")?.dyn_into::<HtmlScriptElement>()?;
    element.set_src(src);
    element.set_async(true);

    let onload = {
        let status = status.clone();
        Closure::wrap(Box::new(move || {
            info!("Loaded external script {}", src);
            status.set(ScriptStatus::Ready);
        }) as Box<dyn FnMut()>)
    };
    let onerror = Closure::wrap(Box::new(move || {
        error!("Failed to load external script {}", src);
        status.set(ScriptStatus::Failed);
    }) as Box<dyn FnMut()>);

    element.set_onload(Some(onload.as_ref().unchecked_ref()));
    element.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    body.append_child(&element)?;

    Ok(InjectedScript { element, _onload: onload, _onerror: onerror })
}

/// Appends `<script async src=..>` to the body once per component instance
/// when `enabled`, and removes it again on unmount. Load failures are
/// reported as `Failed`; there is no retry.
#[hook]
pub fn use_external_script(src: &'static str, enabled: bool) -> ScriptStatus {
    let status = use_state(|| if enabled { ScriptStatus::Loading } else { ScriptStatus::Idle });
    let guard = use_mut_ref(InjectionGuard::default);

    {
        let status = status.clone();
        use_effect_with_deps(
            move |(src, enabled)| {
                let mut injected = None;
                if *enabled && guard.borrow_mut().claim() {
                    match inject(*src, status.setter()) {
                        Ok(script) => injected = Some(script),
                        Err(e) => {
                            error!("Could not inject {}: {:?}", src, e);
                            status.set(ScriptStatus::Failed);
                        }
                    }
                }
                move || {
                    if let Some(script) = injected {
                        script.remove();
                    }
                }
            },
            (src, enabled),
        );
    }

    *status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_claims_once() {
        let mut guard = InjectionGuard::default();
        assert!(guard.claim());
        assert!(!guard.claim());
        assert!(!guard.claim());
    }

    #[test]
    fn handlers_detach_before_tag_is_removed() {
        assert_eq!(teardown_steps(true), [Teardown::DetachHandlers, Teardown::RemoveElement]);
        assert_eq!(teardown_steps(false), [Teardown::DetachHandlers]);
    }
}
