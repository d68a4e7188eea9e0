use log::warn;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};
use yew::Callback;

/// Where and what an embedded form should render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetTarget {
    pub portal_id: String,
    pub form_id: String,
    /// CSS selector of the container the widget renders into.
    pub target: String,
    /// Empty string disables the provider's default stylesheet.
    pub css: String,
}

impl WidgetTarget {
    pub fn new(portal_id: &str, form_id: &str, container_id: &str) -> Self {
        Self {
            portal_id: portal_id.to_string(),
            form_id: form_id.to_string(),
            target: format!("#{}", container_id),
            css: String::new(),
        }
    }
}

/// Something that can render a third-party form into the page and tell us
/// when the visitor submitted it.
pub trait FormWidgetFactory {
    /// Kept alive by the caller for as long as the widget may fire.
    type Handle;

    fn render(&self, target: &WidgetTarget, on_submit: Callback<()>) -> Result<Self::Handle, String>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum WidgetError {
    /// The provider script loaded but exposed no factory.
    Unavailable,
    Render(String),
}

/// Renders through `factory` if one was resolved.
pub fn mount_widget<F: FormWidgetFactory>(
    factory: Option<F>,
    target: &WidgetTarget,
    on_submit: Callback<()>,
) -> Result<F::Handle, WidgetError> {
    let factory = factory.ok_or(WidgetError::Unavailable)?;
    factory.render(target, on_submit).map_err(WidgetError::Render)
}

/// `hbspt.forms` as published by the HubSpot forms script.
pub struct HubSpotForms {
    forms: Object,
}

impl HubSpotForms {
    /// Looks the factory up once, after the script's load event.
    pub fn resolve() -> Option<Self> {
        let window = web_sys::window()?;
        let hbspt = Reflect::get(&window, &JsValue::from_str("hbspt")).ok()?;
        if hbspt.is_undefined() || hbspt.is_null() {
            warn!("HubSpot script loaded without hbspt global");
            return None;
        }
        let forms = Reflect::get(&hbspt, &JsValue::from_str("forms")).ok()?;
        forms.dyn_into::<Object>().ok().map(|forms| Self { forms })
    }

    fn create(&self, target: &WidgetTarget, on_submit: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
        let create = Reflect::get(&self.forms, &JsValue::from_str("create"))?.dyn_into::<Function>()?;
        let options = serde_wasm_bindgen::to_value(target)?;
        Reflect::set(&options, &JsValue::from_str("onFormSubmit"), on_submit.as_ref())?;
        create.call1(&self.forms, &options)?;
        Ok(())
    }
}

impl FormWidgetFactory for HubSpotForms {
    type Handle = Closure<dyn FnMut()>;

    fn render(&self, target: &WidgetTarget, on_submit: Callback<()>) -> Result<Self::Handle, String> {
        let on_submit = Closure::wrap(Box::new(move || on_submit.emit(())) as Box<dyn FnMut()>);
        self.create(target, &on_submit)
            .map(|()| on_submit)
            .map_err(|e| format!("{:?}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct RecordingFactory {
        rendered: RefCell<Vec<WidgetTarget>>,
        submit_immediately: bool,
    }

    impl FormWidgetFactory for &RecordingFactory {
        type Handle = ();

        fn render(&self, target: &WidgetTarget, on_submit: Callback<()>) -> Result<(), String> {
            self.rendered.borrow_mut().push(target.clone());
            if self.submit_immediately {
                on_submit.emit(());
            }
            Ok(())
        }
    }

    #[test]
    fn target_serializes_with_provider_keys() {
        let target = WidgetTarget::new("242682784", "f-1", "hubspot-form-container");
        let value = serde_json::to_value(&target).unwrap();
        assert_eq!(value["portalId"], "242682784");
        assert_eq!(value["formId"], "f-1");
        assert_eq!(value["target"], "#hubspot-form-container");
        assert_eq!(value["css"], "");
    }

    #[test]
    fn missing_factory_is_unavailable() {
        let target = WidgetTarget::new("1", "2", "c");
        let result = mount_widget(None::<&RecordingFactory>, &target, Callback::noop());
        assert_eq!(result, Err(WidgetError::Unavailable));
    }

    #[test]
    fn completion_callback_reaches_caller() {
        let factory = RecordingFactory { rendered: RefCell::new(Vec::new()), submit_immediately: true };
        let submitted = Rc::new(Cell::new(false));
        let on_submit = {
            let submitted = submitted.clone();
            Callback::from(move |()| submitted.set(true))
        };

        let target = WidgetTarget::new("1", "2", "hubspot-form-container");
        assert_eq!(mount_widget(Some(&factory), &target, on_submit), Ok(()));
        assert!(submitted.get());
        assert_eq!(factory.rendered.borrow().as_slice(), &[target]);
    }
}
