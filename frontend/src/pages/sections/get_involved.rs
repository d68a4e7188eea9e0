use std::rc::Rc;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::reveal_classes;
use crate::config::{FormStrategy, SiteConfig, HUBSPOT_CONTAINER_ID, HUBSPOT_SCRIPT_SRC};
use crate::content::{FieldCopy, SiteContent};
use crate::forms::lead::{Field, FormAction, LeadForm};
use crate::forms::submit::{submit_lead, Cancellation};
use crate::motion::visibility::{use_reveal, RevealOptions};
use crate::widgets::hubspot::{mount_widget, HubSpotForms, WidgetTarget};
use crate::widgets::script_loader::{use_external_script, ScriptStatus};

/// Pieces of the get-involved area that can be on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSurface {
    Confirmation,
    WidgetContainer,
    NativeForm,
}

/// The embedded widget and the native form never appear together for one
/// configuration. The widget container stays after success; the native form
/// is replaced by the confirmation.
pub fn form_surfaces(strategy: &FormStrategy, succeeded: bool) -> Vec<FormSurface> {
    let mut surfaces = Vec::new();
    if succeeded {
        surfaces.push(FormSurface::Confirmation);
    }
    match strategy {
        FormStrategy::Embedded { .. } => surfaces.push(FormSurface::WidgetContainer),
        FormStrategy::Native if !succeeded => surfaces.push(FormSurface::NativeForm),
        FormStrategy::Native => {}
    }
    surfaces
}

#[function_component(GetInvolvedSection)]
pub fn get_involved_section() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    let config = use_context::<Rc<SiteConfig>>().expect("site config is provided by App");
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::threshold(0.2));
    let form = use_reducer(LeadForm::default);
    let in_flight = use_mut_ref(|| false);
    let cancellation = use_state(Cancellation::default);

    let embedded = !config.form.is_native();
    let script = use_external_script(HUBSPOT_SCRIPT_SRC, embedded);
    let widget_failed = use_state(|| false);
    let widget_handle = use_mut_ref(|| None::<Closure<dyn FnMut()>>);

    {
        let cancellation = (*cancellation).clone();
        use_unmount(move || cancellation.cancel());
    }

    // Render the embedded form once its script has loaded.
    {
        let form = form.clone();
        let widget_failed = widget_failed.clone();
        let strategy = config.form.clone();
        use_effect_with_deps(
            move |status| {
                match (status, &strategy) {
                    (ScriptStatus::Ready, FormStrategy::Embedded { portal_id, form_id }) => {
                        let target = WidgetTarget::new(portal_id, form_id, HUBSPOT_CONTAINER_ID);
                        let on_submit = Callback::from(move |()| form.dispatch(FormAction::WidgetSubmitted));
                        match mount_widget(HubSpotForms::resolve(), &target, on_submit) {
                            Ok(handle) => *widget_handle.borrow_mut() = Some(handle),
                            Err(e) => {
                                error!("Could not render embedded form: {:?}", e);
                                widget_failed.set(true);
                            }
                        }
                    }
                    (ScriptStatus::Failed, _) => widget_failed.set(true),
                    _ => {}
                }
                || ()
            },
            script,
        );
    }

    let onsubmit = {
        let form = form.clone();
        let sink = config.lead_sink.clone();
        let cancellation = (*cancellation).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                return;
            }

            let mut next = (*form).clone();
            let fields = next.submit();
            form.dispatch(FormAction::Submit);
            let Some(fields) = fields else {
                return;
            };

            *in_flight.borrow_mut() = true;
            let form = form.clone();
            let sink = sink.clone();
            let cancellation = cancellation.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let result = submit_lead(sink, fields).await;
                *in_flight.borrow_mut() = false;
                if cancellation.is_cancelled() {
                    return;
                }
                match result {
                    Ok(()) => form.dispatch(FormAction::Succeeded),
                    Err(e) => form.dispatch(FormAction::Failed(e.user_message())),
                }
            });
        })
    };

    let copy = &content.get_involved;
    let email = &content.metadata.contact_email;

    let text_field = |field: Field, field_copy: &FieldCopy, input_type: &'static str, required: bool| -> Html {
        let name = field.name();
        let error = form.error(field).map(str::to_string);
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.dispatch(FormAction::Edit(field, input.value()));
            })
        };
        html! {
            <div class="form-field">
                <label for={name}>
                    {&field_copy.label}
                    if required {
                        <span class="required" aria-hidden="true">{" *"}</span>
                    }
                </label>
                <input
                    type={input_type}
                    id={name}
                    {name}
                    value={form.fields.get(field).to_string()}
                    placeholder={field_copy.placeholder.clone()}
                    class={classes!("form-input", error.is_some().then(|| "has-error"))}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={error.as_ref().map(|_| format!("{}-error", name))}
                    {required}
                    disabled={form.is_submitting()}
                    {oninput}
                />
                if let Some(message) = error {
                    <p id={format!("{}-error", name)} class="field-error" role="alert">{message}</p>
                }
            </div>
        }
    };

    let interest_select = {
        let onchange = {
            let form = form.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                form.dispatch(FormAction::Edit(Field::Interest, select.value()));
            })
        };
        let current = form.fields.interest.clone();
        html! {
            <div class="form-field">
                <label for={Field::Interest.name()}>{&copy.interest.label}</label>
                <select
                    id={Field::Interest.name()}
                    name={Field::Interest.name()}
                    class="form-input"
                    disabled={form.is_submitting()}
                    {onchange}
                >
                    { for copy.interest.options.iter().map(|option| html! {
                        <option value={option.value.clone()} selected={option.value == current}>
                            {&option.label}
                        </option>
                    }) }
                </select>
            </div>
        }
    };

    let render_surface = |surface: FormSurface| -> Html {
        match surface {
            FormSurface::Confirmation => html! {
                <div class="form-success glass-card fade-in" role="alert">
                    <h3>{&copy.success_heading}</h3>
                    <p>{&copy.success_message}</p>
                </div>
            },
            FormSurface::WidgetContainer => html! {
                <div class={classes!("glass-card", "widget-card", reveal_classes(visible, 1))}>
                    <div id={HUBSPOT_CONTAINER_ID}>
                        if *widget_failed {
                            <p class="widget-fallback" role="alert">
                                {"The form could not be loaded. Please reach us at "}
                                <a href={format!("mailto:{}", email)}>{email}</a>
                                {"."}
                            </p>
                        } else {
                            <div class="widget-loading">
                                <span class="spinner" aria-hidden="true"></span>
                                <p>{"Loading Secure Form"}</p>
                            </div>
                        }
                    </div>
                    <div class="widget-trust">
                        <span>{"Secure Institutional Integration"}</span>
                        <span>{"Powered by HubSpot"}</span>
                    </div>
                </div>
            },
            FormSurface::NativeForm => html! {
                <form class={classes!("native-form", reveal_classes(visible, 1))} onsubmit={onsubmit.clone()} novalidate={true}>
                    if let Some(message) = &form.submit_error {
                        <p class="form-error" role="alert">{message}</p>
                    }
                    { text_field(Field::FirstName, &copy.first_name, "text", true) }
                    { text_field(Field::Email, &copy.email, "email", true) }
                    { text_field(Field::Organization, &copy.organization, "text", false) }
                    { interest_select.clone() }
                    <button type="submit" class="button button-primary" disabled={form.is_submitting()}>
                        { if form.is_submitting() { "Sending..." } else { copy.submit_text.as_str() } }
                    </button>
                    <p class="privacy-notice">{&copy.privacy_notice}</p>
                </form>
            },
        }
    };

    html! {
        <section id="get-involved" ref={node} class="section" aria-labelledby="get-involved-heading">
            <div class="container narrow">
                <div class={classes!("section-header", reveal_classes(visible, 0))}>
                    <h2 id="get-involved-heading" class="section-heading">{&copy.heading}</h2>
                    <p class="section-subheading">{&copy.subheading}</p>
                </div>
                { for form_surfaces(&config.form, form.is_success()).into_iter().map(render_surface) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> FormStrategy {
        FormStrategy::Embedded { portal_id: "242682784".to_string(), form_id: "f".to_string() }
    }

    #[test]
    fn embedded_path_never_shows_native_form() {
        for succeeded in [false, true] {
            let surfaces = form_surfaces(&embedded(), succeeded);
            assert!(surfaces.contains(&FormSurface::WidgetContainer));
            assert!(!surfaces.contains(&FormSurface::NativeForm));
        }
    }

    #[test]
    fn native_path_never_shows_widget_container() {
        for succeeded in [false, true] {
            let surfaces = form_surfaces(&FormStrategy::Native, succeeded);
            assert!(!surfaces.contains(&FormSurface::WidgetContainer));
        }
    }

    #[test]
    fn native_success_replaces_form_with_confirmation() {
        assert_eq!(form_surfaces(&FormStrategy::Native, false), vec![FormSurface::NativeForm]);
        assert_eq!(form_surfaces(&FormStrategy::Native, true), vec![FormSurface::Confirmation]);
        assert_eq!(
            form_surfaces(&embedded(), true),
            vec![FormSurface::Confirmation, FormSurface::WidgetContainer]
        );
    }
}
