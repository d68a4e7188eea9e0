use log::debug;
use serde_json::{json, Value};
use web_sys::Document;
use yew::prelude::*;

use crate::content::SiteContent;

#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Path under the site URL, e.g. `/blog`.
    pub path: &'static str,
}

pub fn canonical_url(site_url: &str, path: &str) -> String {
    let base = site_url.trim_end_matches('/');
    match path {
        "" | "/" => format!("{}/", base),
        path => format!("{}/{}", base, path.trim_start_matches('/')),
    }
}

pub fn organization_schema(content: &SiteContent) -> Value {
    let url = &content.metadata.url;
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": content.org.name,
        "alternateName": content.org.former_name,
        "foundingDate": content.org.founding_date,
        "url": url,
        "logo": format!("{}/logo.png", url.trim_end_matches('/')),
        "description": content.metadata.description,
        "areaServed": { "@type": "State", "name": content.org.location },
        "knowsAbout": content.org.knows_about,
        "address": {
            "@type": "PostalAddress",
            "addressRegion": "OK",
            "addressCountry": "US"
        },
        "sameAs": content.footer.social.iter().map(|s| s.url.as_str()).collect::<Vec<_>>(),
    })
}

pub fn faq_schema(content: &SiteContent) -> Value {
    let questions: Vec<Value> = content
        .faq
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": { "@type": "Answer", "text": entry.answer }
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

fn set_head_attribute(document: &Document, selector: &str, tag: &str, key: (&str, &str), attr: &str, value: &str) {
    let existing = document.query_selector(selector).ok().flatten();
    let element = match existing {
        Some(element) => element,
        None => {
            let (Ok(element), Some(head)) = (document.create_element(tag), document.head()) else {
                debug!("cannot create {} in head", selector);
                return;
            };
            let _ = element.set_attribute(key.0, key.1);
            if head.append_child(&element).is_err() {
                return;
            }
            element
        }
    };
    let _ = element.set_attribute(attr, value);
}

/// Sets the document title, description and canonical link for a page.
#[hook]
pub fn use_page_meta(meta: PageMeta, site_url: String) {
    use_effect_with_deps(
        move |(meta, site_url)| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                document.set_title(&meta.title);
                set_head_attribute(
                    &document,
                    "meta[name=\"description\"]",
                    "meta",
                    ("name", "description"),
                    "content",
                    &meta.description,
                );
                set_head_attribute(
                    &document,
                    "link[rel=\"canonical\"]",
                    "link",
                    ("rel", "canonical"),
                    "href",
                    &canonical_url(site_url, meta.path),
                );
            }
            || ()
        },
        (meta, site_url),
    );
}

#[derive(Properties, PartialEq)]
pub struct StructuredDataProps {
    pub data: Value,
}

/// JSON-LD block for search engines.
#[function_component(StructuredData)]
pub fn structured_data(props: &StructuredDataProps) -> Html {
    html! {
        <script type="application/ld+json">{ props.data.to_string() }</script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> SiteContent {
        SiteContent::load().unwrap()
    }

    #[test]
    fn organization_schema_fields() {
        let schema = organization_schema(&content());
        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["name"], "Responsible AI OK");
        assert_eq!(schema["alternateName"], "AI Safety Tulsa");
        assert_eq!(schema["logo"], "https://responsibleaiok.org/logo.png");
        assert_eq!(schema["areaServed"]["name"], "Oklahoma");
        let same_as = schema["sameAs"].as_array().unwrap();
        assert_eq!(same_as.len(), 3);
        assert_eq!(same_as[0], "https://www.linkedin.com/company/aistulsa/");
    }

    #[test]
    fn faq_schema_has_one_question_per_entry() {
        let content = content();
        let schema = faq_schema(&content);
        let questions = schema["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), content.faq.len());
        assert_eq!(questions[0]["name"], "What is Responsible AI OK?");
        assert_eq!(questions[0]["acceptedAnswer"]["@type"], "Answer");
    }

    #[test]
    fn canonical_urls() {
        assert_eq!(canonical_url("https://responsibleaiok.org", "/"), "https://responsibleaiok.org/");
        assert_eq!(canonical_url("https://responsibleaiok.org/", "/blog"), "https://responsibleaiok.org/blog");
    }
}
