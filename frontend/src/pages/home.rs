use std::rc::Rc;

use yew::prelude::*;

use crate::config::NAV_HEIGHT_PX;
use crate::content::SiteContent;
use crate::motion::scroll::scroll_to_location_hash;
use crate::pages::sections::{
    about::AboutSection, activities::ActivitiesSection, get_involved::GetInvolvedSection,
    hero::HeroSection, mission::MissionSection, team::TeamSection,
    why_it_matters::WhyItMattersSection,
};
use crate::seo::{faq_schema, organization_schema, use_page_meta, PageMeta, StructuredData};

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");

    use_page_meta(
        PageMeta {
            title: content.metadata.title.clone(),
            description: content.metadata.description.clone(),
            path: "/",
        },
        content.metadata.url.clone(),
    );

    // Entered through a `/#section` link from another page.
    use_effect_with_deps(
        |_| {
            scroll_to_location_hash(NAV_HEIGHT_PX);
            || ()
        },
        (),
    );

    html! {
        <main id="main-content">
            <StructuredData data={organization_schema(&content)} />
            <StructuredData data={faq_schema(&content)} />
            <HeroSection />
            <MissionSection />
            <ActivitiesSection />
            <WhyItMattersSection />
            <AboutSection />
            <TeamSection />
            <GetInvolvedSection />
        </main>
    }
}
