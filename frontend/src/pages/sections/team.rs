use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::{stagger_delay, FadeIn};
use crate::content::{SiteContent, TeamMember};

#[derive(Properties, PartialEq)]
struct MemberCardProps {
    member: TeamMember,
}

#[function_component(MemberCard)]
fn member_card(props: &MemberCardProps) -> Html {
    let member = &props.member;
    let portrait = match &member.image {
        Some(src) if !src.is_empty() => html! {
            <img src={src.clone()} alt={member.name.clone()} loading="lazy" class="member-photo" />
        },
        _ => html! { <div class="member-initials" aria-hidden="true">{ member.initials() }</div> },
    };

    html! {
        <div class="member-card">
            { portrait }
            <h3>{&member.name}</h3>
            <p class="member-role">{&member.role}</p>
            <a
                href={member.linkedin.clone()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={format!("{} on LinkedIn", member.name)}
            >
                {"LinkedIn"}
            </a>
        </div>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let content = use_context::<Rc<SiteContent>>().expect("site content is provided by App");
    let team = &content.team;

    html! {
        <section id="team" class="section" aria-labelledby="team-heading">
            <div class="container">
                <FadeIn class={classes!("section-header")}>
                    <h2 id="team-heading" class="section-heading">{&team.heading}</h2>
                    <p class="section-subheading">{&team.subheading}</p>
                </FadeIn>
                <div class="team-grid">
                    { for team.members.iter().enumerate().map(|(index, member)| html! {
                        <FadeIn delay_ms={stagger_delay(index, 100, 100)}>
                            <MemberCard member={member.clone()} />
                        </FadeIn>
                    }) }
                </div>
            </div>
        </section>
    }
}
