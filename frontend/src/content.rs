use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

/// Every piece of copy the site renders. Parsed once in `main` and handed
/// to the component tree through a context, never mutated afterwards.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub metadata: SiteMetadata,
    pub org: OrgInfo,
    pub nav_links: Vec<NavLink>,
    pub hero: HeroContent,
    pub mission: MissionContent,
    pub activities: ActivitiesContent,
    pub why_it_matters: WhyItMattersContent,
    pub about: AboutContent,
    pub team: TeamContent,
    pub get_involved: GetInvolvedContent,
    pub footer: FooterContent,
    pub faq: Vec<FaqEntry>,
    pub blog: BlogContent,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    pub og_image: String,
    pub contact_email: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OrgInfo {
    pub name: String,
    pub former_name: String,
    pub tagline: String,
    pub location: String,
    pub founding_date: String,
    pub knows_about: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HeroContent {
    pub kicker: String,
    pub subhead: String,
    pub cta_text: String,
    pub cta_href: String,
    pub secondary_cta_text: String,
    pub secondary_cta_href: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MissionContent {
    pub heading: String,
    pub statement: String,
    pub support_line: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ActivitiesContent {
    pub heading: String,
    pub subheading: String,
    pub items: Vec<Activity>,
    pub closing_line: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: ActivityIcon,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityIcon {
    Users,
    BookOpen,
    Lightbulb,
    ShieldCheck,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WhyItMattersContent {
    pub heading: String,
    pub narrative: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AboutContent {
    pub kicker: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub funding_line: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TeamContent {
    pub heading: String,
    pub subheading: String,
    pub members: Vec<TeamMember>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub linkedin: String,
    pub image: Option<String>,
}

impl TeamMember {
    /// Shown in place of a portrait when no image is set.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GetInvolvedContent {
    pub heading: String,
    pub subheading: String,
    pub first_name: FieldCopy,
    pub email: FieldCopy,
    pub organization: FieldCopy,
    pub interest: SelectCopy,
    pub submit_text: String,
    pub privacy_notice: String,
    pub success_heading: String,
    pub success_message: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FieldCopy {
    pub label: String,
    pub placeholder: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SelectCopy {
    pub label: String,
    pub options: Vec<SelectOption>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FooterContent {
    pub blurb: String,
    pub social: Vec<SocialLink>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: SocialIcon,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Linkedin,
    Facebook,
    Instagram,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BlogContent {
    pub title: String,
    pub description: String,
    pub subscribe_heading: String,
    pub subscribe_text: String,
    pub newsletter_url: String,
    pub embed_url: String,
}

impl SiteContent {
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(SITE_JSON)
    }

    /// Identifiers of the in-page sections the navigation points at, in
    /// navigation order.
    pub fn section_ids(&self) -> Vec<String> {
        self.nav_links
            .iter()
            .filter_map(|link| section_anchor(&link.href))
            .map(str::to_string)
            .collect()
    }
}

/// Returns the section id for links of the form `#id` or `/#id`.
pub fn section_anchor(href: &str) -> Option<&str> {
    let id = href.strip_prefix("/#").or_else(|| href.strip_prefix('#'))?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.org.name, "Responsible AI OK");
        assert_eq!(content.activities.items.len(), 4);
        assert_eq!(content.activities.items[3].icon, ActivityIcon::ShieldCheck);
        assert_eq!(content.footer.social[2].icon, SocialIcon::Instagram);
        assert!(content.about.funding_line.is_none());
    }

    #[test]
    fn section_ids_skip_page_links() {
        let content = SiteContent::load().unwrap();
        let ids = content.section_ids();
        assert_eq!(ids.first().map(String::as_str), Some("home"));
        assert!(!ids.iter().any(|id| id.contains("blog")));
        assert_eq!(ids, vec!["home", "mission", "activities", "why-it-matters", "about"]);
    }

    #[test]
    fn section_anchor_forms() {
        assert_eq!(section_anchor("/#mission"), Some("mission"));
        assert_eq!(section_anchor("#get-involved"), Some("get-involved"));
        assert_eq!(section_anchor("/blog"), None);
        assert_eq!(section_anchor("#"), None);
    }

    #[test]
    fn initials_from_names() {
        let member = TeamMember {
            name: "Shayna Talton".to_string(),
            role: String::new(),
            linkedin: String::new(),
            image: None,
        };
        assert_eq!(member.initials(), "ST");
    }
}
