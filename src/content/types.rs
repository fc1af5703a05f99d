// Portfolio document types.
// Defines structs for deserializing the bundled site content JSON.

use serde::Deserialize;

/// Hero section shown on the dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub one_liner: String,
}

/// Optional media references for a project or journey entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    pub demo: Option<String>,
    pub image: Option<String>,
}

/// A major project with a problem/approach/outcome narrative.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorProject {
    pub id: String,
    pub title: String,
    pub company: String,
    pub problem: String,
    pub approach: String,
    pub outcome: String,
    #[serde(default)]
    pub media: Media,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

/// A smaller side-mission entry, used as the static fallback when the
/// GitHub listing is unavailable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideMission {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// One employment entry in the career timeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Contact details and external profiles.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default)]
    pub topmate_url: Option<String>,
    #[serde(default)]
    pub discord_username: Option<String>,
    /// URL of the downloadable CV asset. The download flow is disabled
    /// when absent.
    #[serde(default)]
    pub cv_url: Option<String>,
}

/// GitHub listing parameters for the side-missions view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GithubSection {
    pub username: String,
    pub per_page: u32,
    pub exclude_topics: Vec<String>,
}

impl Default for GithubSection {
    fn default() -> Self {
        Self {
            username: String::new(),
            per_page: 100,
            exclude_topics: vec!["major".to_string()],
        }
    }
}

/// Site-wide configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: String,
    pub site_url: String,
    pub description: String,
    #[serde(default)]
    pub github: GithubSection,
}

/// The complete portfolio document. Loaded once at startup and never
/// mutated during a session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub hero: Hero,
    pub major_projects: Vec<MajorProject>,
    pub side_missions: Vec<SideMission>,
    pub journey: Vec<JourneyEntry>,
    pub skills: Vec<String>,
    pub contact: Contact,
    pub config: SiteConfig,
}
