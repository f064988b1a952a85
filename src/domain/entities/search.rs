use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{
    achievement::Achievement, blog_post::BlogPost, event::Event, member::Member,
    project::Project, resource::Resource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCategory {
    All,
    Members,
    Events,
    Achievements,
    Blog,
    Projects,
    Resources,
}

impl SearchCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchCategory::All => "all",
            SearchCategory::Members => "members",
            SearchCategory::Events => "events",
            SearchCategory::Achievements => "achievements",
            SearchCategory::Blog => "blog",
            SearchCategory::Projects => "projects",
            SearchCategory::Resources => "resources",
        }
    }
}

impl FromStr for SearchCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchCategory::All),
            "members" => Ok(SearchCategory::Members),
            "events" => Ok(SearchCategory::Events),
            "achievements" => Ok(SearchCategory::Achievements),
            "blog" => Ok(SearchCategory::Blog),
            "projects" => Ok(SearchCategory::Projects),
            "resources" => Ok(SearchCategory::Resources),
            _ => Err(format!("unknown search category: {}", s)),
        }
    }
}

/// Per-category hit lists. A category that was not searched stays
/// `None` and is dropped from the JSON body.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub category: SearchCategory,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_posts: Option<Vec<BlogPost>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,

    pub total_results: usize,
}

impl SearchResults {
    pub fn empty(query: String, category: SearchCategory) -> Self {
        SearchResults {
            query,
            category,
            members: None,
            events: None,
            achievements: None,
            blog_posts: None,
            projects: None,
            resources: None,
            total_results: 0,
        }
    }

    /// Recompute `total_results` from whatever lists are present.
    pub fn finalize(mut self) -> Self {
        self.total_results = self.members.as_ref().map_or(0, Vec::len)
            + self.events.as_ref().map_or(0, Vec::len)
            + self.achievements.as_ref().map_or(0, Vec::len)
            + self.blog_posts.as_ref().map_or(0, Vec::len)
            + self.projects.as_ref().map_or(0, Vec::len)
            + self.resources.as_ref().map_or(0, Vec::len);
        self
    }
}
