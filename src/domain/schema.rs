use once_cell::sync::Lazy;
use serde::Serialize;

use crate::entities::{
    achievement::AchievementCategory, application::ApplicationStatus, blog_post::BlogStatus,
    contact::ContactSubject, event::EventStatus, faq::FaqCategory, gallery::GalleryCategory,
    project::ProjectStatus, resource::ResourceCategory,
};

/// Field classification for the admin record editor. Kinds describe how a
/// value is entered, not how it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    Url,
    Uuid,
    Date,
    DateTime,
    Bool,
    Int,
    StringList,
    Choice,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub read_only: bool,
    /// `(value, label)` pairs for `Choice` fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<&'static [(&'static str, &'static str)]>,
}

impl FieldDef {
    fn required(name: &'static str, kind: FieldKind) -> Self {
        FieldDef {
            name,
            kind,
            required: true,
            read_only: false,
            choices: None,
        }
    }

    fn optional(name: &'static str, kind: FieldKind) -> Self {
        FieldDef {
            name,
            kind,
            required: false,
            read_only: false,
            choices: None,
        }
    }

    fn choice(name: &'static str, choices: &'static [(&'static str, &'static str)]) -> Self {
        FieldDef {
            name,
            kind: FieldKind::Choice,
            required: false,
            read_only: false,
            choices: Some(choices),
        }
    }

    fn read_only(name: &'static str, kind: FieldKind) -> Self {
        FieldDef {
            name,
            kind,
            required: false,
            read_only: true,
            choices: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntitySchema {
    pub name: &'static str,
    pub plural: &'static str,
    pub fields: Vec<FieldDef>,
}

fn stamped(mut fields: Vec<FieldDef>) -> Vec<FieldDef> {
    let mut all = vec![FieldDef::read_only("id", FieldKind::Uuid)];
    all.append(&mut fields);
    all.push(FieldDef::read_only("created_at", FieldKind::DateTime));
    all.push(FieldDef::read_only("updated_at", FieldKind::DateTime));
    all
}

/// One schema entry per managed entity, in the order the admin UI lists
/// them. Built once and served verbatim by the schema endpoint.
pub static REGISTRY: Lazy<Vec<EntitySchema>> = Lazy::new(|| {
    vec![
        EntitySchema {
            name: "segment",
            plural: "segments",
            fields: stamped(vec![
                FieldDef::required("title", FieldKind::Text),
                FieldDef::required("description", FieldKind::LongText),
                FieldDef::optional("icon", FieldKind::Text),
                FieldDef::optional("photo", FieldKind::Text),
                FieldDef::optional("founded", FieldKind::Text),
                FieldDef::optional("activities", FieldKind::StringList),
                FieldDef::optional("vision", FieldKind::LongText),
                FieldDef::optional("mission", FieldKind::LongText),
                FieldDef::optional("achievements", FieldKind::StringList),
                FieldDef::optional("contact", FieldKind::Text),
            ]),
        },
        EntitySchema {
            name: "member",
            plural: "members",
            fields: stamped(vec![
                FieldDef::required("name", FieldKind::Text),
                FieldDef::required("role", FieldKind::Text),
                FieldDef::optional("position", FieldKind::Text),
                FieldDef::optional("email", FieldKind::Email),
                FieldDef::optional("bio", FieldKind::LongText),
                FieldDef::optional("photo", FieldKind::Text),
                FieldDef::optional("skills", FieldKind::StringList),
                FieldDef::optional("join_date", FieldKind::Date),
                FieldDef::optional("segment_id", FieldKind::Uuid),
                FieldDef::optional("display_order", FieldKind::Int),
            ]),
        },
        EntitySchema {
            name: "achievement",
            plural: "achievements",
            fields: stamped(vec![
                FieldDef::required("title", FieldKind::Text),
                FieldDef::required("date", FieldKind::DateTime),
                FieldDef::required("description", FieldKind::LongText),
                FieldDef::optional("image", FieldKind::Text),
                FieldDef::choice("category", AchievementCategory::choices()),
            ]),
        },
        EntitySchema {
            name: "gallery_photo",
            plural: "gallery_photos",
            fields: vec![
                FieldDef::read_only("id", FieldKind::Uuid),
                FieldDef::required("image", FieldKind::Text),
                FieldDef::optional("caption", FieldKind::Text),
                FieldDef::choice("category", GalleryCategory::choices()),
                FieldDef::read_only("uploaded_at", FieldKind::DateTime),
            ],
        },
        EntitySchema {
            name: "event",
            plural: "events",
            fields: stamped(vec![
                FieldDef::required("title", FieldKind::Text),
                FieldDef::required("description", FieldKind::LongText),
                FieldDef::required("date", FieldKind::DateTime),
                FieldDef::optional("location", FieldKind::Text),
                FieldDef::choice("status", EventStatus::choices()),
                FieldDef::optional("image", FieldKind::Text),
            ]),
        },
        EntitySchema {
            name: "blog_post",
            plural: "blog_posts",
            fields: stamped(vec![
                FieldDef::required("title", FieldKind::Text),
                FieldDef::optional("slug", FieldKind::Text),
                FieldDef::required("content", FieldKind::LongText),
                FieldDef::optional("excerpt", FieldKind::LongText),
                FieldDef::read_only("author_id", FieldKind::Uuid),
                FieldDef::choice("status", BlogStatus::choices()),
                FieldDef::optional("tags", FieldKind::Text),
                FieldDef::optional("featured_image", FieldKind::Text),
                FieldDef::optional("published_at", FieldKind::DateTime),
            ]),
        },
        EntitySchema {
            name: "faq",
            plural: "faqs",
            fields: vec![
                FieldDef::read_only("id", FieldKind::Uuid),
                FieldDef::required("question", FieldKind::Text),
                FieldDef::required("answer", FieldKind::LongText),
                FieldDef::choice("category", FaqCategory::choices()),
                FieldDef::optional("display_order", FieldKind::Int),
                FieldDef::optional("is_active", FieldKind::Bool),
            ],
        },
        EntitySchema {
            name: "project",
            plural: "projects",
            fields: stamped(vec![
                FieldDef::required("title", FieldKind::Text),
                FieldDef::required("description", FieldKind::LongText),
                FieldDef::optional("technologies", FieldKind::Text),
                FieldDef::optional("github_url", FieldKind::Url),
                FieldDef::optional("live_demo_url", FieldKind::Url),
                FieldDef::optional("image", FieldKind::Text),
                FieldDef::choice("status", ProjectStatus::choices()),
                FieldDef::optional("segment_id", FieldKind::Uuid),
                FieldDef::optional("team_member_ids", FieldKind::StringList),
                FieldDef::optional("start_date", FieldKind::Date),
                FieldDef::optional("completion_date", FieldKind::Date),
            ]),
        },
        EntitySchema {
            name: "resource",
            plural: "resources",
            fields: stamped(vec![
                FieldDef::required("title", FieldKind::Text),
                FieldDef::required("description", FieldKind::LongText),
                FieldDef::choice("category", ResourceCategory::choices()),
                FieldDef::optional("file", FieldKind::Text),
                FieldDef::optional("external_url", FieldKind::Url),
                FieldDef::optional("tags", FieldKind::Text),
                FieldDef::read_only("downloads", FieldKind::Int),
                FieldDef::optional("is_featured", FieldKind::Bool),
            ]),
        },
        EntitySchema {
            name: "contact_submission",
            plural: "contact_submissions",
            fields: vec![
                FieldDef::read_only("id", FieldKind::Uuid),
                FieldDef::read_only("name", FieldKind::Text),
                FieldDef::read_only("email", FieldKind::Email),
                FieldDef::choice("subject", ContactSubject::choices()),
                FieldDef::read_only("message", FieldKind::LongText),
                FieldDef::optional("is_read", FieldKind::Bool),
                FieldDef::optional("admin_notes", FieldKind::LongText),
                FieldDef::read_only("created_at", FieldKind::DateTime),
            ],
        },
        EntitySchema {
            name: "newsletter_subscriber",
            plural: "newsletter_subscribers",
            fields: vec![
                FieldDef::read_only("id", FieldKind::Uuid),
                FieldDef::read_only("email", FieldKind::Email),
                FieldDef::read_only("subscribed_at", FieldKind::DateTime),
                FieldDef::optional("is_active", FieldKind::Bool),
            ],
        },
        EntitySchema {
            name: "membership_application",
            plural: "membership_applications",
            fields: vec![
                FieldDef::read_only("id", FieldKind::Uuid),
                FieldDef::read_only("full_name", FieldKind::Text),
                FieldDef::read_only("email", FieldKind::Email),
                FieldDef::read_only("phone", FieldKind::Text),
                FieldDef::read_only("student_id", FieldKind::Text),
                FieldDef::read_only("department", FieldKind::Text),
                FieldDef::read_only("year_of_study", FieldKind::Text),
                FieldDef::read_only("interested_segment_id", FieldKind::Uuid),
                FieldDef::read_only("programming_languages", FieldKind::Text),
                FieldDef::read_only("experience_level", FieldKind::Text),
                FieldDef::read_only("motivation", FieldKind::LongText),
                FieldDef::read_only("expectations", FieldKind::LongText),
                FieldDef::choice("status", ApplicationStatus::choices()),
                FieldDef::read_only("submitted_at", FieldKind::DateTime),
                FieldDef::read_only("reviewed_by", FieldKind::Uuid),
                FieldDef::optional("review_notes", FieldKind::LongText),
                FieldDef::read_only("reviewed_at", FieldKind::DateTime),
            ],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_entity_once() {
        let mut names: Vec<&str> = REGISTRY.iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
        assert_eq!(REGISTRY.len(), 12);
    }

    #[test]
    fn choice_fields_carry_their_choices() {
        for entry in REGISTRY.iter() {
            for field in &entry.fields {
                if field.kind == FieldKind::Choice {
                    assert!(
                        field.choices.is_some_and(|choices| !choices.is_empty()),
                        "{}.{} has no choices",
                        entry.name,
                        field.name
                    );
                }
            }
        }
    }

    #[test]
    fn stamped_fields_wrap_ids_and_timestamps() {
        let fields = stamped(vec![FieldDef::required("title", FieldKind::Text)]);
        assert_eq!(fields[0].name, "id");
        assert!(fields[0].read_only);
        assert_eq!(fields.last().map(|f| f.name), Some("updated_at"));
    }
}
