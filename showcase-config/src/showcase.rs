//! Showcase records: projects, their authors and comment threads.
//!
//! Field names serialize in camelCase so records exchanged with the web
//! front end (`longDescription`, `createdAt`, ...) load without mapping.

use serde::{Deserialize, Serialize};

/// The person credited for a project or comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    /// Image URL or data URL
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A published project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Cover image URL
    pub image: String,
    pub author: Author,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub views: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remixes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// One of [`crate::CATEGORIES`] when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_comment: Option<String>,
}

impl Project {
    /// Whether the project's category is one of the known categories
    pub fn has_known_category(&self) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| crate::CATEGORIES.contains(&c))
    }

    /// Tags and tech stack entries, de-duplicated, in first-seen order
    pub fn all_technologies(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let stack = self.tech_stack.iter().flatten();
        for tech in self.tags.iter().chain(stack) {
            if !seen.contains(&tech.as_str()) {
                seen.push(tech);
            }
        }
        seen
    }
}

/// A comment on a project, with optional nested replies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub date: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<Comment>>,
}

impl Comment {
    /// Number of comments in this thread, including this one
    pub fn thread_len(&self) -> usize {
        1 + self
            .replies
            .iter()
            .flatten()
            .map(Comment::thread_len)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(id: &str) -> Comment {
        Comment {
            id: id.to_string(),
            content: "nice".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_thread_len_counts_nested_replies() {
        let mut nested = reply("2");
        nested.replies = Some(vec![reply("3")]);
        let root = Comment {
            id: "1".to_string(),
            replies: Some(vec![nested, reply("4")]),
            ..Default::default()
        };
        assert_eq!(root.thread_len(), 4);
    }

    #[test]
    fn test_project_deserializes_camel_case() {
        let json = r#"{
            "id": "p1",
            "title": "Orbit",
            "description": "Space dashboard",
            "longDescription": "A longer story",
            "image": "https://example.com/orbit.png",
            "author": {"name": "Ada", "avatar": ""},
            "likes": 3,
            "comments": 1,
            "views": 10,
            "tags": ["Rust"],
            "techStack": ["Rust", "WebGPU"],
            "category": "Data Visualization",
            "createdAt": "2024-05-01"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.long_description.as_deref(), Some("A longer story"));
        assert!(project.has_known_category());
        assert_eq!(project.all_technologies(), vec!["Rust", "WebGPU"]);
    }

    #[test]
    fn test_unknown_category() {
        let project = Project {
            category: Some("Cooking".to_string()),
            ..Default::default()
        };
        assert!(!project.has_known_category());
    }
}
