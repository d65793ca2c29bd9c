//! The user profile record and the store that owns it.
//!
//! The profile form never owns the authoritative record: it reads the
//! current value from a [`ProfileStore`] when it is built and hands a full
//! replacement back on submit.

use crate::error::ConfigError;
use crate::showcase::Project;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A community member's public profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Professional title, e.g. "Full Stack Developer"
    pub title: String,
    pub bio: String,
    /// Image URL or `data:` URL; empty means "use the default avatar"
    pub avatar: String,
    pub location: String,
    pub email: String,
    pub website: String,
    pub github: String,
    /// X (formerly Twitter) profile
    pub twitter: String,
    pub telegram: String,
    pub slack: String,
    pub discord: String,
    pub linkedin: String,
    /// Skills in display order, no duplicates
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

impl UserProfile {
    /// Load a profile from a YAML (or JSON, which is valid YAML) file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut profile: UserProfile = serde_yaml_ng::from_str(&contents)?;
        let dropped = profile.dedup_skills();
        if dropped > 0 {
            log::warn!("Dropped {} duplicate skills from {:?}", dropped, path);
        }
        log::info!(
            "Loaded profile '{}' with {} skills from {:?}",
            profile.name,
            profile.skills.len(),
            path
        );
        Ok(profile)
    }

    /// Remove repeated skills, keeping the first occurrence of each.
    ///
    /// Returns the number of entries removed.
    pub fn dedup_skills(&mut self) -> usize {
        let before = self.skills.len();
        let mut seen: Vec<String> = Vec::with_capacity(before);
        self.skills.retain(|skill| {
            if seen.contains(skill) {
                false
            } else {
                seen.push(skill.clone());
                true
            }
        });
        before - self.skills.len()
    }

    /// Value of a social link field
    pub fn social(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Website => &self.website,
            SocialPlatform::GitHub => &self.github,
            SocialPlatform::X => &self.twitter,
            SocialPlatform::Telegram => &self.telegram,
            SocialPlatform::Slack => &self.slack,
            SocialPlatform::Discord => &self.discord,
            SocialPlatform::LinkedIn => &self.linkedin,
        }
    }

    /// Social platforms the user filled in, in display order
    pub fn linked_platforms(&self) -> Vec<SocialPlatform> {
        SocialPlatform::all()
            .iter()
            .copied()
            .filter(|p| !self.social(*p).trim().is_empty())
            .collect()
    }
}

/// Website and social-handle fields shown in the "Social Profiles" section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Website,
    GitHub,
    X,
    Telegram,
    Slack,
    Discord,
    LinkedIn,
}

impl SocialPlatform {
    /// All platforms in display order
    pub fn all() -> &'static [SocialPlatform] {
        &[
            SocialPlatform::Website,
            SocialPlatform::GitHub,
            SocialPlatform::X,
            SocialPlatform::Telegram,
            SocialPlatform::Slack,
            SocialPlatform::Discord,
            SocialPlatform::LinkedIn,
        ]
    }

    /// Field label
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Website => "Website",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::X => "X",
            SocialPlatform::Telegram => "Telegram",
            SocialPlatform::Slack => "Slack",
            SocialPlatform::Discord => "Discord",
            SocialPlatform::LinkedIn => "LinkedIn",
        }
    }

    /// Hint text shown in the empty field
    pub fn placeholder(&self) -> &'static str {
        match self {
            SocialPlatform::Website => "https://yourportfolio.com",
            SocialPlatform::GitHub => "https://github.com/yourusername",
            SocialPlatform::X => "https://twitter.com/yourusername",
            SocialPlatform::Telegram => "Telegram username",
            SocialPlatform::Slack => "Slack handle",
            SocialPlatform::Discord => "https://discord.com/users/yourusername",
            SocialPlatform::LinkedIn => "https://linkedin.com/in/yourusername",
        }
    }
}

/// Owner of the current profile record.
///
/// Reads return the current record; writes replace it wholesale.
pub trait ProfileStore {
    /// The current profile, if one has been created
    fn profile(&self) -> Option<&UserProfile>;

    /// Replace the stored profile
    fn update_profile(&mut self, profile: UserProfile);
}

/// Process-local profile store
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profile: Option<UserProfile>,
    /// Number of writes since creation
    revision: u64,
}

impl MemoryProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a profile
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
            revision: 0,
        }
    }

    /// Number of `update_profile` calls so far
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl ProfileStore for MemoryProfileStore {
    fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    fn update_profile(&mut self, profile: UserProfile) {
        log::info!(
            "Profile updated: name='{}' skills={} projects={}",
            profile.name,
            profile.skills.len(),
            profile.projects.len()
        );
        self.profile = Some(profile);
        self.revision += 1;
    }
}
