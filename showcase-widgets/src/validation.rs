//! Profile form fields and their validation rules.

use regex::Regex;
use showcase_config::{SocialPlatform, UserProfile};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Loose email shape check: something, `@`, something, `.`, something
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_RE is a valid static regex pattern")
});

/// Whether `email` looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Editable text fields of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Title,
    Bio,
    Location,
    Email,
    Website,
    Github,
    Twitter,
    Telegram,
    Slack,
    Discord,
    Linkedin,
}

impl FormField {
    /// All text fields in form order
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Title,
            FormField::Bio,
            FormField::Location,
            FormField::Email,
            FormField::Website,
            FormField::Github,
            FormField::Twitter,
            FormField::Telegram,
            FormField::Slack,
            FormField::Discord,
            FormField::Linkedin,
        ]
    }

    /// Field name as used in the profile record
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Title => "title",
            FormField::Bio => "bio",
            FormField::Location => "location",
            FormField::Email => "email",
            FormField::Website => "website",
            FormField::Github => "github",
            FormField::Twitter => "twitter",
            FormField::Telegram => "telegram",
            FormField::Slack => "slack",
            FormField::Discord => "discord",
            FormField::Linkedin => "linkedin",
        }
    }

    /// Look up a field by record name
    pub fn from_name(name: &str) -> Option<FormField> {
        FormField::all().iter().copied().find(|f| f.name() == name)
    }

    /// Whether the form refuses to submit while this field is blank
    pub fn is_required(&self) -> bool {
        matches!(self, FormField::Name | FormField::Title | FormField::Email)
    }

    /// The form field backing a social platform
    pub fn for_platform(platform: SocialPlatform) -> FormField {
        match platform {
            SocialPlatform::Website => FormField::Website,
            SocialPlatform::GitHub => FormField::Github,
            SocialPlatform::X => FormField::Twitter,
            SocialPlatform::Telegram => FormField::Telegram,
            SocialPlatform::Slack => FormField::Slack,
            SocialPlatform::Discord => FormField::Discord,
            SocialPlatform::LinkedIn => FormField::Linkedin,
        }
    }

    /// Read this field from a profile
    pub fn get<'a>(&self, profile: &'a UserProfile) -> &'a str {
        match self {
            FormField::Name => &profile.name,
            FormField::Title => &profile.title,
            FormField::Bio => &profile.bio,
            FormField::Location => &profile.location,
            FormField::Email => &profile.email,
            FormField::Website => &profile.website,
            FormField::Github => &profile.github,
            FormField::Twitter => &profile.twitter,
            FormField::Telegram => &profile.telegram,
            FormField::Slack => &profile.slack,
            FormField::Discord => &profile.discord,
            FormField::Linkedin => &profile.linkedin,
        }
    }

    /// Mutable access to this field of a profile
    pub fn get_mut<'a>(&self, profile: &'a mut UserProfile) -> &'a mut String {
        match self {
            FormField::Name => &mut profile.name,
            FormField::Title => &mut profile.title,
            FormField::Bio => &mut profile.bio,
            FormField::Location => &mut profile.location,
            FormField::Email => &mut profile.email,
            FormField::Website => &mut profile.website,
            FormField::Github => &mut profile.github,
            FormField::Twitter => &mut profile.twitter,
            FormField::Telegram => &mut profile.telegram,
            FormField::Slack => &mut profile.slack,
            FormField::Discord => &mut profile.discord,
            FormField::Linkedin => &mut profile.linkedin,
        }
    }
}

/// Field → message map produced by validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    /// No errors
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in form order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Errors keyed by record field name
    pub fn to_name_map(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(f, m)| (f.name(), m.clone()))
            .collect()
    }
}

/// Check the submit rules: name, title and email are required and the email
/// must look like an address. Bio is optional.
pub fn validate_profile(profile: &UserProfile) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if profile.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }
    if profile.title.trim().is_empty() {
        errors.insert(FormField::Title, "Title is required");
    }
    if profile.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !is_valid_email(&profile.email) {
        errors.insert(FormField::Email, "Email is invalid");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        for bad in ["foo", "foo@", "@bar.com", "foo@bar", "foo bar@baz"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
        for good in ["foo@bar.com", "a.b+c@example.co.uk"] {
            assert!(is_valid_email(good), "{good} should be accepted");
        }
    }

    #[test]
    fn test_empty_profile_reports_required_fields() {
        let errors = validate_profile(&UserProfile::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.get(FormField::Bio), None);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let profile = UserProfile {
            name: "   ".into(),
            title: "Dev".into(),
            email: "dev@example.com".into(),
            ..Default::default()
        };
        let errors = validate_profile(&profile);
        assert_eq!(
            errors.to_name_map().into_iter().collect::<Vec<_>>(),
            vec![("name", "Name is required".to_string())]
        );
    }

    #[test]
    fn test_malformed_email_message() {
        let profile = UserProfile {
            name: "Ada".into(),
            title: "Analyst".into(),
            email: "ada@".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_profile(&profile).get(FormField::Email),
            Some("Email is invalid")
        );
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FormField::all() {
            assert_eq!(FormField::from_name(field.name()), Some(*field));
        }
        assert_eq!(FormField::from_name("avatar"), None);
    }

    #[test]
    fn test_platform_fields_match_profile_accessors() {
        let profile = UserProfile {
            twitter: "https://twitter.com/ada".into(),
            ..Default::default()
        };
        for platform in SocialPlatform::all() {
            let field = FormField::for_platform(*platform);
            assert_eq!(field.get(&profile), profile.social(*platform));
        }
    }
}
