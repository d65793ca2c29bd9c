//! In-process page router.
//!
//! Keeps the current route string. `/profile` shows the profile form; every
//! other route shows a read-only summary of the stored profile.

use showcase_config::{SocialPlatform, UserProfile};
use showcase_widgets::Navigator;

/// Route that hosts the profile form
pub const PROFILE_ROUTE: &str = "/profile";

/// Which page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    ProfileForm,
    Summary,
}

/// Current route plus the routes visited before it
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    history: Vec<String>,
    /// Set by `navigate`, cleared by `take_changed`
    changed: bool,
}

impl Router {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
            history: Vec::new(),
            changed: false,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Previously visited routes, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn page(&self) -> Page {
        if self.current == PROFILE_ROUTE {
            Page::ProfileForm
        } else {
            Page::Summary
        }
    }

    /// Whether the route changed since the last call
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: &str) {
        if route == self.current {
            return;
        }
        log::info!("Route: {} -> {}", self.current, route);
        let previous = std::mem::replace(&mut self.current, route.to_string());
        self.history.push(previous);
        self.changed = true;
    }
}

/// Read-only view of the stored profile shown outside the form.
///
/// Returns true when the user asked to edit the profile.
pub fn show_summary(ui: &mut egui::Ui, route: &str, profile: Option<&UserProfile>) -> bool {
    let mut edit = false;

    ui.horizontal(|ui| {
        ui.heading(route);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Edit Profile").clicked() {
                edit = true;
            }
        });
    });
    ui.separator();

    let Some(profile) = profile else {
        ui.label("No profile yet.");
        return edit;
    };

    ui.label(egui::RichText::new(&profile.name).size(20.0).strong());
    if !profile.title.is_empty() {
        ui.label(&profile.title);
    }
    if !profile.location.is_empty() {
        ui.weak(&profile.location);
    }
    if !profile.bio.is_empty() {
        ui.add_space(6.0);
        ui.label(&profile.bio);
    }

    if !profile.skills.is_empty() {
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for skill in &profile.skills {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(30, 58, 95))
                    .inner_margin(egui::Margin::symmetric(8, 2))
                    .corner_radius(10.0)
                    .show(ui, |ui| ui.label(skill));
            }
        });
    }

    let linked = profile.linked_platforms();
    if !linked.is_empty() {
        ui.add_space(6.0);
        egui::Grid::new("summary_social_grid")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for platform in linked {
                    ui.label(platform.label());
                    social_value(ui, platform, profile.social(platform));
                    ui.end_row();
                }
            });
    }

    if !profile.projects.is_empty() {
        ui.add_space(6.0);
        ui.label(format!("{} project(s)", profile.projects.len()));
    }

    edit
}

fn social_value(ui: &mut egui::Ui, platform: SocialPlatform, value: &str) {
    let is_url = value.starts_with("http://") || value.starts_with("https://");
    if is_url {
        ui.hyperlink(value);
    } else {
        ui.label(value)
            .on_hover_text(format!("{} handle", platform.label()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_records_history() {
        let mut router = Router::new(PROFILE_ROUTE);
        assert_eq!(router.page(), Page::ProfileForm);

        router.navigate("/projects");
        assert_eq!(router.current(), "/projects");
        assert_eq!(router.page(), Page::Summary);
        assert_eq!(router.history(), [PROFILE_ROUTE.to_string()]);
        assert!(router.take_changed());
        assert!(!router.take_changed());
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut router = Router::new("/builder");
        router.navigate("/builder");
        assert!(router.history().is_empty());
        assert!(!router.take_changed());
    }
}
