//! Route changes requested by widgets.

/// Something that can switch the current page
pub trait Navigator {
    /// Go to `route`, e.g. `/projects`
    fn navigate(&mut self, route: &str);
}

/// Navigator that only records the routes it was asked to open
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes requested so far, oldest first
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    /// Most recent route, if any
    pub fn last(&self) -> Option<&str> {
        self.routes.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: &str) {
        log::debug!("Navigate to {}", route);
        self.routes.push(route.to_string());
    }
}
