//! Default value functions for configuration.
//!
//! Each function is used as a `#[serde(default = "crate::defaults::...")]`
//! attribute on a `Config` field.

pub fn skill_catalog() -> Vec<String> {
    crate::catalog::default_catalog()
}

pub fn default_avatar_url() -> String {
    "https://images.unsplash.com/photo-1568602471122-7832951cc4c5?auto=format&fit=crop&w=300&q=80"
        .to_string()
}

pub fn submit_route() -> String {
    "/projects".to_string()
}

pub fn cancel_route() -> String {
    "/builder".to_string()
}

pub fn start_route() -> String {
    "/profile".to_string()
}

pub fn window_width() -> u32 {
    820
}

pub fn window_height() -> u32 {
    900
}

pub fn window_title() -> String {
    "Your Profile".to_string()
}
