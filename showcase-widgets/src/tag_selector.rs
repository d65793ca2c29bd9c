//! Multi-select tag picker with filter-as-you-type and free-form entries.
//!
//! The selection is owned by the caller. Every mutating operation returns the
//! full proposed selection instead of touching caller state; the widget only
//! keeps the transient search text, the dropdown flag and the rectangle it
//! covered on the previous frame (used for outside-click detection).

/// What the dropdown shows for the current search text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropdown<'a> {
    /// Catalog entries matching the search, in catalog order
    Suggestions(Vec<&'a str>),
    /// The search matched nothing; the user may add it as a custom tag
    NoMatches { search: String },
    /// Nothing left to suggest and no search text
    NoOptions,
}

/// Tag picker state
#[derive(Debug, Clone)]
pub struct TagSelector {
    /// Stable egui id salt
    id_salt: String,
    /// Hint shown while nothing is selected
    placeholder: String,
    /// Current search text
    search_text: String,
    /// Whether the dropdown is showing
    is_open: bool,
    /// Area covered by the widget on the last frame
    rect: Option<egui::Rect>,
}

impl TagSelector {
    /// Create a tag selector; `id_salt` must be unique within the window
    pub fn new(id_salt: impl Into<String>) -> Self {
        Self {
            id_salt: id_salt.into(),
            placeholder: "Select options".to_string(),
            search_text: String::new(),
            is_open: false,
            rect: None,
        }
    }

    /// Set the hint shown while the selection is empty
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Current search text
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Replace the search text; the selection is never affected
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Whether the dropdown is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The search field gained focus
    pub fn focus(&mut self) {
        self.is_open = true;
    }

    /// Record the area the widget covers, for outside-click detection
    pub fn set_rect(&mut self, rect: egui::Rect) {
        self.rect = Some(rect);
    }

    /// A pointer went down at `pos`; closes the dropdown when outside the widget.
    ///
    /// Before the first frame there is no known extent and nothing happens.
    pub fn pointer_down(&mut self, pos: egui::Pos2) {
        if let Some(rect) = self.rect
            && !rect.contains(pos)
            && self.is_open
        {
            log::trace!("TagSelector '{}': outside click closes dropdown", self.id_salt);
            self.is_open = false;
        }
    }

    // =========================================================================
    // Selection proposals
    // =========================================================================

    /// Propose `selection` with `option` appended and clear the search text.
    ///
    /// Returns `None` when `option` is already selected.
    pub fn select(&mut self, selection: &[String], option: &str) -> Option<Vec<String>> {
        if selection.iter().any(|s| s == option) {
            return None;
        }
        let mut next = selection.to_vec();
        next.push(option.to_string());
        self.search_text.clear();
        Some(next)
    }

    /// Propose `selection` without any occurrence of `tag`
    pub fn remove(&self, selection: &[String], tag: &str) -> Vec<String> {
        selection.iter().filter(|s| *s != tag).cloned().collect()
    }

    /// Propose `selection` plus the trimmed search text as a custom tag.
    ///
    /// No-op (returns `None`) when the trimmed text is empty or already
    /// present in the catalog or selection. The comparison is case-sensitive,
    /// so "react" is accepted next to a catalog "React".
    pub fn add_custom(&mut self, catalog: &[String], selection: &[String]) -> Option<Vec<String>> {
        let candidate = self.search_text.trim();
        if candidate.is_empty()
            || catalog.iter().any(|c| c == candidate)
            || selection.iter().any(|s| s == candidate)
        {
            return None;
        }

        let mut next = selection.to_vec();
        next.push(candidate.to_string());
        log::debug!("TagSelector '{}': added custom tag '{}'", self.id_salt, candidate);
        self.search_text.clear();
        Some(next)
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Catalog entries not yet selected whose text contains the search text
    /// (case-insensitive), in catalog order
    pub fn suggestions<'a>(&self, catalog: &'a [String], selection: &[String]) -> Vec<&'a str> {
        let needle = self.search_text.to_lowercase();
        catalog
            .iter()
            .filter(|option| !selection.contains(*option))
            .filter(|option| option.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Dropdown content for the current state
    pub fn dropdown<'a>(&self, catalog: &'a [String], selection: &[String]) -> Dropdown<'a> {
        let suggestions = self.suggestions(catalog, selection);
        if !suggestions.is_empty() {
            Dropdown::Suggestions(suggestions)
        } else if !self.search_text.is_empty() {
            Dropdown::NoMatches {
                search: self.search_text.clone(),
            }
        } else {
            Dropdown::NoOptions
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the picker and return the proposed selection if the user changed it
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        catalog: &[String],
        selection: &[String],
        error: Option<&str>,
    ) -> Option<Vec<String>> {
        // Outside-click test runs against last frame's extent
        if let Some(pos) = ui.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        }) {
            self.pointer_down(pos);
        }

        let mut proposed: Option<Vec<String>> = None;

        let response = ui
            .vertical(|ui| {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal_wrapped(|ui| {
                        for tag in selection {
                            egui::Frame::new()
                                .fill(egui::Color32::from_rgb(30, 58, 95))
                                .inner_margin(egui::Margin::symmetric(8, 2))
                                .corner_radius(10.0)
                                .show(ui, |ui| {
                                    ui.horizontal(|ui| {
                                        ui.label(
                                            egui::RichText::new(tag)
                                                .color(egui::Color32::from_rgb(147, 197, 253)),
                                        );
                                        if ui
                                            .add(egui::Button::new("×").frame(false).small())
                                            .on_hover_text(format!("Remove {tag}"))
                                            .clicked()
                                        {
                                            proposed = Some(self.remove(selection, tag));
                                        }
                                    });
                                });
                        }

                        let hint = if selection.is_empty() {
                            self.placeholder.clone()
                        } else {
                            String::new()
                        };
                        let edit = ui.add(
                            egui::TextEdit::singleline(&mut self.search_text)
                                .id_salt(&self.id_salt)
                                .hint_text(hint)
                                .desired_width(180.0),
                        );
                        if edit.gained_focus() {
                            self.focus();
                        }
                        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            if let Some(next) = self.add_custom(catalog, selection) {
                                proposed = Some(next);
                            }
                            edit.request_focus();
                        }
                    });
                });

                if let Some(error) = error {
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
                }

                if self.is_open {
                    self.render_dropdown(ui, catalog, selection, &mut proposed);
                }
            })
            .response;

        self.rect = Some(response.rect);
        proposed
    }

    /// Render the dropdown list below the field
    fn render_dropdown(
        &mut self,
        ui: &mut egui::Ui,
        catalog: &[String],
        selection: &[String],
        proposed: &mut Option<Vec<String>>,
    ) {
        egui::Frame::popup(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            match self.dropdown(catalog, selection) {
                Dropdown::Suggestions(options) => {
                    egui::ScrollArea::vertical()
                        .id_salt(format!("{}_dropdown", self.id_salt))
                        .max_height(200.0)
                        .show(ui, |ui| {
                            for option in options {
                                if ui.selectable_label(false, option).clicked()
                                    && let Some(next) = self.select(selection, option)
                                {
                                    *proposed = Some(next);
                                }
                            }
                        });
                }
                Dropdown::NoMatches { search } => {
                    ui.weak("No matches found");
                    if ui.link(format!("Add \"{search}\"")).clicked()
                        && let Some(next) = self.add_custom(catalog, selection)
                    {
                        *proposed = Some(next);
                    }
                }
                Dropdown::NoOptions => {
                    ui.weak("No options available");
                }
            }
        });
    }
}
