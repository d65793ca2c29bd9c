//! egui rendering for the profile form.

use super::{ProfileFormAction, ProfileFormScreen};
use crate::avatar;
use crate::dialog::DialogSize;
use crate::validation::{FormField, ValidationErrors};
use showcase_config::{SocialPlatform, UserProfile};

/// Side length of the avatar on the form
const AVATAR_SIZE: f32 = 128.0;

/// Side length of the avatar inside the picture dialog
const DIALOG_AVATAR_SIZE: f32 = 192.0;

/// Width of single-line inputs
const INPUT_WIDTH: f32 = 300.0;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);
const SECTION_COLOR: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);

/// Buttons inside the picture dialog
enum PictureAction {
    Upload,
    Remove,
}

impl ProfileFormScreen {
    /// Render the form and the picture dialog.
    ///
    /// Submit and cancel are reported to the caller, which owns the store and
    /// the navigator.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ProfileFormAction {
        if self.poll_avatar_upload() {
            ui.ctx().request_repaint();
        }
        if self.is_avatar_pending() {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(50));
        }

        let mut action = ProfileFormAction::None;

        ui.heading(egui::RichText::new("Your Profile").color(SECTION_COLOR));
        ui.add_space(8.0);

        // === Name / title / picture ===
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                text_field(
                    ui,
                    &mut self.draft,
                    &self.errors,
                    FormField::Name,
                    "Name",
                    "Your full name",
                );
                text_field(
                    ui,
                    &mut self.draft,
                    &self.errors,
                    FormField::Title,
                    "Professional Title",
                    "e.g. Full Stack Developer",
                );
            });
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Profile Picture").strong());
                let texture = self.avatar_texture(ui.ctx());
                let response = avatar_widget(ui, texture, &self.draft.name, AVATAR_SIZE)
                    .on_hover_text("Change profile picture");
                if response.clicked() {
                    self.open_picture_dialog();
                }
                if self.is_avatar_pending() {
                    ui.spinner();
                }
                if let Some(err) = &self.avatar_error {
                    ui.colored_label(ERROR_COLOR, err);
                }
            });
        });

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Bio").strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.draft.bio)
                .id_salt("profile_bio")
                .hint_text(
                    "Tell us about yourself, your experience, and what you're passionate about",
                )
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                text_field(
                    ui,
                    &mut self.draft,
                    &self.errors,
                    FormField::Location,
                    "Location",
                    "City, Country",
                );
            });
            ui.vertical(|ui| {
                text_field(
                    ui,
                    &mut self.draft,
                    &self.errors,
                    FormField::Email,
                    "Email",
                    "your.email@example.com",
                );
            });
        });

        // === Social profiles ===
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Social Profiles (optional)")
                .size(16.0)
                .color(SECTION_COLOR),
        );
        egui::Grid::new("profile_social_grid")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for (i, platform) in SocialPlatform::all().iter().enumerate() {
                    ui.vertical(|ui| {
                        text_field(
                            ui,
                            &mut self.draft,
                            &self.errors,
                            FormField::for_platform(*platform),
                            platform.label(),
                            platform.placeholder(),
                        );
                    });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        // === Skills ===
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Skills & Technologies")
                .size(16.0)
                .color(SECTION_COLOR),
        );
        if let Some(next) = self
            .skills
            .show(ui, &self.catalog, &self.draft.skills, None)
        {
            self.set_skills(next);
        }

        // === Actions ===
        ui.add_space(16.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Save & Continue").clicked() {
                action = ProfileFormAction::Submit;
            }
            if ui.button("Cancel").clicked() {
                action = ProfileFormAction::Cancel;
            }
        });

        self.render_picture_dialog(ui.ctx());
        action
    }

    /// Render the picture dialog and act on its buttons and close requests
    fn render_picture_dialog(&mut self, ctx: &egui::Context) {
        let texture = if self.picture_dialog_open {
            self.avatar_texture(ctx)
        } else {
            None
        };
        let name = self.draft.name.clone();

        let response = self.picture_dialog.show(
            ctx,
            self.picture_dialog_open,
            Some("Profile Picture"),
            DialogSize::Medium,
            |ui| {
                let mut clicked = None;
                ui.vertical_centered(|ui| {
                    avatar_widget(ui, texture, &name, DIALOG_AVATAR_SIZE);
                    ui.add_space(12.0);
                    let width = ui.available_width();
                    if ui
                        .add_sized([width, 32.0], egui::Button::new("Upload New Picture"))
                        .clicked()
                    {
                        clicked = Some(PictureAction::Upload);
                    }
                    if ui
                        .add_sized([width, 32.0], egui::Button::new("Remove Picture"))
                        .clicked()
                    {
                        clicked = Some(PictureAction::Remove);
                    }
                });
                clicked
            },
        );

        match response.inner.flatten() {
            Some(PictureAction::Upload) => self.upload_avatar_from_picker(),
            Some(PictureAction::Remove) => self.remove_avatar(),
            None if response.close_requested => self.close_picture_dialog(),
            None => {}
        }
    }

    /// Texture for the current avatar, decoding it on first use
    fn avatar_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        let url = self.avatar_url().to_string();
        if let Some((key, texture)) = &self.avatar_texture
            && *key == url
        {
            return texture.as_ref().map(|t| t.id());
        }

        let texture = avatar::decode_data_url(&url)
            .and_then(|bytes| avatar::to_color_image(&bytes))
            .map(|image| ctx.load_texture("profile_avatar", image, egui::TextureOptions::LINEAR));
        let id = texture.as_ref().map(|t| t.id());
        self.avatar_texture = Some((url, texture));
        id
    }
}

/// Labelled single-line input with its inline validation message
fn text_field(
    ui: &mut egui::Ui,
    draft: &mut UserProfile,
    errors: &ValidationErrors,
    field: FormField,
    label: &str,
    hint: &str,
) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());
        if field.is_required() {
            ui.colored_label(ERROR_COLOR, "*");
        }
    });
    ui.add(
        egui::TextEdit::singleline(field.get_mut(draft))
            .id_salt(field.name())
            .hint_text(hint)
            .desired_width(INPUT_WIDTH),
    );
    if let Some(message) = errors.get(field) {
        ui.colored_label(ERROR_COLOR, message);
    }
    ui.add_space(4.0);
}

/// Round avatar: the decoded picture, or initials on a filled circle
fn avatar_widget(
    ui: &mut egui::Ui,
    texture: Option<egui::TextureId>,
    name: &str,
    size: f32,
) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    match texture {
        Some(id) => {
            egui::Image::new(egui::load::SizedTexture::new(id, rect.size()))
                .corner_radius(size / 2.0)
                .paint_at(ui, rect);
        }
        None => {
            painter.circle_filled(rect.center(), size / 2.0, egui::Color32::from_gray(70));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                initials(name),
                egui::FontId::proportional(size / 3.0),
                egui::Color32::from_gray(220),
            );
        }
    }

    if response.hovered() {
        painter.circle_filled(
            rect.center(),
            size / 2.0,
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 100),
        );
    }
    response
}

/// Up to two initials from a display name, "?" when blank
fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_hub::EventHub;
    use crate::scroll_lock::ScrollLock;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace brewster hopper"), "GB");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn test_form_renders_headless() {
        let ctx = egui::Context::default();
        let mut screen = ProfileFormScreen::new(
            None,
            vec!["Rust".into()],
            EventHub::new(),
            ScrollLock::new(),
        );
        screen.open_picture_dialog();

        let mut action = ProfileFormAction::None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = screen.show(ui);
            });
        });

        assert_eq!(action, ProfileFormAction::None);
        assert!(screen.is_picture_dialog_open());
    }
}
