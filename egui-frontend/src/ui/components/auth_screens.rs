//! # Auth Screens Module
//!
//! This module renders the login and registration screens shown before
//! a session exists.
//!
//! ## Key Functions:
//! - `render_login_screen()` - Identifier + password form
//! - `render_register_screen()` - New account form with role picker
//!
//! Both forms validate locally before spawning the network request and
//! surface backend errors inline.

use eframe::egui;
use shared::UserRole;

use crate::ui::app_state::SchedulerApp;
use crate::ui::components::theme::colors;
use crate::ui::state::Screen;

const FORM_WIDTH: f32 = 340.0;

impl SchedulerApp {
    /// Render the login screen
    pub fn render_login_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);

            ui.label(
                egui::RichText::new("Appointment Scheduler")
                    .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_HEADING),
            );
            ui.label(
                egui::RichText::new("Sign in to manage faculty appointments")
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_SECONDARY),
            );

            ui.add_space(30.0);

            ui.allocate_ui(egui::vec2(FORM_WIDTH, 0.0), |ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Email or username").strong());
                    ui.add(
                        egui::TextEdit::singleline(&mut self.auth.identifier)
                            .hint_text("you@example.edu")
                            .desired_width(FORM_WIDTH),
                    );

                    ui.add_space(10.0);

                    ui.label(egui::RichText::new("Password").strong());
                    let password_response = ui.add(
                        egui::TextEdit::singleline(&mut self.auth.password)
                            .password(true)
                            .desired_width(FORM_WIDTH),
                    );

                    let submitted = password_response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    ui.add_space(8.0);

                    if let Some(error) = &self.auth.error {
                        ui.colored_label(colors::DANGER, format!("❌ {}", error));
                    }
                    if let Some(info) = &self.auth.info {
                        ui.colored_label(colors::TEXT_SECONDARY, info);
                    }

                    ui.add_space(12.0);

                    let button_label = if self.auth.in_flight {
                        "Signing in..."
                    } else {
                        "Sign In"
                    };
                    let sign_in = egui::Button::new(
                        egui::RichText::new(button_label)
                            .color(colors::TEXT_WHITE)
                            .strong(),
                    )
                    .fill(colors::ACTIVE_BACKGROUND)
                    .rounding(egui::Rounding::same(8.0))
                    .min_size(egui::vec2(FORM_WIDTH, 40.0));

                    let clicked = ui.add_enabled(!self.auth.in_flight, sign_in).clicked();
                    if clicked || (submitted && !self.auth.in_flight) {
                        self.submit_login();
                    }

                    ui.add_space(15.0);

                    ui.horizontal(|ui| {
                        ui.label("No account yet?");
                        if ui.link("Create one").clicked() {
                            self.auth.error = None;
                            self.auth.info = None;
                            self.core.screen = Screen::Register;
                        }
                    });
                });
            });
        });
    }

    /// Render the registration screen
    pub fn render_register_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);

            ui.label(
                egui::RichText::new("Create Account")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_HEADING),
            );

            ui.add_space(25.0);

            ui.allocate_ui(egui::vec2(FORM_WIDTH, 0.0), |ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("First name").strong());
                    ui.add(
                        egui::TextEdit::singleline(&mut self.auth.register_first_name)
                            .desired_width(FORM_WIDTH),
                    );

                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Last name").strong());
                    ui.add(
                        egui::TextEdit::singleline(&mut self.auth.register_last_name)
                            .desired_width(FORM_WIDTH),
                    );

                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Email").strong());
                    ui.add(
                        egui::TextEdit::singleline(&mut self.auth.register_email)
                            .hint_text("you@example.edu")
                            .desired_width(FORM_WIDTH),
                    );

                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Role").strong());
                    egui::ComboBox::from_id_source("register_role")
                        .selected_text(self.auth.register_role.label())
                        .width(FORM_WIDTH)
                        .show_ui(ui, |ui| {
                            for role in [UserRole::Student, UserRole::Faculty, UserRole::Admin] {
                                ui.selectable_value(
                                    &mut self.auth.register_role,
                                    role,
                                    role.label(),
                                );
                            }
                        });

                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Password").strong());
                    ui.add(
                        egui::TextEdit::singleline(&mut self.auth.register_password)
                            .password(true)
                            .desired_width(FORM_WIDTH),
                    );

                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Confirm password").strong());
                    ui.add(
                        egui::TextEdit::singleline(&mut self.auth.register_confirm_password)
                            .password(true)
                            .desired_width(FORM_WIDTH),
                    );

                    ui.add_space(8.0);

                    if let Some(error) = &self.auth.error {
                        ui.colored_label(colors::DANGER, format!("❌ {}", error));
                    }

                    ui.add_space(12.0);

                    let button_label = if self.auth.in_flight {
                        "Creating account..."
                    } else {
                        "Create Account"
                    };
                    let create = egui::Button::new(
                        egui::RichText::new(button_label)
                            .color(colors::TEXT_WHITE)
                            .strong(),
                    )
                    .fill(colors::ACTIVE_BACKGROUND)
                    .rounding(egui::Rounding::same(8.0))
                    .min_size(egui::vec2(FORM_WIDTH, 40.0));

                    if ui.add_enabled(!self.auth.in_flight, create).clicked() {
                        self.submit_registration();
                    }

                    ui.add_space(15.0);

                    ui.horizontal(|ui| {
                        ui.label("Already have an account?");
                        if ui.link("Sign in").clicked() {
                            self.auth.error = None;
                            self.core.screen = Screen::Login;
                        }
                    });
                });
            });
        });
    }

    /// Validate and submit the login form
    fn submit_login(&mut self) {
        match self.auth.login_request() {
            Ok(request) => {
                self.auth.error = None;
                self.auth.info = None;
                self.auth.in_flight = true;
                self.fetcher.login(request);
            }
            Err(message) => {
                self.auth.error = Some(message);
            }
        }
    }

    /// Validate and submit the registration form
    fn submit_registration(&mut self) {
        match self.auth.register_request() {
            Ok(request) => {
                self.auth.error = None;
                self.auth.in_flight = true;
                self.fetcher.register(request);
            }
            Err(message) => {
                self.auth.error = Some(message);
            }
        }
    }
}
