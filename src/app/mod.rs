// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the survey board and the
//! settings screen.
//!
//! The `App` struct wires together the board, localization, and persisted
//! preferences, and translates messages into side effects like config
//! persistence or locale switching. Policy decisions (window sizing,
//! persistence format) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use iced::{window, Element, Task, Theme};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::board;
use crate::ui::settings;
use crate::ui::theming::{ColorScheme, ThemeMode};

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 500;
pub const MIN_WINDOW_HEIGHT: u32 = 680;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    board: board::State,
    theme_mode: ThemeMode,
    /// Resolved colors for the current theme mode, recomputed on change.
    scheme: ColorScheme,
}

impl Default for App {
    fn default() -> Self {
        let theme_mode = ThemeMode::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Survey,
            board: board::State::new(),
            theme_mode,
            scheme: theme_mode.scheme(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.theme_mode.unwrap_or_default();

        let app = App {
            i18n,
            theme_mode,
            scheme: theme_mode.scheme(),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(board_message) => {
                self.board.update(board_message);
            }
            Message::SwitchScreen(target) => {
                self.screen = target;
            }
            Message::Settings(settings_message) => match settings_message {
                settings::Message::LanguageSelected(locale) => {
                    self.i18n.set_locale(locale);
                    self.save_config();
                }
                settings::Message::ThemeModeSelected(mode) => {
                    self.theme_mode = mode;
                    self.scheme = mode.scheme();
                    self.save_config();
                }
                settings::Message::Back => {
                    self.screen = Screen::Survey;
                }
            },
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Persists the current preferences. Failures are reported on stderr
    /// rather than interrupting the survey.
    fn save_config(&self) {
        let config = config::Config {
            language: Some(self.i18n.current_locale().to_string()),
            theme_mode: Some(self.theme_mode),
        };
        if let Err(error) = config::save(&config) {
            eprintln!("Failed to save config: {:?}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::Position;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    fn default_app_starts_on_survey_screen() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Survey);
        assert_eq!(app.board.session().question_index(), 0);
    }

    #[test]
    fn board_messages_are_forwarded() {
        let mut app = App::default();
        let _ = app.update(Message::Board(board::Message::DragStarted(Position::new(
            20.0, 80.0,
        ))));
        assert!(app.board.session().is_dragging());
    }

    #[test]
    fn switch_screen_changes_active_screen() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Settings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Settings(settings::Message::Back));
        assert_eq!(app.screen, Screen::Survey);
    }

    #[test]
    fn theme_selection_updates_scheme() {
        with_temp_config_dir(|_| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                ThemeMode::Light,
            )));
            assert_eq!(app.theme_mode, ThemeMode::Light);
            assert!(app.scheme.surface_primary.r > 0.9);
        });
    }

    #[test]
    fn theme_selection_writes_config_under_config_home() {
        with_temp_config_dir(|config_home| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                ThemeMode::Dark,
            )));

            let path = config_home.join("QuadrantSurvey").join("settings.toml");
            let contents = std::fs::read_to_string(path).expect("config file written");
            assert!(contents.contains("dark"));
        });
    }

    #[test]
    fn language_selection_writes_config_under_config_home() {
        with_temp_config_dir(|config_home| {
            let mut app = App::default();
            let locale: unic_langid::LanguageIdentifier =
                "fr".parse().expect("valid language identifier");
            let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
                locale,
            )));

            let path = config_home.join("QuadrantSurvey").join("settings.toml");
            let contents = std::fs::read_to_string(path).expect("config file written");
            assert!(contents.contains("fr"));
        });
    }

    #[test]
    fn view_builds_for_each_screen() {
        let mut app = App::default();
        let _ = app.view();
        let _ = app.update(Message::SwitchScreen(Screen::Settings));
        let _ = app.view();
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert!(!app.title().starts_with("MISSING:"));
    }
}
