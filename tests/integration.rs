// SPDX-License-Identifier: MPL-2.0
use quadrant_survey::config::{self, Config};
use quadrant_survey::i18n::fluent::I18n;
use quadrant_survey::survey::{presets, Position, Session};
use quadrant_survey::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: None,
    };
    config::save_to_path(&initial_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: None,
    };
    config::save_to_path(&french_config, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config() {
    let config = Config {
        language: Some("fr".to_string()),
        theme_mode: None,
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn theme_mode_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        theme_mode: Some(ThemeMode::Light),
    };
    config::save_to_path(&config, &config_path).expect("Failed to save config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.theme_mode, Some(ThemeMode::Light));
}

#[test]
fn all_catalog_keys_are_translated_in_every_locale() {
    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        assert_eq!(i18n.current_locale().to_string(), locale);

        for question in quadrant_survey::survey::questions() {
            for key in [
                question.text,
                question.x_axis.start,
                question.x_axis.end,
                question.y_axis.start,
                question.y_axis.end,
            ] {
                assert!(
                    !i18n.tr(key).starts_with("MISSING:"),
                    "missing {key} in {locale}"
                );
            }
        }

        for preset in presets() {
            assert!(
                !i18n.tr(preset.name).starts_with("MISSING:"),
                "missing {} in {locale}",
                preset.name
            );
        }
    }
}

#[test]
fn answering_flow_across_a_full_survey_run() {
    let mut session = Session::new();

    // Question 1: drag an answer
    session.drag_start(Position::new(12.0, 88.0));
    session.drag_move(Position::new(20.0, 70.0));
    session.drag_end();
    assert_eq!(session.position(), Position::new(20.0, 70.0));

    // Question 2: answer via preset
    session.next();
    assert_eq!(session.position(), Position::CENTER);
    session.select_preset(&presets()[2]);
    assert_eq!(session.position(), Position::new(25.0, 35.0));

    // Walk forward through the remaining questions and wrap around
    for _ in 0..5 {
        session.next();
    }
    assert_eq!(session.question_index(), 0);
    assert_eq!(session.position(), Position::CENTER);

    // Stepping back wraps to the last question
    session.previous();
    assert_eq!(session.question_index(), session.question_count() - 1);
}
