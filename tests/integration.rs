// SPDX-License-Identifier: MPL-2.0
//! End-to-end state machine tests: the upload → style → generate flow, the
//! one-shot catalog extension, and configuration-driven localization.

use iced_atelier::catalog::{source::bundled_extra_styles, StyleOption};
use iced_atelier::error::Error;
use iced_atelier::generate::GeneratedImage;
use iced_atelier::i18n::fluent::I18n;
use iced_atelier::media::Photo;
use iced_atelier::ui::studio::{Event, Message, State};
use iced_atelier::app::config::{self, Config};
use tempfile::tempdir;

fn sample_photo() -> Photo {
    Photo {
        file_name: "sunset.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![7; 64],
    }
}

fn sample_result() -> GeneratedImage {
    GeneratedImage {
        mime_type: "image/jpeg".to_string(),
        bytes: vec![42; 32],
    }
}

#[test]
fn full_flow_from_photo_to_result() {
    let mut state = State::new();

    // Nothing selected: submit is a validation error, no request emitted.
    let event = state.update(Message::Generate);
    assert!(matches!(event, Event::None));
    assert_eq!(state.error(), Some(&Error::Validation));

    // Pick photo and style.
    state.set_photo(sample_photo());
    state.update(Message::StyleSelected("Cartoon".to_string()));
    assert!(state.error().is_none());

    // Submit: exactly one request, in-flight flag set.
    let event = state.update(Message::Generate);
    let Event::GenerateRequested { photo, style } = event else {
        panic!("expected a generate request");
    };
    assert_eq!(photo.file_name, "sunset.png");
    assert_eq!(style, "Cartoon");
    assert!(state.is_generating());

    // Completion installs the displayable result.
    state.finish_generation(Ok(sample_result()));
    assert!(state.result().is_some());
    assert!(!state.is_generating());

    // A new style selection clears the previous result before the next run.
    state.update(Message::StyleSelected("Anime".to_string()));
    assert!(state.result().is_none());
    assert!(state.error().is_none());
}

#[test]
fn empty_model_response_surfaces_and_clears_result() {
    let mut state = State::new();
    state.set_photo(sample_photo());
    state.update(Message::StyleSelected("Sketch".to_string()));
    state.update(Message::Generate);

    state.finish_generation(Err(Error::EmptyResult));

    assert!(state.result().is_none());
    assert_eq!(state.error(), Some(&Error::EmptyResult));
    assert_eq!(state.error().unwrap().i18n_key(), "error-generate-empty");

    // The user may immediately retry.
    let event = state.update(Message::Generate);
    assert!(matches!(event, Event::GenerateRequested { .. }));
}

#[test]
fn catalog_grows_from_eleven_to_twenty_once() {
    let mut state = State::new();
    assert_eq!(state.catalog().len(), 11);

    let event = state.update(Message::LoadMoreStyles);
    assert!(matches!(event, Event::FetchExtraStylesRequested));

    let added = state.apply_extra_styles(Ok(bundled_extra_styles()));
    assert_eq!(added.len(), 9);
    assert_eq!(state.catalog().len(), 20);
    assert!(!state.catalog().can_load_more());

    // Further load-more clicks are inert.
    let event = state.update(Message::LoadMoreStyles);
    assert!(matches!(event, Event::None));
    assert_eq!(state.catalog().len(), 20);
}

#[test]
fn duplicate_style_names_are_filtered_on_merge() {
    let mut state = State::new();
    state.update(Message::LoadMoreStyles);

    let added = state.apply_extra_styles(Ok(vec![
        StyleOption::unillustrated("Cartoon"),
        StyleOption::unillustrated("Van Gogh"),
        StyleOption::unillustrated("Vaporwave"),
    ]));

    assert_eq!(added.len(), 1);
    assert_eq!(state.catalog().len(), 12);
    assert!(state.catalog().contains("Vaporwave"));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("generate-button"), "Generate Artwork");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("generate-button"), "Générer l'œuvre");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn every_error_variant_resolves_to_a_translation() {
    let i18n = I18n::default();
    let errors = [
        Error::Validation,
        Error::MediaAccess(iced_atelier::error::MediaAccessError::PermissionDenied),
        Error::MediaAccess(iced_atelier::error::MediaAccessError::DeviceUnavailable),
        Error::MediaAccess(iced_atelier::error::MediaAccessError::CaptureFailed(
            "x".to_string(),
        )),
        Error::Network("x".to_string()),
        Error::EmptyResult,
        Error::Decode("x".to_string()),
        Error::Io("x".to_string()),
        Error::Config("x".to_string()),
    ];

    for error in errors {
        let message = i18n.tr(error.i18n_key());
        assert!(
            !message.starts_with("MISSING:"),
            "no translation for {:?} ({})",
            error,
            error.i18n_key()
        );
    }
}
