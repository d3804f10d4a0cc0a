// SPDX-License-Identifier: MPL-2.0
use iced_reel::catalog::{Catalog, VideoId};
use iced_reel::config::{self, Config};
use iced_reel::i18n::fluent::I18n;
use iced_reel::playlist::Playlist;
use std::io::Write;
use tempfile::tempdir;

const SAMPLE_CATALOG: &str = r#"
[[videos]]
id = "intro"
title = "Introduction"
thumbnail = "thumbs/intro.png"
source = "media/intro.mp4"
duration_secs = 42.0

[[videos]]
id = "outro"
title = "Outro"
thumbnail = "thumbs/outro.png"
source = "media/outro.mp4"
duration_secs = 17.5
"#;

#[test]
fn test_catalog_drives_playlist_navigation() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let catalog_path = dir.path().join("catalog.toml");
    std::fs::File::create(&catalog_path)
        .expect("Failed to create catalog file")
        .write_all(SAMPLE_CATALOG.as_bytes())
        .expect("Failed to write catalog file");

    let catalog = Catalog::load_from_path(&catalog_path).expect("Failed to load catalog");
    assert_eq!(catalog.len(), 2);

    let mut playlist = Playlist::new(catalog);
    assert_eq!(playlist.current().unwrap().id.as_str(), "intro");
    assert!(playlist.has_next());
    assert!(!playlist.has_previous());

    assert_eq!(playlist.next().unwrap().id.as_str(), "outro");
    assert!(playlist.next().is_none());

    assert_eq!(
        playlist.select(&VideoId("intro".into())).unwrap().title,
        "Introduction"
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        autoplay: Some(false),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        autoplay: Some(false),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}
