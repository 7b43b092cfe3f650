mod tests {
    use crate::{
        providers::{
            fs::{
                roster_reader::FileSystemRosterReader, roster_writer::FileSystemRosterWriter,
                settings_reader::FileSystemSettingsReader,
                settings_writer::FileSystemSettingsWriter,
            },
            roster_reader::RosterReader,
            roster_writer::RosterWriter,
            settings_reader::{load_settings, SettingsReader},
            settings_writer::SettingsWriter,
        },
        shapes::{roster::RosterEntry, settings::Settings},
        tests::fixtures::full_roster,
    };
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_base_path() -> PathBuf {
        std::env::temp_dir().join(format!("teams4all-test-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_roster_reads_empty() {
        let base = temp_base_path();
        let roster = FileSystemRosterReader::new(&base)
            .read()
            .await
            .expect("expected an empty roster");
        assert_eq!(roster, RosterEntry::default());
    }

    #[tokio::test]
    async fn saved_roster_reads_back() {
        let base = temp_base_path();
        let roster = full_roster();
        FileSystemRosterWriter::new(&base)
            .save(&roster)
            .await
            .expect("expected the roster to be saved");
        let loaded = FileSystemRosterReader::new(&base)
            .read()
            .await
            .expect("expected the roster");
        assert_eq!(loaded, roster);
        let _ = std::fs::remove_dir_all(&base);
    }

    #[tokio::test]
    async fn cleared_roster_reads_empty() {
        let base = temp_base_path();
        let writer = FileSystemRosterWriter::new(&base);
        writer
            .save(&full_roster())
            .await
            .expect("expected the roster to be saved");
        writer.clear().await.expect("expected the roster to be cleared");
        writer.clear().await.expect("clearing twice is fine");
        let loaded = FileSystemRosterReader::new(&base)
            .read()
            .await
            .expect("expected the roster");
        assert!(loaded.is_empty());
        let _ = std::fs::remove_dir_all(&base);
    }

    #[tokio::test]
    async fn corrupted_roster_is_an_error() {
        let base = temp_base_path();
        std::fs::create_dir_all(&base).expect("expected the directory");
        std::fs::write(base.join("roster.json"), "not json").expect("expected the file");
        assert!(FileSystemRosterReader::new(&base).read().await.is_err());
        let _ = std::fs::remove_dir_all(&base);
    }

    #[tokio::test]
    async fn settings_round_trip() {
        let base = temp_base_path();
        let reader = FileSystemSettingsReader::new(&base);
        assert_eq!(reader.read().await.ok(), Some(None));
        let settings = Settings {
            tick_interval_ms: 250,
            progress_step: 25,
            reveal_delay_ms: 1000,
        };
        FileSystemSettingsWriter::new(&base)
            .save(&settings)
            .await
            .expect("expected the settings to be saved");
        assert_eq!(reader.read().await.ok(), Some(Some(settings)));
        let _ = std::fs::remove_dir_all(&base);
    }

    #[tokio::test]
    async fn missing_settings_are_written_with_defaults() {
        let base = temp_base_path();
        let reader = FileSystemSettingsReader::new(&base);
        let settings = load_settings(&reader, &FileSystemSettingsWriter::new(&base)).await;
        assert_eq!(settings, Settings::default());
        assert_eq!(reader.read().await.ok(), Some(Some(Settings::default())));
        let _ = std::fs::remove_dir_all(&base);
    }

    #[tokio::test]
    async fn stored_settings_are_loaded_as_they_are() {
        let base = temp_base_path();
        std::fs::create_dir_all(&base).expect("expected the directory");
        std::fs::write(base.join("config.json"), r#"{"progress_step":10}"#)
            .expect("expected the file");
        let settings = load_settings(
            &FileSystemSettingsReader::new(&base),
            &FileSystemSettingsWriter::new(&base),
        )
        .await;
        assert_eq!(settings.progress_step, 10);
        assert_eq!(settings.tick_interval_ms, Settings::default().tick_interval_ms);
        let _ = std::fs::remove_dir_all(&base);
    }

    #[tokio::test]
    async fn malformed_settings_are_not_overwritten() {
        let base = temp_base_path();
        let content = r#"{"tick_interval_ms":"fast","progress_step":10}"#;
        std::fs::create_dir_all(&base).expect("expected the directory");
        std::fs::write(base.join("config.json"), content).expect("expected the file");
        let reader = FileSystemSettingsReader::new(&base);
        assert!(reader.read().await.is_err());
        let settings = load_settings(&reader, &FileSystemSettingsWriter::new(&base)).await;
        assert_eq!(settings, Settings::default());
        let on_disk =
            std::fs::read_to_string(base.join("config.json")).expect("expected the file");
        assert_eq!(on_disk, content);
        let _ = std::fs::remove_dir_all(&base);
    }
}
