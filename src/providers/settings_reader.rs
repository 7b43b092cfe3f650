use crate::{
    errors::AppError,
    logging::logger::{log_info, log_warning},
    providers::settings_writer::SettingsWriter,
    shapes::settings::Settings,
};
use async_trait::async_trait;

#[async_trait]
pub trait SettingsReader {
    /// Reads the stored settings; `None` when nothing has been stored yet.
    async fn read(&self) -> Result<Option<Settings>, AppError>;
}

/// Startup settings loading.
///
/// A missing file is created with the defaults so it can be tweaked by hand.
/// A file that cannot be read is left untouched and the defaults are used in
/// memory only.
pub async fn load_settings<SR, SW>(reader: &SR, writer: &SW) -> Settings
where
    SR: SettingsReader + Sync,
    SW: SettingsWriter + Sync,
{
    match reader.read().await {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            let defaults = Settings::default();
            match writer.save(&defaults).await {
                Ok(_) => log_info("default settings written"),
                Err(e) => {
                    log_warning(format!("could not write default settings: {}", e).as_str())
                }
            }
            defaults
        }
        Err(e) => {
            log_warning(format!("using default settings: {}", e).as_str());
            Settings::default()
        }
    }
}
