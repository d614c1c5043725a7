use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::{HttpTextExtractionService, ImageCrateDimensionReader, RfdImageFilePicker};
use crate::core::models::{AppConfig, UserSettings};
use crate::core::orchestrators::upload_orchestrator::{OrchestratorMessage, UploadOrchestrator};

pub struct DocxApp {
    orchestrator: UploadOrchestrator,
}

impl DocxApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });
        let config = AppConfig::from_environment(&settings);

        let orchestrator = UploadOrchestrator::build(
            config.clone(),
            Arc::new(RfdImageFilePicker::new()),
            Arc::new(ImageCrateDimensionReader::new()),
            Arc::new(HttpTextExtractionService::new(config.upload_url())),
        );

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> Theme {
        self.orchestrator.theme()
    }
}
