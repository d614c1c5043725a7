use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use iced::widget::image::Handle as ImageHandle;
use iced::{Element, Task, Theme};

use crate::adapters::BundledSampleImage;
use crate::core::interfaces::adapters::{
    ImageDimensionReader, ImageFilePicker, TextExtractionService,
};
use crate::core::models::{
    AcceptedImage, AppConfig, AspectRatioRule, ImageDimensions, SelectedImage, UploadFormState,
    UploadOutcome,
};
use crate::global_constants;
use crate::presentation::{app_theme, UploadFormMessage, UploadFormView};

pub type PendingImage = AcceptedImage<ImageHandle>;

pub struct UploadOrchestrator {
    form_state: UploadFormState<ImageHandle>,
    aspect_ratio_rule: AspectRatioRule,
    config: AppConfig,
    image_file_picker: Arc<dyn ImageFilePicker>,
    dimension_reader: Arc<dyn ImageDimensionReader>,
    text_extraction_service: Arc<dyn TextExtractionService>,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    Form(UploadFormMessage),
    ImagePicked(Option<SelectedImage>),
    ImagePickFailed(String),
    ImageDecoded(PendingImage, Result<ImageDimensions, String>),
    SubmissionComplete(Result<UploadOutcome, String>),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::Form(message) => write!(f, "Form({:?})", message),
            OrchestratorMessage::ImagePicked(Some(image)) => {
                write!(f, "ImagePicked({})", image.file_name)
            }
            OrchestratorMessage::ImagePicked(None) => write!(f, "ImagePicked(None)"),
            OrchestratorMessage::ImagePickFailed(e) => write!(f, "ImagePickFailed({})", e),
            OrchestratorMessage::ImageDecoded(pending, result) => {
                write!(f, "ImageDecoded({}, {:?})", pending.file.file_name, result)
            }
            OrchestratorMessage::SubmissionComplete(result) => {
                write!(f, "SubmissionComplete({:?})", result.is_ok())
            }
        }
    }
}

impl UploadOrchestrator {
    pub fn build(
        config: AppConfig,
        image_file_picker: Arc<dyn ImageFilePicker>,
        dimension_reader: Arc<dyn ImageDimensionReader>,
        text_extraction_service: Arc<dyn TextExtractionService>,
    ) -> Self {
        Self {
            form_state: UploadFormState::default(),
            aspect_ratio_rule: AspectRatioRule::default(),
            config,
            image_file_picker,
            dimension_reader,
            text_extraction_service,
        }
    }

    #[cfg(test)]
    pub fn form_state(&self) -> &UploadFormState<ImageHandle> {
        &self.form_state
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::Form(UploadFormMessage::PickImage) => self.handle_pick_image(),
            OrchestratorMessage::Form(UploadFormMessage::Analyze) => self.handle_send_to_backend(),
            OrchestratorMessage::Form(UploadFormMessage::OpenSampleImage) => {
                self.handle_open_sample_image()
            }
            OrchestratorMessage::ImagePicked(Some(image)) => self.handle_image_picked(image),
            OrchestratorMessage::ImagePicked(None) => Task::none(),
            OrchestratorMessage::ImagePickFailed(error) => {
                log::error!("[ORCHESTRATOR] Could not load picked file: {}", error);
                Task::none()
            }
            OrchestratorMessage::ImageDecoded(pending, result) => {
                self.handle_image_decoded(pending, result)
            }
            OrchestratorMessage::SubmissionComplete(result) => {
                self.handle_submission_complete(result)
            }
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        UploadFormView::render_ui(&self.form_state).map(OrchestratorMessage::Form)
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(&self.config.theme_mode)
    }

    fn handle_pick_image(&mut self) -> Task<OrchestratorMessage> {
        let picker = Arc::clone(&self.image_file_picker);
        Task::future(async move {
            match picker.pick_image().await {
                Ok(picked) => OrchestratorMessage::ImagePicked(picked),
                Err(e) => OrchestratorMessage::ImagePickFailed(format!("{:#}", e)),
            }
        })
    }

    fn handle_image_picked(&mut self, image: SelectedImage) -> Task<OrchestratorMessage> {
        self.form_state.begin_intake();

        let contents = image.contents.clone();
        let pending = AcceptedImage::new(ImageHandle::from_bytes(contents.clone()), image);
        let reader = Arc::clone(&self.dimension_reader);

        Task::future(Self::decode_pending_image(reader, pending, contents))
    }

    async fn decode_pending_image(
        reader: Arc<dyn ImageDimensionReader>,
        pending: PendingImage,
        contents: Vec<u8>,
    ) -> OrchestratorMessage {
        let result = reader.read_dimensions(contents).await.map_err(|e| {
            log::error!(
                "[ORCHESTRATOR] Failed to decode {}: {:#}",
                pending.file.file_name,
                e
            );
            format!("{:#}", e)
        });
        OrchestratorMessage::ImageDecoded(pending, result)
    }

    fn handle_image_decoded(
        &mut self,
        pending: PendingImage,
        result: Result<ImageDimensions, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(dimensions) => {
                self.form_state
                    .complete_intake(pending, dimensions, &self.aspect_ratio_rule);
            }
            Err(_) => self.form_state.fail_intake(pending),
        }
        Task::none()
    }

    fn handle_send_to_backend(&mut self) -> Task<OrchestratorMessage> {
        let Some(image) = self.form_state.begin_submission() else {
            log::debug!("[ORCHESTRATOR] No accepted image, ignoring submission");
            return Task::none();
        };

        let service = Arc::clone(&self.text_extraction_service);
        Task::future(Self::submit_image(service, image))
    }

    async fn submit_image(
        service: Arc<dyn TextExtractionService>,
        image: SelectedImage,
    ) -> OrchestratorMessage {
        match service.submit_image(&image).await {
            Ok(outcome) => OrchestratorMessage::SubmissionComplete(Ok(outcome)),
            Err(e) => {
                log::error!("[ORCHESTRATOR] Submission failed: {:#}", e);
                OrchestratorMessage::SubmissionComplete(Err(format!("{:#}", e)))
            }
        }
    }

    fn handle_submission_complete(
        &mut self,
        result: Result<UploadOutcome, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(outcome) => self.form_state.apply_outcome(outcome),
            Err(_) => self.form_state.apply_unexpected_failure(),
        }
        Task::none()
    }

    fn handle_open_sample_image(&mut self) -> Task<OrchestratorMessage> {
        let bundle_dir = std::env::temp_dir().join(global_constants::APPLICATION_CONFIG_DIR);

        let opened = self.sample_image_target(&bundle_dir).and_then(|target| {
            log::info!("[ORCHESTRATOR] Opening sample image {:?}", target);
            open::that(&target).map_err(anyhow::Error::from)
        });

        if let Err(e) = opened {
            log::error!("[ORCHESTRATOR] Failed to open sample image: {:#}", e);
        }
        Task::none()
    }

    /// The configured sample URL, or the bundled sample written under
    /// `bundle_dir`.
    fn sample_image_target(&self, bundle_dir: &Path) -> anyhow::Result<OsString> {
        match &self.config.sample_image_override {
            Some(url) => Ok(OsString::from(url)),
            None => BundledSampleImage::write_to_dir(bundle_dir).map(|path| path.into_os_string()),
        }
    }
}
