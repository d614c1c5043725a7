use super::{AcceptedImage, AspectRatioRule, DisplayHandleSlot, ImageDimensions, SelectedImage, UploadOutcome};
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeDecision {
    Accepted,
    Rejected,
}

/// What the result pane shows once a submission has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPane<'a> {
    Error(&'a str),
    Text(&'a str),
}

/// The whole state of the upload form. `H` is the display handle type.
pub struct UploadFormState<H> {
    current_image: DisplayHandleSlot<H>,
    validation_error: Option<String>,
    response_text: Option<String>,
    response_error: Option<String>,
}

impl<H> Default for UploadFormState<H> {
    fn default() -> Self {
        Self {
            current_image: DisplayHandleSlot::default(),
            validation_error: None,
            response_text: None,
            response_error: None,
        }
    }
}

impl<H> UploadFormState<H> {
    pub fn displayed_image(&self) -> Option<&H> {
        self.current_image.current().map(|image| &image.handle)
    }

    pub fn accepted_file(&self) -> Option<&SelectedImage> {
        self.current_image.current().map(|image| &image.file)
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn response_text(&self) -> Option<&str> {
        self.response_text.as_deref()
    }

    pub fn response_error(&self) -> Option<&str> {
        self.response_error.as_deref()
    }

    /// An empty response text counts as no result, so the form falls back
    /// to the upload layout.
    pub fn has_result(&self) -> bool {
        self.response_text
            .as_deref()
            .is_some_and(|text| !text.is_empty())
    }

    pub fn result_pane(&self) -> Option<ResultPane<'_>> {
        if let Some(error) = self.response_error.as_deref() {
            return Some(ResultPane::Error(error));
        }
        self.response_text.as_deref().map(ResultPane::Text)
    }

    /// Called as soon as a file is picked, before its dimensions are known.
    pub fn begin_intake(&mut self) {
        if self.current_image.release() {
            log::debug!("[INTAKE] released previous image ahead of new selection");
        }
    }

    pub fn complete_intake(
        &mut self,
        candidate: AcceptedImage<H>,
        dimensions: ImageDimensions,
        rule: &AspectRatioRule,
    ) -> IntakeDecision {
        if rule.accepts(dimensions) {
            log::info!(
                "[INTAKE] accepted {} ({}x{})",
                candidate.file.file_name,
                dimensions.width,
                dimensions.height
            );
            self.current_image.replace(candidate);
            self.validation_error = None;
            return IntakeDecision::Accepted;
        }

        log::info!(
            "[INTAKE] rejected {} ({}x{}), ratio outside {} +/- {}",
            candidate.file.file_name,
            dimensions.width,
            dimensions.height,
            rule.target_ratio,
            rule.tolerance
        );
        self.validation_error = Some(global_constants::MESSAGE_WRONG_ASPECT_RATIO.to_string());
        self.current_image.release();
        drop(candidate);
        IntakeDecision::Rejected
    }

    pub fn fail_intake(&mut self, candidate: AcceptedImage<H>) {
        log::warn!("[INTAKE] could not decode {}", candidate.file.file_name);
        self.validation_error = Some(global_constants::MESSAGE_UNREADABLE_IMAGE.to_string());
        self.current_image.release();
        drop(candidate);
    }

    /// Returns the file to send, or `None` (leaving state untouched) when no
    /// image is accepted.
    pub fn begin_submission(&mut self) -> Option<SelectedImage> {
        let file = self.accepted_file()?.clone();
        self.response_error = None;
        self.response_text = Some(global_constants::STATUS_PROCESSING.to_string());
        Some(file)
    }

    pub fn apply_outcome(&mut self, outcome: UploadOutcome) {
        match outcome {
            UploadOutcome::Success { text } => {
                self.response_text = Some(text);
                self.response_error = None;
            }
            UploadOutcome::Failure { message } => {
                self.response_error = Some(message);
                self.response_text = Some(global_constants::STATUS_ERROR.to_string());
            }
        }
    }

    pub fn apply_unexpected_failure(&mut self) {
        self.response_text = Some(global_constants::STATUS_ERROR.to_string());
        self.response_error = Some(global_constants::MESSAGE_UNEXPECTED_ERROR.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::super::display_handle::test_support::CountingHandle;
    use super::*;

    fn file(name: &str) -> SelectedImage {
        SelectedImage::build_from_file(name.to_string(), vec![1, 2, 3, 4])
    }

    fn accept(state: &mut UploadFormState<CountingHandle>, label: &'static str) {
        let (handle, _) = CountingHandle::new(label);
        state.begin_intake();
        state.complete_intake(
            AcceptedImage::new(handle, file(label)),
            ImageDimensions::new(800, 600),
            &AspectRatioRule::default(),
        );
    }

    #[test]
    fn test_valid_image_is_stored_with_its_file() {
        let mut state = UploadFormState::default();
        let (handle, _) = CountingHandle::new("licence");

        state.begin_intake();
        let decision = state.complete_intake(
            AcceptedImage::new(handle, file("licence.jpg")),
            ImageDimensions::new(800, 600),
            &AspectRatioRule::default(),
        );

        assert_eq!(decision, IntakeDecision::Accepted);
        assert_eq!(state.displayed_image().map(|h| h.label), Some("licence"));
        assert_eq!(state.accepted_file().map(|f| f.file_name.as_str()), Some("licence.jpg"));
        assert_eq!(state.validation_error(), None);
    }

    #[test]
    fn test_wrong_ratio_is_rejected_and_temporary_handle_released() {
        let mut state = UploadFormState::default();
        let (handle, releases) = CountingHandle::new("wide");

        state.begin_intake();
        let decision = state.complete_intake(
            AcceptedImage::new(handle, file("wide.png")),
            ImageDimensions::new(1920, 1080),
            &AspectRatioRule::default(),
        );

        assert_eq!(decision, IntakeDecision::Rejected);
        assert_eq!(
            state.validation_error(),
            Some("Please upload an image with a 4:3 ratio.")
        );
        assert!(state.displayed_image().is_none());
        assert!(state.accepted_file().is_none());
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rejection_after_valid_image_clears_stored_pair() {
        let mut state = UploadFormState::default();
        let (first, first_releases) = CountingHandle::new("first");
        state.begin_intake();
        state.complete_intake(
            AcceptedImage::new(first, file("first.png")),
            ImageDimensions::new(800, 600),
            &AspectRatioRule::default(),
        );

        let (second, _) = CountingHandle::new("second");
        state.begin_intake();
        state.complete_intake(
            AcceptedImage::new(second, file("second.png")),
            ImageDimensions::new(1000, 1000),
            &AspectRatioRule::default(),
        );

        assert!(state.accepted_file().is_none());
        assert_eq!(first_releases.load(Ordering::SeqCst), 1);
        assert!(state.begin_submission().is_none());
        assert_eq!(state.response_text(), None);
    }

    #[test]
    fn test_second_valid_image_releases_first_exactly_once() {
        let mut state = UploadFormState::default();
        let (first, first_releases) = CountingHandle::new("first");
        let (second, second_releases) = CountingHandle::new("second");
        let rule = AspectRatioRule::default();

        state.begin_intake();
        state.complete_intake(
            AcceptedImage::new(first, file("first.png")),
            ImageDimensions::new(800, 600),
            &rule,
        );
        state.begin_intake();
        assert_eq!(first_releases.load(Ordering::SeqCst), 1);

        state.complete_intake(
            AcceptedImage::new(second, file("second.png")),
            ImageDimensions::new(1024, 768),
            &rule,
        );

        assert_eq!(first_releases.load(Ordering::SeqCst), 1);
        assert_eq!(second_releases.load(Ordering::SeqCst), 0);
        assert_eq!(state.displayed_image().map(|h| h.label), Some("second"));
        assert_eq!(state.accepted_file().map(|f| f.file_name.as_str()), Some("second.png"));
    }

    #[test]
    fn test_reselecting_same_valid_file_yields_same_state() {
        let mut state = UploadFormState::default();
        let rule = AspectRatioRule::default();

        state.begin_intake();
        state.complete_intake(
            AcceptedImage::new(CountingHandle::new("wide").0, file("wide.png")),
            ImageDimensions::new(1920, 1080),
            &rule,
        );
        assert!(state.validation_error().is_some());

        for _ in 0..2 {
            state.begin_intake();
            let decision = state.complete_intake(
                AcceptedImage::new(CountingHandle::new("same").0, file("same.png")),
                ImageDimensions::new(800, 600),
                &rule,
            );

            assert_eq!(decision, IntakeDecision::Accepted);
            assert_eq!(state.validation_error(), None);
            assert_eq!(state.accepted_file().map(|f| f.file_name.as_str()), Some("same.png"));
        }
    }

    #[test]
    fn test_decode_failure_sets_error_and_releases_candidate() {
        let mut state = UploadFormState::default();
        let (handle, releases) = CountingHandle::new("corrupt");

        state.begin_intake();
        state.fail_intake(AcceptedImage::new(handle, file("corrupt.jpg")));

        assert_eq!(state.validation_error(), Some("Could not read the selected image."));
        assert!(state.accepted_file().is_none());
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_submission_without_file_changes_nothing() {
        let mut state: UploadFormState<CountingHandle> = UploadFormState::default();

        assert!(state.begin_submission().is_none());
        assert_eq!(state.response_text(), None);
        assert_eq!(state.response_error(), None);
        assert!(!state.has_result());
    }

    #[test]
    fn test_submission_shows_processing_and_clears_previous_error() {
        let mut state = UploadFormState::default();
        accept(&mut state, "licence");
        state.apply_unexpected_failure();

        let file = state.begin_submission();

        assert_eq!(file.map(|f| f.file_name), Some("licence".to_string()));
        assert_eq!(state.response_text(), Some("Processing..."));
        assert_eq!(state.response_error(), None);
        assert!(state.has_result());
    }

    #[test]
    fn test_success_outcome_shows_text_verbatim() {
        let mut state = UploadFormState::default();
        accept(&mut state, "licence");
        state.begin_submission();

        state.apply_outcome(UploadOutcome::Success {
            text: "ABC123".to_string(),
        });

        assert_eq!(state.result_pane(), Some(ResultPane::Text("ABC123")));
        assert_eq!(state.response_error(), None);
    }

    #[test]
    fn test_failure_outcome_shows_backend_message() {
        let mut state = UploadFormState::default();
        accept(&mut state, "licence");
        state.begin_submission();

        state.apply_outcome(UploadOutcome::Failure {
            message: "bad image".to_string(),
        });

        assert_eq!(state.response_text(), Some("Error"));
        assert_eq!(state.result_pane(), Some(ResultPane::Error("bad image")));
    }

    #[test]
    fn test_unexpected_failure_shows_generic_message() {
        let mut state = UploadFormState::default();
        accept(&mut state, "licence");
        state.begin_submission();

        state.apply_unexpected_failure();

        assert_eq!(state.response_text(), Some("Error"));
        assert_eq!(
            state.result_pane(),
            Some(ResultPane::Error("An unexpected error occurred."))
        );
    }

    #[test]
    fn test_validation_error_does_not_touch_submission_state() {
        let mut state = UploadFormState::default();
        accept(&mut state, "licence");
        state.begin_submission();
        state.apply_outcome(UploadOutcome::Success {
            text: "ABC123".to_string(),
        });

        state.begin_intake();
        state.complete_intake(
            AcceptedImage::new(CountingHandle::new("wide").0, file("wide.png")),
            ImageDimensions::new(1920, 1080),
            &AspectRatioRule::default(),
        );

        assert_eq!(state.response_text(), Some("ABC123"));
        assert_eq!(state.response_error(), None);
        assert!(state.validation_error().is_some());
    }

    #[test]
    fn test_empty_success_text_returns_to_upload_layout() {
        let mut state = UploadFormState::default();
        accept(&mut state, "licence");
        state.begin_submission();

        state.apply_outcome(UploadOutcome::Success {
            text: String::new(),
        });

        assert!(!state.has_result());
    }
}
