use iced::widget::{button, column, container, image, row, scrollable, text, Column};
use iced::{Alignment, ContentFit, Element, Font, Length};

use super::app_theme;
use crate::core::models::{ResultPane, UploadFormState};
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormMessage {
    PickImage,
    Analyze,
    OpenSampleImage,
}

/// Stateless view over [`UploadFormState`]: the upload box until a result
/// exists, then image and result side by side.
pub struct UploadFormView;

impl UploadFormView {
    pub fn render_ui(state: &UploadFormState<image::Handle>) -> Element<'_, UploadFormMessage> {
        let header = container(text(global_constants::APPLICATION_NAME).size(24))
            .padding(8)
            .center_x(Length::Fill);

        let body = if state.has_result() {
            Self::render_result_layout(state)
        } else {
            Self::render_upload_layout(state)
        };

        let sample_link = button(text(global_constants::LABEL_SAMPLE_LINK).size(14))
            .style(app_theme::link_button_style)
            .on_press(UploadFormMessage::OpenSampleImage);

        column![
            header,
            container(body)
                .padding(12)
                .width(Length::Fill)
                .height(Length::Fill),
            container(sample_link).padding(16).center_x(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn render_upload_layout(state: &UploadFormState<image::Handle>) -> Element<'_, UploadFormMessage> {
        let box_content: Element<'_, UploadFormMessage> = match state.displayed_image() {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => button(
                column![
                    text(global_constants::LABEL_UPLOAD_IMAGE),
                    text(global_constants::LABEL_RATIO_HINT).size(13),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
            )
            .padding(8)
            .style(app_theme::upload_prompt_button_style)
            .on_press(UploadFormMessage::PickImage)
            .into(),
        };

        let upload_box = container(box_content)
            .width(global_constants::UPLOAD_BOX_WIDTH)
            .height(global_constants::UPLOAD_BOX_HEIGHT)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(app_theme::upload_box_style);

        let mut content = Column::new()
            .push(upload_box)
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        if let Some(error) = state.validation_error() {
            content = content.push(text(error).style(app_theme::error_text_style));
        }

        if state.displayed_image().is_some() {
            content = content.push(Self::analyze_button());
        }

        content.into()
    }

    fn render_result_layout(state: &UploadFormState<image::Handle>) -> Element<'_, UploadFormMessage> {
        let mut image_pane = Column::new().spacing(8).width(Length::FillPortion(1));

        if let Some(handle) = state.displayed_image() {
            image_pane = image_pane.push(
                image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill),
            );
        }

        if let Some(error) = state.validation_error() {
            image_pane = image_pane.push(text(error).style(app_theme::error_text_style));
        }

        let change_image_button = button(text(global_constants::LABEL_CHANGE_IMAGE))
            .padding(8)
            .style(app_theme::change_image_button_style)
            .on_press(UploadFormMessage::PickImage);

        let mut actions = row![change_image_button].spacing(12).align_y(Alignment::Center);
        if state.displayed_image().is_some() {
            actions = actions.push(Self::analyze_button());
        }
        image_pane = image_pane.push(container(actions).center_x(Length::Fill));

        let result_pane: Element<'_, UploadFormMessage> = match state.result_pane() {
            Some(ResultPane::Error(message)) => {
                text(message).style(app_theme::error_text_style).into()
            }
            Some(ResultPane::Text(extracted)) => scrollable(
                text(extracted).font(Font::MONOSPACE).width(Length::Fill),
            )
            .height(Length::Fill)
            .into(),
            None => text("").into(),
        };

        row![
            image_pane,
            container(result_pane)
                .padding(8)
                .width(Length::FillPortion(1))
                .height(Length::Fill),
        ]
        .spacing(16)
        .into()
    }

    fn analyze_button<'a>() -> Element<'a, UploadFormMessage> {
        button(text(global_constants::LABEL_ANALYZE))
            .padding([8, 16])
            .style(app_theme::analyze_button_style)
            .on_press(UploadFormMessage::Analyze)
            .into()
    }
}
