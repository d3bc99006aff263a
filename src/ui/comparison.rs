/// Preview widgets for the original and filtered rasters
use image::buffer::ConvertBuffer;
use image::RgbaImage;
use iced::widget::image::Handle;
use iced::widget::{column, image as preview, row, text};
use iced::{Element, Length};

use crate::state::data::Raster;
use crate::Message;

/// Upload an RGB raster as an RGBA texture handle
pub fn to_handle(raster: &Raster) -> Handle {
    let rgba: RgbaImage = raster.convert();
    Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw())
}

/// Only the upload, before any filter has been applied
pub fn original_only<'a>(original: &Handle) -> Element<'a, Message> {
    column![
        preview(original.clone()).width(Length::Fill),
        text("Original image (no filter applied yet)").size(14),
    ]
    .spacing(8)
    .into()
}

/// Original on the left, filtered on the right
pub fn side_by_side<'a>(
    original: &Handle,
    filtered: &Handle,
    spacing: u16,
) -> Element<'a, Message> {
    row![
        column![
            text("Original").size(20),
            preview(original.clone()).width(Length::Fill),
        ]
        .spacing(8)
        .width(Length::FillPortion(1)),
        column![
            text("Filtered").size(20),
            preview(filtered.clone()).width(Length::Fill),
        ]
        .spacing(8)
        .width(Length::FillPortion(1)),
    ]
    .spacing(spacing)
    .into()
}
