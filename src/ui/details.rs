/// Filter details listing and the download button
use iced::widget::{button, column, text};
use iced::Element;

use crate::filter::ParamDescription;
use crate::Message;

pub fn details<'a>(description: &ParamDescription, download_name: &str) -> Element<'a, Message> {
    column![
        text("Filter details").size(24),
        text(description.to_string()).size(16),
        text("Download").size(24),
        button("Download filtered image")
            .on_press(Message::Download)
            .padding(10),
        text(format!("Saves as {}", download_name)).size(14),
    ]
    .spacing(12)
    .into()
}
