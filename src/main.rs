use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, pick_list, radio, row, scrollable, slider, text, Column,
};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod codec;
mod config;
mod error;
mod filter;
mod state;
mod ui;

use config::AppConfig;
use filter::{FilterFamily, FilterMethod, Intensity};
use state::controller::{Controller, RenderPlan, ViewState};
use state::data::SourceImage;

/// Main application state
struct ImageFilters {
    /// Source, selection and last result
    controller: Controller,
    /// Startup configuration
    config: AppConfig,
    /// Status message to display to the user
    status: String,
    /// Texture of the current upload
    original: Option<Handle>,
    /// Texture of the last filtered result
    filtered: Option<Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Upload Image"
    Upload,
    /// Background decode finished
    SourceLoaded(Result<SourceImage, String>),
    FamilySelected(FilterFamily),
    MethodSelected(FilterMethod),
    IntensityChanged(u8),
    /// User clicked "Apply Filter"
    ApplyFilter,
    /// User clicked "Download filtered image"
    Download,
    /// Background write finished
    Saved(Result<PathBuf, String>),
}

impl ImageFilters {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();
        let controller = Controller::new(config.initial_spec(), config.initial_intensity());

        log::info!("🎨 Image Filters initialized");

        (
            ImageFilters {
                controller,
                config,
                status: "Please upload an image to start.".to_string(),
                original: None,
                filtered: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload => {
                let file = FileDialog::new()
                    .set_title("Upload an image")
                    .add_filter("Images", &codec::SUPPORTED_EXTENSIONS)
                    .pick_file();

                if let Some(path) = file {
                    self.status = format!("Loading {}...", path.display());
                    return Task::perform(codec::loader::load_source(path), |result| {
                        Message::SourceLoaded(result.map_err(|e| e.to_string()))
                    });
                }

                Task::none()
            }
            Message::SourceLoaded(Ok(source)) => {
                let name = source.name.clone();
                let (width, height) = source.raster.dimensions();
                self.controller.load_source(source);

                // Re-picking the same file keeps the last result
                self.status = match self.controller.state() {
                    ViewState::NoResult => format!(
                        "Loaded {} ({}x{}). Choose a filter and click Apply Filter.",
                        name, width, height
                    ),
                    ViewState::HasResult => {
                        format!("Reloaded {} ({}x{}). Previous result kept.", name, width, height)
                    }
                };
                self.refresh_previews();
                Task::none()
            }
            Message::SourceLoaded(Err(reason)) => {
                self.controller.reject_source(&reason);
                self.status = format!("❌ {}", reason);
                Task::none()
            }
            Message::FamilySelected(family) => {
                self.controller.select_family(family);
                Task::none()
            }
            Message::MethodSelected(method) => {
                self.controller.select_method(method);
                Task::none()
            }
            Message::IntensityChanged(level) => {
                self.controller.set_intensity(level as i32);
                Task::none()
            }
            Message::ApplyFilter => {
                match self.controller.apply_filter() {
                    Ok(result) => {
                        self.status = format!(
                            "✅ Applied {} at intensity {}/{}",
                            result.spec.method(),
                            result.intensity,
                            Intensity::MAX
                        );
                        self.refresh_previews();
                    }
                    Err(e) => self.status = e.to_string(),
                }
                Task::none()
            }
            Message::Download => {
                let download = match self.controller.download() {
                    Ok(download) => download,
                    Err(e) => {
                        log::error!("Download failed: {}", e);
                        self.status = format!("❌ {}", e);
                        return Task::none();
                    }
                };

                let mut dialog = FileDialog::new()
                    .set_title("Save filtered image")
                    .set_file_name(&download.file_name)
                    .add_filter("PNG", &["png"]);
                if let Some(dir) = self.config.download_dir() {
                    dialog = dialog.set_directory(dir);
                }

                match dialog.save_file() {
                    Some(path) => Task::perform(
                        codec::export::save_png(download.bytes, path),
                        |result| Message::Saved(result.map_err(|e| e.to_string())),
                    ),
                    None => Task::none(),
                }
            }
            Message::Saved(Ok(path)) => {
                self.status = format!("💾 Saved {}", path.display());
                Task::none()
            }
            Message::Saved(Err(reason)) => {
                log::error!("Save failed: {}", reason);
                self.status = format!("❌ {}", reason);
                Task::none()
            }
        }
    }

    /// Rebuild preview textures after the source or the result changed
    fn refresh_previews(&mut self) {
        match self.controller.render_plan() {
            RenderPlan::AwaitingUpload => {
                self.original = None;
                self.filtered = None;
            }
            RenderPlan::OriginalOnly { original } => {
                self.original = Some(ui::comparison::to_handle(&original));
                self.filtered = None;
            }
            RenderPlan::Comparison { original, filtered, .. } => {
                self.original = Some(ui::comparison::to_handle(&original));
                self.filtered = Some(ui::comparison::to_handle(&filtered));
            }
        }
    }

    /// Build the filter settings panel
    fn controls(&self) -> Element<Message> {
        let spec = self.controller.spec();
        let intensity = self.controller.intensity().get();

        let families = FilterFamily::ALL.iter().fold(row![].spacing(20), |row, &family| {
            row.push(radio(
                family.label(),
                family,
                Some(spec.family()),
                Message::FamilySelected,
            ))
        });

        let method_label = match spec.family() {
            FilterFamily::Smoothing => "Smoothing method",
            FilterFamily::Sharpening => "Sharpening method",
        };

        column![
            text("Filter settings").size(28),
            text("Operation").size(16),
            families,
            text(method_label).size(16),
            pick_list(
                spec.family().methods(),
                Some(spec.method()),
                Message::MethodSelected,
            ),
            text(format!(
                "Intensity level (1 = lower effect, 10 = higher effect): {}",
                intensity
            ))
            .size(16),
            slider(Intensity::MIN..=Intensity::MAX, intensity, Message::IntensityChanged),
            button("Apply Filter")
                .on_press(Message::ApplyFilter)
                .padding(10),
        ]
        .spacing(12)
        .into()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content: Column<Message> = column![
            text("Image Sharpening & Smoothing").size(40),
            text(
                "Upload an image, choose smoothing or sharpening, \
                 set the intensity, then click Apply Filter."
            )
            .size(16),
            button("Upload Image")
                .on_press(Message::Upload)
                .padding(10),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Start);

        match self.controller.render_plan() {
            RenderPlan::AwaitingUpload => {}
            RenderPlan::OriginalOnly { .. } => {
                content = content.push(self.controls()).push(text("Result").size(28));
                if let Some(original) = &self.original {
                    content = content.push(ui::comparison::original_only(original));
                }
            }
            RenderPlan::Comparison { details, download_name, .. } => {
                content = content.push(self.controls()).push(text("Result").size(28));
                if let (Some(original), Some(filtered)) = (&self.original, &self.filtered) {
                    content = content.push(ui::comparison::side_by_side(
                        original,
                        filtered,
                        self.config.preview_spacing,
                    ));
                }
                content = content.push(ui::details::details(&details, &download_name));
            }
        }

        content = content.push(text(&self.status).size(16));

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// `[HH:MM:SS LEVEL file:line] message`, `info` unless RUST_LOG says otherwise
fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .filter_module("iced_wgpu", log::LevelFilter::Warn)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{} {style}{}{style:#} {}:{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> iced::Result {
    init_logger();

    iced::application(
        "Image Sharpening & Smoothing",
        ImageFilters::update,
        ImageFilters::view,
    )
    .theme(ImageFilters::theme)
    .centered()
    .run_with(ImageFilters::new)
}
