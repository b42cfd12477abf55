//! Main Moji application using iced.

use std::sync::Arc;

use super::style;
use super::theme::MojiTheme;
use crate::clipboard::{self, ClipboardSink};
use crate::config::Config;
use crate::core::{Confirm, Database, Picker};

use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, text, text_input, Row};
use iced::window;
use iced::{application, Color, Element, Length, Subscription, Task, Theme};

/// Edge length of a result slot, in logical pixels.
const SLOT_SIZE: f32 = 30.0;

/// The picker window state.
pub struct MojiApp {
    picker: Picker,
    sink: Box<dyn ClipboardSink>,
    theme: MojiTheme,
    opacity: f32,
    input_id: text_input::Id,
}

/// Messages that the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SelectNext,
    SelectPrevious,
    Confirm,
    Close,
}

impl MojiApp {
    /// Create the picker over an already loaded database.
    pub fn new(config: Config, database: Arc<Database>) -> (Self, Task<Message>) {
        let app = Self {
            picker: Picker::new(database),
            sink: clipboard::sink_from_config(&config.clipboard),
            theme: MojiTheme::by_name(&config.appearance.theme),
            opacity: config.appearance.opacity as f32,
            input_id: text_input::Id::unique(),
        };

        // Focus the input on startup
        let task = text_input::focus(app.input_id.clone());

        (app, task)
    }

    /// Update the application state based on a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.picker.set_query(query);
                Task::none()
            }

            Message::SelectNext => {
                self.picker.select_next();
                Task::none()
            }

            Message::SelectPrevious => {
                self.picker.select_previous();
                Task::none()
            }

            Message::Confirm => {
                if let Confirm::Copied(symbol) = self.picker.confirm(self.sink.as_ref()) {
                    tracing::info!(%symbol, "Picked");
                }
                Task::done(Message::Close)
            }

            Message::Close => window::get_latest().and_then(window::close),
        }
    }

    /// Create the view for the application.
    pub fn view(&self) -> Element<'_, Message> {
        let search_input = text_input("", self.picker.query())
            .id(self.input_id.clone())
            .on_input(Message::QueryChanged)
            .padding(4)
            .size(14)
            .style(|_, status| {
                style::search_input(&self.theme, status == text_input::Status::Focused)
            });

        let content = column![search_input, self.build_slots()]
            .spacing(15)
            .padding(10);

        container(content)
            .style(|_| style::main_container(&self.theme, self.opacity))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Clear to transparent so the container's opacity reaches the desktop.
    pub fn style(&self, _theme: &Theme) -> application::Appearance {
        application::Appearance {
            background_color: Color::TRANSPARENT,
            text_color: self.theme.text,
        }
    }

    /// Keyboard navigation. Arrow keys are handled even when the search
    /// field has already used them to move its cursor.
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key.as_ref() {
                Key::Named(Named::ArrowRight) | Key::Named(Named::Tab) => {
                    Some(Message::SelectNext)
                }
                Key::Named(Named::ArrowLeft) => Some(Message::SelectPrevious),
                Key::Named(Named::Enter) => Some(Message::Confirm),
                Key::Named(Named::Escape) => Some(Message::Close),
                _ => None,
            },
            _ => None,
        })
    }

    // --- Private methods ---

    fn build_slots(&self) -> Element<'_, Message> {
        let selected = self.picker.selected();

        let slots: Vec<Element<'_, Message>> = self
            .picker
            .results()
            .iter()
            .enumerate()
            .map(|(idx, symbol)| {
                let is_selected = idx == selected;
                container(text(symbol.to_string()).size(18))
                    .center(SLOT_SIZE)
                    .style(move |_| style::result_box(&self.theme, is_selected))
                    .into()
            })
            .collect();

        Row::with_children(slots).spacing(5).into()
    }
}
