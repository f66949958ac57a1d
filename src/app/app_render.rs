use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::ask;
use crate::documents;
use crate::notification::render_toasts;
use crate::theme;
use crate::upload::{self, upload_render::UPLOAD_PANE_HEIGHT};
use crate::widgets::help_line::{self, hints};

const TITLE: &str = " Smart Document Q&A Assistant";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let [header_area, upload_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(UPLOAD_PANE_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [documents_area, ask_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(body_area);

        render_header(frame, header_area);

        upload::upload_render::render_pane(
            &mut self.upload,
            frame,
            upload_area,
            self.focus == Focus::Upload,
            self.frame_count,
        );
        documents::documents_render::render_pane(
            &self.documents,
            frame,
            documents_area,
            self.focus == Focus::Documents,
            self.frame_count,
        );
        ask::ask_render::render_pane(
            &mut self.ask,
            frame,
            ask_area,
            self.focus == Focus::Ask,
            self.frame_count,
        );

        help_line::render_line(frame, help_area, &self.current_hints());

        if let Some(pending) = &self.documents.confirming {
            documents::documents_render::render_delete_popup(pending, frame);
        }

        // Toasts draw last so they sit above everything else
        render_toasts(frame, &self.toasts.items());
    }

    fn current_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.documents.confirming.is_some() {
            return hints!["y/Enter" => "Delete", "n/Esc" => "Cancel"];
        }

        match self.focus {
            Focus::Upload => hints![
                "Enter" => "Upload",
                "Esc" => "Clear",
                "Tab" => "Next pane",
                "Ctrl+R" => "Refresh",
                "Ctrl+C" => "Quit",
            ],
            Focus::Documents => hints![
                "\u{2191}\u{2193}/jk" => "Select",
                "Enter" => "Ask about",
                "d" => "Delete",
                "r" => "Refresh",
                "Tab" => "Next pane",
                "q" => "Quit",
            ],
            Focus::Ask if self.ask.is_asking() => hints![
                "Esc" => "Cancel question",
                "Tab" => "Next pane",
                "Ctrl+C" => "Quit",
            ],
            Focus::Ask => hints![
                "Enter" => "Ask",
                "\u{2191}\u{2193}" => "Switch field",
                "Ctrl+L" => "Reset",
                "Tab" => "Next pane",
                "Ctrl+C" => "Quit",
            ],
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(theme::palette::PURPLE)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
