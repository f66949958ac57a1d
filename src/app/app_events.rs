use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::{App, Focus};
use crate::ask::AskField;
use crate::{ask, documents, upload};

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Expire due notifications and apply worker responses
    pub fn tick(&mut self, now: Instant) {
        let expired = self.notifications.expire_due(now);
        if expired > 0 {
            log::debug!("Expired {} notification(s)", expired);
        }
        self.poll_api_responses();
    }

    /// How long to wait for input: never past the next notification deadline
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.notifications.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(now)
                .min(EVENT_POLL_TIMEOUT),
            None => EVENT_POLL_TIMEOUT,
        }
    }

    /// Wait for one terminal event and apply it; call `tick` before each wait
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_paste_event(&mut self, text: String) {
        // Inputs are single-line apart from the question
        match self.focus {
            Focus::Upload => {
                self.upload.textarea.insert_str(text.replace(['\r', '\n'], ""));
            }
            Focus::Ask => {
                let text = if self.ask.field == AskField::DocumentId {
                    text.replace(['\r', '\n'], "")
                } else {
                    text
                };
                self.ask.active_input().insert_str(text);
            }
            Focus::Documents => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.documents.confirming.is_some() {
            documents::documents_events::handle_confirm_key(self, key);
            return;
        }

        if global::handle_global_keys(self, key) {
            return;
        }

        match self.focus {
            Focus::Upload => upload::upload_events::handle_upload_key(self, key),
            Focus::Documents => documents::documents_events::handle_documents_key(self, key),
            Focus::Ask => ask::ask_events::handle_ask_key(self, key),
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
