use std::sync::mpsc::{Receiver, Sender};

use crate::api::{ApiRequest, ApiResponse};
use crate::ask::AskState;
use crate::config::Config;
use crate::documents::DocumentListState;
use crate::notification::{Broadcaster, ToastStack};
use crate::upload::UploadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Upload,
    Documents,
    Ask,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Upload => Focus::Documents,
            Focus::Documents => Focus::Ask,
            Focus::Ask => Focus::Upload,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Upload => Focus::Ask,
            Focus::Documents => Focus::Upload,
            Focus::Ask => Focus::Documents,
        }
    }
}

pub struct App {
    pub focus: Focus,
    pub upload: UploadState,
    pub documents: DocumentListState,
    pub ask: AskState,
    pub notifications: Broadcaster,
    pub toasts: ToastStack,
    pub confirm_delete: bool,
    pub should_quit: bool,
    pub frame_count: u64,
    pub(crate) request_tx: Option<Sender<ApiRequest>>,
    pub(crate) response_rx: Option<Receiver<ApiResponse>>,
    next_request_id: u64,
    needs_render: bool,
}

impl App {
    /// Build the app around an existing broadcaster and mount the toast stack on it
    pub fn new(config: &Config, notifications: Broadcaster) -> Self {
        let toasts = ToastStack::mount(&notifications);

        Self {
            focus: Focus::Upload,
            upload: UploadState::new(),
            documents: DocumentListState::new(),
            ask: AskState::new(),
            notifications,
            toasts,
            confirm_delete: config.documents.confirm_delete,
            should_quit: false,
            frame_count: 0,
            request_tx: None,
            response_rx: None,
            next_request_id: 0,
            needs_render: true,
        }
    }

    /// Connect the app to a running API worker
    pub fn set_channels(
        &mut self,
        request_tx: Sender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_busy(&self) -> bool {
        self.upload.is_uploading() || self.documents.is_busy() || self.ask.is_asking()
    }

    /// Whether the next loop iteration should draw a frame
    ///
    /// While a request is in flight the spinner keeps animating.
    pub fn should_render(&self) -> bool {
        self.needs_render || self.is_busy() || self.toasts.take_changed()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    pub(crate) fn allocate_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
