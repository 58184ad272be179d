//! Fakes shared by unit tests

use crate::shared::crud::Confirm;
use crate::shared::http::{ApiError, HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Transport that records every request and replays queued responses in order.
///
/// With an empty queue it answers `200 []`.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_path(&self) -> Option<String> {
        self.requests.borrow().last().map(|r| r.path.clone())
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(HttpResponse {
            status: 200,
            body: "[]".to_string(),
        }))
    }
}

/// Confirmation stub with a fixed answer that counts prompts
pub struct ScriptedConfirm {
    answer: bool,
    asked: Cell<usize>,
    last_message: RefCell<Option<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
            last_message: RefCell::new(None),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.get()
    }

    pub fn last_message(&self) -> Option<String> {
        self.last_message.borrow().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        *self.last_message.borrow_mut() = Some(message.to_string());
        self.answer
    }
}
