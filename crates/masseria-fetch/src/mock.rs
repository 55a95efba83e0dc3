//! In-memory transport for tests and offline runs.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::{FetchError, RequestBuilder, Response, Transport};

/// Replays queued replies in order and records every request it receives.
///
/// When the queue is empty, `send` fails with a `RequestError`.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<Response, FetchError>>>,
    requests: Mutex<Vec<RequestBuilder>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply.
    pub fn reply_json(self, status: u16, value: serde_json::Value) -> Self {
        self.push(Ok(Response::json_body(status, &value)));
        self
    }

    /// Queue a raw reply.
    pub fn reply(self, response: Response) -> Self {
        self.push(Ok(response));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: FetchError) -> Self {
        self.push(Err(error));
        self
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RequestBuilder> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests().len()
    }

    fn push(&self, reply: Result<Response, FetchError>) {
        match self.replies.lock() {
            Ok(mut replies) => replies.push_back(reply),
            Err(poisoned) => poisoned.into_inner().push_back(reply),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        match self.requests.lock() {
            Ok(mut requests) => requests.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }

        let next = match self.replies.lock() {
            Ok(mut replies) => replies.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        next.unwrap_or_else(|| Err(FetchError::RequestError("no reply queued".to_string())))
    }
}
