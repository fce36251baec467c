use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;
use url::Url;

use super::http::{BoxFuture, HttpTransport, TransportError};
use super::request::Request;
use super::response::RawResponse;

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Respond(u16, String),
    Fail(String),
    /// Respond only after the given delay, so per-attempt timeouts can fire.
    Stall(Duration, u16, String),
}

#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub url: Url,
    pub request: Request,
    pub timeout: Duration,
    pub at: Instant,
}

#[derive(Debug, Default)]
struct State {
    script: VecDeque<Reply>,
    fallback: Option<Reply>,
    calls: Vec<Call>,
}

/// Replays scripted replies in order, then repeats the fallback forever.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<State>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn always(status: u16, body: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.state.lock().unwrap().fallback = Some(Reply::Respond(status, body.into()));
        fake
    }

    pub fn always_fail(message: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.state.lock().unwrap().fallback = Some(Reply::Fail(message.into()));
        fake
    }

    pub fn then(self, reply: Reply) -> Self {
        self.state.lock().unwrap().script.push_back(reply);
        self
    }

    pub fn then_respond(self, status: u16, body: impl Into<String>) -> Self {
        self.then(Reply::Respond(status, body.into()))
    }

    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.then(Reply::Fail(message.into()))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no request was sent")
    }

    /// Gaps between consecutive attempts.
    pub fn gaps(&self) -> Vec<Duration> {
        self.calls()
            .windows(2)
            .map(|pair| pair[1].at - pair[0].at)
            .collect()
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        url: &'a Url,
        request: &'a Request,
        timeout: Duration,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
        Box::pin(async move {
            let reply = {
                let mut state = self.state.lock().unwrap();
                state.calls.push(Call {
                    url: url.clone(),
                    request: request.clone(),
                    timeout,
                    at: Instant::now(),
                });
                match state.script.pop_front() {
                    Some(reply) => reply,
                    None => state
                        .fallback
                        .clone()
                        .expect("fake transport ran out of scripted replies"),
                }
            };

            let (status, body) = match reply {
                Reply::Respond(status, body) => (status, body),
                Reply::Fail(message) => return Err(message.into()),
                Reply::Stall(delay, status, body) => {
                    tokio::time::sleep(delay).await;
                    (status, body)
                }
            };

            Ok(RawResponse {
                status,
                status_text: reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or_default()
                    .to_owned(),
                headers: BTreeMap::from([(
                    "content-type".to_owned(),
                    "application/json".to_owned(),
                )]),
                body,
            })
        })
    }
}
