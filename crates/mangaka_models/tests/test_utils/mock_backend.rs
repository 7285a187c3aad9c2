//! In-process image backend.

use async_trait::async_trait;
use mangaka_core::Txt2ImgRequest;
use mangaka_error::{BackendError, BackendErrorKind, MangakaResult};
use mangaka_interface::{BackendStatus, ImageBackend};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How the mock answers txt2img.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Probe succeeds, txt2img returns these bytes
    Image(Vec<u8>),
    /// Probe succeeds, txt2img fails
    Error(BackendErrorKind),
    /// Probe fails
    Offline,
}

/// Mock backend counting its calls and keeping the last request.
#[derive(Debug)]
pub struct MockBackend {
    behavior: MockBehavior,
    probes: AtomicUsize,
    calls: AtomicUsize,
    last_request: Mutex<Option<Txt2ImgRequest>>,
}

impl MockBackend {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            probes: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<Txt2ImgRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageBackend for MockBackend {
    async fn probe(&self) -> BackendStatus {
        self.probes.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::Offline => BackendStatus::Unavailable {
                reason: "mock offline".to_string(),
            },
            _ => BackendStatus::Available,
        }
    }

    async fn txt2img(&self, request: &Txt2ImgRequest) -> MangakaResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.behavior {
            MockBehavior::Image(bytes) => Ok(bytes.clone()),
            MockBehavior::Error(kind) => Err(BackendError::new(kind.clone()).into()),
            MockBehavior::Offline => Err(BackendError::new(BackendErrorKind::Unavailable(
                "mock offline".to_string(),
            ))
            .into()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
