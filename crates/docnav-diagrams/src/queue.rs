//! FIFO render queue for a non-re-entrant diagram engine.
//!
//! Diagram engines of the mermaid family render into shared internal state
//! and must not be entered twice concurrently. [`RenderQueue`] serializes
//! render requests: strictly one request is in the rendering stage at a
//! time, dispatched in submission order.
//!
//! A request moves `queued -> rendering -> bound`. The rendering stage ends
//! only when the host attaches the SVG to a live container and the
//! diagram's interactive binder has run; until then the next queued request
//! waits. The binder is a [`FnOnce`] — the type system enforces the
//! engine's invoke-exactly-once requirement.
//!
//! The queue assumes a single-threaded cooperative host and is driven
//! through `&mut self`. A multi-threaded host must wrap it in a mutex or a
//! single-consumer channel to preserve the FIFO/one-in-flight invariants.
//!
//! There is no timeout: a render that never gets its container bound blocks
//! all requests behind it. Engine *failures* do not block — the failed
//! request is dropped, its slot keeps showing the placeholder, and the
//! queue moves on.

use std::collections::VecDeque;

/// Placeholder markup shown while a diagram has no rendered SVG (pending or
/// failed).
pub const PLACEHOLDER: &str = "Loading...";

/// Error reported by a diagram engine.
#[derive(Debug, thiserror::Error)]
#[error("diagram engine error: {0}")]
pub struct EngineError(String);

impl EngineError {
    /// Create an engine error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Interactive binder applied to the container after the SVG is attached.
pub type Binder<C> = Box<dyn FnOnce(&mut C)>;

/// A completed render: SVG markup plus its one-shot interactive binder.
pub struct RenderedDiagram<C> {
    /// SVG markup to attach to the container.
    pub svg: String,
    /// Post-attach binder. Consumed on invocation; calling twice is
    /// impossible by construction.
    pub bind: Binder<C>,
}

/// External diagram rendering engine.
///
/// `C` is the host's container handle type (whatever the binder needs to
/// wire up interactivity).
pub trait DiagramEngine<C> {
    /// Render `source` under the unique element id `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the engine cannot produce SVG for the
    /// source. The queue treats this as terminal for the request.
    fn render(&mut self, id: &str, source: &str) -> Result<RenderedDiagram<C>, EngineError>;
}

/// Observable stage of a request in the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Waiting for the rendering slot.
    Queued,
    /// Rendered (or rendering), waiting for container attachment.
    Rendering,
}

enum JobState<C> {
    Queued,
    Rendering(RenderedDiagram<C>),
}

struct Job<C> {
    key: String,
    source: String,
    state: JobState<C>,
}

/// FIFO render queue with a single request in flight.
///
/// Owned by the page/application context and torn down with it — requests
/// do not outlive the queue.
pub struct RenderQueue<C, E> {
    engine: E,
    jobs: VecDeque<Job<C>>,
}

impl<C, E: DiagramEngine<C>> RenderQueue<C, E> {
    /// Create a queue around an engine instance.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            jobs: VecDeque::new(),
        }
    }

    /// Submit a render request.
    ///
    /// Requests are processed in submission order. Re-submitting a key that
    /// is still queued or in flight overwrites the payload but keeps the
    /// request's position — the same key is never rendered twice
    /// concurrently.
    pub fn submit(&mut self, key: impl Into<String>, source: impl Into<String>) {
        let key = key.into();
        let source = source.into();
        if let Some(job) = self.jobs.iter_mut().find(|j| j.key == key) {
            job.source = source;
        } else {
            self.jobs.push_back(Job {
                key,
                source,
                state: JobState::Queued,
            });
        }
        self.pump();
    }

    /// Attempt to complete the in-flight request for `key`.
    ///
    /// Attaching succeeds only when `key` holds the rendering slot and its
    /// SVG is ready; the binder then runs against `container`, the request
    /// is removed, and the next queued request is dispatched. Any other
    /// state leaves the request untouched for a later attempt.
    ///
    /// Returns whether the request reached the bound stage.
    pub fn bind(&mut self, key: &str, container: &mut C) -> bool {
        let ready = matches!(
            self.jobs.front(),
            Some(job) if job.key == key && matches!(job.state, JobState::Rendering(_))
        );
        if !ready {
            return false;
        }

        // Checked above; the front job is ours and rendered
        let Some(job) = self.jobs.pop_front() else {
            return false;
        };
        let JobState::Rendering(rendered) = job.state else {
            return false;
        };
        (rendered.bind)(container);
        self.pump();
        true
    }

    /// Rendered SVG for `key`, if its render has completed.
    #[must_use]
    pub fn svg(&self, key: &str) -> Option<&str> {
        self.jobs.iter().find(|j| j.key == key).and_then(|j| {
            match &j.state {
                JobState::Rendering(rendered) => Some(rendered.svg.as_str()),
                JobState::Queued => None,
            }
        })
    }

    /// Rendered SVG for `key`, or [`PLACEHOLDER`] while none is available.
    #[must_use]
    pub fn svg_or_placeholder(&self, key: &str) -> &str {
        self.svg(key).unwrap_or(PLACEHOLDER)
    }

    /// Current stage of the request for `key`.
    ///
    /// `None` means the key is unknown: never submitted, dropped after an
    /// engine failure, or already bound and removed.
    #[must_use]
    pub fn state(&self, key: &str) -> Option<RenderState> {
        self.jobs.iter().find(|j| j.key == key).map(|j| match j.state {
            JobState::Queued => RenderState::Queued,
            JobState::Rendering(_) => RenderState::Rendering,
        })
    }

    /// Number of pending requests (queued or in flight).
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the queue has no pending requests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Dispatch the front request if the rendering slot is free.
    ///
    /// Engine failures drop the failed request and move on to the next one.
    fn pump(&mut self) {
        while let Some(front) = self.jobs.front_mut() {
            match front.state {
                // Slot taken; wait for bind()
                JobState::Rendering(_) => return,
                JobState::Queued => match self.engine.render(&front.key, &front.source) {
                    Ok(rendered) => {
                        front.state = JobState::Rendering(rendered);
                        return;
                    }
                    Err(e) => {
                        tracing::warn!(key = %front.key, error = %e, "diagram render failed");
                        self.jobs.pop_front();
                    }
                },
            }
        }
    }
}
