//! Diagram render sequencing for docnav.
//!
//! This crate provides the glue between content pages and an external
//! diagram engine that is not safely re-entrant:
//! - [`DiagramKey`]: content-based hashes for element ids and queue keys
//! - [`RenderQueue`]: FIFO queue with one request in flight and one-shot
//!   interactive binders
//!
//! The rendering algorithm itself lives in the engine behind the
//! [`DiagramEngine`] trait; only job sequencing happens here.
//!
//! # Example
//!
//! ```ignore
//! use docnav_diagrams::{DiagramKey, RenderQueue};
//!
//! let key = DiagramKey { source: "graph TD\nA-->B", language: "mermaid" };
//! let mut queue = RenderQueue::new(engine);
//!
//! queue.submit(key.element_id(), "graph TD\nA-->B");
//! // ... once the page attaches the SVG container:
//! queue.bind(&key.element_id(), &mut container);
//! ```

mod key;
mod queue;

pub use key::DiagramKey;
pub use queue::{
    Binder, DiagramEngine, EngineError, PLACEHOLDER, RenderQueue, RenderState, RenderedDiagram,
};
