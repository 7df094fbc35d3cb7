//! Search tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect search
//! results. Every event is also emitted as a `tracing` record at trace level.

use crate::error::ErrorClass;
use arrayseek_primitives::ElementKind;

///
/// SearchTraceSink
///

pub trait SearchTraceSink {
    fn on_event(&self, event: SearchTraceEvent);
}

///
/// SearchDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

///
/// SearchTraceEvent
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchTraceEvent {
    Finished {
        direction: SearchDirection,
        kind: ElementKind,
        haystack_len: usize,
        needle_len: usize,
        from: isize,
        tolerance: Option<f64>,
        found: Option<usize>,
    },
    Rejected {
        direction: SearchDirection,
        kind: Option<ElementKind>,
        class: ErrorClass,
    },
}

pub(crate) fn emit(sink: Option<&dyn SearchTraceSink>, event: SearchTraceEvent) {
    tracing::trace!(?event, "array search");

    if let Some(sink) = sink {
        sink.on_event(event);
    }
}
