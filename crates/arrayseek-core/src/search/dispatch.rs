use crate::{
    config::SearchOptions,
    error::SearchError,
    kind::{Exact, SearchKind, Tolerance},
    obs::{self, SearchDirection, SearchTraceEvent, SearchTraceSink},
    search::scan,
    value::Array,
};

///
/// ArraySearcher
///
/// Kind-dispatching search over dynamic [`Array`]s.
/// The element kind is resolved once per call from the array variants.
///

#[derive(Clone, Copy, Default)]
pub struct ArraySearcher<'a> {
    options: SearchOptions,
    sink: Option<&'a dyn SearchTraceSink>,
}

impl<'a> ArraySearcher<'a> {
    #[must_use]
    pub const fn new(options: SearchOptions) -> Self {
        Self {
            options,
            sink: None,
        }
    }

    #[must_use]
    pub const fn with_sink(mut self, sink: &'a dyn SearchTraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub const fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn first_index_of<R: PartialEq>(
        &self,
        haystack: Option<&Array<R>>,
        pattern: Option<&Array<R>>,
    ) -> Result<Option<usize>, SearchError> {
        self.execute(SearchDirection::Forward, haystack, pattern)
    }

    pub fn last_index_of<R: PartialEq>(
        &self,
        haystack: Option<&Array<R>>,
        pattern: Option<&Array<R>>,
    ) -> Result<Option<usize>, SearchError> {
        self.execute(SearchDirection::Backward, haystack, pattern)
    }

    pub fn contains<R: PartialEq>(
        &self,
        haystack: Option<&Array<R>>,
        pattern: Option<&Array<R>>,
    ) -> Result<bool, SearchError> {
        self.first_index_of(haystack, pattern)
            .map(|found| found.is_some())
    }

    fn execute<R: PartialEq>(
        &self,
        direction: SearchDirection,
        haystack: Option<&Array<R>>,
        pattern: Option<&Array<R>>,
    ) -> Result<Option<usize>, SearchError> {
        let result = self.resolve(direction, haystack, pattern);

        let event = match (&result, pattern) {
            (Ok(found), Some(pattern)) => SearchTraceEvent::Finished {
                direction,
                kind: pattern.kind(),
                haystack_len: haystack.map_or(0, Array::len),
                needle_len: pattern.len(),
                from: match direction {
                    SearchDirection::Forward => self.options.forward_from(),
                    SearchDirection::Backward => self.options.backward_from(),
                },
                tolerance: self.options.tolerance,
                found: *found,
            },
            (Err(err), _) => {
                tracing::debug!(error = %err, ?direction, "rejected array search");
                SearchTraceEvent::Rejected {
                    direction,
                    kind: pattern.or(haystack).map(Array::kind),
                    class: err.class(),
                }
            }
            // resolve() never succeeds without a pattern
            (Ok(_), None) => return result,
        };
        obs::emit(self.sink, event);

        result
    }

    fn resolve<R: PartialEq>(
        &self,
        direction: SearchDirection,
        haystack: Option<&Array<R>>,
        pattern: Option<&Array<R>>,
    ) -> Result<Option<usize>, SearchError> {
        let pattern = pattern.ok_or(SearchError::NullPattern)?;
        self.options.validate()?;

        let kind = pattern.kind();
        if self.options.tolerance.is_some() && !kind.supports_tolerance() {
            return Err(SearchError::ToleranceUnsupported { kind });
        }
        if direction == SearchDirection::Backward && self.options.end_index.is_some() {
            return Err(SearchError::EndBoundUnsupported);
        }

        let Some(haystack) = haystack else {
            return Ok(None);
        };
        let epsilon = self.options.tolerance.unwrap_or(0.0);

        let found = match (haystack, pattern) {
            (Array::Int64(h), Array::Int64(n)) => self.scan(direction, h, n, Exact),
            (Array::Int32(h), Array::Int32(n)) => self.scan(direction, h, n, Exact),
            (Array::Int16(h), Array::Int16(n)) => self.scan(direction, h, n, Exact),
            (Array::Int8(h), Array::Int8(n)) => self.scan(direction, h, n, Exact),
            (Array::Float64(h), Array::Float64(n)) => {
                self.scan(direction, h, n, Tolerance::<f64>::new(epsilon)?)
            }
            (Array::Float32(h), Array::Float32(n)) => {
                self.scan(direction, h, n, Tolerance::<f32>::widened_from(epsilon)?)
            }
            (Array::Bool(h), Array::Bool(n)) => self.scan(direction, h, n, Exact),
            (Array::Char(h), Array::Char(n)) => self.scan(direction, h, n, Exact),
            (Array::Reference(h), Array::Reference(n)) => self.scan(direction, h, n, Exact),
            _ => {
                return Err(SearchError::KindMismatch {
                    haystack: haystack.kind(),
                    pattern: kind,
                });
            }
        };

        Ok(found)
    }

    fn scan<T: SearchKind>(
        &self,
        direction: SearchDirection,
        haystack: &[T],
        needle: &[T],
        tolerance: T::Tolerance,
    ) -> Option<usize> {
        let eq = |a: &T, b: &T| a.search_eq(b, tolerance);

        match direction {
            SearchDirection::Forward => match self.options.end_index {
                Some(end) => {
                    scan::forward_in(haystack, needle, self.options.forward_from(), end, eq)
                }
                None => scan::forward(haystack, needle, self.options.forward_from(), eq),
            },
            SearchDirection::Backward => {
                scan::backward(haystack, needle, self.options.backward_from(), eq)
            }
        }
    }
}

///
/// Array search
///

impl<R: PartialEq> Array<R> {
    /// Forward search for `pattern` inside `self` under `options`.
    pub fn first_index_of(
        &self,
        pattern: Option<&Self>,
        options: &SearchOptions,
    ) -> Result<Option<usize>, SearchError> {
        ArraySearcher::new(*options).first_index_of(Some(self), pattern)
    }

    /// Backward search for `pattern` inside `self` under `options`.
    pub fn last_index_of(
        &self,
        pattern: Option<&Self>,
        options: &SearchOptions,
    ) -> Result<Option<usize>, SearchError> {
        ArraySearcher::new(*options).last_index_of(Some(self), pattern)
    }

    pub fn contains(&self, pattern: Option<&Self>, options: &SearchOptions) -> Result<bool, SearchError> {
        ArraySearcher::new(*options).contains(Some(self), pattern)
    }
}
