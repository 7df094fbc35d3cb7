use crate::{
    kind::SearchKind,
    search::{FROM_END, scan},
};

///
/// ArraySearch
///
/// Search helpers on non-null slices. Forward methods default to index 0,
/// backward methods default to the end of the slice, and the plain methods
/// use the kind's default tolerance (exact, or a zero-width window).
///

pub trait ArraySearch<T: SearchKind> {
    fn index_of_within(&self, element: &T, from: isize, tolerance: T::Tolerance) -> Option<usize>;

    fn last_index_of_within(
        &self,
        element: &T,
        from: isize,
        tolerance: T::Tolerance,
    ) -> Option<usize>;

    fn index_of_seq_within(
        &self,
        needle: &[T],
        from: isize,
        tolerance: T::Tolerance,
    ) -> Option<usize>;

    fn last_index_of_seq_within(
        &self,
        needle: &[T],
        from: isize,
        tolerance: T::Tolerance,
    ) -> Option<usize>;

    fn index_of(&self, element: &T) -> Option<usize> {
        self.index_of_within(element, 0, T::Tolerance::default())
    }

    fn index_of_from(&self, element: &T, from: isize) -> Option<usize> {
        self.index_of_within(element, from, T::Tolerance::default())
    }

    fn last_index_of(&self, element: &T) -> Option<usize> {
        self.last_index_of_within(element, FROM_END, T::Tolerance::default())
    }

    fn last_index_of_from(&self, element: &T, from: isize) -> Option<usize> {
        self.last_index_of_within(element, from, T::Tolerance::default())
    }

    fn index_of_seq(&self, needle: &[T]) -> Option<usize> {
        self.index_of_seq_within(needle, 0, T::Tolerance::default())
    }

    fn index_of_seq_from(&self, needle: &[T], from: isize) -> Option<usize> {
        self.index_of_seq_within(needle, from, T::Tolerance::default())
    }

    fn last_index_of_seq(&self, needle: &[T]) -> Option<usize> {
        self.last_index_of_seq_within(needle, FROM_END, T::Tolerance::default())
    }

    fn last_index_of_seq_from(&self, needle: &[T], from: isize) -> Option<usize> {
        self.last_index_of_seq_within(needle, from, T::Tolerance::default())
    }

    fn contains_element(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    fn contains_seq(&self, needle: &[T]) -> bool {
        self.index_of_seq(needle).is_some()
    }
}

impl<T: SearchKind> ArraySearch<T> for [T] {
    fn index_of_within(&self, element: &T, from: isize, tolerance: T::Tolerance) -> Option<usize> {
        scan::forward_element(self, element, from, |a, b| a.search_eq(b, tolerance))
    }

    fn last_index_of_within(
        &self,
        element: &T,
        from: isize,
        tolerance: T::Tolerance,
    ) -> Option<usize> {
        scan::backward_element(self, element, from, |a, b| a.search_eq(b, tolerance))
    }

    fn index_of_seq_within(
        &self,
        needle: &[T],
        from: isize,
        tolerance: T::Tolerance,
    ) -> Option<usize> {
        scan::forward(self, needle, from, |a, b| a.search_eq(b, tolerance))
    }

    fn last_index_of_seq_within(
        &self,
        needle: &[T],
        from: isize,
        tolerance: T::Tolerance,
    ) -> Option<usize> {
        scan::backward(self, needle, from, |a, b| a.search_eq(b, tolerance))
    }
}
