//! 流水线阶段。
//!
//! 每个阶段都是包装上游[`Pipe`]的迭代器，`next`即一次拉取。
//! 无状态阶段（映射、过滤、跳过、窥视）逐个转发；有状态阶段（去重、排序、乱序）自行持有累积状态。

mod distinct;
mod limit;
mod sorted;

pub use distinct::DistinctIter;
pub use limit::LimitIter;
pub use sorted::{ShuffledIter, SortedIter};

use crate::pipe::Pipe;
use std::iter::FusedIterator;
use std::rc::Rc;

/// 映射：每次拉取恰好消耗一个上游元素。
pub struct MapIter<T, F> {
    upstream: Pipe<T>,
    mapper: Rc<F>,
}

impl<T, F> MapIter<T, F> {
    pub(crate) fn new(upstream: Pipe<T>, mapper: Rc<F>) -> Self {
        MapIter { upstream, mapper }
    }
}

impl<T, U, F> Iterator for MapIter<T, F>
where
    F: Fn(T) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.next().map(|item| (self.mapper)(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<T, U, F> FusedIterator for MapIter<T, F> where F: Fn(T) -> U {}

/// 过滤：持续拉取上游直到遇到满足条件的元素或上游耗尽。
///
/// 如果上游无限且之后再无满足条件的元素，单次拉取将永不返回。
pub struct FilterIter<T, P> {
    upstream: Pipe<T>,
    predicate: Rc<P>,
}

impl<T, P> FilterIter<T, P> {
    pub(crate) fn new(upstream: Pipe<T>, predicate: Rc<P>) -> Self {
        FilterIter { upstream, predicate }
    }
}

impl<T, P> Iterator for FilterIter<T, P>
where
    P: Fn(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &self.predicate;
        self.upstream.find(|item| predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}

impl<T, P> FusedIterator for FilterIter<T, P> where P: Fn(&T) -> bool {}

/// 跳过前`count`个元素，首次拉取时才消耗上游。
pub struct SkipIter<T> {
    upstream: Pipe<T>,
    remaining: usize,
}

impl<T> SkipIter<T> {
    pub(crate) fn new(upstream: Pipe<T>, count: usize) -> Self {
        SkipIter { upstream, remaining: count }
    }
}

impl<T> Iterator for SkipIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.upstream.next().is_none() {
                self.remaining = 0;
                return None;
            }
        }
        self.upstream.next()
    }
}

impl<T> FusedIterator for SkipIter<T> {}

/// 窥视：元素经过时调用`action`，不改变元素本身。
pub struct PeekIter<T, A> {
    upstream: Pipe<T>,
    action: Rc<A>,
}

impl<T, A> PeekIter<T, A> {
    pub(crate) fn new(upstream: Pipe<T>, action: Rc<A>) -> Self {
        PeekIter { upstream, action }
    }
}

impl<T, A> Iterator for PeekIter<T, A>
where
    A: Fn(&T),
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.next().inspect(|item| (self.action)(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<T, A> FusedIterator for PeekIter<T, A> where A: Fn(&T) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn pipe_of(values: Vec<i64>) -> Pipe<i64> {
        Pipe::new(values.into_iter())
    }

    #[test]
    fn test_map_iter() {
        let mut iter = MapIter::new(pipe_of(vec![1, 2, 3]), Rc::new(|x: i64| x.to_string()));
        assert_eq!(iter.next(), Some("1".to_string()));
        assert_eq!(iter.next(), Some("2".to_string()));
        assert_eq!(iter.next(), Some("3".to_string()));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_map_iter_pulls_one_per_next() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let upstream = Pipe::new((0..).inspect(move |_| counter.set(counter.get() + 1)));
        let mut iter = MapIter::new(upstream, Rc::new(|x: i64| x * 10));
        assert_eq!(pulled.get(), 0);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(pulled.get(), 1);
        assert_eq!(iter.next(), Some(10));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_filter_iter_skips_rejected_runs() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let upstream = Pipe::new(vec![1, 3, 5, 6, 7, 8].into_iter().inspect(move |_| counter.set(counter.get() + 1)));
        let mut iter = FilterIter::new(upstream, Rc::new(|x: &i64| x % 2 == 0));
        assert_eq!(iter.next(), Some(6));
        assert_eq!(pulled.get(), 4);
        assert_eq!(iter.next(), Some(8));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_skip_iter() {
        assert_eq!(SkipIter::new(pipe_of(vec![1, 2, 3, 4]), 2).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(SkipIter::new(pipe_of(vec![1, 2, 3, 4]), 0).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        let mut iter = SkipIter::new(pipe_of(vec![1, 2]), 5);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_peek_iter() {
        let seen = Rc::new(Cell::new(0));
        let sum = Rc::clone(&seen);
        let iter = PeekIter::new(pipe_of(vec![1, 2, 3]), Rc::new(move |x: &i64| sum.set(sum.get() + *x)));
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(seen.get(), 6);
    }
}
