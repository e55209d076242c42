use crate::pipe::Pipe;
use itertools::Itertools;
use rand::seq::SliceRandom;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::rc::Rc;
use std::vec::IntoIter;

/// 排序：首次拉取时完整消耗上游并按`comparator`稳定排序，之后逐个移出缓冲区。
///
/// 只能构造在有限流上，见[`Stream::sorted`](crate::Stream::sorted)。
pub struct SortedIter<T, F> {
    upstream: Pipe<T>,
    comparator: Rc<F>,
    buffer: Option<IntoIter<T>>,
}

impl<T, F> SortedIter<T, F> {
    pub(crate) fn new(upstream: Pipe<T>, comparator: Rc<F>) -> Self {
        SortedIter { upstream, comparator, buffer: None }
    }
}

impl<T, F> Iterator for SortedIter<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_none() {
            let comparator = &self.comparator;
            self.buffer = Some(self.upstream.by_ref().sorted_by(|a, b| comparator(a, b)));
        }
        self.buffer.as_mut().and_then(Iterator::next)
    }
}

impl<T, F> FusedIterator for SortedIter<T, F> where F: Fn(&T, &T) -> Ordering {}

/// 乱序：与排序相同的缓冲方式，首次拉取时打乱顺序。
pub struct ShuffledIter<T> {
    upstream: Pipe<T>,
    buffer: Option<IntoIter<T>>,
}

impl<T> ShuffledIter<T> {
    pub(crate) fn new(upstream: Pipe<T>) -> Self {
        ShuffledIter { upstream, buffer: None }
    }
}

impl<T> Iterator for ShuffledIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_none() {
            let mut items = self.upstream.by_ref().collect_vec();
            items.shuffle(&mut rand::rng());
            self.buffer = Some(items.into_iter());
        }
        self.buffer.as_mut().and_then(Iterator::next)
    }
}

impl<T> FusedIterator for ShuffledIter<T> {}
