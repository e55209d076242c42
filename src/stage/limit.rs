use crate::pipe::Pipe;
use std::iter::FusedIterator;

/// 最多产出`max_size`个元素。
///
/// 计数达到上限后不再触碰上游；上游提前耗尽时计数直接置为上限，之后的拉取稳定返回`None`。
pub struct LimitIter<T> {
    upstream: Pipe<T>,
    max_size: usize,
    count: usize,
}

impl<T> LimitIter<T> {
    pub(crate) fn new(upstream: Pipe<T>, max_size: usize) -> Self {
        LimitIter { upstream, max_size, count: 0 }
    }
}

impl<T> Iterator for LimitIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count >= self.max_size {
            return None;
        }
        match self.upstream.next() {
            Some(item) => {
                self.count += 1;
                Some(item)
            }
            None => {
                self.count = self.max_size;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.max_size - self.count;
        let (lower, upper) = self.upstream.size_hint();
        (lower.min(remaining), Some(upper.map_or(remaining, |upper| upper.min(remaining))))
    }
}

impl<T> FusedIterator for LimitIter<T> {}
