use crate::pipe::Pipe;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::rc::Rc;

/// 去重：按`key`记录已出现的值，只放行首次出现的元素，保持上游顺序。
///
/// 已见集合随不同值的数量无限增长。
pub struct DistinctIter<T, K, F> {
    upstream: Pipe<T>,
    key: Rc<F>,
    seen: FxHashSet<K>,
}

impl<T, K, F> DistinctIter<T, K, F> {
    pub(crate) fn new(upstream: Pipe<T>, key: Rc<F>) -> Self {
        DistinctIter { upstream, key, seen: FxHashSet::default() }
    }
}

impl<T, K, F> Iterator for DistinctIter<T, K, F>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, seen) = (&self.key, &mut self.seen);
        self.upstream.find(|item| seen.insert(key(item))) // 返回 true 表示首次出现
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}

impl<T, K, F> FusedIterator for DistinctIter<T, K, F>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
}
