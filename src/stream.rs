use crate::err::StreamErr;
use crate::order;
use crate::pipe::Pipe;
use crate::stage::{DistinctIter, FilterIter, LimitIter, MapIter, PeekIter, ShuffledIter, SkipIter, SortedIter};
use crate::StreamRes;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::rc::Rc;

/// 流水线。
///
/// 持有一个提供者，每次调用[`Stream::iter`]都构造一条全新的拉取迭代器链，各链之间不共享可变状态；
/// 同时携带在构造时计算好的有限性标记。
pub struct Stream<T> {
    supply: Rc<dyn Fn() -> Pipe<T>>,
    infinite: bool,
}

impl<T: 'static> Stream<T> {
    pub(crate) fn new(infinite: bool, supply: impl Fn() -> Pipe<T> + 'static) -> Stream<T> {
        Stream { supply: Rc::new(supply), infinite }
    }

    /// 获取一个新的拉取迭代器。
    pub fn iter(&self) -> Pipe<T> {
        (self.supply)()
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn is_finite(&self) -> bool {
        !self.infinite
    }

    /// 断言流有限，否则返回[`StreamErr::InfiniteStream`]。
    pub fn assert_finite(&self, op: &'static str) -> Result<(), StreamErr> {
        if self.infinite { Err(StreamErr::InfiniteStream { op }) } else { Ok(()) }
    }

    /// 映射每个元素，保持上游的有限性。
    pub fn map<U, F>(self, mapper: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let infinite = self.infinite;
        let mapper = Rc::new(mapper);
        Stream::new(infinite, move || Pipe::new(MapIter::new(self.iter(), Rc::clone(&mapper))))
    }

    /// 只保留满足`predicate`的元素，保持上游的有限性。
    ///
    /// 有限性描述的是上游的基数而非条件的选择性：在无限流上使用只有有限个元素满足的条件，
    /// 超过最后一个满足条件的元素后的拉取将永不返回。
    pub fn filter<P>(self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let infinite = self.infinite;
        let predicate = Rc::new(predicate);
        Stream::new(infinite, move || Pipe::new(FilterIter::new(self.iter(), Rc::clone(&predicate))))
    }

    /// 最多保留`max_size`个元素，结果总是有限流。
    pub fn limit(self, max_size: usize) -> Stream<T> {
        Stream::new(false, move || Pipe::new(LimitIter::new(self.iter(), max_size)))
    }

    pub fn skip(self, count: usize) -> Stream<T> {
        let infinite = self.infinite;
        Stream::new(infinite, move || Pipe::new(SkipIter::new(self.iter(), count)))
    }

    /// 元素经过时调用`action`。
    pub fn peek<A>(self, action: A) -> Stream<T>
    where
        A: Fn(&T) + 'static,
    {
        let infinite = self.infinite;
        let action = Rc::new(action);
        Stream::new(infinite, move || Pipe::new(PeekIter::new(self.iter(), Rc::clone(&action))))
    }

    /// 去重，保持首次出现的顺序。
    ///
    /// 可以用于无限流，但如果之后再也没有新值出现，拉取将永不返回。
    pub fn distinct(self) -> Stream<T>
    where
        T: Eq + Hash + Clone,
    {
        self.distinct_by_key(T::clone)
    }

    /// 按`key`的结果去重，保留每个键首次出现的元素。
    pub fn distinct_by_key<K, F>(self, key: F) -> Stream<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        let infinite = self.infinite;
        let key = Rc::new(key);
        Stream::new(infinite, move || Pipe::new(DistinctIter::new(self.iter(), Rc::clone(&key))))
    }

    /// 按`comparator`排序。
    ///
    /// 排序需要完整消耗上游，因此无限流在构造时即返回[`StreamErr::InfiniteStream`]。
    /// 排序是稳定的，首次拉取时才真正消耗上游。
    pub fn sorted<F>(self, comparator: F) -> StreamRes<T>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.assert_finite("sorted")?;
        let comparator = Rc::new(comparator);
        Ok(Stream::new(false, move || Pipe::new(SortedIter::new(self.iter(), Rc::clone(&comparator)))))
    }

    pub fn sorted_by_key<K, F>(self, key: F) -> StreamRes<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + 'static,
    {
        self.sorted(order::by_key(key))
    }

    /// 随机打乱顺序，与排序一样只能用于有限流。
    pub fn shuffled(self) -> StreamRes<T> {
        self.assert_finite("shuffled")?;
        Ok(Stream::new(false, move || Pipe::new(ShuffledIter::new(self.iter()))))
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream { supply: Rc::clone(&self.supply), infinite: self.infinite }
    }
}

impl<T> Debug for Stream<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream").field("infinite", &self.infinite).finish_non_exhaustive()
    }
}

impl<T: 'static> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = Pipe<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for &Stream<T> {
    type Item = T;
    type IntoIter = Pipe<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn assert_stays_exhausted<T: std::fmt::Debug + PartialEq + 'static>(stream: &Stream<T>) {
        let mut pipe = stream.iter();
        while pipe.next().is_some() {}
        for _ in 0..3 {
            assert_eq!(pipe.next(), None);
        }
    }

    #[test]
    #[should_panic(expected = "mapper failed")]
    fn test_map_panic_propagates() {
        let _ = Stream::of(vec![1, 2]).map(|x| if x == 2 { panic!("mapper failed") } else { x }).to_vec();
    }

    #[test]
    #[should_panic(expected = "predicate failed")]
    fn test_filter_panic_propagates() {
        let _ = Stream::of(vec![1, 2]).filter(|x| if *x == 2 { panic!("predicate failed") } else { true }).to_vec();
    }

    #[test]
    #[should_panic(expected = "comparator failed")]
    fn test_sorted_panic_propagates() {
        let stream = Stream::of(vec![2, 1]).sorted(|_: &i32, _: &i32| panic!("comparator failed")).unwrap();
        let _ = stream.to_vec();
    }

    #[test]
    fn test_map_pulls_lazily() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let stream = Stream::count_from(0).peek(move |_| counter.set(counter.get() + 1)).map(|x| x + 1);
        let mut pipe = stream.iter();
        assert_eq!(pulled.get(), 0);
        assert_eq!(pipe.next(), Some(1));
        assert_eq!(pipe.next(), Some(2));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_map() {
        let stream = Stream::of(vec![1, 2, 3]).map(|x| x * 2);
        assert!(stream.is_finite());
        assert_eq!(stream.to_vec(), Ok(vec![2, 4, 6]));
        assert!(Stream::count_from(0).map(|x| x + 1).is_infinite());
    }

    #[test]
    fn test_map_changes_type() {
        let stream = Stream::of(vec![1, 22, 333]).map(|x: i64| x.to_string()).map(|s| s.len());
        assert_eq!(stream.to_vec(), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_map_composition() {
        let f = |x: i64| x + 3;
        let g = |x: i64| x * 7;
        let input = vec![5, -2, 0, 9, 9];
        let chained = Stream::of(input.clone()).map(f).map(g).to_vec();
        let composed = Stream::of(input).map(move |x| g(f(x))).to_vec();
        assert_eq!(chained, composed);
    }

    #[test]
    fn test_filter() {
        let stream = Stream::of(vec![1, 2, 3, 4, 5, 6]).filter(|x| x % 3 != 0);
        assert_eq!(stream.to_vec(), Ok(vec![1, 2, 4, 5]));
        assert!(Stream::count_from(0).filter(|x| x % 2 == 0).is_infinite());
    }

    #[test]
    fn test_limit() {
        let input = vec![1, 2, 3, 4, 5];
        for n in 0..8 {
            let expected = input.iter().copied().take(n).collect::<Vec<_>>();
            assert_eq!(Stream::of(input.clone()).limit(n).to_vec(), Ok(expected));
        }
    }

    #[test]
    fn test_limit_makes_infinite_finite() {
        let stream = Stream::count_from(0).limit(3);
        assert!(stream.is_finite());
        assert_eq!(stream.to_vec(), Ok(vec![0, 1, 2]));
        assert_stays_exhausted(&stream);
    }

    #[test]
    fn test_filter_map_limit() {
        let stream = Stream::of(vec![1, 2, 3, 4, 5]).filter(|x| x % 2 == 0).map(|x| x * 10).limit(1);
        assert_eq!(stream.to_vec(), Ok(vec![20]));
    }

    #[test]
    fn test_skip() {
        assert_eq!(Stream::of(vec![1, 2, 3]).skip(1).to_vec(), Ok(vec![2, 3]));
        assert_eq!(Stream::of(vec![1, 2, 3]).skip(10).to_vec(), Ok(vec![]));
        assert!(Stream::count_from(0).skip(10).is_infinite());
        assert_eq!(Stream::count_from(0).skip(10).limit(2).to_vec(), Ok(vec![10, 11]));
    }

    #[test]
    fn test_peek_is_lazy() {
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let stream = Stream::count_from(0).peek(move |_| counter.set(counter.get() + 1)).limit(4);
        assert_eq!(seen.get(), 0);
        assert_eq!(stream.to_vec(), Ok(vec![0, 1, 2, 3]));
        assert_eq!(seen.get(), 4);
    }

    #[test]
    fn test_distinct() {
        assert_eq!(Stream::of(vec![3, 1, 2, 1]).distinct().to_vec(), Ok(vec![3, 1, 2]));
        let input = vec![5, 5, 4, 5, 4, 3, 3, 1];
        let output = Stream::of(input.clone()).distinct().to_vec().unwrap();
        assert!(output.len() <= input.len());
        assert_eq!(output, vec![5, 4, 3, 1]);
        assert!(Stream::count_from(0).distinct().is_infinite());
    }

    #[test]
    fn test_distinct_state_is_per_iterator() {
        let stream = Stream::of(vec![1, 2, 1]).distinct();
        assert_eq!(stream.to_vec(), Ok(vec![1, 2]));
        assert_eq!(stream.to_vec(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_distinct_by_key() {
        let stream = Stream::of(vec!["x", "X", "y"]).distinct_by_key(|s| s.to_ascii_lowercase());
        assert_eq!(stream.to_vec(), Ok(vec!["x", "y"]));
    }

    #[test]
    fn test_sorted() {
        let stream = Stream::of(vec![3, 1, 2]).sorted(order::natural()).unwrap();
        assert!(stream.is_finite());
        assert_eq!(stream.to_vec(), Ok(vec![1, 2, 3]));
        assert_stays_exhausted(&stream);
    }

    #[test]
    fn test_sorted_is_permutation_in_order() {
        let input = vec![9, -1, 4, 4, 0, 12, -7, 4];
        let output = Stream::of(input.clone()).sorted(order::reverse(order::natural())).unwrap().to_vec().unwrap();
        assert!(output.windows(2).all(|w| w[0] >= w[1]));
        let mut expected = input;
        expected.sort();
        expected.reverse();
        assert_eq!(output, expected);
    }

    #[test]
    fn test_sorted_rejects_infinite_at_construction() {
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        let result = Stream::count_from(0).peek(move |_| flag.set(true)).sorted(order::natural());
        assert_eq!(result.unwrap_err(), StreamErr::InfiniteStream { op: "sorted" });
        assert!(!called.get());
    }

    #[test]
    fn test_sorted_after_limit() {
        let stream = Stream::iterate(10i64, |x| x - 3).limit(4).sorted(order::natural()).unwrap();
        assert_eq!(stream.to_vec(), Ok(vec![1, 4, 7, 10]));
    }

    #[test]
    fn test_sorted_by_key() {
        let stream = Stream::of(vec!["ccc", "a", "bb"]).sorted_by_key(|s| s.len()).unwrap();
        assert_eq!(stream.to_vec(), Ok(vec!["a", "bb", "ccc"]));
    }

    #[test]
    fn test_shuffled() {
        assert!(Stream::count_from(0).shuffled().is_err());
        let mut output = Stream::range(0, 50).shuffled().unwrap().to_vec().unwrap();
        output.sort();
        assert_eq!(output, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_every_stage_stays_exhausted() {
        let source = Stream::of(vec![4, 2, 4, 1]);
        assert_stays_exhausted(&source.clone().map(|x| x + 1));
        assert_stays_exhausted(&source.clone().filter(|x| *x > 1));
        assert_stays_exhausted(&source.clone().limit(10));
        assert_stays_exhausted(&source.clone().skip(1));
        assert_stays_exhausted(&source.clone().distinct());
        assert_stays_exhausted(&source.clone().sorted(order::natural()).unwrap());
        assert_stays_exhausted(&source.shuffled().unwrap());
    }

    #[test]
    fn test_fresh_iterators_are_independent() {
        let stream = Stream::count_from(0).limit(3);
        let mut first = stream.iter();
        let mut second = stream.iter();
        assert_eq!(first.next(), Some(0));
        assert_eq!(first.next(), Some(1));
        assert_eq!(second.next(), Some(0));
        assert_eq!(first.next(), Some(2));
        assert_eq!(first.next(), None);
        assert_eq!(second.next(), Some(1));
    }

    #[test]
    fn test_into_iterator() {
        let stream = Stream::range(0, 4).map(|x| x * x);
        let mut total = 0;
        for x in &stream {
            total += x;
        }
        assert_eq!(total, 14);
        assert_eq!(stream.into_iter().collect::<Vec<_>>(), vec![0, 1, 4, 9]);
    }
}
