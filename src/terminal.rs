//! 终止操作：反复拉取最外层迭代器直到耗尽。
//!
//! 需要消耗完整个流才能得出结果的操作先断言有限；逐个消费或可以提前结束的操作不做限制。

use crate::err::StreamErr;
use crate::stream::Stream;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::Display;

impl<T: 'static> Stream<T> {
    /// 收集为`Vec`。
    pub fn to_vec(&self) -> Result<Vec<T>, StreamErr> {
        self.assert_finite("to_vec")?;
        Ok(self.iter().collect_vec())
    }

    pub fn count(&self) -> Result<usize, StreamErr> {
        self.assert_finite("count")?;
        Ok(self.iter().count())
    }

    pub fn reduce<F>(&self, f: F) -> Result<Option<T>, StreamErr>
    where
        F: FnMut(T, T) -> T,
    {
        self.assert_finite("reduce")?;
        Ok(self.iter().reduce(f))
    }

    pub fn fold<A, F>(&self, init: A, f: F) -> Result<A, StreamErr>
    where
        F: FnMut(A, T) -> A,
    {
        self.assert_finite("fold")?;
        Ok(self.iter().fold(init, f))
    }

    /// 最大值，多个最大值时取最后一个。
    pub fn max_by<F>(&self, comparator: F) -> Result<Option<T>, StreamErr>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.assert_finite("max")?;
        Ok(self.iter().max_by(|a, b| comparator(a, b)))
    }

    /// 最小值，多个最小值时取第一个。
    pub fn min_by<F>(&self, comparator: F) -> Result<Option<T>, StreamErr>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.assert_finite("min")?;
        Ok(self.iter().min_by(|a, b| comparator(a, b)))
    }

    pub fn join(&self, separator: &str) -> Result<String, StreamErr>
    where
        T: Display,
    {
        self.assert_finite("join")?;
        Ok(self.iter().join(separator))
    }

    /// 逐个消费元素。
    ///
    /// 不要求有限：对无限流调用时只有`f`发生panic才会结束。
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(T),
    {
        self.iter().for_each(f)
    }

    /// 逐个消费元素，遇到第一个错误时停止并返回该错误。
    pub fn try_for_each<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnMut(T) -> Result<(), E>,
    {
        self.iter().try_for_each(f)
    }

    pub fn find_first(&self) -> Option<T> {
        self.iter().next()
    }

    /// 是否存在满足条件的元素，找到即停止。
    pub fn any_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    pub fn all_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    pub fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any_match(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order;

    #[test]
    fn test_finite_only_terminals() {
        let infinite = Stream::count_from(0);
        let err = StreamErr::InfiniteStream { op: "to_vec" };
        assert_eq!(infinite.to_vec(), Err(err));
        assert_eq!(infinite.count(), Err(StreamErr::InfiniteStream { op: "count" }));
        assert!(infinite.reduce(|a, b| a + b).is_err());
        assert!(infinite.fold(0, |a, b| a + b).is_err());
        assert!(infinite.max_by(order::natural()).is_err());
        assert!(infinite.min_by(order::natural()).is_err());
        assert!(infinite.join(",").is_err());
    }

    #[test]
    fn test_count_reduce_fold() {
        let stream = Stream::range(1, 5);
        assert_eq!(stream.count(), Ok(4));
        assert_eq!(stream.reduce(|a, b| a * b), Ok(Some(24)));
        assert_eq!(stream.fold(String::new(), |acc, x| acc + &x.to_string()), Ok("1234".to_string()));
        assert_eq!(Stream::<i64>::empty().reduce(|a, b| a + b), Ok(None));
    }

    #[test]
    fn test_max_min() {
        let stream = Stream::of(vec![(1, 'a'), (3, 'b'), (0, 'c'), (3, 'd'), (0, 'e')]);
        let by_first = order::by_key(|item: &(i32, char)| item.0);
        assert_eq!(stream.max_by(&by_first), Ok(Some((3, 'd'))));
        assert_eq!(stream.min_by(&by_first), Ok(Some((0, 'c'))));
    }

    #[test]
    fn test_join() {
        assert_eq!(Stream::range(0, 3).join(", "), Ok("0, 1, 2".to_string()));
    }

    #[test]
    fn test_short_circuit_on_infinite() {
        let stream = Stream::count_from(0);
        assert_eq!(stream.find_first(), Some(0));
        assert!(stream.any_match(|x| *x > 100));
        assert!(!stream.all_match(|x| *x < 10));
        assert!(!stream.none_match(|x| *x == 42));
    }

    #[test]
    fn test_for_each() {
        let mut seen = Vec::new();
        Stream::of(vec![3, 1, 2]).for_each(|x| seen.push(x));
        assert_eq!(seen, vec![3, 1, 2]);

        let mut seen = Vec::new();
        let result = Stream::count_from(0).try_for_each(|x| {
            if x == 3 {
                return Err(x);
            }
            seen.push(x);
            Ok(())
        });
        assert_eq!(result, Err(3));
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
