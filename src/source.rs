//! 元素源：流水线的起点。
//!
//! 每个源都给出自己的有限性标记；无法保证终止的源一律标记为无限。

use crate::pipe::Pipe;
use crate::stream::Stream;
use crate::Integer;
use std::rc::Rc;

impl<T: 'static> Stream<T> {
    /// 通用源：每次获取迭代器时调用`supplier`。
    ///
    /// `infinite`必须如实描述`supplier`产出的序列。
    pub fn from_supplier<I, F>(infinite: bool, supplier: F) -> Stream<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
        F: Fn() -> I + 'static,
    {
        Stream::new(infinite, move || Pipe::new(supplier().into_iter()))
    }

    pub fn of(values: Vec<T>) -> Stream<T>
    where
        T: Clone,
    {
        let values: Rc<[T]> = values.into();
        Stream::from_supplier(false, move || {
            let values = Rc::clone(&values);
            (0..values.len()).map(move |idx| values[idx].clone())
        })
    }

    pub fn empty() -> Stream<T> {
        Stream::from_supplier(false, std::iter::empty)
    }

    /// 无限重复`value`。
    pub fn repeat(value: T) -> Stream<T>
    where
        T: Clone,
    {
        Stream::from_supplier(true, move || std::iter::repeat(value.clone()))
    }

    pub fn repeat_n(value: T, count: usize) -> Stream<T>
    where
        T: Clone,
    {
        Stream::from_supplier(false, move || std::iter::repeat_n(value.clone(), count))
    }

    /// 无限流，每个元素由`supplier`生成。
    pub fn generate<F>(supplier: F) -> Stream<T>
    where
        F: Fn() -> T + 'static,
    {
        let supplier = Rc::new(supplier);
        Stream::from_supplier(true, move || {
            let supplier = Rc::clone(&supplier);
            std::iter::repeat_with(move || supplier())
        })
    }

    /// 无限流：`seed`、`f(seed)`、`f(f(seed))`……
    pub fn iterate<F>(seed: T, f: F) -> Stream<T>
    where
        T: Clone,
        F: Fn(&T) -> T + 'static,
    {
        let f = Rc::new(f);
        Stream::from_supplier(true, move || {
            let f = Rc::clone(&f);
            std::iter::successors(Some(seed.clone()), move |prev| Some(f(prev)))
        })
    }

    /// 先产出`first`的全部元素，再产出`second`的全部元素。
    pub fn concat(first: Stream<T>, second: Stream<T>) -> Stream<T> {
        let infinite = first.is_infinite() || second.is_infinite();
        Stream::new(infinite, move || Pipe::new(first.iter().chain(second.iter())))
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Stream<T> {
    fn from(values: Vec<T>) -> Self {
        Stream::of(values)
    }
}

impl Stream<Integer> {
    /// 从`start`开始逐一递增计数，标记为无限。
    pub fn count_from(start: Integer) -> Stream<Integer> {
        Stream::from_supplier(true, move || start..=Integer::MAX)
    }

    /// 左闭右开区间`[start, end)`。
    pub fn range(start: Integer, end: Integer) -> Stream<Integer> {
        Stream::from_supplier(false, move || start..end)
    }

    /// 按步长遍历`[start, end)`。
    ///
    /// 正步长从`start`向上；负步长从`end - 1`向下，不低于`start`；
    /// 步长为0且区间非空时无限重复`start`。
    pub fn range_step(start: Integer, end: Integer, step: Integer) -> Stream<Integer> {
        if step == 0 {
            return if start < end { Stream::repeat(start) } else { Stream::empty() };
        }
        Stream::from_supplier(false, move || RangeIter::new(start, end, step))
    }
}

#[derive(Debug, Eq, PartialEq)]
struct RangeIter {
    start: Integer,
    end: Integer,
    step: Integer,
    next: Option<Integer>,
}

impl RangeIter {
    fn new(start: Integer, end: Integer, step: Integer) -> RangeIter {
        let next = if start >= end {
            None
        } else if step > 0 {
            Some(start)
        } else {
            Some(end - 1)
        };
        RangeIter { start, end, step, next }
    }
}

impl Iterator for RangeIter {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_add(self.step).filter(|next| *next >= self.start && *next < self.end);
        Some(current)
    }
}
