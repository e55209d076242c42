use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

/// 拉取迭代器。
///
/// 每次调用[`Iterator::next`]要么产出下一个元素，要么返回`None`表示已耗尽。
/// 内部迭代器在构造时统一经过[`Iterator::fuse`]，耗尽后的每次调用都稳定返回`None`。
pub struct Pipe<T> {
    iter: Box<dyn Iterator<Item = T>>,
}

impl<T> Pipe<T> {
    pub fn new(iter: impl Iterator<Item = T> + 'static) -> Pipe<T> {
        Pipe { iter: Box::new(iter.fuse()) }
    }

    /// 已耗尽的迭代器。
    pub fn finished() -> Pipe<T>
    where
        T: 'static,
    {
        Pipe::new(std::iter::empty())
    }
}

impl<T> Iterator for Pipe<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> FusedIterator for Pipe<T> {}

impl<T> Debug for Pipe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipe").finish_non_exhaustive()
    }
}
