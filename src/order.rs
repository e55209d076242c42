//! 比较器工具，供[`Stream::sorted`](crate::Stream::sorted)等使用。
//!
//! 比较器即任意`Fn(&T, &T) -> Ordering`，这里提供常用的构造与组合方式。

use crate::Float;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use unicase::UniCase;

/// 自然顺序。
pub fn natural<T: Ord>() -> impl Fn(&T, &T) -> Ordering + Clone {
    |a, b| a.cmp(b)
}

/// 逆序。
pub fn reverse<T, C>(comparator: C) -> impl Fn(&T, &T) -> Ordering
where
    C: Fn(&T, &T) -> Ordering,
{
    move |a, b| comparator(b, a)
}

/// 按`key`提取的键的自然顺序比较。
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}

/// 先按`first`比较，相等时再按`second`比较。
pub fn then<T, A, B>(first: A, second: B) -> impl Fn(&T, &T) -> Ordering
where
    A: Fn(&T, &T) -> Ordering,
    B: Fn(&T, &T) -> Ordering,
{
    move |a, b| first(a, b).then_with(|| second(a, b))
}

/// 浮点数全序，`NaN`大于所有其他值。
pub fn float() -> impl Fn(&Float, &Float) -> Ordering + Clone {
    |a, b| OrderedFloat(*a).cmp(&OrderedFloat(*b))
}

/// 忽略大小写的文本顺序。
pub fn nocase<T: AsRef<str>>() -> impl Fn(&T, &T) -> Ordering + Clone {
    |a, b| UniCase::new(a.as_ref()).cmp(&UniCase::new(b.as_ref()))
}

/// 将文本解析为数值后比较，无法解析的文本按`default`处理。
pub fn num_text<T: AsRef<str>>(default: Float) -> impl Fn(&T, &T) -> Ordering + Clone {
    move |a, b| parse_or(a.as_ref(), default).cmp(&parse_or(b.as_ref(), default))
}

fn parse_or(text: &str, default: Float) -> OrderedFloat<Float> {
    OrderedFloat(text.trim().parse().unwrap_or(default))
}
