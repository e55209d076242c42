//! 惰性、按需拉取的序列流水线。
//!
//! 流水线由一个元素源和若干阶段组成，每个阶段包装上游的拉取迭代器（[`Pipe`]），
//! 只在下游请求时才向上游拉取元素。每条流水线（[`Stream`]）在构造时计算有限性标记，
//! 需要完整物化上游的阶段（排序、乱序）在构造时即拒绝无限流。
//!
//! ```
//! use pullpipe::Stream;
//!
//! let stream = Stream::count_from(0).filter(|x| x % 2 == 0).map(|x| x * 10).limit(3);
//! assert!(stream.is_finite());
//! assert_eq!(stream.to_vec().unwrap(), vec![0, 20, 40]);
//!
//! assert!(Stream::count_from(0).sorted(|a: &i64, b: &i64| a.cmp(b)).is_err());
//! ```

pub mod err;
pub mod order;
pub mod pipe;
pub mod source;
pub mod stage;
pub mod stream;
pub mod terminal;

pub use err::StreamErr;
pub use pipe::Pipe;
pub use stream::Stream;

/// 整数类型
pub type Integer = i64;

/// 浮点类型
pub type Float = f64;

pub type StreamRes<T> = Result<Stream<T>, StreamErr>;
