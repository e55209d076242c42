use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum StreamErr {
    /// 需要完整物化上游的操作被用于无限流。
    #[error("[Infinite Stream] Operation `{op}` requires a finite stream")]
    InfiniteStream { op: &'static str },
}
