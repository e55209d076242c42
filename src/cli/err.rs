use crate::println_err;
use pullpipe::StreamErr;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum PpErr {
    #[error("[Token] Invalid pipeline expression:\n{0}")]
    ParseTokenErr(String),

    #[error("[Bad Arg] Unexpected remaining value `{0}`")]
    UnexpectedRemaining(String),

    #[error("[Bad Arg] Invalid format string `{fmt}`: {err}")]
    InvalidFormat { fmt: String, err: String },

    #[error("[Help] Unknown help topic `{0}`, available topics: input, op, cond, output")]
    UnknownHelpTopic(String),

    #[error(transparent)]
    Stream(#[from] StreamErr),

    #[cfg_attr(not(windows), allow(dead_code))]
    #[error("[Input] Read text from clipboard error: {0}")]
    ReadClipboardTextErr(String),

    #[error("[Input] Open file `{file}` error: {err}")]
    OpenFileErr { file: String, err: String },

    #[error("[Input] Read line `{line_no}` of file `{file}` error: {err}")]
    ReadFromFileErr { file: String, line_no: usize, err: String },

    #[cfg_attr(not(windows), allow(dead_code))]
    #[error("[Output] Write result to clipboard error: {0}")]
    WriteToClipboardErr(String),

    #[error("[Output] Write item `{item}` to file `{file}` error: {err}")]
    WriteToFileErr { file: String, item: String, err: String },

    #[error("[Output] Write to stdout error: {0}")]
    WriteToStdOutErr(String),
}

impl Termination for PpErr {
    fn report(self) -> ExitCode {
        println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl PpErr {
    /// 打印错误并以对应的退出码结束进程，用于惰性求值过程中无法向上传递的错误。
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            PpErr::ParseTokenErr(_) => 1,
            PpErr::UnexpectedRemaining(_) => 2,
            PpErr::InvalidFormat { .. } => 3,
            PpErr::UnknownHelpTopic(_) => 4,
            PpErr::Stream(StreamErr::InfiniteStream { .. }) => 5,
            PpErr::ReadClipboardTextErr(_) => 6,
            PpErr::OpenFileErr { .. } => 7,
            PpErr::ReadFromFileErr { .. } => 8,
            PpErr::WriteToClipboardErr(_) => 9,
            PpErr::WriteToFileErr { .. } => 10,
            PpErr::WriteToStdOutErr(_) => 11,
        }
    }
}
