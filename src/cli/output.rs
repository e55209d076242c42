use crate::cli::err::PpErr;
use crate::println_notice;
use cmd_help::CmdHelp;
use pullpipe::Stream;
use std::fs::OpenOptions;
use std::io;
use std::io::{BufWriter, Write};

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// :to out     输出到标准输出。
    ///             未指定输出时的默认输出，可以用于无限流。
    StdOut,
    /// :to file    输出到文件。
    ///             :to file <file>[ append][ lf|crlf]
    ///                 <file>  文件路径，必选。
    ///                 append  追加输出而不是覆盖，可选，如果未指定则覆盖源文件。
    ///                 lf|crlf 指定换行符为'LF'或'CRLF'，可选，如果未指定则默认使用'LF'。
    ///             例如：
    ///                 :to file out.txt
    ///                 :to file out.txt append crlf
    File { file: String, append: bool, crlf: Option<bool> },
    /// :to clip    输出到剪切板，仅支持有限流。
    #[cfg(windows)]
    Clip,
    /// :count      统计数据数量并输出到标准输出，仅支持有限流。
    Count,
}

impl Output {
    pub(crate) fn new_std_out() -> Output {
        Output::StdOut
    }
    pub(crate) fn new_file(file: String, append: bool, crlf: Option<bool>) -> Output {
        Output::File { file, append, crlf }
    }
    #[cfg(windows)]
    pub(crate) fn new_clip() -> Output {
        Output::Clip
    }
    pub(crate) fn new_count() -> Output {
        Output::Count
    }

    /// 构造时检查输出对流的有限性要求，无需消耗流。
    pub(crate) fn check(&self, stream: &Stream<String>) -> Result<(), PpErr> {
        match self {
            Output::StdOut | Output::File { .. } => Ok(()),
            #[cfg(windows)]
            Output::Clip => Ok(stream.assert_finite("to clip")?),
            Output::Count => Ok(stream.assert_finite("count")?),
        }
    }

    pub(crate) fn handle(self, stream: Stream<String>) -> Result<(), PpErr> {
        match self {
            Output::StdOut => {
                let mut out = io::stdout().lock();
                let res = stream.try_for_each(|item| writeln!(out, "{item}"));
                match res {
                    Err(err) if err.kind() != io::ErrorKind::BrokenPipe => {
                        Err(PpErr::WriteToStdOutErr(err.to_string()))
                    }
                    _ => Ok(()),
                }
            }
            Output::File { file, append, crlf } => {
                let writer =
                    match OpenOptions::new().write(true).truncate(!append).append(append).create(true).open(&file) {
                        Ok(writer) => writer,
                        Err(err) => return Err(PpErr::OpenFileErr { file, err: err.to_string() }),
                    };
                let mut writer = BufWriter::new(writer);
                let postfix = if crlf.unwrap_or(false) { "\r\n" } else { "\n" };
                stream.try_for_each(|item| match write!(writer, "{item}{postfix}") {
                    Ok(()) => Ok(()),
                    Err(err) => Err(PpErr::WriteToFileErr { file: file.clone(), item, err: err.to_string() }),
                })?;
                writer
                    .flush()
                    .map_err(|err| PpErr::WriteToFileErr { file, item: String::new(), err: err.to_string() })
            }
            #[cfg(windows)]
            Output::Clip => {
                let text = stream.join("\n")?;
                clipboard_win::set_clipboard_string(&text).map_err(|err| PpErr::WriteToClipboardErr(err.to_string()))
            }
            Output::Count => {
                println_notice!("{}", stream.count()?);
                Ok(())
            }
        }
    }
}
