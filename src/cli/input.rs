use crate::cli::config::{Config, skip_err};
use crate::cli::err::PpErr;
use crate::cli::fmt::fmt_integer;
use cmd_help::CmdHelp;
use pullpipe::{Integer, Stream};
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::rc::Rc;

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// :in         从标准输入读取输入。
    ///             未指定输入时的默认输入，视为有限流。
    StdIn,
    /// :file       从文件读取输入。
    ///             :file <file>|[ <file>[ <file>][...] ]
    ///                 <file>  文件路径，至少指定一个。
    ///             例如：
    ///                 :file input.txt
    ///                 :file [ input1.txt input2.txt input3.txt ]
    File { files: Vec<String> },
    /// :clip       从剪切板读取输入。
    #[cfg(windows)]
    Clip,
    /// :of         使用直接字面值作为输入。
    ///             :of <text>|[ <text>[ <text>][...] ]
    ///                 <text>  字面值，至少指定一个，如果以':'开头，需要使用'\:'转义。
    ///             例如：
    ///                 :of line
    ///                 :of [ line1 "line 2" 'line 3' ]
    Of { values: Vec<String> },
    /// :gen        生成指定范围内的整数作为输入，支持进一步格式化。
    ///             :gen <start>[,[<end>][,<step>]][ <fmt>]
    ///                 <start> 起始值，包含，必选。
    ///                 <end>   结束值，不包含，可选。
    ///                         未指定时生成无限流，不能再排序或计数。
    ///                         如果范围为空（起始值不小于结束值），则无数据生成。
    ///                 <step>  步长，不能为0，可选，未指定时取步长为1。
    ///                         如果步长为正值，从起始值正序生成；
    ///                         如果步长为负值，指定了结束值时从最后一个值逆序生成，
    ///                         未指定结束值时从起始值向下生成。
    ///                 <fmt>   格式化字符串，以{v}表示生成的整数值。
    ///             例如：
    ///                 :gen 0          生成：0 1 2 3 4 5 ...
    ///                 :gen 0,10       生成：0 1 2 3 4 5 6 7 8 9
    ///                 :gen 0,10,2     生成：0 2 4 6 8
    ///                 :gen 0,,2       生成：0 2 4 6 8 10 12 14 ...
    ///                 :gen 10,0       无数据生成
    ///                 :gen 0,10,-1    生成：9 8 7 6 5 4 3 2 1 0
    ///                 :gen 0,10 n{v}  生成：n0 n1 n2 n3 n4 n5 n6 n7 n8 n9
    ///                 :gen 0,3 "Hex of {v} is {v:#04x}" 生成：
    ///                                 "Hex of 0 is 0x00"
    ///                                 "Hex of 1 is 0x01"
    ///                                 "Hex of 2 is 0x02"
    Gen { start: Integer, end: Option<Integer>, step: Integer, fmt: Option<String> },
    /// :repeat     重复字面值作为输入。
    ///             :repeat <value>[ <count>]
    ///                 <value> 需要重复的字面值，必选。
    ///                 <count> 需要重复的次数，必须为非负数，可选，未指定时无限重复。
    Repeat { value: String, count: Option<usize> },
}

impl Input {
    pub(crate) fn new_std_in() -> Input {
        Input::StdIn
    }
    pub(crate) fn new_file(files: Vec<String>) -> Input {
        Input::File { files }
    }
    #[cfg(windows)]
    pub(crate) fn new_clip() -> Input {
        Input::Clip
    }
    pub(crate) fn new_of(values: Vec<String>) -> Input {
        Input::Of { values }
    }
    pub(crate) fn new_gen(start: Integer, end: Option<Integer>, step: Integer, fmt: Option<String>) -> Input {
        Input::Gen { start, end, step, fmt }
    }
    pub(crate) fn new_repeat(value: String, count: Option<usize>) -> Input {
        Input::Repeat { value, count }
    }

    pub(crate) fn into_stream(self, configs: &'static [Config]) -> Result<Stream<String>, PpErr> {
        match self {
            Input::StdIn => Ok(Stream::from_supplier(false, || io::stdin().lines().map_while(Result::ok))),
            Input::File { files } => Ok(Stream::from_supplier(false, move || read_files(files.clone(), configs))),
            #[cfg(windows)]
            Input::Clip => match clipboard_win::get_clipboard_string() {
                Ok(text) => Ok(Stream::of(text.lines().map(String::from).collect())),
                Err(err) => Err(PpErr::ReadClipboardTextErr(err.to_string())),
            },
            Input::Of { values } => Ok(Stream::of(values)),
            Input::Gen { start, end, step, fmt } => {
                let integers = gen_integers(start, end, step);
                match fmt {
                    Some(fmt) => {
                        // 格式串只在构造时校验一次，之后格式化不会失败
                        fmt_integer(&fmt, start)?;
                        Ok(integers.map(move |value| match fmt_integer(&fmt, value) {
                            Ok(string) => string,
                            Err(err) => err.termination(),
                        }))
                    }
                    None => Ok(integers.map(|value| value.to_string())),
                }
            }
            Input::Repeat { value, count } => Ok(match count {
                Some(count) => Stream::repeat_n(value, count),
                None => Stream::repeat(value),
            }),
        }
    }
}

fn gen_integers(start: Integer, end: Option<Integer>, step: Integer) -> Stream<Integer> {
    match end {
        Some(end) => Stream::range_step(start, end, step),
        None if step == 1 => Stream::count_from(start),
        None if step > 0 => Stream::from_supplier(true, move || (start..=Integer::MAX).step_by(step as usize)),
        None => Stream::from_supplier(true, move || {
            (Integer::MIN..=start).rev().step_by(step.unsigned_abs() as usize)
        }),
    }
}

fn read_files(files: Vec<String>, configs: &'static [Config]) -> impl Iterator<Item = String> {
    files
        .into_iter()
        .filter_map(move |file| match File::open(&file) {
            Ok(fin) => Some((BufReader::new(fin), Rc::new(file))),
            Err(err) => {
                if skip_err(configs) {
                    None
                } else {
                    PpErr::OpenFileErr { file, err: err.to_string() }.termination()
                }
            }
        })
        .flat_map(move |(reader, file)| {
            reader.lines().enumerate().filter_map(move |(line_no, line)| match line {
                Ok(line) => Some(line),
                Err(err) => {
                    if skip_err(configs) {
                        None
                    } else {
                        PpErr::ReadFromFileErr { file: (*file).clone(), line_no: line_no + 1, err: err.to_string() }
                            .termination()
                    }
                }
            })
        })
}
