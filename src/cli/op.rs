use crate::cli::condition::Condition;
use crate::cli::config::{Config, is_nocase};
use crate::cli::err::PpErr;
use cmd_help::CmdHelp;
use pullpipe::{Float, Stream, order};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fs::OpenOptions;
use std::io::Write;
use unicase::UniCase;

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Op {
    /* **************************************** 访问 **************************************** */
    /// :peek       打印每个经过的值到标准输出或文件。
    ///             :peek[ <file>[ append][ lf|crlf]]
    ///                 <file>  文件路径，可选。
    ///                 append  追加输出而不是覆盖，可选，如果未指定则覆盖源文件。
    ///                 lf|crlf 指定换行符为'LF'或'CRLF'，可选，如果未指定则默认使用'LF'。
    ///             例如：
    ///                 :peek
    ///                 :peek file.txt
    ///                 :peek file.txt append crlf
    Peek(PeekArg),
    /* **************************************** 转换 **************************************** */
    /// :upper      转为ASCII大写。
    /// :lower      转为ASCII小写。
    /// :case       切换ASCII大小写。
    Case(CaseArg),
    /* **************************************** 减少 **************************************** */
    /// :take       根据指定条件选择数据保留，其他数据丢弃。
    ///             :take <condition>
    ///                 <condition> 条件表达式，参考`-h cond`。
    /// :drop       根据指定条件选择数据丢弃，其他数据保留。
    ///             :drop <condition>
    ///                 <condition> 条件表达式，参考`-h cond`。
    ///             在无限流上使用只有有限个数据满足的条件时，之后的拉取将永不返回。
    TakeDrop { mode: TakeDropMode, cond: Condition },
    /// :limit      保留前N个数据，丢弃后续的其他数据，结果总是有限流。
    ///             :limit <count>
    ///                 <count> 需要保留的数量，必须为非负整数，必选。
    Limit { count: usize },
    /// :skip       丢弃前N个数据，保留后续的其他数据。
    ///             :skip <count>
    ///                 <count> 需要丢弃的数量，必须为非负整数，必选。
    Skip { count: usize },
    /// :uniq       去重，保留首次出现的数据。
    ///             :uniq[ nocase]
    ///                 nocase  去重时忽略大小写，可选，未指定时不忽略大小写。
    Uniq { nocase: bool },
    /* **************************************** 调整位置 **************************************** */
    /// :sort       稳定排序，仅支持有限流。
    ///             :sort[ num[ <default>]|nocase|random][ desc]
    ///                 num         按照数值排序，可选，未指定时按照字典序排序。
    ///                             尝试将文本解析为数值后排序，无法解析的按照<default>排序。
    ///                 <default>   无法解析为数值的文本的默认数值，可选，未指定时按照数值最大值处理。
    ///                 nocase      按字典序排序时忽略大小写，可选。
    ///                 random      随机排序，不支持逆序。
    ///                 desc        逆序排序，可选，未指定时正序排序。
    ///             例如：
    ///                 :sort
    ///                 :sort desc
    ///                 :sort nocase desc
    ///                 :sort num
    ///                 :sort num 10.5 desc
    ///                 :sort random
    Sort { sort_by: SortBy, desc: bool },
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum CaseArg {
    Upper,
    Lower,
    Switch,
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum PeekArg {
    StdOut,
    File { file: String, append: bool, crlf: Option<bool> },
}

#[derive(Debug, PartialEq)]
pub(crate) enum SortBy {
    Num(Option<Float>),
    Text(bool /*nocase*/),
    Random,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum TakeDropMode {
    Take,
    Drop,
}

impl Op {
    pub(crate) fn new_take_drop(mode: TakeDropMode, cond: Condition) -> Op {
        Op::TakeDrop { mode, cond }
    }
    pub(crate) fn new_sort(sort_by: SortBy, desc: bool) -> Op {
        Op::Sort { sort_by, desc }
    }

    /// 在`stream`之上叠加当前操作。
    ///
    /// 排序类操作遇到无限流时返回错误，其他操作保持或收紧上游的有限性。
    pub(crate) fn wrap(self, stream: Stream<String>, configs: &'static [Config]) -> Result<Stream<String>, PpErr> {
        match self {
            Op::Peek(PeekArg::StdOut) => Ok(stream.peek(|item| println!("{item}"))),
            Op::Peek(PeekArg::File { file, append, crlf }) => {
                match OpenOptions::new().write(true).truncate(!append).append(append).create(true).open(&file) {
                    Ok(writer) => {
                        let postfix = if crlf.unwrap_or(false) { "\r\n" } else { "\n" };
                        let writer = RefCell::new(writer);
                        Ok(stream.peek(move |item| {
                            if let Err(err) = write!(writer.borrow_mut(), "{item}{postfix}") {
                                PpErr::WriteToFileErr { file: file.clone(), item: item.clone(), err: err.to_string() }
                                    .termination()
                            }
                        }))
                    }
                    Err(err) => Err(PpErr::OpenFileErr { file, err: err.to_string() }),
                }
            }
            Op::Case(CaseArg::Upper) => Ok(stream.map(|item| item.to_ascii_uppercase())),
            Op::Case(CaseArg::Lower) => Ok(stream.map(|item| item.to_ascii_lowercase())),
            Op::Case(CaseArg::Switch) => Ok(stream.map(|item| {
                item.chars()
                    .map(|c| {
                        if c.is_ascii_uppercase() {
                            c.to_ascii_lowercase()
                        } else if c.is_ascii_lowercase() {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        }
                    })
                    .collect()
            })),
            Op::TakeDrop { mode, cond } => match mode {
                TakeDropMode::Take => Ok(stream.filter(move |item| cond.test(item))),
                TakeDropMode::Drop => Ok(stream.filter(move |item| !cond.test(item))),
            },
            Op::Limit { count } => Ok(stream.limit(count)),
            Op::Skip { count } => Ok(stream.skip(count)),
            Op::Uniq { nocase } => {
                if is_nocase(nocase, configs) {
                    Ok(stream.distinct_by_key(|item: &String| UniCase::new(item.clone())))
                } else {
                    Ok(stream.distinct())
                }
            }
            Op::Sort { sort_by, desc } => match sort_by {
                SortBy::Num(default) => sort(stream, order::num_text::<String>(default.unwrap_or(Float::MAX)), desc),
                SortBy::Text(nocase) => {
                    if is_nocase(nocase, configs) {
                        sort(stream, order::nocase::<String>(), desc)
                    } else {
                        sort(stream, order::natural::<String>(), desc)
                    }
                }
                SortBy::Random => Ok(stream.shuffled()?),
            },
        }
    }
}

fn sort<F>(stream: Stream<String>, comparator: F, desc: bool) -> Result<Stream<String>, PpErr>
where
    F: Fn(&String, &String) -> Ordering + 'static,
{
    if desc { Ok(stream.sorted(order::reverse(comparator))?) } else { Ok(stream.sorted(comparator)?) }
}
