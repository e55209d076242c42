use crate::cli::op::{CaseArg, Op, PeekArg, SortBy, TakeDropMode};
use crate::cli::parse::base::{file_info, parse_float};
use crate::cli::parse::condition::parse_cond;
use crate::cli::parse::ParserResult;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{space1, usize};
use nom::combinator::{cut, map, opt, value};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::Parser;

pub(in crate::cli::parse) fn parse_ops(input: &str) -> ParserResult<'_, Vec<Op>> {
    context(
        "Op",
        many0(alt((
            parse_peek,
            parse_case,
            parse_take_drop,
            parse_limit,
            parse_skip,
            parse_uniq,
            parse_sort,
        ))),
    )
    .parse(input)
}

fn parse_peek(input: &str) -> ParserResult<'_, Op> {
    context(
        "Op::Peek",
        map(
            terminated(
                preceded(
                    tag_no_case(":peek"),             // 丢弃命令
                    opt(preceded(space1, file_info)), // 可选文件信息
                ),
                space1, // 结尾空格
            ),
            |file_info| match file_info {
                Some((file, append, crlf)) => Op::Peek(PeekArg::File { file, append, crlf }),
                None => Op::Peek(PeekArg::StdOut),
            },
        ),
    )
    .parse(input)
}

fn parse_case(input: &str) -> ParserResult<'_, Op> {
    context(
        "Op::Case",
        map(
            terminated(
                alt((
                    value(CaseArg::Upper, tag_no_case(":upper")),
                    value(CaseArg::Lower, tag_no_case(":lower")),
                    value(CaseArg::Switch, tag_no_case(":case")),
                )),
                space1,
            ),
            Op::Case,
        ),
    )
    .parse(input)
}

fn parse_take_drop(input: &str) -> ParserResult<'_, Op> {
    context(
        "Op::TakeDrop",
        map(
            (
                terminated(
                    alt((
                        value(TakeDropMode::Take, tag_no_case(":take")),
                        value(TakeDropMode::Drop, tag_no_case(":drop")),
                    )),
                    space1,
                ),
                cut(parse_cond),
            ),
            |(mode, cond)| Op::new_take_drop(mode, cond),
        ),
    )
    .parse(input)
}

fn parse_limit(input: &str) -> ParserResult<'_, Op> {
    context(
        "Op::Limit",
        map(preceded((tag_no_case(":limit"), space1), cut(terminated(usize, space1))), |count| Op::Limit { count }),
    )
    .parse(input)
}

fn parse_skip(input: &str) -> ParserResult<'_, Op> {
    context(
        "Op::Skip",
        map(preceded((tag_no_case(":skip"), space1), cut(terminated(usize, space1))), |count| Op::Skip { count }),
    )
    .parse(input)
}

fn parse_uniq(input: &str) -> ParserResult<'_, Op> {
    context(
        "Op::Uniq",
        map(
            terminated(
                preceded(
                    tag_no_case(":uniq"),                         // 丢弃：命令
                    opt(preceded(space1, tag_no_case("nocase"))), // 可选：空格+nocase选项
                ),
                space1, // 丢弃：结尾空格
            ),
            |nocase| Op::Uniq { nocase: nocase.is_some() },
        ),
    )
    .parse(input)
}

fn parse_sort(input: &str) -> ParserResult<'_, Op> {
    context(
        "Op::Sort",
        map(
            terminated(
                preceded(
                    tag_no_case(":sort"), // 丢弃：命令
                    alt((
                        // case 1：按数值排序，可选默认值
                        (
                            map(
                                preceded((space1, tag_no_case("num")), opt(preceded(space1, parse_float))),
                                SortBy::Num,
                            ),
                            parse_desc,
                        ),
                        // case 2：随机排序
                        map((space1, tag_no_case("random")), |_| (SortBy::Random, false)),
                        // case 3：按字典序排序（默认）
                        (map(opt((space1, tag_no_case("nocase"))), |nocase| SortBy::Text(nocase.is_some())), parse_desc),
                    )),
                ),
                space1, // 结尾空格
            ),
            |(sort_by, desc)| Op::new_sort(sort_by, desc),
        ),
    )
    .parse(input)
}

fn parse_desc(input: &str) -> ParserResult<'_, bool> {
    map(opt((space1, tag_no_case("desc"))), |desc| desc.is_some()).parse(input)
}
