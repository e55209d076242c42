use crate::cli::input::Input;
use crate::cli::parse::base::{arg_exclude_cmd, cmd_arg_or_args1, parse_integer};
use crate::cli::parse::ParserResult;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, space1, usize};
use nom::combinator::{cut, map, opt, success, verify};
use nom::error::context;
use nom::sequence::{preceded, terminated};
use nom::Parser;

pub(in crate::cli::parse) fn parse_input(input: &str) -> ParserResult<'_, Input> {
    context(
        "Input",
        alt((
            parse_std_in,
            parse_file,
            parse_clip,
            parse_of,
            parse_gen,
            parse_repeat,
            context("Input::StdIn", map(success(()), |_| Input::new_std_in())), // 默认从标准输入获取
        )),
    )
    .parse(input)
}

fn parse_std_in(input: &str) -> ParserResult<'_, Input> {
    context("Input::StdIn", map((tag_no_case(":in"), space1), |_| Input::new_std_in())).parse(input)
}

fn parse_file(input: &str) -> ParserResult<'_, Input> {
    context("Input::File", map(cmd_arg_or_args1(":file"), Input::new_file)).parse(input)
}

#[cfg(windows)]
fn parse_clip(input: &str) -> ParserResult<'_, Input> {
    context("Input::Clip", map((tag_no_case(":clip"), space1), |_| Input::new_clip())).parse(input)
}

#[cfg(not(windows))]
fn parse_clip(input: &str) -> ParserResult<'_, Input> {
    use nom::error::{ErrorKind, ParseError};
    Err(nom::Err::Error(ParseError::from_error_kind(input, ErrorKind::Fail)))
}

fn parse_of(input: &str) -> ParserResult<'_, Input> {
    context("Input::Of", map(cmd_arg_or_args1(":of"), Input::new_of)).parse(input)
}

/// `:gen <start>[,[<end>][,<step>]][ <fmt>] `
fn parse_gen(input: &str) -> ParserResult<'_, Input> {
    context(
        "Input::Gen",
        map(
            preceded(
                (tag_no_case(":gen"), space1), // 丢弃：命令+空格
                cut(terminated(
                    (
                        parse_integer, // 起始值
                        opt(preceded(
                            char(','),
                            (
                                opt(parse_integer),                                                // 结束值
                                opt(preceded(char(','), verify(parse_integer, |step| *step != 0))), // 步长
                            ),
                        )),
                        opt(preceded(space1, arg_exclude_cmd)), // 格式化字符串
                    ),
                    space1, // 丢弃：结尾空格
                )),
            ),
            |(start, range, fmt)| {
                let (end, step) = range.unwrap_or((None, None));
                Input::new_gen(start, end, step.unwrap_or(1), fmt)
            },
        ),
    )
    .parse(input)
}

fn parse_repeat(input: &str) -> ParserResult<'_, Input> {
    context(
        "Input::Repeat",
        map(
            preceded(
                (tag_no_case(":repeat"), space1), // 丢弃：命令+空格
                cut(terminated(
                    (arg_exclude_cmd, opt(preceded(space1, usize))), // 保留：重复的值和可选的次数
                    space1,                                          // 丢弃：结尾空格
                )),
            ),
            |(value, count)| Input::new_repeat(value, count),
        ),
    )
    .parse(input)
}
