use crate::cli::output::Output;
use crate::cli::parse::base::file_info;
use crate::cli::parse::ParserResult;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::space1;
use nom::combinator::{cut, map, success};
use nom::error::context;
use nom::sequence::{preceded, terminated};
use nom::Parser;

pub(in crate::cli::parse) fn parse_output(input: &str) -> ParserResult<'_, Output> {
    context(
        "Output",
        alt((
            parse_to_out,
            parse_to_file,
            parse_to_clip,
            parse_count,
            map(success(()), |_| Output::new_std_out()), // 最后默认输出到标准输出
        )),
    )
    .parse(input)
}

fn parse_to_out(input: &str) -> ParserResult<'_, Output> {
    context("Output::StdOut", map((tag_no_case(":to"), space1, tag_no_case("out"), space1), |_| Output::new_std_out()))
        .parse(input)
}

fn parse_to_file(input: &str) -> ParserResult<'_, Output> {
    context(
        "Output::File",
        map(
            preceded(
                (tag_no_case(":to"), space1, tag_no_case("file"), space1), // 丢弃：`:to file `
                cut(terminated(file_info, space1)),
            ),
            |(file, append, crlf)| Output::new_file(file, append, crlf),
        ),
    )
    .parse(input)
}

#[cfg(windows)]
fn parse_to_clip(input: &str) -> ParserResult<'_, Output> {
    context("Output::Clip", map((tag_no_case(":to"), space1, tag_no_case("clip"), space1), |_| Output::new_clip()))
        .parse(input)
}

#[cfg(not(windows))]
fn parse_to_clip(input: &str) -> ParserResult<'_, Output> {
    use nom::error::{ErrorKind, ParseError};
    Err(nom::Err::Error(ParseError::from_error_kind(input, ErrorKind::Fail)))
}

fn parse_count(input: &str) -> ParserResult<'_, Output> {
    context("Output::Count", map((tag_no_case(":count"), space1), |_| Output::new_count())).parse(input)
}
