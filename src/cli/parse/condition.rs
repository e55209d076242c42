use crate::cli::condition::{Condition, Pattern, Select};
use crate::cli::parse::base::{arg, parse_float};
use crate::cli::parse::{ParserError, ParserResult};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, space1, usize};
use nom::combinator::{map, map_res, opt, value, verify};
use nom::error::context;
use nom::sequence::{preceded, terminated};
use nom::Parser;

/// 条件：`[!]<select> `，包含结尾空格。
pub(in crate::cli::parse) fn parse_cond(input: &str) -> ParserResult<'_, Condition> {
    context(
        "Condition",
        map(
            terminated((opt(char('!')), parse_select), space1),
            |(not, select)| Condition::new(select, not.is_some()),
        ),
    )
    .parse(input)
}

fn parse_select(input: &str) -> ParserResult<'_, Select> {
    alt((
        context(
            "Select::TextLenRange",
            map(preceded((tag_no_case("len"), space1), parse_range(usize)), |(min, max)| {
                Select::TextLenRange { min, max }
            }),
        ),
        context(
            "Select::TextLenSpec",
            map(preceded((tag_no_case("len"), space1), usize), |spec| Select::TextLenSpec { spec }),
        ),
        context(
            "Select::NumRange",
            map(preceded((tag_no_case("num"), space1), parse_range(parse_float)), |(min, max)| {
                Select::NumRange { min, max }
            }),
        ),
        context(
            "Select::Num",
            map(
                preceded(
                    tag_no_case("num"),
                    opt(preceded(
                        space1,
                        alt((value(true, tag_no_case("integer")), value(false, tag_no_case("float")))),
                    )),
                ),
                |integer| Select::Num { integer },
            ),
        ),
        context("Select::TextAllCase", map(parse_2_choice("upper", "lower"), |upper| Select::TextAllCase { upper })),
        context("Select::Ascii", map(parse_2_choice("ascii", "nonascii"), |ascii| Select::Ascii { ascii })),
        context(
            "Select::TextEmptyOrBlank",
            map(parse_2_choice("empty", "blank"), |empty| Select::TextEmptyOrBlank { empty }),
        ),
        context(
            "Select::RegMatch",
            map(preceded((tag_no_case("reg"), space1), map_res(arg, |exp| Pattern::new(&exp))), |pattern| {
                Select::RegMatch { pattern }
            }),
        ),
    ))
    .parse(input)
}

/// 范围：`[<min>],[<max>]`，至少指定其一。
fn parse_range<'a, T, F>(bound: F) -> impl Parser<&'a str, Output = (Option<T>, Option<T>), Error = ParserError<'a>>
where
    F: Parser<&'a str, Output = T, Error = ParserError<'a>> + Clone,
{
    map(
        verify((opt(bound.clone()), char(','), opt(bound)), |(min, _, max)| min.is_some() || max.is_some()),
        |(min, _, max)| (min, max),
    )
}

/// 二选一，选中第一个时为`true`。
fn parse_2_choice<'a>(
    first: &'static str, second: &'static str,
) -> impl Parser<&'a str, Output = bool, Error = ParserError<'a>> {
    alt((value(true, tag_no_case(first)), value(false, tag_no_case(second))))
}
