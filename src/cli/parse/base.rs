use crate::cli::parse::{ParserError, ParserResult};
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_until, take_while1};
use nom::character::complete::{char, i64, space1};
use nom::combinator::{map, map_res, not, opt, recognize, value, verify};
use nom::error::context;
use nom::multi::many1;
use nom::sequence::{delimited, preceded, terminated};
use nom::Parser;
use pullpipe::{Float, Integer};

/// 解析单个参数：
///  - `"arg"`或`'arg'`：带引号的参数，可以包含空白字符，可以为空；
///  - `arg`：不带引号的参数，不能是单独的`[`或`]`，以`\[`、`\]`、`\:`开头时去除转义符。
pub(in crate::cli::parse) fn arg(input: &str) -> ParserResult<'_, String> {
    context(
        "<arg>",
        alt((
            map(delimited(char('"'), take_until("\""), char('"')), String::from), // 双引号
            map(delimited(char('\''), take_until("'"), char('\'')), String::from), // 单引号
            map(
                verify(take_while1(|c: char| !c.is_whitespace()), |arg: &str| arg != "[" && arg != "]"),
                unescape,
            ),
        )),
    )
    .parse(input)
}

/// 解析单个参数，不带引号时不能以`:`开头，避免吞掉后续命令。
pub(in crate::cli::parse) fn arg_exclude_cmd(input: &str) -> ParserResult<'_, String> {
    preceded(not(char(':')), arg).parse(input)
}

fn unescape(arg: &str) -> String {
    match arg.strip_prefix('\\') {
        Some(rest) if rest.starts_with([':', '[', ']']) => rest.to_string(),
        _ => arg.to_string(),
    }
}

/// 构造一个解析器，支持解析：
///  - `cmd arg `：命令+单个参数；
///  - `cmd [ arg ] `：命令+单个参数，中括号包围；
///  - `cmd [ arg0 arg1 ] `：命令+一个以上的参数，中括号包围。
pub(in crate::cli::parse) fn cmd_arg_or_args1<'a>(
    cmd: &'static str,
) -> impl Parser<&'a str, Output = Vec<String>, Error = ParserError<'a>> {
    preceded(
        (tag_no_case(cmd), space1),
        alt((
            map(terminated(arg_exclude_cmd, space1), |arg| vec![arg]),
            delimited((char('['), space1), many1(terminated(arg_exclude_cmd, space1)), (char(']'), space1)),
        )),
    )
}

/// 文件信息：`<file>[ append][ lf|crlf]`
pub(in crate::cli::parse) fn file_info(input: &str) -> ParserResult<'_, (String, bool, Option<bool>)> {
    context(
        "<file>[ append][ lf|crlf]",
        map(
            (
                arg_exclude_cmd,
                opt(preceded(space1, tag_no_case("append"))),
                opt(preceded(space1, alt((value(true, tag_no_case("crlf")), value(false, tag_no_case("lf")))))),
            ),
            |(file, append, crlf)| (file, append.is_some(), crlf),
        ),
    )
    .parse(input)
}

pub(in crate::cli::parse) fn parse_integer(input: &str) -> ParserResult<'_, Integer> {
    i64(input)
}

pub(in crate::cli::parse) fn parse_float(input: &str) -> ParserResult<'_, Float> {
    map_res(
        recognize(take_while1(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))),
        str::parse::<Float>,
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg() {
        assert_eq!(arg("hello"), Ok(("", "hello".to_string())));
        assert_eq!(arg("hello world"), Ok((" world", "hello".to_string())));
        assert_eq!(arg(r#""hello " world"#), Ok((" world", "hello ".to_string())));
        assert_eq!(arg("'a \"b\"' "), Ok((" ", "a \"b\"".to_string())));
        assert_eq!(arg(r#""" "#), Ok((" ", String::new())));
        assert_eq!(arg(r"\[ "), Ok((" ", "[".to_string())));
        assert_eq!(arg(r"\:of "), Ok((" ", ":of".to_string())));
        assert_eq!(arg(r"\n "), Ok((" ", r"\n".to_string())));
        assert!(arg("[ ").is_err());
        assert!(arg("] ").is_err());
        assert!(arg(" a").is_err());
    }

    #[test]
    fn test_arg_exclude_cmd() {
        assert!(arg_exclude_cmd(":upper ").is_err());
        assert_eq!(arg_exclude_cmd(r"\:upper "), Ok((" ", ":upper".to_string())));
        assert_eq!(arg_exclude_cmd(r#"":upper x" "#), Ok((" ", ":upper x".to_string())));
    }

    #[test]
    fn test_cmd_arg_or_args1() {
        assert_eq!(cmd_arg_or_args1(":of").parse(":of arg "), Ok(("", vec!["arg".to_string()])));
        assert_eq!(cmd_arg_or_args1(":of").parse(":OF [ arg ] "), Ok(("", vec!["arg".to_string()])));
        assert_eq!(
            cmd_arg_or_args1(":of").parse(r#":of [ arg "arg 1" ] "#),
            Ok(("", vec!["arg".to_string(), "arg 1".to_string()]))
        );
        assert_eq!(
            cmd_arg_or_args1(":of").parse(r":of [ \[ \] ] "),
            Ok(("", vec!["[".to_string(), "]".to_string()]))
        );
        assert!(cmd_arg_or_args1(":of").parse(":of ").is_err());
        assert!(cmd_arg_or_args1(":of").parse(":of [ arg ").is_err());
        assert!(cmd_arg_or_args1(":of").parse(":of [ ] ").is_err());
        assert!(cmd_arg_or_args1(":of").parse(":of ] ").is_err());
        assert!(cmd_arg_or_args1(":of").parse(":of :upper ").is_err());
    }

    #[test]
    fn test_file_info() {
        assert_eq!(file_info("out.txt "), Ok((" ", ("out.txt".to_string(), false, None))));
        assert_eq!(file_info("out.txt append crlf "), Ok((" ", ("out.txt".to_string(), true, Some(true)))));
        assert_eq!(file_info("out.txt lf "), Ok((" ", ("out.txt".to_string(), false, Some(false)))));
        assert_eq!(file_info("out.txt :upper "), Ok((" :upper ", ("out.txt".to_string(), false, None))));
        assert!(file_info(":upper ").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_integer("-12,"), Ok((",", -12)));
        assert!(parse_integer("a").is_err());
        assert_eq!(parse_float("10.5 "), Ok((" ", 10.5)));
        assert_eq!(parse_float("-1e3,"), Ok((",", -1000.0)));
        assert!(parse_float("desc").is_err());
        assert!(parse_float("1.2.3").is_err());
    }
}
