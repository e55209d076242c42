use crate::cli::err::PpErr;
use crate::cli::input::Input;
use crate::cli::op::Op;
use crate::cli::output::Output;
use crate::cli::parse::input::parse_input;
use crate::cli::parse::op::parse_ops;
use crate::cli::parse::output::parse_output;
use nom::{IResult, Parser};
use nom_language::error::{VerboseError, convert_error};

mod base;
mod condition;
mod input;
mod op;
mod output;

pub(in crate::cli) type ParserError<'a> = VerboseError<&'a str>;
pub(in crate::cli) type ParserResult<'a, O> = IResult<&'a str, O, ParserError<'a>>;

/// 将命令行参数拼接为待解析的表达式，每个参数后跟一个空格，空参数或包含空白字符的参数加引号。
pub(crate) fn join_args(args: impl Iterator<Item = String>) -> String {
    args.map(|arg| {
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            if arg.contains('"') { format!("'{arg}' ") } else { format!("\"{arg}\" ") }
        } else {
            format!("{arg} ")
        }
    })
    .collect()
}

/// 解析完整的流水线表达式：`[<input>][ <op>][...][ <output>]`。
pub(crate) fn parse_token(token: &str) -> Result<(Input, Vec<Op>, Output), PpErr> {
    match (parse_input, parse_ops, parse_output).parse(token) {
        Ok(("", pipeline)) => Ok(pipeline),
        Ok((remaining, _)) => Err(PpErr::UnexpectedRemaining(remaining.trim_end().to_string())),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(PpErr::ParseTokenErr(convert_error(token, err))),
        Err(nom::Err::Incomplete(_)) => Err(PpErr::ParseTokenErr("incomplete expression".to_string())),
    }
}
