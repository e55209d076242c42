//! 命令行前端：解析流水线表达式并组装为[`Stream`]。

pub(crate) mod condition;
pub(crate) mod config;
pub(crate) mod err;
pub(crate) mod fmt;
pub(crate) mod help;
pub(crate) mod input;
pub(crate) mod op;
pub(crate) mod output;
pub(crate) mod parse;
pub(crate) mod print;

use crate::cli::config::Config;
use crate::cli::err::PpErr;
use crate::cli::input::Input;
use crate::cli::op::Op;
use crate::cli::output::Output;
use crate::println_info;
use pullpipe::Stream;

/// 依次叠加输入、操作，并检查输出对有限性的要求。
///
/// 任何一步遇到无限流上的排序或计数都会在这里失败，此时还没有拉取任何数据。
pub(crate) fn build_pipeline(
    input: Input, ops: Vec<Op>, output: &Output, configs: &'static [Config],
) -> Result<Stream<String>, PpErr> {
    let verbose = configs.contains(&Config::Verbose);
    if verbose {
        println_info!("Input:");
        println_info!("    {input:?}");
    }
    let mut stream = input.into_stream(configs)?;
    if verbose {
        println_info!("    => {}", finiteness(&stream));
        println_info!("Op:");
    }
    for op in ops {
        if verbose {
            println_info!("    {op:?}");
        }
        stream = op.wrap(stream, configs)?;
        if verbose {
            println_info!("    => {}", finiteness(&stream));
        }
    }
    if verbose {
        println_info!("Output:");
        println_info!("    {output:?}");
    }
    output.check(&stream)?;
    Ok(stream)
}

fn finiteness(stream: &Stream<String>) -> &'static str {
    if stream.is_infinite() { "infinite" } else { "finite" }
}
