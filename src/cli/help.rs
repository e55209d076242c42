use crate::cli::condition::Select;
use crate::cli::err::PpErr;
use crate::cli::input::Input;
use crate::cli::op::Op;
use crate::cli::output::Output;

const USAGE: &str = "\
Usage: pp [<config>][...] [<input>] [<op>][...] [<output>]

Config:
    -h, --help[ <topic>]    打印帮助信息，<topic>可选：input、op、cond、output。
    -V, --version           打印版本信息。
    -v, --verbose           执行前打印流水线信息。
    -d, --dry-run           仅解析并构造流水线，不执行。
        --nocase            全局忽略大小写。
    -s, --skip-err          跳过无法读取的输入文件。";

/// 打印帮助信息，未指定主题时打印全部命令摘要。
pub(crate) fn print_help(topic: Option<&str>) -> Result<(), PpErr> {
    match topic {
        None => {
            println!("{USAGE}");
            print_section("Input", Input::all_usage());
            print_section("Op", Op::all_usage());
            print_section("Condition", Select::all_usage());
            print_section("Output", Output::all_usage());
        }
        Some(topic) => match section_of(topic) {
            Some((title, docs)) => print_section(title, docs),
            None => return Err(PpErr::UnknownHelpTopic(topic.to_string())),
        },
    }
    Ok(())
}

fn section_of(topic: &str) -> Option<(&'static str, &'static [&'static str])> {
    match topic.to_ascii_lowercase().as_str() {
        "input" => Some(("Input", Input::all_help())),
        "op" => Some(("Op", Op::all_help())),
        "cond" | "condition" => Some(("Condition", Select::all_help())),
        "output" => Some(("Output", Output::all_help())),
        _ => None,
    }
}

fn print_section(title: &str, docs: &[&str]) {
    println!();
    println!("{title}:");
    for line in docs.iter().flat_map(|doc| doc.lines()) {
        println!("    {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_of() {
        assert_eq!(section_of("OP").map(|(title, _)| title), Some("Op"));
        assert_eq!(section_of("condition").map(|(title, _)| title), Some("Condition"));
        assert!(section_of("fmt").is_none());
        assert_eq!(print_help(Some("what")), Err(PpErr::UnknownHelpTopic("what".to_string())));
    }

    #[test]
    fn test_usage_lines() {
        let usage = Op::all_usage().join("\n");
        assert!(usage.contains(":sort"));
        assert!(usage.contains(":lower"));
        assert!(!usage.contains("例如"));
        assert!(Input::all_help().iter().any(|doc| doc.starts_with(":gen")));
    }
}
