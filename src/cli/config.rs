use std::iter::Peekable;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h[ <topic>]`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印流水线信息 `-v`
    Verbose,
    /// 仅解析并构造流水线，不执行 `-d`
    DryRun,
    /// 全局忽略大小写 `--nocase`
    Nocase,
    /// 跳过无法读取的输入文件 `-s`
    SkipErr,
}

impl Config {
    fn parse(arg: &str) -> Option<Config> {
        match arg {
            "-h" | "--help" => Some(Config::Help),
            "-V" | "--version" => Some(Config::Version),
            "-v" | "--verbose" => Some(Config::Verbose),
            "-d" | "--dry-run" => Some(Config::DryRun),
            "--nocase" => Some(Config::Nocase),
            "-s" | "--skip-err" => Some(Config::SkipErr),
            _ => None,
        }
    }
}

/// 消耗开头的全部配置参数，遇到第一个非配置参数时停止。
pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = args.peek().and_then(|arg| Config::parse(arg)) {
        args.next();
        if !configs.contains(&config) {
            configs.push(config);
        }
    }
    configs
}

#[inline]
pub(crate) fn is_nocase(nocase: bool, configs: &[Config]) -> bool {
    nocase || configs.contains(&Config::Nocase)
}

#[inline]
pub(crate) fn skip_err(configs: &[Config]) -> bool {
    configs.contains(&Config::SkipErr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Peekable<impl Iterator<Item = String>> {
        values.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter().peekable()
    }

    #[test]
    fn test_parse_configs() {
        let mut args = args(&["-v", "--nocase", "-v", ":of", "-d"]);
        assert_eq!(parse_configs(&mut args), vec![Config::Verbose, Config::Nocase]);
        assert_eq!(args.next(), Some(":of".to_string()));
        assert_eq!(args.next(), Some("-d".to_string()));
    }

    #[test]
    fn test_parse_configs_none() {
        let mut args = args(&[":gen", "0"]);
        assert!(parse_configs(&mut args).is_empty());
        assert_eq!(args.next(), Some(":gen".to_string()));
    }

    #[test]
    fn test_is_nocase() {
        assert!(is_nocase(true, &[]));
        assert!(is_nocase(false, &[Config::Nocase]));
        assert!(!is_nocase(false, &[Config::Verbose]));
        assert!(skip_err(&[Config::SkipErr]));
    }
}
