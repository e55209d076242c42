use cmd_help::CmdHelp;
use pullpipe::{Float, Integer};
use regex::Regex;

/// 条件
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Condition {
    Yes(Select),
    No(Select),
}

impl Condition {
    pub(crate) fn new(select: Select, not: bool) -> Condition {
        if not { Condition::No(select) } else { Condition::Yes(select) }
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        match self {
            Condition::Yes(select) => select.select(input),
            Condition::No(select) => !select.select(input),
        }
    }
}

/// 针对单行文本的判定，`!`前缀取反由[`Condition`]负责。
#[derive(Debug, Clone, PartialEq, CmdHelp)]
pub(crate) enum Select {
    /// [!]len [<min>],[<max>]
    ///     字符数落在闭区间内，两端可省略其一。
    ///     例如：
    ///         len 2,5
    ///         !len ,5
    TextLenRange { min: Option<usize>, max: Option<usize> },
    /// [!]len <len>
    ///     字符数恰好等于给定值，例如`len 0`选中空行。
    TextLenSpec { spec: usize },
    /// [!]num [<min>],[<max>]
    ///     去掉首尾空白后解析为浮点数，且落在闭区间内。NaN与非数值均不选中。
    ///     例如：
    ///         num -2.1,
    NumRange { min: Option<Float>, max: Option<Float> },
    /// [!]num[ integer|float]
    ///     能解析为数值；`integer`要求为i64整数，`float`要求为非整数的数值。
    Num { integer: Option<bool> },
    /// [!]upper|lower
    ///     不含ASCII小写（upper）或大写（lower）字母，空行也选中。
    TextAllCase { upper: bool },
    /// [!]ascii|nonascii
    ///     全部为ASCII字符，或全部为非ASCII字符，空行也选中。
    Ascii { ascii: bool },
    /// [!]empty|blank
    ///     空行（empty），或仅由空白字符组成的非空行（blank）。
    TextEmptyOrBlank { empty: bool },
    /// [!]reg <exp>
    ///     行内任意位置存在正则匹配，需要整行匹配时使用`^`与`$`。
    ///     例如：
    ///         reg '^\d{1,3}(\.\d{1,3}){3}$'
    RegMatch { pattern: Pattern },
}

/// 正则表达式，按模式字符串判等。
#[derive(Debug, Clone)]
pub(crate) struct Pattern(Regex);

impl Pattern {
    pub(crate) fn new(exp: &str) -> Result<Pattern, regex::Error> {
        Regex::new(exp).map(Pattern)
    }

    fn is_match(&self, input: &str) -> bool {
        self.0.is_match(input)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Select {
    pub(crate) fn select(&self, input: &str) -> bool {
        match self {
            Select::TextLenRange { min, max } => in_range(input.chars().count(), *min, *max),
            Select::TextLenSpec { spec } => input.chars().count() == *spec,
            Select::NumRange { min, max } => match input.trim().parse::<Float>() {
                Ok(num) => !num.is_nan() && in_range(num, *min, *max),
                Err(_) => false,
            },
            Select::Num { integer } => {
                let input = input.trim();
                match integer {
                    None => input.parse::<Float>().is_ok(),
                    Some(true) => input.parse::<Integer>().is_ok(),
                    Some(false) => input.parse::<Integer>().is_err() && input.parse::<Float>().is_ok(),
                }
            }
            Select::TextAllCase { upper } => {
                if *upper {
                    !input.chars().any(|c| c.is_ascii_lowercase())
                } else {
                    !input.chars().any(|c| c.is_ascii_uppercase())
                }
            }
            Select::Ascii { ascii } => {
                if *ascii {
                    input.is_ascii()
                } else {
                    input.chars().all(|c| !c.is_ascii())
                }
            }
            Select::TextEmptyOrBlank { empty } => {
                if *empty {
                    input.is_empty()
                } else {
                    !input.is_empty() && input.chars().all(char::is_whitespace)
                }
            }
            Select::RegMatch { pattern } => pattern.is_match(input),
        }
    }
}

fn in_range<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}
