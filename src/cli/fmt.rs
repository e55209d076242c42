use crate::cli::err::PpErr;
use pullpipe::Integer;
use rt_format::{Format, FormatArgument, ParsedFormat, Specifier};
use std::collections::HashMap;
use std::fmt;

/// 格式化参数，仅支持整数。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct IntegerArg(Integer);

impl FormatArgument for IntegerArg {
    fn supports_format(&self, specifier: &Specifier) -> bool {
        !matches!(specifier.format, Format::LowerExp | Format::UpperExp)
    }

    fn fmt_display(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }

    fn fmt_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }

    fn fmt_octal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }

    fn fmt_lower_hex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }

    fn fmt_upper_hex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }

    fn fmt_binary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }

    fn fmt_lower_exp(&self, _: &mut fmt::Formatter) -> fmt::Result {
        Err(fmt::Error)
    }

    fn fmt_upper_exp(&self, _: &mut fmt::Formatter) -> fmt::Result {
        Err(fmt::Error)
    }

    fn to_usize(&self) -> Result<usize, ()> {
        usize::try_from(self.0).map_err(|_| ())
    }
}

/// 以`{v}`引用整数值格式化文本，例如`n{v}`、`{v:#06x}`。
pub(crate) fn fmt_integer(fmt: &str, value: Integer) -> Result<String, PpErr> {
    let positional: &[IntegerArg] = &[];
    let named = HashMap::from([("v", IntegerArg(value))]);
    ParsedFormat::parse(fmt, positional, &named)
        .map(|parsed| parsed.to_string())
        .map_err(|pos| PpErr::InvalidFormat { fmt: fmt.to_string(), err: format!("invalid placeholder near {pos:?}") })
}
