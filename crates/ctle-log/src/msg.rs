//! Log entries under construction.

use std::fmt;
use std::fmt::Write as _;

use crate::LogLevel;
use crate::sink::{LogRecord, submit};

/// Name of the item `ctle::function_signature!` declares to find its
/// enclosing function. Stripped again by [`trim_function_signature`].
pub const SIGNATURE_MARKER: &str = "__ctle_signature_marker";

const CLOSURE_SEGMENT: &str = "::{{closure}}";

/// A log entry that is entered into the global sink when dropped.
///
/// The ctle log macros only create one after checking
/// [`LogLevel::enabled`], so a `LogMsg` itself does not filter.
pub struct LogMsg {
    level: LogLevel,
    message: String,
    file: &'static str,
    line: u32,
    signature: &'static str,
}

impl LogMsg {
    pub fn new(level: LogLevel, file: &'static str, line: u32, signature: &'static str) -> Self {
        Self {
            level,
            message: String::new(),
            file,
            line,
            signature,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The message text so far; append to it with `write!`.
    pub fn message(&mut self) -> &mut String {
        &mut self.message
    }

    /// Append formatted text to the message.
    pub fn append(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = self.message.write_fmt(args);
        self
    }

    fn enter(&self) {
        let function = trim_function_signature(self.signature);
        submit(&LogRecord {
            level: self.level,
            file: self.file,
            line: self.line,
            function: &function,
            message: &self.message,
        });
    }
}

impl Drop for LogMsg {
    fn drop(&mut self) {
        self.enter();
    }
}

/// Reduce a function signature to the function path followed by `()`.
///
/// A path produced by `ctle::function_signature!` loses the marker and any
/// `{{closure}}` segments; it may itself contain parentheses, as in
/// `<(u8, u8) as Trait>::method`, and is otherwise kept whole. Any other
/// input is treated as a C-style signature and cut at the first `(`, keeping
/// the last word before it. Input without either is returned unchanged.
///
/// ```
/// use ctle_log::trim_function_signature;
///
/// assert_eq!(
///     trim_function_signature("app::run::{{closure}}::__ctle_signature_marker"),
///     "app::run()"
/// );
/// assert_eq!(trim_function_signature("int ns::cls::func(int a)"), "ns::cls::func()");
/// assert_eq!(trim_function_signature("app::store::open"), "app::store::open");
/// ```
pub fn trim_function_signature(signature: &str) -> String {
    if let Some(path) = signature
        .strip_suffix(SIGNATURE_MARKER)
        .and_then(|s| s.strip_suffix("::"))
    {
        let mut name = path;
        while let Some(stripped) = name.strip_suffix(CLOSURE_SEGMENT) {
            name = stripped;
        }
        return format!("{name}()");
    }

    match signature.find('(') {
        Some(paren) => {
            let name = &signature[..paren];
            let name = name
                .rfind(char::is_whitespace)
                .map_or(name, |space| &name[space + 1..]);
            format!("{name}()")
        }
        None => signature.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{reset_global_log_function, set_global_log_function};
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    static ENTERED: Mutex<Vec<(LogLevel, String, u32, String, String)>> =
        parking_lot::const_mutex(Vec::new());

    fn remember(record: &LogRecord<'_>) {
        ENTERED.lock().push((
            record.level,
            record.file.to_string(),
            record.line,
            record.function.to_string(),
            record.message.to_string(),
        ));
    }

    #[test]
    fn test_trim_marker_and_closures() {
        assert_eq!(
            trim_function_signature("app::Store::open::__ctle_signature_marker"),
            "app::Store::open()"
        );
        assert_eq!(
            trim_function_signature("app::main::{{closure}}::{{closure}}::__ctle_signature_marker"),
            "app::main()"
        );
        assert_eq!(
            trim_function_signature("<app::Store as app::Backend>::flush::__ctle_signature_marker"),
            "<app::Store as app::Backend>::flush()"
        );
    }

    #[test]
    fn test_trim_keeps_parens_in_impl_paths() {
        assert_eq!(
            trim_function_signature("<(u8, u8) as app::Describe>::describe::__ctle_signature_marker"),
            "<(u8, u8) as app::Describe>::describe()"
        );
        assert_eq!(
            trim_function_signature(
                "<fn(i32) -> bool as app::Check>::check::{{closure}}::__ctle_signature_marker"
            ),
            "<fn(i32) -> bool as app::Check>::check()"
        );
    }

    #[test]
    fn test_trim_c_style_signature() {
        assert_eq!(
            trim_function_signature("ctle::status ctle::file::read(const char *)"),
            "ctle::file::read()"
        );
        assert_eq!(trim_function_signature("main(void)"), "main()");
    }

    #[test]
    fn test_trim_degenerate() {
        assert_eq!(trim_function_signature(""), "");
        assert_eq!(trim_function_signature("app::store::open"), "app::store::open");
        assert_eq!(trim_function_signature("(int)"), "()");
    }

    #[test]
    #[serial]
    fn test_entered_on_drop() {
        ENTERED.lock().clear();
        set_global_log_function(remember);

        {
            let mut entry = LogMsg::new(
                LogLevel::Debug,
                "src/store.rs",
                17,
                "app::Store::open::__ctle_signature_marker",
            );
            entry.append(format_args!("opened {} blocks", 3));
            entry.message().push_str(", ready");
            assert!(ENTERED.lock().is_empty());
        }

        reset_global_log_function();
        let entered = ENTERED.lock().clone();
        assert_eq!(
            entered,
            vec![(
                LogLevel::Debug,
                "src/store.rs".to_string(),
                17,
                "app::Store::open()".to_string(),
                "opened 3 blocks, ready".to_string(),
            )]
        );
    }
}
