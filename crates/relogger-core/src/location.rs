//! Call-site metadata attached to every record

use std::fmt;

/// Source location of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Source file, as reported by `file!()`
    pub file: &'static str,
    /// Line number, as reported by `line!()`
    pub line: u32,
    /// Name of the enclosing function
    pub function: &'static str,
}

impl Location {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

const MARKER: &str = "::__relogger_here";

/// Extract the enclosing function name from the type path of a marker item
/// declared inside it. Closure and async-block segments are skipped.
#[doc(hidden)]
pub fn enclosing_function(marker_path: &'static str) -> &'static str {
    let path = marker_path.strip_suffix(MARKER).unwrap_or(marker_path);
    path.rsplit("::")
        .find(|segment| !segment.starts_with("{{"))
        .unwrap_or(path)
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Name of the function this macro is expanded in
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __relogger_here() {}
        $crate::location::enclosing_function($crate::location::type_name_of(__relogger_here))
    }};
}

/// Capture the current call site as a [`Location`]
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), line!(), $crate::function_name!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_name() {
        assert_eq!(crate::function_name!(), "test_function_name");
    }

    #[test]
    fn test_function_name_in_closure() {
        let name = (|| crate::function_name!())();
        assert_eq!(name, "test_function_name_in_closure");
    }

    #[test]
    fn test_location_macro() {
        let here = crate::location!();
        assert_eq!(here.file, file!());
        assert_eq!(here.function, "test_location_macro");
        assert!(here.line > 0);
    }

    #[test]
    fn test_enclosing_function_paths() {
        assert_eq!(enclosing_function("app::store::save::__relogger_here"), "save");
        assert_eq!(
            enclosing_function("app::main::{{closure}}::__relogger_here"),
            "main"
        );
        assert_eq!(enclosing_function("plain"), "plain");
    }

    #[test]
    fn test_display() {
        let loc = Location::new("x.c", 42, "save");
        assert_eq!(loc.to_string(), "x.c:42 (save)");
    }
}
