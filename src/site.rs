use std::fmt;

/// Where a log call, throw or fatal condition originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub file: &'static str,
    pub line: u32,
    /// Path of the enclosing function, closures stripped.
    pub func: &'static str,
}

impl Site {
    /// Placeholder for conditions that carry no location.
    pub const UNKNOWN: Site = Site::new("(unknown)", 0, "(unknown)");

    pub const fn new(file: &'static str, line: u32, func: &'static str) -> Self {
        Self { file, line, func }
    }

    /// Fallback used when only a `Location` is known.
    pub fn from_location(location: &'static std::panic::Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            func: "(unknown)",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file, self.line, self.func)
    }
}

/// Trims the helper item and any closure frames off a `type_name` result.
#[doc(hidden)]
pub fn enclosing_function(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__tc_here").unwrap_or(raw);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Path of the function this macro is expanded in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __tc_here() {}
        $crate::site::enclosing_function(::std::any::type_name_of_val(&__tc_here))
    }};
}

/// `Site` of the expansion point.
#[macro_export]
macro_rules! site {
    () => {
        $crate::site::Site::new(file!(), line!(), $crate::function_name!())
    };
}
