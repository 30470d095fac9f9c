/// Name used when a call site has no enclosing function.
pub const MODULE_SCOPE: &str = "module";

/// Expands to the name of the function enclosing the call site.
///
/// The name comes from the type of a nested item, so it survives inlining
/// and needs no stack walk. Closure frames are skipped.
#[macro_export]
macro_rules! caller_name {
    () => {{
        fn __caller() {}
        $crate::logger::function_name(::std::any::type_name_of_val(&__caller))
    }};
}

/// Extracts the enclosing function from the type name of an item nested in it.
pub fn function_name(type_name: &str) -> String {
    let path = type_name.strip_suffix("::__caller").unwrap_or(type_name);
    let name = path
        .rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .unwrap_or_default();
    let name = strip_angle_brackets(name);

    if name.is_empty() {
        MODULE_SCOPE.to_string()
    } else {
        name
    }
}

pub(crate) fn strip_angle_brackets(name: &str) -> String {
    name.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(&$crate::caller_name!(), &::std::format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(&$crate::caller_name!(), &::std::format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(&$crate::caller_name!(), &::std::format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(&$crate::caller_name!(), &::std::format!($($arg)+))
    };
}
