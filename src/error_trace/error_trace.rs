use super::{STACK_DEPTH, Traced, capture_stack};
use crate::logger::ModuleLogger;
use crate::settings::LogConfig;
use std::any::{Any, type_name};
use std::convert::Infallible;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

/// Caller tag of every error-trace record.
pub const ERROR_TRACE_CALLER: &str = "error_trace";

/// Reported as the error type of a caught panic.
pub const PANIC_TYPE: &str = "panic";

static DEFAULT_LOGGER: OnceLock<Option<ModuleLogger>> = OnceLock::new();

/// Identity of a traced function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub module: &'static str,
    pub function: &'static str,
}

impl CallSite {
    pub const fn new(module: &'static str, function: &'static str) -> Self {
        CallSite { module, function }
    }
}

/// Defines a function whose failures are logged instead of returned.
///
/// The generated function keeps the name, attributes, visibility and
/// parameters of the definition. Its return type `R` becomes
/// `Option<<R as Traced>::Output>`: a `Result<T, E>` body, whatever alias it is
/// spelled with, yields `Some(v)` for `Ok(v)` and `None` after logging `Err(e)`.
/// A plain value `T` yields `Some(value)`. A panic is caught, logged and yields
/// `None`.
///
/// Records go to the default trace logger unless a `logger: <expr>;` prefix
/// names a `&ModuleLogger`.
///
/// ```no_run
/// tracelog::error_trace! {
///     /// Integer division.
///     pub fn divide(a: i32, b: i32) -> i32 {
///         a / b
///     }
/// }
///
/// assert_eq!(divide(8, 2), Some(4));
/// assert_eq!(divide(4, 0), None);
/// ```
#[macro_export]
macro_rules! error_trace {
    (
        logger: $logger:expr;
        $(#[$attr:meta])*
        $vis:vis fn $name:ident($($params:tt)*) -> $ret:ty $body:block
    ) => {
        $(#[$attr])*
        $vis fn $name($($params)*) -> ::std::option::Option<<$ret as $crate::error_trace::Traced>::Output> {
            $crate::error_trace::invoke_with(
                $logger,
                $crate::error_trace::CallSite::new(::std::module_path!(), ::std::stringify!($name)),
                move || -> $ret { $body },
            )
        }
    };
    (
        logger: $logger:expr;
        $(#[$attr:meta])*
        $vis:vis fn $name:ident($($params:tt)*) $body:block
    ) => {
        $(#[$attr])*
        $vis fn $name($($params)*) -> ::std::option::Option<()> {
            $crate::error_trace::invoke_with(
                $logger,
                $crate::error_trace::CallSite::new(::std::module_path!(), ::std::stringify!($name)),
                move || -> () { $body },
            )
        }
    };
    (
        $(#[$attr:meta])*
        $vis:vis fn $name:ident($($params:tt)*) -> $ret:ty $body:block
    ) => {
        $(#[$attr])*
        $vis fn $name($($params)*) -> ::std::option::Option<<$ret as $crate::error_trace::Traced>::Output> {
            $crate::error_trace::invoke(
                $crate::error_trace::CallSite::new(::std::module_path!(), ::std::stringify!($name)),
                move || -> $ret { $body },
            )
        }
    };
    (
        $(#[$attr:meta])*
        $vis:vis fn $name:ident($($params:tt)*) $body:block
    ) => {
        $(#[$attr])*
        $vis fn $name($($params)*) -> ::std::option::Option<()> {
            $crate::error_trace::invoke(
                $crate::error_trace::CallSite::new(::std::module_path!(), ::std::stringify!($name)),
                move || -> () { $body },
            )
        }
    };
}

/// The process-wide trace logger, created on first use with the default
/// configuration. `None` when its file cannot be opened.
pub fn default_logger() -> Option<&'static ModuleLogger> {
    DEFAULT_LOGGER.get_or_init(|| open_default(&LogConfig::default())).as_ref()
}

fn open_default(config: &LogConfig) -> Option<ModuleLogger> {
    match ModuleLogger::with_config(file!(), config) {
        Ok(logger) => Some(logger),
        Err(e) => {
            tracing::warn!("error trace log unavailable: {}", e);
            None
        }
    }
}

/// Runs `f` under the default trace logger.
pub fn invoke<R, F>(site: CallSite, f: F) -> Option<R::Output>
where
    F: FnOnce() -> R,
    R: Traced,
{
    run(default_logger(), site, || f().into_result())
}

pub fn invoke_with<R, F>(logger: &ModuleLogger, site: CallSite, f: F) -> Option<R::Output>
where
    F: FnOnce() -> R,
    R: Traced,
{
    run(Some(logger), site, || f().into_result())
}

/// Like [`invoke`] for closures of any return type; only panics are caught.
pub fn invoke_infallible<T, F>(site: CallSite, f: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    run(default_logger(), site, || Ok::<T, Infallible>(f()))
}

pub fn invoke_infallible_with<T, F>(logger: &ModuleLogger, site: CallSite, f: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    run(Some(logger), site, || Ok::<T, Infallible>(f()))
}

fn run<T, E, F>(logger: Option<&ModuleLogger>, site: CallSite, f: F) -> Option<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(err)) => {
            report(logger, site, &err.to_string(), type_name::<E>());
            None
        }
        Err(payload) => {
            report(logger, site, &panic_message(payload.as_ref()), PANIC_TYPE);
            None
        }
    }
}

fn report(logger: Option<&ModuleLogger>, site: CallSite, message: &str, error_type: &str) {
    let diagnostic = diagnostic(site, message, error_type, &capture_stack(STACK_DEPTH));
    match logger {
        Some(logger) => logger.error(ERROR_TRACE_CALLER, &diagnostic),
        None => tracing::error!(module = site.module, func = site.function, "{}", diagnostic),
    }
}

pub fn diagnostic(site: CallSite, message: &str, error_type: &str, trace: &str) -> String {
    format!(
        "module: {}, func: {}, msg: {}, type: {}, exc_traceback: {}",
        site.module, site.function, message, error_type, trace
    )
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
