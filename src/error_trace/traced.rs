use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::fmt::Display;
use std::path::PathBuf;

/// Return type of a traced body.
///
/// `Result<T, E>` under any spelling (`io::Result<T>`, `anyhow::Result<T>`, a
/// local alias) splits into the value kept on success and the error that gets
/// logged. Plain values never fail and pass through unchanged.
///
/// Other value types opt in with [`traced_value!`](crate::traced_value).
pub trait Traced {
    type Output;
    type Error: Display;

    fn into_result(self) -> Result<Self::Output, Self::Error>;
}

impl<T, E: Display> Traced for Result<T, E> {
    type Output = T;
    type Error = E;

    fn into_result(self) -> Result<T, E> {
        self
    }
}

/// Implements [`Traced`] for types that carry no error channel.
///
/// ```
/// struct Report { rows: usize }
/// tracelog::traced_value!(Report);
/// ```
#[macro_export]
macro_rules! traced_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::error_trace::Traced for $ty {
                type Output = $ty;
                type Error = ::std::convert::Infallible;

                fn into_result(self) -> ::std::result::Result<$ty, ::std::convert::Infallible> {
                    ::std::result::Result::Ok(self)
                }
            }
        )*
    };
}

traced_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    PathBuf,
);

impl<'a> Traced for &'a str {
    type Output = &'a str;
    type Error = Infallible;

    fn into_result(self) -> Result<&'a str, Infallible> {
        Ok(self)
    }
}

macro_rules! traced_generic {
    ($(<$($param:ident),+> $ty:ty),* $(,)?) => {
        $(
            impl<$($param),+> Traced for $ty {
                type Output = $ty;
                type Error = Infallible;

                fn into_result(self) -> Result<$ty, Infallible> {
                    Ok(self)
                }
            }
        )*
    };
}

traced_generic!(
    <T> Option<T>,
    <T> Vec<T>,
    <T> Box<T>,
    <K, V> HashMap<K, V>,
    <K, V> BTreeMap<K, V>,
    <A, B> (A, B),
    <A, B, C> (A, B, C),
);
