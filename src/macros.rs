// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars, slices
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate string-likes into one owned String
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Build a `StatLine` from a category and the non-zero stats.
///
/// ```
/// use pl_scrape::{stat_line, stats::Stat};
/// let line = stat_line!(Skater; Stat::Goals => 2, Stat::Pims => 4);
/// assert_eq!(line.get(Stat::Goals), Some(2));
/// ```
#[macro_export]
macro_rules! stat_line {
    ($cat:ident $(; $($stat:expr => $val:expr),* $(,)?)?) => {{
        #[allow(unused_mut)]
        let mut line = $crate::stats::StatLine::new($crate::stats::StatCategory::$cat);
        $($(
            line.set($stat, $val);
        )*)?
        line
    }};
}
