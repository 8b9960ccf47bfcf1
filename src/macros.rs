// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! sql_row {
    // One VALUES tuple, indented: sql_row!(1, "'x'") → "  (1, 'x')"
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut s = ::std::format!("  ({}", $first);
        $(
            s.push_str(", ");
            s.push_str(&::std::string::ToString::to_string(&$rest));
        )*
        s.push(')');
        s
    }};
}
