// src/macros.rs
#[macro_export]
macro_rules! s {
    // Owned String shorthand.
    () => {
        ::std::string::String::new()
    };
    // Literals, consts, &str vars, anything `String: From<_>`
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate two or more &str-likes into a fresh String.
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}
