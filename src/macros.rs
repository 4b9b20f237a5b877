// src/macros.rs

/// `String` shorthand. `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate anything string-like into a fresh `String`.
/// `join!("http://", &modem.address, path)`
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from(::std::convert::AsRef::<str>::as_ref(&$first));
        $(
            out.push_str(::std::convert::AsRef::<str>::as_ref(&$rest));
        )+
        out
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn join_takes_str_and_string_alike() {
        let host = s!("192.168.100.1");
        assert_eq!(join!("http://", &host, "/DocsisStatus.asp"), "http://192.168.100.1/DocsisStatus.asp");
        assert_eq!(join!(host, ":", "80"), "192.168.100.1:80");
        assert_eq!(s!(), "");
    }
}
