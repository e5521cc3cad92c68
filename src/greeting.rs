use std::ffi::OsStr;
use std::io::{self, Write};

pub const GREETING_PREFIX: &str = "Hello, ";
pub const GREETING_SUFFIX: &str = "! Welcome to BuildStream.";

/// Name greeted when none is given on the command line.
pub const DEFAULT_NAME: &str = "BuildStream User";

/// Formats the welcome line for `name`. Any text is accepted, including "".
pub fn get_greeting(name: &str) -> String {
    format!("{}{}{}", GREETING_PREFIX, name, GREETING_SUFFIX)
}

/// Writes the welcome line for `name` followed by a newline.
///
/// Names that are not valid Unicode are written byte for byte.
pub fn write_greeting<W: Write>(out: &mut W, name: &OsStr) -> io::Result<()> {
    match name.to_str() {
        Some(text) => writeln!(out, "{}", get_greeting(text)),
        None => {
            out.write_all(GREETING_PREFIX.as_bytes())?;
            out.write_all(name.as_encoded_bytes())?;
            out.write_all(GREETING_SUFFIX.as_bytes())?;
            out.write_all(b"\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_for_plain_name() {
        assert_eq!(get_greeting("Ada"), "Hello, Ada! Welcome to BuildStream.");
    }

    #[test]
    fn test_greeting_for_empty_name() {
        assert_eq!(get_greeting(""), "Hello, ! Welcome to BuildStream.");
    }

    #[test]
    fn test_greeting_keeps_whitespace_and_punctuation() {
        let names = ["  Ada  ", "Ada Lovelace", "O'Brien, Jr.!", "\tтест\n", "-x"];
        for name in names {
            let greeting = get_greeting(name);
            assert_eq!(greeting, format!("Hello, {}! Welcome to BuildStream.", name));
            assert!(greeting.starts_with(GREETING_PREFIX));
            assert!(greeting.ends_with(GREETING_SUFFIX));
        }
    }

    #[test]
    fn test_default_name_greeting() {
        assert_eq!(
            get_greeting(DEFAULT_NAME),
            "Hello, BuildStream User! Welcome to BuildStream."
        );
    }

    #[test]
    fn test_greeting_is_deterministic() {
        assert_eq!(get_greeting("Grace"), get_greeting("Grace"));
    }

    #[test]
    fn test_write_greeting_for_text_name() {
        let mut out = Vec::new();
        write_greeting(&mut out, OsStr::new("Ada")).unwrap();
        assert_eq!(out, b"Hello, Ada! Welcome to BuildStream.\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_greeting_passes_raw_bytes_through() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let name = OsString::from_vec(vec![b'A', 0xff, b'z']);
        let mut out = Vec::new();
        write_greeting(&mut out, &name).unwrap();
        assert_eq!(out, b"Hello, A\xffz! Welcome to BuildStream.\n");
    }
}
