extern crate self as type_safety;

pub mod annotations;
pub mod config;
pub mod demo;
pub mod drawable;
pub mod node;
pub mod process;
pub mod stack;
pub mod tracing_init;

/// The package version, `0.1.0` for this lesson.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Name part of the first manifest author, `Name <email>`.
pub const AUTHOR: &str = author_name(AUTHORS);

/// Email part of the first manifest author.
pub const EMAIL: &str = author_email(AUTHORS);

// const fns can't use str::split, so walk the bytes by hand.
const fn author_name(authors: &str) -> &str {
    let bytes = authors.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end] != b'<' && bytes[end] != b':' {
        end += 1;
    }
    while end > 0 && bytes[end - 1] == b' ' {
        end -= 1;
    }
    let (name, _) = bytes.split_at(end);
    match std::str::from_utf8(name) {
        Ok(name) => name,
        Err(_) => "",
    }
}

const fn author_email(authors: &str) -> &str {
    let bytes = authors.as_bytes();
    let mut start = 0;
    while start < bytes.len() && bytes[start] != b'<' {
        start += 1;
    }
    if start == bytes.len() {
        return "";
    }
    start += 1;
    let mut end = start;
    while end < bytes.len() && bytes[end] != b'>' {
        end += 1;
    }
    let (_, rest) = bytes.split_at(start);
    let (email, _) = rest.split_at(end - start);
    match std::str::from_utf8(email) {
        Ok(email) => email,
        Err(_) => "",
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("Learning Rust <learning-rust@example.com>" => ("Learning Rust", "learning-rust@example.com"); "name and email")]
    #[test_case("Learning Rust" => ("Learning Rust", ""); "name only")]
    #[test_case("A <a@b.c>:B <b@c.d>" => ("A", "a@b.c"); "first of several authors")]
    fn splits_author_entry(authors: &str) -> (&str, &str) {
        (author_name(authors), author_email(authors))
    }
}
