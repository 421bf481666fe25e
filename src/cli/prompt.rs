//! Line-oriented prompting shared by the menu and interactive front-ends

use std::io::{BufRead, Write};

use anyhow::Result;

/// Writes a prompt (without newline), flushes, and reads one trimmed line
///
/// Returns `None` when the input stream is exhausted (EOF), which the loop
/// front-ends treat as a request to leave the current flow.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_returns_trimmed_line() {
        let mut input = Cursor::new(b"  hello  \n".to_vec());
        let mut out = Vec::new();
        let line = prompt(&mut input, &mut out, "> ").unwrap();
        assert_eq!(line.as_deref(), Some("hello"));
        assert_eq!(String::from_utf8(out).unwrap(), "> ");
    }

    #[test]
    fn prompt_returns_none_on_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        assert!(prompt(&mut input, &mut out, "> ").unwrap().is_none());
    }
}
