//! Value resolvers for unbound variables.
//!
//! When the parser meets an identifier with no stored value it blocks on a
//! [`ValueResolver`]. A resolver must either return a well-formed number or
//! fail with [`CalcError::Input`] when no more input can ever arrive;
//! malformed replies are handled inside the resolver by asking again.

use crate::error::CalcError;
use smartstring::alias::String;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Supplies values for variables the parser cannot resolve on its own.
pub trait ValueResolver {
    /// Returns the value of `name`.
    ///
    /// # Errors
    /// [`CalcError::Input`] when the underlying source is exhausted or fails.
    fn resolve(&mut self, name: &str) -> Result<f64, CalcError>;
}

impl<R: ValueResolver + ?Sized> ValueResolver for &mut R {
    fn resolve(&mut self, name: &str) -> Result<f64, CalcError> {
        (**self).resolve(name)
    }
}

/// Adapts a closure into a [`ValueResolver`].
pub struct FnResolver<F>(pub F);

impl<F> ValueResolver for FnResolver<F>
where
    F: FnMut(&str) -> Result<f64, CalcError>,
{
    fn resolve(&mut self, name: &str) -> Result<f64, CalcError> {
        (self.0)(name)
    }
}

/// Parses a reply as a finite number, ignoring surrounding whitespace.
///
/// ```rust
/// # use edts_calc::parse_value;
/// assert_eq!(parse_value(" 2.5\n"), Some(2.5));
/// assert_eq!(parse_value("-1e3"), Some(-1000.0));
/// assert_eq!(parse_value("abc"), None);
/// assert_eq!(parse_value("inf"), None);
/// ```
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn exhausted(name: &str) -> CalcError {
    CalcError::Input(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("no value supplied for {name:?}"),
    ))
}

/// Interactive resolver: prompts on `output`, reads lines from `input`.
///
/// Keeps asking until a well-formed number is entered.
pub struct PromptResolver<R, W> {
    input: R,
    output: W,
}

impl<R, W> PromptResolver<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R, W> ValueResolver for PromptResolver<R, W>
where
    R: BufRead,
    W: Write,
{
    fn resolve(&mut self, name: &str) -> Result<f64, CalcError> {
        let mut line = std::string::String::new();
        loop {
            write!(self.output, "value for {name}: ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(exhausted(name));
            }
            if let Some(value) = parse_value(&line) {
                log::debug!("resolved {} = {}", name, value);
                return Ok(value);
            }
            log::warn!("rejected value {:?} for {}", line.trim(), name);
            writeln!(self.output, "invalid number {:?}, try again", line.trim())?;
        }
    }
}

/// Replays canned replies, validating them exactly like [`PromptResolver`].
///
/// Every request is recorded in [`asked`](Self::asked), so tests can verify
/// how often and in which order names were resolved.
#[derive(Debug, Default, Clone)]
pub struct ScriptedResolver {
    replies: VecDeque<String>,
    asked: Vec<String>,
    rejected: usize,
}

impl ScriptedResolver {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            replies: replies.into_iter().map(|s| String::from(s.as_ref())).collect(),
            asked: Vec::new(),
            rejected: 0,
        }
    }

    /// Names requested so far, in request order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Number of malformed replies skipped.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl ValueResolver for ScriptedResolver {
    fn resolve(&mut self, name: &str) -> Result<f64, CalcError> {
        self.asked.push(String::from(name));
        while let Some(reply) = self.replies.pop_front() {
            if let Some(value) = parse_value(&reply) {
                return Ok(value);
            }
            self.rejected += 1;
        }
        Err(exhausted(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_retries_until_valid() {
        let input = Cursor::new("abc\n\n4.5\n");
        let mut output = Vec::new();
        let value = PromptResolver::new(input, &mut output).resolve("x").unwrap();
        assert_eq!(value, 4.5);
        let shown = std::string::String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("value for x: ").count(), 3);
        assert!(shown.contains("invalid number \"abc\""));
    }

    #[test]
    fn prompt_fails_on_end_of_input() {
        let input = Cursor::new("oops\n");
        let err = PromptResolver::new(input, io::sink()).resolve("y").unwrap_err();
        assert!(matches!(err, CalcError::Input(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
        assert!(err.to_string().contains("\"y\""));
    }

    #[test]
    fn scripted_skips_malformed_replies() {
        let mut r = ScriptedResolver::new(["nan", "seven", "7"]);
        assert_eq!(r.resolve("a").unwrap(), 7.0);
        assert_eq!(r.rejected(), 2);
        assert_eq!(r.asked(), &[String::from("a")]);
        assert!(r.resolve("b").is_err());
        assert_eq!(r.asked().len(), 2);
    }

    #[test]
    fn closures_are_resolvers() {
        let mut calls = 0;
        let mut r = FnResolver(|name: &str| -> Result<f64, CalcError> {
            calls += 1;
            Ok(name.len() as f64)
        });
        assert_eq!(r.resolve("abc").unwrap(), 3.0);
        drop(r);
        assert_eq!(calls, 1);
    }

    #[test]
    fn parse_value_accepts_only_finite_numbers() {
        assert_eq!(parse_value("  -0.25 "), Some(-0.25));
        assert_eq!(parse_value("10"), Some(10.0));
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("1/2"), None);
    }
}
