//! Sources for the authorization code a human obtains from the authorize page.
//!
//! This is the one place where the authorization-code flow waits on a person.
//! [`StdinPrompt`] prints the authorize URL and blocks on a line of input with
//! no timeout; [`crate::server::CallbackServer`] catches the redirect on a
//! local HTTP listener instead.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::AuthError;

/// Blocks until the authorization code for `authorize_url` is known.
pub trait CodeReceiver {
    /// `state` is the CSRF token sent with the authorize request, if any.
    fn receive_code(&mut self, authorize_url: &str, state: Option<&str>)
    -> Result<String, AuthError>;
}

impl<R: CodeReceiver + ?Sized> CodeReceiver for Box<R> {
    fn receive_code(
        &mut self,
        authorize_url: &str,
        state: Option<&str>,
    ) -> Result<String, AuthError> {
        (**self).receive_code(authorize_url, state)
    }
}

/// Asks the user to paste the `code` query parameter of the redirect.
///
/// The pasted value is not validated beyond trimming whitespace: a wrong
/// value surfaces as an HTTP error from the token exchange.
pub struct StdinPrompt<R, W> {
    input: R,
    output: W,
}

impl StdinPrompt<BufReader<Stdin>, Stdout> {
    pub fn new() -> Self {
        StdinPrompt {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl Default for StdinPrompt<BufReader<Stdin>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        StdinPrompt { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> CodeReceiver for StdinPrompt<R, W> {
    fn receive_code(
        &mut self,
        authorize_url: &str,
        _state: Option<&str>,
    ) -> Result<String, AuthError> {
        writeln!(self.output, "{authorize_url}")?;
        write!(
            self.output,
            "login to spotify and return the code parameter in console: "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AuthError::CodeCapture("input closed before a code was entered".into()));
        }
        Ok(line.trim().to_string())
    }
}
