//! Line-oriented prompting.
//!
//! A [`Prompter`] writes a question, reads one line and hands it back trimmed.
//! It works over any reader and writer so the interactive flows can be tested
//! with in-memory buffers.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

/// Asks questions on `output` and reads answers from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, StdoutLock<'static>> {
    /// Prompter over the process's standard input and output.
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Prints `question` without a newline and returns the trimmed reply.
    ///
    /// End of input reads as an empty reply.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentleday::prompt::Prompter;
    ///
    /// let mut prompter = Prompter::new("  4 \n".as_bytes(), Vec::new());
    /// assert_eq!(prompter.ask("Mood? ").unwrap(), "4");
    /// assert_eq!(prompter.ask("Again? ").unwrap(), "");
    /// ```
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks a yes/no question; only `y` or `yes` (any case) count as yes.
    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        let reply = self.ask(question)?.to_lowercase();
        Ok(matches!(reply.as_str(), "y" | "yes"))
    }

    /// Reads one line without printing anything, e.g. "press Enter".
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// The output stream, for printing between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_writes_question_and_trims_reply() {
        let mut prompter = Prompter::new("  hello world \r\n".as_bytes(), Vec::new());

        let reply = prompter.ask("Say something: ").unwrap();

        assert_eq!(reply, "hello world");
        assert_eq!(prompter.into_output(), b"Say something: ");
    }

    #[test]
    fn test_ask_reads_lines_in_order() {
        let mut prompter = Prompter::new("one\ntwo\n".as_bytes(), Vec::new());
        assert_eq!(prompter.ask("1? ").unwrap(), "one");
        assert_eq!(prompter.ask("2? ").unwrap(), "two");
        assert_eq!(prompter.ask("3? ").unwrap(), "");
    }

    #[test]
    fn test_ask_yes_no() {
        let mut prompter = Prompter::new("Y\nyes\nYES\nn\n\nsure\n".as_bytes(), Vec::new());
        let answers: Vec<bool> = (0..6).map(|_| prompter.ask_yes_no("? ").unwrap()).collect();
        assert_eq!(answers, vec![true, true, true, false, false, false]);
    }

    #[test]
    fn test_output_is_shared_between_prompts() {
        let mut prompter = Prompter::new("x\n".as_bytes(), Vec::new());
        writeln!(prompter.output(), "banner").unwrap();
        prompter.ask("q: ").unwrap();
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "banner\nq: ");
    }
}
