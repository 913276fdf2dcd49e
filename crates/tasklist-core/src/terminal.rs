use std::cell::RefCell;
use std::io::{
  self,
  BufRead,
  Write
};

use tasklist_shared::Prompter;
use tracing::warn;

/// `Prompter` for the terminal: alerts go to the error stream, confirmations
/// read one line of input.
pub struct TerminalPrompter<R, W> {
  input:      RefCell<R>,
  output:     RefCell<W>,
  assume_yes: bool
}

impl TerminalPrompter<
  io::StdinLock<'static>,
  io::Stderr
>
{
  pub fn stdio(assume_yes: bool) -> Self {
    Self::new(
      io::stdin().lock(),
      io::stderr(),
      assume_yes
    )
  }
}

impl<R, W> TerminalPrompter<R, W>
where
  R: BufRead,
  W: Write
{
  pub fn new(
    input: R,
    output: W,
    assume_yes: bool
  ) -> Self {
    Self {
      input: RefCell::new(input),
      output: RefCell::new(output),
      assume_yes
    }
  }

  pub fn into_output(self) -> W {
    self.output.into_inner()
  }
}

impl<R, W> Prompter
  for TerminalPrompter<R, W>
where
  R: BufRead,
  W: Write
{
  fn alert(&self, message: &str) {
    let mut out = self.output.borrow_mut();
    if let Err(err) =
      writeln!(out, "{message}")
    {
      warn!(error = %err, "failed writing alert");
    }
  }

  fn confirm(&self, message: &str) -> bool {
    if self.assume_yes {
      return true;
    }

    {
      let mut out =
        self.output.borrow_mut();
      if write!(out, "{message} [y/N] ")
        .and_then(|_| out.flush())
        .is_err()
      {
        return false;
      }
    }

    let mut line = String::new();
    match self
      .input
      .borrow_mut()
      .read_line(&mut line)
    {
      | Ok(_) => {
        matches!(
          line
            .trim()
            .to_ascii_lowercase()
            .as_str(),
          "y" | "yes"
        )
      }
      | Err(err) => {
        warn!(error = %err, "failed reading confirmation");
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  fn prompter(
    input: &str,
    assume_yes: bool
  ) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>
  {
    TerminalPrompter::new(
      Cursor::new(
        input.as_bytes().to_vec()
      ),
      Vec::new(),
      assume_yes
    )
  }

  #[test]
  fn confirm_accepts_only_yes() {
    assert!(prompter("y\n", false)
      .confirm("Delete?"));
    assert!(prompter("YES\n", false)
      .confirm("Delete?"));
    assert!(!prompter("n\n", false)
      .confirm("Delete?"));
    assert!(!prompter("", false)
      .confirm("Delete?"));
  }

  #[test]
  fn assume_yes_skips_the_question() {
    let p = prompter("", true);
    assert!(p.confirm("Delete?"));
    assert!(p.into_output().is_empty());
  }

  #[test]
  fn alert_and_question_are_written() {
    let p = prompter("n\n", false);
    p.alert("Failed to add task.");
    p.confirm("Delete?");
    let out = String::from_utf8(
      p.into_output()
    )
    .expect("utf8");
    assert_eq!(
      out,
      "Failed to add task.\nDelete? [y/N] "
    );
  }
}
