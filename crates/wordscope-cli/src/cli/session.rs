//! Interactive menu session

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use wordscope::TextModel;

use super::choice::MenuChoice;
use super::{loader, render};
use crate::errors::{CliError, Result};

/// One interactive session over a reader and a writer.
///
/// Generic over its IO so the whole loop runs against in-memory buffers in
/// tests; `main` plugs in locked stdin and stdout.
pub struct Session<R, W> {
  /// The text model, exclusively owned by the session
  model: TextModel,
  /// Command and text input
  input: R,
  /// Menu and report output
  output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
  /// Creates a session around an existing model
  pub fn new(model: TextModel, input: R, output: W) -> Self {
    Self {
      model,
      input,
      output,
    }
  }

  /// Consumes the session and returns the model
  pub fn into_model(self) -> TextModel {
    self.model
  }

  /// Runs the menu loop until the exit command or end of input.
  ///
  /// # Errors
  /// Only fatal errors (terminal IO) are returned; all others are printed
  /// and the loop continues.
  pub fn run(&mut self) -> Result<()> {
    info!("session started");
    loop {
      render::menu(&mut self.output)?;
      let line = match self.read_line("Enter your choice: ") {
        Ok(Some(line)) => line,
        Ok(None) => {
          debug!("end of input");
          break;
        }
        Err(err) if err.is_fatal() => return Err(err),
        Err(err) => {
          self.report(&err)?;
          continue;
        }
      };

      let outcome = line.parse::<MenuChoice>().and_then(|choice| match choice {
        MenuChoice::Exit => Ok(false),
        other => self.dispatch(other).map(|()| true),
      });

      match outcome {
        Ok(true) => {}
        Ok(false) => {
          writeln!(self.output, "Goodbye!")?;
          break;
        }
        Err(err) if err.is_fatal() => return Err(err),
        Err(err) => self.report(&err)?,
      }
    }
    info!("session ended");
    Ok(())
  }

  fn report(&mut self, err: &CliError) -> Result<()> {
    warn!(code = err.code(), error = %err, "command failed");
    Ok(render::error(&mut self.output, err)?)
  }

  /// Executes one menu command.
  pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
    debug!(?choice, "dispatching");
    match choice {
      MenuChoice::Exit => Ok(()),
      MenuChoice::LoadText => self.load_text(),
      MenuChoice::WordStats => {
        let stats = self.model.word_stats()?;
        Ok(render::word_stats(&mut self.output, &stats)?)
      }
      MenuChoice::CharStats => {
        let stats = self.model.char_stats()?;
        Ok(render::char_stats(&mut self.output, &stats)?)
      }
      MenuChoice::Search => {
        let target = self.prompt("Word to search for: ")?;
        let hits = self.model.search(&target)?;
        Ok(render::search_hits(&mut self.output, target.trim(), &hits)?)
      }
      MenuChoice::Replace => {
        let old = self.prompt("Word to replace: ")?;
        let new = self.prompt("Replacement word: ")?;
        let report = self.model.replace(&old, &new)?;
        Ok(render::replaced(&mut self.output, &report)?)
      }
      MenuChoice::Autocomplete => {
        let prefix = self.prompt("Prefix: ")?;
        let words = self.model.autocomplete(&prefix)?;
        Ok(render::completions(&mut self.output, prefix.trim(), &words)?)
      }
      MenuChoice::PredictNext => {
        let phrase = self.prompt("Phrase: ")?;
        let predictions = self.model.predict_next(&phrase)?;
        Ok(render::predictions(&mut self.output, &predictions)?)
      }
      MenuChoice::SpellCheck => {
        let word = self.prompt("Word to check: ")?;
        let check = self.model.suggest_spelling(&word)?;
        Ok(render::spelling(&mut self.output, word.trim(), &check)?)
      }
      MenuChoice::Sentiment => {
        let sentence = self.prompt("Sentence: ")?;
        let report = self.model.sentiment(&sentence);
        Ok(render::sentiment(&mut self.output, &report)?)
      }
      MenuChoice::Keywords => {
        let keywords = self.model.keywords()?;
        Ok(render::keywords(&mut self.output, &keywords)?)
      }
      MenuChoice::WordCloud => {
        let entries = self.model.word_cloud()?;
        Ok(render::word_cloud(&mut self.output, &entries)?)
      }
    }
  }

  fn load_text(&mut self) -> Result<()> {
    let source = self.prompt("Load from (f)ile or (t)ext entry? ")?;
    let text = match source.trim().to_lowercase().as_str() {
      "f" | "file" => {
        let path = self.prompt("File path: ")?;
        loader::load_file(path.trim())?
      }
      "t" | "text" => {
        writeln!(self.output, "Enter text; finish with a line containing only $$END_TEXT$$")?;
        self.output.flush()?;
        loader::read_until_sentinel(&mut self.input)?
      }
      other => return Err(CliError::invalid_selection(other)),
    };

    self.model.load(&text);
    info!(
      words = self.model.tokens().len(),
      sentences = self.model.sentences().len(),
      "text loaded"
    );
    Ok(render::loaded(
      &mut self.output,
      self.model.tokens().len(),
      self.model.sentences().len(),
    )?)
  }

  /// Prompts and reads one line; end of input reads as an empty answer.
  fn prompt(&mut self, message: &str) -> Result<String> {
    Ok(self.read_line(message)?.unwrap_or_default())
  }

  /// Prompts and reads one line without its terminator; `None` at end of input.
  fn read_line(&mut self, message: &str) -> Result<Option<String>> {
    write!(self.output, "{message}")?;
    self.output.flush()?;

    loader::read_text_line(&mut self.input)
  }
}
