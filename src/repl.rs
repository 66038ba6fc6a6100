//! Line-oriented predictor session.
//!
//! Each input line is one command. A line that is not a recognised command is added as a
//! symptom, which matches typing into the symptom box and pressing Enter.

use medware_core::{Notice, NoticeLevel, PredictorSession};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  add <symptom>      add a symptom (or just type it)
  remove <symptom>   remove a symptom
  list               show your symptoms
  predict            suggest likely conditions
  clear              remove all symptoms
  symptoms           show symptoms the predictor knows about
  help               show this message
  quit               leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    List,
    Predict,
    Clear,
    Symptoms,
    Help,
    Quit,
    /// A command keyword was given without the argument it needs.
    Usage(&'static str),
}

/// Parses one input line.
///
/// Bare keywords only count as commands when nothing follows them, so a symptom such as
/// "clear skin" is still added as text.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match (word.to_lowercase().as_str(), rest.is_empty()) {
        ("add", false) => Command::Add(rest.to_string()),
        ("add", true) => Command::Usage("usage: add <symptom>"),
        ("remove" | "rm", false) => Command::Remove(rest.to_string()),
        ("remove" | "rm", true) => Command::Usage("usage: remove <symptom>"),
        ("list", true) => Command::List,
        ("predict", true) => Command::Predict,
        ("clear", true) => Command::Clear,
        ("symptoms", true) => Command::Symptoms,
        ("help" | "?", true) => Command::Help,
        ("quit" | "exit", true) => Command::Quit,
        _ => Command::Add(line.to_string()),
    }
}

fn write_notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Info => "info",
        NoticeLevel::Error => "error",
    };
    writeln!(out, "[{tag}] {}", notice.message)
}

fn write_symptoms<W: Write>(out: &mut W, session: &PredictorSession) -> io::Result<()> {
    if session.symptoms().is_empty() {
        return writeln!(out, "Add your first symptom");
    }
    writeln!(out, "Your symptoms:")?;
    for symptom in session.symptoms().iter() {
        writeln!(out, "  - {symptom}")?;
    }
    Ok(())
}

/// Runs commands from `input` until it is exhausted or the user quits.
///
/// A line that is not valid UTF-8 is reported and skipped; the session carries on.
pub fn run<R: BufRead, W: Write>(
    session: &mut PredictorSession,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    match session.user_name() {
        Some(name) => writeln!(out, "Welcome back, {name}!")?,
        None => writeln!(out, "Medware symptom predictor")?,
    }
    writeln!(out, "Type a symptom to add it, or 'help' for commands.")?;

    let mut buf = Vec::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            tracing::warn!("skipped input line that is not valid UTF-8");
            writeln!(out, "[error] Input must be valid UTF-8 text")?;
            continue;
        };

        match parse_command(line.trim_end_matches(['\n', '\r'])) {
            Command::Add(text) => write_notice(out, &session.add_symptom(&text).0)?,
            Command::Remove(text) => write_notice(out, &session.remove_symptom(&text))?,
            Command::List => write_symptoms(out, session)?,
            Command::Predict => {
                let (notice, record) = session.predict();
                let at = record.predicted_at.with_timezone(&chrono::Local);
                let result = record.result.to_string();
                write_notice(out, &notice)?;
                writeln!(out, "Predicted result ({}): {result}", at.format("%H:%M:%S"))?;
            }
            Command::Clear => write_notice(out, &session.clear())?,
            Command::Symptoms => {
                for entry in session.table().entries() {
                    writeln!(out, "  {}: {}", entry.symptom, entry.conditions.join(", "))?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Usage(hint) => writeln!(out, "[error] {hint}")?,
            Command::Quit => break,
        }
    }

    tracing::info!("session ended with {} symptoms", session.symptoms().len());
    Ok(())
}
