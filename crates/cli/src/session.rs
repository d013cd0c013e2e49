//! Interactive board session
//!
//! Reads one command per line, applies it to the store and re-renders the
//! board whenever the store reports a change.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use clap::Parser;
use tf_core::form::TaskForm;
use tf_core::task::{StoreEvent, TaskStore};
use tf_core::Error;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::command::{split_words, CommandLine, SessionCommand};
use crate::render;

/// What a command wants the session to do next
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    Done,
    Note(String),
    ShowBoard,
    ShowCounts,
    Quit,
}

pub struct Session<W: Write> {
    store: TaskStore,
    pending: Rc<RefCell<Vec<StoreEvent>>>,
    format: OutputFormat,
    output: W,
}

impl<W: Write> Session<W> {
    pub fn new(mut store: TaskStore, format: OutputFormat, output: W) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        Self {
            store,
            pending,
            format,
            output,
        }
    }

    /// End the session and hand back the store
    pub fn into_store(self) -> TaskStore {
        self.store
    }

    /// Process `input` until it ends or a quit command is read
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        info!(tasks = self.store.len(), "Session started");
        self.render_board()?;

        for line in input.lines() {
            if !self.handle_line(&line?)? {
                break;
            }
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> anyhow::Result<bool> {
        let words = match split_words(line) {
            Ok(words) if words.is_empty() => return Ok(true),
            Ok(words) => words,
            Err(message) => {
                writeln!(self.output, "error: {message}")?;
                return Ok(true);
            }
        };

        let command = match CommandLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                write!(self.output, "{}", err.render())?;
                return Ok(true);
            }
        };

        debug!(?command, "Executing command");
        match self.execute(command) {
            Ok(Reply::Done) => {}
            Ok(Reply::Note(text)) => writeln!(self.output, "{text}")?,
            Ok(Reply::ShowBoard) => self.render_board()?,
            Ok(Reply::ShowCounts) => {
                let text = render::counts(&self.store.task_counts(), self.format)?;
                writeln!(self.output, "{text}")?;
            }
            Ok(Reply::Quit) => return Ok(false),
            Err(Error::Validation(errors)) => {
                for (field, message) in errors.fields() {
                    writeln!(self.output, "  {field}: {message}")?;
                }
            }
            Err(err) => writeln!(self.output, "error: {err}")?,
        }

        let changed = !self.pending.borrow().is_empty();
        if changed {
            self.pending.borrow_mut().clear();
            self.render_board()?;
        }
        Ok(true)
    }

    fn execute(&mut self, command: SessionCommand) -> tf_core::Result<Reply> {
        let reply = match command {
            SessionCommand::Add(args) => {
                args.into_form().submit(&mut self.store)?;
                Reply::Done
            }
            SessionCommand::Edit(args) => {
                let mut form = TaskForm::edit(self.store.require(args.id)?);
                args.apply(&mut form);
                form.submit(&mut self.store)?;
                Reply::Done
            }
            SessionCommand::Status { id, status } => {
                let mut form = TaskForm::edit(self.store.require(id)?);
                form.status = status;
                form.submit(&mut self.store)?;
                Reply::Done
            }
            SessionCommand::Delete { id } => match self.store.delete_task(id) {
                Some(_) => Reply::Done,
                None => Reply::Note(format!("task {id} not found, nothing deleted")),
            },
            SessionCommand::View { mode } => {
                self.store.set_view(mode);
                Reply::Done
            }
            SessionCommand::Filter { status } => {
                self.store.set_status_filter(status);
                Reply::Done
            }
            SessionCommand::List => Reply::ShowBoard,
            SessionCommand::Counts => Reply::ShowCounts,
            SessionCommand::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    fn render_board(&mut self) -> anyhow::Result<()> {
        let text = render::board(&self.store.board(), self.format)?;
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
