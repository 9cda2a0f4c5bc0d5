//! CLI module for the pocketnotes application
//!
//! Renders the active screen as text and feeds each input line to the
//! matching screen controller. The app owns the store and the route stack;
//! controllers borrow them for the duration of one command.
use std::{
    fs::read_to_string,
    io::{BufRead, Write},
    path::Path,
    process::Command,
};

use console::style;
use log::{debug, info, warn};
use shell_words::split;
use tempfile::Builder;

use crate::{
    parse_index, Config, FoldersScreen, Navigator, NoteEditor, NoteError, NoteStore, NotesScreen,
    Result, Route, RouteStack, TitlePolicy,
};

const CANCEL_INPUT: &str = ":cancel";

/// What the input loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The controller of the screen currently on top of the route stack
#[derive(Debug)]
enum ActiveScreen {
    Folders(FoldersScreen),
    Notes(NotesScreen),
    Editor(NoteEditor),
}

/// Interactive application handler
pub struct App<W: Write> {
    store: NoteStore,
    config: Config,
    nav: RouteStack,
    screen: ActiveScreen,
    /// Route the active controller was built from
    shown: Route,
    out: W,
}

impl<W: Write> App<W> {
    /// Create a new application with a fresh store built from `config`
    pub fn new(config: Config, out: W) -> Self {
        Self::with_store(NoteStore::new(&config), config, out)
    }

    pub fn with_store(store: NoteStore, config: Config, out: W) -> Self {
        Self {
            store,
            config,
            nav: RouteStack::new(),
            screen: ActiveScreen::Folders(FoldersScreen::new()),
            shown: Route::Folders,
            out,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn route(&self) -> &Route {
        self.nav.current()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until end of input or `quit`
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!("Starting interactive session");
        self.render()?;

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e @ NoteError::Io(_)) => return Err(e),
                Err(e) => {
                    warn!("Command failed: {}", e);
                    writeln!(self.out, "{}", style(e.to_string()).red())?;
                }
            }
        }

        info!("Session finished");
        Ok(())
    }

    /// Handles one line of input and redraws the screen when it changed
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if let Some(flow) = self.handle_dialog_input(line)? {
            return Ok(flow);
        }
        if self.handle_text_input(line)? {
            return Ok(Flow::Continue);
        }

        let args = split(line).map_err(|e| NoteError::InvalidCommand {
            message: format!("Failed to parse command: {}", e),
        })?;

        let Some((command, rest)) = args.split_first() else {
            return Ok(Flow::Continue);
        };
        debug!("Command {:?} on {}", command, self.shown);

        match command.as_str() {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => {
                self.print_help()?;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        match self.screen {
            ActiveScreen::Folders(_) => self.folders_command(command, rest)?,
            ActiveScreen::Notes(_) => self.notes_command(command, rest)?,
            ActiveScreen::Editor(_) => self.editor_command(command)?,
        }

        self.sync_screen()?;
        Ok(Flow::Continue)
    }

    /// Lines typed while a folders dialog is open answer the dialog
    fn handle_dialog_input(&mut self, line: &str) -> Result<Option<Flow>> {
        let ActiveScreen::Folders(screen) = &mut self.screen else {
            return Ok(None);
        };

        if screen.is_add_dialog_open() {
            if line.trim() == CANCEL_INPUT {
                screen.cancel_add();
            } else {
                screen.set_new_folder_name(line.trim());
                if screen.confirm_add(&mut self.store).is_none() {
                    writeln!(self.out, "Folder name (or {}):", CANCEL_INPUT)?;
                    return Ok(Some(Flow::Continue));
                }
            }
            self.render()?;
            return Ok(Some(Flow::Continue));
        }

        if screen.pending_delete().is_some() {
            let answer = line.trim().to_lowercase();
            if answer == "y" || answer == "yes" {
                screen.confirm_delete(&mut self.store);
            } else {
                screen.cancel_delete();
                writeln!(self.out, "Deletion cancelled.")?;
            }
            self.render()?;
            return Ok(Some(Flow::Continue));
        }

        Ok(None)
    }

    /// `type` and `set` take the rest of the line as typed, quotes and
    /// spacing included
    fn handle_text_input(&mut self, line: &str) -> Result<bool> {
        let ActiveScreen::Editor(editor) = &mut self.screen else {
            return Ok(false);
        };

        let line = line.trim_start();
        let (command, text) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        match command {
            "type" => editor.append_line(text),
            "set" => editor.set_text(text),
            _ => return Ok(false),
        }
        debug!("Editor text updated by {:?}", command);
        self.render()?;
        Ok(true)
    }

    fn folders_command(&mut self, command: &str, rest: &[String]) -> Result<()> {
        let ActiveScreen::Folders(screen) = &mut self.screen else {
            return Ok(());
        };
        let rows = screen.rows(&self.store);

        match command {
            "ls" => self.render()?,
            "open" => {
                let index = parse_index(rest.first(), rows.len())?;
                screen.select(&mut self.nav, &rows[index].id);
            }
            "add" => {
                screen.open_add_dialog();
                writeln!(self.out, "New Folder")?;
                writeln!(self.out, "Folder name (or {}):", CANCEL_INPUT)?;
            }
            "rm" => {
                let index = parse_index(rest.first(), rows.len())?;
                if !screen.request_delete(&self.store, &rows[index].id) {
                    writeln!(self.out, "'{}' cannot be deleted.", rows[index].name)?;
                } else if let Some(prompt) = screen.delete_prompt() {
                    writeln!(self.out, "Delete Folder")?;
                    write!(self.out, "{} [y/N]: ", prompt)?;
                    self.out.flush()?;
                }
            }
            other => return Err(unknown_command(other)),
        }
        Ok(())
    }

    fn notes_command(&mut self, command: &str, rest: &[String]) -> Result<()> {
        let ActiveScreen::Notes(screen) = &self.screen else {
            return Ok(());
        };
        let rows = screen.rows(&self.store);

        match command {
            "ls" => self.render()?,
            "open" => {
                let index = parse_index(rest.first(), rows.len())?;
                screen.select(&mut self.nav, &rows[index].id);
            }
            "new" => {
                screen.new_note(&mut self.store, &mut self.nav);
            }
            "check" => {
                let index = parse_index(rest.first(), rows.len())?;
                screen.toggle_checked(&mut self.store, &rows[index].id);
                self.render()?;
            }
            "back" => screen.back(&mut self.nav),
            other => return Err(unknown_command(other)),
        }
        Ok(())
    }

    fn editor_command(&mut self, command: &str) -> Result<()> {
        let ActiveScreen::Editor(editor) = &mut self.screen else {
            return Ok(());
        };

        match command {
            "show" => self.render()?,
            "clear" => {
                editor.clear();
                self.render()?;
            }
            "edit" => {
                let text = open_in_editor(&self.config, editor.text())?;
                editor.set_text(&text);
                self.render()?;
            }
            "done" => {
                if !editor.save(&mut self.store, &mut self.nav) {
                    writeln!(self.out, "Nothing to save yet.")?;
                }
            }
            "delete" => {
                if !editor.can_delete() {
                    writeln!(self.out, "Only saved notes can be deleted.")?;
                } else {
                    editor.delete(&mut self.store, &mut self.nav);
                }
            }
            "back" => {
                editor.back(&mut self.store, &mut self.nav);
            }
            other => return Err(unknown_command(other)),
        }
        Ok(())
    }

    /// Rebuilds the active controller when the top route changed
    fn sync_screen(&mut self) -> Result<()> {
        loop {
            let route = self.nav.current().clone();
            if route == self.shown {
                return Ok(());
            }

            let screen = match &route {
                Route::Folders => Some(ActiveScreen::Folders(FoldersScreen::new())),
                Route::Notes { folder_id } => {
                    NotesScreen::open(&self.store, &self.config, folder_id).map(ActiveScreen::Notes)
                }
                Route::NoteEditor { folder_id, target } => {
                    NoteEditor::open(&mut self.store, &self.config, folder_id, target)
                        .map(ActiveScreen::Editor)
                }
            };

            match screen {
                Some(screen) => {
                    self.screen = screen;
                    self.shown = route;
                    return self.render();
                }
                None => {
                    warn!("Route {} no longer resolves, going back", route);
                    self.nav.pop();
                }
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80)
            .min(50);
        let separator = "-".repeat(width);

        match &self.screen {
            ActiveScreen::Folders(screen) => {
                writeln!(self.out, "{}", style("Folders").bold())?;
                writeln!(self.out, "{}", separator)?;
                for (i, row) in screen.rows(&self.store).iter().enumerate() {
                    let marker = if row.deletable { "" } else { " (default)" };
                    writeln!(self.out, "{:>3}. {}{}  {}", i + 1, row.name, marker, row.count)?;
                }
            }
            ActiveScreen::Notes(screen) => {
                writeln!(self.out, "{}", style(screen.title(&self.store)).bold())?;
                writeln!(self.out, "{}", separator)?;
                let rows = screen.rows(&self.store);
                if rows.is_empty() {
                    writeln!(self.out, "No notes yet. Type `new` to create one.")?;
                }
                for (i, row) in rows.iter().enumerate() {
                    let title = if row.emphasized {
                        style(row.title.as_str()).bold()
                    } else {
                        style(row.title.as_str())
                    };
                    let check = match screen.policy() {
                        TitlePolicy::TitleBody if row.is_checked => "[x] ",
                        TitlePolicy::TitleBody => "[ ] ",
                        TitlePolicy::SingleField => "",
                    };
                    writeln!(self.out, "{:>3}. {}{}", i + 1, check, title)?;
                    if let Some(preview) = row.preview.as_deref().filter(|p| !p.is_empty()) {
                        writeln!(self.out, "     {}", preview)?;
                    }
                    writeln!(self.out, "     {}", style(&row.date).dim())?;
                }
            }
            ActiveScreen::Editor(editor) => {
                writeln!(self.out, "{}", style(editor.header(&self.store)).dim())?;
                writeln!(self.out, "{}", separator)?;
                if editor.text().is_empty() {
                    writeln!(self.out, "{}", style("Start typing...").dim())?;
                } else {
                    writeln!(self.out, "{}", editor.text())?;
                }
                writeln!(self.out, "{}", separator)?;
                let mut actions = vec!["back"];
                if editor.can_save() {
                    actions.push("done");
                }
                if editor.can_delete() {
                    actions.push("delete");
                }
                writeln!(self.out, "Actions: {}", actions.join(", "))?;
            }
        }
        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        let text = match &self.screen {
            ActiveScreen::Folders(_) => {
                "ls | open <n> | add | rm <n> | help | quit"
            }
            ActiveScreen::Notes(_) => {
                "ls | open <n> | new | check <n> | back | help | quit"
            }
            ActiveScreen::Editor(_) => {
                "show | type <text> | set <text> | clear | edit | done | delete | back | help | quit"
            }
        };
        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}

fn unknown_command(command: &str) -> NoteError {
    NoteError::InvalidCommand {
        message: format!("Unknown command: {} (try `help`)", command),
    }
}

/// Lets the user edit `text` in their external editor and returns the result
pub fn open_in_editor(config: &Config, text: &str) -> Result<String> {
    let mut temp_file = Builder::new().suffix(".txt").tempfile()?;
    temp_file.write_all(text.as_bytes())?;
    temp_file.flush()?;

    let editor_cmd = config.get_editor_command();
    info!("Opening {} to edit the note. Save and exit when done...", editor_cmd);
    launch_editor(&editor_cmd, temp_file.path())?;

    let content = read_to_string(temp_file.path())?;
    Ok(content.strip_suffix('\n').unwrap_or(&content).to_string())
}

fn launch_editor(editor_cmd: &str, file_path: &Path) -> Result<()> {
    let args = split(editor_cmd).map_err(|e| NoteError::EditorError {
        message: format!("Failed to parse editor command: {}", e),
    })?;

    let Some((program, extra)) = args.split_first() else {
        return Err(NoteError::EditorError {
            message: "Empty editor command".to_string(),
        });
    };

    let status = Command::new(program)
        .args(extra)
        .arg(file_path)
        .status()
        .map_err(|e| NoteError::EditorError {
            message: format!("Failed to execute editor command: {}", e),
        })?;

    if !status.success() {
        return Err(NoteError::EditorError {
            message: "Editor exited with non-zero status".to_string(),
        });
    }

    Ok(())
}
