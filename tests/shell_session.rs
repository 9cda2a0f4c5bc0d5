use std::io::Cursor;

use pocketnotes::{App, Config, Flow, Route, TitlePolicy};

fn app(config: Config) -> App<Vec<u8>> {
    App::new(config, Vec::new())
}

fn feed(app: &mut App<Vec<u8>>, lines: &[&str]) {
    for line in lines {
        app.handle_line(line).expect("command succeeds");
    }
}

fn work_folder_id(app: &App<Vec<u8>>) -> String {
    app.store()
        .list_folders()
        .into_iter()
        .find(|l| l.folder.name == "Work")
        .map(|l| l.folder.id)
        .expect("Work folder exists")
}

#[test]
fn add_folder_write_note_and_count() {
    let mut app = app(Config::default());
    feed(
        &mut app,
        &["add", "Work", "open 2", "new", "type Buy milk", "done"],
    );

    let work = work_folder_id(&app);
    assert_eq!(app.route(), &Route::Notes { folder_id: work.clone() });
    assert_eq!(app.store().note_count(&work), 1);
    assert_eq!(app.store().list_notes(&work)[0].content, "Buy milk");

    feed(&mut app, &["open 1", "delete"]);
    assert_eq!(app.store().note_count(&work), 0);
}

#[test]
fn blank_folder_name_keeps_dialog_open() {
    let mut app = app(Config::default());
    feed(&mut app, &["add", "   ", ":cancel"]);
    assert_eq!(app.store().list_folders().len(), 1);
    assert_eq!(app.route(), &Route::Folders);
}

#[test]
fn delete_folder_needs_confirmation() {
    let mut app = app(Config::default());
    feed(&mut app, &["add", "Work", "rm 2", "n"]);
    assert_eq!(app.store().list_folders().len(), 2);

    feed(&mut app, &["rm 2", "yes"]);
    assert_eq!(app.store().list_folders().len(), 1);

    feed(&mut app, &["rm 1"]);
    assert_eq!(app.store().list_folders().len(), 1);
}

#[test]
fn back_from_empty_editor_leaves_no_note() {
    let mut app = app(Config::default());
    feed(&mut app, &["add", "Work", "open 2", "new", "back"]);
    let work = work_folder_id(&app);
    assert_eq!(app.route(), &Route::Notes { folder_id: work.clone() });
    assert_eq!(app.store().note_count(&work), 0);
    assert!(app.store().note(&work, "new").is_none());
}

#[test]
fn title_body_edit_round_trip() {
    let config = Config {
        title_policy: TitlePolicy::TitleBody,
        ..Config::default()
    };
    let mut app = app(config);
    feed(
        &mut app,
        &["add", "Work", "open 2", "new", "type Trip", "type pack bags", "done"],
    );
    let work = work_folder_id(&app);
    let note = app.store().list_notes(&work)[0].clone();
    assert_eq!(note.title, "Trip");
    assert_eq!(note.content, "pack bags");

    feed(&mut app, &["check 1", "open 1", "type tickets", "done"]);
    let note = app.store().list_notes(&work)[0].clone();
    assert_eq!(note.content, "pack bags\ntickets");
    assert!(note.is_checked);
}

#[test]
fn typed_text_is_stored_verbatim() {
    let mut app = app(Config::default());
    feed(
        &mut app,
        &[
            "add",
            "Work",
            "open 2",
            "new",
            "type Don't forget milk",
            "type say \"hi\"  twice",
            "done",
        ],
    );
    let work = work_folder_id(&app);
    assert_eq!(
        app.store().list_notes(&work)[0].content,
        "Don't forget milk\nsay \"hi\"  twice"
    );

    feed(&mut app, &["open 1", "set a    b\tc", "done"]);
    assert_eq!(app.store().list_notes(&work)[0].content, "a    b\tc");
}

#[test]
fn bad_input_is_reported_not_fatal() {
    let mut app = app(Config::default());
    assert!(app.handle_line("open 9").is_err());
    assert!(app.handle_line("frobnicate").is_err());
    assert!(app.handle_line("type 'unterminated").is_err());
    assert_eq!(app.handle_line("").unwrap(), Flow::Continue);
    assert_eq!(app.handle_line("quit").unwrap(), Flow::Quit);
}

#[test]
fn scripted_session_renders_screens() {
    let mut app = app(Config::default());
    let script = "add\nWork\nopen 2\nnew\ntype hello\ndone\nbogus\nquit\nls\n";
    app.run(Cursor::new(script)).unwrap();

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(output.contains("Folders"));
    assert!(output.contains("No notes yet"));
    assert!(output.contains("New Note"));
    assert!(output.contains("hello"));
    assert!(output.contains("Unknown command: bogus"));
}
