//! Whole-screen flows driven through the headless backend.

use tessera_core::testing::TestBackend;
use tessera_core::{Error, Key, Rect, Result, Surface, SurfaceOptions};
use tessera_widgets::{
    pick_many_required, pick_one, FocusRing, Intercept, Panel, Record, Table, TableView,
    TextField, Toggle,
};

fn typed(text: &str) -> Vec<Key> {
    text.chars().map(Key::from_char).collect()
}

fn surface(keys: Vec<Key>) -> Surface<TestBackend> {
    Surface::with_backend(TestBackend::new(24, 80).with_keys(keys), SurfaceOptions::default())
}

struct Account {
    name: String,
    password: String,
    admin: bool,
}

/// Name, password and admin flag, cycled with TAB until ENTER.
fn account_form(panel: &mut Panel<'_, TestBackend>) -> Result<Account> {
    panel.set_text("Name:\n\nPassword:\n\nAdmin:")?;
    let mut name = TextField::new(1, 12, 20);
    let mut password = TextField::new(3, 12, 20).masked(true);
    let mut admin = Toggle::new(5, 12);
    name.show(panel)?;
    password.show(panel)?;
    admin.show(panel)?;

    let mut ring = FocusRing::new(3);
    let mut done = false;
    while !done {
        let focused = ring.focused();
        let mut intercept = |key: &Key| {
            if *key == Key::Enter {
                done = true;
                Intercept::Deactivate
            } else {
                ring.handle(key)
            }
        };
        match focused {
            0 => {
                name.activate_with(panel, |_, k| intercept(k))?;
            }
            1 => {
                password.activate_with(panel, |_, k| intercept(k))?;
            }
            _ => {
                admin.activate_with(panel, |_, k| intercept(k))?;
            }
        }
    }
    Ok(Account {
        name: name.value(),
        password: password.value(),
        admin: admin.is_checked(),
    })
}

const FORM: Rect = Rect::new(9, 40, 6, 10);

#[test]
fn form_collects_every_field() {
    let mut keys = typed("alice");
    keys.push(Key::Tab);
    keys.extend(typed("pw12"));
    keys.push(Key::Tab);
    keys.push(Key::Space);
    keys.push(Key::Enter);
    let mut s = surface(keys);
    s.draw("Create user", "Fill in the account").unwrap();

    let mut panel = Panel::new(&mut s, FORM).unwrap();
    let account = account_form(&mut panel).unwrap();
    drop(panel);

    assert_eq!(account.name, "alice");
    assert_eq!(account.password, "pw12");
    assert!(account.admin);

    let b = s.backend();
    assert!(b.line(7).contains("Name:"));
    assert!(b.line(7).contains("alice"));
    assert!(b.line(9).contains("****"));
    assert!(!b.contents().contains("pw12"));
    assert!(b.line(11).contains('🗹'));
    assert!(!b.cursor_visible());
    assert_eq!(b.pending_keys(), 0);
}

#[test]
fn backtab_returns_to_earlier_field() {
    let mut keys = typed("bob");
    keys.extend([Key::Tab, Key::Tab, Key::BackTab, Key::BackTab]);
    keys.extend([Key::Backspace, Key::Char('x'), Key::Enter]);
    let mut s = surface(keys);
    let mut panel = Panel::new(&mut s, FORM).unwrap();
    let account = account_form(&mut panel).unwrap();
    assert_eq!(account.name, "box");
    assert_eq!(account.password, "");
    assert!(!account.admin);
}

#[test]
fn interrupt_abandons_form() {
    let mut keys = typed("carol");
    keys.push(Key::Ctrl('c'));
    let mut s = surface(keys);
    let mut panel = Panel::new(&mut s, FORM).unwrap();
    assert!(matches!(account_form(&mut panel), Err(Error::Interrupted)));
}

fn packages() -> Table {
    Table::from_records(
        [
            ("bash", "5.2"),
            ("neovim", "0.10"),
            ("vim", "9.1"),
            ("zsh", "5.9"),
        ]
        .map(|(name, version)| Record::from([("PACKAGE", name), ("VERSION", version)])),
    )
    .unwrap()
}

const LIST: Rect = Rect::new(8, 30, 6, 25);

#[test]
fn find_steps_through_matches_then_picks() {
    let mut keys = vec![Key::Ctrl('f')];
    keys.extend(typed("vim"));
    keys.extend([Key::Enter, Key::Ctrl('f')]);
    keys.extend(typed("vim"));
    keys.extend([Key::Enter, Key::Enter]);
    let mut s = surface(keys);
    s.draw("Packages", "Choose an editor").unwrap();

    let t = packages();
    let mut panel = Panel::new(&mut s, LIST).unwrap();
    let picked = pick_one(&mut panel, &t, "PACKAGE").unwrap();
    drop(panel);

    assert_eq!(picked.as_deref(), Some("vim"));
    let b = s.backend();
    assert!(b.line(1).contains("Packages"));
    assert!(!b.contents().contains("FIND: "));
}

#[test]
fn find_miss_reports_and_keeps_selection() {
    let mut keys = vec![Key::Down, Key::Ctrl('f')];
    keys.extend(typed("emacs"));
    keys.extend([Key::Enter, Key::Char('q'), Key::Enter]);
    let mut s = surface(keys);
    let t = packages();
    let mut panel = Panel::new(&mut s, LIST).unwrap();
    let chosen = TableView::new().run(&mut panel, || &t, |_, _| {}).unwrap();
    assert_eq!(chosen, Some(1));
}

#[test]
fn partitions_require_a_mark() {
    let disks = Table::unified([
        Record::from([("NAME", "sda1"), ("FSTYPE", "ext4")]),
        Record::from([("NAME", "sda2"), ("LABEL", "home")]),
    ]);
    assert_eq!(disks.schema(), ["NAME", "FSTYPE", "LABEL"]);

    let keys = vec![
        Key::Enter,     // nothing marked yet
        Key::Char('x'), // dismiss the warning
        Key::Down,
        Key::Space,
        Key::Enter,
    ];
    let mut s = surface(keys);
    s.draw("Partitions", "Mark the partitions to format").unwrap();
    let mut panel = Panel::new(&mut s, LIST).unwrap();
    let picked =
        pick_many_required(&mut panel, &disks, "NAME", "Select at least one partition").unwrap();
    drop(panel);

    assert_eq!(picked, ["sda2"]);
    assert!(s.backend().line(1).contains("Partitions"));
    assert!(!s.backend().contents().contains("Select at least one"));
}
