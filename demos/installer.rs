//! Example: a text-mode OS installer wizard.
//!
//! Walks through a welcome banner, a locale pick, a required partition
//! selection, and a user account form, then shows a summary popup.
//! Listings are canned; a real installer would read them from the system.
//!
//! Run with: `cargo run --example installer`
//! Logs go to `installer.log`; set `RUST_LOG=debug` for key-level detail.

use tessera::widgets::{
    pick_many_required, pick_one, popup, FocusRing, Intercept, Panel, Record, Table, TextField,
    Toggle,
};
use tessera::{Backend, Key, Surface};

// ---------------------------------------------------------------------------
// Canned listings
// ---------------------------------------------------------------------------

const LOCALES: &str = "\
en_US.UTF-8|English (United States)
en_GB.UTF-8|English (United Kingdom)
de_DE.UTF-8|Deutsch (Deutschland)
fr_FR.UTF-8|Français (France)
ja_JP.UTF-8|日本語 (日本)
pt_BR.UTF-8|Português (Brasil)";

fn locales() -> Table {
    Table::unified(LOCALES.lines().filter_map(|line| {
        let (code, name) = line.split_once('|')?;
        Some(Record::from([("Locale", code), ("Name", name)]))
    }))
}

/// Block devices as `lsblk` reports them: not every device has every field.
fn partitions() -> Table {
    Table::unified([
        Record::from([("NAME", "nvme0n1p1"), ("SIZE", "600M"), ("FSTYPE", "vfat")])
            .with("MOUNTPOINT", "/boot/efi"),
        Record::from([("NAME", "nvme0n1p2"), ("SIZE", "1G"), ("FSTYPE", "ext4")]),
        Record::from([("NAME", "nvme0n1p3"), ("SIZE", "475.3G"), ("FSTYPE", "btrfs")])
            .with("LABEL", "fedora"),
        Record::from([("NAME", "sda1"), ("SIZE", "1.8T")]).with("LABEL", "backup"),
    ])
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

struct Account {
    name: String,
    password: String,
    admin: bool,
}

/// TAB and BACKTAB move between fields; ENTER on any field finishes.
fn account<B: Backend>(panel: &mut Panel<'_, B>) -> tessera::Result<Account> {
    panel.set_text("Username:\n\nPassword:\n\nAdministrator:")?;
    let mut name = TextField::new(1, 16, 24);
    let mut password = TextField::new(3, 16, 24).masked(true);
    let mut admin = Toggle::new(5, 16).checked(true);
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

fn wizard(surface: &mut Surface) -> tessera::Result<String> {
    surface.draw(
        "Welcome to the installer!",
        "This wizard will guide you through the installation.",
    )?;
    surface.wait()?;

    surface.draw(
        "Select your locale",
        "Arrow keys move, CTRL-F searches, ENTER confirms.",
    )?;
    let locale = {
        let mut panel = Panel::centered(surface, 10, 50)?;
        pick_one(&mut panel, &locales(), "Locale")?.unwrap_or_default()
    };
    tracing::info!(%locale, "locale chosen");

    surface.draw(
        "Select partitions",
        "SPACE marks a partition to format, ENTER confirms.",
    )?;
    let targets = {
        let mut panel = Panel::centered(surface, 10, 60)?;
        pick_many_required(
            &mut panel,
            &partitions(),
            "NAME",
            "Mark at least one partition\nwith SPACE before ENTER.",
        )?
    };
    tracing::info!(?targets, "partitions chosen");

    surface.draw("Create a user", "TAB moves between fields, ENTER finishes.")?;
    let user = {
        let mut panel = Panel::centered(surface, 8, 44)?;
        account(&mut panel)?
    };
    tracing::info!(user = %user.name, admin = user.admin, "account entered");

    let summary = format!(
        "Locale:     {locale}\nPartitions: {}\nUser:       {}{}\nPassword:   {}",
        targets.join(", "),
        user.name,
        if user.admin { " (admin)" } else { "" },
        if user.password.is_empty() { "not set" } else { "set" },
    );
    surface.redraw()?;
    popup(surface, &summary)?;
    Ok(summary)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tessera::logging::init("installer.log")?;

    let mut surface = Surface::new()?;
    let outcome = wizard(&mut surface);
    surface.close()?;

    match outcome {
        Ok(summary) => println!("{summary}"),
        Err(tessera::Error::Interrupted) => println!("Installation cancelled."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
