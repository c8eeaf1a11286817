//! Example: an editable package list.
//!
//! The table lives in a `RefCell`; the view borrows it for each render and
//! the key handler mutates it in between.
//!
//! Run with: `cargo run --example table_browser`
//!
//! Keys: arrows and PAGE-UP/PAGE-DOWN move, HOME/END and LEFT/RIGHT scroll
//! sideways, CTRL-F finds, `a` adds a copy of the selected row, `d` deletes
//! it, `x` flips its `Enabled` column, ENTER quits.

use std::cell::RefCell;
use tessera::widgets::{Panel, Record, Table, TableView};
use tessera::{Key, Surface};

fn packages() -> Table {
    Table::unified(
        [
            ("bash", "5.2.26", "The GNU Bourne Again shell"),
            ("coreutils", "9.4", "A set of basic GNU tools commonly used in shell scripts"),
            ("curl", "8.6.0", "A utility for getting files from remote servers"),
            ("git", "2.44.0", "Fast version control system"),
            ("neovim", "0.9.5", "Vim-fork focused on extensibility and agility"),
            ("ripgrep", "14.1.0", "Line oriented search tool using Rust's regex library"),
            ("tmux", "3.4", "A terminal multiplexer"),
            ("vim-enhanced", "9.1", "A version of the VIM editor which includes recent enhancements"),
            ("zsh", "5.9", "Powerful interactive shell"),
        ]
        .map(|(name, version, summary)| {
            Record::from([
                ("Name", name),
                ("Version", version),
                ("Enabled", "yes"),
                ("Summary", summary),
            ])
        }),
    )
}

fn edit(table: &mut Table, key: &Key, index: usize) {
    let outcome = match key {
        Key::Char('a') => match table.record(index) {
            Some(record) => table.push(record),
            None => Ok(()),
        },
        Key::Char('d') => table.remove(index).map(|_| ()),
        Key::Char('x') => {
            let flipped = match table.get(index, "Enabled") {
                Some("yes") => "no",
                _ => "yes",
            };
            table.set(index, "Enabled", flipped)
        }
        _ => Ok(()),
    };
    if let Err(err) = outcome {
        tracing::warn!(%err, "edit rejected");
    }
}

fn main() -> tessera::Result<()> {
    let table = RefCell::new(packages());
    let mut surface = Surface::new()?;
    surface.draw(
        "Package browser",
        "a: duplicate row   d: delete row   x: toggle enabled   ENTER: quit",
    )?;

    let chosen = {
        let (rows, cols) = surface.size()?;
        let mut panel = Panel::centered(&mut surface, rows.saturating_sub(8).max(6), cols.min(72))?;
        TableView::new().run(
            &mut panel,
            || table.borrow(),
            |key, index| edit(&mut table.borrow_mut(), key, index),
        )?
    };
    surface.close()?;

    let table = table.into_inner();
    if let Some(name) = chosen.and_then(|i| table.get(i, "Name")) {
        println!("Last selected: {name}");
    }
    println!("{} packages", table.len());
    Ok(())
}
