use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

impl Format {
    /// One record as pretty JSON or a single-row table.
    pub fn record<T: Serialize + Tabled>(self, item: T) -> Result<String> {
        match self {
            Format::Json => to_json(&item),
            Format::Table => Ok(table(vec![item])),
        }
    }

    /// A listing. In table mode an empty listing renders as `empty_hint`;
    /// JSON always gets the array, empty or not.
    pub fn records<T: Serialize + Tabled>(self, items: Vec<T>, empty_hint: &str) -> Result<String> {
        match self {
            Format::Json => to_json(&items),
            Format::Table if items.is_empty() => Ok(empty_hint.to_string()),
            Format::Table => Ok(table(items)),
        }
    }

    /// Confirmation line above a table. JSON output stays machine-readable.
    pub fn headline(self, msg: &str) {
        if self == Format::Table {
            success(msg);
        }
    }

    pub fn show<T: Serialize + Tabled>(self, item: T) -> Result<()> {
        println!("{}", self.record(item)?);
        Ok(())
    }

    pub fn show_created<T: Serialize + Tabled>(self, item: T, what: &str) -> Result<()> {
        self.headline(&format!("{} created", what));
        self.show(item)
    }

    pub fn show_all<T: Serialize + Tabled>(self, items: Vec<T>, empty_hint: &str) -> Result<()> {
        println!("{}", self.records(items, empty_hint)?);
        Ok(())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to render JSON output")
}

fn table<T: Tabled>(items: Vec<T>) -> String {
    Table::new(items).with(Style::rounded()).to_string()
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn display_option(o: &Option<String>) -> String {
    o.clone().unwrap_or_else(|| "-".into())
}
