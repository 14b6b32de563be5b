use clap::Parser;
use colored::*;
use reslib::api::Library;
use reslib::error::{ReslibError, Result};
use reslib::model::SortKey;

mod args;
mod render;
mod styles;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List {
            search,
            types,
            tags,
            year,
            sort,
            json,
        }) => handle_list(search, types, tags, year, sort, json),
        Some(Commands::Show { id }) => handle_show(&id),
        Some(Commands::Filters) => handle_filters(),
        None => handle_list(None, vec![], vec![], None, None, false),
    }
}

fn handle_list(
    search: Option<String>,
    types: Vec<String>,
    tags: Vec<String>,
    year: Option<String>,
    sort: Option<String>,
    json: bool,
) -> Result<()> {
    let mut library = Library::with_builtin();

    if let Some(term) = search {
        library.set_search(term);
    }
    for label in types {
        library.toggle_type(label);
    }
    for tag in tags {
        library.toggle_tag(tag);
    }
    if let Some(year) = year {
        library.set_date(year);
    }
    if let Some(sort) = sort {
        library.set_sort(SortKey::parse(&sort));
    }

    let view = library.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render_list(&view));
    }
    Ok(())
}

fn handle_show(id: &str) -> Result<()> {
    let library = Library::with_builtin();
    let resource = library
        .catalog()
        .get(id)
        .ok_or_else(|| ReslibError::ResourceNotFound(id.to_string()))?;
    print!("{}", render::render_card(resource));
    Ok(())
}

fn handle_filters() -> Result<()> {
    let library = Library::with_builtin();
    print!("{}", render::render_facets(library.catalog()));
    Ok(())
}
