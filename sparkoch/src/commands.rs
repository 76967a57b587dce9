//! Command runners
//!
//! Every runner reads from an `ItemSource` and writes plain text to the
//! given writer so the binary and the tests share one code path.

use std::io::Write;

use anyhow::Context;
use catalog::{
    count_by_category, group_offers_by_store, suggest, CatalogItem, FilterState, ItemFilter, ItemSource,
    RawViewRequest, ShoppingList, ViewRequest,
};
use onboarding::LocalStorageSink;
use shared::{component_debug, AppConfig, Component, Offer};

use crate::args::{Command, ItemKind, ViewArgs};
use crate::history::HistoryStore;
use crate::render::{section_lines, totals_line, Render};
use crate::script;

/// Number of search suggestions printed under a view
pub const SUGGESTION_LIMIT: usize = 3;

pub fn run(config: &AppConfig, command: &Command, source: &dyn ItemSource, out: &mut dyn Write) -> anyhow::Result<()> {
    component_debug!(Component::Cli, command = ?command, "Running command");
    match command {
        Command::Offers(view) => {
            print_view(&source.offers()?, view, config, out)?;
            remember_query(config, &view.query)
        }
        Command::Recipes(view) => {
            print_view(&source.recipes()?, view, config, out)?;
            remember_query(config, &view.query)
        }
        Command::Stores(view) => {
            print_view(&source.stores()?, view, config, out)?;
            remember_query(config, &view.query)
        }
        Command::Counts { kind, category, filters } => match kind {
            ItemKind::Offers => print_counts(&source.offers()?, category, filters, out),
            ItemKind::Recipes => print_counts(&source.recipes()?, category, filters, out),
            ItemKind::Stores => print_counts(&source.stores()?, category, filters, out),
        },
        Command::Groups { query, filters } => print_groups(source, query, filters, config, out),
        Command::List => print_list(source, out),
        Command::History => print_history(config, out),
        Command::Onboard { script: path } => script::run_file(config, path, out),
        Command::Profile => print_profile(config, out),
    }
}

fn print_view<T>(items: &[T], args: &ViewArgs, config: &AppConfig, out: &mut dyn Write) -> anyhow::Result<()>
where
    T: CatalogItem + Render,
{
    let raw = RawViewRequest {
        query: args.query.clone(),
        filters: args.filters.clone(),
        sort: args.sort.clone(),
    };
    let request = ViewRequest::<T>::parse(&raw, config.parse_policy)?;
    let view = request.run(items)?;

    writeln!(
        out,
        "{} von {} {} (Sortierung: {}, {} Filter aktiv)",
        view.len(),
        items.len(),
        T::DOMAIN,
        request.sort,
        request.filters.active_count()
    )?;
    for item in view.page(args.page, config.page_size) {
        writeln!(out, "{}", item.line())?;
    }
    if view.has_more(args.page, config.page_size) {
        writeln!(out, "… weitere Ergebnisse mit --page {}", args.page + 1)?;
    }

    let names: Vec<&str> = items
        .iter()
        .filter_map(|item| item.searchable_fields().first().copied())
        .collect();
    let suggestions = suggest(&names, &args.query, SUGGESTION_LIMIT);
    if !suggestions.is_empty() {
        writeln!(out, "Vorschläge: {}", suggestions.join(", "))?;
    }
    Ok(())
}

fn print_counts<T>(items: &[T], category: &str, filters: &[String], out: &mut dyn Write) -> anyhow::Result<()>
where
    T: CatalogItem,
{
    let key: <T::Filter as ItemFilter>::Key = category.parse()?;
    let filters = FilterState::<T::Filter>::parse_args(filters)?;
    let counts = count_by_category(items, &filters, key);

    writeln!(out, "{} nach {}:", T::DOMAIN, key)?;
    for (facet, count) in &counts {
        writeln!(out, "  {:<24} {count}", facet.to_string())?;
    }
    Ok(())
}

fn print_groups(
    source: &dyn ItemSource,
    query: &str,
    filters: &[String],
    config: &AppConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let offers = source.offers()?;
    let raw = RawViewRequest {
        query: query.to_string(),
        filters: filters.to_vec(),
        sort: None,
    };
    let view = ViewRequest::<Offer>::parse(&raw, config.parse_policy)?.run(&offers)?;

    for group in group_offers_by_store(view.iter()) {
        let distance = group.first().map(|offer| offer.distance).unwrap_or_default();
        writeln!(out, "{} ({:.1} km) • {} Angebote", group.key, distance, group.len())?;
        for offer in &group.items {
            writeln!(out, "  {}", offer.line())?;
        }
    }
    Ok(())
}

fn print_list(source: &dyn ItemSource, out: &mut dyn Write) -> anyhow::Result<()> {
    let list = ShoppingList::from_items(source.shopping_items()?);
    let done = list.completed().count();
    writeln!(out, "Einkaufsliste: {} Artikel, {} erledigt", list.len(), done)?;
    for section in list.by_store() {
        for line in section_lines(&section) {
            writeln!(out, "{line}")?;
        }
    }
    writeln!(out, "{}", totals_line(&list.totals()))?;
    Ok(())
}

fn remember_query(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    if query.is_empty() {
        return Ok(());
    }
    HistoryStore::new(&config.storage_dir)
        .record(query)
        .context("Failed to update search history")?;
    Ok(())
}

fn print_history(config: &AppConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let history = HistoryStore::new(&config.storage_dir).load()?;
    if history.entries().is_empty() {
        writeln!(out, "Keine letzten Suchen")?;
    }
    for entry in history.entries() {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

fn print_profile(config: &AppConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let sink = LocalStorageSink::new(&config.storage_dir);
    match sink.load()? {
        Some(profile) => writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?,
        None => writeln!(out, "Kein Profil gespeichert in {}", sink.path().display())?,
    }
    Ok(())
}
