use anyhow::{Context, Result};
use cinefila_core::{
    MergedFilm,
    assets::{probe_stills, resolve_director_photo, resolve_poster},
    present::{FilmCard, FilmDetail, film_count_label},
    query::FilterSelection,
    routes::Route,
};
use cinefila_model::prelude::{FilterDimension, Slug};
use serde::Serialize;
use serde_json::json;

use crate::GlobalArgs;
use crate::session::Session;

/// How much of the visible list `list` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    All,
    Window { more: usize, preview: bool },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{text}");
    Ok(())
}

pub async fn list(global: &GlobalArgs, selection: &FilterSelection, paging: Paging) -> Result<()> {
    let session = Session::open(global).await?;
    let engine = session.snapshot.engine();
    let visible = engine.visible(selection);

    let shown: &[&MergedFilm] = match paging {
        Paging::All => &visible,
        Paging::Window { more, preview } => {
            let mut window = if preview {
                session.preview_window()
            } else {
                session.catalogue_window()
            };
            for _ in 0..more {
                window.show_more();
            }
            window.slice(&visible)
        }
    };
    let remaining = visible.len() - shown.len();

    if global.json {
        let films: Vec<FilmCard> = shown
            .iter()
            .map(|film| FilmCard::new(film, &session.assets))
            .collect();
        return print_json(&json!({
            "total": visible.len(),
            "shown": shown.len(),
            "has_more": remaining > 0,
            "films": films,
        }));
    }

    for film in shown {
        let card = FilmCard::new(film, &session.assets);
        println!("{}  ({})  /film/{}", card.heading, card.director, card.slug);
    }
    println!("Showing {} of {}", shown.len(), film_count_label(visible.len()));
    if remaining > 0 {
        println!("{remaining} more; pass --more to show the next page");
    }
    Ok(())
}

pub async fn options(global: &GlobalArgs, selection: &FilterSelection) -> Result<()> {
    let session = Session::open(global).await?;
    let outcome = session.snapshot.engine().evaluate(selection);

    if global.json {
        return print_json(&json!({
            "matching": outcome.visible.len(),
            "available": outcome.available,
        }));
    }

    println!("{}", film_count_label(outcome.visible.len()));
    for dimension in FilterDimension::all() {
        let values = outcome.available.values(*dimension);
        if values.is_empty() {
            println!("{}: -", dimension.label());
        } else {
            println!("{}: {}", dimension.label(), values.join(", "));
        }
    }
    Ok(())
}

pub async fn show(global: &GlobalArgs, slug: &str, probe: bool) -> Result<()> {
    let slug = Slug::parse(slug).with_context(|| format!("`{slug}` is not a film slug"))?;
    let session = Session::open(global).await?;
    let film = session
        .snapshot
        .find_by_slug(slug.as_str())
        .with_context(|| format!("no film with slug `{slug}`"))?;

    let mut detail = FilmDetail::new(film, &session.assets);
    if probe {
        let probe = session.asset_probe()?;
        detail.card.poster =
            Some(resolve_poster(probe.as_ref(), &session.assets, &film.record).await);
        detail.director_photo =
            resolve_director_photo(probe.as_ref(), &session.assets, &film.record).await;
        detail.still_candidates = probe_stills(probe.as_ref(), &detail.still_candidates).await;
    }

    if global.json {
        return print_json(&detail);
    }
    print_detail(&detail);
    Ok(())
}

fn print_detail(detail: &FilmDetail) {
    let card = &detail.card;
    println!("{}", card.title);
    if let Some(original) = &detail.original_title {
        println!("  original title: {original}");
    }
    println!("  {}", card.heading);
    println!("  director: {}", card.director);

    let optional = [
        ("rank", Some(card.rank.to_string())),
        ("runtime", detail.runtime.clone()),
        ("country", detail.country.clone()),
        ("audience", detail.audience.clone()),
        ("producer", detail.producer.clone()),
        ("status", detail.status.clone()),
        ("trailer", detail.trailer_url.clone()),
        ("poster", card.poster.clone()),
        ("director photo", detail.director_photo.clone()),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            println!("  {label}: {value}");
        }
    }
    if !card.genres.is_empty() {
        println!("  genres: {}", card.genres.join(", "));
    }
    if !detail.keywords.is_empty() {
        println!("  keywords: {}", detail.keywords.join(", "));
    }
    if let Some(logline) = &card.logline {
        println!("\n{logline}");
    }
    if let Some(synopsis) = &detail.synopsis {
        println!("\n{synopsis}");
    }
    for (heading, lines) in [("Festivals", &detail.festivals), ("Awards", &detail.awards)] {
        if !lines.is_empty() {
            println!("\n{heading}:");
            for line in lines {
                println!("  - {line}");
            }
        }
    }
    if !detail.still_candidates.is_empty() {
        println!("\n{} stills", detail.still_candidates.len());
    }
}

pub async fn unranked(global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global).await?;
    let titles = session.snapshot.unranked_titles();

    if global.json {
        return print_json(&titles);
    }
    for title in &titles {
        println!("{title}");
    }
    println!("{} unranked", film_count_label(titles.len()));
    Ok(())
}

fn route_kind(route: &Route) -> &'static str {
    match route {
        Route::Home => "home",
        Route::Catalogue => "catalogue",
        Route::Film(_) => "film",
        Route::News => "news",
        Route::Workshops => "workshops",
        Route::WtfOff => "wtf-off",
        Route::NotFound(_) => "not-found",
    }
}

pub async fn route(global: &GlobalArgs, path: &str) -> Result<()> {
    let route = Route::parse(path);

    // Only film routes need the catalogue.
    let film_title = match &route {
        Route::Film(_) => {
            let session = Session::open(global).await?;
            route
                .resolve_film(&session.snapshot)
                .map(|film| film.display_title().to_string())
        }
        _ => None,
    };

    if global.json {
        return print_json(&json!({
            "kind": route_kind(&route),
            "path": route.path(),
            "film": film_title,
        }));
    }

    match (&route, film_title) {
        (Route::Film(slug), Some(title)) => println!("film {slug}: {title}"),
        (Route::Film(slug), None) => println!("film {slug}: no matching film"),
        (other, _) => println!("{}: {}", route_kind(other), other.path()),
    }
    Ok(())
}
