//! Site routes and deep-link resolution.

use std::fmt;

use cinefila_model::Slug;

use crate::catalog::MergedFilm;
use crate::store::CatalogueSnapshot;

/// Path prefixes served by the site.
pub mod paths {
    pub const HOME: &str = "/";
    pub const CATALOGUE: &str = "/catalogue";
    pub const FILM_PREFIX: &str = "/film/";
    pub const NEWS: &str = "/news";
    pub const WORKSHOPS: &str = "/workshops";
    pub const WTF_OFF: &str = "/wtf-off";
}

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalogue,
    Film(Slug),
    News,
    Workshops,
    WtfOff,
    NotFound(String),
}

impl Route {
    /// Match a request path. Query strings and fragments are ignored, as is
    /// a single trailing slash. A film segment must be a well-formed slug.
    pub fn parse(path: &str) -> Self {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let normalized = match bare.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => bare,
        };

        match normalized {
            "" | paths::HOME => Route::Home,
            paths::CATALOGUE => Route::Catalogue,
            paths::NEWS => Route::News,
            paths::WORKSHOPS => Route::Workshops,
            paths::WTF_OFF => Route::WtfOff,
            other => other
                .strip_prefix(paths::FILM_PREFIX)
                .and_then(|segment| Slug::parse(segment).ok())
                .map(Route::Film)
                .unwrap_or_else(|| Route::NotFound(path.to_string())),
        }
    }

    /// Deep link to `film`.
    pub fn film(film: &MergedFilm) -> Self {
        Route::Film(film.slug())
    }

    /// Canonical path; unknown routes keep the path they were parsed from.
    pub fn path(&self) -> String {
        match self {
            Route::Home => paths::HOME.to_string(),
            Route::Catalogue => paths::CATALOGUE.to_string(),
            Route::Film(slug) => format!("{}{}", paths::FILM_PREFIX, slug),
            Route::News => paths::NEWS.to_string(),
            Route::Workshops => paths::WORKSHOPS.to_string(),
            Route::WtfOff => paths::WTF_OFF.to_string(),
            Route::NotFound(original) => original.clone(),
        }
    }

    /// The film a route points at, if it is a film route with a match.
    pub fn resolve_film<'a>(&self, snapshot: &'a CatalogueSnapshot) -> Option<&'a MergedFilm> {
        match self {
            Route::Film(slug) => snapshot.find_by_slug(slug.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
