//! System font discovery and loading.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    sync::{Mutex, OnceLock},
};

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::Font;

use engravekit_core::FontError;

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// Sorted list of unique font family names installed on this system.
pub fn list_font_families() -> Vec<String> {
    let mut families = BTreeSet::new();
    for face in db().faces() {
        for (name, _) in &face.families {
            families.insert(name.clone());
        }
    }
    families.into_iter().collect()
}

/// Resolves a family name to a loaded font.
///
/// Unknown families fall back to the platform sans-serif face, then to any
/// face the database can load, so a missing family is a substitution rather
/// than a failure. Parsed fonts are cached for the lifetime of the process.
pub fn get_font_for(family: &str) -> Result<&'static Font<'static>, FontError> {
    static CACHE: OnceLock<Mutex<HashMap<String, &'static Font<'static>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(family) {
        return Ok(font);
    }

    if db().len() == 0 {
        return Err(FontError::NoFontsAvailable);
    }

    let loaded = load_font_from_system(family)
        .or_else(|| load_font_from_system(""))
        .or_else(load_any_face);
    let font = loaded.ok_or_else(|| FontError::Unusable {
        family: family.to_string(),
    })?;

    let font_ref: &'static Font<'static> = Box::leak(Box::new(font));
    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(family.to_string(), font_ref);
    Ok(font_ref)
}

fn load_font_from_system(family: &str) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" => vec![Family::SansSerif],
        "Serif" => vec![Family::Serif],
        "Monospace" => vec![Family::Monospace],
        other => vec![Family::Name(other)],
    };

    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;
    load_face(face)
}

fn load_any_face() -> Option<Font<'static>> {
    db().faces().into_iter().find_map(load_face)
}

fn load_face(face: &fontdb::FaceInfo) -> Option<Font<'static>> {
    match &face.source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::Binary(bytes) => Font::try_from_vec(bytes.as_ref().as_ref().to_vec()),
    }
}
