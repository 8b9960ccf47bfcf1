// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Marker the wiki puts on items a troop only sometimes carries.
pub const POSSIBLE_MARKER: &str = "(Possible)";

/// Clean one equipment name as listed on a troop page.
///
/// `None` for placeholders (`?`, empty) and for `(Possible)` items.
/// Otherwise the name up to its first parenthetical qualifier,
/// e.g. `"Javelin (Throwing)"` → `"Javelin"`.
pub fn clean_item_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() || name == "?" || name.contains(POSSIBLE_MARKER) {
        return None;
    }
    let name = match name.find(" (") {
        Some(i) => name[..i].trim_end(),
        None => name,
    };
    Some(s!(name))
}

/// Single-quote a SQL string literal.
pub fn sql_quote(s: &str) -> String {
    join!("'", &s.replace('\'', "''"), "'")
}
