//! Command text parser.
//!
//! Game server commands are plain whitespace separated words with an optional
//! leading slash and an optional `namespace:` qualifier on the root command
//! (`/minecraft:tp`, `/bukkit:plugins`). There is no quoting.

/// Strip surrounding whitespace and one leading `/`.
pub fn strip_command_prefix(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('/')
        .map(str::trim_start)
        .unwrap_or(trimmed)
}

/// Split command text into tokens.
pub fn tokenize(body: &str) -> Vec<String> {
    body.split_whitespace().map(str::to_string).collect()
}

/// Lowercase a root command and drop its namespace qualifier.
///
/// `Minecraft:TP` becomes `tp`. A trailing colon leaves an empty name,
/// which callers treat as "no command".
pub fn normalize_root(token: &str) -> String {
    let name = token.rsplit(':').next().unwrap_or(token);
    name.to_lowercase()
}
