//! Fixed names and limits for the generated lists.
//!
//! Everything that shapes a path or a table header lives here.

// Layout -------------------------------------------------------------------
pub const DEFAULT_BASE_DIR: &str = "Statistics";
pub const TOP_DEMONS_LIMIT: usize = 50;
pub(crate) const TOP_DEMONS_LABEL: &str = "Top 50 popular demons";
pub(crate) const AUDIO_INFO_SUFFIX: &str = "audio info";
pub(crate) const AUDIO_INFO_EXPANDED_SUFFIX: &str = "audio info expanded";
pub(crate) const BUILDERS_INFO_SUFFIX: &str = "builders info";

// Markdown -----------------------------------------------------------------
pub const COLUMN_SEPARATOR: char = '|';
pub const ESCAPED_SEPARATOR: &str = "&#124;";
pub(crate) const ESCAPED_LINE_BREAK: &str = "<br>";
pub(crate) const ALIGN_CENTER: &str = ":---:";

pub(crate) const LEVEL_COLUMNS: [&str; 5] = ["Name", "Creator", "ID", "Downloads", "Likes"];
pub(crate) const DESCRIPTION_COLUMNS: [&str; 5] =
    ["Name", "Creator", "ID", "Length", "Description"];
pub(crate) const AUDIO_COLUMNS: [&str; 4] = ["Song", "Artist", "Song ID", "Type"];
pub(crate) const AUDIO_EXPANDED_COLUMNS: [&str; 7] = [
    "Song", "Artist", "Song ID", "Type", "Levels", "Share", "Level IDs",
];
pub(crate) const BUILDER_COLUMNS: [&str; 2] = ["Creator", "Levels"];

// Count labels -------------------------------------------------------------
pub(crate) const TOTAL_LEVELS: &str = "Total levels";
pub(crate) const TOTAL_SONGS: &str = "Total songs";
pub(crate) const TOTAL_BUILDERS: &str = "Total builders";
