//! Aggregate song and builder summaries over a set of levels.
use std::collections::BTreeMap;

use crate::constants::{
    AUDIO_COLUMNS, AUDIO_EXPANDED_COLUMNS, BUILDER_COLUMNS, TOTAL_BUILDERS, TOTAL_SONGS,
};
use crate::level::{Level, Song};
use crate::numbers::share_pct;
use crate::render::{MarkdownTable, escape_cell, row};

/// Levels sharing one song.
#[derive(Debug, Clone)]
pub struct SongUsage<'a> {
    pub song: &'a Song,
    /// Using levels in ascending id order
    pub levels: Vec<&'a Level>,
}

impl SongUsage<'_> {
    #[must_use]
    pub fn count(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        if self.song.is_custom {
            "Custom"
        } else {
            "Official"
        }
    }
}

/// Group levels by song id, ordered by song id.
///
/// Song metadata is taken from the lowest-id level using it, so stale copies
/// of a song never make the output depend on input order.
#[must_use]
pub fn song_usage<'a>(levels: &[&'a Level]) -> Vec<SongUsage<'a>> {
    let mut sorted: Vec<&'a Level> = levels.to_vec();
    sorted.sort_by_key(|level| level.id);

    let mut by_song: BTreeMap<i64, SongUsage<'a>> = BTreeMap::new();
    for level in sorted {
        by_song
            .entry(level.song.id)
            .or_insert_with(|| SongUsage {
                song: &level.song,
                levels: Vec::new(),
            })
            .levels
            .push(level);
    }
    by_song.into_values().collect()
}

/// Number of levels per creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderCount<'a> {
    pub creator: &'a str,
    pub levels: usize,
}

/// Count levels per creator, most prolific first, ties by name.
#[must_use]
pub fn builder_counts<'a>(levels: &[&'a Level]) -> Vec<BuilderCount<'a>> {
    let mut by_creator: BTreeMap<&'a str, usize> = BTreeMap::new();
    for level in levels {
        *by_creator.entry(level.creator.as_str()).or_default() += 1;
    }
    let mut counts: Vec<BuilderCount<'a>> = by_creator
        .into_iter()
        .map(|(creator, levels)| BuilderCount { creator, levels })
        .collect();
    counts.sort_by(|a, b| b.levels.cmp(&a.levels).then_with(|| a.creator.cmp(b.creator)));
    counts
}

/// One row per distinct song, by song id.
#[must_use]
pub fn render_audio_info(title: &str, levels: &[&Level]) -> Vec<String> {
    let mut table = MarkdownTable::new(title, TOTAL_SONGS, &AUDIO_COLUMNS);
    for usage in song_usage(levels) {
        table.push_row(row(&[
            escape_cell(&usage.song.title),
            escape_cell(&usage.song.artist),
            usage.song.id.to_string(),
            usage.kind().to_string(),
        ]));
    }
    table.into_lines()
}

/// Audio info plus usage count, share of the run and the using level ids.
/// Most used songs first, ties by song id.
#[must_use]
pub fn render_audio_info_expanded(title: &str, levels: &[&Level]) -> Vec<String> {
    let total = levels.len();
    let mut usages = song_usage(levels);
    usages.sort_by(|a, b| b.count().cmp(&a.count()).then_with(|| a.song.id.cmp(&b.song.id)));

    let mut table = MarkdownTable::new(title, TOTAL_SONGS, &AUDIO_EXPANDED_COLUMNS);
    for usage in usages {
        let ids: Vec<String> = usage.levels.iter().map(|l| l.id.to_string()).collect();
        table.push_row(row(&[
            escape_cell(&usage.song.title),
            escape_cell(&usage.song.artist),
            usage.song.id.to_string(),
            usage.kind().to_string(),
            usage.count().to_string(),
            format!("{:.1}%", share_pct(usage.count(), total)),
            ids.join(", "),
        ]));
    }
    table.into_lines()
}

#[must_use]
pub fn render_builders_info(title: &str, levels: &[&Level]) -> Vec<String> {
    let mut table = MarkdownTable::new(title, TOTAL_BUILDERS, &BUILDER_COLUMNS);
    for builder in builder_counts(levels) {
        table.push_row(row(&[escape_cell(builder.creator), builder.levels.to_string()]));
    }
    table.into_lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    fn level(id: i64, creator: &str, song: Song) -> Level {
        Level::builder(id, format!("L{id}"), creator, Difficulty::Normal)
            .song(song)
            .build()
    }

    fn fixtures() -> Vec<Level> {
        vec![
            level(5, "Viprin", Song::official(1, "Stereo Madness", "ForeverBound")),
            level(2, "Zobros", Song::custom(900, "Death Moon", "Xtrullor")),
            level(9, "Viprin", Song::custom(900, "Death Moon", "Xtrullor")),
            level(1, "Adiale", Song::custom(900, "Death Moon", "Xtrullor")),
        ]
    }

    #[test]
    fn groups_levels_by_song() {
        let levels = fixtures();
        let refs: Vec<&Level> = levels.iter().collect();
        let usage = song_usage(&refs);
        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].song.id, 1);
        assert_eq!(usage[1].song.id, 900);
        let ids: Vec<i64> = usage[1].levels.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 9]);
        assert_eq!(usage[1].kind(), "Custom");
    }

    #[test]
    fn builders_sorted_by_count_then_name() {
        let levels = fixtures();
        let refs: Vec<&Level> = levels.iter().collect();
        let counts = builder_counts(&refs);
        assert_eq!(
            counts,
            vec![
                BuilderCount { creator: "Viprin", levels: 2 },
                BuilderCount { creator: "Adiale", levels: 1 },
                BuilderCount { creator: "Zobros", levels: 1 },
            ]
        );
    }

    #[test]
    fn expanded_audio_info_lists_usage_and_share() {
        let levels = fixtures();
        let refs: Vec<&Level> = levels.iter().collect();
        let lines = render_audio_info_expanded("Featured audio info expanded", &refs);
        assert_eq!(lines[2], "Total songs: 2");
        assert_eq!(
            lines[6],
            "| Death Moon | Xtrullor | 900 | Custom | 3 | 75.0% | 1, 2, 9"
        );
        assert_eq!(
            lines[7],
            "| Stereo Madness | ForeverBound | 1 | Official | 1 | 25.0% | 5"
        );
    }

    #[test]
    fn audio_info_is_one_row_per_song() {
        let levels = fixtures();
        let refs: Vec<&Level> = levels.iter().collect();
        let lines = render_audio_info("Featured audio info", &refs);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[6], "| Stereo Madness | ForeverBound | 1 | Official");
        assert_eq!(lines[7], "| Death Moon | Xtrullor | 900 | Custom");
    }

    #[test]
    fn builders_info_renders_counts() {
        let levels = fixtures();
        let refs: Vec<&Level> = levels.iter().collect();
        let lines = render_builders_info("Featured builders info", &refs);
        assert_eq!(lines[2], "Total builders: 3");
        assert_eq!(lines[6], "| Viprin | 2");
    }

    #[test]
    fn free_text_cells_stay_on_one_row() {
        let levels = vec![level(3, "Team\nA|B", Song::custom(77, "Part 1\r\nPart 2", "DJ | MC"))];
        let refs: Vec<&Level> = levels.iter().collect();

        let audio = render_audio_info("Epic audio info", &refs);
        assert_eq!(audio.len(), 7);
        assert_eq!(audio[6], "| Part 1<br>Part 2 | DJ &#124; MC | 77 | Custom");

        let expanded = render_audio_info_expanded("Epic audio info expanded", &refs);
        assert_eq!(expanded.len(), 7);
        assert!(expanded[6].starts_with("| Part 1<br>Part 2 | DJ &#124; MC | 77 |"));

        let builders = render_builders_info("Epic builders info", &refs);
        assert_eq!(builders.len(), 7);
        assert_eq!(builders[6], "| Team<br>A&#124;B | 1");
    }
}
