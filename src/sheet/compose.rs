use crate::core::models::{
    PresentationMode,
    Range,
    SheetRow,
    WordEntry,
};

/// Marks a position one side of a dual-range sheet has no entry for.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetDocument {
    pub title: String,
    pub subtitle: String,
    pub mode: PresentationMode,
    pub answer_key: bool,
    pub rows: Vec<SheetRow>,
}

impl SheetDocument {
    /// Column headings for number, word and meaning, hinting which column to fill in.
    pub fn headers(&self) -> [String; 3] {
        let hint = |show: bool, name: &str| {
            if show || self.answer_key {
                name.to_string()
            } else {
                format!("{name} (write the answer)")
            }
        };
        [
            "No.".to_string(),
            hint(self.mode.shows_word(), "Word"),
            hint(self.mode.shows_meaning(), "Meaning"),
        ]
    }
}

/// Builds the worksheet table for one level.
///
/// Single-range modes number rows from the range start and read both columns
/// from `words`. `Full` pairs `words` with `meanings` position by position,
/// fills whichever side runs out with [`PLACEHOLDER`], and numbers rows from 1.
pub fn compose(
    level_name: &str,
    word_range: Range,
    meaning_range: Range,
    mode: PresentationMode,
    words: &[WordEntry],
    meanings: &[WordEntry],
    is_answer_key: bool,
) -> SheetDocument {
    let show_word = is_answer_key || mode.shows_word();
    let show_meaning = is_answer_key || mode.shows_meaning();

    let (rows, subtitle) = if mode.is_dual_range() {
        let total = words.len().max(meanings.len());
        let rows = (0..total)
            .map(|index| SheetRow {
                number: index as u32 + 1,
                word: show_word.then(|| {
                    words.get(index).map_or(PLACEHOLDER, |entry| entry.word.as_str()).to_string()
                }),
                meaning: show_meaning.then(|| {
                    meanings
                        .get(index)
                        .map_or(PLACEHOLDER, |entry| entry.meaning.as_str())
                        .to_string()
                }),
            })
            .collect();
        let subtitle =
            format!("Words {word_range} · Meanings {meaning_range} · {total} rows");
        (rows, subtitle)
    } else {
        let rows = words
            .iter()
            .enumerate()
            .map(|(index, entry)| SheetRow {
                number: word_range.start + index as u32,
                word: show_word.then(|| entry.word.clone()),
                meaning: show_meaning.then(|| entry.meaning.clone()),
            })
            .collect();
        let subtitle = format!("Words {word_range} · {} words", words.len());
        (rows, subtitle)
    };

    let label = if is_answer_key { "answer sheet" } else { mode.label() };

    SheetDocument {
        title: format!("{level_name} {label}"),
        subtitle,
        mode,
        answer_key: is_answer_key,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(range: Range) -> Vec<WordEntry> {
        (range.start..=range.end).map(|i| WordEntry::new(format!("w{i}"), format!("m{i}"))).collect()
    }

    #[test]
    fn single_range_rows_follow_range_numbering() {
        for (start, end) in [(1, 1), (1, 10), (37, 52), (1990, 2000)] {
            let range = Range::new(start, end);
            let words = slice(range);
            let sheet = compose("L", range, range, PresentationMode::WordOnly, &words, &[], false);

            assert_eq!(sheet.rows.len(), (end - start + 1) as usize);
            let numbers: Vec<u32> = sheet.rows.iter().map(|row| row.number).collect();
            assert_eq!(numbers, (start..=end).collect::<Vec<_>>());
        }
    }

    #[test]
    fn modes_blank_the_expected_column() {
        let range = Range::new(5, 9);
        let words = slice(range);

        let word_only = compose("L", range, range, PresentationMode::WordOnly, &words, &[], false);
        assert!(word_only.rows.iter().all(|row| row.meaning.is_none() && row.word.is_some()));

        let meaning_only =
            compose("L", range, range, PresentationMode::MeaningOnly, &words, &[], false);
        assert!(meaning_only.rows.iter().all(|row| row.word.is_none() && row.meaning.is_some()));
        assert_eq!(meaning_only.rows[0].meaning.as_deref(), Some("m5"));

        let full = compose("L", range, range, PresentationMode::Full, &words, &words, false);
        assert!(full.rows.iter().all(|row| row.word.is_some() && row.meaning.is_some()));
    }

    #[test]
    fn dual_range_pads_the_shorter_side() {
        let word_range = Range::new(11, 15);
        let meaning_range = Range::new(101, 103);
        let sheet = compose(
            "L",
            word_range,
            meaning_range,
            PresentationMode::Full,
            &slice(word_range),
            &slice(meaning_range),
            false,
        );

        assert_eq!(sheet.rows.len(), 5);
        assert_eq!(sheet.rows[0].number, 1);
        assert_eq!(sheet.rows[0].word.as_deref(), Some("w11"));
        assert_eq!(sheet.rows[0].meaning.as_deref(), Some("m101"));
        assert_eq!(sheet.rows[3].meaning.as_deref(), Some(PLACEHOLDER));
        assert_eq!(sheet.rows[4].meaning.as_deref(), Some(PLACEHOLDER));
        assert_eq!(sheet.rows[4].word.as_deref(), Some("w15"));
        assert_eq!(sheet.rows[4].number, 5);
    }

    #[test]
    fn dual_range_pads_words_when_meanings_are_longer() {
        let sheet = compose(
            "L",
            Range::new(1, 1),
            Range::new(1, 2),
            PresentationMode::Full,
            &slice(Range::new(1, 1)),
            &slice(Range::new(1, 2)),
            false,
        );
        assert_eq!(sheet.rows[1].word.as_deref(), Some(PLACEHOLDER));
    }

    #[test]
    fn answer_key_fills_every_column() {
        let range = Range::new(1, 3);
        let words = slice(range);
        let sheet = compose("BRIDGE", range, range, PresentationMode::MeaningOnly, &words, &[], true);

        assert!(sheet.rows.iter().all(|row| row.word.is_some() && row.meaning.is_some()));
        assert_eq!(sheet.title, "BRIDGE answer sheet");
        assert_eq!(sheet.headers(), ["No.", "Word", "Meaning"]);
    }

    #[test]
    fn titles_and_headers_follow_mode() {
        let range = Range::new(1, 2);
        let words = slice(range);

        let full = compose("JP", range, range, PresentationMode::Full, &words, &words, false);
        assert_eq!(full.title, "JP word list");

        let word_only = compose("JP", range, range, PresentationMode::WordOnly, &words, &[], false);
        assert_eq!(word_only.title, "JP quiz (word → meaning)");
        assert_eq!(word_only.headers()[2], "Meaning (write the answer)");

        let meaning_only =
            compose("JP", range, range, PresentationMode::MeaningOnly, &words, &[], false);
        assert_eq!(meaning_only.title, "JP quiz (meaning → word)");
        assert_eq!(meaning_only.headers()[1], "Word (write the answer)");
    }
}
