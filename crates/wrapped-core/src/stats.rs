//! Precomputed chat statistics consumed by the slide catalog.
//!
//! The snapshot is produced by an external preparation step and handed over
//! whole. Every field is optional on the wire; accessors fold absent values
//! into the defaults the slides display.

use core::{convert::Infallible, fmt};

use heapless::{String, Vec};
use serde::{
    Deserialize, Deserializer,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
};

pub const LABEL_BYTES: usize = 48;
pub const MAX_AUTHORS: usize = 8;
pub const MAX_TOP_WORDS: usize = 12;

pub const DEFAULT_PEAK_TIME: &str = "12 AM";
pub const DEFAULT_TOP_WORD: &str = "Love";
pub const DEFAULT_TOP_SENDER: &str = "Us";

/// Bounded text field. Longer input is cut at a char boundary.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Label(String<LABEL_BYTES>);

impl Label {
    pub fn new(text: &str) -> Self {
        let mut out = String::new();
        for ch in text.chars() {
            if out.push(ch).is_err() {
                break;
            }
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabelVisitor;

        impl Visitor<'_> for LabelVisitor {
            type Value = Label;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Label, E> {
                Ok(Label::new(value))
            }
        }

        deserializer.deserialize_str(LabelVisitor)
    }
}

/// One entry of the ranked word list.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct WordCount {
    #[serde(deserialize_with = "null_as_default")]
    pub text: Label,
    #[serde(deserialize_with = "null_as_default")]
    pub value: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Message count for one participant.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AuthorCount {
    pub name: Label,
    pub count: u32,
}

/// Per-author counts in document order.
///
/// The preparation step writes authors by descending volume, so position 0 is
/// the most active participant.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AuthorTally {
    entries: Vec<AuthorCount, MAX_AUTHORS>,
    dropped: u16,
}

impl AuthorTally {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            dropped: 0,
        }
    }

    /// Appends an author; returns `false` once the tally is full.
    pub fn push(&mut self, name: &str, count: u32) -> bool {
        self.push_label(Label::new(name), count)
    }

    fn push_label(&mut self, name: Label, count: u32) -> bool {
        if self.entries.push(AuthorCount { name, count }).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    pub fn as_slice(&self) -> &[AuthorCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that did not fit and were discarded while loading.
    pub fn dropped(&self) -> u16 {
        self.dropped
    }

    pub fn sum(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count as u64).sum()
    }
}

impl<'de> Deserialize<'de> for AuthorTally {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TallyVisitor;

        impl<'de> Visitor<'de> for TallyVisitor {
            type Value = AuthorTally;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of author name to message count")
            }

            fn visit_map<A>(self, mut map: A) -> Result<AuthorTally, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut tally = AuthorTally::new();
                while let Some(name) = map.next_key::<Label>()? {
                    if tally.entries.is_full() {
                        map.next_value::<IgnoredAny>()?;
                        tally.dropped = tally.dropped.saturating_add(1);
                        continue;
                    }
                    let count = map.next_value::<Option<u32>>()?.unwrap_or(0);
                    tally.push_label(name, count);
                }
                Ok(tally)
            }
        }

        deserializer.deserialize_map(TallyVisitor)
    }
}

/// Ranked words, most frequent first.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordRanking(Vec<WordCount, MAX_TOP_WORDS>);

impl WordRanking {
    pub fn as_slice(&self) -> &[WordCount] {
        &self.0
    }

    pub fn push(&mut self, text: &str, value: u32) -> bool {
        self.0
            .push(WordCount {
                text: Label::new(text),
                value,
            })
            .is_ok()
    }
}

impl<'de> Deserialize<'de> for WordRanking {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RankingVisitor;

        impl<'de> Visitor<'de> for RankingVisitor {
            type Value = WordRanking;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of {text, value} records")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<WordRanking, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut ranking = WordRanking::default();
                while !ranking.0.is_full() {
                    match seq.next_element::<Option<WordCount>>()? {
                        Some(Some(word)) => {
                            let _ = ranking.0.push(word);
                        }
                        Some(None) => {}
                        None => return Ok(ranking),
                    }
                }
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(ranking)
            }
        }

        deserializer.deserialize_seq(RankingVisitor)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Summary {
    pub total: Option<u32>,
    pub media_shared: Option<u32>,
    pub start_date: Option<Label>,
    pub end_date: Option<Label>,
}

/// Immutable statistics record driving slide content.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct StatsSnapshot {
    summary: Option<Summary>,
    authors: Option<AuthorTally>,
    top_sender: Option<Label>,
    top_words: Option<WordRanking>,
    peak_time: Option<Label>,
}

impl StatsSnapshot {
    pub fn total_messages(&self) -> u32 {
        self.summary
            .as_ref()
            .and_then(|summary| summary.total)
            .unwrap_or(0)
    }

    pub fn media_shared(&self) -> u32 {
        self.summary
            .as_ref()
            .and_then(|summary| summary.media_shared)
            .unwrap_or(0)
    }

    /// First and last message dates, when the preparation step recorded both.
    pub fn period(&self) -> Option<(&str, &str)> {
        let summary = self.summary.as_ref()?;
        let start = non_empty(summary.start_date.as_ref())?;
        let end = non_empty(summary.end_date.as_ref())?;
        Some((start, end))
    }

    pub fn authors(&self) -> &[AuthorCount] {
        self.authors
            .as_ref()
            .map(AuthorTally::as_slice)
            .unwrap_or(&[])
    }

    pub fn author_sum(&self) -> u64 {
        self.authors.as_ref().map(AuthorTally::sum).unwrap_or(0)
    }

    pub fn top_sender(&self) -> &str {
        non_empty(self.top_sender.as_ref()).unwrap_or(DEFAULT_TOP_SENDER)
    }

    pub fn top_words(&self) -> &[WordCount] {
        self.top_words
            .as_ref()
            .map(WordRanking::as_slice)
            .unwrap_or(&[])
    }

    pub fn top_word(&self) -> &str {
        self.top_words()
            .first()
            .and_then(|word| non_empty(Some(&word.text)))
            .unwrap_or(DEFAULT_TOP_WORD)
    }

    pub fn peak_time(&self) -> &str {
        non_empty(self.peak_time.as_ref()).unwrap_or(DEFAULT_PEAK_TIME)
    }

    pub fn with_total(mut self, total: u32) -> Self {
        self.summary.get_or_insert_with(Summary::default).total = Some(total);
        self
    }

    pub fn with_media_shared(mut self, media_shared: u32) -> Self {
        self.summary.get_or_insert_with(Summary::default).media_shared = Some(media_shared);
        self
    }

    pub fn with_period(mut self, start: &str, end: &str) -> Self {
        let summary = self.summary.get_or_insert_with(Summary::default);
        summary.start_date = Some(Label::new(start));
        summary.end_date = Some(Label::new(end));
        self
    }

    pub fn with_author(mut self, name: &str, count: u32) -> Self {
        let _ = self
            .authors
            .get_or_insert_with(AuthorTally::new)
            .push(name, count);
        self
    }

    pub fn with_top_sender(mut self, name: &str) -> Self {
        self.top_sender = Some(Label::new(name));
        self
    }

    pub fn with_word(mut self, text: &str, value: u32) -> Self {
        let _ = self
            .top_words
            .get_or_insert_with(WordRanking::default)
            .push(text, value);
        self
    }

    pub fn with_peak_time(mut self, label: &str) -> Self {
        self.peak_time = Some(Label::new(label));
        self
    }
}

fn non_empty(label: Option<&Label>) -> Option<&str> {
    label.filter(|label| !label.is_empty()).map(Label::as_str)
}

/// Polled source of the statistics snapshot.
pub trait StatsProvider {
    type Error;

    /// `Ok(None)` means the data is not available yet.
    fn poll_snapshot(&mut self) -> Result<Option<StatsSnapshot>, Self::Error>;
}

/// Hands over a snapshot supplied at construction, once.
#[derive(Clone, Debug, Default)]
pub struct StaticStats(Option<StatsSnapshot>);

impl StaticStats {
    pub const fn new(snapshot: StatsSnapshot) -> Self {
        Self(Some(snapshot))
    }

    pub const fn absent() -> Self {
        Self(None)
    }
}

impl StatsProvider for StaticStats {
    type Error = Infallible;

    fn poll_snapshot(&mut self) -> Result<Option<StatsSnapshot>, Self::Error> {
        Ok(self.0.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "summary": { "total": 159935, "media_shared": 4210,
                     "start_date": "27/11/24", "end_date": "30/12/25" },
        "authors": { "Zed Ortega": 81234, "Ana Lima": 78701 },
        "top_sender": "Zed Ortega",
        "top_words": [ { "text": "haha", "value": 3012 }, { "text": "okay", "value": 2001 } ],
        "peak_time": "11 PM"
    }"#;

    #[test]
    fn parses_full_document() {
        let stats: StatsSnapshot = serde_json::from_str(FULL).unwrap();

        assert_eq!(stats.total_messages(), 159_935);
        assert_eq!(stats.media_shared(), 4_210);
        assert_eq!(stats.period(), Some(("27/11/24", "30/12/25")));
        assert_eq!(stats.top_sender(), "Zed Ortega");
        assert_eq!(stats.top_word(), "haha");
        assert_eq!(stats.top_words().len(), 2);
        assert_eq!(stats.peak_time(), "11 PM");
        assert_eq!(stats.author_sum(), 159_935);
    }

    #[test]
    fn author_order_follows_document_order() {
        let stats: StatsSnapshot =
            serde_json::from_str(r#"{ "authors": { "b": 1, "a": 9, "c": 5 } }"#).unwrap();
        let names: std::vec::Vec<&str> = stats
            .authors()
            .iter()
            .map(|author| author.name.as_str())
            .collect();

        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn empty_document_degrades_to_defaults() {
        let stats: StatsSnapshot = serde_json::from_str("{}").unwrap();

        assert_eq!(stats.total_messages(), 0);
        assert_eq!(stats.media_shared(), 0);
        assert_eq!(stats.period(), None);
        assert!(stats.authors().is_empty());
        assert_eq!(stats.top_sender(), DEFAULT_TOP_SENDER);
        assert_eq!(stats.top_word(), DEFAULT_TOP_WORD);
        assert_eq!(stats.peak_time(), DEFAULT_PEAK_TIME);
    }

    #[test]
    fn null_fields_degrade_to_defaults() {
        let stats: StatsSnapshot = serde_json::from_str(
            r#"{ "summary": null, "authors": null, "top_sender": "",
                 "top_words": [null, { "value": 3 }], "peak_time": null }"#,
        )
        .unwrap();

        assert_eq!(stats.total_messages(), 0);
        assert_eq!(stats.top_sender(), DEFAULT_TOP_SENDER);
        assert_eq!(stats.top_words().len(), 1);
        assert_eq!(stats.top_word(), DEFAULT_TOP_WORD);
        assert_eq!(stats.peak_time(), DEFAULT_PEAK_TIME);
    }

    #[test]
    fn null_word_fields_do_not_reject_the_document() {
        let stats: StatsSnapshot = serde_json::from_str(
            r#"{ "summary": { "total": 12 },
                 "top_words": [ { "text": null, "value": 3 }, { "text": "okay", "value": null } ] }"#,
        )
        .unwrap();

        assert_eq!(stats.total_messages(), 12);
        assert_eq!(stats.top_words().len(), 2);
        assert_eq!(stats.top_word(), DEFAULT_TOP_WORD);
        assert_eq!(stats.top_words()[1].text.as_str(), "okay");
        assert_eq!(stats.top_words()[1].value, 0);
    }

    #[test]
    fn oversized_collections_are_truncated_not_rejected() {
        let mut json = std::string::String::from(r#"{ "authors": {"#);
        for idx in 0..(MAX_AUTHORS + 3) {
            if idx > 0 {
                json.push(',');
            }
            json.push_str(&format!(r#""author-{idx}": {idx}"#));
        }
        json.push_str(r#"}, "top_words": ["#);
        for idx in 0..(MAX_TOP_WORDS + 2) {
            if idx > 0 {
                json.push(',');
            }
            json.push_str(&format!(r#"{{ "text": "w{idx}", "value": 1 }}"#));
        }
        json.push_str("] }");

        let stats: StatsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(stats.authors().len(), MAX_AUTHORS);
        assert_eq!(stats.authors.as_ref().map(AuthorTally::dropped), Some(3));
        assert_eq!(stats.top_words().len(), MAX_TOP_WORDS);
    }

    #[test]
    fn long_labels_are_cut_on_char_boundary() {
        let name = "é".repeat(LABEL_BYTES);
        let label = Label::new(&name);

        assert_eq!(label.as_str().len(), LABEL_BYTES);
        assert!(label.as_str().chars().all(|ch| ch == 'é'));
    }

    #[test]
    fn static_stats_hands_snapshot_over_once() {
        let mut provider = StaticStats::new(StatsSnapshot::default().with_total(3));

        assert_eq!(
            provider.poll_snapshot().unwrap().map(|s| s.total_messages()),
            Some(3)
        );
        assert_eq!(provider.poll_snapshot().unwrap(), None);
    }
}
