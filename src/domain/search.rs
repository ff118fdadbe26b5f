use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::prelude::Contact;

// Rank tiers, best first. Closeness matches land in [MATCHES, MATCHES + 1].
pub const CASE_SENSITIVE_EQUAL: f64 = 7.0;
pub const EQUAL: f64 = 6.0;
pub const STARTS_WITH: f64 = 5.0;
pub const WORD_STARTS_WITH: f64 = 4.0;
pub const CONTAINS: f64 = 3.0;
pub const ACRONYM: f64 = 2.0;
pub const MATCHES: f64 = 1.0;
pub const NO_MATCH: f64 = 0.0;

#[derive(Debug)]
struct RankedContact {
    contact: Contact,
    rank: f64,
    key_index: usize,
    ranked_value: String,
}

/// Keeps the contacts whose `first` or `last` name matches `query`, best
/// matches first.
///
/// An empty query keeps everything in its original order.
pub fn filter_contacts(contacts: Vec<Contact>, query: &str) -> Vec<Contact> {
    if query.is_empty() {
        return contacts;
    }

    let mut ranked: Vec<RankedContact> = contacts
        .into_iter()
        .filter_map(|contact| rank_contact(contact, query))
        .collect();

    ranked.sort_by(compare_ranked);

    ranked.into_iter().map(|r| r.contact).collect()
}

fn rank_contact(contact: Contact, query: &str) -> Option<RankedContact> {
    let mut best: Option<(f64, usize, String)> = None;

    for (key_index, value) in [&contact.first, &contact.last].into_iter().enumerate() {
        let Some(value) = value else {
            continue;
        };

        let rank = rank_match(value, query);
        if best.as_ref().is_none_or(|(best_rank, _, _)| rank > *best_rank) {
            best = Some((rank, key_index, value.clone()));
        }
    }

    let (rank, key_index, ranked_value) = best?;
    if rank < MATCHES {
        return None;
    }

    Some(RankedContact {
        contact,
        rank,
        key_index,
        ranked_value,
    })
}

fn compare_ranked(a: &RankedContact, b: &RankedContact) -> Ordering {
    b.rank
        .total_cmp(&a.rank)
        .then_with(|| a.key_index.cmp(&b.key_index))
        .then_with(|| {
            a.ranked_value
                .to_lowercase()
                .cmp(&b.ranked_value.to_lowercase())
        })
}

/// Scores how well `candidate` matches `query`.
///
/// Apart from the exact case-sensitive check, both sides are compared
/// without accents and case, so "jose" finds "José".
pub fn rank_match(candidate: &str, query: &str) -> f64 {
    if candidate == query {
        return CASE_SENSITIVE_EQUAL;
    }

    let candidate = fold(candidate);
    let query = fold(query);

    if query.chars().count() > candidate.chars().count() {
        return NO_MATCH;
    }

    if candidate == query {
        return EQUAL;
    }

    if candidate.starts_with(&query) {
        return STARTS_WITH;
    }

    if candidate.contains(&format!(" {query}")) {
        return WORD_STARTS_WITH;
    }

    if candidate.contains(&query) {
        return CONTAINS;
    }

    if query.chars().count() == 1 {
        return NO_MATCH;
    }

    if acronym(&candidate).contains(&query) {
        return ACRONYM;
    }

    closeness(&candidate, &query)
}

// Lowercase with combining marks dropped from the NFD decomposition.
fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect::<String>()
        .to_lowercase()
}

fn acronym(value: &str) -> String {
    value
        .split(' ')
        .flat_map(|word| word.split('-'))
        .filter_map(|part| part.chars().next())
        .collect()
}

// All query characters must appear in order; tighter spread ranks higher.
fn closeness(candidate: &str, query: &str) -> f64 {
    let candidate: Vec<char> = candidate.chars().collect();
    let mut query = query.chars();

    let Some(head) = query.next() else {
        return NO_MATCH;
    };
    let Some(first_index) = candidate.iter().position(|&c| c == head) else {
        return NO_MATCH;
    };

    let mut cursor = first_index + 1;
    for wanted in query {
        match candidate[cursor..].iter().position(|&c| c == wanted) {
            Some(offset) => cursor += offset + 1,
            None => return NO_MATCH,
        }
    }

    let spread = (cursor - 1 - first_index).max(1);
    MATCHES + 1.0 / spread as f64
}
