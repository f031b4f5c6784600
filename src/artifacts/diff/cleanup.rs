//! Post-processing passes that turn a minimal edit script into a readable one.
//!
//! All passes preserve the two documents the script reconstructs; they only
//! move chunk boundaries and reduce the number of chunks.

use crate::artifacts::diff::edit::{Edit, Operation};
use regex::Regex;
use std::sync::LazyLock;

static BLANK_LINE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\r?\n$").unwrap());
static BLANK_LINE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\r?\n\r?\n").unwrap());

/// Merges adjacent edits of the same kind, factors text shared by a paired
/// delete/insert into the surrounding equalities and slides single edits
/// across equalities when that removes one.
pub fn cleanup_merge(edits: &mut Vec<Edit>) {
    edits.retain(|edit| !edit.text.is_empty());
    // sentinel so the trailing delete/insert block gets flushed
    edits.push(Edit::equal(""));

    let mut pointer = 0;
    let (mut count_delete, mut count_insert) = (0, 0);
    let (mut text_delete, mut text_insert) = (String::new(), String::new());

    while pointer < edits.len() {
        match edits[pointer].operation {
            Operation::Insert => {
                count_insert += 1;
                text_insert.push_str(&edits[pointer].text);
                pointer += 1;
            }
            Operation::Delete => {
                count_delete += 1;
                text_delete.push_str(&edits[pointer].text);
                pointer += 1;
            }
            Operation::Equal => {
                if count_delete + count_insert > 0 {
                    if count_delete > 0 && count_insert > 0 {
                        let common = common_prefix(&text_insert, &text_delete);
                        if common > 0 {
                            let shared: String = text_insert.drain(..common).collect();
                            text_delete.drain(..common);
                            let start = pointer - count_delete - count_insert;
                            if start > 0 && edits[start - 1].operation == Operation::Equal {
                                edits[start - 1].text.push_str(&shared);
                            } else {
                                edits.insert(0, Edit::equal(shared));
                                pointer += 1;
                            }
                        }

                        let common = common_suffix(&text_insert, &text_delete);
                        if common > 0 {
                            let shared = text_insert.split_off(text_insert.len() - common);
                            text_delete.truncate(text_delete.len() - common);
                            edits[pointer].text.insert_str(0, &shared);
                        }
                    }

                    let start = pointer - count_delete - count_insert;
                    let mut merged = Vec::with_capacity(2);
                    if !text_delete.is_empty() {
                        merged.push(Edit::delete(std::mem::take(&mut text_delete)));
                    }
                    if !text_insert.is_empty() {
                        merged.push(Edit::insert(std::mem::take(&mut text_insert)));
                    }
                    let merged_len = merged.len();
                    edits.splice(start..pointer, merged);
                    pointer = start + merged_len;
                }

                if pointer > 0 && edits[pointer - 1].operation == Operation::Equal {
                    let text = edits.remove(pointer).text;
                    edits[pointer - 1].text.push_str(&text);
                } else {
                    pointer += 1;
                }

                count_delete = 0;
                count_insert = 0;
                text_delete.clear();
                text_insert.clear();
            }
        }
    }

    if edits.last().is_some_and(|edit| edit.text.is_empty()) {
        edits.pop();
    }

    // a single edit surrounded by equalities can sometimes be shifted sideways
    // to swallow one of them, e.g. A<ins>BA</ins>C -> <ins>AB</ins>AC
    let mut changes = false;
    let mut pointer = 1;
    while pointer + 1 < edits.len() {
        if edits[pointer - 1].operation == Operation::Equal
            && edits[pointer + 1].operation == Operation::Equal
        {
            let previous = edits[pointer - 1].text.clone();
            let next = edits[pointer + 1].text.clone();
            let current = edits[pointer].text.clone();

            if current.ends_with(&previous) {
                edits[pointer].text =
                    format!("{previous}{}", &current[..current.len() - previous.len()]);
                edits[pointer + 1].text = format!("{previous}{next}");
                edits.remove(pointer - 1);
                changes = true;
            } else if current.starts_with(&next) {
                edits[pointer - 1].text.push_str(&next);
                edits[pointer].text = format!("{}{next}", &current[next.len()..]);
                edits.remove(pointer + 1);
                changes = true;
            }
        }
        pointer += 1;
    }

    if changes {
        cleanup_merge(edits);
    }
}

/// Removes equalities that are no longer than the edits on either side of
/// them, then aligns the remaining edits on word boundaries and extracts
/// overlaps between adjacent deletions and insertions.
pub fn cleanup_semantic(edits: &mut Vec<Edit>) {
    let mut changes = false;
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<usize> = None;
    let (mut inserted_before, mut deleted_before) = (0, 0);
    let (mut inserted_after, mut deleted_after) = (0, 0);

    let mut pointer = 0;
    while pointer < edits.len() {
        if edits[pointer].operation == Operation::Equal {
            equalities.push(pointer);
            inserted_before = inserted_after;
            deleted_before = deleted_after;
            inserted_after = 0;
            deleted_after = 0;
            last_equality = Some(edits[pointer].char_len());
            pointer += 1;
            continue;
        }

        if edits[pointer].operation == Operation::Insert {
            inserted_after += edits[pointer].char_len();
        } else {
            deleted_after += edits[pointer].char_len();
        }

        if let Some(equality_len) = last_equality
            && let Some(&index) = equalities.last()
            && equality_len <= inserted_before.max(deleted_before)
            && equality_len <= inserted_after.max(deleted_after)
        {
            let text = edits[index].text.clone();
            edits.insert(index, Edit::delete(text));
            edits[index + 1].operation = Operation::Insert;
            // the equality just replaced, then the one before it which needs a fresh look
            equalities.pop();
            equalities.pop();
            pointer = equalities.last().map_or(0, |&previous| previous + 1);
            inserted_before = 0;
            deleted_before = 0;
            inserted_after = 0;
            deleted_after = 0;
            last_equality = None;
            changes = true;
            continue;
        }

        pointer += 1;
    }

    if changes {
        cleanup_merge(edits);
    }
    cleanup_semantic_lossless(edits);
    extract_overlaps(edits);
}

/// Slides single edits surrounded by equalities so their edges fall on
/// logical boundaries (blank lines, line breaks, sentence ends, words).
pub fn cleanup_semantic_lossless(edits: &mut Vec<Edit>) {
    let mut pointer = 1;
    while pointer + 1 < edits.len() {
        if edits[pointer - 1].operation != Operation::Equal
            || edits[pointer + 1].operation != Operation::Equal
        {
            pointer += 1;
            continue;
        }

        let mut equality1 = edits[pointer - 1].text.clone();
        let mut edit = edits[pointer].text.clone();
        let mut equality2 = edits[pointer + 1].text.clone();

        // shift the edit as far left as possible first
        let offset = common_suffix(&equality1, &edit);
        if offset > 0 {
            let common = edit[edit.len() - offset..].to_string();
            equality1.truncate(equality1.len() - offset);
            edit = format!("{common}{}", &edit[..edit.len() - offset]);
            equality2.insert_str(0, &common);
        }

        let mut best_equality1 = equality1.clone();
        let mut best_edit = edit.clone();
        let mut best_equality2 = equality2.clone();
        let mut best_score = semantic_score(&equality1, &edit) + semantic_score(&edit, &equality2);

        // then step right one character at a time looking for the best fit
        while let Some(c) = edit.chars().next()
            && equality2.starts_with(c)
        {
            equality1.push(c);
            edit = format!("{}{c}", &edit[c.len_utf8()..]);
            equality2.drain(..c.len_utf8());

            let score = semantic_score(&equality1, &edit) + semantic_score(&edit, &equality2);
            if score >= best_score {
                best_score = score;
                best_equality1 = equality1.clone();
                best_edit = edit.clone();
                best_equality2 = equality2.clone();
            }
        }

        if edits[pointer - 1].text == best_equality1 {
            pointer += 1;
            continue;
        }

        let mut removed = 0;
        let mut index = pointer;
        if best_equality1.is_empty() {
            edits.remove(index - 1);
            index -= 1;
            removed += 1;
        } else {
            edits[index - 1].text = best_equality1;
        }
        edits[index].text = best_edit;
        if best_equality2.is_empty() {
            edits.remove(index + 1);
            removed += 1;
        } else {
            edits[index + 1].text = best_equality2;
        }
        pointer = pointer + 1 - removed;
    }
}

/// Turns `<del>abcxxx</del><ins>xxxdef</ins>` into
/// `<del>abc</del>xxx<ins>def</ins>` when the overlap is at least half of
/// either edit.
fn extract_overlaps(edits: &mut Vec<Edit>) {
    let mut pointer = 1;
    while pointer < edits.len() {
        if edits[pointer - 1].operation == Operation::Delete
            && edits[pointer].operation == Operation::Insert
        {
            let deletion = edits[pointer - 1].text.clone();
            let insertion = edits[pointer].text.clone();
            let (deletion_len, insertion_len) =
                (deletion.chars().count(), insertion.chars().count());
            let overlap1 = common_overlap(&deletion, &insertion);
            let overlap2 = common_overlap(&insertion, &deletion);

            if overlap1 >= overlap2 {
                if overlap1 > 0 && (overlap1 * 2 >= deletion_len || overlap1 * 2 >= insertion_len) {
                    let (shared, rest) = split_at_char(&insertion, overlap1);
                    let kept = deletion[..deletion.len() - shared.len()].to_string();
                    edits.insert(pointer, Edit::equal(shared));
                    edits[pointer - 1].text = kept;
                    edits[pointer + 1].text = rest.to_string();
                    pointer += 1;
                }
            } else if overlap2 * 2 >= deletion_len || overlap2 * 2 >= insertion_len {
                let (shared, rest) = split_at_char(&deletion, overlap2);
                let kept = insertion[..insertion.len() - shared.len()].to_string();
                edits.insert(pointer, Edit::equal(shared));
                edits[pointer - 1] = Edit::insert(kept);
                edits[pointer + 1] = Edit::delete(rest);
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }
    edits.retain(|edit| !edit.text.is_empty());
}

/// Scores how well the boundary between `one` and `two` sits on a logical
/// break; 6 is best (an edge of the text), 0 is mid-word.
fn semantic_score(one: &str, two: &str) -> u8 {
    let (Some(char1), Some(char2)) = (one.chars().next_back(), two.chars().next()) else {
        return 6;
    };

    let non_alphanumeric1 = !char1.is_alphanumeric();
    let non_alphanumeric2 = !char2.is_alphanumeric();
    let whitespace1 = non_alphanumeric1 && char1.is_whitespace();
    let whitespace2 = non_alphanumeric2 && char2.is_whitespace();
    let line_break1 = whitespace1 && matches!(char1, '\r' | '\n');
    let line_break2 = whitespace2 && matches!(char2, '\r' | '\n');
    let blank_line1 = line_break1 && BLANK_LINE_END.is_match(one);
    let blank_line2 = line_break2 && BLANK_LINE_START.is_match(two);

    if blank_line1 || blank_line2 {
        5
    } else if line_break1 || line_break2 {
        4
    } else if non_alphanumeric1 && !whitespace1 && whitespace2 {
        3
    } else if whitespace1 || whitespace2 {
        2
    } else if non_alphanumeric1 || non_alphanumeric2 {
        1
    } else {
        0
    }
}

/// Length in bytes of the common prefix, always on a char boundary.
pub fn common_prefix(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c.len_utf8())
        .sum()
}

/// Length in bytes of the common suffix, always on a char boundary.
pub fn common_suffix(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c.len_utf8())
        .sum()
}

/// Length in chars of the longest suffix of `a` that is also a prefix of `b`.
pub fn common_overlap(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let length = a.len().min(b.len());
    let a = &a[a.len() - length..];
    let b = &b[..length];
    if a == b {
        return length;
    }

    let mut best = 0;
    let mut size = 1;
    loop {
        let pattern = &a[length - size..];
        let Some(found) = b.windows(pattern.len()).position(|window| window == pattern) else {
            return best;
        };
        size += found;
        if found == 0 || a[length - size..] == b[..size] {
            best = size;
            size += 1;
        }
        if size > length {
            return best;
        }
    }
}

fn split_at_char(text: &str, chars: usize) -> (&str, &str) {
    let index = text
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| index);
    text.split_at(index)
}
