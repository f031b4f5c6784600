//! Character-level diffing
//!
//! - `edit`: the `Edit` value type and the run-length `Run` scripts
//! - `myers`: Myers' O(ND) algorithm, generic over any comparable token
//! - `cleanup`: passes that turn a minimal script into a human-readable one
//!
//! `DiffEngine` ties them together: it strips the common ends of both texts,
//! switches to a line-level first pass for long inputs, and finishes with a
//! semantic cleanup. Every script it returns reconstructs both inputs exactly.

pub mod cleanup;
pub mod edit;
pub mod myers;

pub use edit::{Edit, Operation, Run, left_text, right_text};

use crate::artifacts::diff::myers::MyersDiff;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Wall-clock budget for a single diff when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Inputs longer than this (in chars, on both sides) are diffed line by line first.
const LINE_MODE_THRESHOLD: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffEngine {
    timeout: Option<Duration>,
}

impl Default for DiffEngine {
    fn default() -> Self {
        DiffEngine {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl DiffEngine {
    pub fn new(timeout: Option<Duration>) -> Self {
        DiffEngine { timeout }
    }

    /// An engine that never gives up early, however long the inputs.
    pub fn unbounded() -> Self {
        DiffEngine { timeout: None }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Computes a semantically cleaned edit script turning `left` into `right`.
    ///
    /// When the time budget runs out the unresolved parts of the inputs are
    /// reported as whole deletions and insertions; the script is still valid.
    pub fn diff(&self, left: &str, right: &str) -> Vec<Edit> {
        let started = Instant::now();
        let mut pass = DiffPass {
            deadline: self.timeout.and_then(|timeout| started.checked_add(timeout)),
            exhausted: false,
        };

        let mut edits = pass.diff_main(left, right, true);
        cleanup::cleanup_semantic(&mut edits);

        if pass.exhausted {
            tracing::warn!(
                timeout = ?self.timeout,
                "diff time budget exhausted, returning a coarser edit script"
            );
        }
        tracing::debug!(
            edits = edits.len(),
            elapsed = ?started.elapsed(),
            "computed character diff"
        );

        edits
    }
}

/// Diffs `left` against `right` with the default engine.
pub fn diff(left: &str, right: &str) -> Vec<Edit> {
    DiffEngine::default().diff(left, right)
}

/// State shared by every sub-diff of one `DiffEngine::diff` call.
struct DiffPass {
    deadline: Option<Instant>,
    exhausted: bool,
}

impl DiffPass {
    fn diff_main(&mut self, left: &str, right: &str, line_mode: bool) -> Vec<Edit> {
        if left == right {
            return if left.is_empty() {
                Vec::new()
            } else {
                vec![Edit::equal(left)]
            };
        }

        let prefix = cleanup::common_prefix(left, right);
        let suffix = cleanup::common_suffix(&left[prefix..], &right[prefix..]);
        let left_middle = &left[prefix..left.len() - suffix];
        let right_middle = &right[prefix..right.len() - suffix];

        let mut edits = vec![Edit::equal(&left[..prefix])];
        edits.extend(self.compute(left_middle, right_middle, line_mode));
        edits.push(Edit::equal(&left[left.len() - suffix..]));

        cleanup::cleanup_merge(&mut edits);
        edits
    }

    /// Diffs two texts that share neither a prefix nor a suffix.
    fn compute(&mut self, left: &str, right: &str, line_mode: bool) -> Vec<Edit> {
        if left.is_empty() {
            return vec![Edit::insert(right)];
        }
        if right.is_empty() {
            return vec![Edit::delete(left)];
        }

        let (longer, shorter, operation) = if left.len() > right.len() {
            (left, right, Operation::Delete)
        } else {
            (right, left, Operation::Insert)
        };
        if let Some(index) = longer.find(shorter) {
            return vec![
                Edit::new(operation, &longer[..index]),
                Edit::equal(shorter),
                Edit::new(operation, &longer[index + shorter.len()..]),
            ];
        }
        if shorter.chars().nth(1).is_none() {
            // a single char not contained in the other text cannot be an equality
            return vec![Edit::delete(left), Edit::insert(right)];
        }

        if line_mode
            && left.chars().nth(LINE_MODE_THRESHOLD).is_some()
            && right.chars().nth(LINE_MODE_THRESHOLD).is_some()
        {
            return self.line_diff(left, right);
        }

        self.char_diff(left, right)
    }

    fn char_diff(&mut self, left: &str, right: &str) -> Vec<Edit> {
        let a: Vec<char> = left.chars().collect();
        let b: Vec<char> = right.chars().collect();

        let myers = MyersDiff::new(&a, &b, self.deadline);
        let runs = myers.diff();
        self.exhausted |= myers.exhausted();

        let (mut x, mut y) = (0, 0);
        runs.iter()
            .map(|run| {
                let text: String = match run.operation {
                    Operation::Insert => b[y..y + run.len].iter().collect(),
                    _ => a[x..x + run.len].iter().collect(),
                };
                if run.operation != Operation::Insert {
                    x += run.len;
                }
                if run.operation != Operation::Delete {
                    y += run.len;
                }
                Edit::new(run.operation, text)
            })
            .collect()
    }

    /// Diffs whole lines first, then re-diffs each replaced block by character.
    fn line_diff(&mut self, left: &str, right: &str) -> Vec<Edit> {
        let mut interner = LineInterner::default();
        let a = interner.intern(left);
        let b = interner.intern(right);

        let myers = MyersDiff::new(&a, &b, self.deadline);
        let runs = myers.diff();
        self.exhausted |= myers.exhausted();

        let mut edits = interner.materialize(&runs, &a, &b);
        tracing::trace!(lines = edits.len(), "line-level pass done");
        cleanup::cleanup_semantic(&mut edits);

        // sentinel flushes a trailing replaced block
        edits.push(Edit::equal(""));

        let mut refined = Vec::with_capacity(edits.len());
        let (mut deleted, mut inserted) = (String::new(), String::new());
        for edit in edits {
            match edit.operation {
                Operation::Delete => deleted.push_str(&edit.text),
                Operation::Insert => inserted.push_str(&edit.text),
                Operation::Equal => {
                    if !deleted.is_empty() && !inserted.is_empty() {
                        refined.extend(self.diff_main(&deleted, &inserted, false));
                    } else if !deleted.is_empty() {
                        refined.push(Edit::delete(std::mem::take(&mut deleted)));
                    } else if !inserted.is_empty() {
                        refined.push(Edit::insert(std::mem::take(&mut inserted)));
                    }
                    deleted.clear();
                    inserted.clear();
                    if !edit.text.is_empty() {
                        refined.push(edit);
                    }
                }
            }
        }

        cleanup::cleanup_merge(&mut refined);
        refined
    }
}

/// Assigns one id per distinct line so lines can be diffed as tokens.
#[derive(Debug, Default)]
struct LineInterner<'t> {
    ids: HashMap<&'t str, usize>,
    lines: Vec<&'t str>,
}

impl<'t> LineInterner<'t> {
    fn intern(&mut self, text: &'t str) -> Vec<usize> {
        text.split_inclusive('\n')
            .map(|line| {
                *self.ids.entry(line).or_insert_with(|| {
                    self.lines.push(line);
                    self.lines.len() - 1
                })
            })
            .collect()
    }

    fn materialize(&self, runs: &[Run], a: &[usize], b: &[usize]) -> Vec<Edit> {
        let (mut x, mut y) = (0, 0);
        let mut edits = Vec::with_capacity(runs.len());
        for run in runs {
            let tokens = match run.operation {
                Operation::Insert => &b[y..y + run.len],
                _ => &a[x..x + run.len],
            };
            let text: String = tokens.iter().map(|&id| self.lines[id]).collect();
            if run.operation != Operation::Insert {
                x += run.len;
            }
            if run.operation != Operation::Delete {
                y += run.len;
            }
            edits.push(Edit::new(run.operation, text));
        }
        edits
    }
}
