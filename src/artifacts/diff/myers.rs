use crate::artifacts::diff::edit::{Operation, Run};
use derive_new::new;
use std::cell::Cell;
use std::time::Instant;

/// Myers' O(ND) difference algorithm over arbitrary token slices.
///
/// Uses the linear-space "middle snake" bisection: the forward and reverse
/// searches run until their furthest-reaching paths overlap, the sequences are
/// split there and each half is diffed recursively. When `deadline` passes,
/// the sub-problem being searched is reported as one delete plus one insert.
#[derive(Debug, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    deadline: Option<Instant>,
    #[new(default)]
    exhausted: Cell<bool>,
}

impl<'d, T: PartialEq> MyersDiff<'d, T> {
    pub fn diff(&self) -> Vec<Run> {
        let mut runs = Vec::new();
        self.diff_slices(self.a, self.b, &mut runs);
        runs
    }

    /// Whether the deadline cut at least one sub-problem short.
    pub fn exhausted(&self) -> bool {
        self.exhausted.get()
    }

    fn diff_slices(&self, a: &[T], b: &[T], runs: &mut Vec<Run>) {
        let prefix = common_prefix(a, b);
        let suffix = common_suffix(&a[prefix..], &b[prefix..]);
        let (a_mid, b_mid) = (&a[prefix..a.len() - suffix], &b[prefix..b.len() - suffix]);

        push_run(runs, Operation::Equal, prefix);
        if a_mid.is_empty() {
            push_run(runs, Operation::Insert, b_mid.len());
        } else if b_mid.is_empty() {
            push_run(runs, Operation::Delete, a_mid.len());
        } else {
            match self.bisect(a_mid, b_mid) {
                Some((x, y)) => {
                    self.diff_slices(&a_mid[..x], &b_mid[..y], runs);
                    self.diff_slices(&a_mid[x..], &b_mid[y..], runs);
                }
                None => {
                    push_run(runs, Operation::Delete, a_mid.len());
                    push_run(runs, Operation::Insert, b_mid.len());
                }
            }
        }
        push_run(runs, Operation::Equal, suffix);
    }

    /// Finds the middle snake of the edit graph and returns the point to split at.
    fn bisect(&self, a: &[T], b: &[T]) -> Option<(usize, usize)> {
        let (n, m) = (a.len() as isize, b.len() as isize);
        let max_d = (n + m + 1) / 2 + 1;
        let offset = max_d;
        let length = (2 * max_d) as usize;

        let mut v1 = vec![-1isize; length];
        let mut v2 = vec![-1isize; length];
        v1[(offset + 1) as usize] = 0;
        v2[(offset + 1) as usize] = 0;

        let delta = n - m;
        // with an odd delta the forward path is the one that collides with the reverse one
        let front = delta % 2 != 0;

        let (mut k1_start, mut k1_end, mut k2_start, mut k2_end) = (0, 0, 0, 0);

        for d in 0..max_d {
            if self.deadline.is_some_and(|deadline| Instant::now() > deadline) {
                self.exhausted.set(true);
                break;
            }

            let mut k1 = -d + k1_start;
            while k1 <= d - k1_end {
                let k1_offset = (offset + k1) as usize;
                let mut x1 = if k1 == -d || (k1 != d && v1[k1_offset - 1] < v1[k1_offset + 1]) {
                    v1[k1_offset + 1]
                } else {
                    v1[k1_offset - 1] + 1
                };
                let mut y1 = x1 - k1;
                while x1 < n && y1 < m && a[x1 as usize] == b[y1 as usize] {
                    x1 += 1;
                    y1 += 1;
                }
                v1[k1_offset] = x1;

                if x1 > n {
                    k1_end += 2;
                } else if y1 > m {
                    k1_start += 2;
                } else if front {
                    let k2_offset = offset + delta - k1;
                    if (0..length as isize).contains(&k2_offset) {
                        let x2 = v2[k2_offset as usize];
                        if x2 != -1 && x1 >= n - x2 {
                            return Some((x1 as usize, y1 as usize));
                        }
                    }
                }
                k1 += 2;
            }

            let mut k2 = -d + k2_start;
            while k2 <= d - k2_end {
                let k2_offset = (offset + k2) as usize;
                let mut x2 = if k2 == -d || (k2 != d && v2[k2_offset - 1] < v2[k2_offset + 1]) {
                    v2[k2_offset + 1]
                } else {
                    v2[k2_offset - 1] + 1
                };
                let mut y2 = x2 - k2;
                while x2 < n && y2 < m && a[(n - x2 - 1) as usize] == b[(m - y2 - 1) as usize] {
                    x2 += 1;
                    y2 += 1;
                }
                v2[k2_offset] = x2;

                if x2 > n {
                    k2_end += 2;
                } else if y2 > m {
                    k2_start += 2;
                } else if !front {
                    let k1_offset = offset + delta - k2;
                    if (0..length as isize).contains(&k1_offset) {
                        let x1 = v1[k1_offset as usize];
                        if x1 != -1 {
                            let y1 = offset + x1 - k1_offset;
                            if x1 >= n - x2 {
                                return Some((x1 as usize, y1 as usize));
                            }
                        }
                    }
                }
                k2 += 2;
            }
        }

        None
    }
}

fn push_run(runs: &mut Vec<Run>, operation: Operation, len: usize) {
    if len == 0 {
        return;
    }
    match runs.last_mut() {
        Some(last) if last.operation == operation => last.len += len,
        _ => runs.push(Run::new(operation, len)),
    }
}

pub fn common_prefix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

pub fn common_suffix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}
