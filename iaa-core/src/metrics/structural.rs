//! Structural edit distance between two markable lists.
//!
//! The distance is the cheapest sequence of markable operations that turns
//! the source annotation into the target annotation:
//!
//! - **Delete** (1): drop a markable, its tokens become uncovered.
//! - **Add** (1): create a markable over uncovered tokens.
//! - **Merge** (1 each): join two neighbouring units into one markable. A
//!   unit is a markable or the uncovered run touching a markable's edge;
//!   uncovered tokens between two joined markables come along for free.
//!
//! There is no split in the standard mode, so splitting one markable costs
//! a delete plus one add per part. [`EditMode::Extended`] adds Demerge
//! (the inverse of Merge, same cost) and labels an overlapping delete+add
//! pair as one Substitute (2).
//!
//! The minimum is found with a table indexed by how many source and target
//! markables have been consumed, so the work is bounded by
//! `O(|source| * |target| * run length)`.
//!
//! ```rust
//! use iaa_core::{structural_distance, tokenize};
//!
//! let a = tokenize("als [Peter] [seinen Mund]", "[", "]").unwrap();
//! let b = tokenize("als [Peter seinen] Mund", "[", "]").unwrap();
//! assert_eq!(structural_distance(&a, &b), (2, 1.0));
//! ```

use crate::domain::{Annotation, Markable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Which operations the edit script may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Delete, Add and Merge
    #[default]
    Standard,
    /// Standard plus Demerge and Substitute
    Extended,
}

/// One step of an edit script, in source/target markable indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    /// Identical markable in both lists
    Keep {
        /// Source markable index
        source: usize,
        /// Target markable index
        target: usize,
    },
    /// Source markable removed
    Delete {
        /// Source markable index
        source: usize,
    },
    /// Target markable created from uncovered tokens
    Add {
        /// Target markable index
        target: usize,
    },
    /// Source markables (and adjacent uncovered runs) joined into one target
    Merge {
        /// Consecutive source markable indices
        sources: Range<usize>,
        /// Target markable index
        target: usize,
        /// Number of merges performed
        cost: usize,
    },
    /// One source markable split (and trimmed) into consecutive targets
    Demerge {
        /// Source markable index
        source: usize,
        /// Consecutive target markable indices
        targets: Range<usize>,
        /// Number of splits performed
        cost: usize,
    },
    /// Overlapping source markable replaced by a target markable
    Substitute {
        /// Source markable index
        source: usize,
        /// Target markable index
        target: usize,
    },
}

impl EditOp {
    /// Cost contributed to the distance
    pub fn cost(&self) -> usize {
        match self {
            EditOp::Keep { .. } => 0,
            EditOp::Delete { .. } | EditOp::Add { .. } => 1,
            EditOp::Merge { cost, .. } | EditOp::Demerge { cost, .. } => *cost,
            EditOp::Substitute { .. } => 2,
        }
    }

    /// Preference among equal-cost scripts; lower wins
    fn rank(&self) -> u8 {
        match self {
            EditOp::Keep { .. } => 0,
            EditOp::Merge { .. } | EditOp::Demerge { .. } => 1,
            EditOp::Substitute { .. } => 2,
            EditOp::Delete { .. } => 3,
            EditOp::Add { .. } => 4,
        }
    }

    /// Human-readable form using the markable texts of both annotations
    pub fn describe(&self, source: &Annotation, target: &Annotation) -> String {
        let src = |i: usize| quoted(source, source.markables()[i]);
        let tgt = |j: usize| quoted(target, target.markables()[j]);

        match self {
            EditOp::Keep { source, .. } => format!("keep {}", src(*source)),
            EditOp::Delete { source } => format!("delete {}", src(*source)),
            EditOp::Add { target } => format!("add {}", tgt(*target)),
            EditOp::Merge {
                sources,
                target,
                cost,
            } => {
                let parts: Vec<String> = sources.clone().map(src).collect();
                format!("merge {} into {} ({cost})", parts.join(" + "), tgt(*target))
            }
            EditOp::Demerge {
                source,
                targets,
                cost,
            } => {
                let parts: Vec<String> = targets.clone().map(tgt).collect();
                format!("demerge {} into {} ({cost})", src(*source), parts.join(" + "))
            }
            EditOp::Substitute { source, target } => {
                format!("substitute {} with {}", src(*source), tgt(*target))
            }
        }
    }
}

fn quoted(annotation: &Annotation, markable: Markable) -> String {
    format!("[{}]", annotation.markable_text(&markable))
}

/// Distance, normalized distance and one cheapest edit script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralDistance {
    /// Total cost of the script
    pub distance: usize,
    /// `distance / max(|source|, |target|)`, 0 when both are empty
    pub normalized: f64,
    /// Operations in source order
    pub script: Vec<EditOp>,
}

impl StructuralDistance {
    /// Compute the cheapest transformation of `source` into `target`
    pub fn compute(source: &Annotation, target: &Annotation, mode: EditMode) -> Self {
        let src = source.markables();
        let tgt = target.markables();

        let script = Lattice::solve(src, tgt, mode);
        let distance = script.iter().map(EditOp::cost).sum();
        let normalized = match src.len().max(tgt.len()) {
            0 => 0.0,
            longest => distance as f64 / longest as f64,
        };

        log::debug!(
            "structural distance {distance} ({} -> {} markables, {mode:?})",
            src.len(),
            tgt.len()
        );

        Self {
            distance,
            normalized,
            script,
        }
    }
}

impl fmt::Display for StructuralDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (normalized {})", self.distance, self.normalized)
    }
}

/// Standard-mode distance and normalized distance of `a` into `b`
pub fn structural_distance(a: &Annotation, b: &Annotation) -> (usize, f64) {
    let result = StructuralDistance::compute(a, b, EditMode::Standard);
    (result.distance, result.normalized)
}

#[derive(Debug, Clone)]
struct Entry {
    cost: usize,
    back: Option<((usize, usize), EditOp)>,
}

/// Cheapest-path table over (source consumed, target consumed)
struct Lattice {
    cols: usize,
    cells: Vec<Option<Entry>>,
}

impl Lattice {
    fn solve(source: &[Markable], target: &[Markable], mode: EditMode) -> Vec<EditOp> {
        let (n, m) = (source.len(), target.len());
        let mut lattice = Lattice {
            cols: m + 1,
            cells: vec![None; (n + 1) * (m + 1)],
        };
        lattice.cells[0] = Some(Entry {
            cost: 0,
            back: None,
        });

        // Every transition moves to a later cell in row-major order.
        for i in 0..=n {
            for j in 0..=m {
                let Some(base) = lattice.cost(i, j) else {
                    continue;
                };
                if i < n {
                    lattice.relax((i, j), (i + 1, j), base, EditOp::Delete { source: i });
                }
                if j < m {
                    lattice.relax((i, j), (i, j + 1), base, EditOp::Add { target: j });
                }
                if i < n && j < m {
                    lattice.merges(source, target, (i, j), base);
                    if mode == EditMode::Extended {
                        lattice.demerges(source, target, (i, j), base);
                        if source[i].overlaps(&target[j]) {
                            let op = EditOp::Substitute {
                                source: i,
                                target: j,
                            };
                            lattice.relax((i, j), (i + 1, j + 1), base, op);
                        }
                    }
                }
            }
        }

        lattice.backtrack(n, m)
    }

    /// Source run `i..i+k` inside target `j`, plus edge runs absorbed
    fn merges(&mut self, source: &[Markable], target: &[Markable], at: (usize, usize), base: usize) {
        let (i, j) = at;
        let t = target[j];
        let mut k = 0;
        while i + k < source.len() && t.contains(&source[i + k]) {
            k += 1;
            let edges = usize::from(t.start < source[i].start)
                + usize::from(source[i + k - 1].end < t.end);
            let cost = k - 1 + edges;
            let op = if cost == 0 {
                EditOp::Keep {
                    source: i,
                    target: j,
                }
            } else {
                EditOp::Merge {
                    sources: i..i + k,
                    target: j,
                    cost,
                }
            };
            self.relax(at, (i + k, j + 1), base, op);
        }
    }

    /// Target run `j..j+k` inside source `i`, edges trimmed
    fn demerges(&mut self, source: &[Markable], target: &[Markable], at: (usize, usize), base: usize) {
        let (i, j) = at;
        let s = source[i];
        let mut k = 0;
        while j + k < target.len() && s.contains(&target[j + k]) {
            k += 1;
            let edges = usize::from(s.start < target[j].start)
                + usize::from(target[j + k - 1].end < s.end);
            let cost = k - 1 + edges;
            if cost == 0 {
                // identical markables, already a Keep
                continue;
            }
            let op = EditOp::Demerge {
                source: i,
                targets: j..j + k,
                cost,
            };
            self.relax(at, (i + 1, j + k), base, op);
        }
    }

    fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    fn cost(&self, i: usize, j: usize) -> Option<usize> {
        self.cells[self.index(i, j)].as_ref().map(|e| e.cost)
    }

    fn relax(&mut self, from: (usize, usize), to: (usize, usize), base: usize, op: EditOp) {
        let cost = base + op.cost();
        let idx = self.index(to.0, to.1);
        let better = match &self.cells[idx] {
            None => true,
            Some(Entry {
                cost: old,
                back: Some((_, old_op)),
            }) => (cost, op.rank()) < (*old, old_op.rank()),
            Some(Entry { back: None, .. }) => false,
        };
        if better {
            self.cells[idx] = Some(Entry {
                cost,
                back: Some((from, op)),
            });
        }
    }

    fn backtrack(&self, n: usize, m: usize) -> Vec<EditOp> {
        let mut script = Vec::new();
        let mut at = (n, m);
        while let Some(Entry {
            back: Some((from, op)),
            ..
        }) = &self.cells[self.index(at.0, at.1)]
        {
            script.push(op.clone());
            at = *from;
        }
        script.reverse();
        script
    }
}
