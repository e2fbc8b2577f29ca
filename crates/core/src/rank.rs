// Copyright 2025 Runtime Ranking Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deterministic ordering of aggregate scores.

use crate::aggregate::AggregateScore;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A runtime's place in a [`Ranking`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRuntime {
    /// 1-based position.
    pub position: usize,
    /// The score that earned the position.
    #[serde(flatten)]
    pub score: AggregateScore,
}

/// Runtimes ordered from fastest to slowest geometric-mean speedup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedRuntime>,
}

impl Ranking {
    /// Ranked entries, best first.
    pub fn entries(&self) -> &[RankedRuntime] {
        &self.entries
    }

    /// Iterate over entries, best first.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedRuntime> {
        self.entries.iter()
    }

    /// The best runtime, if any was scored.
    pub fn top(&self) -> Option<&RankedRuntime> {
        self.entries.first()
    }

    /// Position of `runtime`, if it was scored.
    pub fn position(&self, runtime: &str) -> Option<usize> {
        self.get(runtime).map(|e| e.position)
    }

    /// Entry of `runtime`, if it was scored.
    pub fn get(&self, runtime: &str) -> Option<&RankedRuntime> {
        self.entries.iter().find(|e| e.score.runtime == runtime)
    }

    /// Number of ranked runtimes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedRuntime;
    type IntoIter = std::slice::Iter<'a, RankedRuntime>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Orders scores by descending geometric mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    /// Higher score first; equal scores by ascending runtime name.
    pub fn compare(a: &AggregateScore, b: &AggregateScore) -> Ordering {
        b.geometric_mean_speedup
            .total_cmp(&a.geometric_mean_speedup)
            .then_with(|| a.runtime.cmp(&b.runtime))
    }

    /// Rank scores. The result does not depend on input order.
    pub fn rank(scores: impl IntoIterator<Item = AggregateScore>) -> Ranking {
        let mut scores: Vec<AggregateScore> = scores.into_iter().collect();
        scores.sort_by(Self::compare);

        let entries = scores
            .into_iter()
            .enumerate()
            .map(|(i, score)| RankedRuntime {
                position: i + 1,
                score,
            })
            .collect();
        Ranking { entries }
    }
}
