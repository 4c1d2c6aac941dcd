//! Hierarchical path matching
//!
//! Category and origin taxonomies are stored as `" > "`-joined segment strings
//! ("Europe > Western Europe > France"). This module owns the one split of
//! that wire format and offers two views over it:
//!
//! - scored classification ([`classify`]) used by the similarity engine, where
//!   each relationship tier maps to a caller-supplied point value
//! - boolean descendant-or-equal matching ([`is_descendant_or_equal`]) used by
//!   taxonomy filters
//!
//! The delimiter is exact: segments are never trimmed and no alternate
//! separators are recognized.

use serde::{Deserialize, Serialize};

/// Level delimiter for hierarchical paths
pub const PATH_DELIMITER: &str = " > ";

/// Point values awarded per relationship tier. Unrelated paths always score 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierScores {
    pub exact: u32,
    pub sibling: u32,
    pub parent_child: u32,
    pub cousin: u32,
}

impl TierScores {
    /// Tiers for category (meaning) paths
    pub const CATEGORY: TierScores = TierScores {
        exact: 70,
        sibling: 40,
        parent_child: 30,
        cousin: 10,
    };

    /// Tiers for geographic origin paths
    pub const ORIGIN: TierScores = TierScores {
        exact: 45,
        sibling: 25,
        parent_child: 20,
        cousin: 8,
    };

    /// Score for a classified relationship
    pub fn score(&self, relation: PathRelation) -> u32 {
        match relation {
            PathRelation::Identical => self.exact,
            PathRelation::Sibling => self.sibling,
            PathRelation::ParentChild => self.parent_child,
            PathRelation::Cousin => self.cousin,
            PathRelation::Unrelated => 0,
        }
    }
}

/// Relationship between two hierarchical paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelation {
    /// Same path
    Identical,
    /// Same parent, different leaf
    Sibling,
    /// One path is a strict prefix of the other
    ParentChild,
    /// Common ancestor one level above the parents
    Cousin,
    /// No common root, or only a distant one
    Unrelated,
}

impl PathRelation {
    /// Lower-case display label
    pub fn label(&self) -> &'static str {
        match self {
            PathRelation::Identical => "identical",
            PathRelation::Sibling => "sibling",
            PathRelation::ParentChild => "parent-child",
            PathRelation::Cousin => "cousin",
            PathRelation::Unrelated => "unrelated",
        }
    }
}

/// Split a path into its ordered segments
pub fn segments(path: &str) -> Vec<&str> {
    path.split(PATH_DELIMITER).collect()
}

/// Number of levels in a path
pub fn depth(path: &str) -> usize {
    segments(path).len()
}

/// All prefixes of a path from depth 1 through the path itself
pub fn ancestors(path: &str) -> Vec<String> {
    let parts = segments(path);
    (1..=parts.len())
        .map(|n| parts[..n].join(PATH_DELIMITER))
        .collect()
}

/// Length of the longest shared segment prefix
fn common_depth(a: &[&str], b: &[&str]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Classify how two paths relate within the hierarchy.
pub fn classify_relation(path_a: &str, path_b: &str) -> PathRelation {
    let a = segments(path_a);
    let b = segments(path_b);

    let common = common_depth(&a, &b);
    if common == 0 {
        return PathRelation::Unrelated;
    }
    if path_a == path_b {
        return PathRelation::Identical;
    }

    let shallow = a.len().min(b.len());
    if common == shallow {
        return PathRelation::ParentChild;
    }
    if common + 1 == shallow {
        return if a.len() == b.len() {
            PathRelation::Sibling
        } else {
            // aunt/nephew: the deeper path's grandparent is shared
            PathRelation::Cousin
        };
    }
    if common + 2 == shallow {
        return PathRelation::Cousin;
    }

    PathRelation::Unrelated
}

/// Score the relationship between two paths with the given tiers
pub fn classify(path_a: &str, path_b: &str, tiers: &TierScores) -> u32 {
    tiers.score(classify_relation(path_a, path_b))
}

/// Best tier score over every pair drawn from two path lists
pub fn best_match<A, B>(paths_a: &[A], paths_b: &[B], tiers: &TierScores) -> u32
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    paths_a
        .iter()
        .flat_map(|a| {
            paths_b
                .iter()
                .map(move |b| classify(a.as_ref(), b.as_ref(), tiers))
        })
        .max()
        .unwrap_or(0)
}

/// Filter-mode test: `path` equals `selector` or lies beneath it.
pub fn is_descendant_or_equal(path: &str, selector: &str) -> bool {
    path == selector
        || path
            .strip_prefix(selector)
            .is_some_and(|rest| rest.starts_with(PATH_DELIMITER))
}

/// Drop selectors that are strict ancestors of another selector in the set.
///
/// Order of the surviving selectors is preserved; exact duplicates collapse to
/// their first occurrence.
pub fn most_specific<S: AsRef<str>>(selectors: &[S]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for (i, selector) in selectors.iter().enumerate() {
        let selector = selector.as_ref();
        let has_descendant = selectors.iter().enumerate().any(|(j, other)| {
            let other = other.as_ref();
            i != j && other != selector && is_descendant_or_equal(other, selector)
        });
        if !has_descendant && !kept.iter().any(|k| k == selector) {
            kept.push(selector.to_string());
        }
    }
    kept
}

/// Whether any path lies at or beneath any selector
pub fn matches_any<P, S>(paths: &[P], selectors: &[S]) -> bool
where
    P: AsRef<str>,
    S: AsRef<str>,
{
    paths.iter().any(|p| {
        selectors
            .iter()
            .any(|s| is_descendant_or_equal(p.as_ref(), s.as_ref()))
    })
}
