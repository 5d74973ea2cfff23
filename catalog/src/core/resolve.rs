//! Turning a list of matches into a single target record.

/// How a set of matches resolves to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing matched.
    NotFound,
    /// Exactly one record is targeted (index into the collection).
    Unique(usize),
    /// Several records matched and no pick was supplied.
    Ambiguous(Vec<usize>),
    /// A pick was supplied but does not address one of the matches.
    InvalidChoice { pick: usize, candidates: usize },
}

/// Resolve `matches` (collection indices) using an optional 1-based `pick`.
///
/// A single match resolves regardless of `pick`; several matches require a
/// pick in `1..=matches.len()`.
pub fn resolve(matches: &[usize], pick: Option<usize>) -> Resolution {
    match (matches, pick) {
        ([], _) => Resolution::NotFound,
        ([only], _) => Resolution::Unique(*only),
        (many, None) => Resolution::Ambiguous(many.to_vec()),
        (many, Some(pick)) => match pick.checked_sub(1).and_then(|idx| many.get(idx)) {
            Some(idx) => Resolution::Unique(*idx),
            None => Resolution::InvalidChoice {
                pick,
                candidates: many.len(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_resolves_to_not_found() {
        assert_eq!(resolve(&[], Some(1)), Resolution::NotFound);
    }

    #[test]
    fn single_match_ignores_pick() {
        assert_eq!(resolve(&[4], None), Resolution::Unique(4));
        assert_eq!(resolve(&[4], Some(9)), Resolution::Unique(4));
    }

    #[test]
    fn several_matches_need_a_pick() {
        assert_eq!(resolve(&[1, 5], None), Resolution::Ambiguous(vec![1, 5]));
        assert_eq!(resolve(&[1, 5], Some(2)), Resolution::Unique(5));
    }

    #[test]
    fn out_of_range_pick_is_rejected() {
        assert_eq!(
            resolve(&[1, 5], Some(0)),
            Resolution::InvalidChoice {
                pick: 0,
                candidates: 2
            }
        );
        assert_eq!(
            resolve(&[1, 5], Some(3)),
            Resolution::InvalidChoice {
                pick: 3,
                candidates: 2
            }
        );
    }
}
