use bio::alignment::AlignmentOperation;
use bio::alignment::pairwise::{Aligner, Scoring};

// Smith-Waterman parameters matching the aligner the original ASH tool
// delegated to (scikit-bio StripedSmithWaterman defaults: match 2,
// mismatch -3, gap open 5, gap extend 2). SSW charges a length-k gap
// open + (k-1)*extend, while `Scoring` charges open + k*extend, so the
// open penalty here is pre-reduced by one extend step: the first gap
// position costs 5 and each further position 2, as in the original.
const MATCH_SCORE: i32 = 2;
const MISMATCH_SCORE: i32 = -3;
const GAP_OPEN: i32 = -3;
const GAP_EXTEND: i32 = -2;

/// The two gapped, equal-length sequences covering the locally aligned
/// region of the input pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub first: String,
    pub second: String,
}

/// Locally aligns two protein sequences and reconstructs the gapped strings
/// the profile workflow consumes.
pub fn align(first: &str, second: &str) -> AlignedPair {
    let x = first.as_bytes();
    let y = second.as_bytes();

    let scoring = Scoring::from_scores(GAP_OPEN, GAP_EXTEND, MATCH_SCORE, MISMATCH_SCORE);
    let mut aligner = Aligner::with_capacity_and_scoring(x.len(), y.len(), scoring);
    let alignment = aligner.local(x, y);

    let mut first_aligned = String::with_capacity(alignment.operations.len());
    let mut second_aligned = String::with_capacity(alignment.operations.len());
    let (mut i, mut j) = (alignment.xstart, alignment.ystart);
    for operation in &alignment.operations {
        match operation {
            AlignmentOperation::Match | AlignmentOperation::Subst => {
                first_aligned.push(x[i] as char);
                second_aligned.push(y[j] as char);
                i += 1;
                j += 1;
            }
            AlignmentOperation::Ins => {
                first_aligned.push(x[i] as char);
                second_aligned.push('-');
                i += 1;
            }
            AlignmentOperation::Del => {
                first_aligned.push('-');
                second_aligned.push(y[j] as char);
                j += 1;
            }
            AlignmentOperation::Xclip(len) => i += len,
            AlignmentOperation::Yclip(len) => j += len,
        }
    }

    AlignedPair {
        first: first_aligned,
        second: second_aligned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_returns_equal_length_sequences() {
        let pair = align("PEPTIDEDERK", "PEPTIDDERK");
        assert_eq!(pair.first.len(), pair.second.len());
    }

    #[test]
    fn align_leaves_identical_sequences_ungapped() {
        let pair = align("PEPTIDEDERK", "PEPTIDEDERK");
        assert_eq!(pair.first, "PEPTIDEDERK");
        assert_eq!(pair.second, "PEPTIDEDERK");
    }

    #[test]
    fn align_opens_a_gap_for_a_deleted_residue() {
        let pair = align("PEPTIDEDERKAAAA", "PEPTIDDERKAAAA");
        assert_eq!(pair.first.len(), pair.second.len());
        assert!(pair.second.contains('-'));
        assert!(!pair.first.contains('-'));
    }

    #[test]
    fn align_opens_a_marginal_length_one_gap() {
        // Bridging the deleted A joins a 3-match block (+6) for a single
        // gap position (-5), so the gapped alignment must win over the
        // bare DERK prefix. A first-gap cost of 7 would lose it.
        let pair = align("DERKAWLI", "DERKWLI");
        assert_eq!(pair.first, "DERKAWLI");
        assert_eq!(pair.second, "DERK-WLI");
    }

    #[test]
    fn align_covers_only_the_locally_aligned_region() {
        // Local alignment trims the unrelated prefix of the second sequence.
        let pair = align("DERKDERK", "WWWWDERKDERK");
        assert_eq!(pair.first, "DERKDERK");
        assert_eq!(pair.second, "DERKDERK");
    }
}
