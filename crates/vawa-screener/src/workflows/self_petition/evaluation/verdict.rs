use super::EligibilityStatus;

/// Reduce criterion statuses to the overall verdict.
///
/// Not eligible outranks needs review, which outranks eligible. An empty list
/// yields needs review: nothing was evaluated, so nothing can be concluded.
pub fn overall_verdict<I>(statuses: I) -> EligibilityStatus
where
    I: IntoIterator<Item = EligibilityStatus>,
{
    statuses
        .into_iter()
        .reduce(|current, next| {
            if next.precedence() > current.precedence() {
                next
            } else {
                current
            }
        })
        .unwrap_or(EligibilityStatus::NeedsReview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use EligibilityStatus::{Eligible, NeedsReview, NotEligible};

    #[test]
    fn not_eligible_wins_regardless_of_position() {
        assert_eq!(overall_verdict([NotEligible, Eligible, NeedsReview]), NotEligible);
        assert_eq!(overall_verdict([Eligible, NeedsReview, NotEligible]), NotEligible);
    }

    #[test]
    fn needs_review_outranks_eligible() {
        assert_eq!(overall_verdict([Eligible, NeedsReview, Eligible]), NeedsReview);
    }

    #[test]
    fn all_eligible_is_eligible() {
        assert_eq!(overall_verdict([Eligible; 7]), Eligible);
    }

    #[test]
    fn empty_input_needs_review() {
        assert_eq!(overall_verdict(Vec::new()), NeedsReview);
    }

    #[test]
    fn precedence_is_a_strict_total_order() {
        assert!(Eligible.precedence() < NeedsReview.precedence());
        assert!(NeedsReview.precedence() < NotEligible.precedence());
    }
}
