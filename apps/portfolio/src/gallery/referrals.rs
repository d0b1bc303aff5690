use serde::Serialize;

use crate::models::profile::Referral;
use crate::rotation::RotatingIndex;

/// One position of the coworker quote carousel on the home page.
///
/// `next` is where the page's auto-advance leads; the server keeps no
/// position between requests.
#[derive(Debug, Clone, Serialize)]
pub struct ReferralSlide {
    pub index: usize,
    pub next: usize,
    pub quote: &'static str,
    pub author: &'static str,
    pub dots: Vec<ReferralDot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferralDot {
    pub index: usize,
    pub number: usize,
    pub active: bool,
}

impl ReferralSlide {
    /// Only a carousel with more than one quote advances.
    pub fn rotates(&self) -> bool {
        self.dots.len() > 1
    }
}

/// Slide for the requested index (indicator dot or auto-advance), wrapped
/// into range. No index means the first quote.
pub fn referral_slide(
    referrals: &'static [Referral],
    requested: Option<usize>,
) -> Option<ReferralSlide> {
    let idx = RotatingIndex::starting_at(referrals.len(), requested.unwrap_or(0));
    let referral = referrals.get(idx.current())?;
    Some(ReferralSlide {
        index: idx.current(),
        next: idx.peek_next(),
        quote: referral.quote,
        author: referral.author,
        dots: (0..idx.len())
            .map(|i| ReferralDot {
                index: i,
                number: i + 1,
                active: i == idx.current(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static QUOTES: &[Referral] = &[
        Referral { quote: "first", author: "A" },
        Referral { quote: "second", author: "B" },
    ];

    #[test]
    fn test_first_visit_starts_at_first_quote() {
        let slide = referral_slide(QUOTES, None).unwrap();
        assert_eq!(slide.quote, "first");
        assert_eq!(slide.next, 1);
        assert!(slide.dots[0].active);
        assert!(slide.rotates());
    }

    #[test]
    fn test_requested_index_wraps() {
        assert_eq!(referral_slide(QUOTES, Some(1)).unwrap().author, "B");
        assert_eq!(referral_slide(QUOTES, Some(4)).unwrap().author, "A");
        assert_eq!(referral_slide(QUOTES, Some(1)).unwrap().next, 0);
    }

    #[test]
    fn test_single_quote_does_not_rotate() {
        let slide = referral_slide(&QUOTES[..1], Some(3)).unwrap();
        assert_eq!(slide.index, 0);
        assert!(!slide.rotates());
    }

    #[test]
    fn test_empty_carousel_has_no_slide() {
        assert!(referral_slide(&[], None).is_none());
        assert!(referral_slide(&[], Some(2)).is_none());
    }
}
