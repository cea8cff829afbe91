use crate::domain::rules::valid_bid_range;
use crate::errors::domain::DomainError;

/// Reject bids outside `0..=round_no`. Totals are never constrained.
pub fn validate_bid(round_no: u8, bid: u8) -> Result<u8, DomainError> {
    if valid_bid_range(round_no).contains(&bid) {
        Ok(bid)
    } else {
        Err(DomainError::InvalidBid { bid, max: round_no })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bids_within_round_size_pass() {
        assert_eq!(validate_bid(1, 0).unwrap(), 0);
        assert_eq!(validate_bid(5, 5).unwrap(), 5);
        assert_eq!(
            validate_bid(5, 6),
            Err(DomainError::InvalidBid { bid: 6, max: 5 })
        );
    }
}
