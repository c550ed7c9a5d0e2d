use crate::{ProofTokenCodec, TokenError};

use std::time::Duration;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

const SECRET: &str = "proof-token-signing-secret-32-chars!";

// =========================================================================
// Property-Based Tests - Expiry Boundary
// =========================================================================

proptest! {
    #[test]
    fn given_redemption_before_expiry_when_redeemed_then_succeeds(
        issued_at in 1_600_000_000i64..2_000_000_000,
        ttl in 1u64..86_400,
        offset_fraction in 0.0f64..1.0,
    ) {
        let codec = ProofTokenCodec::new(SECRET, Duration::from_secs(ttl));
        let t0 = Utc.timestamp_opt(issued_at, 0).unwrap();
        let issued = codec.issue_at(7, 10, 55, None, t0).unwrap();
        let offset = ((ttl as f64) * offset_fraction) as i64;
        let offset = offset.min(ttl as i64 - 1);

        let redeemed = codec.redeem_at(7, &issued.token, t0 + chrono::Duration::seconds(offset));

        prop_assert!(redeemed.is_ok());
    }

    #[test]
    fn given_redemption_at_or_after_expiry_when_redeemed_then_expired(
        issued_at in 1_600_000_000i64..2_000_000_000,
        ttl in 1u64..86_400,
        late_by in 0i64..1_000_000,
    ) {
        let codec = ProofTokenCodec::new(SECRET, Duration::from_secs(ttl));
        let t0 = Utc.timestamp_opt(issued_at, 0).unwrap();
        let issued = codec.issue_at(7, 10, 55, None, t0).unwrap();

        let redeemed = codec.redeem_at(
            7,
            &issued.token,
            t0 + chrono::Duration::seconds(ttl as i64 + late_by),
        );

        prop_assert!(matches!(redeemed, Err(TokenError::Expired { .. })), "expected expiry");
    }
}
