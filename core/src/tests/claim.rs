use alloc::string::ToString;

use crate::claim::*;

#[test]
fn test_begin_requires_wallet_and_score() {
    let mut claim = ClaimState::Idle;
    claim.begin(100, false);
    assert_eq!(
        claim,
        ClaimState::Error {
            error: NOT_READY_ERROR.to_string()
        }
    );

    let mut claim = ClaimState::Idle;
    claim.begin(0, true);
    assert_eq!(
        claim,
        ClaimState::Error {
            error: NOT_READY_ERROR.to_string()
        }
    );
}

#[test]
fn test_happy_path_transitions() {
    let mut claim = ClaimState::Idle;

    claim.begin(100, true);
    assert_eq!(claim, ClaimState::Generating);

    claim.signature_ready();
    assert_eq!(claim, ClaimState::Signing);

    claim.tx_submitted("0xabc123");
    assert_eq!(
        claim,
        ClaimState::Pending {
            tx_hash: "0xabc123".to_string()
        }
    );

    claim.tx_confirmed();
    assert_eq!(
        claim,
        ClaimState::Success {
            tx_hash: "0xabc123".to_string()
        }
    );
}

#[test]
fn test_out_of_order_events_ignored() {
    let mut claim = ClaimState::Idle;
    claim.signature_ready();
    claim.tx_submitted("0x1");
    claim.tx_confirmed();
    assert_eq!(claim, ClaimState::Idle, "Events out of order must no-op");

    let mut claim = ClaimState::Generating;
    claim.tx_confirmed();
    assert_eq!(claim, ClaimState::Generating);
}

#[test]
fn test_fail_categorizes_from_any_inflight_state() {
    let mut claim = ClaimState::Signing;
    claim.fail("MetaMask Tx Signature: User rejected the request.");
    assert_eq!(
        claim,
        ClaimState::Error {
            error: "Transaction was cancelled".to_string()
        }
    );

    let mut claim = ClaimState::Idle;
    claim.fail("network down");
    assert_eq!(claim, ClaimState::Idle, "Idle state cannot fail");
}

#[test]
fn test_reset_returns_to_idle() {
    let mut claim = ClaimState::Error {
        error: "boom".to_string(),
    };
    claim.reset();
    assert!(claim.is_idle());
}

#[test]
fn test_categorize_error_table() {
    let cases = [
        ("User rejected the request", "Transaction was cancelled"),
        ("err: user rejected tx", "Transaction was cancelled"),
        (
            "insufficient funds for transfer",
            "Insufficient funds for gas fees",
        ),
        (
            "network connection lost",
            "Network error. Please check your connection.",
        ),
        (
            "Contract call timeout",
            "Request timed out. Please try again.",
        ),
        ("Session expired", "Session expired, please claim again"),
        (
            "Server configuration error",
            "Service temporarily unavailable. Please try again later.",
        ),
        ("", "Failed to claim reward"),
    ];
    for (raw, expected) in cases {
        assert_eq!(categorize_error(raw), expected, "Input {:?}", raw);
    }
}

#[test]
fn test_unmatched_errors_pass_through() {
    assert_eq!(
        categorize_error("execution reverted: MintRequest already used"),
        "execution reverted: MintRequest already used"
    );
}
