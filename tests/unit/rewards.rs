use arogya_sarthi::mock_data;
use arogya_sarthi::models::{Reward, RewardKind};
use arogya_sarthi::ui::screens::{RedeemError, RewardsWallet};
use assert_matches::assert_matches;
use test_log::test;

fn reward(points: u32, available: bool) -> Reward {
    Reward {
        name: "Test Reward".to_string(),
        points,
        available,
        kind: RewardKind::Health,
    }
}

#[test]
fn test_redeem_succeeds_iff_affordable_and_available() {
    for points in [0, 499, 500, 501, 1250] {
        for available in [true, false] {
            let mut wallet = RewardsWallet::new(points, 3);
            let result = wallet.redeem(&reward(500, available));

            if points >= 500 && available {
                assert!(result.is_ok());
                assert_eq!(wallet.points(), points - 500);
            } else {
                assert!(result.is_err());
                assert_eq!(wallet.points(), points);
            }
        }
    }
}

#[test]
fn test_unavailable_reward_is_reported_as_unavailable() {
    let rewards = mock_data::rewards();
    let premium = rewards.iter().find(|r| !r.available).unwrap();

    let mut wallet = RewardsWallet::new(10_000, 3);
    assert_matches!(wallet.redeem(premium), Err(RedeemError::Unavailable(name)) if name == premium.name);
}

#[test]
fn test_shortfall_is_exact() {
    let mut wallet = RewardsWallet::default();
    assert_eq!(wallet.points(), 1250);

    assert_matches!(
        wallet.redeem(&reward(2000, true)),
        Err(RedeemError::InsufficientPoints { shortfall: 750 })
    );
}

#[test]
fn test_redeeming_fixtures_in_order() {
    let mut wallet = RewardsWallet::default();
    let rewards = mock_data::rewards();

    assert!(wallet.redeem(&rewards[0]).is_ok());
    assert_eq!(wallet.points(), 750);
    assert!(wallet.redeem(&rewards[1]).is_ok());
    assert_eq!(wallet.points(), 0);
    assert!(wallet.redeem(&rewards[2]).is_err());
}
