use arogya_sarthi::mock_data;
use arogya_sarthi::ui::screens::CommunityFeed;
use pretty_assertions::assert_eq;
use test_log::test;

fn fixture_feed() -> CommunityFeed {
    CommunityFeed::new(mock_data::community_posts())
}

#[test]
fn test_whitespace_post_adds_nothing() {
    let mut feed = fixture_feed();
    let before = feed.posts().to_vec();

    for content in ["", " ", "\t\n  "] {
        assert_eq!(feed.submit_post(content, "Healthcare"), None);
    }
    assert_eq!(feed.posts(), before.as_slice());
}

#[test]
fn test_post_grows_feed_by_one_and_goes_first() {
    let mut feed = fixture_feed();
    let before = feed.len();

    let id = feed.submit_post("Where can I get a free eye test in Kochi?", "Healthcare");

    assert_eq!(feed.len(), before + 1);
    assert_eq!(id, Some(before as u32 + 1));
    let first = &feed.posts()[0];
    assert_eq!(first.author, "You");
    assert_eq!(first.state, "Kerala");
    assert_eq!(first.likes, 0);
    assert_eq!(first.replies, 0);
    assert_eq!(first.time_ago, "Just now");
    assert_eq!(first.category, "Healthcare");
}

#[test]
fn test_like_changes_only_matching_post() {
    let mut feed = fixture_feed();
    let before: Vec<(u32, u32)> = feed.posts().iter().map(|p| (p.id, p.likes)).collect();

    assert!(feed.like(2));

    for (post, (id, likes)) in feed.posts().iter().zip(before) {
        let expected = if id == 2 { likes + 1 } else { likes };
        assert_eq!(post.likes, expected, "post {}", id);
    }
}

#[test]
fn test_like_unknown_post() {
    let mut feed = fixture_feed();
    assert!(!feed.like(999));
}
