use anyhow::Result;
use chrono::NaiveDate;
use schoolchat::chat::generate_reply;
use schoolchat::fallback::fallback_response;
use schoolchat_test_utils::{MockChatProvider, TestSetup};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

#[tokio::test]
async fn announcement_keywords_list_recent_announcements() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup
        .store
        .initialize_with_data(
            "INSERT INTO announcements (title, content, created_at) VALUES
             ('หยุดเรียนกรณีพิเศษ', 'โรงเรียนหยุดวันศุกร์นี้', '2025-01-03T08:00:00Z');
             INSERT INTO announcements (title, content, created_at) VALUES
             ('รับสมัครชุมนุม', 'เปิดรับสมัครชุมนุมใหม่', '2025-01-04T08:00:00Z')",
        )
        .await?;

    let response = fallback_response(&setup.store, "มีประกาศอะไรบ้าง", today()).await;
    assert!(response.contains("📢 ประกาศล่าสุด"));
    assert!(response.contains("หยุดเรียนกรณีพิเศษ"));
    assert!(response.contains("รับสมัครชุมนุม"));
    Ok(())
}

#[tokio::test]
async fn event_branch_lists_only_upcoming_events() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup
        .store
        .initialize_with_data(
            "INSERT INTO events (title, description, event_date) VALUES
             ('กีฬาสีปีที่แล้ว', 'จบไปแล้ว', '2024-12-01');
             INSERT INTO events (title, description, event_date) VALUES
             ('วันวิชาการ', 'นิทรรศการผลงานนักเรียน', '2025-02-14')",
        )
        .await?;

    let response = fallback_response(&setup.store, "มีกิจกรรมอะไรบ้าง", today()).await;
    assert!(response.contains("วันวิชาการ"));
    assert!(!response.contains("กีฬาสีปีที่แล้ว"));
    Ok(())
}

#[tokio::test]
async fn event_branch_picks_the_three_nearest_upcoming_events() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup
        .store
        .initialize_with_data(
            "INSERT INTO events (title, description, event_date) VALUES
             ('ปัจฉิมนิเทศ', 'ปลายปีการศึกษา', '2025-12-01');
             INSERT INTO events (title, description, event_date) VALUES
             ('วันวิชาการ', 'นิทรรศการ', '2025-02-14');
             INSERT INTO events (title, description, event_date) VALUES
             ('กีฬาสี', 'สนามกีฬา', '2025-06-20');
             INSERT INTO events (title, description, event_date) VALUES
             ('ตรุษจีน', 'กิจกรรมหน้าเสาธง', '2025-01-29')",
        )
        .await?;

    let response = fallback_response(&setup.store, "มีกิจกรรมอะไรบ้าง", today()).await;

    // The three soonest from 2025-01-06; the furthest-out event is dropped.
    assert!(response.contains("ตรุษจีน"));
    assert!(response.contains("วันวิชาการ"));
    assert!(response.contains("กีฬาสี"));
    assert!(!response.contains("ปัจฉิมนิเทศ"));
    // Listed soonest first.
    let chinese_new_year = response.find("ตรุษจีน").unwrap();
    let academic_day = response.find("วันวิชาการ").unwrap();
    let sports_day = response.find("กีฬาสี").unwrap();
    assert!(chinese_new_year < academic_day && academic_day < sports_day);
    Ok(())
}

#[tokio::test]
async fn empty_sources_use_the_fixed_messages() -> Result<()> {
    let setup = TestSetup::new().await?;
    let response = fallback_response(&setup.store, "ประกาศล่าสุด", today()).await;
    assert_eq!(response, "ยังไม่มีประกาศใหม่ในขณะนี้ครับ");

    let response = fallback_response(&setup.store, "ตารางสอบ", today()).await;
    assert_eq!(response, "ยังไม่พบตารางในระบบครับ");
    Ok(())
}

#[tokio::test]
async fn unmatched_messages_fall_through_to_knowledge_search() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup
        .store
        .insert_knowledge(
            "ห้องสมุดเปิดกี่โมง",
            "เปิด 07:30 ถึง 17:00 น.",
            "ห้องสมุด",
            "สถานที่",
        )
        .await?;

    let response = fallback_response(&setup.store, "ห้องสมุด", today()).await;
    assert_eq!(response, "เปิด 07:30 ถึง 17:00 น.");
    Ok(())
}

#[tokio::test]
async fn everything_else_gets_the_greeting() -> Result<()> {
    let setup = TestSetup::new().await?;
    let response = fallback_response(&setup.store, "xyz", today()).await;
    assert!(response.contains("ผู้ช่วย AI ของโรงเรียน"));
    Ok(())
}

#[tokio::test]
async fn failed_llm_call_still_yields_a_non_empty_reply() -> Result<()> {
    let setup = TestSetup::new().await?;
    let mock_ai = MockChatProvider::new();
    mock_ai.fail_with("upstream 500");

    let reply = generate_reply(
        &setup.store,
        Some(&mock_ai),
        "สวัสดีครับ",
        &[],
        None,
        today(),
    )
    .await;

    assert!(!reply.trim().is_empty());
    let calls = mock_ai.get_calls();
    assert_eq!(calls.len(), 1);
    // Conversational replies use the narrower completion cap.
    assert_eq!(calls[0].2, 1024);
    Ok(())
}

#[tokio::test]
async fn unconfigured_provider_routes_straight_to_fallback() -> Result<()> {
    let setup = TestSetup::new().await?;
    let reply = generate_reply(&setup.store, None, "สวัสดีครับ", &[], None, today()).await;
    assert!(reply.contains("ผู้ช่วย AI ของโรงเรียน"));
    Ok(())
}
