use anyhow::Result;
use schoolchat::ingest::{extract_qa_pairs, run_smart_import};
use schoolchat_test_utils::{MockChatProvider, TestSetup};

// The extraction system prompt is keyed by this fragment.
const EXTRACTION_KEY: &str = "คำถาม-คำตอบ";

#[tokio::test]
async fn valid_extraction_inserts_classified_entries() -> Result<()> {
    let setup = TestSetup::new().await?;
    let mock_ai = MockChatProvider::new();
    mock_ai.add_response(
        EXTRACTION_KEY,
        r#"```json
[
  { "question": "เข้าเรียนกี่โมง", "answer": "เข้าเรียนเวลา 08:00 น." },
  { "question": "ติดต่อโรงเรียนได้อย่างไร", "answer": "โทร 02-123-4567" }
]
```"#,
    );

    let inserted = run_smart_import(
        &setup.store,
        &mock_ai,
        "• เข้าเรียน 8 โมง\n• เบอร์โรงเรียน 02-123-4567",
    )
    .await?;

    assert_eq!(inserted.len(), 2);
    // Both entries were auto-classified on the way in.
    assert_eq!(inserted[0].category, "เวลาเรียน");
    assert!(inserted[0].keywords.contains("เวลา"));
    assert_eq!(inserted[1].category, "ติดต่อ");

    let stored = setup.store.list_all_knowledge().await?;
    assert_eq!(stored.len(), 2);
    Ok(())
}

#[tokio::test]
async fn invalid_json_yields_zero_extractions_not_an_error() -> Result<()> {
    let setup = TestSetup::new().await?;
    let mock_ai = MockChatProvider::new();
    mock_ai.add_response(EXTRACTION_KEY, "ขออภัย ไม่สามารถแปลงข้อมูลได้");

    let inserted = run_smart_import(&setup.store, &mock_ai, "ข้อมูลบางอย่าง").await?;
    assert!(inserted.is_empty());
    assert!(setup.store.list_all_knowledge().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn non_array_json_is_treated_as_empty() -> Result<()> {
    let mock_ai = MockChatProvider::new();
    mock_ai.add_response(EXTRACTION_KEY, r#"{ "question": "q", "answer": "a" }"#);

    let pairs = extract_qa_pairs(&mock_ai, "ข้อมูล").await?;
    assert!(pairs.is_empty());
    Ok(())
}

#[tokio::test]
async fn pairs_with_blank_fields_are_filtered() -> Result<()> {
    let mock_ai = MockChatProvider::new();
    mock_ai.add_response(
        EXTRACTION_KEY,
        r#"[
  { "question": "คำถามดี", "answer": "คำตอบดี" },
  { "question": "", "answer": "ไม่มีคำถาม" },
  { "question": "ไม่มีคำตอบ", "answer": "   " }
]"#,
    );

    let pairs = extract_qa_pairs(&mock_ai, "ข้อมูล").await?;
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].question, "คำถามดี");
    Ok(())
}

#[tokio::test]
async fn extraction_sends_the_source_text_to_the_model() -> Result<()> {
    let mock_ai = MockChatProvider::new();
    mock_ai.add_response(EXTRACTION_KEY, "[]");

    extract_qa_pairs(&mock_ai, "ระเบียบการแต่งกาย").await?;

    let calls = mock_ai.get_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].1.contains("ระเบียบการแต่งกาย"));
    // Extraction asks for the wide completion cap, not the chat one: a
    // truncated JSON array would parse as zero pairs.
    assert_eq!(calls[0].2, 2048);
    Ok(())
}
