/// End-to-end tests for the climate-tutor pipeline.
///
/// Tests the complete flow:
///   Config → Catalog → Search → Assistant → Explore session
use std::fs;
use std::sync::Arc;

use climate_tutor::assistant::gemini::GeminiProvider;
use climate_tutor::assistant::mock::MockProvider;
use climate_tutor::assistant::prompt::{FAILURE_MESSAGE, WELCOME_PREAMBLE};
use climate_tutor::assistant::{Assistant, ChatSession, Citation, ProviderError, Speaker};
use climate_tutor::catalog::{Catalog, Category};
use climate_tutor::config::Config;
use climate_tutor::navigation::TerminalNavigator;
use climate_tutor::repl::Explorer;
use climate_tutor::search::filter;
use tempfile::tempdir;

fn ids<'a>(sections: &[&'a climate_tutor::catalog::Section]) -> Vec<&'a str> {
    sections.iter().map(|s| s.id.as_str()).collect()
}

/// The worked examples: a point-text hit and a topic-word hit.
#[test]
fn test_search_scenarios_on_bundled_curriculum() {
    let catalog = Catalog::embedded().unwrap();
    let sections = catalog.sections();

    let ice = filter("جليد", sections);
    assert!(ids(&ice).contains(&"environmental"));
    assert!(!ids(&ice).contains(&"economic"));

    let env = filter("بيئة", sections);
    assert!(ids(&env).contains(&"environmental"));
    assert!(env.iter().all(|s| s.category == Category::Environmental
        || s.title.contains("بيئة")
        || s.intro.contains("بيئة")
        || s.points.iter().any(|p| p.text.contains("بيئة")
            || p.definition.as_deref().is_some_and(|d| d.contains("بيئة")))));
}

/// Any section whose title contains the query surfaces, in catalog order.
#[test]
fn test_title_queries_always_match() {
    let catalog = Catalog::embedded().unwrap();
    let sections = catalog.sections();

    for section in sections {
        let result = filter(&section.title, sections);
        assert!(
            ids(&result).contains(&section.id.as_str()),
            "title query should find {}",
            section.id
        );

        let positions: Vec<usize> = result
            .iter()
            .map(|r| sections.iter().position(|s| s.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "order must be preserved");
    }

    assert_eq!(filter("", sections).len(), catalog.len());
}

/// Config names an external catalog; it is loaded instead of the bundled one.
#[test]
fn test_config_points_to_external_catalog() {
    let temp_dir = tempdir().unwrap();
    let catalog_path = temp_dir.path().join("curriculum.json");
    fs::write(
        &catalog_path,
        r#"[
            {"id": "environmental", "category": "environmental", "title": "الأبعاد البيئية", "intro": "",
             "points": [{"text": "ذوبان الجليد", "definition": "..."}]},
            {"id": "economic", "category": "economic", "title": "الأبعاد الاقتصادية", "intro": "",
             "points": [{"text": "الأمن الغذائي"}]}
        ]"#,
    )
    .unwrap();

    let config_path = temp_dir.path().join("tutor.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"catalog_path": {}}}"#,
            serde_json::to_string(&catalog_path.to_string_lossy()).unwrap()
        ),
    )
    .unwrap();

    let config = Config::load(&config_path.to_string_lossy()).unwrap();
    config.validate().unwrap();
    let catalog = Catalog::load_or_embedded(config.catalog_path.as_deref()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(ids(&filter("جليد", catalog.sections())), vec!["environmental"]);
    assert_eq!(ids(&filter("اقتصاد", catalog.sections())), vec!["economic"]);
}

/// A real provider pointed at a closed port degrades to the failure message.
#[tokio::test]
async fn test_unreachable_provider_degrades() {
    let provider = GeminiProvider::new("http://127.0.0.1:9/v1beta", Some("test-key".into())).unwrap();
    let assistant = Assistant::new(Arc::new(provider), &Config::default().assistant);

    let reply = assistant.ask("أين تقع توفالو؟", &[]).await.unwrap();
    assert_eq!(reply.text, FAILURE_MESSAGE);
    assert!(reply.citations.is_none());
}

/// A provider without a key never crashes the session.
#[tokio::test]
async fn test_missing_key_session() {
    let provider = GeminiProvider::new("http://127.0.0.1:9/v1beta", None).unwrap();
    let session = ChatSession::new(Assistant::new(Arc::new(provider), &Config::default().assistant));

    let turn = session.submit("ما هي العدالة المناخية؟").await.unwrap();
    assert_eq!(turn.speaker, Speaker::Assistant);
    assert_eq!(turn.text, FAILURE_MESSAGE);
    assert_eq!(session.transcript().await.len(), 2);
}

/// Full explore session: search, open, complete activities, ask, link out.
#[tokio::test]
async fn test_explore_session() {
    let config = Config::default();
    let catalog = Catalog::embedded().unwrap();

    let mock = MockProvider::new()
        .with_grounded_reply(
            "تقع غرينلاند في أقصى الشمال.",
            vec![Citation {
                title: "غرينلاند".to_string(),
                uri: "https://maps.google.com/?cid=42".to_string(),
            }],
        )
        .with_failure(|| ProviderError::Transport("offline".into()));
    let mock = Arc::new(mock);
    let session = ChatSession::new(Assistant::new(mock.clone(), &config.assistant));

    let script = "\
search جليد
show environmental 2
done environmental individual
done environmental group
progress
ask أين تقع غرينلاند؟
ask وماذا عن القطب الجنوبي؟
web
share environmental
bogus
quit
search never reached
";

    let mut out = Vec::new();
    let mut explorer = Explorer::new(&catalog, &config, &session, TerminalNavigator::new(Vec::new()));
    explorer.run(script.as_bytes(), &mut out).await.unwrap();

    assert!(explorer.progress().is_complete("environmental"));
    let nav = String::from_utf8(explorer.into_navigator().into_inner()).unwrap();
    let out = String::from_utf8(out).unwrap();

    // search
    assert!(out.contains("نتائج البحث عن: \"جليد\""));
    // show, second point
    assert!(out.contains("▶ 2. ذوبان الجليد"));
    assert!(out.contains("غرينلاند [خطر حرج]"));
    // activities
    assert!(out.contains("1/6 مكتمل"));
    assert!(out.contains("أحسنت!"));
    // chat
    assert!(out.contains(&format!("المساعد: {WELCOME_PREAMBLE}")));
    assert!(out.contains("📍 غرينلاند <https://maps.google.com/?cid=42>"));
    assert!(out.contains(FAILURE_MESSAGE));
    assert!(out.contains("unknown command: bogus"));
    assert!(!out.contains("never reached"));

    // navigation went through the capability, not stdout
    assert!(nav.contains("→ #environmental"));
    assert!(nav.contains("🔗 https://www.google.com/search?q="));
    assert!(nav.contains("تم نسخ الرابط: #environmental"));

    // the request history for the second question carried the first exchange
    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].turns.len(), 3);
    assert_eq!(requests[1].turns[1].role, "model");

    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 4);
    assert!(transcript[1].citations.is_some());
    assert!(transcript[3].citations.is_none());
}
