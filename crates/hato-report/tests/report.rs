//! Report generation integration tests.

use chrono::NaiveDate;
use tempfile::TempDir;

use hato_core::entities::NewLogEntry;
use hato_core::session::Session;
use hato_core::tags::{actions, modules};
use hato_db::repos::bitacora::LogQuery;
use hato_db::service::HerdService;
use hato_report::{ReportError, ReportOptions, generate_report};

async fn test_service() -> HerdService {
    let session = Session::for_user("jdoe", Some("Jane Doe".into()), Some("Admin".into()));
    HerdService::new_local(":memory:", session).await.unwrap()
}

/// Calendar day of the service clock, so assertions hold regardless of
/// the host clock's own zone.
fn today(svc: &HerdService) -> NaiveDate {
    svc.clock().now().at.date_naive()
}

async fn seed_entries(svc: &HerdService, count: usize) {
    for i in 0..count {
        let outcome = svc
            .record_action(
                NewLogEntry::new(modules::ANIMALS, actions::INSERT)
                    .with_description(format!("Seed entry {i}"))
                    .with_ear_tag(format!("MX-{i:03}")),
                svc.session(),
            )
            .await;
        assert!(outcome.is_recorded());
    }
}

fn data_rows(text: &str) -> usize {
    // Data rows are the only lines that begin with the year digits.
    text.lines().filter(|line| line.starts_with("202")).count()
}

#[tokio::test]
async fn inverted_range_fails_and_writes_nothing() {
    let svc = test_service().await;
    seed_entries(&svc, 1).await;
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("report.txt");

    let day = today(&svc);
    let err = generate_report(
        &svc,
        day,
        day.pred_opt().unwrap(),
        &destination,
        &ReportOptions::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ReportError::InvalidRange { .. }));
    assert!(!destination.exists());
}

#[tokio::test]
async fn empty_period_generates_no_file() {
    let svc = test_service().await;
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("report.txt");
    let day = today(&svc);

    let err = generate_report(&svc, day, day, &destination, &ReportOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::NoRecords { .. }));
    assert!(!destination.exists());
}

#[tokio::test]
async fn report_renders_one_row_per_record_without_aretes() {
    let svc = test_service().await;
    seed_entries(&svc, 3).await;
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("report.txt");
    let day = today(&svc);

    let summary = generate_report(&svc, day, day, &destination, &ReportOptions::default())
        .await
        .unwrap();
    assert_eq!(summary.records, 3);
    assert_eq!(summary.pages, 1);
    assert_eq!(summary.generated_by, "jdoe");
    assert_eq!(summary.path, destination);

    let text = std::fs::read_to_string(&destination).unwrap();
    assert_eq!(data_rows(&text), 3);
    assert_eq!(text.matches("Fecha").count(), 1);
    assert!(text.contains("Registros:    3"));
    assert!(text.contains("Generado por: jdoe"));
    // The arete column stays out of the rendered body.
    assert!(!text.contains("MX-000"));
}

#[tokio::test]
async fn long_descriptions_are_previewed() {
    let svc = test_service().await;
    let long = "x".repeat(200);
    svc.record_action(
        NewLogEntry::new(modules::ANIMALS, actions::UPDATE).with_description(long.clone()),
        svc.session(),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("report.txt");
    let day = today(&svc);
    generate_report(&svc, day, day, &destination, &ReportOptions::default())
        .await
        .unwrap();

    let text = std::fs::read_to_string(&destination).unwrap();
    assert!(text.contains('…'));
    assert!(!text.contains(&long));
    assert!(text.contains(&"x".repeat(79)));
}

#[tokio::test]
async fn details_fill_in_for_missing_descriptions() {
    let svc = test_service().await;
    svc.record_action(
        NewLogEntry::new(modules::PENS, actions::DELETE).with_details("{\"pen\":\"Norte\"}"),
        svc.session(),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("report.txt");
    let day = today(&svc);
    generate_report(&svc, day, day, &destination, &ReportOptions::default())
        .await
        .unwrap();

    let text = std::fs::read_to_string(&destination).unwrap();
    assert!(text.contains("{\"pen\":\"Norte\"}"));
}

#[tokio::test]
async fn long_details_preview_but_stay_whole_in_the_store() {
    let svc = test_service().await;
    let details = "d".repeat(200);
    svc.record_action(
        NewLogEntry::new(modules::CALVES, actions::INSERT).with_details(details.clone()),
        svc.session(),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("report.txt");
    let day = today(&svc);
    generate_report(&svc, day, day, &destination, &ReportOptions::default())
        .await
        .unwrap();

    let text = std::fs::read_to_string(&destination).unwrap();
    assert!(text.contains(&format!("{}…", "d".repeat(79))));
    assert!(!text.contains(&details));

    let stored = svc.query_by_date_range(day, day).await.unwrap();
    assert_eq!(stored[0].details.as_deref(), Some(details.as_str()));
}

#[tokio::test]
async fn generation_is_itself_logged() {
    let svc = test_service().await;
    seed_entries(&svc, 1).await;
    let dir = TempDir::new().unwrap();
    let day = today(&svc);

    generate_report(
        &svc,
        day,
        day,
        &dir.path().join("report.txt"),
        &ReportOptions::default(),
    )
    .await
    .unwrap();

    let audit = svc
        .query_log(&LogQuery {
            module: Some(modules::BITACORA.into()),
            ..LogQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].action, actions::GENERATE_REPORT);
    assert_eq!(audit[0].actor, "jdoe");
}

#[tokio::test]
async fn pages_split_and_are_numbered() {
    let svc = test_service().await;
    seed_entries(&svc, 5).await;
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("report.txt");
    let day = today(&svc);

    let options = ReportOptions {
        rows_per_page: 2,
        ..ReportOptions::default()
    };
    let summary = generate_report(&svc, day, day, &destination, &options)
        .await
        .unwrap();
    assert_eq!(summary.pages, 3);

    let text = std::fs::read_to_string(&destination).unwrap();
    assert_eq!(text.matches('\u{c}').count(), 2);
    assert_eq!(text.matches("Fecha").count(), 3);
    assert!(text.contains("Página 1 de 3"));
    assert!(text.contains("Página 3 de 3"));
    assert_eq!(data_rows(&text), 5);
}

#[tokio::test]
async fn directory_destination_uses_the_default_name() {
    let svc = test_service().await;
    seed_entries(&svc, 1).await;
    let dir = TempDir::new().unwrap();
    let day = today(&svc);

    let summary = generate_report(&svc, day, day, dir.path(), &ReportOptions::default())
        .await
        .unwrap();

    let expected = dir.path().join(format!("Bitacora_{day}_a_{day}.txt"));
    assert_eq!(summary.path, expected);
    let metadata = std::fs::metadata(&expected).unwrap();
    assert!(metadata.len() > 0);
}
