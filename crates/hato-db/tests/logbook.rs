//! Bitácora integration tests.
//!
//! - Append + date-range query round trip, ordering, day filters
//! - Actor resolution from session/literal/anonymous contexts
//! - Reduced-column fallback against the first-generation table shape
//! - Migration idempotence across reopen of a file database

use tempfile::TempDir;

use hato_core::entities::NewLogEntry;
use hato_core::session::{ActorContext, Session};
use hato_core::tags::{actions, modules};
use hato_db::repos::bitacora::{InsertMode, LogQuery, RecordOutcome};
use hato_db::service::HerdService;

async fn test_service() -> HerdService {
    let session = Session::for_user("jdoe", Some("Jane Doe".into()), Some("Admin".into()));
    HerdService::new_local(":memory:", session).await.unwrap()
}

/// The clock's calendar day, not UTC's — the two differ near midnight.
fn today(svc: &HerdService) -> chrono::NaiveDate {
    svc.clock().now().at.date_naive()
}

// ---------------------------------------------------------------------------
// Append + query
// ---------------------------------------------------------------------------

#[tokio::test]
async fn record_then_query_today_round_trips() {
    let svc = test_service().await;

    let outcome = svc
        .record_action(
            NewLogEntry::new(modules::CALVES, actions::INSERT)
                .with_description("Registered calf 'MX-104'")
                .with_details("{\"dam\":\"MX-031\"}")
                .with_ear_tag("MX-104"),
            svc.session(),
        )
        .await;
    assert!(outcome.is_recorded());

    let day = today(&svc);
    let entries = svc.query_by_date_range(day, day).await.unwrap();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.actor, "jdoe");
    assert_eq!(entry.module, modules::CALVES);
    assert_eq!(entry.action, actions::INSERT);
    assert_eq!(entry.description.as_deref(), Some("Registered calf 'MX-104'"));
    assert_eq!(entry.details.as_deref(), Some("{\"dam\":\"MX-031\"}"));
    assert_eq!(entry.ear_tag.as_deref(), Some("MX-104"));
    assert_eq!(entry.occurred_at.date_naive(), day);
}

#[tokio::test]
async fn entries_come_back_most_recent_first() {
    let svc = test_service().await;

    let mut ids = Vec::new();
    for n in 0..3 {
        let outcome = svc
            .record_action(
                NewLogEntry::new(modules::SYSTEM, actions::INSERT)
                    .with_description(format!("entry {n}")),
                svc.session(),
            )
            .await;
        match outcome {
            RecordOutcome::Recorded { id, .. } => ids.push(id),
            RecordOutcome::Dropped => panic!("append should not drop"),
        }
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids grow monotonically");

    let day = today(&svc);
    let entries = svc.query_by_date_range(day, day).await.unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].description.as_deref(), Some("entry 2"));
    assert_eq!(entries[2].description.as_deref(), Some("entry 0"));
}

#[tokio::test]
async fn empty_day_yields_empty_vec() {
    let svc = test_service().await;
    let day = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let entries = svc.query_by_date_range(day, day).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn inverted_range_matches_nothing() {
    let svc = test_service().await;
    svc.record_action(
        NewLogEntry::new(modules::SYSTEM, actions::INSERT),
        svc.session(),
    )
    .await;

    let day = today(&svc);
    let entries = svc
        .query_by_date_range(day, day.pred_opt().unwrap())
        .await
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn long_details_are_stored_in_full() {
    let svc = test_service().await;
    let details = "x".repeat(200);

    svc.record_action(
        NewLogEntry::new(modules::ANIMALS, actions::UPDATE).with_details(details.clone()),
        svc.session(),
    )
    .await;

    let day = today(&svc);
    let entries = svc.query_by_date_range(day, day).await.unwrap();
    assert_eq!(entries[0].details.as_deref(), Some(details.as_str()));
}

#[tokio::test]
async fn query_log_filters_by_module_actor_and_tag() {
    let svc = test_service().await;

    svc.record_action(
        NewLogEntry::new(modules::ANIMALS, actions::INSERT).with_ear_tag("MX-001"),
        svc.session(),
    )
    .await;
    svc.record_action(
        NewLogEntry::new(modules::PENS, actions::INSERT),
        ActorContext::from("night shift"),
    )
    .await;

    let by_module = svc
        .query_log(&LogQuery {
            module: Some(modules::ANIMALS.into()),
            ..LogQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(by_module.len(), 1);
    assert_eq!(by_module[0].module, modules::ANIMALS);

    let by_actor = svc
        .query_log(&LogQuery {
            actor: Some("night shift".into()),
            ..LogQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(by_actor.len(), 1);
    assert_eq!(by_actor[0].module, modules::PENS);

    let by_tag = svc
        .query_log(&LogQuery {
            ear_tag: Some("MX-001".into()),
            ..LogQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(by_tag.len(), 1);

    let limited = svc
        .query_log(&LogQuery {
            limit: Some(1),
            ..LogQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
}

// ---------------------------------------------------------------------------
// Actor resolution as stored
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stored_actor_follows_resolution_chain() {
    let svc = test_service().await;

    let cases: Vec<(ActorContext, &str)> = vec![
        (
            ActorContext::from(Session::for_user(
                "jdoe",
                Some("Jane Doe".into()),
                Some("Admin".into()),
            )),
            "jdoe",
        ),
        (
            ActorContext::from(Session {
                login: None,
                display_name: Some("Jane Doe".into()),
                role: Some("Admin".into()),
            }),
            "Jane Doe",
        ),
        (
            ActorContext::from(Session {
                login: None,
                display_name: None,
                role: Some("Admin".into()),
            }),
            "Admin",
        ),
        (ActorContext::Anonymous, "Unknown"),
        (ActorContext::from("maintenance script"), "maintenance script"),
    ];

    for (n, (ctx, expected)) in cases.into_iter().enumerate() {
        svc.record_action(
            NewLogEntry::new(modules::SYSTEM, actions::INSERT).with_description(format!("case {n}")),
            ctx,
        )
        .await;
        let day = today(&svc);
        let entries = svc.query_by_date_range(day, day).await.unwrap();
        assert_eq!(entries[0].actor, expected, "case {n}");
        assert!(!entries[0].actor.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Degraded paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_module_or_action_is_dropped() {
    let svc = test_service().await;

    let no_module = svc
        .record_action(NewLogEntry::new("  ", actions::INSERT), svc.session())
        .await;
    assert_eq!(no_module, RecordOutcome::Dropped);

    let no_action = svc
        .record_action(NewLogEntry::new(modules::SYSTEM, ""), svc.session())
        .await;
    assert_eq!(no_action, RecordOutcome::Dropped);

    let day = today(&svc);
    assert!(svc.query_by_date_range(day, day).await.unwrap().is_empty());
}

#[tokio::test]
async fn narrow_legacy_table_takes_the_reduced_path() {
    let svc = test_service().await;

    // Recreate the table as a pre-widening install would have it.
    svc.db()
        .conn()
        .execute_batch(
            "DROP TABLE bitacora;
             CREATE TABLE bitacora (
                 id           INTEGER PRIMARY KEY AUTOINCREMENT,
                 occurred_at  TEXT NOT NULL,
                 actor        TEXT NOT NULL,
                 module       TEXT NOT NULL,
                 action       TEXT NOT NULL,
                 description  TEXT
             )",
        )
        .await
        .unwrap();

    let outcome = svc
        .record_action(
            NewLogEntry::new(modules::OWNERS, actions::DELETE)
                .with_description("Removed owner 'Paco'")
                .with_details("should be shed by the retry")
                .with_ear_tag("MX-900"),
            svc.session(),
        )
        .await;
    assert!(matches!(
        outcome,
        RecordOutcome::Recorded {
            mode: InsertMode::Reduced,
            ..
        }
    ));

    let mut rows = svc
        .db()
        .conn()
        .query("SELECT actor, module, action, description FROM bitacora", ())
        .await
        .unwrap();
    let row = rows.next().await.unwrap().expect("entry should have landed");
    assert_eq!(row.get::<String>(0).unwrap(), "jdoe");
    assert_eq!(row.get::<String>(1).unwrap(), modules::OWNERS);
    assert_eq!(row.get::<String>(2).unwrap(), actions::DELETE);
    assert_eq!(row.get::<String>(3).unwrap(), "Removed owner 'Paco'");
}

#[tokio::test]
async fn missing_table_drops_the_entry_without_error() {
    let svc = test_service().await;
    svc.db()
        .conn()
        .execute_batch("DROP TABLE bitacora")
        .await
        .unwrap();

    let outcome = svc
        .record_action(
            NewLogEntry::new(modules::SYSTEM, actions::INSERT),
            svc.session(),
        )
        .await;
    assert_eq!(outcome, RecordOutcome::Dropped);
}

// ---------------------------------------------------------------------------
// Migrations across reopen
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reopening_a_file_database_preserves_rows_and_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hato.db");
    let path_str = path.to_str().unwrap().to_string();

    {
        let svc = HerdService::new_local(&path_str, Session::anonymous()).await.unwrap();
        svc.record_action(
            NewLogEntry::new(modules::SYSTEM, actions::INSERT).with_description("first run"),
            svc.session(),
        )
        .await;
    }

    let svc = HerdService::new_local(&path_str, Session::anonymous()).await.unwrap();
    assert_eq!(svc.db().applied_versions().await.unwrap(), vec![1, 2]);

    let columns = bitacora_columns(&svc).await;
    svc.db().ensure_schema().await.unwrap();
    assert_eq!(bitacora_columns(&svc).await, columns, "schema unchanged");

    let day = today(&svc);
    let entries = svc.query_by_date_range(day, day).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].description.as_deref(), Some("first run"));
    assert_eq!(entries[0].actor, "Unknown");
}

async fn bitacora_columns(svc: &HerdService) -> Vec<String> {
    let mut rows = svc
        .db()
        .conn()
        .query("SELECT name FROM pragma_table_info('bitacora') ORDER BY cid", ())
        .await
        .unwrap();
    let mut columns = Vec::new();
    while let Some(row) = rows.next().await.unwrap() {
        columns.push(row.get::<String>(0).unwrap());
    }
    columns
}
