use chrono::NaiveDate;
use uuid::Uuid;

use alumni_portal_backend::entities::event::ValidatedEvent;
use alumni_portal_backend::errors::AppError;
use alumni_portal_backend::ingest::cell::{CellValue, ImportRow};
use alumni_portal_backend::repositories::alumni::MockAlumniRepository;
use alumni_portal_backend::repositories::event::MockEventRepository;
use alumni_portal_backend::repositories::job::MockJobRepository;
use alumni_portal_backend::use_cases::alumni::AlumniHandler;
use alumni_portal_backend::use_cases::events::EventHandler;
use alumni_portal_backend::use_cases::jobs::JobHandler;

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn alumni_row(name: &str, email: &str) -> ImportRow {
    let mut row = ImportRow::new();
    row.insert("name", text(name));
    row.insert("graduationYear", CellValue::Number(2015.0));
    row.insert("degree", text("BSc Computer Science"));
    row.insert("email", text(email));
    row.insert("jobStatus", text("Employed"));
    row.insert("phoneNo", text("555-010-2030"));
    row.insert("company", text("Initech"));
    row.insert("jobLevel", text("Senior"));
    row
}

fn job_row(title: &str) -> ImportRow {
    let mut row = ImportRow::new();
    row.insert("title", text(title));
    row.insert("company", text("Initech"));
    row.insert("location", text("Remote"));
    row.insert("employment_type", text("Full Time"));
    row.insert("experience_level", text("Senior"));
    row
}

fn event_row(title: &str, date: CellValue) -> ImportRow {
    let mut row = ImportRow::new();
    row.insert("title", text(title));
    row.insert("date", date);
    row.insert("location", text("Main Hall"));
    row.insert("type", text("Reunion"));
    row.insert("status", text("Scheduled"));
    row
}

#[actix_rt::test]
async fn one_bad_row_blocks_the_whole_alumni_batch() {
    let mut repo = MockAlumniRepository::new();
    repo.expect_insert().times(0);

    let handler = AlumniHandler::new(repo);
    let rows = vec![
        alumni_row("Alice", "alice@example.com"),
        alumni_row("Bob", "not-an-email"),
        alumni_row("Carol", "carol@example.com"),
    ];

    let err = handler.import(rows).await.unwrap_err();
    match err {
        AppError::InvalidBatch(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0], "Invalid email \"not-an-email\" for alumni: Bob");
        }
        other => panic!("expected InvalidBatch, got {:?}", other),
    }
}

#[actix_rt::test]
async fn clean_job_batch_is_inserted_with_canonical_categories() {
    let mut repo = MockJobRepository::new();
    repo.expect_insert()
        .withf(|record| record.employment_type == "full-time" && record.experience_level == "senior")
        .times(3)
        .returning(|_| Ok(Uuid::new_v4()));

    let handler = JobHandler::new(repo);
    let rows = vec![job_row("Backend"), job_row("Frontend"), job_row("Data")];

    let count = handler.import(rows).await.unwrap();
    assert_eq!(count, 3);
}

#[actix_rt::test]
async fn event_serial_dates_are_decoded_before_persistence() {
    let mut repo = MockEventRepository::new();
    repo.expect_insert()
        .withf(|record: &ValidatedEvent| {
            record.date == NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        })
        .times(1)
        .returning(|_| Ok(Uuid::new_v4()));

    let handler = EventHandler::new(repo);
    let rows = vec![event_row("Homecoming", CellValue::Number(44927.0))];

    assert_eq!(handler.import(rows).await.unwrap(), 1);
}

#[actix_rt::test]
async fn alumni_without_company_is_accepted_with_na_level() {
    let mut repo = MockAlumniRepository::new();
    repo.expect_insert()
        .withf(|record| record.company.is_empty() && record.job_level == "n/a")
        .times(1)
        .returning(|_| Ok(Uuid::new_v4()));

    let handler = AlumniHandler::new(repo);
    let mut row = alumni_row("Dana", "dana@example.com");
    row.insert("company", CellValue::Empty);
    row.insert("jobLevel", CellValue::Empty);

    assert_eq!(handler.import(vec![row]).await.unwrap(), 1);
}

#[actix_rt::test]
async fn event_sheet_missing_columns_fails_before_row_validation() {
    let mut repo = MockEventRepository::new();
    repo.expect_insert().times(0);

    let handler = EventHandler::new(repo);
    let mut row = ImportRow::new();
    row.insert("title", text("Orphan"));

    let err = handler.import(vec![row]).await.unwrap_err();
    match err {
        AppError::InvalidInput(msg) => {
            assert!(msg.contains("missing columns"));
            assert!(msg.contains("date"));
            assert!(msg.contains("status"));
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[actix_rt::test]
async fn empty_event_sheet_reports_every_column_missing() {
    let mut repo = MockEventRepository::new();
    repo.expect_insert().times(0);

    let handler = EventHandler::new(repo);
    let err = handler.import(Vec::new()).await.unwrap_err();
    match err {
        AppError::InvalidInput(msg) => {
            assert!(msg.contains("title, date, location, type, status"));
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[actix_rt::test]
async fn insert_failure_after_validation_surfaces_as_bulk_error() {
    let mut repo = MockAlumniRepository::new();
    repo.expect_insert()
        .returning(|_| Err(AppError::InternalError("connection reset".to_string())));

    let handler = AlumniHandler::new(repo);
    let rows = vec![alumni_row("Alice", "alice@example.com")];

    let err = handler.import(rows).await.unwrap_err();
    match err {
        AppError::BulkInsert { message, error } => {
            assert_eq!(message, "Error inserting alumni records");
            assert!(error.contains("connection reset"));
        }
        other => panic!("expected BulkInsert, got {:?}", other),
    }
}

#[actix_rt::test]
async fn json_create_shares_the_pipeline_validators() {
    let mut repo = MockAlumniRepository::new();
    repo.expect_insert().times(0);

    let handler = AlumniHandler::new(repo);
    let body = alumni_row("Eve", "broken@@example.com");

    let err = handler.create(body).await.unwrap_err();
    match err {
        AppError::InvalidInput(msg) => assert!(msg.contains("Invalid email")),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}
