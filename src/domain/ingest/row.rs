use crate::constants::{
    VALID_EMPLOYMENT_TYPES, VALID_EXPERIENCE_LEVELS, VALID_JOB_LEVELS, VALID_JOB_STATUSES,
};
use crate::entities::alumni::ValidatedAlumni;
use crate::entities::event::ValidatedEvent;
use crate::entities::job::{ValidatedJob, DEFAULT_JOB_STATUS};

use super::cell::{CellValue, ImportRow};
use super::dates::{parse_date_lenient, parse_date_strict};
use super::fields::{validate_email, validate_graduation_year, validate_phone};
use super::normalize::normalize_value;

const ALUMNI_REQUIRED: &[&str] =
    &["name", "graduationYear", "degree", "email", "jobStatus", "phoneNo"];
const JOB_REQUIRED: &[&str] =
    &["title", "company", "location", "employment_type", "experience_level"];
const EVENT_REQUIRED: &[&str] = &["title", "location", "type", "status"];

/// Columns an event sheet must carry; checked once against the first row
/// before any per-row validation happens.
pub const EVENT_COLUMNS: &[&str] = &["title", "date", "location", "type", "status"];

fn raw(row: &ImportRow, column: &str) -> String {
    row.get(column).map(CellValue::to_display).unwrap_or_default()
}

/// Validate one alumni row. Stops at the first failing check; the message
/// names the offending raw value and the row's `name` for the uploader.
///
/// The `company`/`jobLevel` pair is conditional: no company means the level
/// is forced to `n/a` (and company to an empty string); with a company, a
/// supplied level must normalize, and an omitted one defaults to `n/a`.
pub fn validate_alumni_row(row: &ImportRow) -> Result<ValidatedAlumni, String> {
    if !ALUMNI_REQUIRED.iter().all(|field| row.has_column(field)) {
        return Err(format!(
            "Missing required fields in alumni entry: {}",
            row.dump()
        ));
    }

    let name = row.text_or_empty("name");

    let graduation_year = validate_graduation_year(row.get("graduationYear").unwrap_or(&CellValue::Empty))
        .ok_or_else(|| {
            format!(
                "Invalid graduation year \"{}\" for alumni: {}",
                raw(row, "graduationYear"),
                name
            )
        })?;

    let email = validate_email(row.get("email").unwrap_or(&CellValue::Empty)).ok_or_else(|| {
        format!("Invalid email \"{}\" for alumni: {}", raw(row, "email"), name)
    })?;

    let phone_no = validate_phone(row.get("phoneNo").unwrap_or(&CellValue::Empty)).ok_or_else(|| {
        format!(
            "Invalid phone number \"{}\" for alumni: {}",
            raw(row, "phoneNo"),
            name
        )
    })?;

    let job_status = normalize_value(row.get("jobStatus"), VALID_JOB_STATUSES).ok_or_else(|| {
        format!(
            "Invalid job status \"{}\" for alumni: {}",
            raw(row, "jobStatus"),
            name
        )
    })?;

    let (company, job_level) = if row.is_truthy("company") {
        let level = normalize_value(row.get("jobLevel"), VALID_JOB_LEVELS);
        if row.is_truthy("jobLevel") && level.is_none() {
            return Err(format!(
                "Invalid job level \"{}\" for alumni: {}",
                raw(row, "jobLevel"),
                name
            ));
        }
        (row.text_or_empty("company"), level.unwrap_or("n/a"))
    } else {
        (String::new(), "n/a")
    };

    Ok(ValidatedAlumni {
        name,
        graduation_year,
        degree: row.text_or_empty("degree"),
        email,
        job_status: job_status.to_string(),
        company,
        job_level: job_level.to_string(),
        phone_no,
    })
}

/// Validate one job row. Deadline is optional but, when present, goes
/// through the strict date policy and rejects the row on failure.
pub fn validate_job_row(row: &ImportRow) -> Result<ValidatedJob, String> {
    if !JOB_REQUIRED.iter().all(|field| row.is_truthy(field)) {
        return Err(format!("Missing required fields in job entry: {}", row.dump()));
    }

    let title = row.text_or_empty("title");

    let employment_type =
        normalize_value(row.get("employment_type"), VALID_EMPLOYMENT_TYPES).ok_or_else(|| {
            format!(
                "Invalid employment type \"{}\" in job: {}",
                raw(row, "employment_type"),
                title
            )
        })?;

    let experience_level =
        normalize_value(row.get("experience_level"), VALID_EXPERIENCE_LEVELS).ok_or_else(|| {
            format!(
                "Invalid experience level \"{}\" in job: {}",
                raw(row, "experience_level"),
                title
            )
        })?;

    let application_deadline = if row.is_truthy("application_deadline") {
        let cell = row.get("application_deadline").unwrap_or(&CellValue::Empty);
        Some(parse_date_strict(cell).ok_or_else(|| {
            format!(
                "Invalid date format for application_deadline in job: {}",
                title
            )
        })?)
    } else {
        None
    };

    let salary = row.get("salary").and_then(|cell| match cell {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        CellValue::Empty => None,
    });

    let status = if row.is_truthy("status") {
        row.text_or_empty("status")
    } else {
        DEFAULT_JOB_STATUS.to_string()
    };

    Ok(ValidatedJob {
        title,
        company: row.text_or_empty("company"),
        location: row.text_or_empty("location"),
        description: row.text_or_empty("description"),
        salary,
        employment_type: employment_type.to_string(),
        experience_level: experience_level.to_string(),
        application_deadline,
        status,
    })
}

/// Validate one event row. The date goes through the lenient policy and
/// therefore never rejects; an unreadable or absent date becomes today
/// (with a warning in the logs).
pub fn validate_event_row(row: &ImportRow) -> Result<ValidatedEvent, String> {
    if !EVENT_REQUIRED.iter().all(|field| row.is_truthy(field)) {
        return Err(format!(
            "Missing required fields in event entry: {}",
            row.dump()
        ));
    }

    let date = parse_date_lenient(row.get("date").unwrap_or(&CellValue::Empty));

    Ok(ValidatedEvent {
        title: row.text_or_empty("title"),
        date,
        location: row.text_or_empty("location"),
        event_type: row.text_or_empty("type"),
        status: row.text_or_empty("status"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn alumni_row() -> ImportRow {
        let mut row = ImportRow::new();
        row.insert("name", CellValue::Text("Ada Lovelace".into()));
        row.insert("graduationYear", CellValue::Number(2018.0));
        row.insert("degree", CellValue::Text("BSc Mathematics".into()));
        row.insert("email", CellValue::Text("Ada@Example.com".into()));
        row.insert("jobStatus", CellValue::Text("Employed".into()));
        row.insert("phoneNo", CellValue::Text("555-010-2030".into()));
        row.insert("company", CellValue::Text("Analytical Engines".into()));
        row.insert("jobLevel", CellValue::Text("Senior".into()));
        row
    }

    #[test]
    fn valid_alumni_row_is_fully_canonicalized() {
        let validated = validate_alumni_row(&alumni_row()).unwrap();

        assert_eq!(validated.email, "ada@example.com");
        assert_eq!(validated.job_status, "employed");
        assert_eq!(validated.job_level, "senior");
        assert_eq!(validated.phone_no, "555-010-2030");
        assert_eq!(validated.graduation_year, 2018);
    }

    #[test]
    fn alumni_without_company_gets_na_level() {
        let mut row = alumni_row();
        row.insert("company", CellValue::Empty);
        row.insert("jobLevel", CellValue::Empty);

        let validated = validate_alumni_row(&row).unwrap();
        assert_eq!(validated.company, "");
        assert_eq!(validated.job_level, "n/a");
    }

    #[test]
    fn alumni_with_company_but_blank_level_defaults_to_na() {
        let mut row = alumni_row();
        row.insert("jobLevel", CellValue::Text("".into()));

        let validated = validate_alumni_row(&row).unwrap();
        assert_eq!(validated.job_level, "n/a");
    }

    #[test]
    fn alumni_with_company_and_bad_level_is_rejected() {
        let mut row = alumni_row();
        row.insert("jobLevel", CellValue::Text("supreme overlord".into()));

        let err = validate_alumni_row(&row).unwrap_err();
        assert!(err.contains("Invalid job level"));
        assert!(err.contains("Ada Lovelace"));
    }

    #[test]
    fn alumni_error_names_the_bad_value_and_the_row() {
        let mut row = alumni_row();
        row.insert("email", CellValue::Text("not-an-email".into()));

        let err = validate_alumni_row(&row).unwrap_err();
        assert_eq!(err, "Invalid email \"not-an-email\" for alumni: Ada Lovelace");
    }

    #[test]
    fn alumni_missing_required_column_dumps_the_row() {
        let mut row = ImportRow::new();
        row.insert("name", CellValue::Text("Ghost".into()));

        let err = validate_alumni_row(&row).unwrap_err();
        assert!(err.starts_with("Missing required fields in alumni entry:"));
        assert!(err.contains("Ghost"));
    }

    fn job_row() -> ImportRow {
        let mut row = ImportRow::new();
        row.insert("title", CellValue::Text("Backend Engineer".into()));
        row.insert("company", CellValue::Text("Initech".into()));
        row.insert("location", CellValue::Text("Remote".into()));
        row.insert("employment_type", CellValue::Text("Full Time".into()));
        row.insert("experience_level", CellValue::Text("Mid_Level".into()));
        row
    }

    #[test]
    fn job_categoricals_are_normalized() {
        let validated = validate_job_row(&job_row()).unwrap();
        assert_eq!(validated.employment_type, "full-time");
        assert_eq!(validated.experience_level, "mid-level");
        assert_eq!(validated.status, "Active");
        assert_eq!(validated.description, "");
        assert_eq!(validated.salary, None);
        assert_eq!(validated.application_deadline, None);
    }

    #[test]
    fn job_deadline_uses_the_strict_policy() {
        let mut row = job_row();
        row.insert("application_deadline", CellValue::Text("whenever".into()));
        let err = validate_job_row(&row).unwrap_err();
        assert_eq!(
            err,
            "Invalid date format for application_deadline in job: Backend Engineer"
        );

        let mut row = job_row();
        row.insert("application_deadline", CellValue::Number(45000.0));
        let validated = validate_job_row(&row).unwrap();
        assert_eq!(
            validated.application_deadline,
            Some(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap())
        );
    }

    #[test]
    fn job_blank_required_field_is_missing() {
        let mut row = job_row();
        row.insert("location", CellValue::Text("".into()));
        let err = validate_job_row(&row).unwrap_err();
        assert!(err.starts_with("Missing required fields in job entry:"));
    }

    fn event_row() -> ImportRow {
        let mut row = ImportRow::new();
        row.insert("title", CellValue::Text("Homecoming".into()));
        row.insert("date", CellValue::Number(44927.0));
        row.insert("location", CellValue::Text("Main Hall".into()));
        row.insert("type", CellValue::Text("Reunion".into()));
        row.insert("status", CellValue::Text("Scheduled".into()));
        row
    }

    #[test]
    fn event_serial_date_decodes_against_the_epoch() {
        let validated = validate_event_row(&event_row()).unwrap();
        assert_eq!(validated.date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(validated.event_type, "Reunion");
    }

    #[test]
    fn event_unparseable_date_falls_back_instead_of_rejecting() {
        let mut row = event_row();
        row.insert("date", CellValue::Text("sometime in spring".into()));

        let validated = validate_event_row(&row).unwrap();
        assert_eq!(validated.date, chrono::Utc::now().date_naive());
    }

    #[test]
    fn event_missing_title_is_rejected() {
        let mut row = event_row();
        row.insert("title", CellValue::Empty);
        assert!(validate_event_row(&row).is_err());
    }
}
