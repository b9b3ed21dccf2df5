use finsight::domain::{
    AnalysisRequest, Job, JobId, JobStatus, JobTransitionError, ValidationError,
};

fn running_job() -> Job {
    Job::new(AnalysisRequest::new("Apple", Some("Technology")).unwrap())
}

#[test]
fn given_blank_company_input_when_building_request_then_returns_validation_error() {
    for input in ["", "   ", "\t\n"] {
        assert_eq!(
            AnalysisRequest::new(input, Some("Tech")),
            Err(ValidationError::EmptyCompanyInput)
        );
    }
}

#[test]
fn given_padded_fields_when_building_request_then_trims_and_drops_blank_sector() {
    let request = AnalysisRequest::new("  MSFT ", Some("   ")).unwrap();

    assert_eq!(request.company_input(), "MSFT");
    assert_eq!(request.sector(), None);

    let request = AnalysisRequest::new("TSLA", Some(" Automotive ")).unwrap();
    assert_eq!(request.sector(), Some("Automotive"));
}

#[test]
fn given_new_job_when_created_then_running_without_outcome() {
    let job = running_job();

    assert_eq!(job.status(), JobStatus::Running);
    assert_eq!(job.company_input(), "Apple");
    assert_eq!(job.sector(), Some("Technology"));
    assert!(job.result().is_none());
    assert!(job.error().is_none());
    assert!(job.finished_at().is_none());
}

#[test]
fn given_running_job_when_completed_then_only_result_is_set() {
    let mut job = running_job();

    job.complete("Buy.".to_string()).unwrap();

    assert_eq!(job.status(), JobStatus::Completed);
    assert_eq!(job.result(), Some("Buy."));
    assert!(job.error().is_none());
    assert!(job.finished_at().unwrap() >= job.created_at());
}

#[test]
fn given_running_job_when_failed_then_only_error_is_set() {
    let mut job = running_job();

    job.fail("rate limited".to_string()).unwrap();

    assert_eq!(job.status(), JobStatus::Failed);
    assert_eq!(job.error(), Some("rate limited"));
    assert!(job.result().is_none());
}

#[test]
fn given_terminal_job_when_transitioning_again_then_rejected_and_unchanged() {
    let mut job = running_job();
    job.complete("first report".to_string()).unwrap();
    let snapshot = job.clone();

    let err = job.fail("late failure".to_string()).unwrap_err();
    assert_eq!(
        err,
        JobTransitionError::AlreadyTerminal {
            id: job.id(),
            status: JobStatus::Completed,
        }
    );
    assert!(job.complete("second report".to_string()).is_err());
    assert_eq!(job, snapshot);
}

#[test]
fn given_blank_outcome_when_transitioning_then_rejected_and_still_running() {
    let mut job = running_job();

    assert_eq!(
        job.complete("  ".to_string()),
        Err(JobTransitionError::EmptyOutcome)
    );
    assert_eq!(job.fail(String::new()), Err(JobTransitionError::EmptyOutcome));
    assert_eq!(job.status(), JobStatus::Running);
}

#[test]
fn given_status_strings_when_parsing_then_matches_wire_names() {
    for status in [JobStatus::Running, JobStatus::Completed, JobStatus::Failed] {
        assert_eq!(status.as_str().parse::<JobStatus>(), Ok(status));
    }
    assert!("pending".parse::<JobStatus>().is_err());
    assert!(!JobStatus::Running.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
}

#[test]
fn given_two_jobs_when_created_then_ids_differ() {
    assert_ne!(running_job().id(), running_job().id());
}

#[test]
fn given_job_id_text_when_parsing_then_yields_same_id() {
    let id = JobId::new();

    let parsed: JobId = id.to_string().parse().unwrap();

    assert_eq!(parsed, id);
    assert_ne!(JobId::new(), id);
}

#[test]
fn given_malformed_job_id_when_parsing_then_errors() {
    assert!("not-a-job".parse::<JobId>().is_err());
}
