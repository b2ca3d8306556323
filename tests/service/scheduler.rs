use highlanders::server::{error::AppError, scheduler::reconciliation::start_scheduler};

use crate::util::setup::test_setup;

#[tokio::test(flavor = "multi_thread")]
/// Expect an invalid cron expression to be reported instead of scheduling nothing
async fn rejects_invalid_schedule() {
    let test = test_setup().await;

    let result = start_scheduler(test.state.clone(), "every five minutes").await;

    assert!(matches!(result, Err(AppError::SchedulerErr(_))));
}

#[tokio::test(flavor = "multi_thread")]
/// Expect a valid schedule to start the job
async fn starts_with_valid_schedule() -> Result<(), AppError> {
    let test = test_setup().await;

    let mut scheduler = start_scheduler(test.state.clone(), "0 */5 * * * *").await?;

    scheduler.shutdown().await?;

    Ok(())
}
