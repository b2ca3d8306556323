use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::reconcile::ReconciliationService, state::AppState};

/// Starts the fulfilment resumption scheduler
///
/// On every tick the job looks for accepted members and paid orders whose fulfilment
/// stopped before the notification was sent (a failed upload or email) and drives them
/// to completion.
///
/// # Arguments
/// - `state`: Application state shared with the HTTP handlers
/// - `schedule`: Cron expression with a seconds field, e.g. `0 */5 * * * *`
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; dropping it does not stop the job
/// - `Err(AppError::SchedulerErr)` - Invalid schedule or scheduler failure
pub async fn start_scheduler(state: AppState, schedule: &str) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            match ReconciliationService::new(&state).resume_incomplete().await {
                Ok(0) => {}
                Ok(count) => tracing::info!("Resumed fulfilment of {} record(s)", count),
                Err(e) => tracing::error!("Error resuming incomplete fulfilments: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Fulfilment resumption scheduler started ({})", schedule);

    Ok(scheduler)
}
