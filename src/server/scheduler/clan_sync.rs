use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{dispatch::Dispatcher, error::AppError, service::sync::SyncService};

/// Starts the clan sync scheduler
///
/// Runs one sync pass every time `schedule` fires. A trigger that arrives while the
/// previous pass is still running is skipped by the service itself.
///
/// # Arguments
/// - `sync`: Sync service shared with any startup pass
/// - `schedule`: Six-field cron expression (with seconds)
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler; keep it alive for jobs to fire
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler<D>(
    sync: Arc<SyncService<D>>,
    schedule: &str,
) -> Result<JobScheduler, AppError>
where
    D: Dispatcher + 'static,
{
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let sync = sync.clone();

        Box::pin(async move {
            if let Some(report) = sync.run().await {
                if report.pages_failed > 0 || report.chunks_failed > 0 {
                    tracing::warn!(
                        "Scheduled sync pass dropped {} pages and {} chunks",
                        report.pages_failed,
                        report.chunks_failed
                    );
                }
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Clan sync scheduler started ({})", schedule);

    Ok(scheduler)
}
