use crate::context::SeedContext;
use crate::error::SeedError;
use async_trait::async_trait;
use colored::*;
use sea_orm::DatabaseTransaction;
use std::time::{Duration, Instant};

const STATUS_COLUMN: usize = 80;

/// One phase of the seeding run. Phases share the transaction and the context.
#[async_trait]
pub trait Seeder: Send + Sync {
    fn name(&self) -> &'static str;

    async fn seed(
        &self,
        txn: &DatabaseTransaction,
        ctx: &mut SeedContext,
    ) -> Result<(), SeedError>;
}

/// `Seeding <name> ....... done (1.2ms)` or `... failed`.
pub fn status_line(name: &str, outcome: Result<Duration, &SeedError>) -> String {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    match outcome {
        Ok(elapsed) => {
            let time_str = format!("({:.2?})", elapsed).dimmed();
            format!("{}{} {} {}", base_msg, dots, "done".green(), time_str)
        }
        Err(_) => format!("{}{} {}", base_msg, dots, "failed".red()),
    }
}

/// Runs a single seeder and prints its status line once the phase is over,
/// so per-row log output never splits the line.
///
/// Failures are only logged at debug level here; the caller reports them.
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    txn: &DatabaseTransaction,
    ctx: &mut SeedContext,
) -> Result<Duration, SeedError> {
    let name = seeder.name();
    let start = Instant::now();
    let result = seeder.seed(txn, ctx).await.map(|()| start.elapsed());

    println!("{}", status_line(name, result.as_ref().copied()));

    match &result {
        Ok(elapsed) => log::info!("seeded {} in {:.2?}", name, elapsed),
        Err(e) => log::debug!("seeding {} failed: {}", name, e),
    }
    result
}
