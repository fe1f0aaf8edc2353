//! One poll-evaluate-report cycle

use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::MonitorError;
use crate::services::ReportService;

use super::chain::ChainStateReader;
use super::evaluator::evaluate;
use super::types::{ChainSnapshot, CheckOutcome, HealthVerdict};

pub struct HealthMonitor {
    config: Config,
    reader: ChainStateReader,
    reporter: ReportService,
}

impl HealthMonitor {
    pub fn new(config: Config, reader: ChainStateReader, reporter: ReportService) -> Self {
        Self {
            config,
            reader,
            reporter,
        }
    }

    /// Run one full check cycle: read chain state, evaluate, report.
    ///
    /// Upstream RPC and decode errors abort the cycle before any ping is
    /// attempted. A failed failure-path ping is logged and swallowed; a
    /// failed success-path ping is fatal.
    pub async fn run_check(&self) -> Result<CheckOutcome, MonitorError> {
        info!(
            "Checking {} against {}",
            self.config.node_id, self.config.rpc_url
        );

        let snapshot = self.reader.snapshot().await?;
        let verdict = evaluate(&snapshot, self.config.max_allowed_gap);

        info!(
            "Node {}: latest={} finalized={} gap={} sync={:.2}% healthy={}",
            self.config.node_id,
            snapshot.latest,
            snapshot.finalized,
            verdict.gap,
            verdict.sync_percentage,
            verdict.is_healthy
        );

        let report = format_report(&self.config.node_id, &snapshot, &verdict);
        print_status_block(&self.config.node_id, &report, &verdict);

        if verdict.is_healthy {
            self.reporter.report_success(&report).await?;
        } else if let Err(e) = self.reporter.report_failure(&report).await {
            // The unhealthy verdict alone determines the exit code
            warn!("Failure ping not delivered: {}", e);
        }

        Ok(CheckOutcome {
            snapshot,
            verdict,
            report,
        })
    }
}

/// Plaintext status report sent to the monitoring service
fn format_report(node_id: &str, snapshot: &ChainSnapshot, verdict: &HealthVerdict) -> String {
    let status = if verdict.is_healthy {
        "HEALTHY"
    } else {
        "UNHEALTHY"
    };

    format!(
        "Node: {}\n\
         Timestamp: {}\n\
         Latest Block: {}\n\
         Finalized Block: {}\n\
         Sync Percentage: {:.2}%\n\
         Block Lag: {}\n\
         Status: {}",
        node_id,
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        snapshot.latest,
        snapshot.finalized,
        verdict.sync_percentage,
        verdict.gap,
        status,
    )
}

fn print_status_block(node_id: &str, report: &str, verdict: &HealthVerdict) {
    if verdict.is_healthy {
        println!("✅ {} is healthy", node_id);
    } else {
        println!("❌ {} is UNHEALTHY", node_id);
    }
    println!("{}", report);
}
