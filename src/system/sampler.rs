use std::time::Duration;

use color_eyre::Result;
use tokio::sync::watch;

use super::ProcessSource;
use super::process::collect_records;
use super::snapshot::{SharedSnapshot, Snapshot};

/// Background producer of [`Snapshot`]s.
pub struct Sampler<S> {
    source: S,
}

impl<S: ProcessSource> Sampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// One enumeration: unreadable processes are dropped, the rest sorted.
    pub fn sample_once(&mut self) -> Snapshot {
        Snapshot::from_records(collect_records(self.source.enumerate()))
    }
}

impl<S: ProcessSource + Send + 'static> Sampler<S> {
    /// Samples, publishes, then sleeps `interval`, until `shutdown` flips to
    /// `true` or its sender is dropped.
    ///
    /// Enumeration runs on the blocking pool so the display loop keeps
    /// polling input while the process table is read.
    pub async fn run(
        self,
        shared: SharedSnapshot,
        interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        let mut sampler = self;
        let mut cycles: u64 = 0;

        loop {
            if *shutdown.borrow() {
                break;
            }

            let (returned, snapshot) = tokio::task::spawn_blocking(move || {
                let snapshot = sampler.sample_once();
                (sampler, snapshot)
            })
            .await?;
            sampler = returned;

            cycles += 1;
            tracing::debug!(cycle = cycles, processes = snapshot.len(), "published snapshot");
            shared.publish(snapshot);

            let stop = tokio::select! {
                _ = tokio::time::sleep(interval) => false,
                changed = shutdown.changed() => changed.is_err(),
            };
            if stop {
                break;
            }
        }

        tracing::debug!(cycles, "sampler stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::process::{ProcessRecord, ReadError};

    struct ScriptedSource {
        batches: Vec<Vec<Result<ProcessRecord, ReadError>>>,
        calls: usize,
    }

    impl ProcessSource for ScriptedSource {
        fn enumerate(&mut self) -> Vec<Result<ProcessRecord, ReadError>> {
            let batch = self.batches[self.calls.min(self.batches.len() - 1)].clone();
            self.calls += 1;
            batch
        }
    }

    fn scripted(batches: Vec<Vec<Result<ProcessRecord, ReadError>>>) -> ScriptedSource {
        ScriptedSource { batches, calls: 0 }
    }

    #[test]
    fn sample_once_sorts_and_skips_failures() {
        let mut sampler = Sampler::new(scripted(vec![vec![
            Ok(ProcessRecord::new(1, "idle", 10.0, 1.0)),
            Err(ReadError::AccessDenied { pid: 9 }),
            Ok(ProcessRecord::new(2, "busy", 90.0, 2.0)),
            Ok(ProcessRecord::new(3, "mid", 50.0, 3.0)),
        ]]));

        let snapshot = sampler.sample_once();
        let pids: Vec<u32> = snapshot.records().iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn run_publishes_and_stops_on_shutdown() {
        let shared = SharedSnapshot::new();
        let (tx, rx) = watch::channel(false);
        let sampler = Sampler::new(scripted(vec![
            vec![Ok(ProcessRecord::new(1, "a", 1.0, 1.0))],
            vec![
                Ok(ProcessRecord::new(1, "a", 1.0, 1.0)),
                Ok(ProcessRecord::new(2, "b", 5.0, 1.0)),
            ],
        ]));

        let handle = tokio::spawn(sampler.run(shared.clone(), Duration::from_millis(5), rx));

        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while shared.load().len() < 2 {
            assert!(tokio::time::Instant::now() < deadline, "sampler never published");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(shared.load().records()[0].pid, 2);

        tx.send(true).unwrap();
        let joined = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("sampler did not stop");
        assert!(joined.unwrap().is_ok());
    }

    #[tokio::test]
    async fn run_stops_when_sender_is_dropped() {
        let shared = SharedSnapshot::new();
        let (tx, rx) = watch::channel(false);
        let sampler = Sampler::new(scripted(vec![vec![]]));
        let handle = tokio::spawn(sampler.run(shared, Duration::from_secs(3600), rx));

        drop(tx);
        let joined = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("sampler did not stop");
        assert!(joined.unwrap().is_ok());
    }
}
