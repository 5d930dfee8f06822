use thiserror::Error;

/// One process as seen at sample time. Never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub mem_percent: f32,
}

impl ProcessRecord {
    pub fn new(pid: u32, name: impl Into<String>, cpu_percent: f32, mem_percent: f32) -> Self {
        Self {
            pid,
            name: name.into(),
            cpu_percent,
            mem_percent,
        }
    }
}

/// Why a single process could not be read during enumeration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    #[error("process {pid} exited during enumeration")]
    Vanished { pid: u32 },

    #[error("access denied reading process {pid}")]
    AccessDenied { pid: u32 },

    #[error("process {pid} is a zombie")]
    Zombie { pid: u32 },
}

/// Keeps every successfully read record in enumeration order. Failed reads
/// are dropped one by one; they never abort the batch.
pub fn collect_records<I>(reads: I) -> Vec<ProcessRecord>
where
    I: IntoIterator<Item = Result<ProcessRecord, ReadError>>,
{
    reads.into_iter().filter_map(Result::ok).collect()
}

/// Stable sort, highest CPU first. Equal values keep enumeration order.
pub fn sort_by_cpu(records: &mut [ProcessRecord]) {
    records.sort_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent));
}
