use sysinfo::{
    MemoryRefreshKind, Process, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System,
};

use super::process::{ProcessRecord, ReadError};
use super::snapshot::SystemLoad;
use super::{LoadSource, ProcessSource};

/// sysinfo-backed process enumeration, owned by the sampler.
pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        // Primes per-process CPU counters; the first real sample then has a baseline.
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, process_refresh_kind());
        Collector { sys }
    }

    fn read(&self, process: &Process, total_memory: u64) -> Result<ProcessRecord, ReadError> {
        let pid = process.pid().as_u32();
        match process.status() {
            ProcessStatus::Zombie => return Err(ReadError::Zombie { pid }),
            ProcessStatus::Dead => return Err(ReadError::Vanished { pid }),
            _ => {}
        }

        let name = process.name().to_string_lossy().to_string();
        if name.is_empty() {
            // No name means the entry could not be read.
            return Err(ReadError::AccessDenied { pid });
        }

        Ok(ProcessRecord {
            pid,
            name,
            cpu_percent: process.cpu_usage(),
            mem_percent: memory_percent(process.memory(), total_memory),
        })
    }
}

impl ProcessSource for Collector {
    fn enumerate(&mut self) -> Vec<Result<ProcessRecord, ReadError>> {
        let _span = tracing::debug_span!("collector.enumerate").entered();

        self.sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        self.sys.refresh_processes_specifics(ProcessesToUpdate::All, true, process_refresh_kind());

        let total_memory = self.sys.total_memory();
        let mut processes: Vec<&Process> = self.sys.processes().values().collect();
        // HashMap order is arbitrary; enumerate by ascending PID like the OS does.
        processes.sort_unstable_by_key(|p| p.pid());
        processes
            .into_iter()
            .map(|process| self.read(process, total_memory))
            .collect()
    }
}

/// Whole-system CPU and memory readings, owned by the display loop.
pub struct LoadMeter {
    sys: System,
}

impl Default for LoadMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadMeter {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        LoadMeter { sys }
    }
}

impl LoadSource for LoadMeter {
    fn system_load(&mut self) -> SystemLoad {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        SystemLoad {
            cpu_percent: self.sys.global_cpu_usage(),
            mem_percent: memory_percent(self.sys.used_memory(), self.sys.total_memory()),
        }
    }
}

fn process_refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing().with_cpu().with_memory()
}

fn memory_percent(used: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64 * 100.0) as f32
}
