use crate::config::ShelfConfig;
use fotosheet::io::ext_repr::{ExtPrintJob, ExtSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct ShelfOutput {
    #[serde(flatten)]
    pub job: ExtPrintJob,
    pub solution: ExtSolution,
    /// Time it took to pack and export the solution, in milliseconds
    pub run_time_ms: u64,
    /// RFC 3339 timestamp of the run
    pub produced_at: String,
    pub config: ShelfConfig,
}
