/// Tuning knobs for the parallel decode pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Worker pool size. `None` picks twice the available hardware
    /// parallelism.
    pub threads: Option<usize>,
    /// Floor on the size of a slice, in bytes. Inputs no larger than this
    /// decode sequentially on the calling thread.
    pub min_slice_size: usize,
    /// Target slice count per pool worker.
    pub slices_per_worker: usize,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_min_slice_size(mut self, min_slice_size: usize) -> Self {
        self.min_slice_size = min_slice_size;
        self
    }

    pub fn with_slices_per_worker(mut self, slices_per_worker: usize) -> Self {
        self.slices_per_worker = slices_per_worker;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            threads: None,
            min_slice_size: 500,
            slices_per_worker: 1,
        }
    }
}
