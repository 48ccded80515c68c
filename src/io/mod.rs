// Purpose - the host's output buffer contract

/// Multi-channel sample container owned by the host.
///
/// Voices only ever add into it. They never clear, resize or overwrite.
pub trait OutputBuffer {
    fn num_channels(&self) -> usize;

    /// Samples per channel.
    fn num_samples(&self) -> usize;

    /// Add `value` to the sample at `index` on `channel`.
    fn add_sample(&mut self, channel: usize, index: usize, value: f32);
}

/// Planar output: one `Vec<f32>` per channel.
#[derive(Debug, Default)]
pub struct AudioOutput {
    pub buffers: Vec<Vec<f32>>,
}

impl AudioOutput {
    /// Silent buffer with `channels` channels of `samples` samples each.
    pub fn new(channels: usize, samples: usize) -> Self {
        Self {
            buffers: vec![vec![0.0; samples]; channels],
        }
    }

    pub fn channel(&self, channel: usize) -> &[f32] {
        &self.buffers[channel]
    }

    pub fn clear(&mut self) {
        for buffer in &mut self.buffers {
            buffer.fill(0.0);
        }
    }
}

impl OutputBuffer for AudioOutput {
    fn num_channels(&self) -> usize {
        self.buffers.num_channels()
    }

    fn num_samples(&self) -> usize {
        self.buffers.num_samples()
    }

    #[inline]
    fn add_sample(&mut self, channel: usize, index: usize, value: f32) {
        self.buffers.add_sample(channel, index, value);
    }
}

impl OutputBuffer for Vec<Vec<f32>> {
    fn num_channels(&self) -> usize {
        self.len()
    }

    fn num_samples(&self) -> usize {
        self.iter().map(Vec::len).min().unwrap_or(0)
    }

    #[inline]
    fn add_sample(&mut self, channel: usize, index: usize, value: f32) {
        self[channel][index] += value;
    }
}

/// Borrowed planar channels, the shape most plugin hosts hand out.
impl OutputBuffer for [&mut [f32]] {
    fn num_channels(&self) -> usize {
        self.len()
    }

    fn num_samples(&self) -> usize {
        self.iter().map(|c| c.len()).min().unwrap_or(0)
    }

    #[inline]
    fn add_sample(&mut self, channel: usize, index: usize, value: f32) {
        self[channel][index] += value;
    }
}
