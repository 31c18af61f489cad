use spectrum_analyzer::windows::hann_window;
use spectrum_analyzer::{samples_fft_to_spectrum, scaling::divide_by_N_sqrt, FrequencyLimit};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Shared handle for pushing decoded samples from the playback thread.
pub type SampleBuffer = Arc<Mutex<VecDeque<f32>>>;

/// FFT window. 256 samples yields 128 frequency buckets.
const FFT_SIZE: usize = 256;

/// Buckets in a frequency snapshot.
pub const BUCKET_COUNT: usize = FFT_SIZE / 2;

/// Max samples retained in the rolling buffer before old ones are dropped.
const BUFFER_CAP: usize = 8192;

/// Frequency Analyzer Adapter 📊
///
/// Keeps a rolling window of mono samples fed from the demo player and turns
/// them into a per-bucket byte snapshot (0-255) once per tick while audio is
/// playing. The snapshot is frozen (stale) whenever `refresh` is not called.
pub struct FrequencyAnalyzer {
    audio_buffer: SampleBuffer,

    /// Latest per-bucket amplitudes. Empty until the first refresh.
    snapshot: Vec<u8>,

    /// Rolling maximum for auto-gain, so quiet demos still fill the bars.
    max_val: f32,
}

impl FrequencyAnalyzer {
    pub fn new() -> Self {
        Self {
            audio_buffer: Arc::new(Mutex::new(VecDeque::with_capacity(BUFFER_CAP))),
            snapshot: Vec::new(),
            max_val: 0.001,
        }
    }

    /// Cloneable handle for the playback thread to push samples into.
    pub fn buffer_handle(&self) -> SampleBuffer {
        self.audio_buffer.clone()
    }

    /// Push raw samples via a shared handle, downmixing stereo to mono.
    pub fn push_samples(buffer: &SampleBuffer, new_samples: &[f32], channels: usize) {
        if let Ok(mut buf) = buffer.lock() {
            if channels == 2 {
                for chunk in new_samples.chunks(2) {
                    if chunk.len() == 2 {
                        buf.push_back((chunk[0] + chunk[1]) / 2.0);
                    }
                }
            } else {
                for &s in new_samples {
                    buf.push_back(s);
                }
            }
            while buf.len() > BUFFER_CAP {
                buf.pop_front();
            }
        }
    }

    /// Recompute the snapshot from the newest FFT window. Called once per
    /// tick while playing; not calling it leaves the snapshot frozen.
    pub fn refresh(&mut self) {
        let samples = {
            match self.audio_buffer.lock() {
                Ok(buf) if buf.len() >= FFT_SIZE => buf
                    .iter()
                    .rev()
                    .take(FFT_SIZE)
                    .cloned()
                    .collect::<Vec<_>>(),
                _ => return,
            }
        };

        let input: Vec<f32> = samples.into_iter().rev().collect();
        let windowed = hann_window(&input);

        let spectrum = samples_fft_to_spectrum(
            &windowed,
            44_100,
            FrequencyLimit::All,
            Some(&divide_by_N_sqrt),
        )
        .unwrap_or_default();

        let data = spectrum.data();
        if data.is_empty() {
            return;
        }

        // AGC decay keeps the scale tracking the recent loudness
        self.max_val *= 0.995;
        if self.max_val < 0.01 {
            self.max_val = 0.01;
        }
        for (_, val) in data.iter() {
            if val.val() > self.max_val {
                self.max_val = val.val();
            }
        }

        self.snapshot.resize(BUCKET_COUNT, 0);
        for (i, slot) in self.snapshot.iter_mut().enumerate() {
            let amp = data
                .get(i)
                .map(|(_, v)| (v.val() / self.max_val).min(1.0))
                .unwrap_or(0.0);
            *slot = (amp * 255.0) as u8;
        }
    }

    /// Arithmetic mean of the snapshot bytes over `[start, end)`, clamped to
    /// the snapshot length. 0 when no snapshot exists or the clamped range
    /// is empty. Out-of-range indices are not an error.
    pub fn average_frequency(&self, start: usize, end: usize) -> f32 {
        let end = end.min(self.snapshot.len());
        if start >= end {
            return 0.0;
        }
        let sum: u32 = self.snapshot[start..end].iter().map(|&b| b as u32).sum();
        sum as f32 / (end - start) as f32
    }

    /// Raw bucket amplitude, 0 when out of range.
    pub fn bucket(&self, index: usize) -> u8 {
        self.snapshot.get(index).copied().unwrap_or(0)
    }

    pub fn has_snapshot(&self) -> bool {
        !self.snapshot.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn set_snapshot_for_test(&mut self, bytes: Vec<u8>) {
        self.snapshot = bytes;
    }
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_zero_without_snapshot() {
        let analyzer = FrequencyAnalyzer::new();
        assert_eq!(analyzer.average_frequency(0, 10), 0.0);
    }

    #[test]
    fn average_over_in_range_indices() {
        let mut analyzer = FrequencyAnalyzer::new();
        analyzer.set_snapshot_for_test(vec![10, 20, 30, 40]);
        assert_eq!(analyzer.average_frequency(0, 4), 25.0);
        assert_eq!(analyzer.average_frequency(1, 3), 25.0);
    }

    #[test]
    fn end_index_clamps_to_snapshot_length() {
        let mut analyzer = FrequencyAnalyzer::new();
        analyzer.set_snapshot_for_test(vec![100, 200]);
        // Mean of [100, 200], not a sum divided by the requested span
        assert_eq!(analyzer.average_frequency(0, 64), 150.0);
    }

    #[test]
    fn empty_clamped_range_is_zero() {
        let mut analyzer = FrequencyAnalyzer::new();
        analyzer.set_snapshot_for_test(vec![1, 2, 3]);
        assert_eq!(analyzer.average_frequency(5, 10), 0.0);
        assert_eq!(analyzer.average_frequency(2, 2), 0.0);
    }

    #[test]
    fn push_samples_downmixes_stereo() {
        let analyzer = FrequencyAnalyzer::new();
        let handle = analyzer.buffer_handle();
        FrequencyAnalyzer::push_samples(&handle, &[0.5, 0.3, -0.2, -0.4], 2);
        let buf = handle.lock().unwrap();
        assert_eq!(buf.len(), 2);
        assert!((buf[0] - 0.4).abs() < 1e-6);
        assert!((buf[1] + 0.3).abs() < 1e-6);
    }

    #[test]
    fn refresh_without_enough_samples_keeps_snapshot_empty() {
        let mut analyzer = FrequencyAnalyzer::new();
        let handle = analyzer.buffer_handle();
        FrequencyAnalyzer::push_samples(&handle, &[0.1; 32], 1);
        analyzer.refresh();
        assert!(!analyzer.has_snapshot());
    }

    #[test]
    fn refresh_fills_all_buckets() {
        let mut analyzer = FrequencyAnalyzer::new();
        let handle = analyzer.buffer_handle();
        // A 440 Hz-ish tone, plenty of samples for one window
        let tone: Vec<f32> = (0..1024)
            .map(|i| (i as f32 * 0.0627).sin() * 0.8)
            .collect();
        FrequencyAnalyzer::push_samples(&handle, &tone, 1);
        analyzer.refresh();
        assert!(analyzer.has_snapshot());
        assert_eq!(
            analyzer.average_frequency(0, usize::MAX),
            analyzer.average_frequency(0, BUCKET_COUNT)
        );
    }
}
