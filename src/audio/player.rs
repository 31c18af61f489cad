use super::analyzer::{FrequencyAnalyzer, SampleBuffer};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// The three bookable demo reels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoTrack {
    #[default]
    Electronic,
    Acoustic,
    Rock,
}

impl DemoTrack {
    pub const ALL: [DemoTrack; 3] = [DemoTrack::Electronic, DemoTrack::Acoustic, DemoTrack::Rock];

    pub fn slug(&self) -> &'static str {
        match self {
            DemoTrack::Electronic => "electronic",
            DemoTrack::Acoustic => "acoustic",
            DemoTrack::Rock => "rock",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DemoTrack::Electronic => "Electronic Demo",
            DemoTrack::Acoustic => "Acoustic Demo",
            DemoTrack::Rock => "Rock Demo",
        }
    }

    pub fn duration_label(&self) -> &'static str {
        match self {
            DemoTrack::Electronic => "3:45",
            DemoTrack::Acoustic => "4:12",
            DemoTrack::Rock => "3:28",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}-demo.mp3", self.slug())
    }
}

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no audio output device available: {0}")]
    Output(String),
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

/// Seam between the input handlers and whatever produces sound.
/// `DemoPlayer` drives a real rodio sink; `NullBackend` keeps the UI alive
/// on machines with no output device (or under test).
pub trait AudioBackend {
    /// Point the backend at a demo reel. Any queued audio is discarded.
    fn load(&mut self, track: DemoTrack);

    /// Start or resume playback of the loaded reel.
    fn play(&mut self) -> Result<(), PlayerError>;

    fn pause(&mut self);
}

/// Rodio-backed demo player. Decoded samples pass through a tap that feeds
/// the analyzer's shared buffer on their way to the output device.
pub struct DemoPlayer {
    audio_dir: PathBuf,
    vis_buffer: SampleBuffer,
    // Keeps the output device alive for the sink's lifetime
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,
    loaded: DemoTrack,
    queued: bool,
}

impl DemoPlayer {
    pub fn new(audio_dir: PathBuf, vis_buffer: SampleBuffer) -> Result<Self, PlayerError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| PlayerError::Output(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| PlayerError::Output(e.to_string()))?;
        Ok(Self {
            audio_dir,
            vis_buffer,
            _stream: stream,
            handle,
            sink,
            loaded: DemoTrack::default(),
            queued: false,
        })
    }

    fn track_path(&self) -> PathBuf {
        self.audio_dir.join(self.loaded.file_name())
    }

    fn enqueue(&mut self) -> Result<(), PlayerError> {
        let path = self.track_path();
        let file = File::open(&path).map_err(|e| PlayerError::Open {
            path: path.clone(),
            source: e,
        })?;
        let decoder = Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::Decode {
            path: path.clone(),
            source: e,
        })?;

        let tap = SampleTap::new(decoder.convert_samples::<f32>(), self.vis_buffer.clone());
        self.sink.append(tap);
        self.queued = true;
        Ok(())
    }
}

impl AudioBackend for DemoPlayer {
    fn load(&mut self, track: DemoTrack) {
        self.loaded = track;
        self.queued = false;
        // Replace the sink wholesale; rodio has no "clear queue"
        self.sink.stop();
        if let Ok(sink) = Sink::try_new(&self.handle) {
            self.sink = sink;
        }
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        if !self.queued || self.sink.empty() {
            self.enqueue()?;
        }
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }
}

/// UI-only backend: every operation succeeds and makes no sound.
#[derive(Default)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn load(&mut self, _track: DemoTrack) {}

    fn play(&mut self) -> Result<(), PlayerError> {
        Ok(())
    }

    fn pause(&mut self) {}
}

/// Pass-through rodio source that copies samples into the analyzer buffer
/// in batches, so the playback thread takes the lock rarely.
struct SampleTap<S> {
    inner: S,
    buffer: SampleBuffer,
    pending: Vec<f32>,
}

const TAP_BATCH: usize = 512;

impl<S> SampleTap<S> {
    fn new(inner: S, buffer: SampleBuffer) -> Self {
        Self {
            inner,
            buffer,
            pending: Vec::with_capacity(TAP_BATCH),
        }
    }
}

impl<S> Iterator for SampleTap<S>
where
    S: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        match self.inner.next() {
            Some(sample) => {
                self.pending.push(sample);
                if self.pending.len() >= TAP_BATCH {
                    let channels = self.inner.channels() as usize;
                    FrequencyAnalyzer::push_samples(&self.buffer, &self.pending, channels);
                    self.pending.clear();
                }
                Some(sample)
            }
            None => {
                if !self.pending.is_empty() {
                    let channels = self.inner.channels() as usize;
                    FrequencyAnalyzer::push_samples(&self.buffer, &self.pending, channels);
                    self.pending.clear();
                }
                None
            }
        }
    }
}

impl<S> Source for SampleTap<S>
where
    S: Source<Item = f32>,
{
    fn current_frame_len(&self) -> Option<usize> {
        self.inner.current_frame_len()
    }

    fn channels(&self) -> u16 {
        self.inner.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.inner.total_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_file_names_match_resource_layout() {
        assert_eq!(DemoTrack::Electronic.file_name(), "electronic-demo.mp3");
        assert_eq!(DemoTrack::Acoustic.file_name(), "acoustic-demo.mp3");
        assert_eq!(DemoTrack::Rock.file_name(), "rock-demo.mp3");
    }

    #[test]
    fn null_backend_always_plays() {
        let mut backend = NullBackend;
        backend.load(DemoTrack::Rock);
        assert!(backend.play().is_ok());
        backend.pause();
    }
}
