use crate::playback::metadata::{read_metadata, TrackInfo};
use crate::playback::source::{MediaEvent, MediaSource};
use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// A single file played through the default output device.
pub struct LocalPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,

    current_path: Option<PathBuf>,
    duration: Option<Duration>,

    volume: f32,

    // position tracking; `started_at` is `None` while paused
    base_seek: Duration,
    started_at: Option<Instant>,
    paused_acc: Duration,
    ended: bool,

    time_update: Duration,
    last_time_update: Option<Instant>,
    pending: Vec<MediaEvent>,
}

impl LocalPlayer {
    pub fn try_new(time_update: Duration) -> Result<Self> {
        let (_stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        Ok(Self {
            _stream,
            handle,
            sink,
            current_path: None,
            duration: None,
            volume: 1.0,
            base_seek: Duration::ZERO,
            started_at: None,
            paused_acc: Duration::ZERO,
            ended: false,
            time_update,
            last_time_update: None,
            pending: Vec::new(),
        })
    }

    /// Loads `path` paused at the start.
    pub fn load(&mut self, path: &Path) -> Result<TrackInfo> {
        let decoder = open_decoder(path)?;
        let mut info = read_metadata(path).unwrap_or_else(|e| {
            log::warn!("no metadata for {}: {e}", path.display());
            TrackInfo::default()
        });
        if info.duration.is_none() {
            info.duration = decoder.total_duration();
        }

        self.sink.stop();
        self.sink = Sink::try_new(&self.handle)?;
        self.sink.set_volume(self.volume);
        self.sink.pause();
        self.sink.append(decoder.convert_samples::<f32>());

        self.current_path = Some(path.to_path_buf());
        self.duration = info.duration;
        self.base_seek = Duration::ZERO;
        self.paused_acc = Duration::ZERO;
        self.started_at = None;
        self.ended = false;
        self.last_time_update = None;

        log::info!("loaded {} ({:?})", path.display(), self.duration);
        self.pending.push(MediaEvent::LoadedMetadata);
        Ok(info)
    }

    fn elapsed(&self) -> Duration {
        let running = self.started_at.map(|s| s.elapsed()).unwrap_or_default();
        self.base_seek + self.paused_acc + running
    }
}

impl MediaSource for LocalPlayer {
    fn play(&mut self) -> Result<()> {
        if self.current_path.is_none() || self.started_at.is_some() {
            return Ok(());
        }
        if self.ended {
            self.set_current_time(Duration::ZERO)?;
        }
        self.sink.play();
        self.started_at = Some(Instant::now());
        self.pending.push(MediaEvent::Play);
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if let Some(start) = self.started_at.take() {
            self.paused_acc += start.elapsed();
            self.sink.pause();
            self.pending.push(MediaEvent::Pause);
        }
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.started_at.is_none()
    }

    fn is_ended(&self) -> bool {
        self.ended
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn current_time(&self) -> Duration {
        let pos = self.elapsed();
        match self.duration {
            Some(d) => pos.min(d),
            None => pos,
        }
    }

    fn set_current_time(&mut self, pos: Duration) -> Result<()> {
        let Some(path) = self.current_path.clone() else {
            return Ok(());
        };
        let decoder = open_decoder(&path)?;
        let playing = self.started_at.is_some();

        self.sink.stop();
        self.sink = Sink::try_new(&self.handle)?;
        self.sink.set_volume(self.volume);
        if !playing {
            self.sink.pause();
        }
        self.sink.append(decoder.convert_samples::<f32>().skip_duration(pos));

        self.base_seek = pos;
        self.paused_acc = Duration::ZERO;
        self.started_at = playing.then(Instant::now);
        self.ended = false;
        self.pending.push(MediaEvent::TimeUpdate);
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.sink.set_volume(self.volume);
    }

    fn poll_events(&mut self, now: Instant) -> Vec<MediaEvent> {
        if let Some(start) = self.started_at {
            if self.sink.empty() {
                // drained: freeze the clock and report the end once
                self.paused_acc += start.elapsed();
                self.started_at = None;
                self.ended = true;
                self.pending.push(MediaEvent::TimeUpdate);
                self.pending.push(MediaEvent::Pause);
                self.pending.push(MediaEvent::Ended);
            } else if self
                .last_time_update
                .map_or(true, |t| now.saturating_duration_since(t) >= self.time_update)
            {
                self.last_time_update = Some(now);
                self.pending.push(MediaEvent::TimeUpdate);
            }
        }
        std::mem::take(&mut self.pending)
    }
}

fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(Decoder::new(BufReader::new(file))?)
}
