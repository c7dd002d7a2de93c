//! Sound collaborator: turns core events into terminal bells on a worker thread.
//!
//! The game loop only ever calls [`Sound::notify`], which is a non-blocking
//! channel send. If the worker is slow or gone, events are dropped and the
//! simulation carries on.
//!
//! A terminal has no audio channel, so the background music is a cue: a
//! three-bell phrase when a game starts, held "playing" until game over.
//! Each line clear rings a single bell.

use std::io::Write;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, warn};

use crate::types::GameEvent;

const BELL: &[u8] = b"\x07";
const MUSIC_CUE: &[u8] = b"\x07\x07\x07";

pub struct Sound {
    tx: Option<mpsc::Sender<GameEvent>>,
}

impl Sound {
    /// Spawn the bell worker writing to stdout.
    pub fn spawn() -> Self {
        Self::spawn_with(std::io::stdout)
    }

    /// Spawn a worker writing bells to the sink produced by `make_sink`.
    pub fn spawn_with<W, F>(make_sink: F) -> Self
    where
        W: Write,
        F: FnOnce() -> W + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<GameEvent>();
        let spawned = thread::Builder::new()
            .name("sound".to_string())
            .spawn(move || {
                let mut sink = make_sink();
                let mut music = false;
                for event in rx {
                    debug!(?event, "sound event");
                    let sound: &[u8] = match event {
                        GameEvent::Started if !music => {
                            music = true;
                            debug!("music started");
                            MUSIC_CUE
                        }
                        GameEvent::GameOver if music => {
                            music = false;
                            debug!("music stopped");
                            continue;
                        }
                        GameEvent::LinesCleared { .. } => BELL,
                        _ => continue,
                    };
                    if let Err(e) = sink.write_all(sound).and_then(|_| sink.flush()) {
                        warn!(error = %e, "sound: bell write failed, stopping");
                        return;
                    }
                }
            });

        match spawned {
            Ok(_) => Self { tx: Some(tx) },
            Err(e) => {
                warn!(error = %e, "sound: worker failed to start, running muted");
                Self::muted()
            }
        }
    }

    /// A collaborator that drops every event.
    pub fn muted() -> Self {
        Self { tx: None }
    }

    /// Fire-and-forget delivery of one event.
    pub fn notify(&self, event: GameEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}
