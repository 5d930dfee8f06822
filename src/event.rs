use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    /// Frame tick: fires every `frame_poll` whether or not a key arrived.
    Tick,
    Resize,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<io::Result<Event>>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(frame_poll: Duration) -> Self {
        Self::with_stream(event::EventStream::new(), frame_poll)
    }

    /// Drives any terminal event stream. A stream error is forwarded once and
    /// ends the task.
    pub fn with_stream<S>(mut reader: S, frame_poll: Duration) -> Self
    where
        S: Stream<Item = io::Result<CrosstermEvent>> + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<io::Result<Event>>();

        let task = tokio::spawn(async move {
            let mut tick_interval = tokio::time::interval(frame_poll);

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                let mapped = match evt {
                                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                                    CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                                    _ => None,
                                };
                                if let Some(e) = mapped
                                    && tx.send(Ok(e)).is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(err)) => {
                                tracing::error!(%err, "terminal event stream failed");
                                let _ = tx.send(Err(err));
                                break;
                            }
                            None => break,
                        }
                    }
                    _ = tick_interval.tick() => {
                        if tx.send(Ok(Event::Tick)).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, _task: task }
    }

    /// Next event. Fails on a terminal read error, and once the stream has
    /// ended, since input can no longer reach the quit key.
    pub async fn next(&mut self) -> io::Result<Event> {
        match self.rx.recv().await {
            Some(event) => event,
            None => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal event stream closed",
            )),
        }
    }
}
