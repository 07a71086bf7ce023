use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the app loop.
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Spawns the tick thread feeding `tx`.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>, interval: Duration) {
    thread::spawn(move || loop {
        if tx.send(AppEvent::Tick).is_err() {
            break;
        }

        thread::sleep(interval);
    });
}

/// Tick-only stream, for driving the loop without a terminal.
pub fn tick_stream(interval: Duration) -> Receiver<AppEvent> {
    let (tx, rx) = mpsc::channel();
    spawn_ticker(tx, interval);
    rx
}

/// Production event stream: one thread reads terminal events, another
/// ticks every `interval`; both feed a single channel drained by the
/// main loop.
pub fn event_stream(interval: Duration) -> Receiver<AppEvent> {
    let (tx, rx) = mpsc::channel();

    spawn_ticker(tx.clone(), interval);

    thread::spawn(move || loop {
        match event::read() {
            Ok(CtEvent::Key(key)) => {
                if tx.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
            Ok(CtEvent::Resize(_, _)) => {
                if tx.send(AppEvent::Resize).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn tick_stream_delivers_ticks() {
        let rx = tick_stream(Duration::from_millis(5));

        let ev = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_matches!(ev, AppEvent::Tick);
    }

    #[test]
    fn tick_stream_keeps_ticking() {
        let rx = tick_stream(Duration::from_millis(1));

        for _ in 0..3 {
            let ev = rx.recv_timeout(Duration::from_secs(1)).unwrap();
            assert_matches!(ev, AppEvent::Tick);
        }
    }
}
