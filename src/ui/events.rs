use std::time::Duration;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Delayed work a screen can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fake speech recognition finishing
    VoiceTranscription,
    /// Assistant finished speaking its reply
    VoiceResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub kind: TimerKind,
    pub generation: u64,
}

/// Unified app events
#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Timer(TimerFired),
}

/// Event manager for events produced off the main loop
pub struct EventManager {
    pub event_sender: mpsc::Sender<AppEvent>,
    pub event_receiver: mpsc::Receiver<AppEvent>,
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EventManager {
    pub fn new() -> Self {
        let (event_sender, event_receiver) = mpsc::channel::<AppEvent>(100);
        Self {
            event_sender,
            event_receiver,
        }
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.event_sender.clone()
    }

    /// Try to receive an event (non-blocking)
    pub fn try_receive(&mut self) -> Option<AppEvent> {
        self.event_receiver.try_recv().ok()
    }

    pub async fn receive(&mut self) -> Option<AppEvent> {
        self.event_receiver.recv().await
    }
}

/// Runs screen timers on the tokio runtime.
///
/// Each timer carries the generation it was scheduled in. Leaving a screen
/// bumps the generation and aborts whatever is still sleeping, and a timer
/// that slips through with an old generation is ignored by the app.
pub struct Scheduler {
    sender: mpsc::Sender<AppEvent>,
    generation: u64,
    pending: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(sender: mpsc::Sender<AppEvent>) -> Self {
        Self {
            sender,
            generation: 0,
            pending: Vec::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Must be called from within a tokio runtime
    pub fn schedule(&mut self, kind: TimerKind, after: Duration) {
        self.pending.retain(|handle| !handle.is_finished());

        let sender = self.sender.clone();
        let fired = TimerFired {
            kind,
            generation: self.generation,
        };
        debug!("Scheduling {:?} in {:?} (generation {})", kind, after, self.generation);

        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // Receiver gone means the app is shutting down
            let _ = sender.send(AppEvent::Timer(fired)).await;
        }));
    }

    pub fn cancel_all(&mut self) {
        self.generation += 1;
        let aborted = self.pending.len();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        if aborted > 0 {
            debug!("Cancelled {} pending timers, now generation {}", aborted, self.generation);
        }
    }

    pub fn is_current(&self, fired: &TimerFired) -> bool {
        fired.generation == self.generation
    }

    pub fn pending_count(&self) -> usize {
        self.pending.iter().filter(|handle| !handle.is_finished()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let mut events = EventManager::new();
        let mut scheduler = Scheduler::new(events.sender());

        scheduler.schedule(TimerKind::VoiceTranscription, Duration::from_secs(3));
        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert!(events.try_receive().is_none());

        tokio::time::sleep(Duration::from_millis(200)).await;
        match events.try_receive() {
            Some(AppEvent::Timer(fired)) => {
                assert_eq!(fired.kind, TimerKind::VoiceTranscription);
                assert!(scheduler.is_current(&fired));
            }
            other => panic!("expected timer event, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_aborts_and_bumps_generation() {
        let mut events = EventManager::new();
        let mut scheduler = Scheduler::new(events.sender());

        scheduler.schedule(TimerKind::VoiceResponse, Duration::from_secs(2));
        assert_eq!(scheduler.pending_count(), 1);

        scheduler.cancel_all();
        assert_eq!(scheduler.generation(), 1);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(events.try_receive().is_none());

        let stale = TimerFired { kind: TimerKind::VoiceResponse, generation: 0 };
        assert!(!scheduler.is_current(&stale));
    }
}
