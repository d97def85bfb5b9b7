//! One-shot launch reminder.
//!
//! The scheduler runs a single detached task: it waits for the delay, hands a
//! [`Reminder`] to the app over a channel and ends. The app decides how to
//! surface it (toast plus [`Chime`]).

use std::{
    io::{self, Write},
    time::Duration,
};

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ReminderScheduler {
    delay: Duration,
}

impl ReminderScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Arm the reminder. Consumes the scheduler: a launch gets one reminder.
    ///
    /// The returned handle may be dropped; the task keeps running detached.
    pub fn arm(self, reminder: Reminder, sender: UnboundedSender<Reminder>) -> JoinHandle<()> {
        let delay = self.delay;
        tracing::info!(delay_secs = delay.as_secs(), "reminder armed");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(title = %reminder.title, "reminder due");
            if sender.send(reminder).is_err() {
                tracing::debug!("reminder dropped, app already closed");
            }
        })
    }
}

/// Short audio cue played when a reminder is shown.
pub trait Chime {
    fn play(&mut self) -> io::Result<()>;
}

/// Rings the terminal bell (BEL).
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn play(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        out.write_all(b"\x07")?;
        out.flush()
    }
}
