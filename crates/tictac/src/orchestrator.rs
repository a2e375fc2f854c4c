//! Async driving loop between the UI and the match controller.
//!
//! Commands arrive one at a time on a channel and are applied in order, so
//! no two move requests are ever in flight. The only suspension point is the
//! computer's thinking delay, and any reset, mode change or quit that lands
//! during it cancels the pending computer move.

use crate::controller::{ControllerError, MatchController, Snapshot};
use crate::mode::GameMode;
use anyhow::Result;
use std::time::Duration;
use tictac_engine::{Outcome, Position, RandomSource};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Requests from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current mover's mark.
    Play(Position),
    /// Start a new round, keeping scores.
    Reset,
    /// Zero the scores, keeping the round.
    ClearScores,
    /// Switch to a mode and start a new round.
    SetMode(GameMode),
    /// Switch to the other mode and start a new round.
    ToggleMode,
    /// Stop the loop.
    Quit,
}

impl Command {
    /// True for commands that discard the current round.
    pub fn starts_new_round(self) -> bool {
        matches!(self, Self::Reset | Self::SetMode(_) | Self::ToggleMode)
    }
}

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Fresh state to draw.
    Updated(Snapshot),
    /// The computer's delay has started.
    ComputerThinking,
    /// A request was refused; the state is unchanged.
    Rejected(ControllerError),
    /// A move ended the round.
    Finished(Outcome),
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Serialises commands into a [`MatchController`].
pub struct Orchestrator<R> {
    controller: MatchController<R>,
    delay: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl<R: RandomSource> Orchestrator<R> {
    /// Creates an orchestrator around `controller`.
    pub fn new(
        controller: MatchController<R>,
        delay: Duration,
        commands: mpsc::UnboundedReceiver<Command>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            controller,
            delay,
            commands,
            events,
        }
    }

    /// Runs until [`Command::Quit`] or until the command channel closes.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub async fn run(mut self) -> Result<MatchController<R>> {
        info!("Starting game orchestration");
        self.publish()?;

        // Set once per computer turn so commands during the delay do not extend it.
        let mut deadline: Option<Instant> = None;
        loop {
            let flow = if self.controller.computer_to_move() {
                let due = *deadline.get_or_insert_with(|| Instant::now() + self.delay);
                self.events.send(GameEvent::ComputerThinking)?;
                let wake = tokio::select! {
                    _ = tokio::time::sleep_until(due) => None,
                    command = self.commands.recv() => Some(command),
                };
                match wake {
                    None => {
                        deadline = None;
                        self.computer_turn()?;
                        Flow::Continue
                    }
                    Some(Some(command)) => {
                        debug!(?command, "Command arrived while computer was thinking");
                        if command.starts_new_round() {
                            deadline = None;
                        }
                        self.handle(command)?
                    }
                    Some(None) => Flow::Quit,
                }
            } else {
                deadline = None;
                match self.commands.recv().await {
                    Some(command) => self.handle(command)?,
                    None => Flow::Quit,
                }
            };

            if flow == Flow::Quit {
                info!(tally = %self.controller.tally(), "Orchestration stopped");
                return Ok(self.controller);
            }
        }
    }

    fn handle(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "Handling command");
        match command {
            Command::Play(position) => match self.controller.play(position) {
                Ok(outcome) => self.after_move(outcome)?,
                Err(e) => {
                    warn!(error = %e, %position, "Move rejected");
                    self.events.send(GameEvent::Rejected(e))?;
                }
            },
            Command::Reset => {
                self.controller.reset();
                self.publish()?;
            }
            Command::ClearScores => {
                self.controller.clear_scores();
                self.publish()?;
            }
            Command::SetMode(mode) => {
                self.controller.set_mode(mode);
                self.publish()?;
            }
            Command::ToggleMode => {
                let mode = self.controller.mode().toggle();
                self.controller.set_mode(mode);
                self.publish()?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn computer_turn(&mut self) -> Result<()> {
        match self.controller.play_computer() {
            Ok((position, outcome)) => {
                debug!(%position, "Computer moved");
                self.after_move(outcome)
            }
            Err(e) => {
                warn!(error = %e, "Computer move failed");
                self.events.send(GameEvent::Rejected(e))?;
                Ok(())
            }
        }
    }

    fn after_move(&mut self, outcome: Outcome) -> Result<()> {
        self.publish()?;
        if outcome.is_finished() {
            self.events.send(GameEvent::Finished(outcome))?;
        }
        Ok(())
    }

    fn publish(&self) -> Result<()> {
        self.events
            .send(GameEvent::Updated(self.controller.snapshot()))?;
        Ok(())
    }
}
