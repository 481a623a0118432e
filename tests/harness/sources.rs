//! Action sources that play in place of a human

use std::collections::VecDeque;

use isekai::combat::{Action, ActionSource, Command, TurnReport, TurnView};

/// Attacks every turn
pub struct AlwaysAttack;

impl ActionSource for AlwaysAttack {
    fn next_command(&mut self, _view: &TurnView) -> Command {
        Command::Act(Action::Attack)
    }
}

/// Replays menu codes as a player would type them, then walks away.
/// Every view and report is kept for assertions.
#[derive(Default)]
pub struct Scripted {
    codes: VecDeque<String>,
    pub views: Vec<TurnView>,
    pub reports: Vec<TurnReport>,
}

impl Scripted {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Codes not consumed yet
    pub fn remaining(&self) -> usize {
        self.codes.len()
    }

    /// All narration lines so far
    pub fn transcript(&self) -> Vec<String> {
        self.reports
            .iter()
            .flat_map(|report| report.messages.iter().cloned())
            .collect()
    }
}

impl ActionSource for Scripted {
    fn next_command(&mut self, view: &TurnView) -> Command {
        self.views.push(view.clone());
        match self.codes.pop_front() {
            Some(code) => match code.parse() {
                Ok(action) => Command::Act(action),
                Err(_) => Command::Unrecognized(code),
            },
            None => Command::Abandon,
        }
    }

    fn on_turn(&mut self, report: &TurnReport) {
        self.reports.push(report.clone());
    }
}
