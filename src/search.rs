use crate::direction::{Direction, MoveHistory};
use crate::game::GameState;
use log::{debug, info};
use std::ops::ControlFlow;
use std::rc::Rc;

/// Receives the events of a walk.
pub trait Reporter {
    /// Called for every state produced, before it is expanded.
    fn explored(&mut self, _state: &GameState) {}

    /// A state reached the exit. `Break` ends the walk early.
    fn solved(&mut self, history: &MoveHistory) -> ControlFlow<()>;

    /// The stack ran dry.
    fn exhausted(&mut self);
}

struct WorkItem {
    state: Rc<GameState>,
    direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub explored: usize,
    pub wins: usize,
    pub first_win: Option<MoveHistory>,
    /// Every reachable state (within the depth limit) was visited. Independent
    /// of `wins`: a walk that is not stopped reports both.
    pub exhausted: bool,
}

/// Depth-first walk over reachable states.
///
/// Siblings share their parent through an `Rc`; a child is only materialised
/// when its work item is popped. There is no revisit detection, so without a
/// depth limit a walk over boards that keep regenerating hearts may not end.
pub struct Search {
    stack: Vec<WorkItem>,
    max_depth: Option<usize>,
}

impl Search {
    pub fn new(root: GameState) -> Self {
        let mut search = Self {
            stack: Vec::new(),
            max_depth: None,
        };
        search.push_moves(Rc::new(root));
        search
    }

    /// States whose history already holds `max_depth` moves are not expanded.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Runs until the stack is empty or the reporter breaks. A stopped search
    /// keeps its stack; calling `run` again resumes where it left off.
    pub fn run<R: Reporter>(&mut self, reporter: &mut R) -> SearchOutcome {
        let mut outcome = SearchOutcome::default();
        info!(
            "searching with {} pending moves, depth limit {:?}",
            self.stack.len(),
            self.max_depth
        );

        while let Some(item) = self.stack.pop() {
            let child = item.state.make_move(item.direction);
            outcome.explored += 1;
            reporter.explored(&child);

            let mut stop = false;
            if child.is_win() {
                outcome.wins += 1;
                info!(
                    "exit reached after {} states: {}(health {}, gold {})",
                    outcome.explored,
                    child.history(),
                    child.health(),
                    child.gold()
                );
                if outcome.first_win.is_none() {
                    outcome.first_win = Some(child.history().clone());
                }
                stop = reporter.solved(child.history()).is_break();
            }

            if child.is_loss() {
                debug!("dead end at {}: health {}", child.history(), child.health());
            } else if self.within_depth(&child) {
                self.push_moves(Rc::new(child));
            }

            if stop {
                info!("search stopped with {} moves pending", self.pending());
                return outcome;
            }
        }

        info!(
            "search exhausted after {} states, {} wins",
            outcome.explored, outcome.wins
        );
        outcome.exhausted = true;
        reporter.exhausted();
        outcome
    }

    fn within_depth(&self, state: &GameState) -> bool {
        self.max_depth
            .map_or(true, |limit| state.history().len() < limit)
    }

    fn push_moves(&mut self, state: Rc<GameState>) {
        let moves = state.available_moves();
        if state.history().is_empty() {
            debug!("root offers {:?}", moves);
        } else {
            debug!(
                "expanding '{}' at cursor {} with {:?}",
                state.history(),
                state.cursor(),
                moves
            );
        }
        for direction in moves {
            self.stack.push(WorkItem {
                state: Rc::clone(&state),
                direction,
            });
        }
    }
}
