//! A small character transducer engine.
//!
//! The comment and whitespace strippers are state machines over characters.
//! States live in an arena and are addressed by index; each state owns a
//! list of exact character transitions plus a fallback, which is either a
//! wildcard step or a consumer closure that picks the step itself. A step
//! names the next state and what to write for the consumed character.
//!
//! Graphs are built once and never mutated afterwards; the per-run mutable
//! pieces (bracket-level counters) travel in [`Counters`], so one shared
//! graph can serve concurrent runs.

pub type StateId = usize;

/// What a transition writes for the character it consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Copy the character through.
    Verbatim,
    /// Write nothing.
    Suppress,
    /// Write this text instead of the character.
    Literal(String),
}

/// A resolved transition: where to go and what to write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub state: StateId,
    pub action: Action,
}

/// Per-run mutable counters shared by consumer closures.
///
/// The long-bracket traps count `=` characters of the opener and of a
/// candidate closer here.
#[derive(Debug, Default)]
pub struct Counters {
    pub opening: usize,
    pub closing: usize,
}

type Consumer = Box<dyn Fn(&Transducer, &mut Counters, char) -> Step + Send + Sync>;

enum Fallback {
    Step(Step),
    Consumer(Consumer),
}

struct State {
    exact: Vec<(char, Step)>,
    fallback: Fallback,
}

pub struct Transducer {
    states: Vec<State>,
    initial: StateId,
}

impl Transducer {
    pub fn new() -> Self {
        Transducer {
            states: Vec::new(),
            initial: 0,
        }
    }

    /// Adds a state. Until configured otherwise it stays in itself and
    /// copies every character verbatim.
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len();
        self.states.push(State {
            exact: Vec::new(),
            fallback: Fallback::Step(Step {
                state: id,
                action: Action::Verbatim,
            }),
        });
        id
    }

    /// The state a run starts in.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Adds an exact character transition. Exact transitions win over the
    /// state's fallback.
    pub fn exact(&mut self, from: StateId, c: char, to: StateId, action: Action) {
        self.states[from].exact.push((c, Step { state: to, action }));
    }

    /// Replaces the state's fallback with a wildcard step.
    pub fn any(&mut self, from: StateId, to: StateId, action: Action) {
        self.states[from].fallback = Fallback::Step(Step { state: to, action });
    }

    /// Replaces the state's fallback with a consumer closure. The closure
    /// may resolve through another state (to re-dispatch a restored
    /// character) and may update the run counters.
    pub fn consumer(
        &mut self,
        from: StateId,
        consume: impl Fn(&Transducer, &mut Counters, char) -> Step + Send + Sync + 'static,
    ) {
        self.states[from].fallback = Fallback::Consumer(Box::new(consume));
    }

    /// Resolves one character in one state: exact transitions first, then
    /// the fallback.
    pub fn resolve(&self, state: StateId, counters: &mut Counters, c: char) -> Step {
        let state = &self.states[state];
        for (exact, step) in &state.exact {
            if *exact == c {
                return step.clone();
            }
        }
        match &state.fallback {
            Fallback::Step(step) => step.clone(),
            Fallback::Consumer(consume) => consume(self, counters, c),
        }
    }

    /// Feeds the whole input through the machine, returning the output and
    /// the state the run ended in.
    pub fn run(&self, input: &str) -> (String, StateId) {
        let mut output = String::with_capacity(input.len());
        let mut counters = Counters::default();
        let mut state = self.initial;
        for c in input.chars() {
            let step = self.resolve(state, &mut counters, c);
            match step.action {
                Action::Verbatim => output.push(c),
                Action::Suppress => {}
                Action::Literal(text) => output.push_str(&text),
            }
            state = step.state;
        }
        (output, state)
    }
}

/// Combines restored text with the action a re-dispatched character
/// resolved to, yielding the action for the restoring transition.
pub fn prefixed(prefix: &str, action: Action, c: char) -> Action {
    match action {
        Action::Verbatim => {
            let mut text = String::from(prefix);
            text.push(c);
            Action::Literal(text)
        }
        Action::Suppress => Action::Literal(String::from(prefix)),
        Action::Literal(text) => Action::Literal(format!("{}{}", prefix, text)),
    }
}
