//! Comment and whitespace removal.
//!
//! Both passes are transducer graphs sharing the same literal traps: quoted
//! strings (with an unconditional escape state, so `\'` does not end the
//! trap) and long-bracket strings (level-counted, so `]=]` only closes a
//! `[=[` opener). Content inside a trap passes through verbatim.
//!
//! The comment pass replaces a line comment's text but re-emits its
//! terminating newline, and summarizes a newline-containing long comment as
//! a single newline, so line numbers in later error reports still match the
//! original text.
//!
//! The graphs are built once and shared; see [`crate::transducer`].

use std::sync::OnceLock;

use crate::error::{Error, ErrorKind, Result};
use crate::transducer::{prefixed, Action, StateId, Step, Transducer};

struct LongTrap {
    content: StateId,
    closing: StateId,
    content_newline: StateId,
    closing_newline: StateId,
}

struct CommentMachine {
    machine: Transducer,
    comment: LongTrap,
}

fn pass(emit: bool) -> Action {
    if emit {
        Action::Verbatim
    } else {
        Action::Suppress
    }
}

/// Wires a quoted-string trap onto `source`.
fn add_quote_trap(machine: &mut Transducer, source: StateId, quote: char) {
    let content = machine.add_state();
    let escape = machine.add_state();
    machine.exact(source, quote, content, Action::Verbatim);
    machine.exact(content, quote, source, Action::Verbatim);
    machine.exact(content, '\\', escape, Action::Verbatim);
    machine.any(escape, content, Action::Verbatim);
}

/// Wires a long-bracket trap onto `open_from`. With `emit` the trap copies
/// a long string through verbatim; without it the trap swallows a long
/// comment, re-emitting one newline on close when the body contained any.
///
/// A character that breaks the `[=*[` opener resets the level counter. The
/// verbatim trap keeps that character as-is (it may be the whitespace
/// separating a bracketed table key from a long-bracket string); the
/// suppressing trap re-dispatches it through `failure`, so a newline still
/// terminates the enclosing line comment.
fn add_long_trap(
    machine: &mut Transducer,
    open_from: StateId,
    exit_to: StateId,
    failure: StateId,
    emit: bool,
) -> LongTrap {
    let identifier = machine.add_state();
    let content = machine.add_state();
    let closing = machine.add_state();
    let (content_newline, closing_newline) = if emit {
        (content, closing)
    } else {
        (machine.add_state(), machine.add_state())
    };

    machine.exact(open_from, '[', identifier, pass(emit));
    machine.consumer(identifier, move |m, counters, c| match c {
        '=' => {
            counters.opening += 1;
            Step {
                state: identifier,
                action: pass(emit),
            }
        }
        '[' => Step {
            state: content,
            action: pass(emit),
        },
        _ => {
            counters.opening = 0;
            if emit {
                Step {
                    state: failure,
                    action: Action::Verbatim,
                }
            } else {
                m.resolve(failure, counters, c)
            }
        }
    });

    machine.any(content, content, pass(emit));
    machine.exact(content, ']', closing, pass(emit));
    if !emit {
        machine.exact(content, '\n', content_newline, Action::Suppress);
        machine.any(content_newline, content_newline, Action::Suppress);
        machine.exact(content_newline, ']', closing_newline, Action::Suppress);
    }

    machine.consumer(closing, move |_, counters, c| match c {
        '=' => {
            counters.closing += 1;
            Step {
                state: closing,
                action: pass(emit),
            }
        }
        ']' => {
            if counters.closing == counters.opening {
                counters.opening = 0;
                counters.closing = 0;
                Step {
                    state: exit_to,
                    action: pass(emit),
                }
            } else {
                // a fresh closing run starts at this bracket
                counters.closing = 0;
                Step {
                    state: closing,
                    action: pass(emit),
                }
            }
        }
        '\n' if !emit => {
            counters.closing = 0;
            Step {
                state: content_newline,
                action: Action::Suppress,
            }
        }
        _ => {
            counters.closing = 0;
            Step {
                state: content,
                action: pass(emit),
            }
        }
    });

    if !emit {
        machine.consumer(closing_newline, move |_, counters, c| match c {
            '=' => {
                counters.closing += 1;
                Step {
                    state: closing_newline,
                    action: Action::Suppress,
                }
            }
            ']' => {
                if counters.closing == counters.opening {
                    counters.opening = 0;
                    counters.closing = 0;
                    Step {
                        state: exit_to,
                        action: Action::Literal("\n".to_string()),
                    }
                } else {
                    counters.closing = 0;
                    Step {
                        state: closing_newline,
                        action: Action::Suppress,
                    }
                }
            }
            _ => {
                counters.closing = 0;
                Step {
                    state: content_newline,
                    action: Action::Suppress,
                }
            }
        });
    }

    LongTrap {
        content,
        closing,
        content_newline,
        closing_newline,
    }
}

fn build_comment_machine() -> CommentMachine {
    let mut machine = Transducer::new();
    let initial = machine.add_state();
    let dash = machine.add_state();
    let comment = machine.add_state();
    let comment_content = machine.add_state();

    machine.exact(initial, '-', dash, Action::Suppress);
    add_quote_trap(&mut machine, initial, '\'');
    add_quote_trap(&mut machine, initial, '"');
    add_long_trap(&mut machine, initial, initial, initial, true);

    // A single '-' is restored together with the character after it, which
    // is dispatched as if it had arrived in the initial state.
    machine.exact(dash, '-', comment, Action::Suppress);
    machine.consumer(dash, |m, counters, c| {
        let step = m.resolve(m.initial(), counters, c);
        Step {
            state: step.state,
            action: prefixed("-", step.action, c),
        }
    });

    machine.exact(comment, '\n', initial, Action::Verbatim);
    machine.any(comment, comment_content, Action::Suppress);
    let trap = add_long_trap(&mut machine, comment, initial, comment_content, false);

    machine.exact(comment_content, '\n', initial, Action::Verbatim);
    machine.any(comment_content, comment_content, Action::Suppress);

    CommentMachine {
        machine,
        comment: trap,
    }
}

fn build_whitespace_machine() -> Transducer {
    let mut machine = Transducer::new();
    let initial = machine.add_state();

    machine.exact(initial, ' ', initial, Action::Suppress);
    machine.exact(initial, '\t', initial, Action::Suppress);
    machine.exact(initial, '\n', initial, Action::Suppress);
    add_quote_trap(&mut machine, initial, '\'');
    add_quote_trap(&mut machine, initial, '"');
    add_long_trap(&mut machine, initial, initial, initial, true);

    machine
}

fn comment_machine() -> &'static CommentMachine {
    static MACHINE: OnceLock<CommentMachine> = OnceLock::new();
    MACHINE.get_or_init(build_comment_machine)
}

fn whitespace_machine() -> &'static Transducer {
    static MACHINE: OnceLock<Transducer> = OnceLock::new();
    MACHINE.get_or_init(build_whitespace_machine)
}

/// Removes Lua comments while leaving string literals and line numbering
/// intact.
///
/// A line comment is replaced by its terminating newline; a long comment
/// vanishes entirely unless its body spans lines, in which case a single
/// newline takes its place.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luon::strip_comments("10--[[comment]]0"), "100");
/// assert_eq!(
///     luon::strip_comments("some--[=[comment\n]=]next line"),
///     "some\nnext line"
/// );
/// assert_eq!(luon::strip_comments("'--not a comment'"), "'--not a comment'");
/// ```
pub fn strip_comments(input: &str) -> String {
    comment_machine().machine.run(input).0
}

/// Removes spaces, tabs and newlines outside string literals.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luon::strip_whitespace("{ 1 , 2 }"), "{1,2}");
/// assert_eq!(luon::strip_whitespace("'some tests'"), "'some tests'");
/// assert_eq!(
///     luon::strip_whitespace("[===[some tests]===]"),
///     "[===[some tests]===]"
/// );
/// ```
pub fn strip_whitespace(input: &str) -> String {
    whitespace_machine().run(input).0
}

/// Comment removal for the reader: fails if the input ends inside an
/// unterminated long comment.
pub(crate) fn strip_for_reader(input: &str) -> Result<String> {
    let stripper = comment_machine();
    let (output, state) = stripper.machine.run(input);
    let unterminated = state == stripper.comment.content
        || state == stripper.comment.closing
        || state == stripper.comment.content_newline
        || state == stripper.comment.closing_newline;
    if unterminated {
        let (mut line, mut col) = (1, 1);
        for c in input.chars() {
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        return Err(Error::parse(ErrorKind::UnclosedLongComment, line, col));
    }
    Ok(output)
}
