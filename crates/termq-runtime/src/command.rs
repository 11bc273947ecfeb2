#![forbid(unsafe_code)]

//! Deferred side effects executed by the runtime scheduler.

/// Commands represent side effects to be executed by the runtime.
///
/// Commands are returned from `init()` and `update()` to trigger actions
/// like quitting, sending messages, or running background work. The
/// scheduler executes them independently of the event loop; any resulting
/// message is delivered back into the single-threaded `update()` cycle.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Quit the application.
    Quit,
    /// Send a message to the model.
    Msg(M),
    /// Execute multiple commands as a batch.
    Batch(Vec<Cmd<M>>),
    /// Run a closure off the event loop.
    ///
    /// The closure runs concurrently with other pending commands; its
    /// return value is sent back to the model as a message.
    Task(Box<dyn FnOnce() -> M + Send>),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Task(_) => write!(f, "Task(..)"),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a batch of commands. Empty batches collapse to `None`,
    /// single-element batches to the element itself.
    pub fn batch(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }

    /// Create a background task command.
    ///
    /// When the scheduler runs the closure, the returned message is sent
    /// back to the model's `update()`.
    pub fn task<F>(f: F) -> Self
    where
        F: FnOnce() -> M + Send + 'static,
    {
        Self::Task(Box::new(f))
    }

    /// Return a stable name for telemetry and tracing.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Quit => "Quit",
            Self::Msg(_) => "Msg",
            Self::Batch(_) => "Batch",
            Self::Task(_) => "Task",
        }
    }

    /// Count the atomic commands in this command.
    ///
    /// Returns 0 for `None`, 1 for atomic commands, and recurses into
    /// batches.
    pub fn count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Batch(cmds) => cmds.iter().map(Self::count).sum(),
            _ => 1,
        }
    }
}
