/// Every user-facing line the application prints.
///
/// Text lives in [`Display`](std::fmt::Display) (see `display.rs`) so wording
/// changes never touch the call sites.
#[derive(Debug, Clone)]
pub enum Message {
    // === INTERVAL MESSAGES ===
    IntervalStarted(String, String),         // category, planned
    IntervalResumed(String, String, String), // category, elapsed, planned
    IntervalTick(String, String, String),    // category, elapsed, planned
    IntervalCompleted(String),               // category
    IntervalCancelled(String),               // category
    IntervalPaused(String, String),          // category, elapsed
    IntervalAlreadyRunning(i64),
    IntervalsCompletedHint,
    NoIntervalToPause,
    NoIntervalsYet,
    NextIntervalCategory(String),
    IntervalStatusHeader,
    CtrlCListenFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseFailed(String),
    ConfigModuleIntervals,
    ConfigModuleStorage,
    MemoryStorageNotShared,

    // === PROMPTS ===
    PromptPomodoroDuration,
    PromptShortBreakDuration,
    PromptLongBreakDuration,
    PromptStorageBackend,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
