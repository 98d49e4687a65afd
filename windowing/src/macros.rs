// Logging goes through `tracing` only with the `tracing` feature; otherwise every call site
// expands to nothing and its arguments are never evaluated.
macro_rules! wlog {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!(target: "windowing", $($arg)+);
        }
    };
}

macro_rules! wtrace {
    ($($arg:tt)+) => { wlog!(trace, $($arg)+) };
}

macro_rules! wdebug {
    ($($arg:tt)+) => { wlog!(debug, $($arg)+) };
}

macro_rules! wwarn {
    ($($arg:tt)+) => { wlog!(warn, $($arg)+) };
}
