// Same scheme as the `windowing` crate: `tracing` behind the feature, nothing otherwise.
macro_rules! alog {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!(target: "windowing_adapter", $($arg)+);
        }
    };
}

macro_rules! atrace {
    ($($arg:tt)+) => { alog!(trace, $($arg)+) };
}

macro_rules! adebug {
    ($($arg:tt)+) => { alog!(debug, $($arg)+) };
}

macro_rules! awarn {
    ($($arg:tt)+) => { alog!(warn, $($arg)+) };
}
