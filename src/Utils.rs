/// terminal logging with simplelog
pub mod logger;
