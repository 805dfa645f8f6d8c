mod logger;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A verbosity level used to gate `#[cfg(debug_assertions)]` trace output
/// from the section-processor driver.
pub enum Log<T> {
    None,
    Default(T),
    Success(T),
    Result(T),
    Verbose(T),
}
